// Infrastructure layer - configuration loading, concrete components and HTTP encoding
pub mod chunked_json;
pub mod components;
pub mod config;
pub mod http_response;
