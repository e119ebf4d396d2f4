// Application layer - composition, resolution and rendering use cases
pub mod chart_interpreter;
pub mod dashboard_service;
pub mod registry;
pub mod renderable;
pub mod resolver;
pub mod streaming_service;
