// Configuration-driven dashboard composition: schema, component registry,
// composition resolver and chart normalization, served over HTTP.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
