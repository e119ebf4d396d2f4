// Domain layer - configuration schema and view models
pub mod app_config;
pub mod chart;
pub mod custom_data;
pub mod dashboard;
pub mod icon;
pub mod panel;
