use crate::domain::app_config::AppConfig;
use crate::domain::custom_data::CustomData;
use anyhow::Context;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub paths: PathSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PathSettings {
    #[serde(default = "default_app_config_path")]
    pub app_config: PathBuf,
    #[serde(default = "default_custom_data_path")]
    pub custom_data: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            app_config: default_app_config_path(),
            custom_data: default_custom_data_path(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_app_config_path() -> PathBuf {
    PathBuf::from("config/app.toml")
}

fn default_custom_data_path() -> PathBuf {
    PathBuf::from("config/custom_data.toml")
}

/// Server settings from `config/server` (optional), overridden by
/// `DASHBOARD__SERVER__PORT`-style environment variables.
pub fn load_server_config() -> anyhow::Result<ServerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/server").required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Load and validate the application schema. Any `SchemaError` is fatal.
pub fn load_app_config(path: &Path) -> anyhow::Result<AppConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read app config {}", path.display()))?;
    parse_app_config(&contents).with_context(|| format!("Invalid app config {}", path.display()))
}

pub fn parse_app_config(contents: &str) -> anyhow::Result<AppConfig> {
    Ok(toml::from_str(contents)?)
}

/// Load auxiliary data; a missing file yields an empty store.
pub fn load_custom_data(path: &Path) -> anyhow::Result<CustomData> {
    if !path.exists() {
        tracing::info!("No custom data at {}, starting with an empty store", path.display());
        return Ok(CustomData::new());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read custom data {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("Invalid custom data {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::ChartType;
    use crate::domain::icon::Icon;

    #[test]
    fn test_shipped_app_config_is_valid() {
        let config = parse_app_config(include_str!("../../config/app.toml")).unwrap();

        let ids: Vec<&str> = config.tabs().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["prospectManagement", "analysisTools", "reporting"]);
        assert_eq!(config.tabs()[0].icon, Icon::glyph("briefcase"));
        assert_eq!(config.company_name, "Somebody Digital");
        assert_eq!(config.clients.len(), 3);
        assert!(config.features.ai_proposal_generation);

        let pie = config.dashboard.chart("proposalStatus").unwrap();
        assert_eq!(pie.kind, ChartType::Pie);
        assert_eq!(pie.data.len(), 3);
        assert_eq!(
            config.analytics.chart("clientGrowth").map(|c| c.kind.clone()),
            Some(ChartType::Bar)
        );
    }

    #[test]
    fn test_shipped_custom_data_is_readable() {
        let data: CustomData = toml::from_str(include_str!("../../config/custom_data.toml")).unwrap();
        assert_eq!(
            data.text_list("proposalStatuses"),
            Some(vec!["Pending", "Active", "Closed"])
        );
        assert_eq!(data.text_list("industryTypes").map(|l| l.len()), Some(5));
    }

    #[test]
    fn test_duplicate_tab_ids_fail_to_load() {
        let toml = r##"
            title = "t"
            companyName = "c"
            primaryColor = "#000"
            secondaryColor = "#fff"

            [[dashboard.tabs]]
            id = "reporting"
            label = "Reporting"

            [[dashboard.tabs]]
            id = "reporting"
            label = "Reporting again"
        "##;

        let err = parse_app_config(toml).unwrap_err();
        assert!(format!("{:#}", err).contains("reuses id 'reporting'"));
    }

    #[test]
    fn test_missing_tabs_fail_to_load() {
        let toml = r##"
            title = "t"
            companyName = "c"
            primaryColor = "#000"
            secondaryColor = "#fff"

            [dashboard]
        "##;

        let err = parse_app_config(toml).unwrap_err();
        assert!(format!("{:#}", err).contains("at least one tab"));
    }

    #[test]
    fn test_missing_custom_data_file_is_empty() {
        let data = load_custom_data(Path::new("config/does-not-exist.toml")).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_server_settings_from_source() {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                "[server]\nport = 9090\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let server: ServerConfig = settings.try_deserialize().unwrap();

        assert_eq!(server.server.port, 9090);
        assert_eq!(server.server.host, "0.0.0.0");
        assert_eq!(server.paths.app_config, PathBuf::from("config/app.toml"));
        assert_eq!(
            server.server.socket_addr().unwrap(),
            "0.0.0.0:9090".parse::<SocketAddr>().unwrap()
        );
    }
}
