use crate::adapters::NAVIGATION_ID_PARAM;
use crate::domain::model::InternalRequest;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "navigation-page")]
#[command(about = "Assemble a storefront navigation page from a TOML fixture")]
pub struct CliConfig {
    #[arg(long, default_value = "storefront.toml")]
    pub config: PathBuf,

    #[arg(long, help = "Navigation entry to activate (defaults to the root entry)")]
    pub navigation_id: Option<String>,

    #[arg(long, default_value = "/")]
    pub path: String,

    #[arg(long, help = "Pretty-print the assembled page")]
    pub pretty: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn request(&self) -> InternalRequest {
        let request = InternalRequest::new(self.path.clone());
        match &self.navigation_id {
            Some(id) => request.with_param(NAVIGATION_ID_PARAM, id.clone()),
            None => request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args_into_request() {
        let config = CliConfig::parse_from([
            "navigation-page",
            "--config",
            "fixture.toml",
            "--navigation-id",
            "shoes",
            "--path",
            "/shoes",
        ]);

        assert_eq!(config.config, PathBuf::from("fixture.toml"));
        let request = config.request();
        assert_eq!(request.path, "/shoes");
        assert_eq!(request.param(NAVIGATION_ID_PARAM), Some("shoes"));
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["navigation-page"]);
        assert_eq!(config.config, PathBuf::from("storefront.toml"));
        assert!(!config.pretty);
        assert!(config.request().params.is_empty());
    }
}
