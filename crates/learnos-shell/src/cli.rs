use clap::Parser;
use learnos_infrastructure::ConfigOverrides;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "learnos")]
#[command(about = "LearnOS - play your way to understanding", long_about = None)]
pub struct Cli {
    /// Personalization backend base URL (overrides LEARNOS_BACKEND_URL and config.toml)
    #[arg(long, value_name = "URL")]
    pub backend_url: Option<String>,

    /// Read settings from this file instead of ~/.config/learnos/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// HTTP timeout for backend calls, in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            backend_url: self.backend_url.clone(),
            timeout_secs: self.timeout_secs,
            config_path: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_map_to_overrides() {
        let cli = Cli::parse_from([
            "learnos",
            "--backend-url",
            "http://10.0.0.5:8000",
            "--timeout-secs",
            "3",
        ]);
        let overrides = cli.overrides();
        assert_eq!(overrides.backend_url.as_deref(), Some("http://10.0.0.5:8000"));
        assert_eq!(overrides.timeout_secs, Some(3));
        assert!(overrides.config_path.is_none());
    }
}
