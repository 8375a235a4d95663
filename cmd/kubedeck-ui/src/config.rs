use clap::Parser;
use pkg_constants::network::{DEFAULT_API_ADDR, DEFAULT_API_TOKEN};
use pkg_constants::paths::DEFAULT_UI_CONFIG;
use pkg_types::config::{load_config_file, DashboardConfigFile};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "kubedeck-ui", about = "kubedeck dashboard server")]
pub struct Cli {
    /// Path to YAML config file
    #[arg(long, short, env = "KUBEDECK_CONFIG", default_value = DEFAULT_UI_CONFIG)]
    config: String,

    /// Cluster API endpoint
    #[arg(long, env = "KUBEDECK_SERVER")]
    server: Option<String>,

    /// Bearer token for the cluster API
    #[arg(long, env = "KUBEDECK_TOKEN")]
    token: Option<String>,

    /// Namespace selected when a session starts
    #[arg(long, env = "KUBEDECK_NAMESPACE")]
    namespace: Option<String>,
}

/// Resolved server-side settings.
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    pub server: String,
    pub token: String,
    pub namespace: String,
}

impl UiConfig {
    /// Merge: CLI args / env > config file > defaults
    pub fn resolve(cli: Cli, file: DashboardConfigFile) -> Self {
        Self {
            server: cli
                .server
                .or(file.server)
                .unwrap_or_else(|| DEFAULT_API_ADDR.to_string()),
            token: cli
                .token
                .or(file.token)
                .unwrap_or_else(|| DEFAULT_API_TOKEN.to_string()),
            namespace: cli.namespace.or(file.namespace).unwrap_or_default(),
        }
    }
}

pub fn load() -> anyhow::Result<UiConfig> {
    let cli = Cli::parse();
    let file: DashboardConfigFile = load_config_file(&cli.config)?;
    info!("Config file: {}", cli.config);

    let cfg = UiConfig::resolve(cli, file);
    info!("Starting kubedeck-ui");
    info!("  API server: {}", cfg.server);
    info!(
        "  Token:      {}***",
        cfg.token.chars().take(4).collect::<String>()
    );
    if !cfg.namespace.is_empty() {
        info!("  Namespace:  {}", cfg.namespace);
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["kubedeck-ui"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn cli_wins_over_file() {
        let file = DashboardConfigFile {
            server: Some("http://file:6443".to_string()),
            token: Some("file-token".to_string()),
            namespace: Some("file-ns".to_string()),
        };
        let cfg = UiConfig::resolve(
            cli(&["--server", "http://cli:6443", "--namespace", "cli-ns"]),
            file,
        );
        assert_eq!(cfg.server, "http://cli:6443");
        assert_eq!(cfg.token, "file-token");
        assert_eq!(cfg.namespace, "cli-ns");
    }

    #[test]
    fn defaults_fill_the_gaps() {
        let cfg = UiConfig::resolve(
            cli(&["--server", "http://cli:6443", "--token", "t"]),
            DashboardConfigFile::default(),
        );
        assert_eq!(cfg.server, "http://cli:6443");
        assert_eq!(cfg.token, "t");
        assert_eq!(cfg.namespace, "");
    }
}
