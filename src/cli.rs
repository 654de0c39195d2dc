// src/cli.rs
use crate::core::config_manager::DEFAULT_CONFIG_FILE;
use crate::core::ConfigOverrides;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "transparency-server")]
#[command(about = "Check job postings for pay, hiring and AI-usage transparency")]
pub struct ServerCli {
    /// Configuration file with `local` and `production` sections
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Section of the configuration file to use
    #[arg(long, env = "TRANSPARENCY_ENV", default_value = "local")]
    pub environment: String,

    #[arg(long, env = "TRANSPARENCY_ADDRESS")]
    pub address: Option<String>,

    #[arg(long, env = "TRANSPARENCY_PORT")]
    pub port: Option<u16>,

    /// Also write JSON logs to this file
    #[arg(long, env = "TRANSPARENCY_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Base URL of the Ollama server
    #[arg(long, env = "OLLAMA_URL")]
    pub ollama_url: Option<String>,

    #[arg(long, env = "OLLAMA_MODEL")]
    pub model: Option<String>,

    /// Upper bound on one inference call, in seconds
    #[arg(long, env = "OLLAMA_TIMEOUT_SECS")]
    pub timeout_seconds: Option<u64>,
}

impl ServerCli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            address: self.address.clone(),
            port: self.port,
            log_file: self.log_file.clone(),
            ollama_url: self.ollama_url.clone(),
            model: self.model.clone(),
            timeout_seconds: self.timeout_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_become_overrides() {
        let cli = ServerCli::parse_from([
            "transparency-server",
            "--port",
            "4100",
            "--model",
            "llama3.1",
            "--timeout-seconds",
            "10",
        ]);

        let overrides = cli.overrides();
        assert_eq!(overrides.port, Some(4100));
        assert_eq!(overrides.model.as_deref(), Some("llama3.1"));
        assert_eq!(overrides.timeout_seconds, Some(10));
        assert_eq!(cli.config, PathBuf::from("config.yaml"));
    }
}
