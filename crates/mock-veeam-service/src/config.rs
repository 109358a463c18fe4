use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 9999;
pub const DEFAULT_TOKEN_LIFETIME_SECS: u64 = 20;
pub const DEFAULT_LOG_FILE: &str = "/tmp/mock_veeam_server.log";

/// Command-line interface of the mock server.
///
/// The flags mirror what the integration-test driver passes when it
/// launches the server as a subprocess.
#[derive(Debug, Parser)]
#[command(name = "mock-veeam-server", about = "Mock Veeam REST API server")]
pub struct Cli {
    /// Listen host
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Listen port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Access token lifetime in seconds
    #[arg(long = "token-lifetime", default_value_t = DEFAULT_TOKEN_LIFETIME_SECS)]
    pub token_lifetime: u64,

    /// Log file path (truncated at startup, appended to thereafter)
    #[arg(long = "log-file", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

/// Service configuration, fixed at process start.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub token_lifetime_secs: u64,
    pub log_file: PathBuf,
}

impl Config {
    /// Address string suitable for `SocketAddr` parsing.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Access token lifetime as a `Duration`.
    pub fn token_lifetime(&self) -> Duration {
        Duration::from_secs(self.token_lifetime_secs)
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            host: cli.host,
            port: cli.port,
            token_lifetime_secs: cli.token_lifetime,
            log_file: cli.log_file,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            token_lifetime_secs: DEFAULT_TOKEN_LIFETIME_SECS,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}
