use std::time::Duration;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};
use url::Url;

use crate::endpoint::{DEV_ENDPOINT, Endpoints, EnvironmentProbe, PROD_BASE_PATH};
use crate::http::ClientConfig;

#[derive(Parser)]
#[command(about = "Blocks API client - resolve the API endpoint and talk to it")]
pub struct Cli {
    #[command(flatten)]
    pub settings: Settings,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone)]
pub struct Settings {
    /// Hostname of the serving document; unset means no browser context
    #[arg(long, global = true, env = "BLOCKS_HOSTNAME")]
    pub hostname: Option<String>,

    /// Base URL used when the hostname is local
    #[arg(long, global = true, env = "BLOCKS_DEV_ENDPOINT", default_value = DEV_ENDPOINT)]
    pub dev_endpoint: String,

    /// Base path used everywhere else
    #[arg(long, global = true, env = "BLOCKS_API_BASE", default_value = PROD_BASE_PATH)]
    pub api_base: String,

    /// Origin that a root-relative base path is resolved against
    #[arg(long, global = true, env = "BLOCKS_ORIGIN")]
    pub origin: Option<Url>,

    /// Request timeout in milliseconds
    #[arg(long, global = true, env = "BLOCKS_TIMEOUT_MS", default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Keep cookies and send them back on later requests
    #[arg(
        long,
        global = true,
        env = "BLOCKS_WITH_CREDENTIALS",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub with_credentials: bool,
}

impl Settings {
    pub fn probe(&self) -> EnvironmentProbe {
        EnvironmentProbe::from_hostname(self.hostname.as_deref())
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            development: self.dev_endpoint.clone(),
            production: self.api_base.clone(),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_millis(self.timeout_ms),
            with_credentials: self.with_credentials,
            origin: self.origin.clone(),
            ..ClientConfig::resolve(&self.probe(), &self.endpoints())
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the base URL requests will target
    Resolve,
    /// Create a question/answer block
    Create {
        /// Question text
        #[arg(short, long)]
        question: Option<String>,
        /// Answer text
        #[arg(short, long)]
        answer: Option<String>,
        /// Comma-separated tags
        #[arg(short, long, default_value = "")]
        tags: String,
    },
    /// GET a path relative to the base URL and print the body
    Get {
        /// Request path, e.g. /tags
        path: String,
    },
}
