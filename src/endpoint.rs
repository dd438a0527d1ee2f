use std::fmt;

pub const DEV_ENDPOINT: &str = "http://127.0.0.1:5000";
pub const PROD_BASE_PATH: &str = "/api";

const LOCAL_HOSTNAMES: [&str; 2] = ["localhost", "127.0.0.1"];

/// What the resolver knows about the context it runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentProbe {
    /// No browser-like context (a plain process, a server render, a CI job).
    Detached,
    /// A context serving a document from `hostname`.
    Hosted { hostname: String },
}

impl EnvironmentProbe {
    pub fn from_hostname(hostname: Option<&str>) -> Self {
        match hostname {
            Some(h) => EnvironmentProbe::Hosted {
                hostname: h.to_string(),
            },
            None => EnvironmentProbe::Detached,
        }
    }

    pub fn is_local(&self) -> bool {
        match self {
            EnvironmentProbe::Hosted { hostname } => LOCAL_HOSTNAMES.contains(&hostname.as_str()),
            EnvironmentProbe::Detached => false,
        }
    }
}

impl fmt::Display for EnvironmentProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvironmentProbe::Detached => write!(f, "detached"),
            EnvironmentProbe::Hosted { hostname } => write!(f, "hosted on {}", hostname),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub development: String,
    pub production: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            development: DEV_ENDPOINT.to_string(),
            production: PROD_BASE_PATH.to_string(),
        }
    }
}

pub fn resolve_base_url(probe: &EnvironmentProbe, endpoints: &Endpoints) -> String {
    if probe.is_local() {
        endpoints.development.clone()
    } else {
        endpoints.production.clone()
    }
}
