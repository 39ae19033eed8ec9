use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillConfig {
    pub server: ServerConfig,
    /// Skill id requests must target. `None` accepts any application.
    pub application_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Parse a port override, keeping `fallback` when unset or invalid.
pub fn parse_port(raw: Option<&str>, fallback: u16) -> u16 {
    match raw {
        None => fallback,
        Some(raw) => raw.trim().parse().unwrap_or_else(|err| {
            tracing::warn!(value = raw, error = %err, fallback, "ignoring invalid VS_PORT");
            fallback
        }),
    }
}

impl SkillConfig {
    /// Read overrides from `VS_HOST`, `VS_PORT` and `VS_APPLICATION_ID`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server: ServerConfig {
                host: std::env::var("VS_HOST").unwrap_or(defaults.server.host),
                port: parse_port(std::env::var("VS_PORT").ok().as_deref(), defaults.server.port),
            },
            application_id: std::env::var("VS_APPLICATION_ID")
                .ok()
                .filter(|id| !id.is_empty()),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Whether a request carrying `application_id` may be served.
    pub fn accepts(&self, application_id: Option<&str>) -> bool {
        match &self.application_id {
            Some(expected) => application_id == Some(expected.as_str()),
            None => true,
        }
    }
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 8080,
            },
            application_id: None,
        }
    }
}
