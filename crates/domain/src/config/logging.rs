use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Extra `EnvFilter` directives, e.g. `"direct_dns_infrastructure=debug"`.
    #[serde(default)]
    pub module_levels: Vec<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            module_levels: Vec::new(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
