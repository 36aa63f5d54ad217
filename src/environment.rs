use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Where the transactions API lives.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// API running on the developer machine.
    #[default]
    Local,
    /// Any other deployment, addressed by its base URL.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the base URL of the transactions API for this environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:3333".to_string(),
            Environment::Custom { api_url } => api_url.clone(),
        }
    }

    /// Resolves the environment from the `FINANCES_ENVIRONMENT` variable, falling back to
    /// [`Environment::Local`] when it is unset or unparseable.
    pub fn from_env() -> Self {
        std::env::var("FINANCES_ENVIRONMENT")
            .ok()
            .and_then(|value| value.parse::<Environment>().ok())
            .unwrap_or_default()
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return Ok(Environment::Custom {
                api_url: trimmed.to_string(),
            });
        }
        match trimmed.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}
