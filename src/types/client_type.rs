use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse category of the requesting software.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClientType {
    App,
    Bot,
    Browser,
    #[default]
    Other,
}

impl ClientType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::App => "App",
            Self::Bot => "Bot",
            Self::Browser => "Browser",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
