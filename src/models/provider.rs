//! Upstream job-board providers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One of the supported listing providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    LinkedIn,
    Naukri,
    Internshala,
}

impl Provider {
    /// All providers, in aggregation order.
    pub const ALL: [Provider; 3] = [Provider::LinkedIn, Provider::Naukri, Provider::Internshala];

    /// Stable lowercase tag, also used as the listing id namespace.
    pub fn tag(&self) -> &'static str {
        match self {
            Provider::LinkedIn => "linkedin",
            Provider::Naukri => "naukri",
            Provider::Internshala => "internshala",
        }
    }

    /// Human-readable provider name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::LinkedIn => "LinkedIn",
            Provider::Naukri => "Naukri",
            Provider::Internshala => "Internshala",
        }
    }

    /// Prefix every canonical id from this provider starts with.
    pub fn id_prefix(&self) -> String {
        format!("{}-", self.tag())
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Provider {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linkedin" => Ok(Provider::LinkedIn),
            "naukri" => Ok(Provider::Naukri),
            "internshala" => Ok(Provider::Internshala),
            _ => Err(AppError::UnknownProvider(s.to_string())),
        }
    }
}
