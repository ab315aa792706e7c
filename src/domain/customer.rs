use serde::{Deserialize, Serialize};
use std::fmt;

pub const BASIC_LABEL: &str = "basic";
pub const PREMIUM_LABEL: &str = "premium";
pub const VIP_LABEL: &str = "vip";

pub const BASIC_DESCRIPTION: &str = "Cliente Base";
pub const PREMIUM_DESCRIPTION: &str = "Cliente Premium (15% sconto base)";
pub const VIP_DESCRIPTION: &str = "Cliente VIP (25% sconto base)";
pub const UNKNOWN_DESCRIPTION: &str = "Tipo cliente sconosciuto";

/// Customer classification driving the per-unit discount.
///
/// Parsing a label never fails: anything that is not a known tier becomes
/// `Unknown`, which is priced like `Basic` but described differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerTier {
    #[default]
    Basic,
    Premium,
    Vip,
    #[serde(other)]
    Unknown,
}

impl CustomerTier {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            BASIC_LABEL => CustomerTier::Basic,
            PREMIUM_LABEL => CustomerTier::Premium,
            VIP_LABEL => CustomerTier::Vip,
            _ => CustomerTier::Unknown,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CustomerTier::Basic => BASIC_DESCRIPTION,
            CustomerTier::Premium => PREMIUM_DESCRIPTION,
            CustomerTier::Vip => VIP_DESCRIPTION,
            CustomerTier::Unknown => UNKNOWN_DESCRIPTION,
        }
    }
}

impl From<&str> for CustomerTier {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

impl fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
