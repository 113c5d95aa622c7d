//! Card providers and the per-provider rate resolvers

mod resolver;

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FinancingError;

pub use resolver::ProviderRates;

/// Card provider, in the declaration order used for tie-breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Viumi,
    Naranja,
    Payway,
}

impl ProviderId {
    /// All providers in declaration order
    pub const ALL: [ProviderId; 3] = [ProviderId::Viumi, ProviderId::Naranja, ProviderId::Payway];

    /// Name shown to customers
    pub fn display_name(self) -> &'static str {
        match self {
            ProviderId::Viumi => "Viümi Macro",
            ProviderId::Naranja => "Naranja",
            ProviderId::Payway => "Payway",
        }
    }

    /// Identifier accepted by `FromStr`
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderId::Viumi => "viumi",
            ProviderId::Naranja => "naranja",
            ProviderId::Payway => "payway",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ProviderId {
    type Err = FinancingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "viumi" | "viümi" | "macro" => Ok(ProviderId::Viumi),
            "naranja" => Ok(ProviderId::Naranja),
            "payway" => Ok(ProviderId::Payway),
            _ => Err(FinancingError::UnknownProvider(s.to_string())),
        }
    }
}

/// Provider requested by a quote: one specific provider, or the cheapest
///
/// Serializes as the same flat string `FromStr` accepts: `"viumi"`, `"best"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderChoice {
    Provider(ProviderId),
    Best,
}

impl ProviderChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderChoice::Provider(provider) => provider.as_str(),
            ProviderChoice::Best => "best",
        }
    }
}

impl fmt::Display for ProviderChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ProviderChoice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProviderChoice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl From<ProviderId> for ProviderChoice {
    fn from(provider: ProviderId) -> Self {
        ProviderChoice::Provider(provider)
    }
}

impl FromStr for ProviderChoice {
    type Err = FinancingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "best" | "any" => Ok(ProviderChoice::Best),
            _ => s.parse().map(ProviderChoice::Provider),
        }
    }
}

/// Promotion flags selected on a quote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoFlags {
    /// Banco Macro promotion (Viümi only, 3+ installments)
    #[serde(default)]
    pub macro_promo: bool,

    /// MiPyME plan financing (3 and 6 installments)
    #[serde(default)]
    pub mipyme_plan: bool,
}

impl PromoFlags {
    pub const NONE: PromoFlags = PromoFlags {
        macro_promo: false,
        mipyme_plan: false,
    };
}
