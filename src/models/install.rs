//! Install catalog entries.

use serde::Deserialize;

use super::Os;

/// Platform an install method applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Linux,
    #[serde(rename = "macos")]
    MacOs,
    Windows,
    /// Works everywhere; never picked as a platform recommendation.
    All,
}

impl Target {
    /// The single OS this target is restricted to, if any.
    pub fn os(self) -> Option<Os> {
        match self {
            Self::Linux => Some(Os::Linux),
            Self::MacOs => Some(Os::MacOs),
            Self::Windows => Some(Os::Windows),
            Self::All => None,
        }
    }
}

/// One way of installing Chatuino.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallMethod {
    pub id: String,
    pub name: String,
    pub os: Target,
    /// Recommended method for its platform (at most one per OS).
    #[serde(default)]
    pub primary: bool,
    /// Shell command shown in a copyable code block.
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub link_text: Option<String>,
}

impl InstallMethod {
    /// Whether this is the recommended method for `os`.
    pub fn is_primary_for(&self, os: Os) -> bool {
        self.primary && self.os.os() == Some(os)
    }
}
