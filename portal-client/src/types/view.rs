//! View identifiers

use strum::{AsRefStr, EnumIter, EnumString};

/// Key of a content pane
///
/// The kebab-case form (`report-constructor`) is used in deep links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ViewId {
    Profile,
    Applications,
    Reports,
    Schedule,
    Plan,
    Load,
    News,
    AdminPanel,
    ReportConstructor,
    ReportEditor,
    RequestConstructor,
    RequestEditor,
}

impl ViewId {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// Parse a kebab-case view identifier
    ///
    /// Matching is exact. Unknown identifiers return `None`.
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
