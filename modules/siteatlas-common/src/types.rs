use serde::{Deserialize, Serialize};

/// Status every node created by the importer carries.
pub const ACTIVE_STATUS: &str = "Active";

/// Built-in location categories the importer depends on.
///
/// "State" and "City" tag the upper hierarchy levels; "Data Center" and
/// "Branch" are inferred from site naming conventions. The registry is
/// expected to hold one location type per kind before an import runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    State,
    City,
    DataCenter,
    Branch,
}

impl LocationKind {
    pub const ALL: [LocationKind; 4] = [
        LocationKind::State,
        LocationKind::City,
        LocationKind::DataCenter,
        LocationKind::Branch,
    ];

    /// Canonical registry name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationKind::State => "State",
            LocationKind::City => "City",
            LocationKind::DataCenter => "Data Center",
            LocationKind::Branch => "Branch",
        }
    }
}

impl std::fmt::Display for LocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
