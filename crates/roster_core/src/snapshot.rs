use crate::RosterRow;

pub type Version = u64;

/// One immutable materialization of the prepared roster.
///
/// A snapshot is only ever replaced wholesale; its rows are already filtered
/// and sorted, so consumers render them as-is. The version grows with every
/// install and never moves backwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RosterSnapshot {
    pub version: Version,
    pub rows: Vec<RosterRow>,
}

impl RosterSnapshot {
    /// True until the first successful refresh has published anything.
    ///
    /// Lets a consumer tell "still loading" apart from "loaded, and the
    /// roster is genuinely empty".
    pub fn is_initial(&self) -> bool {
        self.version == 0
    }
}
