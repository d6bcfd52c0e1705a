use serde::Deserialize;

/// One entry as it arrives from the remote list.
///
/// `name` is optional on the wire: both a JSON `null` and a missing field
/// decode to `None`. Unknown fields in a wire object are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub id: u64,
    #[serde(rename = "listId")]
    pub list_id: u32,
    #[serde(default)]
    pub name: Option<String>,
}

/// One element of the published roster.
///
/// Unlike [`Item`], the label is guaranteed present and non-blank; items
/// without a usable name never make it past [`prepare_roster`].
///
/// [`prepare_roster`]: crate::prepare_roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    pub id: u64,
    pub group_id: u32,
    pub label: String,
}
