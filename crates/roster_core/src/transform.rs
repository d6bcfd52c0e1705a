use crate::{Item, RosterRow};

/// Pure transform step: drops items without a usable label, then orders the
/// rest by `(group_id, label)` ascending.
///
/// The sort is stable, so items with equal keys keep their wire order. Labels
/// are matched against the blank predicate after trimming but are published
/// verbatim.
pub fn prepare_roster(items: Vec<Item>) -> Vec<RosterRow> {
    let mut rows: Vec<RosterRow> = items.into_iter().filter_map(into_row).collect();
    rows.sort_by(|a, b| {
        a.group_id
            .cmp(&b.group_id)
            .then_with(|| a.label.cmp(&b.label))
    });
    rows
}

fn into_row(item: Item) -> Option<RosterRow> {
    let label = item.name?;
    if label.trim().is_empty() {
        return None;
    }
    Some(RosterRow {
        id: item.id,
        group_id: item.list_id,
        label,
    })
}
