use roster_core::RosterSnapshot;

/// Formats a snapshot for the console, one header per group with the
/// group's rows indented beneath it.
pub fn format_roster(snapshot: &RosterSnapshot) -> String {
    if snapshot.is_initial() {
        return "Roster not loaded yet.\n".to_string();
    }
    if snapshot.rows.is_empty() {
        return "Roster is empty.\n".to_string();
    }

    let mut out = String::new();
    let mut current_group = None;
    for row in &snapshot.rows {
        if current_group != Some(row.group_id) {
            current_group = Some(row.group_id);
            out.push_str(&format!("List {}\n", row.group_id));
        }
        out.push_str(&format!("  {}  {}\n", row.id, row.label));
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use roster_core::{RosterRow, RosterSnapshot};

    use super::format_roster;

    fn row(id: u64, group_id: u32, label: &str) -> RosterRow {
        RosterRow {
            id,
            group_id,
            label: label.to_string(),
        }
    }

    #[test]
    fn initial_snapshot_renders_a_loading_hint() {
        assert_eq!(
            format_roster(&RosterSnapshot::default()),
            "Roster not loaded yet.\n"
        );
    }

    #[test]
    fn published_empty_roster_says_so() {
        let snapshot = RosterSnapshot {
            version: 3,
            rows: Vec::new(),
        };
        assert_eq!(format_roster(&snapshot), "Roster is empty.\n");
    }

    #[test]
    fn rows_are_grouped_under_one_header_per_group() {
        let snapshot = RosterSnapshot {
            version: 1,
            rows: vec![row(2, 1, "Apple"), row(1, 1, "Banana"), row(5, 2, "Cherry")],
        };
        assert_eq!(
            format_roster(&snapshot),
            "List 1\n  2  Apple\n  1  Banana\nList 2\n  5  Cherry\n"
        );
    }
}
