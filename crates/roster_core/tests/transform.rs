use std::sync::Once;

use roster_core::{prepare_roster, Item, RosterRow};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(roster_logging::initialize_for_tests);
}

fn item(id: u64, list_id: u32, name: Option<&str>) -> Item {
    Item {
        id,
        list_id,
        name: name.map(ToOwned::to_owned),
    }
}

fn row(id: u64, group_id: u32, label: &str) -> RosterRow {
    RosterRow {
        id,
        group_id,
        label: label.to_string(),
    }
}

#[test]
fn drops_unusable_labels_and_sorts_by_group_then_label() {
    init_logging();
    let items = vec![
        item(1, 1, Some("Banana")),
        item(2, 1, Some("Apple")),
        item(3, 2, None),
        item(4, 2, Some("")),
        item(5, 2, Some("Cherry")),
    ];

    let rows = prepare_roster(items);

    assert_eq!(
        rows,
        vec![row(2, 1, "Apple"), row(1, 1, "Banana"), row(5, 2, "Cherry")]
    );
}

#[test]
fn empty_input_yields_empty_output() {
    init_logging();
    assert_eq!(prepare_roster(Vec::new()), Vec::new());
}

#[test]
fn whitespace_only_labels_are_dropped() {
    init_logging();
    let items = vec![
        item(1, 1, Some("   ")),
        item(2, 1, Some("\t\n")),
        item(3, 1, Some(" kept ")),
    ];

    let rows = prepare_roster(items);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 3);
}

#[test]
fn all_items_filtered_out_is_empty_not_an_error() {
    init_logging();
    let items = vec![item(1, 1, None), item(2, 2, Some(""))];

    assert_eq!(prepare_roster(items), Vec::new());
}

#[test]
fn group_order_dominates_label_order() {
    init_logging();
    let items = vec![
        item(1, 9, Some("Aardvark")),
        item(2, 1, Some("Zebra")),
        item(3, 4, Some("Mongoose")),
    ];

    let rows = prepare_roster(items);

    assert_eq!(
        rows,
        vec![
            row(2, 1, "Zebra"),
            row(3, 4, "Mongoose"),
            row(1, 9, "Aardvark")
        ]
    );
}

#[test]
fn equal_keys_keep_wire_order() {
    init_logging();
    let items = vec![
        item(30, 5, Some("Same")),
        item(10, 5, Some("Same")),
        item(20, 5, Some("Same")),
    ];

    let rows = prepare_roster(items);

    let ids: Vec<u64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![30, 10, 20]);
}

#[test]
fn labels_are_published_verbatim_not_trimmed() {
    init_logging();
    let items = vec![item(1, 1, Some("  padded  "))];

    let rows = prepare_roster(items);

    assert_eq!(rows, vec![row(1, 1, "  padded  ")]);
}

#[test]
fn preparing_an_already_prepared_roster_changes_nothing() {
    init_logging();
    let items = vec![
        item(7, 3, Some("Pear")),
        item(4, 1, Some("Fig")),
        item(9, 3, Some("Date")),
        item(2, 1, None),
    ];

    let first = prepare_roster(items);
    let again = prepare_roster(
        first
            .iter()
            .map(|r| item(r.id, r.group_id, Some(&r.label)))
            .collect(),
    );

    assert_eq!(again, first);
}
