//! Tests for table sorting.

use veneer::sort_table;
use veneer::table::{Column, Row, SortDirection, Table};

fn directory() -> Table {
    let columns = vec![
        Column::new("Name", 20).sortable(),
        Column::new("Department", 16).sortable(),
        Column::new("Reports", 8).sortable(),
    ];
    let rows = vec![
        Row::new("e1", vec!["Craig".into(), "Sales".into(), "10".into()]),
        Row::new("e2", vec!["alice".into(), "Engineering".into(), "2".into()]),
        Row::new("e3", vec!["Bob".into(), "Sales".into(), "30".into()]),
    ];
    Table::with_rows("employees", columns, rows)
}

fn cells(table: &Table, column: usize) -> Vec<String> {
    table
        .rows()
        .iter()
        .map(|r| r.cells[column].clone())
        .collect()
}

#[test]
fn repeated_activation_alternates_direction() {
    let table = directory();

    assert_eq!(table.toggle_sort(0), Some((0, SortDirection::Ascending)));
    assert_eq!(cells(&table, 0), ["alice", "Bob", "Craig"]);

    assert_eq!(table.toggle_sort(0), Some((0, SortDirection::Descending)));
    assert_eq!(cells(&table, 0), ["Craig", "Bob", "alice"]);

    assert_eq!(table.toggle_sort(0), Some((0, SortDirection::Ascending)));
    assert_eq!(cells(&table, 0), ["alice", "Bob", "Craig"]);
}

#[test]
fn switching_column_resets_the_previous_indicator() {
    let table = directory();

    table.toggle_sort(0);
    table.toggle_sort(0);
    assert_eq!(table.sort(), Some((0, SortDirection::Descending)));

    // A new column starts ascending and is now the only indicator.
    assert_eq!(table.toggle_sort(2), Some((2, SortDirection::Ascending)));
    assert_eq!(table.sort(), Some((2, SortDirection::Ascending)));
}

#[test]
fn numeric_cells_sort_numerically() {
    let table = directory();
    table.toggle_sort(2);
    assert_eq!(cells(&table, 2), ["2", "10", "30"]);

    table.toggle_sort(2);
    assert_eq!(cells(&table, 2), ["30", "10", "2"]);
}

#[test]
fn ties_keep_their_existing_order() {
    let table = directory();

    // Sort by name so the two Sales rows have a known relative order.
    table.toggle_sort(0); // alice, Bob, Craig
    table.toggle_sort(1); // Engineering, then Sales x2

    let ids: Vec<String> = table.rows().iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, ["e2", "e3", "e1"], "Bob stays before Craig");
}

#[test]
fn sorting_reorders_without_changing_rows() {
    let table = directory();
    let mut before = table.rows();

    sort_table(&table, 0);
    let mut after = table.rows();

    before.sort_by(|a, b| a.id.cmp(&b.id));
    after.sort_by(|a, b| a.id.cmp(&b.id));
    assert_eq!(before, after, "same rows, only the order changed");
}

#[test]
fn unsortable_and_out_of_range_columns_are_ignored() {
    let columns = vec![Column::new("Avatar", 4), Column::new("Name", 20).sortable()];
    let table = Table::with_rows(
        "t",
        columns,
        vec![Row::new("r1", vec!["-".into(), "Zoe".into()])],
    );

    assert_eq!(table.toggle_sort(0), None);
    assert_eq!(table.toggle_sort(5), None);
    assert_eq!(table.sort(), None);
}

#[test]
fn column_from_x_uses_cumulative_widths() {
    let table = directory();
    assert_eq!(table.column_from_x(0), Some(0));
    assert_eq!(table.column_from_x(19), Some(0));
    assert_eq!(table.column_from_x(20), Some(1));
    assert_eq!(table.column_from_x(36), Some(2));
    assert_eq!(table.column_from_x(44), None);
}
