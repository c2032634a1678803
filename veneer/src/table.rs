//! Sortable table state.
//!
//! A table is an ordered row set with per-column sort indicators. Sorting
//! reorders the rows in place: no row is created, mutated or destroyed.
//! At most one column carries an indicator; activating a column toggles its
//! direction and resets every other column to neutral.

use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// A column definition.
#[derive(Debug, Clone)]
pub struct Column {
    pub title: String,
    /// Width in screen cells; used to resolve header clicks to a column.
    pub width: u16,
    pub sortable: bool,
}

impl Column {
    pub fn new(title: impl Into<String>, width: u16) -> Self {
        Self {
            title: title.into(),
            width,
            sortable: false,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

/// A table row: a stable id plus one text cell per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: String,
    pub cells: Vec<String>,
}

impl Row {
    pub fn new(id: impl Into<String>, cells: Vec<String>) -> Self {
        Self {
            id: id.into(),
            cells,
        }
    }
}

#[derive(Debug)]
struct TableInner {
    columns: Vec<Column>,
    rows: Vec<Row>,
    /// Current sort indicator (column index, direction); `None` = neutral.
    sort: Option<(usize, SortDirection)>,
}

/// A sortable table handle with shared interior state.
#[derive(Debug)]
pub struct Table {
    id: String,
    inner: Arc<RwLock<TableInner>>,
    dirty: Arc<AtomicBool>,
}

impl Table {
    pub fn new(id: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            id: id.into(),
            inner: Arc::new(RwLock::new(TableInner {
                columns,
                rows: Vec::new(),
                sort: None,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_rows(id: impl Into<String>, columns: Vec<Column>, rows: Vec<Row>) -> Self {
        let table = Self::new(id, columns);
        table.set_rows(rows);
        table.clear_dirty();
        table
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    // -------------------------------------------------------------------------
    // Columns and rows
    // -------------------------------------------------------------------------

    pub fn columns(&self) -> Vec<Column> {
        self.inner
            .read()
            .map(|guard| guard.columns.clone())
            .unwrap_or_default()
    }

    pub fn rows(&self) -> Vec<Row> {
        self.inner
            .read()
            .map(|guard| guard.rows.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|guard| guard.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace all rows, resetting the sort indicator to neutral.
    pub fn set_rows(&self, rows: Vec<Row>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.rows = rows;
            guard.sort = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Resolve an x offset within the table to a column index.
    pub fn column_from_x(&self, x: u16) -> Option<usize> {
        self.inner.read().ok().and_then(|guard| {
            let mut col_x = 0u16;
            for (i, col) in guard.columns.iter().enumerate() {
                if x >= col_x && x < col_x + col.width {
                    return Some(i);
                }
                col_x += col.width;
            }
            None
        })
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// The current sort indicator.
    pub fn sort(&self) -> Option<(usize, SortDirection)> {
        self.inner.read().ok().and_then(|guard| guard.sort)
    }

    /// Activate sorting on a column, reordering rows in place.
    ///
    /// Repeated activation of the indicated column toggles its direction;
    /// a different column starts ascending. Either way every other column's
    /// indicator resets to neutral. Returns the new indicator, or `None`
    /// when the column is out of range or not sortable.
    pub fn toggle_sort(&self, column: usize) -> Option<(usize, SortDirection)> {
        if let Ok(mut guard) = self.inner.write()
            && guard.columns.get(column).is_some_and(|c| c.sortable)
        {
            let direction = match guard.sort {
                Some((current, dir)) if current == column => dir.toggle(),
                _ => SortDirection::Ascending,
            };
            guard.sort = Some((column, direction));
            Self::apply_sort(&mut guard.rows, column, direction);
            self.dirty.store(true, Ordering::SeqCst);
            return Some((column, direction));
        }
        None
    }

    fn apply_sort(rows: &mut [Row], column: usize, direction: SortDirection) {
        // Stable sort: equal cells keep their current relative order.
        rows.sort_by(|a, b| {
            let left = a.cells.get(column).map(String::as_str).unwrap_or("");
            let right = b.cells.get(column).map(String::as_str).unwrap_or("");
            let ordering = compare_cells(left, right);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for Table {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

/// Compare two cell values: numerically when both parse as numbers,
/// otherwise as case-folded strings.
fn compare_cells(a: &str, b: &str) -> CmpOrdering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(CmpOrdering::Equal),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}
