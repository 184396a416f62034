//! Week × workforce tables

/// Dense table keyed by `(week, workforce)`, stored row-major.
///
/// Every entry starts out as `None`, meaning the state has not been reached yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<T> {
    entries: Vec<Option<T>>,
    rows: usize,
    columns: usize,
}

impl<T: Copy> Table<T> {
    /// Allocate a table of `rows` weeks by `columns` workforce levels, all unreached.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            entries: vec![None; rows.saturating_mul(columns)],
            rows,
            columns,
        }
    }

    /// Number of week rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of workforce columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Entry at `(week, workforce)`; `None` if out of bounds or unreached.
    pub fn get(&self, week: usize, workforce: usize) -> Option<T> {
        self.offset(week, workforce)
            .and_then(|offset| self.entries.get(offset).copied().flatten())
    }

    /// Store `value` at `(week, workforce)`.
    ///
    /// Returns `false` (and leaves the table untouched) if the key is out of bounds.
    pub fn set(&mut self, week: usize, workforce: usize, value: T) -> bool {
        let Some(slot) = self
            .offset(week, workforce)
            .and_then(|offset| self.entries.get_mut(offset))
        else {
            return false;
        };

        *slot = Some(value);

        true
    }

    /// All entries of one week row, in workforce order.
    pub fn row(&self, week: usize) -> Option<&[Option<T>]> {
        if week >= self.rows {
            return None;
        }

        let start = week * self.columns;

        self.entries.get(start..start + self.columns)
    }

    /// Iterate over every row, in week order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Option<T>]> {
        // `chunks` rejects a zero size; a zero-column table has no rows to yield.
        self.entries.chunks(self.columns.max(1))
    }

    fn offset(&self, week: usize, workforce: usize) -> Option<usize> {
        (week < self.rows && workforce < self.columns).then(|| week * self.columns + workforce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_table_is_unreached() {
        let table: Table<u64> = Table::new(3, 4);

        assert_eq!(table.rows(), 3);
        assert_eq!(table.columns(), 4);
        assert!(table.iter_rows().flatten().all(Option::is_none));
    }

    #[test]
    fn set_then_get_returns_value() {
        let mut table = Table::new(2, 3);

        assert!(table.set(1, 2, 42_u64));
        assert_eq!(table.get(1, 2), Some(42));
        assert_eq!(table.get(0, 2), None);
    }

    #[test]
    fn out_of_bounds_access_is_rejected() {
        let mut table = Table::new(2, 3);

        assert!(!table.set(2, 0, 1_u64));
        assert!(!table.set(0, 3, 1_u64));
        assert_eq!(table.get(5, 5), None);
        assert_eq!(table.row(2), None);
    }

    #[test]
    fn row_returns_entries_in_workforce_order() {
        let mut table = Table::new(2, 3);

        table.set(1, 0, 7_u64);
        table.set(1, 2, 9_u64);

        assert_eq!(table.row(1), Some([Some(7), None, Some(9)].as_slice()));
        assert_eq!(table.iter_rows().count(), 2);
    }
}
