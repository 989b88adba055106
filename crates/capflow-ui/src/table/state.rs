//! Client-side sort and pagination state.

use capflow_core::types::page::PageRequest;

use super::cell::CellValue;

/// Selectable page sizes, in display order. The first entry is the default.
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 25, 50, 100];

/// Sort direction for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header arrow for the active sort column
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "\u{25B2}",
            SortDirection::Descending => "\u{25BC}",
        }
    }
}

/// Active sort: which column, which direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// Index into the table's column list
    pub column: usize,
    pub direction: SortDirection,
}

/// Sort and pagination state owned by the table component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableState {
    /// Active sort, if any
    pub sort: Option<SortSpec>,
    /// Current page (0-indexed)
    pub page: u32,
    /// Rows per page, one of [`PAGE_SIZE_OPTIONS`]
    pub per_page: u32,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            sort: None,
            page: 0,
            per_page: PAGE_SIZE_OPTIONS[0],
        }
    }
}

impl TableState {
    /// Click on a sortable header: the same column flips direction, a new
    /// column starts ascending.
    pub fn toggle_sort(&mut self, column: usize) {
        self.sort = Some(match self.sort {
            Some(spec) if spec.column == column => SortSpec {
                column,
                direction: spec.direction.flipped(),
            },
            _ => SortSpec {
                column,
                direction: SortDirection::Ascending,
            },
        });
    }

    /// Changing the page size always returns to the first page.
    pub fn set_page_size(&mut self, per_page: u32) {
        self.per_page = per_page;
        self.page = 0;
    }

    /// Moves to a page.
    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    /// The wire request for the current page.
    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

/// Number of blank filler rows to keep the table height stable:
/// `max(0, page_size - row_count)` when padding is enabled, else zero.
pub fn padding_rows(page_size: u32, row_count: usize, enabled: bool) -> usize {
    if !enabled {
        return 0;
    }
    (page_size as usize).saturating_sub(row_count)
}

/// Stable sort over cell values.
///
/// Each row is decorated with its original index; ties on the cell value
/// fall back to that index, so equal keys keep their original relative
/// order in either direction. Returns row indices in display order.
pub fn sorted_indices(values: &[CellValue], direction: SortDirection) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_unstable_by(|&a, &b| {
        let by_value = match direction {
            SortDirection::Ascending => values[a].compare(&values[b]),
            SortDirection::Descending => values[b].compare(&values[a]),
        };
        by_value.then(a.cmp(&b))
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(values: &[&str]) -> Vec<CellValue> {
        values.iter().map(|v| CellValue::from(*v)).collect()
    }

    #[test]
    fn new_column_starts_ascending() {
        let mut state = TableState::default();
        state.toggle_sort(2);
        assert_eq!(
            state.sort,
            Some(SortSpec {
                column: 2,
                direction: SortDirection::Ascending
            })
        );
    }

    #[test]
    fn toggling_same_column_flips_direction() {
        let mut state = TableState::default();
        state.toggle_sort(1);
        state.toggle_sort(1);
        assert_eq!(state.sort.unwrap().direction, SortDirection::Descending);
        // A third toggle returns to ascending.
        state.toggle_sort(1);
        assert_eq!(state.sort.unwrap().direction, SortDirection::Ascending);
    }

    #[test]
    fn selecting_new_column_resets_to_ascending() {
        let mut state = TableState::default();
        state.toggle_sort(1);
        state.toggle_sort(1);
        assert_eq!(state.sort.unwrap().direction, SortDirection::Descending);
        state.toggle_sort(3);
        assert_eq!(
            state.sort,
            Some(SortSpec {
                column: 3,
                direction: SortDirection::Ascending
            })
        );
    }

    #[test]
    fn page_size_change_resets_page() {
        let mut state = TableState::default();
        state.set_page(4);
        state.set_page_size(50);
        assert_eq!(state.page, 0);
        assert_eq!(state.per_page, 50);
    }

    #[test]
    fn padding_formula() {
        assert_eq!(padding_rows(10, 3, true), 7);
        assert_eq!(padding_rows(10, 10, true), 0);
        assert_eq!(padding_rows(10, 14, true), 0);
        assert_eq!(padding_rows(10, 3, false), 0);
    }

    #[test]
    fn equal_keys_keep_original_order() {
        // [B, A, B] ascending by name: A first, then both Bs in original order.
        let values = names(&["B", "A", "B"]);
        let order = sorted_indices(&values, SortDirection::Ascending);
        assert_eq!(order, vec![1, 0, 2]);
    }

    #[test]
    fn descending_reverses_keys_not_ties() {
        let values = names(&["B", "A", "B"]);
        let order = sorted_indices(&values, SortDirection::Descending);
        assert_eq!(order, vec![0, 2, 1]);
    }

    proptest! {
        /// Equal keys preserve original relative order for all inputs, and
        /// the result is actually ordered on the key.
        #[test]
        fn sort_is_stable_for_all_permutations(keys in prop::collection::vec(0u8..5, 0..40)) {
            let values: Vec<CellValue> = keys
                .iter()
                .map(|k| CellValue::Text(format!("k{k}")))
                .collect();
            let order = sorted_indices(&values, SortDirection::Ascending);
            prop_assert_eq!(order.len(), keys.len());
            for window in order.windows(2) {
                let (a, b) = (window[0], window[1]);
                prop_assert!(keys[a] <= keys[b]);
                if keys[a] == keys[b] {
                    prop_assert!(a < b);
                }
            }
        }
    }
}
