//! Generic table engine backing [`DataTable`](crate::components::DataTable).
//!
//! Split from the component so the sort/page logic stays headless:
//! [`CellValue`] carries typed cell contents, [`Column`] describes one
//! column over an arbitrary row type, and [`TableState`] holds the
//! client-side sort and pagination state.

mod cell;
mod column;
mod state;

pub use cell::{format_currency, format_date, CellValue};
pub use column::Column;
pub use state::{
    padding_rows, sorted_indices, SortDirection, SortSpec, TableState, PAGE_SIZE_OPTIONS,
};
