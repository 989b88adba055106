//! CapFlow UI Components
//!
//! Reusable Dioxus components for the CapFlow desktop client: buttons,
//! form inputs, selects, titles, the QR display, and the generic
//! [`DataTable`] used across admin screens.
//!
//! Components are presentational: they render caller-owned data and report
//! interaction through `EventHandler` props. The one stateful exception is
//! [`DataTable`], which owns its sort/page state but still never mutates
//! the rows it is given.

pub mod components;
pub mod table;

pub use components::*;
pub use table::{
    format_currency, format_date, padding_rows, sorted_indices, CellValue, Column, SortDirection,
    SortSpec, TableState, PAGE_SIZE_OPTIONS,
};
