//! Column descriptors for the generic table.

use dioxus::prelude::*;

use super::cell::CellValue;

/// Describes one column over rows of type `T`.
///
/// The accessor is a typed function, not a string-keyed lookup, so a
/// column can only ever read fields that exist on `T`. A custom renderer
/// takes precedence over the typed formatting of the accessor value.
pub struct Column<T> {
    /// Header label
    pub label: String,
    /// Optional fixed CSS width (e.g. "140px")
    pub width: Option<&'static str>,
    /// Whether clicking the header sorts on this column
    pub sortable: bool,
    /// Produces the typed cell value for a row
    pub accessor: fn(&T) -> CellValue,
    /// Optional custom cell renderer, tried before typed formatting
    pub render: Option<fn(&T) -> Element>,
}

impl<T> Column<T> {
    /// Creates a plain, unsortable column.
    pub fn new(label: impl Into<String>, accessor: fn(&T) -> CellValue) -> Self {
        Self {
            label: label.into(),
            width: None,
            sortable: false,
            accessor,
            render: None,
        }
    }

    /// Marks the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Fixes the column width.
    pub fn width(mut self, width: &'static str) -> Self {
        self.width = Some(width);
        self
    }

    /// Installs a custom cell renderer.
    pub fn render(mut self, render: fn(&T) -> Element) -> Self {
        self.render = Some(render);
        self
    }
}

// Manual impls: deriving would bound T, but the fields themselves are
// cheap to clone and compare regardless of T.
impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            width: self.width,
            sortable: self.sortable,
            accessor: self.accessor,
            render: self.render,
        }
    }
}

impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
            && self.width == other.width
            && self.sortable == other.sortable
            && self.accessor == other.accessor
            && self.render == other.render
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
    }

    #[test]
    fn builder_defaults() {
        let column = Column::<Row>::new("Name", |row| row.name.into());
        assert_eq!(column.label, "Name");
        assert!(!column.sortable);
        assert_eq!(column.width, None);
        assert!(column.render.is_none());

        let column = column.sortable().width("120px");
        assert!(column.sortable);
        assert_eq!(column.width, Some("120px"));
    }

    #[test]
    fn accessor_reads_row() {
        let column = Column::<Row>::new("Name", |row| row.name.into());
        let row = Row { name: "Northbank" };
        assert_eq!((column.accessor)(&row), CellValue::Text("Northbank".into()));
    }
}
