//! Generic sortable/paginated data table.
//!
//! Accepts rows of any record type plus ordered [`Column`] descriptors and
//! renders header, body, and pagination controls. Sorting is performed
//! in-memory (stable, original order breaking ties) unless the caller
//! supplies an external `on_sort` callback. Pagination is server-driven
//! when `total` and `on_page_change` are supplied; otherwise every row is
//! rendered. Search filtering is always the caller's responsibility: the
//! table only reports the entered text.

use dioxus::prelude::*;

use capflow_core::types::page::{PageMeta, PageRequest};

use crate::components::{Button, ButtonVariant, SearchInput};
use crate::table::{
    padding_rows, sorted_indices, CellValue, Column, SortSpec, TableState, PAGE_SIZE_OPTIONS,
};

/// Properties for the DataTable component
#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps<T: Clone + PartialEq + 'static> {
    /// Rows to display; never mutated
    pub rows: Vec<T>,
    /// Column descriptors, in display order
    pub columns: Vec<Column<T>>,
    /// Total row count across all pages; enables server-driven paging
    #[props(default)]
    pub total: Option<u64>,
    /// Called with the new page request when page or page size changes
    #[props(default)]
    pub on_page_change: Option<EventHandler<PageRequest>>,
    /// External sort delegate; when set, rows are rendered in given order
    #[props(default)]
    pub on_sort: Option<EventHandler<SortSpec>>,
    /// When set, a search field renders and reports every keystroke
    #[props(default)]
    pub on_search: Option<EventHandler<String>>,
    /// Pad short pages with blank rows to a full page height
    #[props(default = false)]
    pub pad_empty_rows: bool,
    /// Placeholder for the search field
    #[props(default)]
    pub search_placeholder: Option<String>,
}

/// Generic table component
///
/// # Example
///
/// ```rust,ignore
/// DataTable {
///     rows: users(),
///     columns: vec![
///         Column::new("Name", |u: &User| u.display_name.clone().into()).sortable(),
///         Column::new("Created", |u: &User| CellValue::Date(u.created_at)).sortable(),
///     ],
///     total: Some(meta().total),
///     on_page_change: move |request| load(request),
///     on_search: move |text| search.set(text),
/// }
/// ```
#[component]
pub fn DataTable<T: Clone + PartialEq + 'static>(props: DataTableProps<T>) -> Element {
    let mut state = use_signal(TableState::default);
    let mut search = use_signal(String::new);

    let rows = props.rows.clone();
    let columns = props.columns.clone();
    let on_sort = props.on_sort;
    let on_page_change = props.on_page_change;
    let on_search = props.on_search;

    let current = state();
    let column_count = columns.len().max(1);

    // Display order: local stable sort unless the caller sorts externally.
    let order: Vec<usize> = match current.sort {
        Some(spec) if on_sort.is_none() && spec.column < columns.len() => {
            let accessor = columns[spec.column].accessor;
            let keys: Vec<CellValue> = rows.iter().map(|row| accessor(row)).collect();
            sorted_indices(&keys, spec.direction)
        }
        _ => (0..rows.len()).collect(),
    };

    let pad = padding_rows(current.per_page, order.len(), props.pad_empty_rows);
    let meta = props
        .total
        .map(|total| PageMeta::new(current.page, current.per_page, total));
    let page_number = meta.map(|m| m.page + 1).unwrap_or(1);

    let mut sort_column = move |index: usize| {
        let mut next = state();
        next.toggle_sort(index);
        state.set(next);
        if let Some(handler) = on_sort {
            if let Some(spec) = next.sort {
                handler.call(spec);
            }
        }
    };

    let mut change_page = move |page: u32| {
        let mut next = state();
        next.set_page(page);
        state.set(next);
        if let Some(handler) = on_page_change {
            handler.call(next.page_request());
        }
    };

    let mut change_page_size = move |per_page: u32| {
        let mut next = state();
        next.set_page_size(per_page);
        state.set(next);
        if let Some(handler) = on_page_change {
            handler.call(next.page_request());
        }
    };

    rsx! {
        div { class: "data-table",
            if let Some(handler) = on_search {
                div { class: "table-toolbar",
                    SearchInput {
                        value: search(),
                        placeholder: props
                            .search_placeholder
                            .clone()
                            .unwrap_or_else(|| "Search...".to_string()),
                        oninput: move |text: String| {
                            search.set(text.clone());
                            handler.call(text);
                        },
                    }
                }
            }

            table { class: "table",
                thead {
                    tr {
                        for (index, column) in columns.iter().enumerate() {
                            th {
                                class: "table-head-cell",
                                style: column.width.map(|w| format!("width:{w};")).unwrap_or_default(),
                                if column.sortable {
                                    button {
                                        class: if current.sort.is_some_and(|spec| spec.column == index) { "table-sort-btn active" } else { "table-sort-btn" },
                                        r#type: "button",
                                        onclick: move |_| sort_column(index),
                                        "{column.label}"
                                        if let Some(spec) = current.sort {
                                            if spec.column == index {
                                                span { class: "sort-indicator", "{spec.direction.indicator()}" }
                                            }
                                        }
                                    }
                                } else {
                                    span { class: "table-head-label", "{column.label}" }
                                }
                            }
                        }
                    }
                }
                tbody {
                    if order.is_empty() {
                        tr {
                            td {
                                class: "table-empty",
                                colspan: "{column_count}",
                                "No records to display"
                            }
                        }
                    }
                    for row_index in order {
                        tr { key: "{row_index}", class: "table-row",
                            for column in columns.iter() {
                                td { class: "table-cell",
                                    if let Some(render) = column.render {
                                        {render(&rows[row_index])}
                                    } else {
                                        {render_cell((column.accessor)(&rows[row_index]))}
                                    }
                                }
                            }
                        }
                    }
                    // Blank filler rows keep the table height stable on the
                    // last, short page.
                    for filler in 0..pad {
                        tr { key: "pad-{filler}", class: "table-pad-row",
                            td { colspan: "{column_count}", "\u{00A0}" }
                        }
                    }
                }
            }

            if let Some(meta) = meta {
                div { class: "table-footer",
                    div { class: "table-page-size",
                        label { class: "input-label", "Rows per page" }
                        select {
                            class: "input-field select-field compact",
                            value: "{current.per_page}",
                            onchange: move |e| {
                                if let Ok(size) = e.value().parse::<u32>() {
                                    change_page_size(size);
                                }
                            },
                            for size in PAGE_SIZE_OPTIONS {
                                option {
                                    value: "{size}",
                                    selected: size == current.per_page,
                                    "{size}"
                                }
                            }
                        }
                    }

                    span { class: "table-page-info",
                        "Page {page_number} of {meta.total_pages} \u{00B7} {meta.total} records"
                    }

                    div { class: "table-pager",
                        Button {
                            variant: ButtonVariant::Secondary,
                            disabled: meta.page == 0,
                            onclick: move |_| change_page(current.page.saturating_sub(1)),
                            "Previous"
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            disabled: meta.page + 1 >= meta.total_pages,
                            onclick: move |_| change_page(current.page + 1),
                            "Next"
                        }
                    }
                }
            }
        }
    }
}

/// Typed cell rendering: `Label` values are pre-built markup and render
/// unescaped; everything else renders as formatted text.
fn render_cell(value: CellValue) -> Element {
    if value.is_label() {
        rsx! {
            span { class: "table-label-cell", dangerous_inner_html: "{value.render()}" }
        }
    } else {
        rsx! { "{value.render()}" }
    }
}
