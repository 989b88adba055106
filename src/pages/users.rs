//! User administration list.
//!
//! Server-paged table of operator accounts with search. The table handles
//! sorting locally; paging and filtering round-trip through the platform.

use capflow_core::types::page::PageRequest;
use capflow_core::types::user::{User, UserRole};
use capflow_ui::{Button, ButtonVariant, CellValue, Column, DataTable, PageTitle};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{NavHeader, NavLocation};
use crate::context::{use_api, use_notifier, use_session};

/// Role rendered as a status pill; exercises the table's raw-label cells.
fn role_cell(user: &User) -> CellValue {
    let class = match user.role {
        UserRole::Operator => "role-pill operator",
        UserRole::LenderOperator => "role-pill lender",
    };
    CellValue::Label(format!(
        "<span class=\"{}\">{}</span>",
        class,
        user.role.label()
    ))
}

fn actions_cell(user: &User) -> Element {
    rsx! {
        Link {
            to: Route::UserEdit { id: user.id.clone() },
            class: "table-action-link",
            "Edit"
        }
    }
}

fn user_columns() -> Vec<Column<User>> {
    vec![
        Column::new("Name", |u: &User| u.display_name.clone().into()).sortable(),
        Column::new("Email", |u: &User| u.email.clone().into()).sortable(),
        Column::new("Role", role_cell).sortable(),
        Column::new("Lender", |u: &User| match &u.lender_id {
            Some(id) => id.clone().into(),
            None => CellValue::Empty,
        }),
        Column::new("Created", |u: &User| CellValue::Date(u.created_at))
            .sortable()
            .width("140px"),
        Column::new("", |_: &User| CellValue::Empty)
            .width("70px")
            .render(actions_cell),
    ]
}

/// User administration page component.
#[component]
pub fn Users() -> Element {
    let api = use_api();
    let session = use_session();
    let mut notifier = use_notifier();
    let navigator = use_navigator();

    let mut users: Signal<Vec<User>> = use_signal(Vec::new);
    let mut total: Signal<u64> = use_signal(|| 0);
    let mut loading = use_signal(|| true);
    let mut request = use_signal(PageRequest::default);
    let mut search_term = use_signal(String::new);

    use_effect(move || {
        if session().is_none() {
            navigator.push(Route::SignIn {});
        }
    });

    // Reload whenever the page request or the search term changes.
    use_effect(move || {
        if session().is_none() {
            return;
        }
        let page = request();
        let term = search_term();
        spawn(async move {
            let shared = api();
            let client = shared.read().await.clone();
            match client.list_users(page, Some(&term)).await {
                Ok(result) => {
                    users.set(result.data);
                    total.set(result.meta.total);
                }
                Err(e) => notifier.error(e.user_message()),
            }
            loading.set(false);
        });
    });

    rsx! {
        main { class: "page",
            NavHeader { current: NavLocation::Users }

            div { class: "page-content",
                div { class: "page-toolbar",
                    PageTitle {
                        text: "Users".to_string(),
                        subtitle: Some(format!("{} operator accounts", total())),
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            navigator.push(Route::UserCreate {});
                        },
                        "New user"
                    }
                }

                if loading() {
                    div { class: "loading-state", p { "Loading users..." } }
                } else {
                    DataTable {
                        rows: users(),
                        columns: user_columns(),
                        total: Some(total()),
                        on_page_change: move |page: PageRequest| request.set(page),
                        on_search: move |text: String| search_term.set(text),
                        pad_empty_rows: true,
                        search_placeholder: Some("Search by name or email".to_string()),
                    }
                }
            }
        }
    }
}
