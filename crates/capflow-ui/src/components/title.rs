//! Title Components
//!
//! Page and section headings shared by every screen.

use dioxus::prelude::*;

/// Top-level page heading with an optional subtitle line
#[derive(Clone, PartialEq, Props)]
pub struct PageTitleProps {
    /// Heading text
    pub text: String,
    /// Muted line under the heading
    #[props(default)]
    pub subtitle: Option<String>,
}

#[component]
pub fn PageTitle(props: PageTitleProps) -> Element {
    rsx! {
        header { class: "page-heading",
            h1 { class: "page-title", "{props.text}" }
            if let Some(subtitle) = &props.subtitle {
                p { class: "page-subtitle", "{subtitle}" }
            }
        }
    }
}

/// Section heading within a page
#[component]
pub fn SectionTitle(text: String) -> Element {
    rsx! {
        h2 { class: "section-header", "{text}" }
    }
}
