//! Navigation Header Component
//!
//! Horizontal header with the product mark, nav links, and the session
//! area (signed-in identity plus sign-out, or a sign-in link).

use capflow_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use crate::app::Route;
use crate::context::{use_api, use_session};

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    About,
    Users,
    Settings,
}

impl NavLocation {
    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::About => "About",
            NavLocation::Users => "Users",
            NavLocation::Settings => "Settings",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::About => Route::About {},
            NavLocation::Users => Route::Users {},
            NavLocation::Settings => Route::Settings {},
        }
    }

    /// Whether the location requires a signed-in session
    pub fn requires_session(&self) -> bool {
        !matches!(self, NavLocation::About)
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the app
    pub current: NavLocation,
}

/// Navigation Header component
///
/// - Left: "CapFlow" product mark
/// - Center: navigation links (admin links only while signed in)
/// - Right: session identity with sign-out, or a sign-in link
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let api = use_api();
    let mut session = use_session();
    let navigator = use_navigator();

    let signed_in_name = session().map(|s| s.user.display_name);

    let locations = [NavLocation::About, NavLocation::Users, NavLocation::Settings];

    let sign_out = move |_| {
        let shared = api();
        spawn(async move {
            shared.write().await.clear_token();
        });
        session.set(None);
        tracing::info!("Signed out");
        navigator.push(Route::About {});
    };

    rsx! {
        header { class: "nav-header",
            div { class: "nav-header-inner",
                // Left: product mark
                Link { to: Route::About {}, class: "nav-brand",
                    span { class: "nav-brand-mark", "Cap" }
                    span { class: "nav-brand-accent", "Flow" }
                }

                // Center: navigation links
                nav { class: "nav-links",
                    for location in locations {
                        if !location.requires_session() || signed_in_name.is_some() {
                            Link {
                                to: location.route(),
                                class: if location == props.current { "nav-link active" } else { "nav-link" },
                                span { class: "nav-link-icon", {render_nav_icon(location)} }
                                span { class: "nav-link-label", "{location.display_name()}" }
                            }
                        }
                    }
                }

                // Right: session area
                div { class: "nav-session",
                    if let Some(name) = signed_in_name {
                        span { class: "nav-session-name", "{name}" }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: sign_out,
                            "Sign out"
                        }
                    } else {
                        Link { to: Route::SignIn {}, class: "nav-link sign-in-link", "Sign in" }
                    }
                }
            }
        }
    }
}

/// Render Lucide icon for navigation location
fn render_nav_icon(location: NavLocation) -> Element {
    match location {
        NavLocation::About => rsx! {
            // Lucide home icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "18",
                height: "18",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
                path { d: "M9 22V12h6v10" }
            }
        },
        NavLocation::Users => rsx! {
            // Lucide users icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "18",
                height: "18",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
                circle { cx: "9", cy: "7", r: "4" }
                path { d: "M22 21v-2a4 4 0 0 0-3-3.87" }
                path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
            }
        },
        NavLocation::Settings => rsx! {
            // Lucide settings icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "18",
                height: "18",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z" }
                circle { cx: "12", cy: "12", r: "3" }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_about_is_public() {
        assert!(!NavLocation::About.requires_session());
        assert!(NavLocation::Users.requires_session());
        assert!(NavLocation::Settings.requires_session());
    }
}
