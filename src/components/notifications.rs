//! Transient notifications.
//!
//! Every remote success or failure surfaces here: a dismissible toast that
//! expires on its own after a few seconds. Pages obtain the [`Notifier`]
//! from context and push notices; [`NotificationStack`] renders them at
//! the root of the app.

use std::time::Duration;

use dioxus::prelude::*;

use capflow_ui::CloseButton;

/// How long a notice stays on screen before expiring
const NOTICE_LIFETIME: Duration = Duration::from_secs(6);

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// CSS class for the toast container
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice success",
            NoticeKind::Error => "notice error",
        }
    }
}

/// One transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Notification context handle.
///
/// Cheap to copy; push methods can be called from any event handler or
/// spawned task on the UI runtime.
#[derive(Clone, Copy)]
pub struct Notifier {
    notices: Signal<Vec<Notice>>,
    next_id: Signal<u64>,
}

impl Notifier {
    /// Creates the context value. Call once from the root component.
    pub fn create() -> Self {
        Self {
            notices: use_signal(Vec::new),
            next_id: use_signal(|| 0),
        }
    }

    /// Shows a success notice.
    pub fn success(&mut self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into());
    }

    /// Shows an error notice.
    pub fn error(&mut self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text.into());
    }

    /// Removes a notice before it expires.
    pub fn dismiss(&mut self, id: u64) {
        self.notices.write().retain(|notice| notice.id != id);
    }

    /// Current notices, oldest first.
    pub fn notices(&self) -> Vec<Notice> {
        (self.notices)()
    }

    fn push(&mut self, kind: NoticeKind, text: String) {
        let id = {
            let mut next = self.next_id.write();
            *next += 1;
            *next
        };
        self.notices.write().push(Notice { id, kind, text });

        // Auto-expire; an early dismiss makes this a no-op.
        let mut notices = self.notices;
        spawn(async move {
            tokio::time::sleep(NOTICE_LIFETIME).await;
            notices.write().retain(|notice| notice.id != id);
        });
    }
}

/// Renders the active notices as a fixed stack.
#[component]
pub fn NotificationStack() -> Element {
    let mut notifier = crate::context::use_notifier();
    let notices = notifier.notices();

    rsx! {
        div { class: "notice-stack", "aria-live": "polite",
            for notice in notices {
                {
                    let id = notice.id;
                    rsx! {
                        div { key: "{id}", class: "{notice.kind.class()}",
                            span { class: "notice-text", "{notice.text}" }
                            CloseButton { onclick: move |_| notifier.dismiss(id) }
                        }
                    }
                }
            }
        }
    }
}
