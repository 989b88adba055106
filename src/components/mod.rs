//! App-level components for the CapFlow client.

mod nav_header;
mod notifications;

pub use nav_header::{NavHeader, NavLocation};
pub use notifications::{Notice, NoticeKind, NotificationStack, Notifier};
