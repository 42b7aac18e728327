//! Blocking client for desktop notifications over the freedesktop `org.freedesktop.Notifications`
//! D-Bus interface.
//!
//! Build a [`Notification`] and send it through a [`NotifyClient`], or use the crate-level
//! functions, which work on a process-wide default notification:
//!
//! ```no_run
//! use desktop_notify::Urgency;
//!
//! desktop_notify::set_app_name("Simple");
//! let id = desktop_notify::send_with_urgency("Oops, made a big mistake!", "", Urgency::Critical)?;
//! desktop_notify::replace_with_override(id, "Fixed that, thank goodness!", "")?;
//! # Ok::<(), desktop_notify::Error>(())
//! ```

pub mod configuration;
pub mod connection;
pub mod error;
pub mod hints;
pub mod implicit;
pub mod notification;
pub mod notify;
mod serde_ext;
pub mod urgency;

#[cfg(test)]
pub(crate) mod testing;

pub use configuration::Conf;
pub use connection::{ConnectionManager, Connector, SessionConnector};
pub use error::{Error, Result};
pub use hints::Hints;
pub use implicit::{
    ImplicitNotification, app_name, icon, init, replace, replace_with_override,
    replace_with_urgency, send, send_with_override, send_with_urgency, set_app_name, set_icon,
    set_timeout, set_urgency, timeout, urgency,
};
pub use notification::Notification;
pub use notify::{NotifyCall, NotifyClient};
pub use urgency::Urgency;

/// Whether a session bus and a notification daemon are reachable.
///
/// Advisory only: sends can still fail afterwards.
pub fn service_available() -> bool {
    NotifyClient::global().service_available()
}
