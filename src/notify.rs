// -- std imports
use std::sync::{Arc, OnceLock};

// -- crate imports
use tracing::{debug, instrument, warn};

// -- module imports
use crate::{
    connection::ConnectionManager,
    error::{Error, Result, UNRECOGNIZED_RESPONSE},
    hints::Hints,
};

pub const NOTIFICATIONS_SERVICE: &str = "org.freedesktop.Notifications";
pub const NOTIFICATIONS_PATH: &str = "/org/freedesktop/Notifications";
pub const NOTIFICATIONS_INTERFACE: &str = "org.freedesktop.Notifications";

/// Global client on the session bus.
static CLIENT: OnceLock<NotifyClient> = OnceLock::new();

/// Arguments of a single `Notify` call, in wire order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyCall<'a> {
    pub app_name: &'a str,
    /// Identifier of the notification to update in place, or 0 to create a new one.
    pub replaces_id: u32,
    pub icon: &'a str,
    pub summary: &'a str,
    pub body: &'a str,
    pub actions: &'a [String],
    pub hints: Hints,
    /// Milliseconds; -1 = daemon default, 0 = never expire.
    pub timeout_ms: i32,
}

/// Talks to the notification daemon over a shared bus connection.
#[derive(Debug, Clone)]
pub struct NotifyClient {
    connections: Arc<ConnectionManager>,
}

impl NotifyClient {
    pub fn new(connections: Arc<ConnectionManager>) -> Self {
        Self { connections }
    }

    /// Returns the process-wide client on the session bus.
    pub fn global() -> &'static Self {
        CLIENT.get_or_init(|| Self::new(ConnectionManager::global()))
    }

    pub fn connections(&self) -> &Arc<ConnectionManager> {
        &self.connections
    }

    /// Invokes `org.freedesktop.Notifications.Notify` and returns the id the daemon assigned.
    ///
    /// A single round trip; nothing is retried. When `replaces_id` is set, the returned id is
    /// whatever the daemon reports, which need not be `replaces_id`.
    ///
    /// # Errors
    /// - [`Error::Connection`] if the session bus is unreachable.
    /// - [`Error::Notify`] if the daemon rejected the call or the call failed in transit.
    /// - [`Error::Protocol`] if the reply is not a single `u32`.
    #[instrument(skip_all, fields(replaces_id = call.replaces_id))]
    pub fn notify(&self, call: &NotifyCall<'_>) -> Result<u32> {
        let conn = self.connections.connection()?;

        debug!(
            app_name = call.app_name,
            summary = call.summary,
            urgency = %call.hints.urgency,
            timeout_ms = call.timeout_ms,
            "Sending notification."
        );
        let actions: Vec<&str> = call.actions.iter().map(String::as_str).collect();
        let reply = conn
            .call_method(
                Some(NOTIFICATIONS_SERVICE),
                NOTIFICATIONS_PATH,
                Some(NOTIFICATIONS_INTERFACE),
                "Notify",
                &(
                    call.app_name,
                    call.replaces_id,
                    call.icon,
                    call.summary,
                    call.body,
                    actions,
                    call.hints.to_wire(),
                    call.timeout_ms,
                ),
            )
            .map_err(Error::Notify)?;

        let id: u32 = reply
            .body()
            .deserialize()
            .map_err(|e| Error::protocol(UNRECOGNIZED_RESPONSE, e))?;
        debug!(id, "Notification accepted.");

        Ok(id)
    }

    /// Asks the daemon which optional features it supports.
    ///
    /// # Errors
    /// - [`Error::Connection`], [`Error::Notify`] or [`Error::Protocol`] as for [`Self::notify`].
    pub fn capabilities(&self) -> Result<Vec<String>> {
        let conn = self.connections.connection()?;

        let reply = conn
            .call_method(
                Some(NOTIFICATIONS_SERVICE),
                NOTIFICATIONS_PATH,
                Some(NOTIFICATIONS_INTERFACE),
                "GetCapabilities",
                &(),
            )
            .map_err(Error::Notify)?;

        reply
            .body()
            .deserialize()
            .map_err(|e| Error::protocol("unrecognized capabilities from notify daemon", e))
    }

    /// Dismisses the notification with the given id.
    ///
    /// # Errors
    /// - [`Error::Connection`] if the session bus is unreachable.
    /// - [`Error::Notify`] if the daemon rejected the call.
    #[instrument(skip(self))]
    pub fn close_notification(&self, id: u32) -> Result<()> {
        let conn = self.connections.connection()?;

        conn.call_method(
            Some(NOTIFICATIONS_SERVICE),
            NOTIFICATIONS_PATH,
            Some(NOTIFICATIONS_INTERFACE),
            "CloseNotification",
            &(id,),
        )
        .map_err(Error::Notify)?;
        debug!("Notification closed.");

        Ok(())
    }

    /// Best-effort check that a session bus and a notification daemon are reachable.
    ///
    /// Never fails: every error becomes `false`. A `true` result does not guarantee that a later
    /// send succeeds.
    pub fn service_available(&self) -> bool {
        self.capabilities()
            .inspect(|caps| debug!(capabilities = ?caps, "Notification daemon is available."))
            .inspect_err(|e| warn!(error = %e, "Notification service is not available."))
            .is_ok()
    }
}
