// -- std imports
use std::time::Duration;

// -- crate imports
use tracing::debug;

// -- module imports
use crate::{
    configuration::Conf,
    error::{Error, Result},
    hints::Hints,
    notify::{NotifyCall, NotifyClient},
    urgency::Urgency,
};

/// Reusable parameters for notifications sent to the desktop via D-Bus.
///
/// One template (say, one per application) can send many notifications; the `*_with_override`
/// and `*_with_urgency` variants substitute text or urgency for a single call without touching the
/// stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    app_name: String,
    summary: String,
    body: String,
    icon: String,
    actions: Vec<String>,
    timeout: Option<Duration>, // None = daemon default, zero = never expire
    urgency: Urgency,
}

impl Notification {
    pub fn new(
        app_name: impl Into<String>,
        summary: impl Into<String>,
        body: impl Into<String>,
        icon: impl Into<String>,
        timeout: Option<Duration>,
        urgency: Urgency,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            summary: summary.into(),
            body: body.into(),
            icon: icon.into(),
            actions: Vec::new(),
            timeout,
            urgency,
        }
    }

    /// Set the app name shown in the notification.
    pub fn app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// Set the summary (title) of the notification.
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Set the body text of the notification.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Icon name from your icon theme (e.g. "dialog-information") or a file path, "" for none.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Add an action identifier. Actions are sent in the order they were added.
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.actions.push(action.into());
        self
    }

    /// Display duration, `None` = daemon default, `Duration::ZERO` = never expire.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = urgency;
        self
    }

    pub fn get_app_name(&self) -> &str {
        &self.app_name
    }

    pub fn get_summary(&self) -> &str {
        &self.summary
    }

    pub fn get_body(&self) -> &str {
        &self.body
    }

    pub fn get_icon(&self) -> &str {
        &self.icon
    }

    pub fn get_actions(&self) -> &[String] {
        &self.actions
    }

    pub fn get_timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn get_urgency(&self) -> Urgency {
        self.urgency
    }

    pub fn set_app_name(&mut self, app_name: impl Into<String>) {
        self.app_name = app_name.into();
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.summary = summary.into();
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    pub fn set_icon(&mut self, icon: impl Into<String>) {
        self.icon = icon.into();
    }

    pub fn set_actions(&mut self, actions: Vec<String>) {
        self.actions = actions;
    }

    pub fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub fn set_urgency(&mut self, urgency: Urgency) {
        self.urgency = urgency;
    }

    /// The timeout as whole milliseconds for the wire (-1 when unset).
    ///
    /// # Errors
    /// - [`Error::TimeoutOutOfRange`] if the duration does not fit in an `i32`. It is never
    ///   clamped.
    pub fn timeout_ms(&self) -> Result<i32> {
        match self.timeout {
            None => Ok(-1),
            Some(timeout) => {
                i32::try_from(timeout.as_millis()).map_err(|_| Error::TimeoutOutOfRange(timeout))
            }
        }
    }

    /// Send a new notification with the template's fields.
    ///
    /// Returns the id the daemon assigned.
    pub fn send(&self, client: &NotifyClient) -> Result<u32> {
        self.dispatch(client, 0, &self.summary, &self.body, self.urgency)
    }

    /// Send a new notification with `summary` and `body` in place of the template's text.
    pub fn send_with_override(
        &self,
        client: &NotifyClient,
        summary: &str,
        body: &str,
    ) -> Result<u32> {
        self.dispatch(client, 0, summary, body, self.urgency)
    }

    /// Like [`Self::send_with_override`], with `urgency` used for this call only.
    pub fn send_with_urgency(
        &self,
        client: &NotifyClient,
        summary: &str,
        body: &str,
        urgency: Urgency,
    ) -> Result<u32> {
        self.dispatch(client, 0, summary, body, urgency)
    }

    /// Update notification `id` in place with the template's fields.
    ///
    /// Returns the id the daemon reports, which may differ from `id`.
    pub fn replace(&self, client: &NotifyClient, id: u32) -> Result<u32> {
        self.dispatch(client, id, &self.summary, &self.body, self.urgency)
    }

    pub fn replace_with_override(
        &self,
        client: &NotifyClient,
        id: u32,
        summary: &str,
        body: &str,
    ) -> Result<u32> {
        self.dispatch(client, id, summary, body, self.urgency)
    }

    pub fn replace_with_urgency(
        &self,
        client: &NotifyClient,
        id: u32,
        summary: &str,
        body: &str,
        urgency: Urgency,
    ) -> Result<u32> {
        self.dispatch(client, id, summary, body, urgency)
    }

    fn dispatch(
        &self,
        client: &NotifyClient,
        replaces_id: u32,
        summary: &str,
        body: &str,
        urgency: Urgency,
    ) -> Result<u32> {
        let timeout_ms = self.timeout_ms()?;
        debug!(replaces_id, "Dispatching notification from template.");

        client.notify(&NotifyCall {
            app_name: &self.app_name,
            replaces_id,
            icon: &self.icon,
            summary,
            body,
            actions: &self.actions,
            hints: Hints::new(urgency),
            timeout_ms,
        })
    }
}

impl From<&Conf> for Notification {
    fn from(conf: &Conf) -> Self {
        Self::new(
            conf.app_name.as_str(),
            "",
            "",
            conf.icon.as_str(),
            conf.timeout,
            conf.urgency,
        )
    }
}
