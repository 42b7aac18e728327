//! A default notification for callers that don't want to keep a [`Notification`] around.
//!
//! The process-wide instance starts out with a 3 second timeout, normal urgency and empty text.
//! Changes made through the setters are seen by every later call; use an explicit
//! [`Notification`] when that is not wanted.

// -- std imports
use std::sync::{OnceLock, PoisonError, RwLock};
use std::time::Duration;

// -- module imports
use crate::{
    configuration::Conf,
    error::Result,
    notification::Notification,
    notify::NotifyClient,
    urgency::Urgency,
};

/// Global implicit notification on the session bus.
static IMPLICIT: OnceLock<ImplicitNotification> = OnceLock::new();

#[derive(Debug)]
pub struct ImplicitNotification {
    template: RwLock<Notification>,
    client: NotifyClient,
}

impl ImplicitNotification {
    /// Creates an instance with the default settings that sends through `client`.
    pub fn new(client: NotifyClient) -> Self {
        Self {
            template: RwLock::new(Notification::from(&Conf::default())),
            client,
        }
    }

    /// Returns the process-wide instance, created on first use.
    pub fn global() -> &'static Self {
        IMPLICIT.get_or_init(|| Self::new(NotifyClient::global().clone()))
    }

    /// Sets the name, icon, timeout and urgency in one go.
    pub fn init(&self, app_name: &str, icon: &str, timeout: Option<Duration>, urgency: Urgency) {
        self.update(|n| {
            n.set_app_name(app_name);
            n.set_icon(icon);
            n.set_timeout(timeout);
            n.set_urgency(urgency);
        });
    }

    /// Applies loaded settings, keeping the current summary and body.
    pub fn configure(&self, conf: &Conf) {
        self.init(&conf.app_name, &conf.icon, conf.timeout, conf.urgency);
    }

    /// A copy of the current settings.
    pub fn snapshot(&self) -> Notification {
        self.template
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn update(&self, f: impl FnOnce(&mut Notification)) {
        let mut template = self.template.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut *template);
    }

    pub fn app_name(&self) -> String {
        self.snapshot().get_app_name().to_string()
    }

    pub fn set_app_name(&self, app_name: &str) {
        self.update(|n| n.set_app_name(app_name));
    }

    pub fn summary(&self) -> String {
        self.snapshot().get_summary().to_string()
    }

    pub fn set_summary(&self, summary: &str) {
        self.update(|n| n.set_summary(summary));
    }

    pub fn body(&self) -> String {
        self.snapshot().get_body().to_string()
    }

    pub fn set_body(&self, body: &str) {
        self.update(|n| n.set_body(body));
    }

    pub fn icon(&self) -> String {
        self.snapshot().get_icon().to_string()
    }

    pub fn set_icon(&self, icon: &str) {
        self.update(|n| n.set_icon(icon));
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.snapshot().get_timeout()
    }

    pub fn set_timeout(&self, timeout: Option<Duration>) {
        self.update(|n| n.set_timeout(timeout));
    }

    pub fn urgency(&self) -> Urgency {
        self.snapshot().get_urgency()
    }

    pub fn set_urgency(&self, urgency: Urgency) {
        self.update(|n| n.set_urgency(urgency));
    }

    // Sends work on a snapshot so the lock is not held across the bus round trip.

    pub fn send(&self) -> Result<u32> {
        self.snapshot().send(&self.client)
    }

    pub fn send_with_override(&self, summary: &str, body: &str) -> Result<u32> {
        self.snapshot()
            .send_with_override(&self.client, summary, body)
    }

    pub fn send_with_urgency(&self, summary: &str, body: &str, urgency: Urgency) -> Result<u32> {
        self.snapshot()
            .send_with_urgency(&self.client, summary, body, urgency)
    }

    pub fn replace(&self, id: u32) -> Result<u32> {
        self.snapshot().replace(&self.client, id)
    }

    pub fn replace_with_override(&self, id: u32, summary: &str, body: &str) -> Result<u32> {
        self.snapshot()
            .replace_with_override(&self.client, id, summary, body)
    }

    pub fn replace_with_urgency(
        &self,
        id: u32,
        summary: &str,
        body: &str,
        urgency: Urgency,
    ) -> Result<u32> {
        self.snapshot()
            .replace_with_urgency(&self.client, id, summary, body, urgency)
    }
}

// Crate-level shortcuts on the global instance.

pub fn init(app_name: &str, icon: &str, timeout: Option<Duration>, urgency: Urgency) {
    ImplicitNotification::global().init(app_name, icon, timeout, urgency);
}

pub fn app_name() -> String {
    ImplicitNotification::global().app_name()
}

pub fn set_app_name(app_name: &str) {
    ImplicitNotification::global().set_app_name(app_name);
}

pub fn icon() -> String {
    ImplicitNotification::global().icon()
}

pub fn set_icon(icon: &str) {
    ImplicitNotification::global().set_icon(icon);
}

pub fn timeout() -> Option<Duration> {
    ImplicitNotification::global().timeout()
}

pub fn set_timeout(timeout: Option<Duration>) {
    ImplicitNotification::global().set_timeout(timeout);
}

pub fn urgency() -> Urgency {
    ImplicitNotification::global().urgency()
}

pub fn set_urgency(urgency: Urgency) {
    ImplicitNotification::global().set_urgency(urgency);
}

pub fn send() -> Result<u32> {
    ImplicitNotification::global().send()
}

pub fn send_with_override(summary: &str, body: &str) -> Result<u32> {
    ImplicitNotification::global().send_with_override(summary, body)
}

pub fn send_with_urgency(summary: &str, body: &str, urgency: Urgency) -> Result<u32> {
    ImplicitNotification::global().send_with_urgency(summary, body, urgency)
}

pub fn replace(id: u32) -> Result<u32> {
    ImplicitNotification::global().replace(id)
}

pub fn replace_with_override(id: u32, summary: &str, body: &str) -> Result<u32> {
    ImplicitNotification::global().replace_with_override(id, summary, body)
}

pub fn replace_with_urgency(id: u32, summary: &str, body: &str, urgency: Urgency) -> Result<u32> {
    ImplicitNotification::global().replace_with_urgency(id, summary, body, urgency)
}
