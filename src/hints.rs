// -- std imports
use std::collections::HashMap;

// -- crate imports
use zbus::zvariant::Value;

// -- module imports
use crate::urgency::Urgency;

/// Name of the hint carrying the urgency byte.
pub const URGENCY_HINT: &str = "urgency";

/// Typed side-channel values sent along with a notification.
///
/// Only urgency is modeled. On the wire this becomes the open `a{sv}` map the daemon expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hints {
    pub urgency: Urgency,
}

impl Hints {
    pub fn new(urgency: Urgency) -> Self {
        Self { urgency }
    }

    /// Builds the `a{sv}` map passed as the `hints` argument of `Notify`.
    pub fn to_wire(&self) -> HashMap<&'static str, Value<'static>> {
        HashMap::from([(URGENCY_HINT, Value::from(self.urgency.as_byte()))])
    }
}

impl From<Urgency> for Hints {
    fn from(urgency: Urgency) -> Self {
        Self::new(urgency)
    }
}
