// -- std imports
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

// -- crate imports
use tracing::{debug, info, instrument, warn};
use zbus::blocking::Connection;

// -- module imports
use crate::error::{Error, Result};

/// Global connection manager bound to the session bus.
static MANAGER: OnceLock<Arc<ConnectionManager>> = OnceLock::new();

/// Opens a session-scoped bus connection.
pub trait Connector: Send + Sync {
    fn connect(&self) -> zbus::Result<Connection>;
}

/// Connects to the user's session bus.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConnector;

impl Connector for SessionConnector {
    fn connect(&self) -> zbus::Result<Connection> {
        Connection::session()
    }
}

/// Owns the single shared bus connection.
///
/// The connection is opened on first use and reused by every later call. Creation is serialized,
/// so concurrent first callers end up sharing one connection.
pub struct ConnectionManager {
    connector: Box<dyn Connector>,
    conn: Mutex<Option<Connection>>,
}

impl std::fmt::Debug for ConnectionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionManager")
            .field("connected", &self.is_connected())
            .finish_non_exhaustive()
    }
}

impl ConnectionManager {
    pub fn new(connector: impl Connector + 'static) -> Self {
        Self {
            connector: Box::new(connector),
            conn: Mutex::new(None),
        }
    }

    /// A manager for the session bus.
    pub fn session() -> Self {
        Self::new(SessionConnector)
    }

    /// Returns the process-wide session bus manager.
    pub fn global() -> Arc<Self> {
        MANAGER.get_or_init(|| Arc::new(Self::session())).clone()
    }

    /// Returns the shared connection, opening it if this is the first call.
    ///
    /// # Errors
    /// - [`Error::Connection`] if no session bus is reachable. Nothing is cached in that case, so a
    ///   later call tries again.
    #[instrument(skip(self))]
    pub fn connection(&self) -> Result<Connection> {
        let mut guard = self.conn.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(conn) = guard.as_ref() {
            return Ok(conn.clone());
        }

        debug!("No bus connection yet, connecting.");
        let conn = self.connector.connect().map_err(|e| {
            warn!(error = %e, "Could not connect to the session bus.");
            Error::Connection(e)
        })?;
        info!("Connected to the session bus.");

        *guard = Some(conn.clone());
        Ok(conn)
    }

    /// Whether a connection has already been established.
    pub fn is_connected(&self) -> bool {
        self.conn
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
