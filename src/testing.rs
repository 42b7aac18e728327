//! Test doubles: an in-process notification daemon reached over a peer-to-peer bus connection.

// -- std imports
use std::collections::HashMap;
use std::os::unix::net::UnixStream;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::thread;

// -- crate imports
use zbus::{
    Guid,
    blocking::{Connection, connection},
    fdo, interface,
    object_server::Interface,
    zvariant::OwnedValue,
};

// -- module imports
use crate::{connection::Connector, notify::NOTIFICATIONS_PATH};

static TRACING: Once = Once::new();

pub(crate) fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// Arguments of one `Notify` call as the daemon received them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordedCall {
    pub app_name: String,
    pub replaces_id: u32,
    pub icon: String,
    pub summary: String,
    pub body: String,
    pub actions: Vec<String>,
    pub hint_names: Vec<String>,
    pub urgency: Option<u8>,
    pub expire_timeout: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Reply(u32),
    Reject,
    Garbled,
}

#[derive(Debug)]
struct State {
    mode: Mode,
    calls: Vec<RecordedCall>,
    closed: Vec<u32>,
    // server ends of the peer connections; dropping them would hang up on the client
    servers: Vec<Connection>,
}

#[derive(Debug, Clone)]
pub(crate) struct FakeDaemon {
    state: Arc<Mutex<State>>,
}

impl FakeDaemon {
    /// A daemon that accepts every call and replies with id 1.
    pub fn new() -> Self {
        Self::with_mode(Mode::Reply(1))
    }

    /// A daemon whose `Notify` replies with a string and which has no `GetCapabilities`.
    pub fn garbled() -> Self {
        Self::with_mode(Mode::Garbled)
    }

    fn with_mode(mode: Mode) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                mode,
                calls: Vec::new(),
                closed: Vec::new(),
                servers: Vec::new(),
            })),
        }
    }

    pub fn reply_with(self, id: u32) -> Self {
        self.state.lock().unwrap().mode = Mode::Reply(id);
        self
    }

    pub fn rejecting(self) -> Self {
        self.state.lock().unwrap().mode = Mode::Reject;
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn closed(&self) -> Vec<u32> {
        self.state.lock().unwrap().closed.clone()
    }

    /// Opens a fresh peer-to-peer connection to this daemon and returns the client end.
    pub fn connect(&self) -> zbus::Result<Connection> {
        let mode = self.state.lock().unwrap().mode;
        let (server, client) = match mode {
            Mode::Garbled => peer_pair(GarbledNotifications)?,
            Mode::Reply(_) | Mode::Reject => peer_pair(FakeNotifications {
                state: self.state.clone(),
            })?,
        };
        self.state.lock().unwrap().servers.push(server);

        Ok(client)
    }
}

fn peer_pair<I: Interface>(iface: I) -> zbus::Result<(Connection, Connection)> {
    init_tracing();
    let (server_stream, client_stream) = UnixStream::pair()?;

    let server = thread::spawn(move || {
        connection::Builder::unix_stream(server_stream)
            .server(Guid::generate())?
            .p2p()
            .serve_at(NOTIFICATIONS_PATH, iface)?
            .build()
    });
    let client = connection::Builder::unix_stream(client_stream)
        .p2p()
        .build()?;
    let server = server.join().expect("fake daemon thread panicked")?;

    Ok((server, client))
}

struct FakeNotifications {
    state: Arc<Mutex<State>>,
}

#[interface(name = "org.freedesktop.Notifications")]
impl FakeNotifications {
    fn get_capabilities(&self) -> Vec<String> {
        vec!["body".to_string(), "icon-static".to_string()]
    }

    fn notify(
        &self,
        app_name: String,
        replaces_id: u32,
        app_icon: String,
        summary: String,
        body: String,
        actions: Vec<String>,
        hints: HashMap<String, OwnedValue>,
        expire_timeout: i32,
    ) -> fdo::Result<u32> {
        let mut state = self.state.lock().unwrap();
        let mut hint_names: Vec<String> = hints.keys().cloned().collect();
        hint_names.sort();

        state.calls.push(RecordedCall {
            app_name,
            replaces_id,
            icon: app_icon,
            summary,
            body,
            actions,
            hint_names,
            urgency: hints.get("urgency").and_then(|v| u8::try_from(v).ok()),
            expire_timeout,
        });

        match state.mode {
            Mode::Reply(id) => Ok(id),
            Mode::Reject | Mode::Garbled => {
                Err(fdo::Error::InvalidArgs("notification rejected".to_string()))
            }
        }
    }

    fn close_notification(&self, id: u32) -> fdo::Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.mode == Mode::Reject {
            return Err(fdo::Error::InvalidArgs(format!("no notification {id}")));
        }
        state.closed.push(id);

        Ok(())
    }
}

struct GarbledNotifications;

#[interface(name = "org.freedesktop.Notifications")]
impl GarbledNotifications {
    fn notify(
        &self,
        _app_name: String,
        _replaces_id: u32,
        _app_icon: String,
        _summary: String,
        _body: String,
        _actions: Vec<String>,
        _hints: HashMap<String, OwnedValue>,
        _expire_timeout: i32,
    ) -> String {
        "forty-two".to_string()
    }
}

/// Hands out connections to a [`FakeDaemon`] and counts how often it was asked.
#[derive(Debug, Clone)]
pub(crate) struct FakeConnector {
    daemon: FakeDaemon,
    connects: Arc<AtomicUsize>,
}

impl FakeConnector {
    pub fn new(daemon: FakeDaemon) -> Self {
        Self {
            daemon,
            connects: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }
}

impl Connector for FakeConnector {
    fn connect(&self) -> zbus::Result<Connection> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        self.daemon.connect()
    }
}

/// A connector for a machine without a session bus.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FailingConnector;

impl Connector for FailingConnector {
    fn connect(&self) -> zbus::Result<Connection> {
        Err(zbus::Error::Address("no session bus".to_string()))
    }
}
