//! Common test utilities and a fake local server for integration tests.

use std::cell::RefCell;
use std::collections::BTreeMap;

use serde::Serialize;
use verdict::{Describe, Option, Payload, Result, Structured, err, ok, some};

/// Installs a test subscriber so unwrap events show up under `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// HTTP method an endpoint answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Method {
    Get,
    Post,
}

/// Configuration of a mocked endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointConfig {
    pub status_code: u16,
    pub method: Method,
    pub body: String,
}

/// Request to register or replace a named endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointPayload {
    pub endpoint: String,
    pub config: EndpointConfig,
}

impl EndpointPayload {
    /// A `GET` endpoint answering 200 with a plain body.
    pub fn plain(endpoint: &str, body: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            config: EndpointConfig {
                status_code: 200,
                method: Method::Get,
                body: body.to_string(),
            },
        }
    }
}

/// Failures reported by the fake server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ServerError {
    PortInUse { port: u16 },
    NotRunning,
    AlreadyRunning { port: u16 },
    InvalidEndpoint { endpoint: String },
}

impl Describe for ServerError {
    fn describe(&self) -> Payload {
        Structured(self).describe()
    }
}

/// Whether an endpoint was newly created or replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Created,
    Updated,
}

/// In-memory stand-in for the local server collaborator.
#[derive(Debug, Default)]
pub struct FakeLocalServer {
    busy_ports: Vec<u16>,
    port: RefCell<Option<u16>>,
    endpoints: RefCell<BTreeMap<String, EndpointConfig>>,
}

impl FakeLocalServer {
    /// A server where `busy_ports` cannot be bound.
    pub fn with_busy_ports(busy_ports: Vec<u16>) -> Self {
        Self {
            busy_ports,
            ..Self::default()
        }
    }

    pub fn start(&self, port: u16) -> Result<u16, ServerError> {
        if let Option::Some(running) = *self.port.borrow() {
            return err(ServerError::AlreadyRunning { port: running });
        }
        if self.busy_ports.contains(&port) {
            return err(ServerError::PortInUse { port });
        }
        *self.port.borrow_mut() = some(port);
        ok(port)
    }

    pub fn stop(&self) -> Result<(), ServerError> {
        let previous = std::mem::take(&mut *self.port.borrow_mut());
        previous.ok_or(ServerError::NotRunning).map(|_| ())
    }

    pub fn add_or_update_endpoint(
        &self,
        payload: EndpointPayload,
    ) -> Result<Registration, ServerError> {
        if self.port.borrow().is_none() {
            return err(ServerError::NotRunning);
        }
        if payload.endpoint.is_empty() || payload.endpoint.contains(' ') {
            return err(ServerError::InvalidEndpoint {
                endpoint: payload.endpoint,
            });
        }
        let previous = self
            .endpoints
            .borrow_mut()
            .insert(payload.endpoint, payload.config);
        match previous {
            Some(_) => ok(Registration::Updated),
            None => ok(Registration::Created),
        }
    }

    pub fn endpoint(&self, name: &str) -> Option<EndpointConfig> {
        self.endpoints.borrow().get(name).cloned().into()
    }

    pub fn is_running(&self) -> bool {
        self.port.borrow().is_some()
    }
}
