//! Stub connections for tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::connection::{CallError, Connection, ConnectionState};
use crate::envelope::{CallRequest, CallResponse};

/// Connection that replays one scripted outcome and records every request
pub struct StubConnection {
    state: Mutex<ConnectionState>,
    outcome: Result<CallResponse, CallError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    requests: Mutex<Vec<CallRequest>>,
    faults: Mutex<Vec<CallError>>,
}

impl StubConnection {
    pub fn new(state: ConnectionState, outcome: Result<CallResponse, CallError>) -> Self {
        Self {
            state: Mutex::new(state),
            outcome,
            delay: None,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            faults: Mutex::new(Vec::new()),
        }
    }

    pub fn opened(response: CallResponse) -> Self {
        Self::new(ConnectionState::Opened, Ok(response))
    }

    pub fn failing(error: CallError) -> Self {
        Self::new(ConnectionState::Opened, Err(error))
    }

    /// Delay every call by `delay` before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<CallRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn faults(&self) -> Vec<CallError> {
        self.faults.lock().unwrap().clone()
    }
}

impl Connection for StubConnection {
    fn state(&self) -> ConnectionState {
        *self.state.lock().unwrap()
    }

    async fn call(&self, request: CallRequest) -> Result<CallResponse, CallError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcome.clone()
    }

    fn fault(&self, error: &CallError) {
        self.faults.lock().unwrap().push(error.clone());
        *self.state.lock().unwrap() = ConnectionState::Faulted;
    }
}
