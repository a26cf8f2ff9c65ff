//! Session abstraction supplied by the caller

use ijlink_core::StatusCode;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

use crate::envelope::{CallRequest, CallResponse};

/// Lifecycle state of a printer session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Closed,
    Opening,
    Opened,
    Faulted,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    #[error("Not connected to printer gateway")]
    NotConnected,
    #[error("Call timed out after {0:?}")]
    Timeout(Duration),
    #[error("Transport error: {0}")]
    Transport(String),
    /// The session rejected the whole request with a service-level status.
    /// Raised by [`Connection`] implementations; a per-method bad status
    /// arrives inside a normal [`CallResponse`] instead.
    #[error("Remote fault: {0}")]
    Fault(StatusCode),
}

/// An already-established session to a printer.
///
/// The owner opens, closes and reopens the session. The dispatcher only
/// reads [`state`](Connection::state), submits calls, and reports failures
/// through [`fault`](Connection::fault) so the owner's reconnection logic
/// can take over.
pub trait Connection: Send + Sync {
    fn state(&self) -> ConnectionState;

    /// Submit a call request and wait for the response
    fn call(
        &self,
        request: CallRequest,
    ) -> impl Future<Output = Result<CallResponse, CallError>> + Send;

    /// Move the session into [`ConnectionState::Faulted`]
    fn fault(&self, error: &CallError);
}
