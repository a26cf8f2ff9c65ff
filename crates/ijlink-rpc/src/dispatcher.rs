//! Method call dispatch over a caller-owned connection

use ijlink_core::{NodeId, Variant};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::connection::{CallError, Connection, ConnectionState};
use crate::envelope::{CallMethodRequest, CallRequest, CallResponse, CommandInvocation};

/// Namespace index printer methods live in
pub const METHOD_NAMESPACE: u16 = 2;

/// Default time to wait for a call response
pub const DEFAULT_CALL_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatcherConfig {
    /// Namespace index prefixed to every method name
    pub method_namespace: u16,
    /// Time to wait for a call response in milliseconds
    pub call_timeout_ms: u64,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            method_namespace: METHOD_NAMESPACE,
            call_timeout_ms: DEFAULT_CALL_TIMEOUT_MS,
        }
    }
}

/// Stateless call dispatcher.
///
/// Never opens or reopens a connection and never retries. A failed call
/// pushes the connection into `Faulted` and yields `None`.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    config: DispatcherConfig,
}

impl Dispatcher {
    pub fn new(config: DispatcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Method identifier for a literal method name
    pub fn method_id(&self, method: &str) -> NodeId {
        NodeId::string(self.config.method_namespace, method)
    }

    /// Envelope for one method call on the objects folder
    pub fn build_request(&self, invocation: &CommandInvocation) -> CallRequest {
        CallRequest {
            methods_to_call: vec![CallMethodRequest {
                object_id: NodeId::OBJECTS_FOLDER,
                method_id: self.method_id(&invocation.method),
                input_arguments: invocation.arguments.clone(),
            }],
        }
    }

    /// Call `method` with `arguments` on `connection`.
    ///
    /// Returns `None` without sending anything when the connection is
    /// absent or not opened. Returns `None` and faults the connection when
    /// the call fails or times out. A returned response may still carry a
    /// bad status; see [`CallResponse::usable_outputs`].
    pub async fn invoke<C: Connection>(
        &self,
        connection: Option<&C>,
        method: &str,
        arguments: Vec<Variant>,
    ) -> Option<CallResponse> {
        self.invoke_command(connection, &CommandInvocation::new(method, arguments))
            .await
    }

    pub async fn invoke_command<C: Connection>(
        &self,
        connection: Option<&C>,
        invocation: &CommandInvocation,
    ) -> Option<CallResponse> {
        let connection = match connection {
            Some(c) if c.state() == ConnectionState::Opened => c,
            _ => {
                warn!(method = %invocation.method, "{}", CallError::NotConnected);
                return None;
            }
        };

        let request = self.build_request(invocation);
        info!(
            method = %invocation.method,
            arguments = invocation.arguments.len(),
            "Calling printer method"
        );

        let call_timeout = Duration::from_millis(self.config.call_timeout_ms);
        let outcome = match timeout(call_timeout, connection.call(request)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(CallError::Timeout(call_timeout)),
        };

        match outcome {
            Ok(response) => {
                debug!(
                    method = %invocation.method,
                    status = %response.service_result,
                    "Call completed"
                );
                Some(response)
            }
            Err(e) => {
                warn!(method = %invocation.method, error = %e, "Call failed, faulting connection");
                connection.fault(&e);
                None
            }
        }
    }

    /// [`invoke`](Self::invoke) reduced to the usable outputs, if any
    pub async fn invoke_outputs<C: Connection>(
        &self,
        connection: Option<&C>,
        method: &str,
        arguments: Vec<Variant>,
    ) -> Option<Vec<Variant>> {
        let response = self.invoke(connection, method, arguments).await?;
        match response.usable_outputs() {
            Some(outputs) => Some(outputs.to_vec()),
            None => {
                debug!(method = %method, status = %response.service_result, "No usable output");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubConnection;
    use ijlink_core::StatusCode;

    fn good(outputs: Vec<Variant>) -> CallResponse {
        CallResponse::with_outputs(StatusCode::GOOD, outputs)
    }

    #[test]
    fn test_build_request_addresses_method() {
        let dispatcher = Dispatcher::default();
        let request = dispatcher.build_request(&CommandInvocation::new(
            "StoreMessage",
            vec![Variant::from("NewMessage.next"), Variant::from("<msg/>")],
        ));

        let call = &request.methods_to_call[0];
        assert_eq!(call.method_id.to_string(), "ns=2;s=StoreMessage");
        assert_eq!(call.object_id, NodeId::OBJECTS_FOLDER);
        assert_eq!(call.input_arguments.len(), 2);
    }

    #[tokio::test]
    async fn test_invoke_returns_response() {
        let conn = StubConnection::opened(good(vec![Variant::from(0)]));
        let dispatcher = Dispatcher::default();

        let response = dispatcher
            .invoke(Some(&conn), "StopPrinting", vec![Variant::from(1)])
            .await
            .unwrap();

        assert!(response.is_usable());
        assert_eq!(conn.calls(), 1);
        let requests = conn.requests();
        let sent = &requests[0].methods_to_call[0];
        assert_eq!(sent.method_id, NodeId::string(2, "StopPrinting"));
        assert_eq!(sent.input_arguments, vec![Variant::Int(1)]);
        assert_eq!(conn.state(), ConnectionState::Opened);
    }

    #[tokio::test]
    async fn test_not_opened_skips_call() {
        let dispatcher = Dispatcher::default();
        for state in [
            ConnectionState::Closed,
            ConnectionState::Opening,
            ConnectionState::Faulted,
        ] {
            let conn = StubConnection::new(state, Ok(good(Vec::new())));
            let response = dispatcher.invoke(Some(&conn), "GetConfiguration", Vec::new()).await;
            assert!(response.is_none());
            assert_eq!(conn.calls(), 0);
            assert_eq!(conn.state(), state);
        }
    }

    #[tokio::test]
    async fn test_absent_connection_skips_call() {
        let dispatcher = Dispatcher::default();
        let response = dispatcher
            .invoke::<StubConnection>(None, "GetConfiguration", Vec::new())
            .await;
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_transport_error_faults_connection() {
        let error = CallError::Transport("connection reset".to_string());
        let conn = StubConnection::failing(error.clone());
        let dispatcher = Dispatcher::default();

        let response = dispatcher
            .invoke(Some(&conn), "GetStatusInformation", vec![Variant::from(1)])
            .await;

        assert!(response.is_none());
        assert_eq!(conn.state(), ConnectionState::Faulted);
        assert_eq!(conn.faults(), vec![error]);
    }

    #[tokio::test]
    async fn test_timeout_faults_connection() {
        let conn = StubConnection::opened(good(Vec::new())).with_delay(Duration::from_millis(500));
        let dispatcher = Dispatcher::new(DispatcherConfig {
            call_timeout_ms: 50,
            ..Default::default()
        });

        let response = dispatcher.invoke(Some(&conn), "GetDiagnostics", vec![Variant::from(1)]).await;

        assert!(response.is_none());
        assert_eq!(conn.state(), ConnectionState::Faulted);
        assert_eq!(
            conn.faults(),
            vec![CallError::Timeout(Duration::from_millis(50))]
        );
    }

    #[tokio::test]
    async fn test_post_action_failed_is_not_a_fault() {
        let conn = StubConnection::opened(CallResponse::with_outputs(
            StatusCode::GOOD_POST_ACTION_FAILED,
            vec![Variant::from(0), Variant::from("ignored")],
        ));
        let dispatcher = Dispatcher::default();

        let outputs = dispatcher
            .invoke_outputs(Some(&conn), "PrintStoredMessage", vec![Variant::from("MsgA")])
            .await;

        assert!(outputs.is_none());
        assert_eq!(conn.state(), ConnectionState::Opened);
        assert!(conn.faults().is_empty());
    }

    #[tokio::test]
    async fn test_service_fault_faults_connection() {
        let error = CallError::Fault(StatusCode::BAD_METHOD_INVALID);
        let conn = StubConnection::failing(error.clone());
        let dispatcher = Dispatcher::default();

        let response = dispatcher.invoke(Some(&conn), "GetConfiguration", Vec::new()).await;

        assert!(response.is_none());
        assert_eq!(conn.state(), ConnectionState::Faulted);
        assert_eq!(conn.faults(), vec![error]);
    }

    #[tokio::test]
    async fn test_bad_status_is_not_a_fault() {
        let conn = StubConnection::opened(CallResponse::with_outputs(
            StatusCode::BAD_METHOD_INVALID,
            Vec::new(),
        ));
        let dispatcher = Dispatcher::default();

        let response = dispatcher.invoke(Some(&conn), "NoSuchMethod", Vec::new()).await;

        assert!(!response.unwrap().is_usable());
        assert_eq!(conn.state(), ConnectionState::Opened);
    }
}
