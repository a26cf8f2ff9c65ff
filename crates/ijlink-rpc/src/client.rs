//! Typed helpers for common printer calls

use ijlink_core::Variant;
use tracing::info;

use crate::catalog::Command;
use crate::connection::Connection;
use crate::dispatcher::Dispatcher;
use crate::envelope::{string_list_output, CallResponse, CommandInvocation};
use crate::status::StatusInformation;

/// A dispatcher bound to one caller-owned connection
pub struct PrinterClient<'a, C: Connection> {
    connection: &'a C,
    dispatcher: Dispatcher,
}

impl<'a, C: Connection> PrinterClient<'a, C> {
    pub fn new(connection: &'a C, dispatcher: Dispatcher) -> Self {
        Self {
            connection,
            dispatcher,
        }
    }

    pub async fn call(&self, invocation: &CommandInvocation) -> Option<CallResponse> {
        self.dispatcher
            .invoke_command(Some(self.connection), invocation)
            .await
    }

    async fn call_command(&self, command: Command, arguments: Vec<Variant>) -> Option<Vec<Variant>> {
        self.dispatcher
            .invoke_outputs(Some(self.connection), command.name(), arguments)
            .await
    }

    /// Read and decode the status of print task `task`
    pub async fn status_information(&self, task: i32) -> Option<StatusInformation> {
        let outputs = self
            .call_command(Command::GetStatusInformation, vec![Variant::Int(task)])
            .await?;
        StatusInformation::from_outputs(&outputs)
    }

    /// Names of messages stored on the printer
    pub async fn stored_messages(&self) -> Option<Vec<String>> {
        let outputs = self
            .call_command(Command::GetStoredMessageList, Vec::new())
            .await?;
        string_list_output(&outputs)
    }

    /// Returns whether the printer reported success
    pub async fn stop_printing(&self, task: i32) -> bool {
        let ok = self
            .call_command(Command::StopPrinting, vec![Variant::Int(task)])
            .await
            .is_some();
        info!(task = task, ok = ok, "StopPrinting executed");
        ok
    }

    /// Upload a message under `name`
    pub async fn store_message(&self, name: &str, content: &str) -> bool {
        let ok = self
            .call_command(
                Command::StoreMessage,
                vec![Variant::from(name), Variant::from(content)],
            )
            .await
            .is_some();
        info!(name = %name, bytes = content.len(), ok = ok, "Message sent to printer");
        ok
    }

    pub async fn print_stored_message(&self, name: &str) -> bool {
        self.call_command(Command::PrintStoredMessage, vec![Variant::from(name)])
            .await
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::{CallError, ConnectionState};
    use crate::testing::StubConnection;
    use ijlink_core::StatusCode;

    fn status_outputs() -> Vec<Variant> {
        vec![
            Variant::from(0),
            Variant::from("Running"),
            Variant::from("MsgA"),
            Variant::from(100),
            Variant::from(vec!["Cyan"]),
            Variant::from(vec![80]),
            Variant::Array(Vec::new()),
            Variant::from(vec!["LowInk"]),
        ]
    }

    #[tokio::test]
    async fn test_status_information() {
        let conn = StubConnection::opened(CallResponse::with_outputs(
            StatusCode::GOOD,
            status_outputs(),
        ));
        let client = PrinterClient::new(&conn, Dispatcher::default());

        let status = client.status_information(1).await.unwrap();
        assert_eq!(status.status, "Running");
        assert_eq!(status.message_name, "MsgA");
        assert_eq!(status.line_speed, Variant::Int(100));
        assert_eq!(status.warnings, vec!["LowInk"]);
        assert!(status.errors.is_empty());

        let requests = conn.requests();
        let sent = &requests[0].methods_to_call[0];
        assert_eq!(sent.method_id.to_string(), "ns=2;s=GetStatusInformation");
        assert_eq!(sent.input_arguments, vec![Variant::Int(1)]);
    }

    #[tokio::test]
    async fn test_status_information_post_action_failed() {
        let conn = StubConnection::opened(CallResponse::with_outputs(
            StatusCode::GOOD_POST_ACTION_FAILED,
            status_outputs(),
        ));
        let client = PrinterClient::new(&conn, Dispatcher::default());

        assert!(client.status_information(1).await.is_none());
        assert_eq!(conn.state(), ConnectionState::Opened);
    }

    #[tokio::test]
    async fn test_stored_messages() {
        let conn = StubConnection::opened(CallResponse::with_outputs(
            StatusCode::GOOD,
            vec![Variant::from(0), Variant::from(vec!["MsgA", "MsgB"])],
        ));
        let client = PrinterClient::new(&conn, Dispatcher::default());

        assert_eq!(
            client.stored_messages().await.unwrap(),
            vec!["MsgA".to_string(), "MsgB".to_string()]
        );
    }

    #[tokio::test]
    async fn test_store_message_arguments() {
        let conn = StubConnection::opened(CallResponse::with_outputs(StatusCode::GOOD, Vec::new()));
        let client = PrinterClient::new(&conn, Dispatcher::default());

        assert!(client.store_message("NewMessage.next", "<message/>").await);
        let requests = conn.requests();
        let sent = &requests[0].methods_to_call[0];
        assert_eq!(
            sent.input_arguments,
            vec![Variant::from("NewMessage.next"), Variant::from("<message/>")]
        );
    }

    #[tokio::test]
    async fn test_failed_call_reports_false_and_faults() {
        let conn = StubConnection::failing(CallError::Transport("broken pipe".to_string()));
        let client = PrinterClient::new(&conn, Dispatcher::default());

        assert!(!client.stop_printing(1).await);
        assert_eq!(conn.state(), ConnectionState::Faulted);

        // Faulted connection is not called again
        assert!(!client.print_stored_message("MsgA").await);
        assert_eq!(conn.calls(), 1);
    }
}
