//! ijlink RPC - Remote method calls on an established printer session
//!
//! The session itself (channel setup, security handshake, wire encoding) is
//! provided by the caller through the [`Connection`] trait. This crate
//! builds call envelopes, dispatches them, and interprets the results:
//! - Argument coercion from command-line tokens
//! - The printer command catalog
//! - Positional decoding of status information

pub mod catalog;
pub mod client;
pub mod coerce;
pub mod connection;
pub mod dispatcher;
pub mod envelope;
pub mod status;

#[cfg(test)]
pub(crate) mod testing;

pub use catalog::{ArgKind, CatalogError, Command, Parameter};
pub use client::PrinterClient;
pub use coerce::{coerce_argument, parse_command_line, CoerceError};
pub use connection::{CallError, Connection, ConnectionState};
pub use dispatcher::{Dispatcher, DispatcherConfig, METHOD_NAMESPACE};
pub use envelope::{
    string_list_output, CallMethodRequest, CallMethodResult, CallRequest, CallResponse,
    CommandInvocation,
};
pub use status::StatusInformation;
