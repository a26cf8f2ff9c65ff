//! Call envelopes and their results

use ijlink_core::{NodeId, StatusCode, Variant};
use serde::{Deserialize, Serialize};

/// A method name with its typed arguments, before addressing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInvocation {
    pub method: String,
    pub arguments: Vec<Variant>,
}

impl CommandInvocation {
    pub fn new(method: impl Into<String>, arguments: Vec<Variant>) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }
}

/// One addressed method call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallMethodRequest {
    pub object_id: NodeId,
    pub method_id: NodeId,
    pub input_arguments: Vec<Variant>,
}

/// Envelope submitted on the connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    pub methods_to_call: Vec<CallMethodRequest>,
}

/// Result of one method call
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallMethodResult {
    pub status_code: StatusCode,
    pub output_arguments: Vec<Variant>,
}

/// Response to a [`CallRequest`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallResponse {
    /// Overall status of the call service
    pub service_result: StatusCode,
    pub results: Option<Vec<CallMethodResult>>,
}

impl CallResponse {
    /// Response carrying a single method result with `outputs`
    pub fn with_outputs(service_result: StatusCode, outputs: Vec<Variant>) -> Self {
        Self {
            service_result,
            results: Some(vec![CallMethodResult {
                status_code: service_result,
                output_arguments: outputs,
            }]),
        }
    }

    /// Outputs of the first method call, if the response is usable.
    ///
    /// Usable means a result list is present, the overall status is good,
    /// and it is not `GoodPostActionFailed` (accepted, but the action did
    /// not happen).
    pub fn usable_outputs(&self) -> Option<&[Variant]> {
        if !self.service_result.is_usable() {
            return None;
        }
        let first = self.results.as_ref()?.first()?;
        Some(&first.output_arguments)
    }

    pub fn is_usable(&self) -> bool {
        self.usable_outputs().is_some()
    }
}

/// Output index 1 read as a list of strings, which is where generic
/// commands place their textual result
pub fn string_list_output(outputs: &[Variant]) -> Option<Vec<String>> {
    outputs
        .get(1)
        .map(|value| value.to_list().iter().map(ToString::to_string).collect())
}
