//! Methods exposed by the printer

use ijlink_core::Variant;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown printer command: {0}")]
    UnknownCommand(String),
}

/// Expected kind of a method argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    Int,
    Bool,
    String,
}

impl ArgKind {
    pub fn matches(&self, value: &Variant) -> bool {
        matches!(
            (self, value),
            (Self::Int, Variant::Int(_))
                | (Self::Bool, Variant::Bool(_))
                | (Self::String, Variant::Text(_))
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Bool => "bool",
            Self::String => "string",
        }
    }
}

/// Documented argument of a method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    pub kind: ArgKind,
    pub description: &'static str,
}

const fn param(kind: ArgKind, description: &'static str) -> Parameter {
    Parameter { kind, description }
}

const TASK: Parameter = param(ArgKind::Int, "Task number");
const MESSAGE_NAME: Parameter = param(ArgKind::String, "The message name");
const MESSAGE: Parameter = param(ArgKind::String, "The message to store");
const FILE_NAME: Parameter = param(ArgKind::String, "FileName");
const FILE: Parameter = param(ArgKind::String, "File");
const MD5_HASH: Parameter = param(ArgKind::String, "md5Hash");
const ENABLE: Parameter = param(ArgKind::Bool, "Enable");
const PORT: Parameter = param(ArgKind::Int, "Port");
const PRD_XML: Parameter = param(ArgKind::String, "PRD xml");
const PRD_XML_DATA: Parameter = param(ArgKind::String, "prd xml data");
const CONFIGURATION: Parameter = param(ArgKind::String, "Configuration");
const URL: Parameter = param(ArgKind::String, "URL");

/// Printer method names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    CancelPrinting,
    CompareFile,
    EnableLocalNotification,
    GetConfiguration,
    GetDiagnostics,
    GetFileByName,
    GetPrinterConfiguration,
    GetStatusInformation,
    GetStoredMessageList,
    PrintPrd,
    PrintPreview,
    PrintPreviewCurrent,
    PrintStoredMessage,
    RecallMessage,
    ResumePrinting,
    SendFile,
    SetConfiguration,
    SetNotificationUrl,
    StopPrinting,
    StoreMessage,
}

impl Command {
    pub const ALL: [Command; 20] = [
        Self::CancelPrinting,
        Self::CompareFile,
        Self::EnableLocalNotification,
        Self::GetConfiguration,
        Self::GetDiagnostics,
        Self::GetFileByName,
        Self::GetPrinterConfiguration,
        Self::GetStatusInformation,
        Self::GetStoredMessageList,
        Self::PrintPrd,
        Self::PrintPreview,
        Self::PrintPreviewCurrent,
        Self::PrintStoredMessage,
        Self::RecallMessage,
        Self::ResumePrinting,
        Self::SendFile,
        Self::SetConfiguration,
        Self::SetNotificationUrl,
        Self::StopPrinting,
        Self::StoreMessage,
    ];

    /// Literal method name sent to the printer
    pub fn name(&self) -> &'static str {
        match self {
            Self::CancelPrinting => "CancelPrinting",
            Self::CompareFile => "CompareFile",
            Self::EnableLocalNotification => "EnableLocalNotification",
            Self::GetConfiguration => "GetConfiguration",
            Self::GetDiagnostics => "GetDiagnostics",
            Self::GetFileByName => "GetFileByName",
            Self::GetPrinterConfiguration => "GetPrinterConfiguration",
            Self::GetStatusInformation => "GetStatusInformation",
            Self::GetStoredMessageList => "GetStoredMessageList",
            Self::PrintPrd => "PrintPrd",
            Self::PrintPreview => "PrintPreview",
            Self::PrintPreviewCurrent => "PrintPreviewCurrent",
            Self::PrintStoredMessage => "PrintStoredMessage",
            Self::RecallMessage => "RecallMessage",
            Self::ResumePrinting => "ResumePrinting",
            Self::SendFile => "SendFile",
            Self::SetConfiguration => "SetConfiguration",
            Self::SetNotificationUrl => "SetNotificationURL",
            Self::StopPrinting => "StopPrinting",
            Self::StoreMessage => "StoreMessage",
        }
    }

    pub fn parameters(&self) -> &'static [Parameter] {
        match self {
            Self::CancelPrinting
            | Self::GetDiagnostics
            | Self::GetPrinterConfiguration
            | Self::GetStatusInformation
            | Self::PrintPreviewCurrent
            | Self::ResumePrinting
            | Self::StopPrinting => &[TASK],
            Self::CompareFile => &[FILE_NAME, MD5_HASH],
            Self::EnableLocalNotification => &[ENABLE, PORT],
            Self::GetConfiguration | Self::GetStoredMessageList => &[],
            Self::GetFileByName => &[FILE_NAME],
            Self::PrintPrd => &[PRD_XML, TASK],
            Self::PrintPreview => &[PRD_XML_DATA, TASK],
            Self::PrintStoredMessage | Self::RecallMessage => &[MESSAGE_NAME],
            Self::SendFile => &[FILE_NAME, FILE],
            Self::SetConfiguration => &[CONFIGURATION],
            Self::SetNotificationUrl => &[URL],
            Self::StoreMessage => &[MESSAGE_NAME, MESSAGE],
        }
    }

    /// One-line usage, e.g. `CompareFile (string)FileName (string)md5Hash`
    pub fn usage(&self) -> String {
        let mut usage = self.name().to_string();
        for p in self.parameters() {
            usage.push_str(&format!(" ({}){}", p.kind.as_str(), p.description));
        }
        usage
    }

    /// Describe how `arguments` differ from the documented signature
    pub fn signature_mismatch(&self, arguments: &[Variant]) -> Option<String> {
        let params = self.parameters();
        if params.len() != arguments.len() {
            return Some(format!(
                "{} expects {} argument(s), got {}",
                self.name(),
                params.len(),
                arguments.len()
            ));
        }
        params
            .iter()
            .zip(arguments)
            .enumerate()
            .find(|(_, (p, arg))| !p.kind.matches(arg))
            .map(|(i, (p, arg))| {
                format!(
                    "{} argument {} ({}) expects {}, got {}",
                    self.name(),
                    i + 1,
                    p.description,
                    p.kind.as_str(),
                    arg.kind()
                )
            })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = CatalogError;

    /// Exact method name, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogError::UnknownCommand(s.to_string()))
    }
}
