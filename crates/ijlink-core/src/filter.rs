//! Device type filters carried in discovery probes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Printer family a discovery probe asks for.
///
/// Each filter has a wire tag, which is what goes inside the
/// `{Locate <tag>}` probe, and a human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceTypeFilter {
    #[serde(rename = "UNKNOWN")]
    Unknown,
    #[serde(rename = "ALP")]
    Alp,
    #[serde(rename = "LCIJTask1")]
    IjTask1,
    #[serde(rename = "LCIJTask2")]
    IjTask2,
    #[serde(rename = "LINXSCP")]
    LinxScp,
    #[serde(rename = "FOXJET")]
    Foxjet,
    #[serde(rename = "TTO")]
    Tto,
    #[serde(rename = "SIM")]
    Sim,
    #[serde(rename = "LINXRCI")]
    LinxRci,
}

impl DeviceTypeFilter {
    /// Every defined filter, in declaration order
    pub const ALL: [DeviceTypeFilter; 9] = [
        Self::Unknown,
        Self::Alp,
        Self::IjTask1,
        Self::IjTask2,
        Self::LinxScp,
        Self::Foxjet,
        Self::Tto,
        Self::Sim,
        Self::LinxRci,
    ];

    /// Identifier embedded in the probe payload
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Alp => "ALP",
            Self::IjTask1 => "LCIJTask1",
            Self::IjTask2 => "LCIJTask2",
            Self::LinxScp => "LINXSCP",
            Self::Foxjet => "FOXJET",
            Self::Tto => "TTO",
            Self::Sim => "SIM",
            Self::LinxRci => "LINXRCI",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown printer",
            Self::Alp => "ALP",
            Self::IjTask1 => "IJTask1",
            Self::IjTask2 => "IJTask2",
            Self::LinxScp => "LINXSCP",
            Self::Foxjet => "FOXJET",
            Self::Tto => "TTO",
            Self::Sim => "SIM",
            Self::LinxRci => "LINXRCI",
        }
    }

    /// Text payload of the probe datagram for this filter
    pub fn locate_request(&self) -> String {
        format!("{{Locate {}}}", self.tag())
    }
}

impl fmt::Display for DeviceTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DeviceTypeFilter {
    type Err = CoreError;

    /// Accepts either the wire tag or the label, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.tag().eq_ignore_ascii_case(s) || f.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownFilter(s.to_string()))
    }
}
