//! Protocol status codes

use serde::{Deserialize, Serialize};
use std::fmt;

/// 32-bit status code. The top two bits carry the severity:
/// `00` good, `01` uncertain, `10` bad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCode(pub u32);

const SEVERITY_MASK: u32 = 0xC000_0000;
const SEVERITY_UNCERTAIN: u32 = 0x4000_0000;
const SEVERITY_BAD: u32 = 0x8000_0000;

impl StatusCode {
    pub const GOOD: StatusCode = StatusCode(0x0000_0000);
    /// Call was accepted but the requested action did not succeed
    pub const GOOD_POST_ACTION_FAILED: StatusCode = StatusCode(0x00DC_0000);
    pub const BAD_UNEXPECTED_ERROR: StatusCode = StatusCode(0x8001_0000);
    pub const BAD_COMMUNICATION_ERROR: StatusCode = StatusCode(0x8005_0000);
    pub const BAD_TIMEOUT: StatusCode = StatusCode(0x800A_0000);
    pub const BAD_METHOD_INVALID: StatusCode = StatusCode(0x8075_0000);
    pub const BAD_NOT_CONNECTED: StatusCode = StatusCode(0x808A_0000);

    pub fn is_good(&self) -> bool {
        self.0 & SEVERITY_MASK == 0
    }

    pub fn is_uncertain(&self) -> bool {
        self.0 & SEVERITY_MASK == SEVERITY_UNCERTAIN
    }

    pub fn is_bad(&self) -> bool {
        self.0 & SEVERITY_MASK == SEVERITY_BAD
    }

    /// Upper 16 bits, identifying the condition independent of info bits
    pub fn subcode(&self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// Good and not the post-action-failed sentinel
    pub fn is_usable(&self) -> bool {
        self.is_good() && *self != Self::GOOD_POST_ACTION_FAILED
    }

    fn name(&self) -> Option<&'static str> {
        match *self {
            Self::GOOD => Some("Good"),
            Self::GOOD_POST_ACTION_FAILED => Some("GoodPostActionFailed"),
            Self::BAD_UNEXPECTED_ERROR => Some("BadUnexpectedError"),
            Self::BAD_COMMUNICATION_ERROR => Some("BadCommunicationError"),
            Self::BAD_TIMEOUT => Some("BadTimeout"),
            Self::BAD_METHOD_INVALID => Some("BadMethodInvalid"),
            Self::BAD_NOT_CONNECTED => Some("BadNotConnected"),
            _ => None,
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} (0x{:08X})", name, self.0),
            None => write!(f, "0x{:08X}", self.0),
        }
    }
}
