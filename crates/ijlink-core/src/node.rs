//! Node identifiers addressing objects and methods on the printer

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Identifier part of a node id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    Numeric(u32),
    String(String),
}

/// Namespaced node identifier, written as `ns=<n>;s=<name>` or `i=<n>`
/// (the namespace prefix is omitted for namespace 0).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub namespace: u16,
    pub identifier: Identifier,
}

impl NodeId {
    /// Well-known "objects root" folder every method call targets
    pub const OBJECTS_FOLDER: NodeId = NodeId {
        namespace: 0,
        identifier: Identifier::Numeric(85),
    };

    pub fn numeric(namespace: u16, value: u32) -> Self {
        Self {
            namespace,
            identifier: Identifier::Numeric(value),
        }
    }

    pub fn string(namespace: u16, value: impl Into<String>) -> Self {
        Self {
            namespace,
            identifier: Identifier::String(value.into()),
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace != 0 {
            write!(f, "ns={};", self.namespace)?;
        }
        match &self.identifier {
            Identifier::Numeric(v) => write!(f, "i={}", v),
            Identifier::String(s) => write!(f, "s={}", s),
        }
    }
}

impl FromStr for NodeId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidNodeId(s.to_string());

        let (namespace, rest) = match s.strip_prefix("ns=") {
            Some(tail) => {
                let (ns, rest) = tail.split_once(';').ok_or_else(invalid)?;
                (ns.parse::<u16>().map_err(|_| invalid())?, rest)
            }
            None => (0, s),
        };

        if let Some(value) = rest.strip_prefix("i=") {
            let value = value.parse::<u32>().map_err(|_| invalid())?;
            Ok(Self::numeric(namespace, value))
        } else if let Some(value) = rest.strip_prefix("s=") {
            Ok(Self::string(namespace, value))
        } else {
            Err(invalid())
        }
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(NodeId::OBJECTS_FOLDER.to_string(), "i=85");
        assert_eq!(
            NodeId::string(2, "GetStatusInformation").to_string(),
            "ns=2;s=GetStatusInformation"
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("i=85".parse::<NodeId>().unwrap(), NodeId::OBJECTS_FOLDER);
        assert_eq!(
            "ns=2;s=StopPrinting".parse::<NodeId>().unwrap(),
            NodeId::string(2, "StopPrinting")
        );
        assert!("ns=x;s=Foo".parse::<NodeId>().is_err());
        assert!("ns=2;g=abc".parse::<NodeId>().is_err());
    }
}
