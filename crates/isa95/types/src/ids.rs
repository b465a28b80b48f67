//! Node identifiers and qualified browse names.
//!
//! Text forms follow the usual OPC UA notation: `ns=2;i=1000`,
//! `ns=2;s=Tank01`, `ns=2;g=<uuid>`. The `ns=` prefix is omitted for
//! namespace 0.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The identifier part of a [`NodeId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Identifier {
    Numeric(u32),
    String(String),
    Guid(Uuid),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "i={}", n),
            Self::String(s) => write!(f, "s={}", s),
            Self::Guid(g) => write!(f, "g={}", g),
        }
    }
}

/// Unique identifier of a node in an address space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId {
    pub namespace: u16,
    pub identifier: Identifier,
}

impl NodeId {
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
        if self.namespace == 0 {
            write!(f, "{}", self.identifier)
        } else {
            write!(f, "ns={};{}", self.namespace, self.identifier)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeIdParseError {
    #[error("invalid namespace index in '{0}'")]
    InvalidNamespace(String),
    #[error("missing identifier in '{0}'")]
    MissingIdentifier(String),
    #[error("unknown identifier type in '{0}' (expected i=, s= or g=)")]
    UnknownIdentifierType(String),
    #[error("invalid numeric identifier in '{0}'")]
    InvalidNumeric(String),
    #[error("invalid guid identifier in '{0}'")]
    InvalidGuid(String),
}

impl FromStr for NodeId {
    type Err = NodeIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, rest) = match s.strip_prefix("ns=") {
            Some(tail) => {
                let (ns, rest) = tail
                    .split_once(';')
                    .ok_or_else(|| NodeIdParseError::MissingIdentifier(s.to_string()))?;
                let ns = ns
                    .parse::<u16>()
                    .map_err(|_| NodeIdParseError::InvalidNamespace(s.to_string()))?;
                (ns, rest)
            }
            None => (0, s),
        };

        let identifier = if let Some(value) = rest.strip_prefix("i=") {
            Identifier::Numeric(
                value
                    .parse()
                    .map_err(|_| NodeIdParseError::InvalidNumeric(s.to_string()))?,
            )
        } else if let Some(value) = rest.strip_prefix("s=") {
            if value.is_empty() {
                return Err(NodeIdParseError::MissingIdentifier(s.to_string()));
            }
            Identifier::String(value.to_string())
        } else if let Some(value) = rest.strip_prefix("g=") {
            Identifier::Guid(
                Uuid::parse_str(value).map_err(|_| NodeIdParseError::InvalidGuid(s.to_string()))?,
            )
        } else if rest.is_empty() {
            return Err(NodeIdParseError::MissingIdentifier(s.to_string()));
        } else {
            return Err(NodeIdParseError::UnknownIdentifierType(s.to_string()));
        };

        Ok(Self {
            namespace,
            identifier,
        })
    }
}

/// A browse name qualified by the namespace that defines it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifiedName {
    pub namespace_index: u16,
    pub name: String,
}

impl QualifiedName {
    pub fn new(namespace_index: u16, name: impl Into<String>) -> Self {
        Self {
            namespace_index,
            name: name.into(),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace_index == 0 {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}:{}", self.namespace_index, self.name)
        }
    }
}
