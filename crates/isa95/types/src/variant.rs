use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar value held by a variable node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Variant {
    Empty,
    Boolean(bool),
    Int32(i32),
    UInt32(u32),
    Double(f64),
    String(String),
}

impl Variant {
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl Default for Variant {
    fn default() -> Self {
        Self::Empty
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "<empty>"),
            Self::Boolean(v) => write!(f, "{}", v),
            Self::Int32(v) => write!(f, "{}", v),
            Self::UInt32(v) => write!(f, "{}", v),
            Self::Double(v) => write!(f, "{}", v),
            Self::String(v) => write!(f, "\"{}\"", v),
        }
    }
}

impl From<bool> for Variant {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i32> for Variant {
    fn from(v: i32) -> Self {
        Self::Int32(v)
    }
}

impl From<u32> for Variant {
    fn from(v: u32) -> Self {
        Self::UInt32(v)
    }
}

impl From<f64> for Variant {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<&str> for Variant {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Variant {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

/// A variant plus the time it was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataValue {
    pub value: Variant,
    pub source_timestamp: DateTime<Utc>,
}

impl DataValue {
    pub fn new(value: impl Into<Variant>) -> Self {
        Self {
            value: value.into(),
            source_timestamp: Utc::now(),
        }
    }
}
