use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a node in the address space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeClass {
    Object,
    ObjectType,
    ReferenceType,
    Variable,
    VariableType,
    DataType,
}

impl NodeClass {
    /// Type nodes take part in `HasSubtype` hierarchies.
    pub fn is_type(&self) -> bool {
        matches!(
            self,
            Self::ObjectType | Self::ReferenceType | Self::VariableType | Self::DataType
        )
    }
}

impl fmt::Display for NodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object => write!(f, "Object"),
            Self::ObjectType => write!(f, "ObjectType"),
            Self::ReferenceType => write!(f, "ReferenceType"),
            Self::Variable => write!(f, "Variable"),
            Self::VariableType => write!(f, "VariableType"),
            Self::DataType => write!(f, "DataType"),
        }
    }
}

/// Marks whether a declaration on a type is reproduced on its instances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModellingRule {
    Mandatory,
    Optional,
    MandatoryPlaceholder,
    OptionalPlaceholder,
}

impl fmt::Display for ModellingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mandatory => write!(f, "Mandatory"),
            Self::Optional => write!(f, "Optional"),
            Self::MandatoryPlaceholder => write!(f, "MandatoryPlaceholder"),
            Self::OptionalPlaceholder => write!(f, "OptionalPlaceholder"),
        }
    }
}
