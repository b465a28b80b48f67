use isa95_address_space::AddressSpaceError;
use isa95_types::NodeId;

/// Errors from equipment construction.
#[derive(Debug, thiserror::Error)]
pub enum EquipmentError {
    #[error("ISA-95 schema not loaded: missing {0}")]
    MissingStandardNode(String),
    #[error("constraint violation: {0}")]
    Constraint(#[from] ConstraintViolation),
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("address space error: {0}")]
    AddressSpace(#[from] AddressSpaceError),
}

impl EquipmentError {
    /// The address space was not initialized with the ISA-95 schema.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::MissingStandardNode(_))
    }

    pub fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint(_))
    }
}

/// Structural rules of the equipment model, checked before any node is
/// created.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstraintViolation {
    #[error("{0} is not EquipmentType or a subtype of it")]
    NotAnEquipmentType(NodeId),
    #[error("{0} is not EquipmentClassType or a subtype of it")]
    NotAnEquipmentClassType(NodeId),
    #[error("container {0} is not an instance of EquipmentType")]
    ContainerNotEquipment(NodeId),
    #[error("{0} is not an equipment instance")]
    NotEquipment(NodeId),
    #[error("{0} is not an equipment class")]
    NotAnEquipmentClass(NodeId),
    #[error("equipment '{0}' has no equipment class")]
    NoEquipmentClass(String),
}
