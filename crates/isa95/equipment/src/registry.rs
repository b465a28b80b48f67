//! Lookup of the ISA-95 standard nodes.
//!
//! Nodes are resolved from the address space on every call and never
//! cached across operations.

use crate::error::EquipmentError;
use isa95_address_space::AddressSpace;
use isa95_types::names::isa95;
use isa95_types::NodeId;
use tracing::error;

/// The standard nodes an equipment operation works against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StandardNodes {
    pub equipment_type: NodeId,
    pub equipment_class_type: NodeId,
    pub made_up_of_equipment: NodeId,
    pub defined_by_equipment_class: NodeId,
    pub has_isa95_attribute: NodeId,
    pub equipment_level_data_type: NodeId,
}

impl StandardNodes {
    pub fn resolve(space: &AddressSpace) -> Result<Self, EquipmentError> {
        Ok(Self {
            equipment_type: equipment_type(space)?,
            equipment_class_type: equipment_class_type(space)?,
            made_up_of_equipment: made_up_of_equipment(space)?,
            defined_by_equipment_class: defined_by_equipment_class(space)?,
            has_isa95_attribute: has_isa95_attribute(space)?,
            equipment_level_data_type: equipment_level_data_type(space)?,
        })
    }
}

fn require(found: Option<NodeId>, name: &str) -> Result<NodeId, EquipmentError> {
    found.ok_or_else(|| {
        error!(node = name, "ISA-95 standard node missing from address space");
        EquipmentError::MissingStandardNode(name.to_string())
    })
}

pub fn equipment_type(space: &AddressSpace) -> Result<NodeId, EquipmentError> {
    require(space.find_isa95_object_type(isa95::EQUIPMENT_TYPE), isa95::EQUIPMENT_TYPE)
}

pub fn equipment_class_type(space: &AddressSpace) -> Result<NodeId, EquipmentError> {
    require(
        space.find_isa95_object_type(isa95::EQUIPMENT_CLASS_TYPE),
        isa95::EQUIPMENT_CLASS_TYPE,
    )
}

pub fn made_up_of_equipment(space: &AddressSpace) -> Result<NodeId, EquipmentError> {
    require(
        space.find_isa95_reference_type(isa95::MADE_UP_OF_EQUIPMENT),
        isa95::MADE_UP_OF_EQUIPMENT,
    )
}

pub fn defined_by_equipment_class(space: &AddressSpace) -> Result<NodeId, EquipmentError> {
    require(
        space.find_isa95_reference_type(isa95::DEFINED_BY_EQUIPMENT_CLASS),
        isa95::DEFINED_BY_EQUIPMENT_CLASS,
    )
}

pub fn has_isa95_attribute(space: &AddressSpace) -> Result<NodeId, EquipmentError> {
    require(
        space.find_isa95_reference_type(isa95::HAS_ISA95_ATTRIBUTE),
        isa95::HAS_ISA95_ATTRIBUTE,
    )
}

pub fn equipment_level_data_type(space: &AddressSpace) -> Result<NodeId, EquipmentError> {
    require(
        space.find_isa95_data_type(isa95::EQUIPMENT_ELEMENT_LEVEL_ENUM),
        isa95::EQUIPMENT_ELEMENT_LEVEL_ENUM,
    )
}
