//! Shared fixtures for the ISA-95 equipment integration tests.

use isa95_address_space::{AddressSpace, AddressSpaceConfig, BrowseDirection};
use isa95_equipment::{registry, EquipmentClassTypeOptions, EquipmentAddressSpace};
use isa95_types::{EquipmentLevel, NodeId};

/// Address space with the ISA-95 schema loaded.
pub fn new_space() -> AddressSpace {
    AddressSpace::new(AddressSpaceConfig::default()).expect("default config is valid")
}

/// Define an equipment class type, optionally with a level.
pub fn class(space: &mut AddressSpace, name: &str, level: Option<EquipmentLevel>) -> NodeId {
    let mut options = EquipmentClassTypeOptions::new(name);
    options.equipment_level = level;
    space
        .define_equipment_class_type(options)
        .expect("class type definition succeeds")
}

/// Outgoing DefinedByEquipmentClass targets of `node`.
pub fn defined_by(space: &AddressSpace, node: &NodeId) -> Vec<NodeId> {
    let reference_type = registry::defined_by_equipment_class(space).expect("schema loaded");
    space.find_references_as_objects(node, &reference_type, BrowseDirection::Forward)
}

/// Outgoing MadeUpOfEquipment targets of `node`.
pub fn made_up_of(space: &AddressSpace, node: &NodeId) -> Vec<NodeId> {
    let reference_type = registry::made_up_of_equipment(space).expect("schema loaded");
    space.find_references_as_objects(node, &reference_type, BrowseDirection::Forward)
}

/// Number of references stored anywhere in the address space.
pub fn reference_count(space: &AddressSpace) -> usize {
    space.nodes().map(|n| n.references().len()).sum()
}
