//! Standard nodes installed when an address space is created.
//!
//! Namespace 0 carries the subset of the base information model the
//! equipment extension relies on, under its usual numeric identifiers. The
//! ISA-95 namespace carries the equipment branch, identified by browse name.

use crate::address_space::AddressSpace;
use crate::error::AddressSpaceError;
use crate::node::UaNode;
use isa95_types::names::{isa95, ua};
use isa95_types::{NodeClass, NodeId, QualifiedName};
use tracing::debug;

pub fn references() -> NodeId {
    NodeId::numeric(0, 31)
}

pub fn non_hierarchical_references() -> NodeId {
    NodeId::numeric(0, 32)
}

pub fn hierarchical_references() -> NodeId {
    NodeId::numeric(0, 33)
}

pub fn organizes() -> NodeId {
    NodeId::numeric(0, 35)
}

pub fn has_type_definition() -> NodeId {
    NodeId::numeric(0, 40)
}

pub fn aggregates() -> NodeId {
    NodeId::numeric(0, 44)
}

pub fn has_subtype() -> NodeId {
    NodeId::numeric(0, 45)
}

pub fn has_property() -> NodeId {
    NodeId::numeric(0, 46)
}

pub fn has_component() -> NodeId {
    NodeId::numeric(0, 47)
}

pub fn base_object_type() -> NodeId {
    NodeId::numeric(0, 58)
}

pub fn folder_type() -> NodeId {
    NodeId::numeric(0, 61)
}

pub fn base_variable_type() -> NodeId {
    NodeId::numeric(0, 62)
}

pub fn property_type() -> NodeId {
    NodeId::numeric(0, 68)
}

pub fn base_data_type() -> NodeId {
    NodeId::numeric(0, 24)
}

pub fn enumeration() -> NodeId {
    NodeId::numeric(0, 29)
}

pub fn objects_folder() -> NodeId {
    NodeId::numeric(0, 85)
}

fn insert_type(
    space: &mut AddressSpace,
    node_id: NodeId,
    node_class: NodeClass,
    name: &str,
    super_type: Option<&NodeId>,
    is_abstract: bool,
) -> Result<(), AddressSpaceError> {
    let mut node = UaNode::new(
        node_id.clone(),
        node_class,
        QualifiedName::new(node_id.namespace, name),
    );
    node.is_abstract = is_abstract;
    space.insert_node(node)?;
    if let Some(super_type) = super_type {
        space.add_reference_raw(super_type, &has_subtype(), &node_id)?;
    }
    Ok(())
}

fn insert_reference_type(
    space: &mut AddressSpace,
    node_id: NodeId,
    name: &str,
    super_type: Option<&NodeId>,
    inverse_name: Option<&str>,
    is_abstract: bool,
) -> Result<(), AddressSpaceError> {
    let mut node = UaNode::new(
        node_id.clone(),
        NodeClass::ReferenceType,
        QualifiedName::new(node_id.namespace, name),
    );
    node.is_abstract = is_abstract;
    node.inverse_name = inverse_name.map(str::to_string);
    space.insert_node(node)?;
    if let Some(super_type) = super_type {
        space.add_reference_raw(super_type, &has_subtype(), &node_id)?;
    }
    Ok(())
}

pub(crate) fn load_base_model(space: &mut AddressSpace) -> Result<(), AddressSpaceError> {
    // reference types
    insert_reference_type(space, references(), ua::REFERENCES, None, None, true)?;
    insert_reference_type(
        space,
        hierarchical_references(),
        ua::HIERARCHICAL_REFERENCES,
        Some(&references()),
        None,
        true,
    )?;
    insert_reference_type(
        space,
        non_hierarchical_references(),
        ua::NON_HIERARCHICAL_REFERENCES,
        Some(&references()),
        None,
        true,
    )?;
    insert_reference_type(
        space,
        has_subtype(),
        ua::HAS_SUBTYPE,
        Some(&hierarchical_references()),
        Some("SubtypeOf"),
        false,
    )?;
    insert_reference_type(
        space,
        organizes(),
        ua::ORGANIZES,
        Some(&hierarchical_references()),
        Some("OrganizedBy"),
        false,
    )?;
    insert_reference_type(
        space,
        aggregates(),
        ua::AGGREGATES,
        Some(&hierarchical_references()),
        Some("AggregatedBy"),
        true,
    )?;
    insert_reference_type(
        space,
        has_component(),
        ua::HAS_COMPONENT,
        Some(&aggregates()),
        Some("ComponentOf"),
        false,
    )?;
    insert_reference_type(
        space,
        has_property(),
        ua::HAS_PROPERTY,
        Some(&aggregates()),
        Some("PropertyOf"),
        false,
    )?;
    insert_reference_type(
        space,
        has_type_definition(),
        ua::HAS_TYPE_DEFINITION,
        Some(&non_hierarchical_references()),
        Some("TypeDefinitionOf"),
        false,
    )?;

    // object and variable types
    insert_type(
        space,
        base_object_type(),
        NodeClass::ObjectType,
        ua::BASE_OBJECT_TYPE,
        None,
        false,
    )?;
    insert_type(
        space,
        folder_type(),
        NodeClass::ObjectType,
        ua::FOLDER_TYPE,
        Some(&base_object_type()),
        false,
    )?;
    insert_type(
        space,
        base_variable_type(),
        NodeClass::VariableType,
        ua::BASE_VARIABLE_TYPE,
        None,
        true,
    )?;
    insert_type(
        space,
        property_type(),
        NodeClass::VariableType,
        ua::PROPERTY_TYPE,
        Some(&base_variable_type()),
        false,
    )?;

    // data types
    insert_type(space, base_data_type(), NodeClass::DataType, ua::BASE_DATA_TYPE, None, true)?;
    for (id, name) in [
        (1, ua::BOOLEAN),
        (6, ua::INT32),
        (7, ua::UINT32),
        (11, ua::DOUBLE),
        (12, ua::STRING),
    ] {
        insert_type(
            space,
            NodeId::numeric(0, id),
            NodeClass::DataType,
            name,
            Some(&base_data_type()),
            false,
        )?;
    }
    insert_type(
        space,
        enumeration(),
        NodeClass::DataType,
        ua::ENUMERATION,
        Some(&base_data_type()),
        true,
    )?;

    let objects = UaNode::new(
        objects_folder(),
        NodeClass::Object,
        QualifiedName::new(0, ua::OBJECTS_FOLDER),
    );
    space.insert_node(objects)?;
    space.add_reference_raw(&objects_folder(), &has_type_definition(), &folder_type())?;

    debug!(nodes = space.node_count(), "base model loaded");
    Ok(())
}

pub(crate) fn load_isa95_equipment_model(
    space: &mut AddressSpace,
    ns: u16,
) -> Result<(), AddressSpaceError> {
    let id = |name: &str| NodeId::string(ns, name);

    insert_reference_type(
        space,
        id(isa95::HAS_ISA95_ATTRIBUTE),
        isa95::HAS_ISA95_ATTRIBUTE,
        Some(&has_property()),
        Some("ISA95AttributeOf"),
        false,
    )?;
    insert_reference_type(
        space,
        id(isa95::DEFINED_BY_EQUIPMENT_CLASS),
        isa95::DEFINED_BY_EQUIPMENT_CLASS,
        Some(&non_hierarchical_references()),
        Some("DefinesEquipment"),
        false,
    )?;
    insert_reference_type(
        space,
        id(isa95::MADE_UP_OF_EQUIPMENT),
        isa95::MADE_UP_OF_EQUIPMENT,
        Some(&hierarchical_references()),
        Some("ContainedByEquipment"),
        false,
    )?;

    insert_type(
        space,
        id(isa95::ISA95_OBJECT_TYPE),
        NodeClass::ObjectType,
        isa95::ISA95_OBJECT_TYPE,
        Some(&base_object_type()),
        false,
    )?;
    insert_type(
        space,
        id(isa95::ISA95_CLASS_TYPE),
        NodeClass::ObjectType,
        isa95::ISA95_CLASS_TYPE,
        Some(&base_object_type()),
        false,
    )?;
    insert_type(
        space,
        id(isa95::EQUIPMENT_TYPE),
        NodeClass::ObjectType,
        isa95::EQUIPMENT_TYPE,
        Some(&id(isa95::ISA95_OBJECT_TYPE)),
        false,
    )?;
    insert_type(
        space,
        id(isa95::EQUIPMENT_CLASS_TYPE),
        NodeClass::ObjectType,
        isa95::EQUIPMENT_CLASS_TYPE,
        Some(&id(isa95::ISA95_CLASS_TYPE)),
        false,
    )?;

    insert_type(
        space,
        id(isa95::EQUIPMENT_ELEMENT_LEVEL_ENUM),
        NodeClass::DataType,
        isa95::EQUIPMENT_ELEMENT_LEVEL_ENUM,
        Some(&enumeration()),
        false,
    )?;

    debug!(namespace = ns, "ISA-95 equipment model loaded");
    Ok(())
}
