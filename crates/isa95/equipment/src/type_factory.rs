//! Equipment class types and equipment types.

use crate::error::{ConstraintViolation, EquipmentError};
use crate::options::{EquipmentClassTypeOptions, EquipmentTypeOptions};
use crate::registry::StandardNodes;
use isa95_address_space::{
    utils, AddObjectTypeOptions, AddressSpace, AddressSpaceError, Isa95AttributeOptions,
};
use isa95_types::names::isa95;
use isa95_types::{EquipmentLevel, ModellingRule, NodeClass, NodeId, Variant};
use tracing::{debug, info, warn};

/// True when `node` is an object type derived from `base` (or `base`
/// itself).
pub(crate) fn is_type_derived_from(space: &AddressSpace, node: &NodeId, base: &NodeId) -> bool {
    space
        .node(node)
        .is_some_and(|n| n.node_class == NodeClass::ObjectType)
        && space.is_subtype_of(node, base)
}

/// A class node is an EquipmentClassType (or subtype), or an object
/// typed by one.
pub(crate) fn is_equipment_class(
    space: &AddressSpace,
    node: &NodeId,
    nodes: &StandardNodes,
) -> bool {
    space.is_instance_or_subtype_of(node, &nodes.equipment_class_type)
}

pub(crate) fn check_classes(
    space: &AddressSpace,
    classes: &[NodeId],
    nodes: &StandardNodes,
) -> Result<(), EquipmentError> {
    for class in classes {
        if !is_equipment_class(space, class, nodes) {
            warn!(class = %class, "rejected equipment class");
            return Err(ConstraintViolation::NotAnEquipmentClass(class.clone()).into());
        }
    }
    Ok(())
}

pub(crate) fn define_equipment_class_type(
    space: &mut AddressSpace,
    options: EquipmentClassTypeOptions,
) -> Result<NodeId, EquipmentError> {
    options.validate()?;
    let nodes = StandardNodes::resolve(space)?;

    let super_type = match options.subtype_of {
        Some(super_type) => {
            if !is_type_derived_from(space, &super_type, &nodes.equipment_class_type) {
                warn!(
                    browse_name = %options.browse_name,
                    subtype_of = %super_type,
                    "equipment class type must derive from EquipmentClassType"
                );
                return Err(ConstraintViolation::NotAnEquipmentClassType(super_type).into());
            }
            super_type
        }
        None => nodes.equipment_class_type.clone(),
    };

    let type_id = space.add_object_type(AddObjectTypeOptions {
        browse_name: options.browse_name.clone(),
        subtype_of: Some(super_type),
        is_abstract: false,
        description: options.description,
        node_id: None,
    })?;

    if let Some(level) = options.equipment_level {
        attach_equipment_level(space, &nodes, &type_id, level, ModellingRule::Mandatory)?;
    }

    info!(
        node_id = %type_id,
        browse_name = %options.browse_name,
        level = ?options.equipment_level,
        "equipment class type defined"
    );
    Ok(type_id)
}

pub(crate) fn define_equipment_type(
    space: &mut AddressSpace,
    options: EquipmentTypeOptions,
) -> Result<NodeId, EquipmentError> {
    options.validate()?;
    let nodes = StandardNodes::resolve(space)?;

    let super_type = match options.subtype_of {
        Some(super_type) => {
            if !is_type_derived_from(space, &super_type, &nodes.equipment_type) {
                warn!(
                    browse_name = %options.browse_name,
                    subtype_of = %super_type,
                    "equipment type must derive from EquipmentType"
                );
                return Err(ConstraintViolation::NotAnEquipmentType(super_type).into());
            }
            super_type
        }
        None => nodes.equipment_type.clone(),
    };
    check_classes(space, &options.defined_by_equipment_class, &nodes)?;

    let type_id = space.add_object_type(AddObjectTypeOptions {
        browse_name: options.browse_name.clone(),
        subtype_of: Some(super_type),
        is_abstract: false,
        description: options.description,
        node_id: None,
    })?;

    utils::install_defined_by_foo_class_references(
        space,
        &type_id,
        &options.defined_by_equipment_class,
        &nodes.defined_by_equipment_class,
        &nodes.equipment_class_type,
    )?;

    if let Some(level) = options.equipment_level {
        attach_equipment_level(space, &nodes, &type_id, level, ModellingRule::Optional)?;
    }

    info!(
        node_id = %type_id,
        browse_name = %options.browse_name,
        classes = options.defined_by_equipment_class.len(),
        "equipment type defined"
    );
    Ok(type_id)
}

/// Declare the "EquipmentLevel" template on `type_id` and register the hook
/// that gives each instance its own copy.
fn attach_equipment_level(
    space: &mut AddressSpace,
    nodes: &StandardNodes,
    type_id: &NodeId,
    level: EquipmentLevel,
    modelling_rule: ModellingRule,
) -> Result<(), EquipmentError> {
    space.add_isa95_attribute(Isa95AttributeOptions {
        attribute_of: type_id.clone(),
        browse_name: isa95::EQUIPMENT_LEVEL.to_string(),
        data_type: nodes.equipment_level_data_type.clone(),
        value: Variant::Int32(level.value()),
        modelling_rule: Some(modelling_rule),
        description: None,
    })?;
    space.install_post_install_func(type_id, move |space, instance, _type_definition| {
        copy_equipment_level(space, instance, level)
    })?;
    Ok(())
}

fn copy_equipment_level(
    space: &mut AddressSpace,
    instance: &NodeId,
    level: EquipmentLevel,
) -> Result<(), AddressSpaceError> {
    if utils::find_isa95_attribute(space, instance, isa95::EQUIPMENT_LEVEL).is_some() {
        debug!(instance = %instance, "equipment level already present");
        return Ok(());
    }
    let data_type = space
        .find_isa95_data_type(isa95::EQUIPMENT_ELEMENT_LEVEL_ENUM)
        .ok_or_else(|| {
            AddressSpaceError::MissingStandardNode(isa95::EQUIPMENT_ELEMENT_LEVEL_ENUM.to_string())
        })?;
    space.add_isa95_attribute(Isa95AttributeOptions {
        attribute_of: instance.clone(),
        browse_name: isa95::EQUIPMENT_LEVEL.to_string(),
        data_type,
        value: Variant::Int32(level.value()),
        modelling_rule: None,
        description: None,
    })?;
    debug!(instance = %instance, level = %level, "equipment level copied to instance");
    Ok(())
}
