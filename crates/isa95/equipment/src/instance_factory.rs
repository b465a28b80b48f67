//! Equipment instances.

use crate::equipment::Equipment;
use crate::error::{ConstraintViolation, EquipmentError};
use crate::options::EquipmentOptions;
use crate::registry::StandardNodes;
use crate::type_factory::{check_classes, is_type_derived_from};
use isa95_address_space::{utils, AddObjectOptions, AddressSpace, BrowseDirection};
use isa95_types::{NodeClass, NodeId};
use tracing::{info, warn};

/// Classes attached to `type_definition` and its supertypes, up to and
/// including EquipmentType, nearest type first.
pub(crate) fn inherited_classes(
    space: &AddressSpace,
    type_definition: &NodeId,
    nodes: &StandardNodes,
) -> Vec<NodeId> {
    let mut classes = Vec::new();
    for type_id in space.supertype_chain(type_definition) {
        classes.extend(space.find_references_as_objects(
            &type_id,
            &nodes.defined_by_equipment_class,
            BrowseDirection::Forward,
        ));
        if type_id == nodes.equipment_type {
            break;
        }
    }
    classes
}

/// Explicit classes first, then inherited ones; repeats dropped.
pub(crate) fn effective_classes(explicit: &[NodeId], inherited: Vec<NodeId>) -> Vec<NodeId> {
    let mut classes: Vec<NodeId> = Vec::with_capacity(explicit.len() + inherited.len());
    for class in explicit.iter().cloned().chain(inherited) {
        if !classes.contains(&class) {
            classes.push(class);
        }
    }
    classes
}

fn is_equipment_instance(space: &AddressSpace, node: &NodeId, nodes: &StandardNodes) -> bool {
    space
        .node(node)
        .is_some_and(|n| n.node_class == NodeClass::Object)
        && space.is_instance_or_subtype_of(node, &nodes.equipment_type)
}

pub(crate) fn create_equipment(
    space: &mut AddressSpace,
    options: EquipmentOptions,
) -> Result<Equipment, EquipmentError> {
    options.validate()?;
    let nodes = StandardNodes::resolve(space)?;

    let type_definition = options
        .type_definition
        .clone()
        .unwrap_or_else(|| nodes.equipment_type.clone());
    if !is_type_derived_from(space, &type_definition, &nodes.equipment_type) {
        warn!(
            browse_name = %options.browse_name,
            type_definition = %type_definition,
            "equipment type definition must derive from EquipmentType"
        );
        return Err(ConstraintViolation::NotAnEquipmentType(type_definition).into());
    }

    if let Some(parent) = &options.contained_by_equipment {
        if !is_equipment_instance(space, parent, &nodes) {
            warn!(
                browse_name = %options.browse_name,
                container = %parent,
                "container is not an equipment instance"
            );
            return Err(ConstraintViolation::ContainerNotEquipment(parent.clone()).into());
        }
    }

    let classes = effective_classes(
        &options.defined_by_equipment_class,
        inherited_classes(space, &type_definition, &nodes),
    );
    check_classes(space, &classes, &nodes)?;
    if classes.is_empty() {
        warn!(browse_name = %options.browse_name, "equipment has no equipment class");
        return Err(ConstraintViolation::NoEquipmentClass(options.browse_name).into());
    }

    let node_id = space.add_object(AddObjectOptions {
        browse_name: options.browse_name.clone(),
        type_definition: type_definition.clone(),
        description: options.description,
        node_id: options.node_id,
        organized_by: options.organized_by,
    })?;

    utils::install_defined_by_foo_class_references(
        space,
        &node_id,
        &classes,
        &nodes.defined_by_equipment_class,
        &nodes.equipment_class_type,
    )?;
    for class in &classes {
        utils::transfer_isa95_attributes(space, &node_id, class)?;
    }

    if let Some(parent) = &options.contained_by_equipment {
        utils::add_contained_by_foo_reference(
            space,
            &node_id,
            parent,
            &nodes.made_up_of_equipment,
            &nodes.equipment_type,
        )?;
    }

    info!(
        node_id = %node_id,
        browse_name = %options.browse_name,
        type_definition = %type_definition,
        classes = classes.len(),
        contained_by = ?options.contained_by_equipment.as_ref().map(ToString::to_string),
        "equipment created"
    );
    Ok(Equipment::new(node_id))
}
