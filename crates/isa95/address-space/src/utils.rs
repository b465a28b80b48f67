//! Helpers shared by the ISA-95 object families (equipment, personnel,
//! physical assets) that follow the same class/instance pattern.

use crate::address_space::{AddressSpace, Isa95AttributeOptions};
use crate::error::AddressSpaceError;
use crate::node::BrowseDirection;
use isa95_types::names::isa95;
use isa95_types::NodeId;
use tracing::debug;

fn has_isa95_attribute(space: &AddressSpace) -> Option<NodeId> {
    space.find_isa95_reference_type(isa95::HAS_ISA95_ATTRIBUTE)
}

/// Attribute variables owned directly by `node`.
pub fn isa95_attributes_of(space: &AddressSpace, node: &NodeId) -> Vec<NodeId> {
    match has_isa95_attribute(space) {
        Some(reference_type) => {
            space.find_references_as_objects(node, &reference_type, BrowseDirection::Forward)
        }
        None => Vec::new(),
    }
}

/// Attributes visible on `node`: its own and, for type nodes, those of its
/// supertypes. Nearer definitions shadow farther ones with the same name.
pub fn isa95_attributes_with_inherited(space: &AddressSpace, node: &NodeId) -> Vec<NodeId> {
    let owners = match space.node(node) {
        Some(n) if n.node_class.is_type() => space.supertype_chain(node),
        Some(_) => vec![node.clone()],
        None => return Vec::new(),
    };

    let mut names: Vec<&str> = Vec::new();
    let mut attributes = Vec::new();
    for owner in &owners {
        for attribute in isa95_attributes_of(space, owner) {
            let Some(name) = space.browse_name_of(&attribute) else {
                continue;
            };
            if names.contains(&name) {
                continue;
            }
            names.push(name);
            attributes.push(attribute);
        }
    }
    attributes
}

pub fn find_isa95_attribute(space: &AddressSpace, owner: &NodeId, name: &str) -> Option<NodeId> {
    let reference_type = has_isa95_attribute(space)?;
    space.find_child(owner, &reference_type, name)
}

/// Link `node` to each of `classes` through `reference_type`.
///
/// Every class must be `class_base` (or a subtype), or an object typed by
/// one. All classes are checked before any reference is added.
pub fn install_defined_by_foo_class_references(
    space: &mut AddressSpace,
    node: &NodeId,
    classes: &[NodeId],
    reference_type: &NodeId,
    class_base: &NodeId,
) -> Result<(), AddressSpaceError> {
    for class in classes {
        if !space.is_instance_or_subtype_of(class, class_base) {
            return Err(AddressSpaceError::ReferenceConstraint {
                reference: space
                    .browse_name_of(reference_type)
                    .unwrap_or("reference")
                    .to_string(),
                node: class.clone(),
                expected: space
                    .browse_name_of(class_base)
                    .unwrap_or("class")
                    .to_string(),
            });
        }
    }
    for class in classes {
        space.add_reference(node, reference_type, class)?;
    }
    Ok(())
}

/// Copy the attributes defined on `class` (and, for class types, on its
/// supertypes) onto `instance`.
///
/// Attributes whose name the instance already owns are left alone.
/// Returns the ids of the attributes created.
pub fn transfer_isa95_attributes(
    space: &mut AddressSpace,
    instance: &NodeId,
    class: &NodeId,
) -> Result<Vec<NodeId>, AddressSpaceError> {
    let mut created = Vec::new();
    for template_id in isa95_attributes_with_inherited(space, class) {
        let Some(template) = space.node(&template_id) else {
            continue;
        };
        let name = template.browse_name.name.clone();
        if find_isa95_attribute(space, instance, &name).is_some() {
            debug!(instance = %instance, attribute = %name, "attribute already present, skipped");
            continue;
        }
        let Some(data_type) = template.data_type.clone() else {
            continue;
        };
        let options = Isa95AttributeOptions {
            attribute_of: instance.clone(),
            browse_name: name,
            data_type,
            value: template
                .value
                .as_ref()
                .map(|v| v.value.clone())
                .unwrap_or_default(),
            modelling_rule: None,
            description: template.description.clone(),
        };
        created.push(space.add_isa95_attribute(options)?);
    }
    debug!(
        instance = %instance,
        class = %class,
        transferred = created.len(),
        "attributes transferred"
    );
    Ok(created)
}

/// Add `parent --reference_type--> child`; the inverse end carries the
/// "contained by" direction.
///
/// `parent` must be an instance of `parent_base` or one of its subtypes.
pub fn add_contained_by_foo_reference(
    space: &mut AddressSpace,
    child: &NodeId,
    parent: &NodeId,
    reference_type: &NodeId,
    parent_base: &NodeId,
) -> Result<(), AddressSpaceError> {
    if !space.is_instance_or_subtype_of(parent, parent_base) {
        return Err(AddressSpaceError::ReferenceConstraint {
            reference: space
                .browse_name_of(reference_type)
                .unwrap_or("reference")
                .to_string(),
            node: parent.clone(),
            expected: space
                .browse_name_of(parent_base)
                .unwrap_or("container")
                .to_string(),
        });
    }
    space.add_reference(parent, reference_type, child)
}
