use crate::error::{ConstraintViolation, EquipmentError};
use crate::registry;
use isa95_address_space::{utils, AddressSpace, BrowseDirection};
use isa95_types::names::isa95;
use isa95_types::{DataValue, EquipmentLevel, NodeId};

/// Handle to an equipment instance.
///
/// Holds only the node id; every accessor reads the address space when
/// called, so the handle never goes stale as the hierarchy grows.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Equipment {
    node_id: NodeId,
}

impl Equipment {
    pub(crate) fn new(node_id: NodeId) -> Self {
        Self { node_id }
    }

    /// Wrap an existing node, checking that it is an equipment instance.
    pub fn open(space: &AddressSpace, node_id: NodeId) -> Result<Self, EquipmentError> {
        let equipment_type = registry::equipment_type(space)?;
        let is_object = space
            .node(&node_id)
            .is_some_and(|n| !n.node_class.is_type());
        if !is_object || !space.is_instance_or_subtype_of(&node_id, &equipment_type) {
            return Err(ConstraintViolation::NotEquipment(node_id).into());
        }
        Ok(Self { node_id })
    }

    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    pub fn browse_name<'a>(&self, space: &'a AddressSpace) -> Option<&'a str> {
        space.browse_name_of(&self.node_id)
    }

    pub fn type_definition(&self, space: &AddressSpace) -> Option<NodeId> {
        space.type_definition_of(&self.node_id)
    }

    /// Children reached through MadeUpOfEquipment.
    pub fn made_up_of_equipments(&self, space: &AddressSpace) -> Vec<Equipment> {
        self.follow_made_up_of(space, BrowseDirection::Forward)
    }

    pub fn contained_by_equipment(&self, space: &AddressSpace) -> Option<Equipment> {
        self.follow_made_up_of(space, BrowseDirection::Inverse)
            .into_iter()
            .next()
    }

    fn follow_made_up_of(
        &self,
        space: &AddressSpace,
        direction: BrowseDirection,
    ) -> Vec<Equipment> {
        let Some(made_up_of) = space.find_isa95_reference_type(isa95::MADE_UP_OF_EQUIPMENT) else {
            return Vec::new();
        };
        space
            .find_references_as_objects(&self.node_id, &made_up_of, direction)
            .into_iter()
            .map(Equipment::new)
            .collect()
    }

    pub fn defined_by_equipment_classes(&self, space: &AddressSpace) -> Vec<NodeId> {
        match space.find_isa95_reference_type(isa95::DEFINED_BY_EQUIPMENT_CLASS) {
            Some(defined_by) => space.find_references_as_objects(
                &self.node_id,
                &defined_by,
                BrowseDirection::Forward,
            ),
            None => Vec::new(),
        }
    }

    pub fn equipment_level(&self, space: &AddressSpace) -> Option<EquipmentLevel> {
        self.attribute(space, isa95::EQUIPMENT_LEVEL)?
            .value
            .as_i32()
            .and_then(EquipmentLevel::from_value)
    }

    /// Value of the instance-owned attribute `name`.
    pub fn attribute<'a>(&self, space: &'a AddressSpace, name: &str) -> Option<&'a DataValue> {
        let attribute = utils::find_isa95_attribute(space, &self.node_id, name)?;
        space.value_of(&attribute)
    }

    /// Names of all instance-owned attributes.
    pub fn attribute_names<'a>(&self, space: &'a AddressSpace) -> Vec<&'a str> {
        utils::isa95_attributes_of(space, &self.node_id)
            .iter()
            .filter_map(|id| space.browse_name_of(id))
            .collect()
    }
}
