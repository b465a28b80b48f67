//! Option records for the equipment operations.

use crate::error::EquipmentError;
use isa95_types::{EquipmentLevel, NodeId};
use serde::{Deserialize, Serialize};

fn check_browse_name(browse_name: &str) -> Result<(), EquipmentError> {
    if browse_name.trim().is_empty() {
        return Err(EquipmentError::InvalidOptions("browse_name must not be empty".into()));
    }
    Ok(())
}

/// Options for defining an equipment class type.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentClassTypeOptions {
    pub browse_name: String,
    /// Level carried by every instance, as the "EquipmentLevel" attribute.
    pub equipment_level: Option<EquipmentLevel>,
    pub description: Option<String>,
    /// Parent class type; defaults to EquipmentClassType.
    pub subtype_of: Option<NodeId>,
}

impl EquipmentClassTypeOptions {
    pub fn new(browse_name: impl Into<String>) -> Self {
        Self {
            browse_name: browse_name.into(),
            ..Self::default()
        }
    }

    pub fn with_level(mut self, level: EquipmentLevel) -> Self {
        self.equipment_level = Some(level);
        self
    }

    pub fn subtype_of(mut self, super_type: NodeId) -> Self {
        self.subtype_of = Some(super_type);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn validate(&self) -> Result<(), EquipmentError> {
        check_browse_name(&self.browse_name)
    }
}

/// Options for defining an equipment type.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentTypeOptions {
    pub browse_name: String,
    /// Parent equipment type; defaults to EquipmentType.
    pub subtype_of: Option<NodeId>,
    pub defined_by_equipment_class: Vec<NodeId>,
    pub equipment_level: Option<EquipmentLevel>,
    pub description: Option<String>,
}

impl EquipmentTypeOptions {
    pub fn new(browse_name: impl Into<String>) -> Self {
        Self {
            browse_name: browse_name.into(),
            ..Self::default()
        }
    }

    pub fn subtype_of(mut self, super_type: NodeId) -> Self {
        self.subtype_of = Some(super_type);
        self
    }

    pub fn defined_by(mut self, class: NodeId) -> Self {
        self.defined_by_equipment_class.push(class);
        self
    }

    pub fn with_level(mut self, level: EquipmentLevel) -> Self {
        self.equipment_level = Some(level);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn validate(&self) -> Result<(), EquipmentError> {
        check_browse_name(&self.browse_name)
    }
}

/// Options for creating an equipment instance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentOptions {
    pub browse_name: String,
    /// Defaults to EquipmentType.
    pub type_definition: Option<NodeId>,
    pub contained_by_equipment: Option<NodeId>,
    /// Classes added to those inherited from the type definition.
    pub defined_by_equipment_class: Vec<NodeId>,
    pub description: Option<String>,
    pub node_id: Option<NodeId>,
    pub organized_by: Option<NodeId>,
}

impl EquipmentOptions {
    pub fn new(browse_name: impl Into<String>) -> Self {
        Self {
            browse_name: browse_name.into(),
            ..Self::default()
        }
    }

    pub fn of_type(mut self, type_definition: NodeId) -> Self {
        self.type_definition = Some(type_definition);
        self
    }

    pub fn contained_by(mut self, parent: NodeId) -> Self {
        self.contained_by_equipment = Some(parent);
        self
    }

    pub fn defined_by(mut self, class: NodeId) -> Self {
        self.defined_by_equipment_class.push(class);
        self
    }

    pub fn organized_by(mut self, folder: NodeId) -> Self {
        self.organized_by = Some(folder);
        self
    }

    pub fn with_node_id(mut self, node_id: NodeId) -> Self {
        self.node_id = Some(node_id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn validate(&self) -> Result<(), EquipmentError> {
        check_browse_name(&self.browse_name)
    }
}
