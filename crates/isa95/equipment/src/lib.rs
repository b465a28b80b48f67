#![deny(unsafe_code)]
//! # isa95-equipment
//!
//! Construction of the ISA-95 equipment model on top of an
//! [`AddressSpace`]: equipment class types, equipment types, and equipment
//! instances arranged in a MadeUpOf/ContainedBy hierarchy.
//!
//! ```text
//! EquipmentClassType ◄── DefinedByEquipmentClass ── EquipmentType
//!        ▲                                              ▲
//!        └──────── DefinedByEquipmentClass ─────── Equipment ── MadeUpOfEquipment ──► Equipment
//! ```
//!
//! Every operation validates its input against the current graph before
//! touching it, so a rejected call leaves the address space unchanged.
//!
//! ## Key Types
//!
//! - [`EquipmentAddressSpace`]: the three construction operations
//! - [`Equipment`]: handle to an instance, read lazily from the graph
//! - [`EquipmentError`] / [`ConstraintViolation`]: failure taxonomy
//! - [`StandardNodes`]: ISA-95 standard node lookup

pub mod equipment;
pub mod error;
pub mod instance_factory;
pub mod options;
pub mod registry;
pub mod type_factory;

pub use equipment::Equipment;
pub use error::{ConstraintViolation, EquipmentError};
pub use options::{EquipmentClassTypeOptions, EquipmentOptions, EquipmentTypeOptions};
pub use registry::StandardNodes;

use isa95_address_space::AddressSpace;
use isa95_types::NodeId;

/// Equipment construction on an address space.
pub trait EquipmentAddressSpace {
    /// Define a subtype of EquipmentClassType. With a level, every instance
    /// of the new type (or its subtypes) receives its own "EquipmentLevel"
    /// attribute.
    fn define_equipment_class_type(
        &mut self,
        options: EquipmentClassTypeOptions,
    ) -> Result<NodeId, EquipmentError>;

    /// Define a subtype of EquipmentType linked to its equipment classes.
    fn define_equipment_type(
        &mut self,
        options: EquipmentTypeOptions,
    ) -> Result<NodeId, EquipmentError>;

    /// Create an equipment instance with its class references, attributes
    /// and optional container.
    fn create_equipment(&mut self, options: EquipmentOptions) -> Result<Equipment, EquipmentError>;
}

impl EquipmentAddressSpace for AddressSpace {
    fn define_equipment_class_type(
        &mut self,
        options: EquipmentClassTypeOptions,
    ) -> Result<NodeId, EquipmentError> {
        type_factory::define_equipment_class_type(self, options)
    }

    fn define_equipment_type(
        &mut self,
        options: EquipmentTypeOptions,
    ) -> Result<NodeId, EquipmentError> {
        type_factory::define_equipment_type(self, options)
    }

    fn create_equipment(&mut self, options: EquipmentOptions) -> Result<Equipment, EquipmentError> {
        instance_factory::create_equipment(self, options)
    }
}
