#![deny(unsafe_code)]
//! # isa95-types
//!
//! Core type definitions shared by the ISA-95 equipment crates.
//!
//! This crate provides node identifiers, values, node classes and the
//! ISA-95 equipment vocabulary (standard browse names and equipment levels).

pub mod equipment_level;
pub mod ids;
pub mod names;
pub mod node_class;
pub mod variant;

pub use equipment_level::EquipmentLevel;
pub use ids::{Identifier, NodeId, NodeIdParseError, QualifiedName};
pub use node_class::{ModellingRule, NodeClass};
pub use variant::{DataValue, Variant};
