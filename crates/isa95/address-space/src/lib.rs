#![deny(unsafe_code)]
//! # isa95-address-space
//!
//! In-memory address space hosting the ISA-95 equipment schema.
//!
//! Nodes live in a single map keyed by [`NodeId`](isa95_types::NodeId);
//! references are stored on both ends. Construction bootstraps the base
//! information model and, unless configured otherwise, the ISA-95
//! equipment types. Post-install hooks registered on an object type run
//! whenever that type or one of its subtypes is instantiated.

pub mod address_space;
pub mod config;
pub mod error;
pub mod hooks;
pub mod node;
pub mod schema;
pub mod utils;

pub use address_space::{
    AddObjectOptions, AddObjectTypeOptions, AddressSpace, Isa95AttributeOptions,
};
pub use config::AddressSpaceConfig;
pub use error::AddressSpaceError;
pub use hooks::{PostInstallFn, PostInstallRegistry};
pub use node::{BrowseDirection, Reference, UaNode};
