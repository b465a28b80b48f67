#[path = "property/equipment_level.rs"]
mod equipment_level;

#[path = "property/class_references.rs"]
mod class_references;

#[path = "property/containment.rs"]
mod containment;
