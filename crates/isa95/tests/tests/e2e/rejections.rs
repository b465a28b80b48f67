//! End-to-end test: rejected calls leave the address space untouched.

use isa95_address_space::{AddObjectTypeOptions, AddressSpaceError};
use isa95_equipment::{
    ConstraintViolation, EquipmentAddressSpace, EquipmentClassTypeOptions, EquipmentError,
    EquipmentOptions, EquipmentTypeOptions,
};
use isa95_tests::{class, new_space, reference_count};

#[test]
fn foreign_super_type_rejected() {
    let mut space = new_space();
    let pump = space
        .add_object_type(AddObjectTypeOptions::new("PumpType"))
        .unwrap();
    let nodes_before = space.node_count();

    let err = space
        .define_equipment_type(EquipmentTypeOptions::new("BadType").subtype_of(pump))
        .unwrap_err();

    assert!(matches!(
        err,
        EquipmentError::Constraint(ConstraintViolation::NotAnEquipmentType(_))
    ));
    assert_eq!(space.node_count(), nodes_before);
}

#[test]
fn equipment_subtype_accepted() {
    let mut space = new_space();
    let base = space
        .define_equipment_type(EquipmentTypeOptions::new("VesselType"))
        .unwrap();
    let derived = space
        .define_equipment_type(EquipmentTypeOptions::new("TankType").subtype_of(base.clone()))
        .unwrap();
    assert_eq!(space.super_type_of(&derived), Some(base));
}

#[test]
fn non_equipment_container_rejected_without_edges() {
    let mut space = new_space();
    let tank = class(&mut space, "Tank", None);
    let folder = space.objects_folder();
    let nodes_before = space.node_count();
    let references_before = reference_count(&space);

    let err = space
        .create_equipment(
            EquipmentOptions::new("Tank01")
                .defined_by(tank)
                .contained_by(folder),
        )
        .unwrap_err();

    assert!(matches!(
        err,
        EquipmentError::Constraint(ConstraintViolation::ContainerNotEquipment(_))
    ));
    assert_eq!(space.node_count(), nodes_before);
    assert_eq!(reference_count(&space), references_before);
}

#[test]
fn missing_class_rejected_without_edges() {
    let mut space = new_space();
    let plain_type = space
        .define_equipment_type(EquipmentTypeOptions::new("PlainType"))
        .unwrap();
    let nodes_before = space.node_count();
    let references_before = reference_count(&space);

    let err = space
        .create_equipment(EquipmentOptions::new("Orphan").of_type(plain_type))
        .unwrap_err();

    assert!(matches!(
        err,
        EquipmentError::Constraint(ConstraintViolation::NoEquipmentClass(_))
    ));
    assert_eq!(space.node_count(), nodes_before);
    assert_eq!(reference_count(&space), references_before);
}

#[test]
fn empty_browse_name_is_invalid_options() {
    let mut space = new_space();
    let err = space
        .define_equipment_class_type(EquipmentClassTypeOptions::new(""))
        .unwrap_err();
    assert!(matches!(err, EquipmentError::InvalidOptions(_)));
}

#[test]
fn duplicate_type_name_comes_from_host() {
    let mut space = new_space();
    class(&mut space, "Tank", None);
    let err = space
        .define_equipment_class_type(EquipmentClassTypeOptions::new("Tank"))
        .unwrap_err();
    assert!(matches!(
        err,
        EquipmentError::AddressSpace(AddressSpaceError::DuplicateBrowseName { .. })
    ));
}

#[test]
fn duplicate_sibling_in_folder_rejected() {
    let mut space = new_space();
    let tank = class(&mut space, "Tank", None);
    let folder = space.objects_folder();
    space
        .create_equipment(
            EquipmentOptions::new("Tank01")
                .defined_by(tank.clone())
                .organized_by(folder.clone()),
        )
        .unwrap();
    let nodes_before = space.node_count();

    let err = space
        .create_equipment(
            EquipmentOptions::new("Tank01")
                .defined_by(tank)
                .organized_by(folder),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        EquipmentError::AddressSpace(AddressSpaceError::DuplicateBrowseName { .. })
    ));
    assert_eq!(space.node_count(), nodes_before);
}
