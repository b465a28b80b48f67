//! End-to-end test: class "Tank", type "TankType" defined by it, and an
//! instance that inherits its class through the type.

use isa95_equipment::{EquipmentAddressSpace, EquipmentOptions, EquipmentTypeOptions, StandardNodes};
use isa95_tests::{class, defined_by, new_space};
use isa95_types::names::isa95;
use isa95_types::{EquipmentLevel, Variant};

#[test]
fn instance_inherits_class_from_type() {
    let mut space = new_space();
    let tank = class(&mut space, "Tank", None);
    let tank_type = space
        .define_equipment_type(EquipmentTypeOptions::new("TankType").defined_by(tank.clone()))
        .unwrap();

    let tank01 = space
        .create_equipment(EquipmentOptions::new("Tank01").of_type(tank_type.clone()))
        .unwrap();

    assert_eq!(defined_by(&space, tank01.node_id()), vec![tank.clone()]);
    assert_eq!(tank01.defined_by_equipment_classes(&space), vec![tank]);
    assert_eq!(tank01.type_definition(&space), Some(tank_type));
    assert_eq!(tank01.browse_name(&space), Some("Tank01"));
}

#[test]
fn explicit_class_repeating_the_type_class_collapses() {
    let mut space = new_space();
    let tank = class(&mut space, "Tank", None);
    let tank_type = space
        .define_equipment_type(EquipmentTypeOptions::new("TankType").defined_by(tank.clone()))
        .unwrap();

    let tank01 = space
        .create_equipment(
            EquipmentOptions::new("Tank01")
                .of_type(tank_type)
                .defined_by(tank.clone()),
        )
        .unwrap();

    assert_eq!(defined_by(&space, tank01.node_id()), vec![tank]);
}

#[test]
fn level_reaches_every_instance() {
    let mut space = new_space();
    let tank = class(&mut space, "Tank", Some(EquipmentLevel::Unit));
    let tank_type = space
        .define_equipment_type(EquipmentTypeOptions::new("TankType").defined_by(tank))
        .unwrap();

    let mut attribute_nodes = Vec::new();
    for name in ["Tank01", "Tank02", "Tank03"] {
        let eq = space
            .create_equipment(EquipmentOptions::new(name).of_type(tank_type.clone()))
            .unwrap();
        assert_eq!(eq.equipment_level(&space), Some(EquipmentLevel::Unit));
        assert_eq!(
            eq.attribute(&space, isa95::EQUIPMENT_LEVEL).map(|v| v.value.clone()),
            Some(Variant::Int32(4))
        );
        attribute_nodes.push(isa95_address_space::utils::find_isa95_attribute(
            &space,
            eq.node_id(),
            isa95::EQUIPMENT_LEVEL,
        ));
    }

    attribute_nodes.sort();
    attribute_nodes.dedup();
    assert_eq!(attribute_nodes.len(), 3, "each instance owns its attribute");
}

#[test]
fn instances_of_class_type_subtypes_get_level() {
    let mut space = new_space();
    let tank = class(&mut space, "Tank", Some(EquipmentLevel::Unit));
    let buffer_tank = space
        .define_equipment_class_type(
            isa95_equipment::EquipmentClassTypeOptions::new("BufferTank").subtype_of(tank),
        )
        .unwrap();

    let instance = space
        .add_object(isa95_address_space::AddObjectOptions::new("BufferTank01", buffer_tank))
        .unwrap();
    let level =
        isa95_address_space::utils::find_isa95_attribute(&space, &instance, isa95::EQUIPMENT_LEVEL)
            .and_then(|id| space.value_of(&id))
            .map(|v| v.value.clone());
    assert_eq!(level, Some(Variant::Int32(4)));
}

#[test]
fn type_hierarchy_contributes_classes() {
    let mut space = new_space();
    let nodes = StandardNodes::resolve(&space).unwrap();
    let vessel = class(&mut space, "Vessel", None);
    let tank = class(&mut space, "Tank", None);
    let vessel_type = space
        .define_equipment_type(EquipmentTypeOptions::new("VesselType").defined_by(vessel.clone()))
        .unwrap();
    let tank_type = space
        .define_equipment_type(
            EquipmentTypeOptions::new("TankType")
                .subtype_of(vessel_type.clone())
                .defined_by(tank.clone()),
        )
        .unwrap();
    assert!(space.is_subtype_of(&tank_type, &nodes.equipment_type));

    let tank01 = space
        .create_equipment(EquipmentOptions::new("Tank01").of_type(tank_type))
        .unwrap();
    assert_eq!(defined_by(&space, tank01.node_id()), vec![tank, vessel]);
}
