//! End-to-end test: an instance defined by two classes carries both class
//! references and the attributes of both.

use isa95_address_space::{utils, Isa95AttributeOptions};
use isa95_equipment::{EquipmentAddressSpace, EquipmentOptions};
use isa95_tests::{class, defined_by, new_space};
use isa95_types::names::isa95;
use isa95_types::{EquipmentLevel, Variant};

#[test]
fn two_classes_two_references_all_attributes() {
    let mut space = new_space();
    let tank = class(&mut space, "Tank", Some(EquipmentLevel::Unit));
    let heated = class(&mut space, "Heated", None);
    let double = space.find_data_type("Double", 0).unwrap();
    space
        .add_isa95_attribute(Isa95AttributeOptions {
            attribute_of: heated.clone(),
            browse_name: "MaxTemperature".into(),
            data_type: double.clone(),
            value: Variant::Double(180.0),
            modelling_rule: None,
            description: Some("upper bound in °C".into()),
        })
        .unwrap();
    space
        .add_isa95_attribute(Isa95AttributeOptions {
            attribute_of: tank.clone(),
            browse_name: "Volume".into(),
            data_type: double,
            value: Variant::Double(25.5),
            modelling_rule: None,
            description: None,
        })
        .unwrap();

    let eq = space
        .create_equipment(
            EquipmentOptions::new("HeatedTank01")
                .defined_by(tank.clone())
                .defined_by(heated.clone()),
        )
        .unwrap();

    assert_eq!(defined_by(&space, eq.node_id()), vec![tank.clone(), heated.clone()]);

    let mut names = eq.attribute_names(&space);
    names.sort_unstable();
    assert_eq!(names, vec![isa95::EQUIPMENT_LEVEL, "MaxTemperature", "Volume"]);
    assert_eq!(
        eq.attribute(&space, "MaxTemperature").map(|v| v.value.clone()),
        Some(Variant::Double(180.0))
    );

    // copies, not shared nodes
    let class_volume = utils::find_isa95_attribute(&space, &tank, "Volume").unwrap();
    let instance_volume = utils::find_isa95_attribute(&space, eq.node_id(), "Volume").unwrap();
    assert_ne!(class_volume, instance_volume);
}

#[test]
fn shared_attribute_name_taken_from_first_class() {
    let mut space = new_space();
    let first = class(&mut space, "First", Some(EquipmentLevel::WorkCell));
    let second = class(&mut space, "Second", Some(EquipmentLevel::Area));

    let eq = space
        .create_equipment(
            EquipmentOptions::new("Cell01")
                .defined_by(first)
                .defined_by(second),
        )
        .unwrap();

    assert_eq!(eq.equipment_level(&space), Some(EquipmentLevel::WorkCell));
    assert_eq!(eq.attribute_names(&space).len(), 1);
}
