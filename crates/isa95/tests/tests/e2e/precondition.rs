//! End-to-end test: an address space without the ISA-95 schema.

use isa95_address_space::{AddressSpace, AddressSpaceConfig};
use isa95_equipment::{
    EquipmentAddressSpace, EquipmentClassTypeOptions, EquipmentError, EquipmentOptions,
    EquipmentTypeOptions,
};

fn bare() -> AddressSpace {
    AddressSpace::new(AddressSpaceConfig::bare()).unwrap()
}

#[test]
fn every_operation_reports_missing_schema() {
    let mut space = bare();
    let before = space.node_count();

    let errors = [
        space
            .define_equipment_class_type(EquipmentClassTypeOptions::new("Tank"))
            .unwrap_err(),
        space
            .define_equipment_type(EquipmentTypeOptions::new("TankType"))
            .unwrap_err(),
        space
            .create_equipment(EquipmentOptions::new("Tank01"))
            .unwrap_err(),
    ];

    for err in &errors {
        assert!(err.is_precondition(), "unexpected error: {err}");
    }
    assert_eq!(space.node_count(), before);
}

#[test]
fn option_errors_come_before_schema_lookup() {
    let mut space = bare();
    let err = space
        .create_equipment(EquipmentOptions::new(""))
        .unwrap_err();
    assert!(matches!(err, EquipmentError::InvalidOptions(_)));
}

#[test]
fn config_from_json_drives_namespaces() {
    let config = AddressSpaceConfig::from_json(
        r#"{"own_namespace_uri": "urn:plant-7", "first_numeric_id": 5000}"#,
    )
    .unwrap();
    let mut space = AddressSpace::new(config).unwrap();
    assert_eq!(space.namespace_index("urn:plant-7"), Some(space.own_namespace_index()));

    let tank = space
        .define_equipment_class_type(EquipmentClassTypeOptions::new("Tank"))
        .unwrap();
    assert_eq!(tank.to_string(), format!("ns={};i=5000", space.own_namespace_index()));
}
