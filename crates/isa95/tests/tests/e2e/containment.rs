//! End-to-end test: building a MadeUpOf/ContainedBy hierarchy.

use isa95_address_space::BrowseDirection;
use isa95_equipment::{EquipmentAddressSpace, EquipmentOptions, StandardNodes};
use isa95_tests::{class, made_up_of, new_space};
use isa95_types::EquipmentLevel;

#[test]
fn three_level_hierarchy() {
    let mut space = new_space();
    let site = class(&mut space, "SiteClass", Some(EquipmentLevel::Site));
    let area = class(&mut space, "AreaClass", Some(EquipmentLevel::Area));
    let unit = class(&mut space, "UnitClass", Some(EquipmentLevel::Unit));
    let folder = space.objects_folder();

    let plant = space
        .create_equipment(
            EquipmentOptions::new("Plant")
                .defined_by(site)
                .organized_by(folder),
        )
        .unwrap();
    let north = space
        .create_equipment(
            EquipmentOptions::new("North")
                .defined_by(area.clone())
                .contained_by(plant.node_id().clone()),
        )
        .unwrap();
    let south = space
        .create_equipment(
            EquipmentOptions::new("South")
                .defined_by(area)
                .contained_by(plant.node_id().clone()),
        )
        .unwrap();
    let reactor = space
        .create_equipment(
            EquipmentOptions::new("Reactor")
                .defined_by(unit)
                .contained_by(north.node_id().clone()),
        )
        .unwrap();

    assert_eq!(plant.made_up_of_equipments(&space), vec![north.clone(), south.clone()]);
    assert_eq!(north.made_up_of_equipments(&space), vec![reactor.clone()]);
    assert!(south.made_up_of_equipments(&space).is_empty());
    assert_eq!(reactor.contained_by_equipment(&space), Some(north));
    assert_eq!(
        reactor.contained_by_equipment(&space).and_then(|n| n.contained_by_equipment(&space)),
        Some(plant.clone())
    );

    assert_eq!(plant.equipment_level(&space), Some(EquipmentLevel::Site));
    assert_eq!(south.equipment_level(&space), Some(EquipmentLevel::Area));
    assert_eq!(reactor.equipment_level(&space), Some(EquipmentLevel::Unit));
}

#[test]
fn handle_sees_children_added_later() {
    let mut space = new_space();
    let area = class(&mut space, "AreaClass", None);
    let parent = space
        .create_equipment(EquipmentOptions::new("Area").defined_by(area.clone()))
        .unwrap();
    assert!(parent.made_up_of_equipments(&space).is_empty());

    let child = space
        .create_equipment(
            EquipmentOptions::new("Cell")
                .defined_by(area)
                .contained_by(parent.node_id().clone()),
        )
        .unwrap();
    assert_eq!(parent.made_up_of_equipments(&space), vec![child]);
}

#[test]
fn containment_is_stored_on_both_ends() {
    let mut space = new_space();
    let nodes = StandardNodes::resolve(&space).unwrap();
    let area = class(&mut space, "AreaClass", None);
    let parent = space
        .create_equipment(EquipmentOptions::new("Area").defined_by(area.clone()))
        .unwrap();
    let child = space
        .create_equipment(
            EquipmentOptions::new("Cell")
                .defined_by(area)
                .contained_by(parent.node_id().clone()),
        )
        .unwrap();

    assert_eq!(made_up_of(&space, parent.node_id()), vec![child.node_id().clone()]);
    assert_eq!(
        space.find_references_as_objects(
            child.node_id(),
            &nodes.made_up_of_equipment,
            BrowseDirection::Inverse
        ),
        vec![parent.node_id().clone()]
    );
}
