//! Property tests: in any randomly shaped hierarchy each child appears exactly
//! once among its parent's MadeUpOfEquipment targets.

use isa95_equipment::{EquipmentAddressSpace, EquipmentOptions};
use isa95_tests::{class, new_space};
use proptest::prelude::*;

proptest! {
    #[test]
    fn child_listed_once_under_parent(
        parents in proptest::collection::vec(any::<prop::sample::Index>(), 1..15),
    ) {
        let mut space = new_space();
        let area = class(&mut space, "AreaClass", None);
        let root = space
            .create_equipment(EquipmentOptions::new("Root").defined_by(area.clone()))
            .unwrap();

        let mut created = vec![root];
        for (i, pick) in parents.iter().enumerate() {
            let parent = created[pick.index(created.len())].clone();
            let child = space
                .create_equipment(
                    EquipmentOptions::new(format!("E{}", i))
                        .defined_by(area.clone())
                        .contained_by(parent.node_id().clone()),
                )
                .unwrap();

            let siblings = parent.made_up_of_equipments(&space);
            prop_assert_eq!(siblings.iter().filter(|e| **e == child).count(), 1);
            prop_assert_eq!(child.contained_by_equipment(&space), Some(parent));
            created.push(child);
        }
    }
}
