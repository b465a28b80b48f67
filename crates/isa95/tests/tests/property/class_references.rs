//! Property tests: the DefinedByEquipmentClass references of an instance are
//! exactly the distinct explicit classes followed by the type's classes.

use isa95_equipment::{EquipmentAddressSpace, EquipmentOptions, EquipmentTypeOptions};
use isa95_tests::{class, defined_by, new_space};
use proptest::prelude::*;

proptest! {
    #[test]
    fn references_match_effective_classes(
        class_count in 1usize..6,
        explicit in proptest::collection::vec(0usize..6, 0..6),
        on_type in proptest::collection::vec(0usize..6, 0..4),
    ) {
        let mut space = new_space();
        let classes: Vec<_> = (0..class_count)
            .map(|i| class(&mut space, &format!("Class{}", i), None))
            .collect();
        let pick = |i: usize| classes[i % class_count].clone();
        let explicit: Vec<_> = explicit.into_iter().map(pick).collect();
        let mut on_type: Vec<_> = on_type.into_iter().map(pick).collect();
        on_type.dedup();

        let mut type_options = EquipmentTypeOptions::new("SomeType");
        type_options.defined_by_equipment_class = on_type.clone();
        let type_id = space.define_equipment_type(type_options).unwrap();

        let mut expected = Vec::new();
        for c in explicit.iter().chain(on_type.iter()) {
            if !expected.contains(c) {
                expected.push(c.clone());
            }
        }

        let mut options = EquipmentOptions::new("Instance").of_type(type_id);
        options.defined_by_equipment_class = explicit;
        let result = space.create_equipment(options);

        if expected.is_empty() {
            prop_assert!(result.is_err());
        } else {
            let eq = result.unwrap();
            prop_assert_eq!(defined_by(&space, eq.node_id()), expected);
        }
    }
}
