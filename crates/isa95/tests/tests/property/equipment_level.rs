//! Property tests: every instance of a leveled class type, or of any subtype
//! of it, owns exactly one "EquipmentLevel" attribute with the class level.

use isa95_address_space::{utils, AddObjectOptions};
use isa95_equipment::{EquipmentAddressSpace, EquipmentClassTypeOptions};
use isa95_tests::{class, new_space};
use isa95_types::names::isa95;
use isa95_types::{EquipmentLevel, Variant};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn arb_level() -> impl Strategy<Value = EquipmentLevel> {
    proptest::sample::select(EquipmentLevel::ALL.to_vec())
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn level_copied_once_per_instance(
        level in arb_level(),
        depth in 0usize..4,
        instances in 1usize..6,
    ) {
        let mut space = new_space();
        let mut leaf = class(&mut space, "Root", Some(level));
        for i in 0..depth {
            leaf = space
                .define_equipment_class_type(
                    EquipmentClassTypeOptions::new(format!("Sub{}", i)).subtype_of(leaf),
                )
                .unwrap();
        }

        let mut seen = Vec::new();
        for i in 0..instances {
            let instance = space
                .add_object(AddObjectOptions::new(format!("obj-{}", i), leaf.clone()))
                .unwrap();
            let levels: Vec<_> = utils::isa95_attributes_of(&space, &instance)
                .into_iter()
                .filter(|id| space.browse_name_of(id) == Some(isa95::EQUIPMENT_LEVEL))
                .collect();
            prop_assert_eq!(levels.len(), 1);
            prop_assert_eq!(
                space.value_of(&levels[0]).map(|v| v.value.clone()),
                Some(Variant::Int32(level.value()))
            );
            prop_assert!(!seen.contains(&levels[0]));
            seen.push(levels[0].clone());
        }
    }
}
