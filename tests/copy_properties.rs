// Property tests for shallow (Clone) and deep (codec round-trip) copies.

use copy_semantics::{Cat, CodecKind, Color, DeepCopier, Eye, Legs, Shared, Tail};
use proptest::prelude::*;
use std::collections::HashMap;

fn color_strategy() -> impl Strategy<Value = Color> {
    prop_oneof![Just(Color::Black), Just(Color::Green), Just(Color::Blue)]
}

fn codec_strategy() -> impl Strategy<Value = CodecKind> {
    prop_oneof![
        Just(CodecKind::Msgpack),
        Just(CodecKind::Bincode),
        Just(CodecKind::Json)
    ]
}

prop_compose! {
    fn cat_strategy()(
        name in "[a-zA-Z]{0,12}",
        age in any::<u32>(),
        count in any::<u32>(),
        lengths in prop::collection::vec(any::<i32>(), 1..8),
        eyes in prop::collection::hash_map("[a-z]{1,6}", color_strategy(), 1..4),
        tail in -1.0e6f64..1.0e6,
    ) -> Cat {
        let eye: HashMap<String, Eye> = eyes
            .into_iter()
            .map(|(side, color)| (side, Eye::new(color)))
            .collect();
        Cat {
            name,
            age,
            leg: Legs { count, length: Shared::new(lengths) },
            eye: Shared::new(eye),
            tail: Tail { length: tail },
        }
    }
}

fn first_side(cat: &Cat) -> String {
    cat.eye.borrow().keys().next().cloned().unwrap_or_default()
}

fn other_color(color: Option<Color>) -> Color {
    match color {
        Some(Color::Blue) => Color::Black,
        _ => Color::Blue,
    }
}

proptest! {
    #[test]
    fn deep_copy_equals_source(cat in cat_strategy(), kind in codec_strategy()) {
        let copy = DeepCopier::new(kind).copy(&cat).unwrap();
        prop_assert_eq!(&copy, &cat);
        prop_assert_eq!(copy.to_string(), cat.to_string());
    }

    #[test]
    fn deep_copy_is_independent(cat in cat_strategy(), kind in codec_strategy()) {
        let copy = DeepCopier::new(kind).copy(&cat).unwrap();
        prop_assert!(!copy.shares_storage_with(&cat));

        let side = first_side(&cat);
        let original_color = cat.eye_color(&side);
        let original_length = cat.leg_length(0);

        copy.set_eye(&side, other_color(original_color));
        copy.set_leg_length(0, original_length.unwrap_or(0).wrapping_add(1));
        prop_assert_eq!(cat.eye_color(&side), original_color);
        prop_assert_eq!(cat.leg_length(0), original_length);

        // and the other way around
        let copy_color = copy.eye_color(&side);
        cat.set_eye(&side, other_color(copy_color));
        copy.leg.length.with_mut(|lengths| lengths.push(1));
        prop_assert_eq!(copy.eye_color(&side), copy_color);
        prop_assert_ne!(cat.leg.length.borrow().len(), copy.leg.length.borrow().len());
    }

    #[test]
    fn clone_aliases_containers(cat in cat_strategy()) {
        let shallow = cat.clone();
        prop_assert!(shallow.shares_storage_with(&cat));

        let side = first_side(&cat);
        let new_color = other_color(cat.eye_color(&side));
        shallow.set_eye(&side, new_color);
        shallow.set_leg_length(0, 42);
        prop_assert_eq!(cat.eye_color(&side), Some(new_color));
        prop_assert_eq!(cat.leg_length(0), Some(42));
    }

    #[test]
    fn scalars_never_cross(cat in cat_strategy(), kind in codec_strategy(), age in any::<u32>()) {
        let before = (cat.name.clone(), cat.age, cat.leg.count);

        let mut shallow = cat.clone();
        let mut deep = DeepCopier::new(kind).copy(&cat).unwrap();
        for copy in [&mut shallow, &mut deep] {
            copy.name.push('!');
            copy.age = age;
            copy.leg.count = copy.leg.count.wrapping_add(1);
        }

        prop_assert_eq!((cat.name.clone(), cat.age, cat.leg.count), before);
    }
}
