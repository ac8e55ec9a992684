//! The two copy scenarios: assign-then-mutate, and deep-copy-then-mutate.
//!
//! Both run the same mutations on the copy (once on a by-value argument,
//! once in place) and report the source and copy after each step.

use tracing::info;

use crate::codec::Codec;
use crate::copier::DeepCopier;
use crate::error::CopyError;
use crate::record::{Cat, Color, Tail};
use crate::report::Reporter;

#[derive(Debug)]
pub struct DemoOutcome {
    pub source: Cat,
    pub copy: Cat,
}

/// Takes the cat by value. Scalar changes stay local to the argument; map
/// and vector changes land in whatever storage the argument shares.
pub fn modify_cat(mut cat: Cat, reporter: &mut dyn Reporter) {
    reporter.values(&[("enter cat", &cat)]);
    reporter.addresses("in modify", &cat);

    cat.name = "Ben".to_string();
    cat.set_eye("left", Color::Blue);
    cat.tail = Tail { length: 234.56 };
    cat.leg.count = 3;
    cat.set_leg_length(0, 0);

    reporter.values(&[("exit cat", &cat)]);
}

pub fn mutate_outside(cat: &mut Cat) {
    cat.name = "Ben".to_string();
    cat.set_eye("right", Color::Black);
    cat.tail = Tail { length: 234.56 };
    cat.leg.count = 3;
    cat.set_leg_length(1, 0);
}

pub fn shallow_copy_demo(reporter: &mut dyn Reporter) -> DemoOutcome {
    info!("running shallow copy demo");
    reporter.section("shallowCopy");

    let cat_a = Cat::tom();
    let mut cat_b = cat_a.clone();
    reporter.addresses("catA", &cat_a);
    reporter.addresses("catB", &cat_b);
    reporter.values(&[("catA", &cat_a), ("catB", &cat_b)]);

    modify_cat(cat_b.clone(), reporter);
    reporter.values(&[("catA", &cat_a), ("catB", &cat_b)]);

    mutate_outside(&mut cat_b);
    reporter.values(&[("catA", &cat_a), ("catB", &cat_b)]);

    if cat_a.shares_storage_with(&cat_b) {
        reporter.note("catA and catB share eye and leg storage: map and vector edits leak across");
    }

    DemoOutcome {
        source: cat_a,
        copy: cat_b,
    }
}

pub fn deep_copy_demo<C: Codec>(
    copier: &DeepCopier<C>,
    reporter: &mut dyn Reporter,
) -> Result<DemoOutcome, CopyError> {
    info!(codec = copier.codec().name(), "running deep copy demo");
    reporter.section("deepCopy");

    let cat_a = Cat::tom();
    let mut cat_b = Cat::default();
    copier.copy_into(&mut cat_b, &cat_a)?;
    reporter.addresses("catA", &cat_a);
    reporter.addresses("catB", &cat_b);
    reporter.values(&[("catA", &cat_a), ("catB", &cat_b)]);

    modify_cat(cat_b.clone(), reporter);
    reporter.values(&[("catA", &cat_a), ("catB", &cat_b)]);

    mutate_outside(&mut cat_b);
    reporter.values(&[("catA", &cat_a), ("catB", &cat_b)]);

    if !cat_a.shares_storage_with(&cat_b) {
        reporter.note("catA is untouched: the deep copy owns all of its storage");
    }

    Ok(DemoOutcome {
        source: cat_a,
        copy: cat_b,
    })
}

/// Runs the shallow demo, then the deep one.
pub fn run<C: Codec>(
    copier: &DeepCopier<C>,
    reporter: &mut dyn Reporter,
) -> Result<(DemoOutcome, DemoOutcome), CopyError> {
    let shallow = shallow_copy_demo(reporter);
    let deep = deep_copy_demo(copier, reporter)?;
    Ok((shallow, deep))
}
