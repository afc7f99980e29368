//! Runtime contract of the wrapper: construction, access, equality, and copy
//! semantics across representation types, markers, and the second axis.

use proptest::prelude::*;
use strongval::{ScalarRepr, StrongValue, strong_value};

strong_value! {
    /// Identity of one stored record.
    pub RecordId(u32, RecordIdTag);
    /// Number of copies held of one record.
    pub RecordCount(u32, RecordCountTag);
    /// Byte offset of a record inside its segment.
    pub SegmentOffset(i64, SegmentOffsetTag);
    /// Content fingerprint of one record payload.
    pub Fingerprint(u128, FingerprintTag);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Compass {
    North,
    East,
    South,
    West,
}

impl ScalarRepr for Compass {}

enum HeadingTag {}

type Heading = StrongValue<Compass, HeadingTag>;

// Second-axis instantiations: one kind marker split across two coordinate
// spaces. The axis marker is shared, so it is declared by hand.
enum AxisX {}
enum WorldSpace {}
enum ScreenSpace {}

type WorldX = StrongValue<i64, AxisX, WorldSpace>;
type ScreenX = StrongValue<i64, AxisX, ScreenSpace>;

#[test]
fn record_ids_compare_for_equality_within_their_domain() {
    assert_eq!(RecordId::new(123), RecordId::new(123));
    assert_ne!(RecordId::new(123), RecordId::new(456));

    // Same raw primitive, different domain; the cross-domain counterparts
    // of these lines are pinned as rejections in testing/compile-fail.
    assert_eq!(RecordCount::new(123), RecordCount::new(123));
}

#[test]
fn equality_is_symmetric() {
    let left = RecordId::new(5);
    let right = RecordId::new(5);

    assert_eq!(left, right);
    assert_eq!(right, left);
}

#[test]
fn reassignment_stays_within_one_instantiation() {
    let mut current = RecordId::new(0);
    assert_eq!(current.get(), 0);

    current = RecordId::new(789);
    assert_eq!(current.get(), 789);
}

#[test]
fn enum_representations_wrap_end_to_end() {
    let heading = Heading::new(Compass::North);

    assert_eq!(heading.get(), Compass::North);
    assert_eq!(heading, Heading::new(Compass::North));
    assert_ne!(heading, Heading::new(Compass::South));
    assert_ne!(Heading::new(Compass::East), Heading::new(Compass::West));
}

#[test]
fn bool_and_char_representations_are_scalars_too() {
    enum LitTag {}
    enum GlyphTag {}

    type Lit = StrongValue<bool, LitTag>;
    type Glyph = StrongValue<char, GlyphTag>;

    assert!(Lit::new(true).get());
    assert_eq!(Glyph::new('@'), Glyph::new('@'));
    assert_ne!(Glyph::new('@').get(), Glyph::new('#').get());
}

#[test]
fn second_axis_markers_yield_independent_domains() {
    let world = WorldX::new(-32);
    let screen = ScreenX::new(-32);

    // Both spaces stay fully usable; comparing across them does not
    // compile, so equality only ever holds within one space.
    assert_eq!(world.get(), screen.get());
    assert_eq!(world, WorldX::new(-32));
    assert_eq!(screen, ScreenX::new(-32));
}

#[test]
fn wrappers_pass_between_threads_by_value() {
    let id = RecordId::new(77);

    let handle = std::thread::spawn(move || id.get());

    assert_eq!(handle.join().expect("thread result"), 77);
}

proptest! {
    #[test]
    fn wrapped_values_round_trip_unchanged(raw in any::<u32>()) {
        prop_assert_eq!(RecordId::new(raw).get(), raw);
    }

    #[test]
    fn signed_offsets_round_trip_unchanged(raw in any::<i64>()) {
        prop_assert_eq!(SegmentOffset::new(raw).get(), raw);
    }

    #[test]
    fn wide_fingerprints_round_trip_unchanged(raw in any::<u128>()) {
        prop_assert_eq!(Fingerprint::new(raw).get(), raw);
    }

    #[test]
    fn equality_mirrors_raw_equality(a in any::<u32>(), b in any::<u32>()) {
        let left = RecordId::new(a);
        let right = RecordId::new(b);

        prop_assert_eq!(left == right, a == b);
        prop_assert_eq!(left != right, a != b);
        prop_assert_eq!(left == right, right == left);
    }

    #[test]
    fn inequality_is_the_negation_of_equality(a in any::<u32>(), b in any::<u32>()) {
        let eq = RecordId::new(a) == RecordId::new(b);
        let ne = RecordId::new(a) != RecordId::new(b);

        prop_assert_ne!(eq, ne);
    }

    #[test]
    fn copies_always_compare_equal_to_their_source(raw in any::<u128>()) {
        let original = Fingerprint::new(raw);
        let copy = original;

        prop_assert_eq!(original, copy);
        prop_assert_eq!(copy.get(), raw);
    }
}
