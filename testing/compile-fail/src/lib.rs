//! Negative compilation suite for `strongval`.
//!
//! Each module below pins one operation the wrapper must reject while
//! type-checking. The fences are `compile_fail` doctests: `cargo test`
//! hands every snippet to the compiler and fails if one of them builds.
//! The `control` module compiles the same scaffolding legally, so a broken
//! import or renamed item cannot masquerade as a rejection.

/// Control case: the legal shapes every rejection below deviates from.
///
/// ```
/// use strongval::StrongValue;
///
/// enum UserTag {}
/// enum GoldTag {}
///
/// type UserId = StrongValue<u32, UserTag>;
/// type Gold = StrongValue<u32, GoldTag>;
///
/// strongval::strong_value! {
///     pub Tokens(u32, TokensTag);
/// }
///
/// let first = UserId::new(123);
/// let second = UserId::new(456);
/// assert!(first != second);
///
/// let mut current = UserId::new(0);
/// assert_eq!(current.get(), 0);
/// current = UserId::new(789);
/// assert_eq!(current.get(), 789);
///
/// let price = Gold::new(789);
/// assert_eq!(price.get(), current.get());
///
/// let pot = Tokens::new(5);
/// assert_ne!(pot, Tokens::new(6));
/// assert_eq!(pot.get(), 5);
/// ```
pub mod control {}

/// A raw primitive never constructs a wrapper implicitly.
///
/// ```compile_fail
/// use strongval::StrongValue;
///
/// enum UserTag {}
///
/// let _id: StrongValue<u32, UserTag> = 123;
/// ```
pub mod raw_construction {}

/// A wrapper never compares against a raw primitive.
///
/// ```compile_fail
/// use strongval::StrongValue;
///
/// enum UserTag {}
///
/// let id = StrongValue::<u32, UserTag>::new(123);
/// let _ = id == 123;
/// ```
pub mod raw_comparison {}

/// A differently-tagged instantiation never assigns across domains.
///
/// ```compile_fail
/// use strongval::StrongValue;
///
/// enum UserTag {}
/// enum GoldTag {}
///
/// let mut id = StrongValue::<u32, UserTag>::new(123);
/// let gold = StrongValue::<u32, GoldTag>::new(456);
/// id = gold;
/// ```
pub mod cross_tag_assignment {}

/// A differently-tagged instantiation never compares across domains.
///
/// ```compile_fail
/// use strongval::StrongValue;
///
/// enum UserTag {}
/// enum GoldTag {}
///
/// let id = StrongValue::<u32, UserTag>::new(123);
/// let gold = StrongValue::<u32, GoldTag>::new(456);
/// let _ = id == gold;
/// ```
pub mod cross_tag_comparison {}

/// Aliases declared through `strong_value!` carry markers of their own and
/// never compare across entries, even over one shared representation.
///
/// ```compile_fail
/// strongval::strong_value! {
///     pub PlayerId(u32, PlayerIdTag);
///     pub Coins(u32, CoinsTag);
/// }
///
/// let player = PlayerId::new(123);
/// let purse = Coins::new(123);
/// let _ = player == purse;
/// ```
pub mod generated_alias_comparison {}

/// No arithmetic exists, even between values of one instantiation.
///
/// ```compile_fail
/// use strongval::StrongValue;
///
/// enum GoldTag {}
///
/// let stash = StrongValue::<u32, GoldTag>::new(123);
/// let loot = StrongValue::<u32, GoldTag>::new(123);
/// let _ = stash + loot;
/// ```
pub mod arithmetic {}

/// No ordering exists, even between values of one instantiation.
///
/// ```compile_fail
/// use strongval::StrongValue;
///
/// enum ScoreTag {}
///
/// let low = StrongValue::<u32, ScoreTag>::new(1);
/// let high = StrongValue::<u32, ScoreTag>::new(2);
/// let _ = low < high;
/// ```
pub mod ordering {}

/// Composite representation types fail the `ScalarRepr` bound.
///
/// ```compile_fail
/// use strongval::StrongValue;
///
/// enum PointTag {}
///
/// let _point: StrongValue<(u32, u32), PointTag> = StrongValue::new((1, 2));
/// ```
pub mod composite_representation {}

/// Floating-point representation types fail the `ScalarRepr` bound.
///
/// ```compile_fail
/// use strongval::StrongValue;
///
/// enum CelsiusTag {}
///
/// let _reading: StrongValue<f32, CelsiusTag> = StrongValue::new(21.5);
/// ```
pub mod float_representation {}

/// Instantiations differing only in the second axis never compare.
///
/// ```compile_fail
/// use strongval::StrongValue;
///
/// enum AxisX {}
/// enum WorldSpace {}
/// enum ScreenSpace {}
///
/// let world = StrongValue::<i64, AxisX, WorldSpace>::new(64);
/// let screen = StrongValue::<i64, AxisX, ScreenSpace>::new(64);
/// let _ = world == screen;
/// ```
pub mod second_axis_mismatch {}

/// A raw primitive never stands in for a wrapper parameter.
///
/// ```compile_fail
/// use strongval::StrongValue;
///
/// enum UserTag {}
///
/// fn deactivate(_id: StrongValue<u32, UserTag>) {}
///
/// deactivate(123);
/// ```
pub mod raw_argument {}
