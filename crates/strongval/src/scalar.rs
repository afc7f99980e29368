///
/// ScalarRepr
///
/// Representation boundary for values stored inside a `StrongValue`.
/// Covers the primitive integral types plus `bool` and `char`; field-less
/// `Copy + Eq` enumerations opt in downstream with an empty impl:
///
/// ```
/// use strongval::{ScalarRepr, StrongValue};
///
/// #[derive(Clone, Copy, Debug, Eq, PartialEq)]
/// enum Suit {
///     Clubs,
///     Diamonds,
///     Hearts,
///     Spades,
/// }
///
/// impl ScalarRepr for Suit {}
///
/// enum TrumpTag {}
///
/// let trump = StrongValue::<Suit, TrumpTag>::new(Suit::Hearts);
/// assert_eq!(trump.get(), Suit::Hearts);
/// ```
///
/// Composites, floats, and anything else without the impl cannot instantiate
/// the wrapper at all. Implement this only for plain scalar-like types; the
/// supertraits keep every wrapper trivially copyable and equality-comparable.
///

pub trait ScalarRepr: Copy + Eq {}

macro_rules! impl_scalar_repr {
    ($($repr:ty),* $(,)?) => {
        $(
            impl ScalarRepr for $repr {}
        )*
    };
}

impl_scalar_repr!(i8, i16, i32, i64, i128, isize);
impl_scalar_repr!(u8, u16, u32, u64, u128, usize);
impl_scalar_repr!(bool, char);
