/// Declare marker types and wrapper aliases in bulk.
///
/// Each entry names an alias, its representation type, and a fresh marker
/// identifier. The macro emits the marker as an uninhabited enum and the
/// alias as a single-marker `StrongValue` instantiation; outer attributes
/// (doc comments included) land on the alias. Two-axis instantiations are
/// declared by hand, since a second-axis marker is usually shared between
/// several aliases.
///
/// ```
/// strongval::strong_value! {
///     /// Width of a sprite sheet cell, in texels.
///     pub CellWidth(u16, CellWidthTag);
///     /// Height of a sprite sheet cell, in texels.
///     pub CellHeight(u16, CellHeightTag);
/// }
///
/// let w = CellWidth::new(128);
///
/// assert_eq!(w.get(), 128);
/// assert_eq!(w, CellWidth::new(128));
/// ```
#[macro_export]
macro_rules! strong_value {
    ($(
        $(#[$meta:meta])*
        $vis:vis $name:ident($repr:ty, $marker:ident);
    )+) => {
        $(
            #[doc = concat!("Marker distinguishing `", stringify!($name), "` from other instantiations.")]
            $vis enum $marker {}

            $(#[$meta])*
            $vis type $name = $crate::StrongValue<$repr, $marker>;
        )+
    };
}

///
/// TESTS
///
