//! Strongly typed wrappers for primitive values.
//!
//! `StrongValue<T, A, B>` turns a bare integer or enumeration into a distinct
//! type. Instantiations with different marker types share a layout but never
//! assign, compare, or mix; every misuse is rejected while type-checking, so
//! the wrapper has no runtime behavior beyond construction, access, and
//! equality.
//!
//! ## Crate layout
//! - `scalar`: the `ScalarRepr` contract for representation types.
//! - `value`: the `StrongValue` carrier itself.
//! - `macros`: `strong_value!`, which declares markers and aliases in bulk.
//!
//! ```
//! use strongval::strong_value;
//!
//! strong_value! {
//!     /// Primary key of a player record.
//!     pub PlayerId(u32, PlayerIdTag);
//!     /// Coin balance carried by a player.
//!     pub Coins(u32, CoinsTag);
//! }
//!
//! let winner = PlayerId::new(123);
//!
//! assert_eq!(winner, PlayerId::new(123));
//! assert_ne!(winner, PlayerId::new(456));
//! assert_eq!(winner.get(), 123);
//!
//! // `PlayerId` and `Coins` wrap the same primitive, yet neither assigns,
//! // compares, nor adds against the other; those lines refuse to compile.
//! ```

mod macros;
mod scalar;
mod value;

pub use scalar::ScalarRepr;
pub use value::StrongValue;
