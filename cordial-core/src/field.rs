//! Field identifiers.

use std::{fmt::Debug, hash::Hash};

/// An enumerated field identifier of a [`Part`](crate::Part).
///
/// The set of variants is the part's fillable set: hydration only ever sets
/// attributes named by a variant, and anything else in a payload is dropped.
/// Ordering follows declaration order, which is also the order attributes
/// iterate in.
///
/// Usually derived with `#[derive(Field)]` from `cordial-macros`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a part field enumeration",
    label = "missing `Field` implementation",
    note = "Derive it with `#[derive(Field)]` on an enum of unit variants."
)]
pub trait Field: Copy + Eq + Ord + Hash + Debug + Send + Sync + 'static {
    /// Every field, in declaration order.
    const ALL: &'static [Self];

    /// The wire name of this field.
    fn name(self) -> &'static str;

    /// Look a field up by its wire name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }
}
