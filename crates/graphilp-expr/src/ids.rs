//! Dense ids for model columns and rows.
//!
//! A model hands ids out in insertion order, so an id doubles as the position
//! of its column or row. Ids are 32-bit; a model refuses to grow past that.

macro_rules! dense_id {
    ($(#[$attr:meta])* $name:ident, $prefix:literal) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u32);

        impl $name {
            /// Id of the entry stored at `position`, or `None` if it does not fit.
            pub fn from_index(position: usize) -> Option<Self> {
                u32::try_from(position).ok().map(Self)
            }

            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

dense_id!(
    /// A 0/1 column.
    VariableId,
    "x"
);
dense_id!(
    /// A linear row.
    ConstraintId,
    "r"
);
