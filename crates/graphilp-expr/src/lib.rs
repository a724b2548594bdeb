//! Column and row ids plus the linear rows graphilp formulations are stated in.

pub mod expr;
pub mod ids;

pub use expr::{LinearExpr, RowExpr};
pub use ids::{ConstraintId, VariableId};
