//! Plain data stored by a [`Model`](crate::Model).

use graphilp_expr::ids::VariableId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Minimize,
    Maximize,
}

impl Sense {
    pub fn as_str(self) -> &'static str {
        match self {
            Sense::Minimize => "minimize",
            Sense::Maximize => "maximize",
        }
    }
}

/// Closed interval `[lower, upper]`; either end may be infinite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub fn new(lower: f64, upper: f64) -> Self {
        Bounds { lower, upper }
    }

    /// NaN ends and `lower > upper` are rejected.
    pub fn is_valid(&self) -> bool {
        self.lower <= self.upper
    }

    pub fn contains(&self, value: f64, tolerance: f64) -> bool {
        value >= self.lower - tolerance && value <= self.upper + tolerance
    }
}

/// A named row. Its coefficients live in the model's columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub(crate) name: String,
    pub(crate) bounds: Bounds,
}

impl Row {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// Merged objective terms, ordered by variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Objective {
    pub sense: Sense,
    pub terms: Vec<(VariableId, f64)>,
}
