//! Weighted sums of 0/1 columns and the rows built from them.
//!
//! Graph formulations only need two row shapes: packing rows
//! (`x[i] + x[j] <= 1`, `x - y <= 0`) and assignment rows
//! (`sum_k x[i][k] = 1`). A [`LinearExpr`] collects the terms and
//! [`LinearExpr::at_most`] / [`LinearExpr::exactly`] close it into a [`RowExpr`].

use std::collections::BTreeMap;

use crate::ids::VariableId;

/// `sum c_j x_j` with no constant part. A variable may appear more than once
/// until the terms are merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearExpr {
    terms: Vec<(VariableId, f64)>,
}

impl LinearExpr {
    /// Unit-weight sum of `vars`.
    pub fn sum_of<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = VariableId>,
    {
        LinearExpr {
            terms: vars.into_iter().map(|var| (var, 1.0)).collect(),
        }
    }

    /// Append `coeff * var`.
    pub fn with(mut self, var: VariableId, coeff: f64) -> Self {
        self.terms.push((var, coeff));
        self
    }

    pub fn terms(&self) -> &[(VariableId, f64)] {
        &self.terms
    }

    /// Terms ordered by variable, repeats summed, zero weights dropped.
    pub fn merged(&self) -> Vec<(VariableId, f64)> {
        let mut sums: BTreeMap<VariableId, f64> = BTreeMap::new();
        for &(var, coeff) in &self.terms {
            *sums.entry(var).or_insert(0.0) += coeff;
        }
        sums.into_iter().filter(|(_, coeff)| *coeff != 0.0).collect()
    }

    /// Packing row `self <= rhs`.
    pub fn at_most(self, rhs: f64) -> RowExpr {
        RowExpr {
            expr: self,
            lower: f64::NEG_INFINITY,
            upper: rhs,
        }
    }

    /// Assignment row `self = rhs`.
    pub fn exactly(self, rhs: f64) -> RowExpr {
        RowExpr {
            expr: self,
            lower: rhs,
            upper: rhs,
        }
    }
}

/// `lower <= expr <= upper`. An infinite side is absent.
#[derive(Debug, Clone, PartialEq)]
pub struct RowExpr {
    pub expr: LinearExpr,
    pub lower: f64,
    pub upper: f64,
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn var(position: usize) -> VariableId {
        VariableId::from_index(position).unwrap()
    }

    #[test]
    fn sum_of_uses_unit_weights() {
        let expr = LinearExpr::sum_of([var(0), var(3)]);
        assert_eq!(expr.terms(), &[(var(0), 1.0), (var(3), 1.0)]);
        assert!(LinearExpr::default().terms().is_empty());
    }

    #[test]
    fn merged_sums_repeats_and_drops_zeros() {
        let expr = LinearExpr::sum_of([var(2), var(0)])
            .with(var(2), 2.0)
            .with(var(0), -1.0)
            .with(var(1), -1.0);
        assert_eq!(expr.merged(), vec![(var(1), -1.0), (var(2), 3.0)]);
    }

    #[test]
    fn activation_row_is_a_packing_row() {
        let row = LinearExpr::sum_of([var(0)]).with(var(1), -1.0).at_most(0.0);
        assert_eq!(row.lower, f64::NEG_INFINITY);
        assert_eq!(row.upper, 0.0);
        assert_eq!(row.expr.terms().len(), 2);
    }

    #[test]
    fn assignment_row_pins_both_sides() {
        let row = LinearExpr::sum_of([var(0), var(1), var(2)]).exactly(1.0);
        assert_eq!((row.lower, row.upper), (1.0, 1.0));
    }
}
