//! Human-readable rendering of a model.
//!
//! ```text
//! maximize
//!   x[1] + x[2] + x[3]
//! subject to
//!   nonedge[1,3]: x[1] + x[3] <= 1
//! binary
//!   x[1] x[2] x[3]
//! ```

use graphilp_expr::VariableId;

use crate::model::Model;

/// How much of a model [`Model::format_text`] shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextOptions {
    /// Cap on rows, objective terms and listed columns. `None` shows all.
    pub limit: Option<usize>,
}

impl TextOptions {
    pub fn preview() -> Self {
        TextOptions { limit: Some(20) }
    }

    fn take(&self, len: usize) -> usize {
        self.limit.map_or(len, |limit| limit.min(len))
    }
}

impl Model {
    pub fn format_text(&self, options: TextOptions) -> String {
        let mut lines = Vec::new();

        match self.objective() {
            Some(objective) => {
                lines.push(objective.sense.as_str().to_string());
                let shown = options.take(objective.terms.len());
                let mut sum = self.format_sum(&objective.terms[..shown]);
                if shown < objective.terms.len() {
                    sum.push_str(" + ...");
                }
                lines.push(format!("  {sum}"));
            }
            None => lines.push("feasibility".to_string()),
        }

        let row_terms = self.row_terms();
        if !row_terms.is_empty() {
            lines.push("subject to".to_string());
        }
        let shown = options.take(row_terms.len());
        for ((_, row), terms) in self.rows().zip(&row_terms).take(shown) {
            let bounds = row.bounds();
            let sum = self.format_sum(terms);
            let relation = if bounds.lower == bounds.upper {
                format!("{sum} = {}", bounds.upper)
            } else {
                match (bounds.lower.is_finite(), bounds.upper.is_finite()) {
                    (true, true) => format!("{} <= {sum} <= {}", bounds.lower, bounds.upper),
                    (false, true) => format!("{sum} <= {}", bounds.upper),
                    (true, false) => format!("{sum} >= {}", bounds.lower),
                    (false, false) => format!("{sum} free"),
                }
            };
            lines.push(format!("  {}: {relation}", row.name()));
        }
        if shown < row_terms.len() {
            lines.push(format!("  ... {} more rows", row_terms.len() - shown));
        }

        let names = self.variable_names();
        if !names.is_empty() {
            lines.push("binary".to_string());
            let shown = options.take(names.len());
            let mut listed = names[..shown].join(" ");
            if shown < names.len() {
                listed.push_str(&format!(" ... {} more", names.len() - shown));
            }
            lines.push(format!("  {listed}"));
        }

        lines.push(String::new());
        lines.join("\n")
    }

    fn format_sum(&self, terms: &[(VariableId, f64)]) -> String {
        if terms.is_empty() {
            return "0".to_string();
        }
        let mut out = String::new();
        for (position, &(var, coeff)) in terms.iter().enumerate() {
            let name = self.variable_name(var).unwrap_or("?");
            let sign = if coeff < 0.0 { "-" } else { "+" };
            if position == 0 {
                if coeff < 0.0 {
                    out.push('-');
                }
            } else {
                out.push_str(&format!(" {sign} "));
            }
            let magnitude = coeff.abs();
            if magnitude != 1.0 {
                out.push_str(&format!("{magnitude} "));
            }
            out.push_str(name);
        }
        out
    }
}
