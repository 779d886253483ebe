use std::fmt;

use crate::interpreter::value::core::Value;

/// Number of decimals used when no precision is given.
pub const DEFAULT_PRECISION: usize = 3;

/// Largest precision honoured; `10^p` must stay finite and exact enough.
const MAX_PRECISION: usize = 15;

/// Renders a [`Value`] with its numbers rounded to a fixed number of
/// decimals.
///
/// Created by [`Value::display`]. Scalars print in their shortest form,
/// vectors as `( a, b, c )` and matrices as one parenthesized row per line.
pub struct ValueDisplay<'a> {
    value:     &'a Value,
    precision: usize,
}

impl Value {
    /// Returns an adapter that formats the value rounded to `precision`
    /// decimals.
    ///
    /// # Example
    /// ```
    /// use vecalc::interpreter::value::{core::Value, matrix::Matrix, vector::Vector};
    ///
    /// assert_eq!(Value::Scalar(1.0 / 3.0).display(2).to_string(), "0.33");
    /// assert_eq!(Value::Scalar(2.0).display(3).to_string(), "2");
    ///
    /// let v = Value::from(Vector::from([1.0, 2.5, -3.0]));
    /// assert_eq!(v.display(3).to_string(), "( 1, 2.5, -3 )");
    ///
    /// let m = Value::from(Matrix::from([[1.0, 2.0], [3.0, 4.0]]));
    /// assert_eq!(m.display(3).to_string(), "( 1, 2 )\n( 3, 4 )");
    /// ```
    #[must_use]
    pub const fn display(&self, precision: usize) -> ValueDisplay<'_> {
        ValueDisplay { value: self,
                       precision }
    }
}

/// Rounds `value` half away from zero and folds negative zero into zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn round_to(value: f64, precision: usize) -> f64 {
    let factor = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 { 0.0 } else { rounded }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[f64], precision: usize) -> fmt::Result {
    write!(f, "( ")?;
    for (index, cell) in cells.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", round_to(*cell, precision))?;
    }
    write!(f, " )")
}

impl fmt::Display for ValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Scalar(s) => write!(f, "{}", round_to(*s, self.precision)),
            Value::Vector(v) => write_row(f, v.components(), self.precision),
            Value::Matrix(m) => {
                for (index, row) in m.rows().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    write_row(f, row, self.precision)?;
                }
                Ok(())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(Value::Scalar(-0.0001).display(3).to_string(), "0");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(Value::Scalar(2.0006).display(3).to_string(), "2.001");
        assert_eq!(Value::Scalar(-1.25).display(1).to_string(), "-1.3");
    }

    #[test]
    fn default_display_uses_three_decimals() {
        assert_eq!(Value::Scalar(std::f64::consts::PI).to_string(), "3.142");
    }
}
