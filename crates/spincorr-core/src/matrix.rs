//! # Correlation Matrix
//!
//! The 3×3 spin correlation matrix `C_ij`, flattened row-major. Produced
//! fresh per interpolation call; owned by the caller; never aliases grid
//! storage.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Axis labels for matrix element naming, in row/column order.
const AXIS_LABELS: [&str; 3] = ["x", "y", "z"];

/// A 3×3 correlation matrix between the spin components of the two
/// particles, flattened row-major.
///
/// `data[row * 3 + col]` is `C_{row,col}` with axes ordered x, y, z in
/// the grid's basis. Values are approximately within [-1, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    /// Flattened row-major matrix entries.
    pub data: [f64; 9],
    /// Number of rows/columns (always 3 for spin-1/2).
    pub size: usize,
}

impl CorrelationMatrix {
    /// Wrap a flattened row-major 3×3 matrix.
    pub fn new(data: [f64; 9]) -> Self {
        Self { data, size: 3 }
    }

    /// Element accessor. Row and column are in `0..3`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.size + col]
    }

    /// The `C_zz` component, index 8 of the flattened matrix. Drives the
    /// anti-top axis sign in the spin-axis estimator.
    pub fn czz(&self) -> f64 {
        self.data[8]
    }

    /// Readable label for a matrix element, e.g. `C_{xy}` for row 0,
    /// column 1.
    pub fn element_label(row: usize, col: usize) -> String {
        format!("C_{{{}{}}}", AXIS_LABELS[row], AXIS_LABELS[col])
    }
}

/// Fixed-width text rendering: one row per line, four decimal places,
/// each cell padded to eight columns.
impl fmt::Display for CorrelationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>8.4}", self.get(row, col))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_is_row_major() {
        let m = CorrelationMatrix::new([0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(m.get(0, 0), 0.0);
        assert_eq!(m.get(0, 2), 2.0);
        assert_eq!(m.get(1, 0), 3.0);
        assert_eq!(m.get(2, 2), 8.0);
        assert_eq!(m.czz(), 8.0);
    }

    #[test]
    fn element_labels() {
        assert_eq!(CorrelationMatrix::element_label(0, 0), "C_{xx}");
        assert_eq!(CorrelationMatrix::element_label(0, 1), "C_{xy}");
        assert_eq!(CorrelationMatrix::element_label(2, 1), "C_{zy}");
    }

    #[test]
    fn display_is_fixed_width() {
        let m = CorrelationMatrix::new([0.5, -0.25, 0.0, 1.0, -1.0, 0.1234, 0.0, 0.0, 0.3]);
        let text = m.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "  0.5000  -0.2500   0.0000");
        assert_eq!(lines[1], "  1.0000  -1.0000   0.1234");
    }

    #[test]
    fn serde_shape() {
        let m = CorrelationMatrix::new([0.0; 9]);
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["size"], 3);
        assert_eq!(json["data"].as_array().unwrap().len(), 9);
    }
}
