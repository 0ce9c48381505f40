//! # Bilinear Interpolation
//!
//! Maps a continuous `(θ, φ)` onto the discrete grid: locate the
//! surrounding mesh nodes, clamp at the boundaries, and blend the four
//! corner matrices component-wise — theta first, then phi.
//!
//! ## Edge-Case Contract
//!
//! The node search finds the smallest index whose value is `>= target`
//! (range length when no such index exists). The boundary ladder is then
//! checked in a fixed order:
//!
//! 1. `thetaIdx == 0` — clamp to the first theta row; the phi column is
//!    the found index, or column 0 when phi was past the end.
//! 2. `thetaIdx == thetaSteps` — clamp to the last theta row, same phi
//!    column rule.
//! 3. `phiIdx == 0` — clamp to column 0 of the found theta row.
//! 4. `phiIdx == phiSteps` — clamp to the last column.
//!
//! Inside the mesh, the blend is exact at nodes: `dt` and `dp` both hit
//! 1 when the target equals a node value, so the result is the stored
//! cell verbatim.

use spincorr_core::CorrelationMatrix;
use spincorr_grid::SpinGrid;

/// Smallest index in the sorted range whose value is `>= target`;
/// `range.len()` when every value is smaller.
fn lower_bound(range: &[f64], target: f64) -> usize {
    range.partition_point(|&v| v < target)
}

/// Interpolate the correlation matrix at `(theta, phi)`.
///
/// Returns a freshly allocated matrix; the grid storage is never
/// aliased. Out-of-range angles clamp to the boundary rows/columns.
pub fn correlation_matrix(grid: &SpinGrid, theta: f64, phi: f64) -> CorrelationMatrix {
    CorrelationMatrix::new(interpolate_components(grid, theta, phi))
}

/// Core of the interpolation: produce the 9 blended components.
fn interpolate_components(grid: &SpinGrid, theta: f64, phi: f64) -> [f64; 9] {
    let theta_len = grid.theta_range.len();
    let phi_len = grid.phi_range.len();

    let theta_idx = lower_bound(&grid.theta_range, theta);
    let phi_idx = lower_bound(&grid.phi_range, phi);

    // Phi column used while clamped to a boundary theta row: the found
    // node, or column 0 when phi lies past the end of the range.
    let phi_clamped = if phi_idx >= phi_len { 0 } else { phi_idx };

    if theta_idx == 0 {
        return *grid.cell(0, phi_clamped);
    }
    if theta_idx >= theta_len {
        return *grid.cell(theta_len - 1, phi_clamped);
    }
    if phi_idx == 0 {
        return *grid.cell(theta_idx, 0);
    }
    if phi_idx >= phi_len {
        return *grid.cell(theta_idx, phi_len - 1);
    }

    // Four surrounding corners.
    let t0 = grid.theta_range[theta_idx - 1];
    let t1 = grid.theta_range[theta_idx];
    let p0 = grid.phi_range[phi_idx - 1];
    let p1 = grid.phi_range[phi_idx];

    let q00 = grid.cell(theta_idx - 1, phi_idx - 1);
    let q01 = grid.cell(theta_idx - 1, phi_idx);
    let q10 = grid.cell(theta_idx, phi_idx - 1);
    let q11 = grid.cell(theta_idx, phi_idx);

    // Normalized coordinates in [0, 1].
    let dt = (theta - t0) / (t1 - t0);
    let dp = (phi - p0) / (p1 - p0);

    let mut result = [0.0; 9];
    for (i, out) in result.iter_mut().enumerate() {
        let v0 = q00[i] * (1.0 - dt) + q10[i] * dt;
        let v1 = q01[i] * (1.0 - dt) + q11[i] * dt;
        *out = v0 * (1.0 - dp) + v1 * dp;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use spincorr_core::{EnergyPreset, GridKey, ProductionMode, SpinBasis};
    use spincorr_grid::generate_grid;
    use std::f64::consts::PI;

    fn grid() -> SpinGrid {
        generate_grid(
            GridKey::new(
                ProductionMode::GluonFusion,
                SpinBasis::Helicity,
                EnergyPreset::Tev13,
            ),
            91,
            91,
        )
        .unwrap()
    }

    #[test]
    fn exact_at_every_node() {
        let grid = generate_grid(
            GridKey::new(
                ProductionMode::QuarkAntiquark,
                SpinBasis::Beam,
                EnergyPreset::Tev8,
            ),
            9,
            11,
        )
        .unwrap();
        for (i, &theta) in grid.theta_range.iter().enumerate() {
            for (j, &phi) in grid.phi_range.iter().enumerate() {
                let m = correlation_matrix(&grid, theta, phi);
                assert_eq!(&m.data, grid.cell(i, j), "node ({i}, {j})");
            }
        }
    }

    #[test]
    fn origin_returns_first_cell_verbatim() {
        let grid = grid();
        let m = correlation_matrix(&grid, 0.0, 0.0);
        assert_eq!(&m.data, grid.cell(0, 0));
        assert_eq!(m.size, 3);
    }

    #[test]
    fn theta_below_range_clamps_to_first_row() {
        let grid = grid();
        let clamped = correlation_matrix(&grid, -0.001, 1.0);
        let at_zero = correlation_matrix(&grid, 0.0, 1.0);
        assert_eq!(clamped.data, at_zero.data);
    }

    #[test]
    fn theta_above_range_clamps_to_last_row() {
        let grid = grid();
        let m = correlation_matrix(&grid, PI + 0.001, 0.0);
        assert_eq!(&m.data, grid.cell(grid.theta_steps - 1, 0));
    }

    #[test]
    fn phi_above_range_clamps() {
        let grid = grid();
        // Interior theta, phi past the end: last column of the found row.
        let theta = grid.theta_range[40];
        let m = correlation_matrix(&grid, theta, 2.0 * PI + 0.5);
        assert_eq!(&m.data, grid.cell(40, grid.phi_steps - 1));
    }

    #[test]
    fn both_angles_past_the_end_use_column_zero() {
        let grid = grid();
        let m = correlation_matrix(&grid, PI + 1.0, 2.0 * PI + 1.0);
        assert_eq!(&m.data, grid.cell(grid.theta_steps - 1, 0));
    }

    #[test]
    fn midpoint_along_theta_is_arithmetic_mean() {
        let grid = grid();
        // Phi fixed at a node; theta strictly between two adjacent nodes.
        let j = 30;
        let phi = grid.phi_range[j];
        let (i0, i1) = (45, 46);
        let t0 = grid.theta_range[i0];
        let t1 = grid.theta_range[i1];

        let lo = correlation_matrix(&grid, t0, phi);
        let hi = correlation_matrix(&grid, t1, phi);
        let mid = correlation_matrix(&grid, (t0 + t1) / 2.0, phi);

        for k in 0..9 {
            let mean = (lo.data[k] + hi.data[k]) / 2.0;
            assert!(
                (mid.data[k] - mean).abs() < 1e-12,
                "component {k}: {} vs {}",
                mid.data[k],
                mean
            );
        }
    }

    #[test]
    fn result_does_not_alias_grid_storage() {
        let grid = grid();
        let theta = grid.theta_range[10];
        let phi = grid.phi_range[10];
        let mut m = correlation_matrix(&grid, theta, phi);
        m.data[0] = 999.0;
        assert_ne!(grid.cell(10, 10)[0], 999.0);
    }

    proptest! {
        #[test]
        fn interpolated_values_bounded_by_corner_extremes(
            theta in 0.0..PI,
            phi in 0.0..(2.0 * PI),
        ) {
            let grid = generate_grid(
                GridKey::new(
                    ProductionMode::QuarkAntiquark,
                    SpinBasis::OffDiagonal,
                    EnergyPreset::Tev14,
                ),
                13,
                17,
            )
            .unwrap();
            let m = correlation_matrix(&grid, theta, phi);
            // Each component is a convex combination of cell values, so
            // it must lie within the global min/max of the grid.
            for k in 0..9 {
                let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
                for row in &grid.grids {
                    for cell in row {
                        lo = lo.min(cell[k]);
                        hi = hi.max(cell[k]);
                    }
                }
                prop_assert!(m.data[k] >= lo - 1e-12 && m.data[k] <= hi + 1e-12);
            }
        }
    }
}
