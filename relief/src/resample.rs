use crate::{AlignedProfile, ReliefError};
use transect::C;

/// Evaluates `aligned` at every grid point by piecewise-linear
/// interpolation, producing one row of the resampled matrix.
///
/// Grid points left of the first sample or right of the last take the
/// nearest boundary sample's value. Profiles rarely span the whole
/// display window after shifting, so running off the ends is expected
/// rather than an error.
pub fn resample(aligned: &AlignedProfile, grid: &[C]) -> Result<Vec<C>, ReliefError> {
    let xs = &aligned.distance;
    let ys = &aligned.elevation;

    let last = match xs.len().checked_sub(1) {
        Some(last) if last > 0 && xs[0] != xs[last] => last,
        _ => {
            return Err(ReliefError::DegenerateProfile {
                name: aligned.name.clone(),
            })
        }
    };

    let row = grid
        .iter()
        .map(|&g| {
            if g <= xs[0] {
                ys[0]
            } else if g >= xs[last] {
                ys[last]
            } else {
                // First sample at or right of g; g is interior, so
                // 1 <= hi <= last.
                let hi = xs.partition_point(|&x| x < g);
                if xs[hi] == g {
                    ys[hi]
                } else {
                    let lo = hi - 1;
                    let t = (g - xs[lo]) / (xs[hi] - xs[lo]);
                    ys[lo] + t * (ys[hi] - ys[lo])
                }
            }
        })
        .collect();

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::{resample, AlignedProfile};
    use crate::ReliefError;
    use approx::assert_relative_eq;

    fn aligned(distance: Vec<f64>, elevation: Vec<f64>) -> AlignedProfile {
        AlignedProfile {
            name: "test".to_string(),
            distance,
            elevation,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    #[test]
    fn test_identity_on_own_samples() {
        let profile = aligned(vec![-1.0, 0.0, 1.0, 2.0], vec![2.0, 0.0, 4.0, 1.0]);
        let row = resample(&profile, &profile.distance).unwrap();
        // Grid equals the sample locations, so no interpolation error
        // is tolerated.
        assert_eq!(row, profile.elevation);
    }

    #[test]
    fn test_interior_interpolation() {
        let profile = aligned(vec![0.0, 1.0, 2.0], vec![0.0, 10.0, 30.0]);
        let row = resample(&profile, &[0.5, 1.25]).unwrap();
        assert_relative_eq!(row[0], 5.0);
        assert_relative_eq!(row[1], 15.0);
    }

    #[test]
    fn test_clamps_beyond_boundaries() {
        let profile = aligned(vec![0.0, 1.0, 2.0], vec![7.0, 10.0, 3.0]);
        let row = resample(&profile, &[-100.0, -0.001, 2.001, 100.0]).unwrap();
        assert_eq!(row, vec![7.0, 7.0, 3.0, 3.0]);
    }

    #[test]
    fn test_degenerate_profile_rejected() {
        let profile = aligned(vec![4.0], vec![1.0]);
        match resample(&profile, &[0.0, 1.0]) {
            Err(ReliefError::DegenerateProfile { name }) => assert_eq!(name, "test"),
            other => panic!("expected DegenerateProfile, got {other:?}"),
        }
    }

    #[test]
    fn test_output_length_matches_grid() {
        let profile = aligned(vec![0.0, 1.0], vec![0.0, 1.0]);
        let grid: Vec<f64> = crate::math::linspace(-5.0, 5.0, 101).collect();
        let row = resample(&profile, &grid).unwrap();
        assert_eq!(row.len(), grid.len());
    }
}
