use crate::{math, ReliefError};
use transect::{Profile, Spacing, C};

/// Vertical datum policy for [`Alignment::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Datum {
    /// Leave elevations as measured.
    Zero,

    /// Rebase so the profile's lowest point sits at zero.
    MinElevation,
}

/// How to pick each profile's reference point before resampling.
///
/// One strategy is selected per analysis run and applied to every
/// profile in the set. The shifted profile puts the reference sample
/// at distance zero and, for every variant except
/// `None { datum: Zero }`, the lowest elevation at exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// No horizontal shift; vertical handling per [`Datum`].
    None { datum: Datum },

    /// Anchor the lowest elevation sample.
    MinElevation,

    /// Anchor the steepest descending slope, typically the base of a
    /// rising feature on the left side. Requires uniform sample
    /// spacing.
    MinSlope,

    /// Anchor the steepest ascending slope, typically a feature edge
    /// on the right side. Requires uniform sample spacing.
    MaxSlope,
}

/// A profile with one strategy's offsets applied.
///
/// Derived from a [`Profile`] for the duration of one analysis run;
/// not persisted independently.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedProfile {
    /// Display name carried over from the source profile.
    pub name: String,

    /// `distance - offset_x`, still strictly increasing.
    pub distance: Vec<C>,

    /// `elevation - offset_y`.
    pub elevation: Vec<C>,

    /// Horizontal shift that was applied.
    pub offset_x: C,

    /// Vertical shift that was applied.
    pub offset_y: C,
}

impl Alignment {
    /// Shifts `profile` by this strategy's offsets.
    pub fn align(
        &self,
        profile: &Profile,
        spacing_tolerance: C,
    ) -> Result<AlignedProfile, ReliefError> {
        let (offset_x, offset_y) = self.offsets(profile, spacing_tolerance)?;
        Ok(AlignedProfile {
            name: profile.name.clone(),
            distance: profile.distance.iter().map(|x| x - offset_x).collect(),
            elevation: profile.elevation.iter().map(|y| y - offset_y).collect(),
            offset_x,
            offset_y,
        })
    }

    /// Computes `(offset_x, offset_y)` for `profile` without shifting
    /// it. Ties in argmin/argmax resolve to the first occurrence.
    pub fn offsets(&self, profile: &Profile, spacing_tolerance: C) -> Result<(C, C), ReliefError> {
        match self {
            Self::None { datum: Datum::Zero } => Ok((0.0, 0.0)),
            Self::None {
                datum: Datum::MinElevation,
            } => Ok((0.0, profile.min_elevation())),
            Self::MinElevation => {
                let at = math::argmin(&profile.elevation);
                Ok((profile.distance[at], profile.elevation[at]))
            }
            Self::MinSlope | Self::MaxSlope => {
                let spacing = match profile.spacing(spacing_tolerance) {
                    Spacing::Uniform(spacing) => spacing,
                    Spacing::NonUniform { max_deviation } => {
                        return Err(ReliefError::IrregularSpacing {
                            name: profile.name.clone(),
                            max_deviation,
                        })
                    }
                };
                let grad = math::gradient(&profile.elevation, spacing);
                let at = match self {
                    Self::MinSlope => math::argmin(&grad),
                    _ => math::argmax(&grad),
                };
                Ok((profile.distance[at], profile.min_elevation()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AlignedProfile, Alignment, Datum, Profile};
    use crate::ReliefError;
    use transect::DEFAULT_SPACING_TOLERANCE;

    fn ridge() -> Profile {
        Profile {
            name: "ridge".to_string(),
            distance: vec![0.0, 1.0, 2.0, 3.0],
            elevation: vec![10.0, 8.0, 12.0, 9.0],
        }
    }

    fn align(strategy: Alignment) -> AlignedProfile {
        strategy.align(&ridge(), DEFAULT_SPACING_TOLERANCE).unwrap()
    }

    #[test]
    fn test_min_elevation() {
        let aligned = align(Alignment::MinElevation);
        assert_eq!((aligned.offset_x, aligned.offset_y), (1.0, 8.0));
        assert_eq!(aligned.distance, vec![-1.0, 0.0, 1.0, 2.0]);
        assert_eq!(aligned.elevation, vec![2.0, 0.0, 4.0, 1.0]);
    }

    #[test]
    fn test_min_elevation_reference_sits_at_origin() {
        let aligned = align(Alignment::MinElevation);
        // Reference sample at distance zero, minimum at exactly zero.
        assert_eq!(aligned.distance[1], 0.0);
        assert_eq!(aligned.elevation.iter().copied().fold(f64::INFINITY, f64::min), 0.0);
    }

    #[test]
    fn test_min_elevation_tie_breaks_first() {
        let profile = Profile {
            name: "flat floor".to_string(),
            distance: vec![0.0, 1.0, 2.0, 3.0],
            elevation: vec![5.0, 3.0, 3.0, 4.0],
        };
        let (offset_x, _) = Alignment::MinElevation
            .offsets(&profile, DEFAULT_SPACING_TOLERANCE)
            .unwrap();
        assert_eq!(offset_x, 1.0);
    }

    #[test]
    fn test_none_zero_datum_is_identity() {
        let aligned = align(Alignment::None { datum: Datum::Zero });
        assert_eq!(aligned.distance, ridge().distance);
        assert_eq!(aligned.elevation, ridge().elevation);
    }

    #[test]
    fn test_none_min_datum_rebases_only_vertically() {
        let aligned = align(Alignment::None {
            datum: Datum::MinElevation,
        });
        assert_eq!(aligned.distance, ridge().distance);
        assert_eq!(aligned.elevation, vec![2.0, 0.0, 4.0, 1.0]);
    }

    #[test]
    fn test_slope_anchors() {
        // gradient of [10, 8, 12, 9] at unit spacing is
        // [-2, 1, 0.5, -3]: steepest descent at index 3, steepest
        // ascent at index 1.
        let (min_x, min_y) = Alignment::MinSlope
            .offsets(&ridge(), DEFAULT_SPACING_TOLERANCE)
            .unwrap();
        assert_eq!((min_x, min_y), (3.0, 8.0));

        let (max_x, max_y) = Alignment::MaxSlope
            .offsets(&ridge(), DEFAULT_SPACING_TOLERANCE)
            .unwrap();
        assert_eq!((max_x, max_y), (1.0, 8.0));
    }

    #[test]
    fn test_slope_refuses_irregular_spacing() {
        let profile = Profile {
            name: "ragged".to_string(),
            distance: vec![0.0, 1.0, 3.0, 4.0],
            elevation: vec![10.0, 8.0, 12.0, 9.0],
        };
        match Alignment::MaxSlope.align(&profile, DEFAULT_SPACING_TOLERANCE) {
            Err(ReliefError::IrregularSpacing { name, max_deviation }) => {
                assert_eq!(name, "ragged");
                assert_eq!(max_deviation, 1.0);
            }
            other => panic!("expected IrregularSpacing, got {other:?}"),
        }
    }
}
