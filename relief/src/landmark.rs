use crate::{math, ReliefError};
use transect::{Profile, Spacing, C};

/// Notable points on one profile, each as a `(distance, elevation)`
/// pair in the profile's own unshifted axes.
///
/// These are the annotation points a stacked display marks on each
/// trace; the slope landmark also previews where max-slope alignment
/// would anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmarks {
    /// Lowest elevation sample.
    pub min_elevation: (C, C),

    /// Highest elevation sample.
    pub max_elevation: (C, C),

    /// Steepest ascending slope.
    pub max_slope: (C, C),
}

impl Landmarks {
    /// Extracts landmarks from `profile`.
    ///
    /// The slope landmark needs a gradient, so irregular spacing
    /// beyond `tolerance` is an error here just as it is for
    /// slope-based alignment.
    pub fn of(profile: &Profile, tolerance: C) -> Result<Self, ReliefError> {
        let spacing = match profile.spacing(tolerance) {
            Spacing::Uniform(spacing) => spacing,
            Spacing::NonUniform { max_deviation } => {
                return Err(ReliefError::IrregularSpacing {
                    name: profile.name.clone(),
                    max_deviation,
                })
            }
        };
        let grad = math::gradient(&profile.elevation, spacing);

        let at = |idx: usize| (profile.distance[idx], profile.elevation[idx]);
        Ok(Self {
            min_elevation: at(math::argmin(&profile.elevation)),
            max_elevation: at(math::argmax(&profile.elevation)),
            max_slope: at(math::argmax(&grad)),
        })
    }
}
