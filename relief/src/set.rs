use crate::{
    aggregate, math::linspace, resample, AlignedProfile, Alignment, Datum, Failure, ReliefError,
    Stats,
};
use log::debug;
use rayon::prelude::*;
use std::collections::BTreeMap;
use transect::{NameStyle, Profile, C, DEFAULT_SPACING_TOLERANCE};

/// Number of common-grid samples when none is configured.
pub const DEFAULT_GRID_SAMPLES: usize = 1000;

/// What to do when a single profile fails to parse, align, or
/// resample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Fail the whole run on the first per-profile error.
    #[default]
    Abort,

    /// Drop the failing profile, record it, and carry on with the
    /// rest. Aggregation over zero surviving profiles still fails.
    Skip,
}

/// The working collection of parsed profiles.
///
/// Profiles are keyed by display name and always iterated in
/// lexicographic name order, so every derived row and statistic is
/// reproducible regardless of ingestion order.
#[derive(Debug, Clone, Default)]
pub struct ProfileSet {
    profiles: BTreeMap<String, Profile>,
}

impl ProfileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses every `(file name, bytes)` pair into a set.
    ///
    /// Under [`ErrorPolicy::Abort`] the first parse failure ends the
    /// ingest; under [`ErrorPolicy::Skip`] failures are returned
    /// alongside the set and the offending files are left out.
    pub fn ingest<I, B>(
        files: I,
        style: NameStyle,
        policy: ErrorPolicy,
    ) -> Result<(Self, Vec<Failure>), ReliefError>
    where
        I: IntoIterator<Item = (String, B)>,
        B: AsRef<[u8]>,
    {
        let mut set = Self::new();
        let mut failures = Vec::new();
        for (file_name, raw) in files {
            match Profile::from_tsv(&file_name, raw.as_ref(), style) {
                Ok(profile) => {
                    set.insert(profile);
                }
                Err(e) => match policy {
                    ErrorPolicy::Abort => return Err(e.into()),
                    ErrorPolicy::Skip => failures.push(Failure {
                        name: file_name,
                        error: e.into(),
                    }),
                },
            }
        }
        Ok((set, failures))
    }

    /// Adds `profile`, replacing any existing profile with the same
    /// name.
    pub fn insert(&mut self, profile: Profile) {
        self.profiles.insert(profile.name.clone(), profile);
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Profiles in lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.values()
    }
}

/// One complete pipeline run over a [`ProfileSet`].
///
/// An `Analysis` is a pure function of the set and the configuration
/// it was built with; rebuild after changing either. Rows of
/// `resampled`, entries of `aligned`, and the statistics all follow
/// the set's lexicographic name order.
#[derive(Debug)]
pub struct Analysis {
    /// The shared distance axis.
    pub grid: Vec<C>,

    /// Aligned profiles, sorted by name.
    pub aligned: Vec<AlignedProfile>,

    /// One row per entry of `aligned`, one column per grid point.
    pub resampled: Vec<Vec<C>>,

    /// Per-column mean/std/ptp across the rows.
    pub stats: Stats,

    /// Profiles dropped under [`ErrorPolicy::Skip`], with the error
    /// that removed each one.
    pub failures: Vec<Failure>,
}

impl Analysis {
    pub fn builder() -> AnalysisBuilder {
        AnalysisBuilder::default()
    }
}

/// Configuration for one analysis run. Grid bounds are required;
/// everything else has a default.
#[derive(Debug, Clone)]
pub struct AnalysisBuilder {
    span: Option<(C, C)>,
    samples: usize,
    alignment: Alignment,
    spacing_tolerance: C,
    on_error: ErrorPolicy,
}

impl Default for AnalysisBuilder {
    fn default() -> Self {
        Self {
            span: None,
            samples: DEFAULT_GRID_SAMPLES,
            alignment: Alignment::None {
                datum: Datum::MinElevation,
            },
            spacing_tolerance: DEFAULT_SPACING_TOLERANCE,
            on_error: ErrorPolicy::default(),
        }
    }
}

impl AnalysisBuilder {
    /// Grid bounds `[x_min, x_max]`.
    pub fn span(mut self, x_min: C, x_max: C) -> Self {
        self.span = Some((x_min, x_max));
        self
    }

    /// Number of grid samples across the span.
    pub fn samples(mut self, n: usize) -> Self {
        self.samples = n;
        self
    }

    /// Alignment strategy applied to every profile.
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Absolute tolerance for the uniform-spacing check.
    pub fn spacing_tolerance(mut self, tolerance: C) -> Self {
        self.spacing_tolerance = tolerance;
        self
    }

    /// Per-profile failure handling.
    pub fn on_error(mut self, policy: ErrorPolicy) -> Self {
        self.on_error = policy;
        self
    }

    /// Runs align → resample → aggregate over `set`.
    pub fn build(&self, set: &ProfileSet) -> Result<Analysis, ReliefError> {
        let Some((x_min, x_max)) = self.span else {
            return Err(ReliefError::Builder);
        };
        if self.samples < 2 || !(x_min < x_max) {
            return Err(ReliefError::Builder);
        }

        let grid: Vec<C> = linspace(x_min, x_max, self.samples).collect();

        let now = std::time::Instant::now();

        // Each profile aligns and resamples independently; the
        // indexed collect keeps rows in the set's sorted order no
        // matter how the work is scheduled.
        let profiles: Vec<&Profile> = set.iter().collect();
        let outcomes: Vec<(String, Result<(AlignedProfile, Vec<C>), ReliefError>)> = profiles
            .into_par_iter()
            .map(|profile| {
                let outcome = self
                    .alignment
                    .align(profile, self.spacing_tolerance)
                    .and_then(|aligned| resample(&aligned, &grid).map(|row| (aligned, row)));
                (profile.name.clone(), outcome)
            })
            .collect();

        let mut aligned = Vec::with_capacity(outcomes.len());
        let mut resampled = Vec::with_capacity(outcomes.len());
        let mut failures = Vec::new();
        for (name, outcome) in outcomes {
            match outcome {
                Ok((profile, row)) => {
                    aligned.push(profile);
                    resampled.push(row);
                }
                Err(error) => match self.on_error {
                    ErrorPolicy::Abort => return Err(error),
                    ErrorPolicy::Skip => failures.push(Failure { name, error }),
                },
            }
        }

        let stats = aggregate(&resampled)?;

        debug!(
            "analysis; profiles: {}, dropped: {}, grid: {}, exec: {:?}",
            aligned.len(),
            failures.len(),
            grid.len(),
            now.elapsed()
        );

        Ok(Analysis {
            grid,
            aligned,
            resampled,
            stats,
            failures,
        })
    }
}
