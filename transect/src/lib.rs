//! Topographic transect profile (`.txt`) file format.
//!
//! A profile file is plain text: one header line naming two
//! tab-separated columns (conventionally `x` and `y`), followed by one
//! data row per sample. The first column is distance along the
//! transect and must be strictly increasing; the second is elevation
//! at that distance. Each file holds exactly one profile, and the
//! profile's display name is derived from the file name.

mod error;

pub use crate::error::TransectError;
use itertools::Itertools;
use std::str;

/// Base floating point type used for all samples and calculations.
///
/// Note: this _could_ be a generic parameter, but transects are short
/// (hundreds to a few thousand samples) and nothing downstream
/// measures a difference between `f32` and `f64`, so the wider type
/// wins.
pub type C = f64;

/// Default absolute tolerance when deciding whether a profile's
/// sample spacing is uniform.
pub const DEFAULT_SPACING_TOLERANCE: C = 1e-6;

/// One measured elevation-vs-distance transect.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Display name derived from the source file name.
    pub name: String,

    /// Distance along the transect, strictly increasing.
    pub distance: Vec<C>,

    /// Elevation at each distance sample.
    pub elevation: Vec<C>,
}

impl Profile {
    /// Parses a profile from raw tab-separated bytes.
    ///
    /// `file_name` identifies the source in errors and, reformatted
    /// with `style`, becomes the profile's display name.
    pub fn from_tsv(file_name: &str, raw: &[u8], style: NameStyle) -> Result<Self, TransectError> {
        let mk_err = || file_name.to_owned();
        let text = str::from_utf8(raw).map_err(|_| TransectError::NotText { name: mk_err() })?;

        let mut lines = text.lines().enumerate();

        // Header row. Only the field count matters; the names are
        // conventionally `x` and `y` but are not checked.
        match lines.next() {
            Some((_, header)) => {
                let fields = header.split('\t').count();
                if fields != 2 {
                    return Err(TransectError::ColumnCount {
                        name: mk_err(),
                        line: 1,
                        found: fields,
                    });
                }
            }
            None => return Err(TransectError::TooFewRows { name: mk_err() }),
        }

        let mut distance = Vec::new();
        let mut elevation = Vec::new();

        for (idx, row) in lines {
            if row.trim().is_empty() {
                continue;
            }
            let line = idx + 1;
            let mut fields = row.split('\t');
            let (Some(x), Some(y), None) = (fields.next(), fields.next(), fields.next()) else {
                return Err(TransectError::ColumnCount {
                    name: mk_err(),
                    line,
                    found: row.split('\t').count(),
                });
            };
            distance.push(parse_field(x, file_name, line)?);
            elevation.push(parse_field(y, file_name, line)?);
        }

        if distance.len() < 2 {
            return Err(TransectError::TooFewRows { name: mk_err() });
        }

        if let Some(row) = distance
            .iter()
            .tuple_windows()
            .position(|(a, b)| b <= a)
            .map(|at| at + 1)
        {
            return Err(TransectError::NonMonotonicDistance {
                name: mk_err(),
                row,
            });
        }

        Ok(Self {
            name: style.format(file_name),
            distance,
            elevation,
        })
    }

    /// Returns the number of samples in this profile.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.distance.len()
    }

    /// Returns the lowest elevation sample.
    pub fn min_elevation(&self) -> C {
        self.elevation.iter().copied().fold(C::INFINITY, C::min)
    }

    /// Reports whether `distance` is evenly spaced, comparing every
    /// gap to the first within an absolute `tolerance`.
    ///
    /// Advisory on its own. Slope-based alignment refuses profiles
    /// that report [`Spacing::NonUniform`].
    pub fn spacing(&self, tolerance: C) -> Spacing {
        let first = self.distance[1] - self.distance[0];
        let max_deviation = self
            .distance
            .iter()
            .tuple_windows()
            .map(|(a, b)| ((b - a) - first).abs())
            .fold(0.0, C::max);
        if max_deviation <= tolerance {
            Spacing::Uniform(first)
        } else {
            Spacing::NonUniform { max_deviation }
        }
    }
}

fn parse_field(field: &str, name: &str, line: usize) -> Result<C, TransectError> {
    let field = field.trim();
    field.parse().map_err(|_| TransectError::BadNumber {
        name: name.to_owned(),
        line,
        value: field.to_owned(),
    })
}

/// Outcome of the uniform-spacing check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Spacing {
    /// All sample gaps match the first gap within tolerance; carries
    /// that gap.
    Uniform(C),

    /// At least one gap deviates from the first beyond tolerance;
    /// carries the worst deviation.
    NonUniform { max_deviation: C },
}

/// How to derive a profile's display name from its file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameStyle {
    /// Strip a `.txt` extension and replace underscores with spaces.
    #[default]
    Plain,

    /// Like [`NameStyle::Plain`], but first drop a leading
    /// `Profile_` token.
    StripPrefix,
}

impl NameStyle {
    pub fn format(&self, file_name: &str) -> String {
        let stem = file_name.strip_suffix(".txt").unwrap_or(file_name);
        let stem = match self {
            Self::Plain => stem,
            Self::StripPrefix => stem.strip_prefix("Profile_").unwrap_or(stem),
        };
        stem.replace('_', " ")
    }
}
