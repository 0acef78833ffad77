use clap::{Parser, Subcommand, ValueEnum};
use relief::{Alignment, Datum};
use std::path::PathBuf;
use transect::C;

/// A tool for aligning and comparing topographic transect profiles.
#[derive(Parser, Debug)]
pub struct Cli {
    /// Directory containing tab-separated profile (.txt) files.
    #[arg(short, long)]
    pub profile_dir: PathBuf,

    /// Left edge of the common distance grid.
    #[arg(long, allow_negative_numbers = true)]
    pub x_min: C,

    /// Right edge of the common distance grid.
    #[arg(long, allow_negative_numbers = true)]
    pub x_max: C,

    /// Number of common grid samples.
    #[arg(long, default_value_t = relief::DEFAULT_GRID_SAMPLES)]
    pub samples: usize,

    /// Alignment strategy applied to every profile.
    #[arg(long, value_enum, default_value = "min-elevation")]
    pub align: Align,

    /// Vertical handling when no alignment is selected.
    #[arg(long, value_enum, default_value = "min")]
    pub datum: VerticalDatum,

    /// Absolute tolerance for the uniform-spacing check.
    #[arg(long, default_value_t = transect::DEFAULT_SPACING_TOLERANCE)]
    pub spacing_tolerance: C,

    /// Drop failing profiles (reporting them on stderr) instead of
    /// aborting the run.
    #[arg(long)]
    pub keep_going: bool,

    /// Strip a leading "Profile_" token from display names.
    #[arg(long)]
    pub strip_prefix: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Align {
    /// No horizontal shift.
    None,

    /// Anchor each profile's lowest elevation at distance zero.
    MinElevation,

    /// Anchor the steepest descending slope.
    MinSlope,

    /// Anchor the steepest ascending slope.
    MaxSlope,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum VerticalDatum {
    /// Leave elevations as measured.
    Zero,

    /// Rebase each profile's lowest point to zero.
    Min,
}

impl Align {
    pub fn to_alignment(self, datum: VerticalDatum) -> Alignment {
        match self {
            Self::None => Alignment::None {
                datum: match datum {
                    VerticalDatum::Zero => Datum::Zero,
                    VerticalDatum::Min => Datum::MinElevation,
                },
            },
            Self::MinElevation => Alignment::MinElevation,
            Self::MinSlope => Alignment::MinSlope,
            Self::MaxSlope => Alignment::MaxSlope,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Draw the mean profile as a terminal chart.
    Display,

    /// Print the grid, statistics, and profile names as JSON.
    Json,

    /// Print stacked profiles for a waterfall display, one
    /// name/distance/elevation triple per line.
    Waterfall {
        /// Vertical gap between consecutive profiles.
        #[arg(long, default_value_t = 500.0)]
        increment: C,
    },
}
