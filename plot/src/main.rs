mod options;

use anyhow::{anyhow, Error as AnyError};
use clap::Parser;
use log::debug;
use options::{Cli, Command as CliCmd};
use relief::{waterfall, Analysis, ErrorPolicy, ProfileSet};
use serde::Serialize;
use std::{ffi::OsStr, fs, io::Write, path::Path};
use textplots::{Chart, Plot, Shape};
use transect::{NameStyle, C};

fn main() -> Result<(), AnyError> {
    env_logger::init();
    let cli = Cli::parse();

    let files = read_profile_dir(&cli.profile_dir)?;
    if files.is_empty() {
        return Err(anyhow!(
            "no .txt profiles in {}",
            cli.profile_dir.display()
        ));
    }
    debug!("ingesting {} profile files", files.len());

    let style = if cli.strip_prefix {
        NameStyle::StripPrefix
    } else {
        NameStyle::Plain
    };
    let policy = if cli.keep_going {
        ErrorPolicy::Skip
    } else {
        ErrorPolicy::Abort
    };

    let (set, ingest_failures) = ProfileSet::ingest(files, style, policy)?;

    let analysis = Analysis::builder()
        .span(cli.x_min, cli.x_max)
        .samples(cli.samples)
        .alignment(cli.align.to_alignment(cli.datum))
        .spacing_tolerance(cli.spacing_tolerance)
        .on_error(policy)
        .build(&set)?;

    for failure in ingest_failures.iter().chain(&analysis.failures) {
        eprintln!("skipped {}: {}", failure.name, failure.error);
    }

    match cli.cmd {
        CliCmd::Display => display(&analysis),
        CliCmd::Json => json(&analysis),
        CliCmd::Waterfall { increment } => waterfall_rows(&set, increment),
    }
}

/// Returns `(file name, bytes)` for every `.txt` file in `dir`,
/// sorted by file name.
fn read_profile_dir(dir: &Path) -> Result<Vec<(String, Vec<u8>)>, AnyError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if Some("txt") != path.extension().and_then(OsStr::to_str) {
            continue;
        }
        let Some(name) = path.file_name().and_then(OsStr::to_str) else {
            continue;
        };
        files.push((name.to_string(), fs::read(&path)?));
    }
    files.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(files)
}

#[allow(clippy::cast_possible_truncation)]
fn display(analysis: &Analysis) -> Result<(), AnyError> {
    let points: Vec<(f32, f32)> = analysis
        .grid
        .iter()
        .zip(&analysis.stats.mean)
        .map(|(&x, &y)| (x as f32, y as f32))
        .collect();
    Chart::new(
        300,
        150,
        analysis.grid[0] as f32,
        analysis.grid[analysis.grid.len() - 1] as f32,
    )
    .lineplot(&Shape::Lines(&points))
    .display();
    Ok(())
}

fn json(analysis: &Analysis) -> Result<(), AnyError> {
    #[derive(Serialize)]
    struct JsonAnalysis<'a> {
        profiles: Vec<&'a str>,
        grid: &'a [C],
        mean: &'a [C],
        std: &'a [C],
        ptp: &'a [C],
    }

    let reshaped = JsonAnalysis {
        profiles: analysis
            .aligned
            .iter()
            .map(|aligned| aligned.name.as_str())
            .collect(),
        grid: &analysis.grid,
        mean: &analysis.stats.mean,
        std: &analysis.stats.std,
        ptp: &analysis.stats.ptp,
    };
    let json = serde_json::to_string(&reshaped)?;
    println!("{json}");
    Ok(())
}

fn waterfall_rows(set: &ProfileSet, increment: C) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    for ((name, stacked), profile) in waterfall(set, 0.0, increment).iter().zip(set.iter()) {
        for (x, y) in profile.distance.iter().zip(stacked) {
            writeln!(stdout, "{name}\t{x}\t{y}")?;
        }
    }
    Ok(())
}
