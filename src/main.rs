use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use arc_progress::{ArcCalculator, ArcConfig, ProgressUnit};
use log::{info, warn};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
enum ArgsError {
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: String, value: String },
    #[error("unknown argument {0:?}")]
    Unknown(String),
}

/// Command line settings, applied on top of the config file (if any)
#[derive(Debug, Default, PartialEq)]
struct Args {
    config_path: Option<String>,
    original_angle: Option<i32>,
    inner_start_angle: Option<i32>,
    inner_end_angle: Option<i32>,
    clockwise: bool,
    line_gap: Option<f64>,
    line_width: Option<i32>,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => parsed.config_path = Some(value_for(&arg, &mut args)?),
                "--original-angle" => parsed.original_angle = Some(parse_value(&arg, &mut args)?),
                "--start" => parsed.inner_start_angle = Some(parse_value(&arg, &mut args)?),
                "--end" => parsed.inner_end_angle = Some(parse_value(&arg, &mut args)?),
                "--line-gap" => parsed.line_gap = Some(parse_value(&arg, &mut args)?),
                "--line-width" => parsed.line_width = Some(parse_value(&arg, &mut args)?),
                "--clockwise" => parsed.clockwise = true,
                _ => return Err(ArgsError::Unknown(arg)),
            }
        }
        Ok(parsed)
    }

    fn apply(&self, mut config: ArcConfig) -> ArcConfig {
        if let Some(angle) = self.original_angle {
            config.original_angle = angle;
        }
        if let Some(angle) = self.inner_start_angle {
            config.inner_start_angle = angle;
        }
        if let Some(angle) = self.inner_end_angle {
            config.inner_end_angle = angle;
        }
        if let Some(gap) = self.line_gap {
            config.line_gap = gap;
        }
        if let Some(width) = self.line_width {
            config.line_width = width;
        }
        config.clockwise |= self.clockwise;
        config
    }
}

fn value_for(flag: &str, args: &mut impl Iterator<Item = String>) -> Result<String, ArgsError> {
    args.next()
        .ok_or_else(|| ArgsError::MissingValue(flag.to_string()))
}

fn parse_value<T: FromStr>(
    flag: &str,
    args: &mut impl Iterator<Item = String>,
) -> Result<T, ArgsError> {
    let value = value_for(flag, args)?;
    value.parse().map_err(|_| ArgsError::InvalidValue {
        flag: flag.to_string(),
        value,
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse(env::args().skip(1))?;
    let base = match &args.config_path {
        Some(path) => ArcConfig::load(path)?,
        None => ArcConfig::builder().line_gap(0.0).build(),
    };
    let config = args.apply(base);

    info!(
        "active ring {:?}, strokes {:?}",
        config.active_ring(),
        config.ring_strokes()
    );
    let calculator = ArcCalculator::with_config(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<ProgressUnit>() {
            Ok(unit) => {
                let angles = calculator.angle_for_progress(unit);
                writeln!(
                    out,
                    "{unit} start={} end={} sector={}",
                    angles.start, angles.end, angles.sector_correction
                )?;
            }
            Err(err) => warn!("skipping {line:?}: {err}"),
        }
    }
    Ok(())
}
