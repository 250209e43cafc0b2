// Imports
use crate::{drag, hit, inspect, thicken};
use anyhow::Context;
use clap::Parser;
use pcbview_compose::{CapStyle, JoinStyle};
use pcbview_engine::{RegistryConfig, Scene};
use std::path::{Path, PathBuf};

///    pcbview-cli{n}{n}
///    This program is free software; you can redistribute it{n}
///    and/or modify it under the terms of the GPL v3 or (at your option){n}
///    any later version.
#[derive(clap::Parser, Debug, Clone)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
    /// A json file with the registry config. Missing fields take their default values.
    #[arg(short = 'c', long, global = true)]
    pub(crate) config: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub(crate) enum Command {
    /// Prints the shapes of the demo scene.
    Scene,
    /// Prints the shape at the given position.
    Hit {
        /// X-position.
        #[arg(allow_negative_numbers = true)]
        x: f64,
        /// Y-position.
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// Presses the pointer at "--from", moves it to "--to" and releases it.
    Drag {
        /// The position where the pointer is pressed.
        #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
        from: Vec<f64>,
        /// The position where the pointer is released.
        #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
        to: Vec<f64>,
        /// The number of pointer events between the two positions.
        #[arg(long, default_value_t = 1)]
        steps: u32,
    },
    /// Thickens the path of a shape into a new strip and prints its vertex count.
    Thicken {
        /// The id of the shape.
        shape: u32,
        /// Half of the strip width.
        #[arg(short = 'r', long, default_value_t = 10.0)]
        radius: f64,
        #[arg(long, default_value_t = Default::default())]
        cap: CapStyle,
        #[arg(long, default_value_t = Default::default())]
        join: JoinStyle,
        /// The number of segments for a full circle.
        #[arg(long, default_value_t = 16)]
        resolution: u32,
    },
}

pub(crate) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(config_file) => load_config(config_file)?,
        None => RegistryConfig::default(),
    };
    let mut scene = Scene::demo(config).context("Building the demo scene failed.")?;

    match cli.command {
        Command::Scene => {
            inspect::run_inspect(&scene)?;
        }
        Command::Hit { x, y } => {
            hit::run_hit(&mut scene, na::vector![x, y]);
        }
        Command::Drag { from, to, steps } => {
            drag::run_drag(&mut scene, to_position(&from)?, to_position(&to)?, steps)?;
        }
        Command::Thicken {
            shape,
            radius,
            cap,
            join,
            resolution,
        } => {
            thicken::run_thicken(&mut scene, shape, radius, cap, join, resolution)?;
        }
    }

    Ok(())
}

pub(crate) fn load_config(config_file: impl AsRef<Path>) -> anyhow::Result<RegistryConfig> {
    let bytes = std::fs::read(config_file.as_ref()).with_context(|| {
        format!(
            "Failed to read config file \"{}\".",
            config_file.as_ref().display()
        )
    })?;
    let config = serde_json::from_slice::<RegistryConfig>(&bytes).with_context(|| {
        format!(
            "Failed to parse config file \"{}\".",
            config_file.as_ref().display()
        )
    })?;
    tracing::debug!(?config, "Loaded config");
    Ok(config)
}

fn to_position(values: &[f64]) -> anyhow::Result<na::Vector2<f64>> {
    match values {
        [x, y] => Ok(na::vector![*x, *y]),
        _ => Err(anyhow::anyhow!(
            "expected a position as two values, got {}",
            values.len()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_drag() {
        let cli = Cli::try_parse_from([
            "pcbview-cli",
            "drag",
            "--from",
            "125",
            "300",
            "--to",
            "125",
            "-40",
        ])
        .unwrap();

        match cli.command {
            Command::Drag { from, to, steps } => {
                assert_eq!(to_position(&from).unwrap(), na::vector![125.0, 300.0]);
                assert_eq!(to_position(&to).unwrap(), na::vector![125.0, -40.0]);
                assert_eq!(steps, 1);
            }
            other => panic!("parsed wrong command {other:?}"),
        }
    }

    #[test]
    fn parse_thicken_defaults() {
        let cli = Cli::try_parse_from(["pcbview-cli", "thicken", "3", "--cap", "butt"]).unwrap();

        match cli.command {
            Command::Thicken {
                shape, cap, join, ..
            } => {
                assert_eq!(shape, 3);
                assert_eq!(cap, CapStyle::Butt);
                assert_eq!(join, JoinStyle::Round);
            }
            other => panic!("parsed wrong command {other:?}"),
        }
    }

    #[test]
    fn position_needs_two_values() {
        assert!(to_position(&[1.0]).is_err());
    }
}
