//! Command-line flags shared by the game and the simulator.

use anyhow::{anyhow, Context, Result};

use crate::core::GameConfig;

/// Default number of ticks the simulator runs before giving up
pub const DEFAULT_SIM_TICKS: u32 = 100_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub config: GameConfig,
    /// Fixed RNG seed; `None` means seed from the clock
    pub seed: Option<u32>,
    /// Tick budget for headless runs
    pub ticks: u32,
    pub help: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            seed: None,
            ticks: DEFAULT_SIM_TICKS,
            help: false,
        }
    }
}

pub const USAGE: &str = "\
options:
  --seed N          fixed RNG seed
  --tick-ms N       milliseconds between gravity ticks (default 500)
  --block-size N    block size in pixels (default 20)
  --canvas WxH      canvas size in pixels (default 200x400)
  --ticks N         tick budget for the simulator (default 100000)
  -h, --help        show this help";

/// Parse flags (without the program name) and validate the resulting config.
pub fn parse_args(args: &[String]) -> Result<CliOptions> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .ok_or_else(|| anyhow!("missing value for {}", flag))
        };

        match arg.as_str() {
            "--seed" => options.seed = Some(parse_num(value("--seed")?, "--seed")?),
            "--tick-ms" => options.config.tick_ms = parse_num(value("--tick-ms")?, "--tick-ms")?,
            "--block-size" => {
                options.config.block_size_px = parse_num(value("--block-size")?, "--block-size")?
            }
            "--canvas" => {
                let (w, h) = parse_canvas(value("--canvas")?)?;
                options.config.canvas_width_px = w;
                options.config.canvas_height_px = h;
            }
            "--ticks" => options.ticks = parse_num(value("--ticks")?, "--ticks")?,
            "-h" | "--help" => options.help = true,
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
    }

    options
        .config
        .validate()
        .context("invalid board configuration")?;
    Ok(options)
}

fn parse_num<T: std::str::FromStr>(raw: &str, flag: &str) -> Result<T> {
    raw.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, raw))
}

fn parse_canvas(raw: &str) -> Result<(u16, u16)> {
    let (w, h) = raw
        .split_once(['x', 'X'])
        .ok_or_else(|| anyhow!("invalid --canvas value (expected WxH): {}", raw))?;
    Ok((parse_num(w, "--canvas")?, parse_num(h, "--canvas")?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let options = parse_args(&[]).unwrap();
        assert_eq!(options, CliOptions::default());
        assert_eq!(options.config.columns(), 10);
    }

    #[test]
    fn test_all_flags() {
        let options = parse_args(&args(&[
            "--seed", "42", "--tick-ms", "250", "--block-size", "10", "--canvas", "120x300",
            "--ticks", "99",
        ]))
        .unwrap();

        assert_eq!(options.seed, Some(42));
        assert_eq!(options.config.tick_ms, 250);
        assert_eq!(options.config.columns(), 12);
        assert_eq!(options.config.rows(), 30);
        assert_eq!(options.ticks, 99);
    }

    #[test]
    fn test_missing_value() {
        let err = parse_args(&args(&["--seed"])).unwrap_err();
        assert_eq!(err.to_string(), "missing value for --seed");
    }

    #[test]
    fn test_bad_number() {
        let err = parse_args(&args(&["--tick-ms", "fast"])).unwrap_err();
        assert_eq!(err.to_string(), "invalid --tick-ms value: fast");
    }

    #[test]
    fn test_unknown_flag() {
        assert!(parse_args(&args(&["--hold"])).is_err());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = parse_args(&args(&["--canvas", "210x400"])).unwrap_err();
        assert_eq!(err.to_string(), "invalid board configuration");
    }

    #[test]
    fn test_bad_canvas_format() {
        assert!(parse_args(&args(&["--canvas", "200"])).is_err());
    }
}
