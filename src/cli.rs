use std::path::PathBuf;

use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
  #[arg(short, long, value_name = "FLOAT", help = "Tick rate, i.e. number of ticks per second", default_value_t = 10.0)]
  pub tick_rate: f64,

  #[arg(short, long, value_name = "FLOAT", help = "Frame rate, i.e. number of frames per second", default_value_t = 30.0)]
  pub frame_rate: f64,

  /// Renter records to browse (.json or .json5). Overrides `renters_file` from the config.
  #[arg(short, long, value_name = "FILE")]
  pub renters: Option<PathBuf>,

  /// Identity of the person browsing. Overrides `viewer_id` from the config.
  #[arg(short, long, value_name = "ID")]
  pub viewer: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    let cli = Cli::parse_from(["renter-board"]);

    assert_eq!(cli.tick_rate, 10.0);
    assert_eq!(cli.frame_rate, 30.0);
    assert!(cli.renters.is_none());
    assert!(cli.viewer.is_none());
  }

  #[test]
  fn test_overrides() {
    let cli = Cli::parse_from(["renter-board", "--renters", "fixtures/renters.json5", "-v", "u-42"]);

    assert_eq!(cli.renters, Some(PathBuf::from("fixtures/renters.json5")));
    assert_eq!(cli.viewer.as_deref(), Some("u-42"));
  }
}
