use std::path::PathBuf;

use clap::Parser;
use glam::Vec2;

/// Drive the joystick arena headlessly and report where the actors end up
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// JSON config overriding the default tuning
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 60)]
    pub ticks: u64,

    /// Left joystick vector as "x,y"
    #[arg(long, value_name = "X,Y", default_value = "0,0", value_parser = parse_vector, allow_hyphen_values = true)]
    pub left: Vec2,

    /// Right joystick vector as "x,y"
    #[arg(long, value_name = "X,Y", default_value = "0,0", value_parser = parse_vector, allow_hyphen_values = true)]
    pub right: Vec2,

    /// Print the final snapshot as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// Parse "x,y" into a joystick vector
fn parse_vector(raw: &str) -> Result<Vec2, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {raw:?}"))?;
    let x: f32 = x
        .trim()
        .parse()
        .map_err(|e| format!("invalid x in {raw:?}: {e}"))?;
    let y: f32 = y
        .trim()
        .parse()
        .map_err(|e| format!("invalid y in {raw:?}: {e}"))?;
    Ok(Vec2::new(x, y))
}
