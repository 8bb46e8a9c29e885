//! Headless arena harness.
//! Usage: cargo run -p sim_harness -- --ticks 60 --left 1,1 --json

mod args;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{Arena, Config, Side};
use tracing::{debug, info};

use crate::args::Args;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Config::from_json(&raw).with_context(|| format!("loading {}", path.display()))
}

fn run(args: &Args) -> Result<Arena> {
    let config = load_config(args.config.as_deref())?;
    info!(
        width = config.viewport_width,
        height = config.viewport_height,
        radius = config.actor_radius,
        speed = config.move_speed,
        "arena configured"
    );

    let mut arena = Arena::new(config)?;
    arena.on_move(Side::Left, args.left.x, args.left.y);
    arena.on_move(Side::Right, args.right.x, args.right.y);

    for _ in 0..args.ticks {
        arena.tick();
        for side in Side::ALL {
            if arena.events.hit_wall(side) {
                debug!(frame = arena.frame.0, ?side, "actor pinned against the arena edge");
            }
        }
        if let (Some(left), Some(right)) = (arena.position(Side::Left), arena.position(Side::Right))
        {
            debug!(
                frame = arena.frame.0,
                left_x = left.x,
                left_y = left.y,
                right_x = right.x,
                right_y = right.y,
                "tick"
            );
        }
    }

    let snapshot = arena.snapshot();
    for view in &snapshot.actors {
        info!(frame = snapshot.frame, side = ?view.side, x = view.x, y = view.y, "final position");
    }
    if args.json {
        println!("{}", snapshot.to_json()?);
    }
    Ok(arena)
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    run(&args)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use tempfile::TempDir;

    fn args_with(config: Option<&Path>) -> Args {
        Args::try_parse_from(["sim_harness", "--ticks", "60", "--left", "1,1"])
            .map(|args| Args {
                config: config.map(Path::to_path_buf),
                ..args
            })
            .unwrap()
    }

    #[test]
    fn test_load_config_defaults_without_path() {
        assert_eq!(load_config(None).unwrap(), Config::default());
    }

    #[test]
    fn test_load_config_reads_overrides() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("arena.json");
        std::fs::write(&path, r#"{ "viewport_width": 400, "viewport_height": 800 }"#).unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.viewport_width, 400.0);
        assert_eq!(config.viewport_height, 800.0);
        assert_eq!(config.move_speed, 5.0);
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("slow.json");
        std::fs::write(&path, r#"{ "move_speed": 0 }"#).unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("move speed"));
        assert!(run(&args_with(Some(&path))).is_err());
    }

    #[test]
    fn test_load_config_missing_file_names_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.json");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_run_applies_vectors() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("arena.json");
        std::fs::write(&path, r#"{ "viewport_width": 400, "viewport_height": 800 }"#).unwrap();

        let arena = run(&args_with(Some(&path))).unwrap();
        assert_eq!(arena.frame.0, 60);
        assert_eq!(arena.position(Side::Left), Some(Vec2::new(375.0, 700.0)));
        assert_eq!(arena.position(Side::Right), Some(Vec2::new(300.0, 400.0)));
    }
}
