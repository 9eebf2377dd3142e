use anyhow::Context;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use rastergrid::compare::{self, Comparison};
use rastergrid::config::Config;
use rastergrid::draw::Point;
use rastergrid::draw::raster::MAX_RADIUS;
use rastergrid::script::EventScript;

#[derive(Parser, Debug)]
#[command(name = "rastergrid")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("RASTERGRID_GIT_HASH"), ")"),
    about = "Interactive comparison of classic grid rasterization algorithms"
)]
struct Cli {
    /// Replay an input event script and render the final frame
    #[arg(long, short = 'r', value_name = "SCRIPT")]
    replay: Option<PathBuf>,

    /// PNG file for the replayed frame
    #[arg(long, short = 'o', value_name = "PNG", default_value = "rastergrid.png")]
    output: PathBuf,

    /// Pace replay frames at the configured frame rate
    #[arg(long, action = ArgAction::SetTrue, requires = "replay")]
    realtime: bool,

    /// Compare the line algorithms on one segment
    #[arg(long, value_name = "X0,Y0,X1,Y1", value_parser = parse_segment)]
    compare: Option<(Point, Point)>,

    /// Run the circle algorithm for one center and radius
    #[arg(long, value_name = "X,Y,R", value_parser = parse_circle, conflicts_with = "compare")]
    circle: Option<(Point, i32)>,

    /// Print comparison results as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Use this config file instead of ~/.config/rastergrid/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the documented example config to ~/.config/rastergrid/config.toml
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn parse_integers<const N: usize>(value: &str) -> Result<[i32; N], String> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!(
            "expected {N} comma-separated integers, got {}",
            parts.len()
        ));
    }

    let mut out = [0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse()
            .map_err(|_| format!("'{part}' is not an integer"))?;
    }
    Ok(out)
}

fn check_coordinate(value: i32) -> Result<i32, String> {
    let limit = compare::MAX_COORDINATE;
    if !(-limit..=limit).contains(&value) {
        return Err(format!("coordinate {value} is outside -{limit}..={limit}"));
    }
    Ok(value)
}

fn parse_segment(value: &str) -> Result<(Point, Point), String> {
    let [x0, y0, x1, y1] = parse_integers::<4>(value)?.map(check_coordinate);
    Ok((Point::new(x0?, y0?), Point::new(x1?, y1?)))
}

fn parse_circle(value: &str) -> Result<(Point, i32), String> {
    let [x, y, r] = parse_integers::<3>(value)?;
    if r < 0 {
        return Err(format!("radius must not be negative, got {r}"));
    }
    if r > MAX_RADIUS {
        return Err(format!("radius must be at most {MAX_RADIUS}, got {r}"));
    }
    Ok((Point::new(check_coordinate(x)?, check_coordinate(y)?), r))
}

fn print_report(comparisons: &[Comparison], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(comparisons)?);
    } else {
        print!("{}", compare::format_table(comparisons));
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote example config to {}", path.display());
        return Ok(());
    }

    if let Some((start, end)) = cli.compare {
        return print_report(&compare::compare_lines(start, end), cli.json);
    }

    if let Some((center, radius)) = cli.circle {
        return print_report(&compare::compare_circle(center, radius), cli.json);
    }

    if let Some(script_path) = cli.replay {
        let config = match &cli.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        let script = EventScript::from_file(&script_path)?;

        log::info!(
            "Replaying {} events over {} frames from {}",
            script.event_count(),
            script.ticks().len(),
            script_path.display()
        );

        let summary = rastergrid::backend::run_replay(&config, &script, &cli.output, cli.realtime)
            .context("Replay failed")?;

        println!(
            "Rendered {} frames ({} events): {} cells, last run {:.6} s -> {}",
            summary.frames,
            summary.events,
            summary.points,
            summary.last_execution_secs,
            cli.output.display()
        );
        return Ok(());
    }

    // No mode flags: show usage
    println!("rastergrid: Interactive comparison of classic grid rasterization algorithms");
    println!();
    println!("Usage:");
    println!("  rastergrid --replay SCRIPT [-o out.png]   Replay input events, render the last frame");
    println!("  rastergrid --compare X0,Y0,X1,Y1 [--json] Compare the line algorithms");
    println!("  rastergrid --circle X,Y,R [--json]        Run the midpoint circle algorithm");
    println!("  rastergrid --init-config                  Write an example config file");
    println!("  rastergrid --help                         Show help");
    println!();
    println!("Script directives:");
    println!("  click X Y [left|right|middle]    Mouse press at pixel (X, Y)");
    println!("  key enter|backspace|space|hash|C Key press");
    println!("  type TEXT                        One key press per character");
    println!("  tick                             End of frame");
    println!("  close                            Window close request");

    Ok(())
}
