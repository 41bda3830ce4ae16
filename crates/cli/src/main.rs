use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod commands;
mod coords;

use coords::{parse_coords, Coords};

#[derive(Parser)]
#[command(name = "gcs")]
#[command(about = "Points, vectors, distances and angles in R^N (N = 1..=4)")]
struct Cmd {
    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Debug-level logs on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Euclidean distance between two points
    Distance {
        #[arg(long, value_parser = parse_coords, allow_hyphen_values = true)]
        from: Coords,
        #[arg(long, value_parser = parse_coords, allow_hyphen_values = true)]
        to: Coords,
    },
    /// Displacement vector from one point to another, with its magnitude
    Vector {
        #[arg(long, value_parser = parse_coords, allow_hyphen_values = true)]
        from: Coords,
        #[arg(long, value_parser = parse_coords, allow_hyphen_values = true)]
        to: Coords,
    },
    /// Dot product of two vectors
    Dot {
        #[arg(long, value_parser = parse_coords, allow_hyphen_values = true)]
        u: Coords,
        #[arg(long, value_parser = parse_coords, allow_hyphen_values = true)]
        v: Coords,
    },
    /// Angle between two non-zero vectors (radians unless --degrees)
    Angle {
        #[arg(long, value_parser = parse_coords, allow_hyphen_values = true)]
        u: Coords,
        #[arg(long, value_parser = parse_coords, allow_hyphen_values = true)]
        v: Coords,
        #[arg(long)]
        degrees: bool,
    },
    /// Cross product of two 3D vectors
    Cross {
        #[arg(long, value_parser = parse_coords, allow_hyphen_values = true)]
        u: Coords,
        #[arg(long, value_parser = parse_coords, allow_hyphen_values = true)]
        v: Coords,
    },
    /// Move a point along a vector (or back against it with --reverse)
    Translate {
        #[arg(long, value_parser = parse_coords, allow_hyphen_values = true)]
        point: Coords,
        #[arg(long, value_parser = parse_coords, allow_hyphen_values = true)]
        by: Coords,
        #[arg(long)]
        reverse: bool,
    },
    /// Print the diagnostic block of a point or a vector
    Details {
        #[arg(
            long,
            value_parser = parse_coords,
            allow_hyphen_values = true,
            conflicts_with = "vector",
            required_unless_present = "vector"
        )]
        point: Option<Coords>,
        #[arg(long, value_parser = parse_coords, allow_hyphen_values = true)]
        vector: Option<Coords>,
    },
    /// Draw reproducible random points in [lo, hi)^dim
    Sample {
        #[arg(long)]
        dim: usize,
        #[arg(long, default_value_t = 5)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = -1.0, allow_negative_numbers = true)]
        lo: f64,
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        hi: f64,
    },
    /// Print version and code revision
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::WARN };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let outcome = match &cmd.action {
        Action::Distance { from, to } => commands::distance(from, to),
        Action::Vector { from, to } => commands::vector(from, to),
        Action::Dot { u, v } => commands::dot(u, v),
        Action::Angle { u, v, degrees } => commands::angle(u, v, *degrees),
        Action::Cross { u, v } => commands::cross(u, v),
        Action::Translate { point, by, reverse } => commands::translate(point, by, *reverse),
        Action::Details { point, vector } => match (point, vector) {
            (Some(p), _) => commands::details_point(p),
            (None, Some(v)) => commands::details_vector(v),
            (None, None) => Err(anyhow::anyhow!("pass --point or --vector")),
        },
        Action::Sample {
            dim,
            count,
            seed,
            lo,
            hi,
        } => commands::sample(*dim, *count, *seed, *lo, *hi),
        Action::Report => commands::report(),
    };
    let outcome = outcome?;
    tracing::debug!(json = cmd.json, "command finished");

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&outcome.json)?);
    } else {
        // details blocks already end with a newline
        print!("{}", outcome.text);
        if !outcome.text.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}
