use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use polylabel::api::{
    convex_hull, draw_star_polygon, find_pole_observed, LabelCfg, NoopObserver, RingReplay,
    SearchObserver, StarCfg, TraceObserver, VertexCount, DEFAULT_PRECISION,
};
use std::path::Path;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use io::{read_points, read_ring, write_json, RingOut, SolveOut};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "polylabel")]
#[command(about = "Label placement: pole of inaccessibility of polygon rings")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Find the pole of a ring read from a JSON file (`-` for stdin)
    Solve {
        #[arg(long)]
        input: String,
        #[arg(long, default_value_t = DEFAULT_PRECISION)]
        precision: f64,
        /// Include the achieved distance in the output
        #[arg(long)]
        with_distance: bool,
        /// Log improvements and probe counts while searching
        #[arg(long)]
        debug: bool,
        /// Also write the result (plus a provenance sidecar) to this path
        #[arg(long)]
        out: Option<String>,
    },
    /// Draw a reproducible random star-shaped ring
    Sample {
        #[arg(long)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[arg(long, default_value_t = 0.5)]
        radius_min: f64,
        #[arg(long, default_value_t = 1.0)]
        radius_max: f64,
        #[arg(long)]
        out: Option<String>,
    },
    /// Convex hull of a point set, written as a ring `solve` accepts
    Hull {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: Option<String>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.action {
        Action::Solve { debug: true, .. } => Level::DEBUG,
        _ => Level::INFO,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Solve {
            input,
            precision,
            with_distance,
            debug,
            out,
        } => solve(input, precision, with_distance, debug, out),
        Action::Sample {
            seed,
            index,
            vertices,
            radius_min,
            radius_max,
            out,
        } => sample(seed, index, vertices, radius_min, radius_max, out),
        Action::Hull { input, out } => hull(input, out),
        Action::Report => report(),
    }
}

fn solve(
    input: String,
    precision: f64,
    with_distance: bool,
    debug: bool,
    out: Option<String>,
) -> Result<()> {
    tracing::info!(input, precision, with_distance, out = ?out, "solve");
    let ring = read_ring(&input)?;
    let cfg = LabelCfg {
        precision,
        with_distance,
    };
    let mut trace = TraceObserver;
    let mut quiet = NoopObserver;
    let obs: &mut dyn SearchObserver = if debug { &mut trace } else { &mut quiet };
    let (pole, stats) = find_pole_observed(&ring, cfg, obs)
        .with_context(|| format!("labeling ring from {input}"))?;
    tracing::debug!(probes = stats.probes, degenerate = stats.degenerate, "solved");

    let row = SolveOut {
        point: [pole.point.x, pole.point.y],
        distance: pole.distance,
        probes: stats.probes,
    };
    println!("{}", serde_json::to_string_pretty(&row)?);

    if let Some(out) = out {
        let out_path = Path::new(&out);
        write_json(out_path, &row)?;
        let params = serde_json::json!({
            "input": input,
            "precision": precision,
            "with_distance": with_distance,
            "vertices": ring.len(),
        });
        let result = serde_json::json!({
            "point": row.point,
            "distance": row.distance,
            "probes": stats.probes,
            "improvements": stats.improvements,
        });
        write_sidecar(out_path, Payload::new("solve", params).with_result(result))?;
    }
    Ok(())
}

fn sample(
    seed: u64,
    index: u64,
    vertices: usize,
    radius_min: f64,
    radius_max: f64,
    out: Option<String>,
) -> Result<()> {
    tracing::info!(seed, index, vertices, "sample");
    let cfg = StarCfg {
        vertex_count: VertexCount::Fixed(vertices),
        radius_min,
        radius_max,
        ..StarCfg::default()
    };
    let ring = draw_star_polygon(cfg, RingReplay { seed, index });
    let doc = RingOut::from_points(&ring);
    match out {
        Some(out) => {
            let out_path = Path::new(&out);
            write_json(out_path, &doc)?;
            let params = serde_json::json!({
                "seed": seed,
                "index": index,
                "vertices": vertices,
                "radius_min": radius_min,
                "radius_max": radius_max,
            });
            let result = serde_json::json!({ "vertices": ring.len() });
            write_sidecar(out_path, Payload::new("sample", params).with_result(result))?;
        }
        None => println!("{}", serde_json::to_string_pretty(&doc)?),
    }
    Ok(())
}

fn hull(input: String, out: Option<String>) -> Result<()> {
    tracing::info!(input, out = ?out, "hull");
    let points = read_points(&input)?;
    let ring = convex_hull(&points).ok_or_else(|| {
        anyhow!(
            "{input}: need at least 3 non-collinear points for a hull, got {} points",
            points.len()
        )
    })?;
    tracing::debug!(points = points.len(), vertices = ring.len(), "hull_built");
    let doc = RingOut::from_points(&ring);
    match out {
        Some(out) => {
            let out_path = Path::new(&out);
            write_json(out_path, &doc)?;
            let params = serde_json::json!({ "input": input, "points": points.len() });
            let result = serde_json::json!({ "vertices": ring.len() });
            write_sidecar(out_path, Payload::new("hull", params).with_result(result))?;
        }
        None => println!("{}", serde_json::to_string_pretty(&doc)?),
    }
    Ok(())
}

fn report_doc() -> serde_json::Value {
    serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": polylabel::VERSION,
        "params": {},
        "outputs": []
    })
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&report_doc())?);
    Ok(())
}
