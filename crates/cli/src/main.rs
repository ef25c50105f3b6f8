//! Command-line harness around the `noncross` matchers: generate instances,
//! run a matcher with wall-clock timing, validate outputs, write JSON
//! artifacts plus a provenance sidecar.

use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::SubscriberBuilder;

use noncross::clouds::{draw_clouds, CloudCfg, ReplayToken};
use noncross::util::{crossing_count, verify_matching};
use noncross::{chull, hscut, MatchCfg, Point};

#[derive(Parser)]
#[command(name = "noncross")]
#[command(about = "Non-crossing matching of separated point clouds")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algo {
    /// Randomized ham-sandwich divide and conquer
    Hscut,
    /// Exact convex-hull peeling
    Chull,
}

#[derive(Subcommand)]
enum Action {
    /// Generate a random separated instance and write it as JSON
    Gen {
        #[arg(long)]
        pairs: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 1000.0)]
        half_width: f64,
        #[arg(long, default_value_t = 1000.0)]
        half_height: f64,
        #[arg(long)]
        out: String,
    },
    /// Run a matcher on a JSON instance and write the matching
    Run {
        #[arg(long)]
        algo: Algo,
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        /// RNG seed for hscut (ignored by chull)
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Re-validate the output (id bijection + zero crossings)
        #[arg(long)]
        check: bool,
    },
    /// Generate and match in one shot, reporting the timing only
    Bench {
        #[arg(long)]
        algo: Algo,
        #[arg(long)]
        pairs: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct PointRec {
    id: u32,
    x: f64,
    y: f64,
}

impl From<Point> for PointRec {
    fn from(p: Point) -> Self {
        Self {
            id: p.id,
            x: p.pos.x,
            y: p.pos.y,
        }
    }
}

impl From<PointRec> for Point {
    fn from(r: PointRec) -> Self {
        Point::new(r.id, r.x, r.y)
    }
}

/// On-disk instance: both sides plus the separating abscissa.
#[derive(Debug, Serialize, Deserialize)]
struct Instance {
    axis: f64,
    p: Vec<PointRec>,
    q: Vec<PointRec>,
}

impl Instance {
    fn sides(&self) -> (Vec<Point>, Vec<Point>) {
        let p = self.p.iter().map(|&r| Point::from(r)).collect();
        let q = self.q.iter().map(|&r| Point::from(r)).collect();
        (p, q)
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Gen {
            pairs,
            seed,
            half_width,
            half_height,
            out,
        } => gen(pairs, seed, half_width, half_height, out),
        Action::Run {
            algo,
            input,
            out,
            seed,
            check,
        } => run(algo, input, out, seed, check),
        Action::Bench { algo, pairs, seed } => bench(algo, pairs, seed),
    }
}

fn gen(pairs: usize, seed: u64, half_width: f64, half_height: f64, out: String) -> Result<()> {
    let cfg = CloudCfg {
        pairs,
        half_width,
        half_height,
    };
    let (p, q) = draw_clouds(cfg, ReplayToken { seed, index: 0 });
    let inst = Instance {
        axis: 0.0,
        p: p.into_iter().map(PointRec::from).collect(),
        q: q.into_iter().map(PointRec::from).collect(),
    };
    tracing::info!(pairs, seed, out, "gen");
    write_json(Path::new(&out), &serde_json::to_value(&inst)?)?;
    Ok(())
}

fn run(algo: Algo, input: String, out: String, seed: u64, check: bool) -> Result<()> {
    let text = std::fs::read_to_string(&input).with_context(|| format!("reading {input}"))?;
    let inst: Instance = serde_json::from_str(&text).with_context(|| format!("parsing {input}"))?;
    let (p, q) = inst.sides();

    let started = Instant::now();
    let (pm, qm) = match algo {
        Algo::Hscut => {
            let mut rng = StdRng::seed_from_u64(seed);
            hscut(&p, &q, MatchCfg::default(), &mut rng)?
        }
        Algo::Chull => {
            let r: Vec<Point> = p.iter().chain(q.iter()).copied().collect();
            chull(&r, inst.axis)?
        }
    };
    let elapsed_ms = started.elapsed().as_secs_f64() * 1e3;
    tracing::info!(algo = ?algo, pairs = pm.len(), elapsed_ms, "run");

    if check {
        if !verify_matching(&p, &q, &pm, &qm) {
            bail!(
                "matching failed validation ({} crossings)",
                crossing_count(&pm, &qm)
            );
        }
        tracing::info!("check ok");
    }

    let matching = Instance {
        axis: inst.axis,
        p: pm.into_iter().map(PointRec::from).collect(),
        q: qm.into_iter().map(PointRec::from).collect(),
    };
    let out_path = Path::new(&out);
    write_json(out_path, &serde_json::to_value(&matching)?)?;

    // Provenance sidecar next to the output.
    let rev = option_env!("GIT_COMMIT").unwrap_or("unknown");
    let provenance = serde_json::json!({
        "code_rev": rev,
        "version": noncross::VERSION,
        "params": {
            "algo": format!("{algo:?}"),
            "input": input,
            "seed": seed,
            "elapsed_ms": elapsed_ms,
            "checked": check,
        },
        "outputs": [out],
    });
    write_json(&out_path.with_file_name("provenance.json"), &provenance)?;
    Ok(())
}

fn bench(algo: Algo, pairs: usize, seed: u64) -> Result<()> {
    let cfg = CloudCfg {
        pairs,
        ..CloudCfg::default()
    };
    let (p, q) = draw_clouds(cfg, ReplayToken { seed, index: 0 });
    let started = Instant::now();
    let (pm, qm) = match algo {
        Algo::Hscut => {
            let mut rng = StdRng::seed_from_u64(seed);
            hscut(&p, &q, MatchCfg::default(), &mut rng)?
        }
        Algo::Chull => {
            let r: Vec<Point> = p.iter().chain(q.iter()).copied().collect();
            chull(&r, 0.0)?
        }
    };
    let elapsed_ms = started.elapsed().as_secs_f64() * 1e3;
    tracing::info!(algo = ?algo, pairs, elapsed_ms, "bench");
    if !verify_matching(&p, &q, &pm, &qm) {
        bail!("matching failed validation");
    }
    println!(
        "{}",
        serde_json::json!({ "algo": format!("{algo:?}"), "pairs": pairs, "elapsed_ms": elapsed_ms })
    );
    Ok(())
}

fn write_json(path: &Path, value: &serde_json::Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_round_trips_through_json() {
        let cfg = CloudCfg {
            pairs: 6,
            ..CloudCfg::default()
        };
        let (p, q) = draw_clouds(cfg, ReplayToken { seed: 3, index: 0 });
        let inst = Instance {
            axis: 0.0,
            p: p.iter().copied().map(PointRec::from).collect(),
            q: q.iter().copied().map(PointRec::from).collect(),
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inst.json");
        write_json(&path, &serde_json::to_value(&inst).unwrap()).unwrap();
        let back: Instance =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let (p2, q2) = back.sides();
        assert_eq!(p, p2);
        assert_eq!(q, q2);
    }
}
