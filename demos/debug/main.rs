//! Hexshield debug dump: builds an assembly and prints what came out.
//!
//! Usage:
//! ```text
//! cargo run --example debug                      # default parameters
//! cargo run --example debug -- params.json       # parameters from a file
//! cargo run --example debug -- --json            # dump the parameters used
//! RUST_LOG=hexshield=trace cargo run --example debug
//! ```

use hexshield::shield::{Assembly, AssemblyParams};

/// Parsed CLI arguments.
struct CliArgs {
    /// Print the effective parameters as JSON before the summary.
    dump_json: bool,
    /// Optional parameter file.
    path: Option<String>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    CliArgs {
        dump_json: args.iter().any(|a| a == "--json"),
        path: args.iter().find(|a| !a.starts_with('-')).cloned(),
    }
}

fn load_params(path: Option<&str>) -> hexshield::Result<AssemblyParams> {
    let Some(path) = path else {
        return Ok(AssemblyParams::default());
    };
    match std::fs::read_to_string(path) {
        Ok(json) => AssemblyParams::from_json(&json),
        Err(err) => {
            eprintln!("[debug] cannot read {path}: {err}, using defaults");
            Ok(AssemblyParams::default())
        }
    }
}

fn main() -> hexshield::Result<()> {
    // Default: WARN for everything, DEBUG for hexshield.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("hexshield=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = parse_args();
    let params = load_params(args.path.as_deref())?;
    if args.dump_json {
        println!("{}", params.to_json()?);
    }

    let assembly = Assembly::build(&params);

    println!("outer radius {:.4}", assembly.outer.radius());
    println!("inner radius {:.4}", assembly.inner.radius());
    for s in &assembly.segments {
        println!(
            "segment {} shift ({:+.4}, {:+.4}) rim {:.4} triangles {}",
            s.index,
            s.translation.x,
            s.translation.y,
            s.applied_rim,
            s.mesh.triangle_count()
        );
    }
    println!("center triangles {}", assembly.center.triangle_count());
    if let Some((lo, hi)) = assembly.bounds() {
        println!(
            "bounds ({:.3}, {:.3}, {:.3}) .. ({:.3}, {:.3}, {:.3})",
            lo.x, lo.y, lo.z, hi.x, hi.y, hi.z
        );
    }
    for a in assembly.anchors.iter() {
        println!(
            "anchor {:<3} ({:+.4}, {:+.4}, {:+.4})",
            a.id, a.position.x, a.position.y, a.position.z
        );
    }
    for p in &assembly.paths {
        println!("path {} segments {}", p.id, p.curve.segment_count());
        if let Some(first) = assembly.flow.particles().first() {
            if let Some(dir) = first.heading(&p.curve, 1.0) {
                println!("    heading at t=1s ({:+.4}, {:+.4}, {:+.4})", dir.x, dir.y, dir.z);
            }
        }
        for pt in p.curve.sample(8) {
            println!("    ({:+.4}, {:+.4}, {:+.4})", pt.x, pt.y, pt.z);
        }
    }
    println!("particles at t=1s: {}", assembly.particle_frame(1.0).len());
    Ok(())
}
