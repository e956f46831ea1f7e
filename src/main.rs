use physx_sandbox::config::SandboxConfig;
use physx_sandbox::scenarios::ScenarioKind;
use physx_sandbox::SandboxApp;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Runs a physics scene headless and logs where everything ends up
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(long, value_enum, default_value = "bouncing-ball")]
    scenario: ScenarioKind,

    /// TOML file overriding the default settings
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Frame time in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SandboxConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SandboxConfig::default(),
    };

    let scenario = args.scenario.build(&config).context("building scenario")?;
    let mut app = SandboxApp::from_scenario(scenario, &config).context("attaching simulation")?;

    // Log positions about once per simulated second
    let report_every = ((1.0 / args.dt.max(f32::EPSILON)).round() as u32).max(1);
    for frame in 1..=args.frames {
        app.frame(args.dt);
        if frame % report_every == 0 || frame == args.frames {
            log::info!("frame {frame}");
            for object in &app.scene().objects {
                let p = object.translation();
                log::info!("  {:<10} ({:>8.3}, {:>8.3}, {:>8.3})", object.name, p.x, p.y, p.z);
            }
        }
    }

    Ok(())
}
