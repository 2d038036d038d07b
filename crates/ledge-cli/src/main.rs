// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Ledge CLI entrypoint.
//!
//! Runs the demo course headless and prints a summary, or prints the
//! effective physics prefs.
//!
//! # Usage
//! ```text
//! ledge-cli [--config-dir DIR] run [--frames N] [--resolver discrete|swept] [--dt SECONDS] [--save-prefs]
//! ledge-cli [--config-dir DIR] prefs [--resolver discrete|swept] [--dt SECONDS] [--save-prefs]
//! ```

// The CLI is expected to print to stdout/stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, Table};
use ledge_app_core::config::ConfigService;
use ledge_app_core::config_port::ConfigPort;
use ledge_app_core::prefs::{GamePrefs, ResolverMode};
use ledge_config_fs::FsConfigStore;
use ledge_math::Vec3;
use ledge_sim::{AppContext, FrameClock, InputSnapshot, Level, SimEvent, World};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless Ledge platformer runner")]
struct Cli {
    /// Directory holding prefs.json (defaults to the platform config dir)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Step the demo course with scripted input and print a summary
    Run(RunArgs),
    /// Print the effective prefs as JSON
    Prefs(Overrides),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Number of fixed frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u64,
    /// Press jump once every N frames (0 never jumps)
    #[arg(long, default_value_t = 240)]
    jump_every: u64,
    #[command(flatten)]
    overrides: Overrides,
}

#[derive(Args, Debug)]
struct Overrides {
    /// Collision resolver for the player
    #[arg(long)]
    resolver: Option<ResolverMode>,
    /// Fixed step length in seconds
    #[arg(long)]
    dt: Option<f32>,
    /// Persist the effective prefs to the config dir
    #[arg(long)]
    save_prefs: bool,
}

impl Overrides {
    fn apply(&self, prefs: &mut GamePrefs) {
        if let Some(resolver) = self.resolver {
            prefs.physics.resolver = resolver;
        }
        if let Some(dt) = self.dt {
            prefs.physics.fixed_dt = dt;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let store = match &cli.config_dir {
        Some(dir) => FsConfigStore::at(dir),
        None => FsConfigStore::new(),
    }
    .context("opening config store")?;
    let config = ConfigService::new(store);
    let mut prefs = config.load_prefs_or_default().context("loading prefs")?;

    let overrides = match &cli.command {
        Command::Run(args) => &args.overrides,
        Command::Prefs(overrides) => overrides,
    };
    overrides.apply(&mut prefs);
    prefs.physics.validate().context("invalid prefs")?;
    if overrides.save_prefs {
        config.save_prefs(&prefs).context("saving prefs")?;
        info!(dir = %config.store().base().display(), "saved prefs");
    }

    match cli.command {
        Command::Run(args) => run(&prefs, &args),
        Command::Prefs(_) => {
            println!("{}", serde_json::to_string_pretty(&prefs)?);
            Ok(())
        }
    }
}

/// Walk forward the whole time; tap jump on a fixed period.
fn scripted_input(frame: u64, jump_every: u64) -> InputSnapshot {
    let jump = jump_every > 0 && frame % jump_every == jump_every - 1;
    InputSnapshot::new(1.0, 0.0, 0.0, jump)
}

#[derive(Default)]
struct Tally {
    landings: u32,
    triggers: u32,
    bridges: u32,
    collected: u32,
    respawns: u32,
}

impl Tally {
    fn record(&mut self, event: &SimEvent) {
        match event {
            SimEvent::Landed { .. } => self.landings += 1,
            SimEvent::TriggerActivated { .. } => self.triggers += 1,
            SimEvent::BridgeRaised { .. } => self.bridges += 1,
            SimEvent::Collected { .. } => self.collected += 1,
            SimEvent::Respawned { .. } => self.respawns += 1,
        }
    }
}

fn run(prefs: &GamePrefs, args: &RunArgs) -> Result<()> {
    let level = Level::demo();
    let mut world = World::new(prefs.physics.clone(), &level).context("building demo course")?;
    let mut tally = Tally::default();
    let mut contacts = 0usize;
    let mut clock = FrameClock::new();

    for frame in 0..args.frames {
        let ctx = AppContext::new(frame, scripted_input(frame, args.jump_every));
        let report = world.step(&ctx);
        contacts += report.contacts;
        for event in &report.events {
            tally.record(event);
        }
    }
    let wall = clock.mark();

    let player = world.player();
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["metric", "value"]);
    table.add_row(vec!["frames".to_string(), world.frames().to_string()]);
    table.add_row(vec!["resolver".to_string(), prefs.physics.resolver.to_string()]);
    table.add_row(vec![
        "simulated (s)".to_string(),
        format!("{:.3}", simulated_seconds(world.frames(), prefs.physics.fixed_dt)),
    ]);
    table.add_row(vec!["wall (s)".to_string(), format!("{wall:.3}")]);
    table.add_row(vec!["position".to_string(), fmt_vec(player.position())]);
    table.add_row(vec!["grounded".to_string(), player.is_grounded().to_string()]);
    table.add_row(vec!["score".to_string(), world.score().to_string()]);
    table.add_row(vec!["contacts".to_string(), contacts.to_string()]);
    table.add_row(vec!["landings".to_string(), tally.landings.to_string()]);
    table.add_row(vec!["triggers".to_string(), tally.triggers.to_string()]);
    table.add_row(vec!["bridges raised".to_string(), tally.bridges.to_string()]);
    table.add_row(vec!["collected".to_string(), tally.collected.to_string()]);
    table.add_row(vec!["respawns".to_string(), tally.respawns.to_string()]);
    println!("{table}");
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn simulated_seconds(frames: u64, dt: f32) -> f64 {
    frames as f64 * f64::from(dt)
}

fn fmt_vec(v: Vec3) -> String {
    format!("({:.2}, {:.2}, {:.2})", v.x(), v.y(), v.z())
}
