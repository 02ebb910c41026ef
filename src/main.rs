//! Duck Hunt entry point
//!
//! Runs a headless demo session: the autopilot plays against the simulation
//! on a fixed timestep, each frame is tessellated as a renderer would, and a
//! summary is logged at the end.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use duck_hunt::GameConfig;
use duck_hunt::consts::{MAX_SUBSTEPS, SIM_DT};
use duck_hunt::hud;
use duck_hunt::renderer::{self, build_scene};
use duck_hunt::sim::{Autopilot, GameEvent, GameState, ScreenMode, TickInput, tick};

#[derive(Parser, Debug)]
#[command(name = "duck-hunt", about = "Headless Duck Hunt demo session")]
struct Args {
    /// JSON config file (missing fields use defaults)
    #[arg(long)]
    config: Option<PathBuf>,
    /// RNG seed for the run
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Simulated session length in seconds
    #[arg(long, default_value_t = 300.0)]
    seconds: f32,
    /// Simulated display frame time in milliseconds
    #[arg(long, default_value_t = 16.7)]
    frame_ms: f32,
    /// Print the final snapshot as JSON
    #[arg(long)]
    dump_snapshot: bool,
}

impl Args {
    /// Reject run limits the frame loop could never finish with
    fn validate(&self) -> Result<()> {
        if !self.seconds.is_finite() || self.seconds <= 0.0 {
            bail!("--seconds must be a positive number, got {}", self.seconds);
        }
        if !self.frame_ms.is_finite() || self.frame_ms <= 0.0 {
            bail!("--frame-ms must be a positive number, got {}", self.frame_ms);
        }
        Ok(())
    }
}

/// Fixed-timestep driver around the simulation
struct Session {
    state: GameState,
    pilot: Autopilot,
    accumulator: f32,
    frames: u64,
    vertices: u64,
    bytes: u64,
    shots: u32,
    hits: u32,
    escapes: u32,
}

impl Session {
    fn new(state: GameState) -> Self {
        Self {
            state,
            pilot: Autopilot::default(),
            accumulator: 0.0,
            frames: 0,
            vertices: 0,
            bytes: 0,
            shots: 0,
            hits: 0,
            escapes: 0,
        }
    }

    /// Run simulation ticks for one display frame
    fn update(&mut self, dt: f32) {
        if dt > 0.1 {
            log::warn!("Frame time {:.3}s clamped to 0.1s", dt);
        }
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let mut input = self.pilot.plan(&self.state, SIM_DT);
            // Retry a failed level once the banner has cleared
            if self.state.mode == ScreenMode::Failed && self.state.banner.is_none() {
                input = TickInput {
                    restart: true,
                    ..Default::default()
                };
            }
            tick(&mut self.state, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            for event in self.state.drain_events() {
                self.record(event);
            }
        }
    }

    fn record(&mut self, event: GameEvent) {
        match event {
            GameEvent::Shot => self.shots += 1,
            GameEvent::Hit { .. } => self.hits += 1,
            GameEvent::DuckEscaped => self.escapes += 1,
            GameEvent::LevelCleared { level } | GameEvent::LevelFailed { level } => {
                let snap = self.state.snapshot();
                log::info!("[level {}] {}", level, hud::hud_lines(&snap).join("  "));
            }
            _ => {}
        }
    }

    /// Tessellate the current frame the way a GPU backend would receive it
    fn render(&mut self) {
        let snap = self.state.snapshot();
        let vertices = build_scene(&snap, self.state.config());
        self.vertices += vertices.len() as u64;
        self.bytes += renderer::as_bytes(&vertices).len() as u64;
        self.frames += 1;
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    args.validate()?;
    log::info!("Duck Hunt (headless) starting, seed {}", args.seed);

    let config = match &args.config {
        Some(path) => GameConfig::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    let state = GameState::new(config, args.seed).context("invalid configuration")?;
    let mut session = Session::new(state);

    let frame_dt = args.frame_ms / 1000.0;
    let mut elapsed = 0.0;
    while elapsed < args.seconds {
        session.update(frame_dt);
        session.render();
        elapsed += frame_dt;

        if session.state.mode == ScreenMode::Victory {
            break;
        }
    }

    let snap = session.state.snapshot();
    log::info!(
        "Session over after {:.1}s: {:?}, {}",
        elapsed,
        snap.mode,
        hud::hud_lines(&snap).join("  ")
    );
    log::info!(
        "{} shots, {} hits, {} escapes; {} frames, {:.0} vertices/frame ({} KiB uploaded)",
        session.shots,
        session.hits,
        session.escapes,
        session.frames,
        session.vertices as f64 / session.frames.max(1) as f64,
        session.bytes / 1024
    );
    if let Some((title, subtitle)) = hud::overlay(&snap) {
        log::info!("{title} - {subtitle}");
    }

    if args.dump_snapshot {
        println!("{}", serde_json::to_string_pretty(&snap)?);
    }

    Ok(())
}
