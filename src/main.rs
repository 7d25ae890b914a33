//! Typer Shark entry point
//!
//! Loads words and configuration, then runs the frame loop with the demo
//! typist and a text renderer.
//!
//! Usage: `typer-shark [WORDS_FILE] [--settings FILE] [--tuning FILE]`

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use typer_shark::autopilot::Autopilot;
use typer_shark::platform::{FixedStepClock, FrameClock, FramePacer, InputSource, ScriptedInput};
use typer_shark::renderer::{JsonRenderer, NullRenderer, Renderer, TextRenderer};
use typer_shark::sim::{GameState, WordBank};
use typer_shark::{Game, RendererKind, Settings, Tuning};

const DEFAULT_WORDS_FILE: &str = "assets/shark_game_words.txt";

#[derive(Debug, Default)]
struct Args {
    words: Option<PathBuf>,
    settings: Option<PathBuf>,
    tuning: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--settings" => {
                args.settings = Some(it.next().ok_or("--settings needs a file")?.into());
            }
            "--tuning" => {
                args.tuning = Some(it.next().ok_or("--tuning needs a file")?.into());
            }
            flag if flag.starts_with("--") => return Err(format!("unknown option {}", flag)),
            path => args.words = Some(path.into()),
        }
    }
    Ok(args)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args()?;

    let settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let tuning = match &args.tuning {
        Some(path) => {
            let tuning = Tuning::load(path)?;
            log::info!("Loaded tuning from {}", path.display());
            tuning
        }
        None => Tuning::default(),
    };

    let words_path = args.words.unwrap_or_else(|| PathBuf::from(DEFAULT_WORDS_FILE));
    let bank = WordBank::load(&words_path)?;

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });
    log::info!("Game initialized with seed: {}", seed);

    let mut clock: Box<dyn FrameClock> = if settings.realtime {
        Box::new(FramePacer::new(settings.target_fps))
    } else {
        Box::new(FixedStepClock::new(settings.frame_dt()))
    };

    let mut input: Box<dyn InputSource> = if settings.autopilot.enabled {
        log::info!(
            "Autopilot typing at {} chars/s",
            settings.autopilot.chars_per_second
        );
        Box::new(Autopilot::new(&settings.autopilot, seed.rotate_left(17)))
    } else {
        log::warn!("Keyboard input needs a windowing front-end - running without a typist");
        Box::new(ScriptedInput::default())
    };

    let stdout = std::io::stdout();
    let mut renderer: Box<dyn Renderer> = match settings.renderer {
        RendererKind::Text => Box::new(TextRenderer::new(stdout.lock())),
        RendererKind::Json => Box::new(JsonRenderer::new(stdout.lock())),
        RendererKind::None => Box::new(NullRenderer),
    };
    log::info!("Renderer: {}", settings.renderer.as_str());

    let state = GameState::new(seed, tuning, 0);
    let mut game = Game::new(state, bank, settings.render_every);
    log::info!("Typer Shark running!");

    let summary = game.run(
        clock.as_mut(),
        input.as_mut(),
        renderer.as_mut(),
        settings.session_limit_ms(),
    );
    log::info!(
        "Session over: {} frames, {} games, best score {}, {} sharks destroyed, {} escaped",
        summary.frames,
        summary.games_finished,
        summary.best_score,
        summary.sharks_destroyed,
        summary.sharks_escaped
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Typer Shark starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
