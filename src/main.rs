//! Terminal egg catching game (default binary).
//!
//! Runs the fixed-rate tick loop: draw, gather keys until the frame deadline,
//! advance the game one tick. After game over it waits on the play-again
//! prompt instead.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_eggs::assets;
use tui_eggs::core::{GameState, Screen};
use tui_eggs::input::{prompt_answer, KeyTracker};
use tui_eggs::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_eggs::types::{FRAME_MS, RESTART_PROMPT, SMASH_PAUSE_MS};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// directory holding wolfd.txt, wolfu.txt, trayd.txt, trayu.txt and ground.txt
    #[arg(long)]
    assets: Option<PathBuf>,

    /// seed for the egg spawner (default: from the clock)
    #[arg(long)]
    seed: Option<u32>,

    /// ms per tick
    #[arg(long, default_value_t = FRAME_MS)]
    frame_ms: u64,

    /// write logs to this file (RUST_LOG sets the filter)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let textures = match &args.assets {
        Some(dir) => assets::load_dir(dir)?,
        None => assets::builtin(),
    };
    let seed = args.seed.unwrap_or_else(clock_seed);
    let mut game = GameState::new(&textures, seed).context("invalid texture set")?;
    log::info!("starting game with seed {seed}");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, Duration::from_millis(args.frame_ms.max(1)));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameState, frame: Duration) -> Result<()> {
    let view = GameView::default();
    let mut keys = KeyTracker::new();
    let mut screen = Screen::new();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        game.compose(&mut screen);
        let prompt = game.game_over().then_some(RESTART_PROMPT);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(game, &screen, prompt, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if game.game_over() {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => match prompt_answer(key) {
                    Some(true) => {
                        game.restart();
                        keys.reset();
                    }
                    Some(false) => return Ok(()),
                    None => {}
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
            continue;
        }

        let deadline = Instant::now() + frame;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => keys.handle_key_event(key, Instant::now()),
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let input = keys.sample(Instant::now());
        if input.quit {
            return Ok(());
        }
        let outcome = game.tick(input);
        if outcome.smashed {
            thread::sleep(Duration::from_millis(SMASH_PAUSE_MS));
        }
    }
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        // The game owns the terminal; stderr output would tear the frame.
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}
