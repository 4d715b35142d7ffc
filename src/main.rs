//! Terminal snake runner (default binary).
//!
//! Polls crossterm for input with a frame-length timeout, feeds elapsed time
//! into the fixed-step scheduler and redraws only when the snapshot changed.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::config::AppConfig;
use tui_snake::core::{GameSnapshot, GameState, TimestepScheduler};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::logging;
use tui_snake::record::TickRecorder;
use tui_snake::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use tui_snake::types::FRAME_MS;

/// Redraw at least this often even if nothing changed.
const REFRESH_MS: u64 = 1000;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_path.as_deref())?;
    tracing::info!(
        grid_cells = config.game.grid_cells,
        step_ms = config.game.step_interval_ms,
        seed = config.game.seed,
        "starting"
    );

    let game = GameState::new(config.game.clone())?;
    let recorder = match config.record_path.as_deref() {
        Some(path) => Some(TickRecorder::create(path)?),
        None => None,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game, &config, recorder);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        tracing::error!(error = %e, "exited with error");
    }
    result
}

fn run<W: std::io::Write>(
    term: &mut TerminalRenderer,
    mut game: GameState,
    config: &AppConfig,
    mut recorder: Option<TickRecorder<W>>,
) -> Result<()> {
    let view = GameView::default();
    let mut scheduler = TimestepScheduler::new(config.game.step_interval_ms);
    let mut throttle = RenderThrottle::new(REFRESH_MS);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let started = Instant::now();
    let mut last_frame = Instant::now();
    let frame = Duration::from_millis(FRAME_MS as u64);

    loop {
        // Input with timeout until the next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        break;
                    }
                    if let Some(action) = handle_key_event(key) {
                        if game.apply_action(action)? {
                            tracing::debug!(action = action.as_str(), "action applied");
                        }
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.force();
                }
                _ => {}
            }
        }

        // Advance by whole elapsed milliseconds; the remainder carries over.
        let elapsed_ms = last_frame.elapsed().as_millis().min(u32::MAX as u128) as u32;
        if elapsed_ms > 0 {
            last_frame += Duration::from_millis(elapsed_ms as u64);
            scheduler.advance(&mut game, elapsed_ms, |game, event| {
                if let Some(rec) = recorder.as_mut() {
                    rec.record(game, event);
                }
            });
        }

        // Render.
        game.snapshot_into(&mut snap);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, snap.fingerprint()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.present(&mut fb)?;
        }
    }

    if let Some(rec) = recorder.as_mut() {
        rec.flush()?;
    }
    tracing::info!(score = game.score(), episode = game.episode_id(), "quit");
    Ok(())
}
