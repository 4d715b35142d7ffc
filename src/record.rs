//! JSONL tick recorder.
//!
//! Writes one JSON object per simulation step:
//!
//! ```text
//! {"episode":0,"tick":1,"event":{"kind":"moved","head":{"gx":2,"gz":0}},"snapshot":{...}}
//! ```
//!
//! Enabled with `SNAKE_RECORD_PATH`. Write failures are logged once and the
//! recorder then goes quiet; a broken log file never stops the game.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{GameSnapshot, GameState};
use crate::types::StepEvent;

#[derive(Serialize)]
struct TickRecord<'a> {
    episode: u32,
    tick: u64,
    event: StepEvent,
    snapshot: &'a GameSnapshot,
}

pub struct TickRecorder<W: Write> {
    out: W,
    snap: GameSnapshot,
    line: Vec<u8>,
    failed: bool,
}

impl TickRecorder<BufWriter<File>> {
    /// Create (truncate) the file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("create record file {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TickRecorder<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            snap: GameSnapshot::default(),
            line: Vec::with_capacity(1024),
            failed: false,
        }
    }

    /// Append one line for `event`, which `game` has just produced.
    pub fn record(&mut self, game: &GameState, event: StepEvent) {
        if self.failed {
            return;
        }
        game.snapshot_into(&mut self.snap);

        self.line.clear();
        let rec = TickRecord {
            episode: game.episode_id(),
            tick: game.tick_count(),
            event,
            snapshot: &self.snap,
        };
        let written = serde_json::to_writer(&mut self.line, &rec)
            .map_err(anyhow::Error::from)
            .and_then(|()| {
                self.line.push(b'\n');
                self.out.write_all(&self.line).map_err(anyhow::Error::from)
            });

        if let Err(e) = written {
            tracing::warn!(error = %e, "tick recorder disabled");
            self.failed = true;
        }
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush().context("flush record file")
    }

    /// True once a write has failed.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
