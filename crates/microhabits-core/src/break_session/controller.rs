//! Drives a [`BreakSessionEngine`] from a real one-second clock.
//!
//! At most one [`Ticker`] is alive at a time. Every transition out of
//! `Running` cancels it before returning, and each ticker carries a
//! generation number so a tick already queued by a cancelled ticker is
//! discarded instead of reaching the engine.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{trace, warn};

use super::audio::{CueDispatcher, CuePlayer};
use super::engine::{BreakSessionEngine, SessionState};
use super::ticker::Ticker;
use crate::events::Event;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

pub struct BreakController {
    engine: BreakSessionEngine,
    cues: CueDispatcher,
    ticker: Option<Ticker>,
    generation: u64,
    period: Duration,
    tick_tx: mpsc::UnboundedSender<u64>,
    tick_rx: mpsc::UnboundedReceiver<u64>,
}

impl BreakController {
    pub fn new(player: Box<dyn CuePlayer>, muted: bool) -> Self {
        Self::with_engine(BreakSessionEngine::new(), player, muted)
    }

    pub fn with_engine(engine: BreakSessionEngine, player: Box<dyn CuePlayer>, muted: bool) -> Self {
        Self::with_cues(engine, CueDispatcher::new(player, muted))
    }

    pub fn with_cues(engine: BreakSessionEngine, cues: CueDispatcher) -> Self {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        Self {
            engine,
            cues,
            ticker: None,
            generation: 0,
            period: TICK_PERIOD,
            tick_tx,
            tick_rx,
        }
    }

    pub fn engine(&self) -> &BreakSessionEngine {
        &self.engine
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.cues.set_muted(muted);
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    // ── Commands ─────────────────────────────────────────────────────
    // Outside a tokio runtime the engine still transitions; the ticker is
    // armed on the first `next_event` instead.

    pub fn start(&mut self, exercise_id: &str) -> Option<Event> {
        let event = self.engine.start(exercise_id)?;
        self.cues.dispatch(&event);
        self.sync_ticker();
        Some(event)
    }

    pub fn toggle(&mut self) -> Option<Event> {
        let event = self.engine.toggle()?;
        self.sync_ticker();
        Some(event)
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.disarm();
        self.engine.reset()
    }

    /// Wait for the next tick and apply it. Returns `None` once no ticker
    /// is armed (idle, paused or complete).
    pub async fn next_event(&mut self) -> Option<Event> {
        if self.ticker.is_none() && self.engine.state() == SessionState::Running {
            self.arm();
        }
        loop {
            let current = self.ticker.as_ref()?.generation();
            let generation = self.tick_rx.recv().await?;
            if generation != current {
                trace!(generation, current, "dropping stale tick");
                continue;
            }
            let event = self.engine.tick();
            if self.engine.state() != SessionState::Running {
                self.disarm();
            }
            if let Some(ref event) = event {
                self.cues.dispatch(event);
            }
            return event;
        }
    }

    /// Start `exercise_id` and feed every event to `on_event` until the
    /// session stops running. Returns the final state.
    pub async fn run(&mut self, exercise_id: &str, mut on_event: impl FnMut(&Event)) -> SessionState {
        if let Some(event) = self.start(exercise_id) {
            on_event(&event);
        }
        while let Some(event) = self.next_event().await {
            on_event(&event);
        }
        self.engine.state()
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn sync_ticker(&mut self) {
        if self.engine.state() == SessionState::Running {
            self.arm();
        } else {
            self.disarm();
        }
    }

    fn arm(&mut self) {
        self.disarm();
        self.generation += 1;
        if tokio::runtime::Handle::try_current().is_err() {
            warn!(generation = self.generation, "no tokio runtime, break session is not ticking");
            return;
        }
        self.ticker = Some(Ticker::spawn(self.period, self.generation, self.tick_tx.clone()));
    }

    fn disarm(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}
