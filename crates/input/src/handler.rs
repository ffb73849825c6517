//! Held-key tracking for terminal environments.
//!
//! The game samples key *state* once per tick. Most terminals only report
//! presses (plus auto-repeat), so a key counts as held until its release
//! event arrives or until no press for it was seen within the release timeout.

use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{key_direction, should_quit, Direction};
use crate::types::InputSample;

// A short timeout keeps a single tap from reading as a key held forever on
// terminals without release events.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

/// Tracks which game keys are currently held.
#[derive(Debug, Clone)]
pub struct KeyTracker {
    /// Last press time per direction, indexed by [`Direction::index`].
    held: [Option<Instant>; 4],
    quit: bool,
    key_release_timeout: Duration,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self {
            held: [None; 4],
            quit: false,
            key_release_timeout: Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.key_release_timeout = Duration::from_millis(timeout_ms);
        self
    }

    pub fn key_release_timeout(&self) -> Duration {
        self.key_release_timeout
    }

    /// Feed any key event; presses and repeats hold, releases let go.
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.handle_key_press(key, now),
            KeyEventKind::Release => self.handle_key_release(key),
        }
    }

    pub fn handle_key_press(&mut self, key: KeyEvent, now: Instant) {
        if should_quit(key) {
            self.quit = true;
            return;
        }
        if let Some(dir) = key_direction(key) {
            self.held[dir.index()] = Some(now);
        }
    }

    pub fn handle_key_release(&mut self, key: KeyEvent) {
        if let Some(dir) = key_direction(key) {
            self.held[dir.index()] = None;
        }
    }

    pub fn is_held(&self, dir: Direction, now: Instant) -> bool {
        match self.held[dir.index()] {
            Some(pressed) => now.saturating_duration_since(pressed) <= self.key_release_timeout,
            None => false,
        }
    }

    /// Sample the key state for one tick, dropping holds that timed out.
    pub fn sample(&mut self, now: Instant) -> InputSample {
        for dir in Direction::ALL {
            if !self.is_held(dir, now) {
                self.held[dir.index()] = None;
            }
        }
        InputSample {
            up: self.held[Direction::Up.index()].is_some(),
            down: self.held[Direction::Down.index()].is_some(),
            left: self.held[Direction::Left.index()].is_some(),
            right: self.held[Direction::Right.index()].is_some(),
            quit: self.quit,
        }
    }

    /// Forget all held keys and a pending quit.
    pub fn reset(&mut self) {
        self.held = [None; 4];
        self.quit = false;
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}
