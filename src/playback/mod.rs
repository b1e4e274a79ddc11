//! Cursor and autoplay state for stepping through a trace
//!
//! [`PlaybackController`] only tracks a position within a sequence of known
//! length; it never touches the steps themselves. Autoplay is driven by an
//! injected [`Ticker`], which the owner advances by calling
//! [`PlaybackController::update`] from its event loop.
//!
//! Every transition that could leave an old schedule armed (pausing, reset,
//! speed change, loading a new sequence) cancels the ticker first.

pub mod ticker;

pub use ticker::{Clock, IntervalTicker, ManualClock, SystemClock, TickHandle, Ticker};

use std::fmt;
use std::time::Duration;

/// Playback state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Freshly loaded, never played
    Ready,
    Playing,
    Paused,
}

/// Autoplay speed presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Speed {
    #[value(name = "0.5")]
    Half,
    #[default]
    #[value(name = "1")]
    Normal,
    #[value(name = "2")]
    Double,
    #[value(name = "4")]
    Quadruple,
}

impl Speed {
    pub fn interval(self) -> Duration {
        match self {
            Speed::Half => Duration::from_millis(2000),
            Speed::Normal => Duration::from_millis(1000),
            Speed::Double => Duration::from_millis(500),
            Speed::Quadruple => Duration::from_millis(250),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Speed::Half => "0.5×",
            Speed::Normal => "1×",
            Speed::Double => "2×",
            Speed::Quadruple => "4×",
        }
    }

    /// Next faster preset, saturating at 4×
    pub fn faster(self) -> Self {
        match self {
            Speed::Half => Speed::Normal,
            Speed::Normal => Speed::Double,
            Speed::Double | Speed::Quadruple => Speed::Quadruple,
        }
    }

    /// Next slower preset, saturating at 0.5×
    pub fn slower(self) -> Self {
        match self {
            Speed::Half | Speed::Normal => Speed::Half,
            Speed::Double => Speed::Normal,
            Speed::Quadruple => Speed::Double,
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bounded cursor over a trace plus autoplay timer
#[derive(Debug)]
pub struct PlaybackController<T: Ticker = IntervalTicker> {
    ticker: T,
    /// Arming that `update` is allowed to consume
    tick: Option<TickHandle>,
    len: usize,
    current: usize,
    state: PlaybackState,
    speed: Speed,
}

impl<T: Ticker> PlaybackController<T> {
    /// Create a controller for a sequence of `len` steps
    pub fn new(len: usize, ticker: T) -> Self {
        PlaybackController {
            ticker,
            tick: None,
            len,
            current: 0,
            state: PlaybackState::Ready,
            speed: Speed::default(),
        }
    }

    /// Replace the sequence being played
    pub fn load(&mut self, len: usize) {
        self.disarm();
        self.len = len;
        self.current = 0;
        self.state = PlaybackState::Ready;
        tracing::trace!(len, "playback loaded new sequence");
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn is_at_start(&self) -> bool {
        self.current == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.current + 1 >= self.len
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    /// Advance one step; returns false at the last step
    pub fn step_forward(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.current += 1;
        if self.is_at_end() && self.is_playing() {
            self.pause();
        }
        true
    }

    /// Go back one step; returns false at the first step
    pub fn step_backward(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Move straight to `index`, clamped to the last step
    pub fn seek(&mut self, index: usize) {
        self.current = index.min(self.len.saturating_sub(1));
        if self.is_at_end() && self.is_playing() {
            self.pause();
        }
    }

    pub fn jump_to_end(&mut self) {
        self.seek(self.len.saturating_sub(1));
    }

    /// Cursor back to the first step, playback paused
    pub fn reset(&mut self) {
        self.disarm();
        self.current = 0;
        self.state = PlaybackState::Paused;
        tracing::trace!("playback reset");
    }

    /// Start or pause autoplay. Playing from the last step restarts from 0.
    pub fn toggle_play(&mut self) {
        if self.is_playing() {
            self.pause();
            return;
        }
        if self.len <= 1 {
            return;
        }
        if self.is_at_end() {
            self.current = 0;
        }
        self.arm();
        self.state = PlaybackState::Playing;
        tracing::trace!(from = self.current, speed = %self.speed, "playback started");
    }

    pub fn pause(&mut self) {
        self.disarm();
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
            tracing::trace!(at = self.current, "playback paused");
        }
    }

    /// Change speed; an armed timer is re-armed at the new interval
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
        if self.is_playing() {
            self.arm();
        }
    }

    fn arm(&mut self) {
        self.tick = Some(self.ticker.start(self.speed.interval()));
    }

    fn disarm(&mut self) {
        self.ticker.cancel();
        self.tick = None;
    }

    /// Apply every tick that fell due; returns how many steps were taken
    pub fn update(&mut self) -> usize {
        if !self.is_playing() {
            return 0;
        }
        let Some(tick) = self.tick else {
            return 0;
        };
        let due = self.ticker.poll(tick);
        let mut advanced = 0;
        for _ in 0..due {
            if !self.step_forward() {
                break;
            }
            advanced += 1;
            if !self.is_playing() {
                break;
            }
        }
        advanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(len: usize) -> (PlaybackController<IntervalTicker<ManualClock>>, ManualClock) {
        let clock = ManualClock::new();
        let ticker = IntervalTicker::new(clock.clone());
        (PlaybackController::new(len, ticker), clock)
    }

    #[test]
    fn single_step_sequence_never_plays() {
        let (mut playback, _) = controller(1);
        playback.toggle_play();
        assert_eq!(playback.state(), PlaybackState::Ready);
        assert!(!playback.ticker().is_armed());
    }

    #[test]
    fn pause_disarms_the_ticker() {
        let (mut playback, _) = controller(5);
        playback.toggle_play();
        assert!(playback.ticker().is_armed());
        playback.toggle_play();
        assert_eq!(playback.state(), PlaybackState::Paused);
        assert!(!playback.ticker().is_armed());
    }

    #[test]
    fn only_the_latest_arming_is_polled() {
        let (mut playback, clock) = controller(10);
        playback.toggle_play();
        let first = playback.tick;
        assert_eq!(first, playback.ticker().handle());

        playback.set_speed(Speed::Double);
        assert_ne!(playback.tick, first);
        assert_eq!(playback.tick, playback.ticker().handle());

        clock.advance(Duration::from_millis(500));
        assert_eq!(playback.update(), 1);

        playback.pause();
        assert_eq!(playback.tick, None);
        clock.advance(Duration::from_millis(5000));
        assert_eq!(playback.update(), 0);
    }

    #[test]
    fn speed_presets_are_fixed() {
        assert_eq!(Speed::Half.interval(), Duration::from_millis(2000));
        assert_eq!(Speed::Normal.interval(), Duration::from_millis(1000));
        assert_eq!(Speed::Double.interval(), Duration::from_millis(500));
        assert_eq!(Speed::Quadruple.interval(), Duration::from_millis(250));
        assert_eq!(Speed::Quadruple.faster(), Speed::Quadruple);
        assert_eq!(Speed::Half.slower(), Speed::Half);
    }
}
