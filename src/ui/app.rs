//! Main TUI application state and logic

use crate::algorithms::{AlgorithmDescriptor, AlgorithmKey};
use crate::metrics::Metrics;
use crate::playback::{IntervalTicker, PlaybackController, Speed, Ticker};
use crate::registry::{generate_for_key, AlgorithmRegistry};
use crate::snapshot::{Step, StepSequence};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// One algorithm's trace together with its own playback cursor
pub struct Lane<T: Ticker = IntervalTicker> {
    pub key: AlgorithmKey,
    pub steps: StepSequence,
    pub metrics: Metrics,
    pub playback: PlaybackController<T>,
}

impl<T: Ticker> Lane<T> {
    pub fn new(
        registry: &AlgorithmRegistry,
        key: AlgorithmKey,
        array: &[i64],
        target: Option<i64>,
        ticker: T,
    ) -> Self {
        let steps = generate_for_key(registry, key, array, target);
        let metrics = Metrics::from_sequence(&steps);
        let playback = PlaybackController::new(steps.len(), ticker);
        Lane {
            key,
            steps,
            metrics,
            playback,
        }
    }

    /// Replace this lane's trace with one for `key`.
    ///
    /// The old timer is cancelled before the old sequence is dropped.
    pub fn switch(
        &mut self,
        registry: &AlgorithmRegistry,
        key: AlgorithmKey,
        array: &[i64],
        target: Option<i64>,
    ) {
        self.playback.pause();
        self.steps = generate_for_key(registry, key, array, target);
        self.metrics = Metrics::from_sequence(&self.steps);
        self.key = key;
        self.playback.load(self.steps.len());
    }

    pub fn current(&self) -> Option<&Step> {
        self.steps.get(self.playback.current_step())
    }

    pub fn descriptor<'r>(
        &self,
        registry: &'r AlgorithmRegistry,
    ) -> Option<&'r AlgorithmDescriptor> {
        registry.resolve(self.key).ok().map(|g| g.descriptor())
    }
}

/// The main application state
pub struct App {
    pub registry: AlgorithmRegistry,

    /// Input array shared by every lane
    pub array: Vec<i64>,

    /// Search target shared by every lane
    pub target: Option<i64>,

    /// One lane, or two in comparison mode
    pub lanes: Vec<Lane>,

    /// Lane receiving algorithm switches
    pub focused_lane: usize,

    /// Algorithm used when comparison mode is switched on
    pub compare_key: AlgorithmKey,

    pub speed: Speed,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(
        registry: AlgorithmRegistry,
        array: Vec<i64>,
        target: Option<i64>,
        primary: AlgorithmKey,
        compare: Option<AlgorithmKey>,
        speed: Speed,
    ) -> Self {
        let mut lanes = vec![Lane::new(
            &registry,
            primary,
            &array,
            target,
            IntervalTicker::default(),
        )];
        if let Some(key) = compare {
            lanes.push(Lane::new(&registry, key, &array, target, IntervalTicker::default()));
        }
        for lane in &mut lanes {
            lane.playback.set_speed(speed);
        }

        let compare_key = compare
            .or_else(|| registry.next_key(primary))
            .unwrap_or(primary);

        App {
            registry,
            array,
            target,
            lanes,
            focused_lane: 0,
            compare_key,
            speed,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing() {
                for lane in &mut self.lanes {
                    lane.playback.update();
                }
                if !self.is_playing() {
                    self.status_message = "Playback complete".to_string();
                }
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        for lane in &mut self.lanes {
            lane.playback.pause();
        }
        Ok(())
    }

    fn is_playing(&self) -> bool {
        self.lanes.iter().any(|l| l.playback.is_playing())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let lane_count = self.lanes.len();
        let lane_constraints = vec![Constraint::Ratio(1, lane_count as u32); lane_count];
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(lane_constraints)
            .split(main_chunks[0]);

        for (idx, area) in columns.iter().enumerate() {
            self.render_lane(frame, *area, idx);
        }

        let primary = &self.lanes[0];
        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            super::panes::StatusRenderData {
                message: &self.status_message,
                current_step: primary.playback.current_step(),
                total_steps: primary.steps.len(),
                speed: self.speed,
                is_playing: self.is_playing(),
            },
        );
    }

    fn render_lane(&self, frame: &mut Frame, area: Rect, idx: usize) {
        let lane = &self.lanes[idx];
        let is_focused = self.is_lane_focused(idx);
        let descriptor = lane.descriptor(&self.registry);

        // Bars (top) | Narration | Info | Source (bottom)
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(45),
                Constraint::Length(7),
                Constraint::Length(7),
                Constraint::Min(0),
            ])
            .split(area);

        let title = format!(
            "{}  {}/{}",
            descriptor.map_or(lane.key.as_str(), |d| d.name),
            lane.playback.current_step() + 1,
            lane.steps.len()
        );
        super::panes::render_bars_pane(frame, rows[0], &title, lane.current(), is_focused);
        super::panes::render_narration_pane(frame, rows[1], lane.current(), is_focused);
        super::panes::render_info_pane(frame, rows[2], descriptor, &lane.metrics, is_focused);
        super::panes::render_source_pane(
            frame,
            rows[3],
            descriptor.map_or("", |d| d.source),
            lane.playback.is_at_end(),
            is_focused,
        );
    }

    /// Focus is only highlighted once there is a second lane to tell apart
    fn is_lane_focused(&self, idx: usize) -> bool {
        self.lanes.len() > 1 && idx == self.focused_lane
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.pause_all();
                let moved = self.for_each_lane(|p| p.step_backward());
                self.status_message = if moved {
                    "Stepped backward".to_string()
                } else {
                    "Already at the first step".to_string()
                };
            }
            KeyCode::Right => {
                self.pause_all();
                let moved = self.for_each_lane(|p| p.step_forward());
                self.status_message = if moved {
                    "Stepped forward".to_string()
                } else {
                    "Already at the last step".to_string()
                };
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.for_each_lane(|p| {
                    p.reset();
                    true
                });
                self.status_message = "Reset".to_string();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.change_speed(self.speed.faster()),
            KeyCode::Char('-') | KeyCode::Char('_') => self.change_speed(self.speed.slower()),
            KeyCode::Enter => {
                self.pause_all();
                self.for_each_lane(|p| {
                    p.jump_to_end();
                    true
                });
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.pause_all();
                self.for_each_lane(|p| {
                    p.seek(0);
                    true
                });
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Tab => self.cycle_algorithm(true),
            KeyCode::BackTab => self.cycle_algorithm(false),
            KeyCode::Char('c') | KeyCode::Char('C') => self.toggle_compare(),
            KeyCode::Char('f') | KeyCode::Char('F') => {
                if self.lanes.len() > 1 {
                    self.focused_lane = (self.focused_lane + 1) % self.lanes.len();
                }
            }
            _ => {}
        }
    }

    /// Apply `op` to every lane's controller; true if any lane reported a move
    fn for_each_lane(&mut self, mut op: impl FnMut(&mut PlaybackController) -> bool) -> bool {
        let mut any = false;
        for lane in &mut self.lanes {
            any |= op(&mut lane.playback);
        }
        any
    }

    fn pause_all(&mut self) {
        for lane in &mut self.lanes {
            lane.playback.pause();
        }
    }

    fn toggle_play(&mut self) {
        if self.is_playing() {
            self.pause_all();
            self.status_message = "Paused".to_string();
            return;
        }

        // Lanes that already finished restart together with the rest.
        for lane in &mut self.lanes {
            lane.playback.toggle_play();
        }
        self.status_message = if self.is_playing() {
            "Playing...".to_string()
        } else {
            "Nothing to play".to_string()
        };
    }

    fn change_speed(&mut self, speed: Speed) {
        self.speed = speed;
        for lane in &mut self.lanes {
            lane.playback.set_speed(speed);
        }
        self.status_message = format!("Speed {}", speed);
    }

    fn cycle_algorithm(&mut self, forward: bool) {
        let lane_idx = self.focused_lane.min(self.lanes.len() - 1);
        let current = self.lanes[lane_idx].key;
        let next = if forward {
            self.registry.next_key(current)
        } else {
            self.registry.prev_key(current)
        };
        let Some(next) = next else {
            return;
        };

        let lane = &mut self.lanes[lane_idx];
        lane.switch(&self.registry, next, &self.array, self.target);
        lane.playback.set_speed(self.speed);
        self.status_message = format!("Switched to {}", next);
    }

    fn toggle_compare(&mut self) {
        if self.lanes.len() > 1 {
            if let Some(mut lane) = self.lanes.pop() {
                lane.playback.pause();
                self.compare_key = lane.key;
            }
            self.focused_lane = 0;
            self.status_message = "Comparison off".to_string();
        } else {
            self.pause_all();
            let mut lane = Lane::new(
                &self.registry,
                self.compare_key,
                &self.array,
                self.target,
                IntervalTicker::default(),
            );
            lane.playback.set_speed(self.speed);
            self.lanes.push(lane);
            self.status_message = format!("Comparing with {}", self.compare_key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::{ManualClock, PlaybackState};

    #[test]
    fn switching_lanes_cancels_the_running_timer() {
        let registry = AlgorithmRegistry::with_defaults();
        let clock = ManualClock::new();
        let mut lane = Lane::new(
            &registry,
            AlgorithmKey::Bubble,
            &[3, 2, 1],
            None,
            IntervalTicker::new(clock.clone()),
        );
        lane.playback.toggle_play();
        assert!(lane.playback.ticker().is_armed());

        lane.switch(&registry, AlgorithmKey::Quick, &[3, 2, 1], None);
        assert!(!lane.playback.ticker().is_armed());
        assert_eq!(lane.playback.state(), PlaybackState::Ready);

        clock.advance(Duration::from_secs(5));
        assert_eq!(lane.playback.update(), 0);
        assert_eq!(lane.playback.current_step(), 0);
        assert_eq!(lane.metrics.steps, lane.steps.len());
    }

    #[test]
    fn app_starts_with_one_lane_per_selection() {
        let app = App::new(
            AlgorithmRegistry::with_defaults(),
            vec![4, 1, 3],
            Some(3),
            AlgorithmKey::Merge,
            Some(AlgorithmKey::Heap),
            Speed::Double,
        );
        assert_eq!(app.lanes.len(), 2);
        assert_eq!(app.lanes[1].key, AlgorithmKey::Heap);
        assert_eq!(app.lanes[0].playback.speed(), Speed::Double);
    }

    #[test]
    fn focus_follows_the_focused_lane_in_comparison_mode() {
        let mut app = App::new(
            AlgorithmRegistry::with_defaults(),
            vec![4, 1, 3],
            None,
            AlgorithmKey::Bubble,
            None,
            Speed::Normal,
        );
        assert!(!app.is_lane_focused(0));

        app.handle_key_event(KeyEvent::from(KeyCode::Char('c')));
        assert_eq!(app.lanes.len(), 2);
        assert!(app.is_lane_focused(0));
        assert!(!app.is_lane_focused(1));

        app.handle_key_event(KeyEvent::from(KeyCode::Char('f')));
        assert!(!app.is_lane_focused(0));
        assert!(app.is_lane_focused(1));
    }
}
