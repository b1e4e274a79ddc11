// Integration tests for the playback controller, driven by a manual clock

use std::time::Duration;

use algotrace::playback::{
    IntervalTicker, ManualClock, PlaybackController, PlaybackState, Speed, Ticker,
};

type ManualPlayback = PlaybackController<IntervalTicker<ManualClock>>;

fn controller(len: usize) -> (ManualPlayback, ManualClock) {
    let clock = ManualClock::new();
    let playback = PlaybackController::new(len, IntervalTicker::new(clock.clone()));
    (playback, clock)
}

const ONE_TICK: Duration = Duration::from_millis(1000);

// === MANUAL NAVIGATION ===

#[test]
fn test_step_boundaries_are_no_ops() {
    let (mut playback, _) = controller(3);
    assert!(!playback.step_backward());
    assert_eq!(playback.current_step(), 0);

    assert!(playback.step_forward());
    assert!(playback.step_forward());
    assert!(!playback.step_forward());
    assert_eq!(playback.current_step(), 2);
    assert!(playback.is_at_end());

    assert!(playback.step_backward());
    assert_eq!(playback.current_step(), 1);
}

#[test]
fn test_seek_clamps_and_jump_to_end() {
    let (mut playback, _) = controller(4);
    playback.seek(99);
    assert_eq!(playback.current_step(), 3);
    playback.seek(1);
    assert_eq!(playback.current_step(), 1);
    playback.jump_to_end();
    assert_eq!(playback.current_step(), 3);
}

// === AUTOPLAY ===

#[test]
fn test_one_tick_advances_exactly_one_step() {
    let (mut playback, clock) = controller(5);
    playback.toggle_play();
    assert_eq!(playback.state(), PlaybackState::Playing);

    clock.advance(ONE_TICK);
    assert_eq!(playback.update(), 1);
    assert_eq!(playback.current_step(), 1);
}

#[test]
fn test_reset_during_playback_cancels_the_timer() {
    let (mut playback, clock) = controller(5);
    playback.toggle_play();
    clock.advance(Duration::from_millis(600));
    playback.reset();

    assert_eq!(playback.state(), PlaybackState::Paused);
    assert!(!playback.ticker().is_armed());

    // Well past the original tick boundary
    clock.advance(Duration::from_millis(3000));
    assert_eq!(playback.update(), 0);
    assert_eq!(playback.current_step(), 0);
}

#[test]
fn test_reaching_the_end_pauses() {
    let (mut playback, clock) = controller(3);
    playback.toggle_play();
    clock.advance(ONE_TICK * 10);
    assert_eq!(playback.update(), 2);
    assert_eq!(playback.current_step(), 2);
    assert_eq!(playback.state(), PlaybackState::Paused);
    assert!(!playback.ticker().is_armed());
}

#[test]
fn test_play_from_end_restarts() {
    let (mut playback, clock) = controller(3);
    playback.jump_to_end();
    playback.toggle_play();
    assert_eq!(playback.current_step(), 0);
    assert!(playback.is_playing());

    clock.advance(ONE_TICK);
    playback.update();
    assert_eq!(playback.current_step(), 1);
}

#[test]
fn test_speed_change_rearms_at_new_interval() {
    let (mut playback, clock) = controller(10);
    playback.toggle_play();
    clock.advance(Duration::from_millis(900));

    playback.set_speed(Speed::Quadruple);
    assert_eq!(playback.speed(), Speed::Quadruple);

    // The old 1000ms deadline must not fire
    clock.advance(Duration::from_millis(200));
    assert_eq!(playback.update(), 0);

    clock.advance(Duration::from_millis(50));
    assert_eq!(playback.update(), 1);
    clock.advance(Duration::from_millis(500));
    assert_eq!(playback.update(), 2);
    assert_eq!(playback.current_step(), 3);
}

#[test]
fn test_loading_a_new_sequence_cancels_playback() {
    let (mut playback, clock) = controller(6);
    playback.toggle_play();
    clock.advance(ONE_TICK * 2);
    playback.update();
    assert_eq!(playback.current_step(), 2);

    playback.load(4);
    assert_eq!(playback.state(), PlaybackState::Ready);
    assert_eq!(playback.current_step(), 0);
    assert_eq!(playback.len(), 4);

    clock.advance(ONE_TICK * 2);
    assert_eq!(playback.update(), 0);
    assert_eq!(playback.current_step(), 0);
}

#[test]
fn test_paused_controller_ignores_elapsed_time() {
    let (mut playback, clock) = controller(5);
    playback.toggle_play();
    playback.toggle_play();
    assert_eq!(playback.state(), PlaybackState::Paused);

    clock.advance(ONE_TICK * 3);
    assert_eq!(playback.update(), 0);

    // Resuming starts a fresh interval
    playback.toggle_play();
    assert_eq!(playback.update(), 0);
    clock.advance(ONE_TICK);
    assert_eq!(playback.update(), 1);
}
