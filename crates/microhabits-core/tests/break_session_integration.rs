//! Integration tests for guided break sessions.
//!
//! Covers the engine on its own and the controller driving it from a
//! paused tokio clock.

use std::sync::{Arc, Mutex};

use microhabits_core::break_session::{
    format_countdown, AudioCue, BreakController, BreakSessionEngine, CuePlayer, SessionState,
};
use microhabits_core::Event;

#[derive(Clone, Default)]
struct RecordingPlayer {
    played: Arc<Mutex<Vec<AudioCue>>>,
}

impl CuePlayer for RecordingPlayer {
    fn play(&self, cue: AudioCue) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.played.lock().unwrap().push(cue);
        Ok(())
    }
}

#[test]
fn test_breathing_session_walkthrough() {
    let mut engine = BreakSessionEngine::new();
    engine.start("breathing").unwrap();
    assert_eq!(engine.remaining_secs(), 120);
    assert_eq!(engine.step_index(), 0);
    assert_eq!(format_countdown(engine.remaining_secs()), "2:00");

    for _ in 0..24 {
        engine.tick();
    }
    assert_eq!(engine.remaining_secs(), 96);
    assert_eq!(engine.step_index(), 1);
    assert_eq!(format_countdown(engine.remaining_secs()), "1:36");

    while engine.state() == SessionState::Running {
        engine.tick();
    }
    assert_eq!(engine.state(), SessionState::Complete);
    assert_eq!(engine.remaining_secs(), 0);
    assert_eq!(engine.step_index(), 4);
    assert!(engine.toggle().is_none());
    assert!(engine.tick().is_none());
}

#[test]
fn test_paused_engine_ignores_ticks() {
    let mut engine = BreakSessionEngine::new();
    engine.start("meditation");
    engine.tick();
    engine.toggle();
    assert_eq!(engine.state(), SessionState::Paused);
    for _ in 0..10 {
        assert!(engine.tick().is_none());
    }
    assert_eq!(engine.remaining_secs(), 299);

    engine.toggle();
    engine.tick();
    assert_eq!(engine.remaining_secs(), 298);
}

#[test]
fn test_restart_replaces_running_session() {
    let mut engine = BreakSessionEngine::new();
    engine.start("breathing");
    for _ in 0..50 {
        engine.tick();
    }
    engine.start("stretch");
    assert_eq!(engine.exercise().map(|e| e.id), Some("stretch"));
    assert_eq!(engine.remaining_secs(), 180);
    assert_eq!(engine.step_index(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_stretch_run_plays_all_cues() {
    let player = RecordingPlayer::default();
    let mut controller = BreakController::new(Box::new(player.clone()), false);

    let mut events = 0;
    let state = controller.run("stretch", |_| events += 1).await;

    assert_eq!(state, SessionState::Complete);
    assert_eq!(events, 181);
    assert!(!controller.is_ticking());

    let played = player.played.lock().unwrap();
    assert_eq!(played.first(), Some(&AudioCue::Start));
    assert_eq!(played.last(), Some(&AudioCue::Complete));
    assert_eq!(played.iter().filter(|c| **c == AudioCue::Tick).count(), 17);
}

#[tokio::test(start_paused = true)]
async fn test_pause_and_resume_keeps_countdown() {
    let mut controller = BreakController::new(Box::new(RecordingPlayer::default()), true);
    controller.start("breathing");
    for _ in 0..30 {
        controller.next_event().await;
    }
    assert_eq!(controller.engine().remaining_secs(), 90);

    controller.toggle();
    assert!(!controller.is_ticking());
    assert!(controller.next_event().await.is_none());

    tokio::time::advance(std::time::Duration::from_secs(15)).await;
    assert_eq!(controller.engine().remaining_secs(), 90);

    controller.toggle();
    match controller.next_event().await {
        Some(Event::SessionTicked { remaining_secs, .. }) => assert_eq!(remaining_secs, 89),
        other => panic!("expected a tick, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_muted_run_is_silent() {
    let player = RecordingPlayer::default();
    let mut controller = BreakController::new(Box::new(player.clone()), true);
    let state = controller.run("breathing", |_| {}).await;
    assert_eq!(state, SessionState::Complete);
    assert!(player.played.lock().unwrap().is_empty());
}
