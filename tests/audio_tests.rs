// Host-side tests for the music toggle and its drag gesture.

use glam::Vec2;
use letter_web::core::*;

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

fn play_and_confirm(toggle: &mut AudioToggle) {
    assert_eq!(toggle.toggle(), AudioCommand::Play(PlayOrigin::Toggle));
    toggle.play_resolved(PlayOrigin::Toggle);
}

#[test]
fn starts_muted_with_mute_icon() {
    let toggle = AudioToggle::new(AudioConfig::default());
    assert_eq!(toggle.state(), AudioState::Muted);
    assert!(toggle.state().is_paused());
    assert_eq!(toggle.state().icon_class(), "fas fa-volume-mute");
    assert_eq!(toggle.config.volume, 0.3);
}

#[test]
fn toggling_twice_returns_to_muted() {
    let mut toggle = AudioToggle::new(AudioConfig::default());
    play_and_confirm(&mut toggle);
    assert_eq!(toggle.state(), AudioState::Playing);
    assert_eq!(toggle.state().icon_class(), "fas fa-volume-up");

    assert_eq!(toggle.toggle(), AudioCommand::Pause);
    assert_eq!(toggle.state(), AudioState::Muted);
    assert!(toggle.state().is_paused());
    assert_eq!(toggle.state().icon_class(), "fas fa-volume-mute");
}

#[test]
fn toggle_waits_for_pending_play() {
    let mut toggle = AudioToggle::default();
    assert_eq!(toggle.toggle(), AudioCommand::Play(PlayOrigin::Toggle));
    assert!(toggle.is_pending());
    assert_eq!(toggle.toggle(), AudioCommand::Ignore);
    toggle.play_resolved(PlayOrigin::Toggle);
    assert!(!toggle.is_pending());
    assert_eq!(toggle.toggle(), AudioCommand::Pause);
}

#[test]
fn rejected_play_stays_muted() {
    let mut toggle = AudioToggle::default();
    toggle.play();
    toggle.play_rejected(PlayOrigin::Toggle);
    assert_eq!(toggle.state(), AudioState::Muted);
    assert!(!toggle.is_pending());
    assert_eq!(toggle.pause(), AudioCommand::Ignore);
}

#[test]
fn first_interaction_tries_autoplay_once() {
    let mut toggle = AudioToggle::default();
    assert!(toggle.autoplay_armed());
    assert_eq!(
        toggle.first_interaction(),
        AudioCommand::Play(PlayOrigin::FirstInteraction)
    );
    toggle.play_rejected(PlayOrigin::FirstInteraction);
    assert_eq!(toggle.state(), AudioState::Muted);
    assert!(!toggle.autoplay_armed());

    // no retry from later clicks or scrolls
    assert_eq!(toggle.first_interaction(), AudioCommand::Ignore);
    // explicit toggle still works
    assert_eq!(toggle.toggle(), AudioCommand::Play(PlayOrigin::Toggle));
}

#[test]
fn successful_autoplay_shows_playing() {
    let mut toggle = AudioToggle::default();
    toggle.first_interaction();
    toggle.play_resolved(PlayOrigin::FirstInteraction);
    assert_eq!(toggle.state(), AudioState::Playing);
    assert_eq!(toggle.first_interaction(), AudioCommand::Ignore);
}

#[test]
fn explicit_toggle_disarms_autoplay() {
    let mut toggle = AudioToggle::default();
    play_and_confirm(&mut toggle);
    toggle.toggle();
    assert!(!toggle.autoplay_armed());
    assert_eq!(toggle.first_interaction(), AudioCommand::Ignore);
    assert_eq!(toggle.state(), AudioState::Muted);
}

#[test]
fn drag_keeps_grab_offset() {
    let mut toggle = AudioToggle::default();
    toggle.drag.begin(Vec2::new(110.0, 215.0), Vec2::new(100.0, 200.0));
    let pos = toggle.drag_to(Vec2::new(310.0, 415.0), VIEWPORT).unwrap();
    assert_eq!(pos, Vec2::new(300.0, 400.0));
}

#[test]
fn drag_is_clamped_to_viewport() {
    let mut toggle = AudioToggle::default();
    toggle.drag.begin(Vec2::new(10.0, 10.0), Vec2::ZERO);
    assert_eq!(
        toggle.drag_to(Vec2::new(-50.0, 5000.0), VIEWPORT),
        Some(Vec2::new(0.0, 540.0))
    );
    assert_eq!(
        toggle.drag_to(Vec2::new(5000.0, -50.0), VIEWPORT),
        Some(Vec2::new(740.0, 0.0))
    );
    assert_eq!(
        clamp_to_viewport(Vec2::new(20.0, 20.0), Vec2::new(40.0, 40.0), 60.0),
        Vec2::ZERO
    );
}

#[test]
fn move_without_press_does_nothing() {
    let mut toggle = AudioToggle::default();
    assert!(toggle.drag_to(Vec2::new(50.0, 50.0), VIEWPORT).is_none());
    assert!(toggle.drag.end().is_none());
    assert!(!toggle.drag.has_moved());
}

#[test]
fn drag_suppresses_exactly_one_toggle() {
    let mut toggle = AudioToggle::default();
    toggle.drag.begin(Vec2::new(10.0, 10.0), Vec2::ZERO);
    toggle.drag_to(Vec2::new(100.0, 100.0), VIEWPORT);
    assert!(toggle.drag.end().is_some());

    assert_eq!(toggle.toggle(), AudioCommand::Ignore);
    assert_eq!(toggle.state(), AudioState::Muted);
    assert_eq!(toggle.toggle(), AudioCommand::Play(PlayOrigin::Toggle));
}

#[test]
fn press_without_move_still_toggles() {
    let mut toggle = AudioToggle::default();
    toggle.drag.begin(Vec2::new(10.0, 10.0), Vec2::ZERO);
    assert!(toggle.drag.end().is_none());
    assert_eq!(toggle.toggle(), AudioCommand::Play(PlayOrigin::Toggle));
}

#[test]
fn guard_expires_after_release() {
    let mut toggle = AudioToggle::default();
    toggle.drag.begin(Vec2::new(10.0, 10.0), Vec2::ZERO);
    toggle.drag_to(Vec2::new(30.0, 30.0), VIEWPORT);
    let gesture = toggle.drag.end().unwrap();
    toggle.drag.expire(gesture);
    assert!(!toggle.drag.has_moved());
    assert_eq!(toggle.toggle(), AudioCommand::Play(PlayOrigin::Toggle));
}

#[test]
fn stale_expiry_keeps_newer_guard() {
    let mut toggle = AudioToggle::default();
    toggle.drag.begin(Vec2::new(10.0, 10.0), Vec2::ZERO);
    toggle.drag_to(Vec2::new(30.0, 30.0), VIEWPORT);
    let first = toggle.drag.end().unwrap();

    toggle.drag.begin(Vec2::new(30.0, 30.0), Vec2::new(20.0, 20.0));
    toggle.drag_to(Vec2::new(60.0, 60.0), VIEWPORT);
    let second = toggle.drag.end().unwrap();
    assert_ne!(first, second);

    toggle.drag.expire(first);
    assert!(toggle.drag.has_moved());
    assert_eq!(toggle.toggle(), AudioCommand::Ignore);
}
