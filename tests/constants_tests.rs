// Host-side tests for tuning constants and their relationships.

use letter_web::core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn progress_ranges_are_ordered() {
    assert!(CARDS_START_PROGRESS >= 0.0);
    assert!(CARDS_START_PROGRESS < CARDS_END_PROGRESS);
    assert!(CARDS_END_PROGRESS <= 1.0);

    // Zoom finishes inside the main timeline, after the cards have started moving
    assert!(ZOOM_UNITS < MAIN_TIMELINE_UNITS);
    assert!(ZOOM_UNITS / MAIN_TIMELINE_UNITS > CARDS_START_PROGRESS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn exit_distance_stays_positive_for_listed_cards() {
    assert!(CARD_EXIT_DISTANCE > 0.0);
    let last = (CARD_ROTATIONS_DEG.len() - 1) as f32;
    assert!(1.0 - last * CARD_EXIT_FALLOFF > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn text_overlaps_produce_a_crossfade() {
    // entry starts before the previous exit ends
    assert!(TEXT_ENTER_OVERLAP > TEXT_EXIT_OVERLAP);
    assert!(TEXT_ENTER_OVERLAP < 2.0 * TEXT_TWEEN_UNITS);
    assert!(TEXT_EXIT_OVERLAP < TEXT_TWEEN_UNITS);
    assert!(TEXT_HIDDEN_SCALE > 0.0 && TEXT_HIDDEN_SCALE < 1.0);
    assert!(TEXT_ENTER_OFFSET > 0.0 && TEXT_EXIT_OFFSET < 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn interaction_timings_are_positive() {
    assert!(DRAG_CLICK_GUARD_MS > 0);
    assert!(ENVELOPE_TRANSITION_MS > DRAG_CLICK_GUARD_MS);
    assert!(SCRUB_LAG_SEC > 0.0);
    assert!(AUDIO_VOLUME > 0.0 && AUDIO_VOLUME <= 1.0);
    assert!(AUDIO_BUTTON_SIZE_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_bounds_are_consistent() {
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLE_MIN_SIZE_PX > 0.0 && PARTICLE_MIN_SIZE_PX < PARTICLE_MAX_SIZE_PX);
    assert!(PARTICLE_MIN_DURATION_SEC > 0.0);
    assert!(PARTICLE_MIN_DURATION_SEC < PARTICLE_MAX_DURATION_SEC);
    assert!(PARTICLE_MAX_DELAY_SEC >= 0.0);
}
