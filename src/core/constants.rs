/// Scroll choreography and interaction tuning constants.
///
/// These constants describe the intended look of the page (ranges, distances,
/// timings) and keep magic numbers out of the pose math.
// Share of the main scroll range reserved for the background zoom before cards move
pub const CARDS_START_PROGRESS: f32 = 0.2;
pub const CARDS_END_PROGRESS: f32 = 1.0;

// Diagonal exit once a card has settled
pub const CARD_EXIT_DISTANCE: f32 = 0.3; // fraction of the viewport travelled at full exit
pub const CARD_EXIT_FALLOFF: f32 = 0.15; // per-index reduction of the exit distance

// Initial tilt per card (degrees); cards past the end get no tilt
pub const CARD_ROTATIONS_DEG: [f32; 6] = [-12.0, 10.0, -5.0, 5.0, -5.0, -2.0];

// Main timeline layout (timeline units)
pub const MAIN_TIMELINE_UNITS: f32 = 10.0;
pub const ZOOM_UNITS: f32 = 3.0;
pub const LANDING_SCALE_END: f32 = 9.0;
pub const LANDING_Z_END: f32 = 350.0; // px
pub const STAGE_SCALE_END: f32 = 1.1;

// Main pinned region spans this many viewport heights of scroll
pub const MAIN_SCROLL_VIEWPORTS: f32 = 10.0;

// Sticky text crossfade
pub const TEXT_TWEEN_UNITS: f32 = 0.5;
pub const TEXT_ENTER_OVERLAP: f32 = 0.9;
pub const TEXT_EXIT_OVERLAP: f32 = 0.4;
pub const TEXT_HIDDEN_SCALE: f32 = 0.5;
pub const TEXT_ENTER_OFFSET: f32 = 100.0; // px below rest
pub const TEXT_EXIT_OFFSET: f32 = -100.0; // px above rest

// Scrub lag (seconds to catch up with the raw scroll progress)
pub const SCRUB_LAG_SEC: f32 = 1.0;
pub const SCRUB_SNAP_EPSILON: f32 = 1e-4;

// Audio control
pub const AUDIO_VOLUME: f64 = 0.3;
pub const AUDIO_BUTTON_SIZE_PX: f32 = 60.0;
pub const DRAG_CLICK_GUARD_MS: i32 = 50;

// Envelope transition length
pub const ENVELOPE_TRANSITION_MS: i32 = 500;

// Floating particles
pub const PARTICLE_COUNT: usize = 30;
pub const PARTICLE_MIN_SIZE_PX: f32 = 15.0;
pub const PARTICLE_MAX_SIZE_PX: f32 = 50.0;
pub const PARTICLE_MIN_DURATION_SEC: f32 = 5.0;
pub const PARTICLE_MAX_DURATION_SEC: f32 = 10.0;
pub const PARTICLE_MAX_DELAY_SEC: f32 = 10.0;
