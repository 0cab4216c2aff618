// DOM contract for the page: selectors and class names the web layer relies on.

// Main pinned region
pub const SEL_WRAPPER: &str = ".wrapper";
pub const SEL_LANDING: &str = ".landing";
pub const SEL_STAGE: &str = ".sticky-cards";
pub const SEL_CARD: &str = ".card";

// Sticky text region
pub const SEL_TEXT_SCROLL: &str = ".sticky-scroll";
pub const SEL_TEXT_PIN: &str = ".section-wrapp";
pub const SEL_TEXT_ITEM: &str = ".section-item";

// Particles
pub const SEL_PARTICLES: &str = ".particles-container";
pub const CLASS_PARTICLE: &str = "particle";

// Audio
pub const ID_AUDIO: &str = "backgroundMusic";
pub const ID_AUDIO_TOGGLE: &str = "audioToggle";
pub const ID_AUDIO_ICON: &str = "audioIcon";
pub const CLASS_MUTED: &str = "muted";

// Envelope
pub const SEL_ENVELOPE_WRAPPER: &str = ".envelope-wrapper";
pub const SEL_ENVELOPE: &str = ".envelope";
pub const SEL_SEAL: &str = ".envelope-seal";
pub const SEL_LETTER: &str = ".letter";

// Scroll trigger placements
pub const TRIGGER_START: &str = "top top";
pub const TEXT_TRIGGER_END: &str = "bottom bottom";
