pub mod audio;
pub mod choreography;
pub mod constants;
pub mod ease;
pub mod envelope;
pub mod error;
pub mod particles;
pub mod scrub;
pub mod timeline;

pub use audio::*;
pub use choreography::*;
pub use envelope::*;
pub use error::ConfigError;
pub use particles::*;
pub use scrub::Scrub;
pub use timeline::*;
