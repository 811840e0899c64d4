use std::time::Duration;

pub mod geometry;
pub mod registry;
pub mod state;
pub mod waveform;

pub use geometry::{Point, position};
pub use registry::{FeatureDescriptor, FeatureId, FeatureRegistry, RingKind};
pub use state::{Intent, IntentOutcome, OrbitalState};
pub use waveform::{WaveformBuffer, WaveformSimulator};

pub const PRIMARY_RADIUS: f64 = 120.0; // primary ring orbital radius
pub const SECONDARY_RADIUS: f64 = 80.0; // inner ring for settings/system items
pub const NARROW_BREAKPOINT: f64 = 768.0; // viewport width below which rings shrink
pub const NARROW_SCALE: f64 = 0.7;
pub const WAVEFORM_SAMPLES: usize = 20;
pub const WAVEFORM_AMPLITUDE_MAX: f64 = 100.0;
pub const WAVEFORM_REFRESH: Duration = Duration::from_millis(150);
pub const AVATAR_FALLBACK: &str = "HC";
