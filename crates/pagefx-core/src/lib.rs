//! Viewport-driven page effects.
//!
//! Host-independent simulation and state machines for a background particle
//! field, scroll parallax, one-shot reveals, eased counters and pointer tilt.
//! Browser types never appear here; hosts plug in through the traits in
//! [`clock`], [`surface`] and [`sink`].

pub mod clock;
pub mod config;
pub mod counter;
pub mod error;
pub mod field;
pub mod geometry;
pub mod math;
pub mod parallax;
pub mod particle;
pub mod reveal;
pub mod sink;
pub mod surface;
pub mod tilt;
pub mod title;
pub mod trigger;

pub use clock::{drive, AnimationState, FrameClock, FrameDriven, FrameStatus, ManualClock};
pub use config::EngineConfig;
pub use error::EffectError;
pub use field::{FieldLoop, ParticleField};
pub use geometry::Rect;
