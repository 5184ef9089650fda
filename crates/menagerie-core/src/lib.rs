//! Menagerie core (engine-agnostic)
//!
//! Catalog-driven animal animation for AR scenes: a load-once catalog of named
//! animation windows, time-windowed clip derivation, slot binding/playback over
//! a capability trait implemented by rendering adapters, and keyword-to-action
//! resolution for speech-driven control. Rendering, tracking, gestures, and
//! speech-to-text stay outside this crate.

pub mod binder;
pub mod catalog;
pub mod clip;
pub mod error;
pub mod kinds;
pub mod matcher;
pub mod rig;

// Re-exports for consumers (adapters)
pub use catalog::{AnimationCatalog, AnimationWindow};
pub use clip::Clip;
pub use error::AnimationError;
pub use kinds::{AnimalKind, AnimationKind};
pub use matcher::{resolve, SpeechAction};
pub use rig::{AnimationRig, ClipPlayer, RigNode};

/// Crate-wide result type.
pub type Result<T> = core::result::Result<T, AnimationError>;
