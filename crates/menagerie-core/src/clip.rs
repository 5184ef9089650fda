//! Playable clips and time-windowed derivation.
//!
//! A master clip covers its whole source timeline (`offset == 0`). [`Clip::crop`]
//! derives an independent clip playing a sub-range of the source; the master is
//! left untouched and can be cropped again for other windows.

use serde::{Deserialize, Serialize};

use crate::error::AnimationError;

/// A playable timed animation resource, in seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    name: String,
    /// Offset into the source timeline where playback starts.
    offset: f32,
    /// Seconds of playable content.
    duration: f32,
}

impl Clip {
    /// Create a master clip covering `duration` seconds from the start of its
    /// source timeline.
    pub fn new(name: impl Into<String>, duration: f32) -> Result<Clip, AnimationError> {
        let name = name.into();
        if !duration.is_finite() || duration <= 0.0 {
            return Err(AnimationError::InvalidClip {
                name,
                reason: format!("duration must be finite and > 0, got {duration}"),
            });
        }
        Ok(Clip {
            name,
            offset: 0.0,
            duration,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Derive an independent clip playing `duration` seconds of `self`
    /// beginning at `start_time`. `self` is not modified.
    ///
    /// The window must lie inside this clip's timeline; out-of-range or
    /// non-finite bounds are a caller contract violation and fail fast rather
    /// than producing a degenerate clip.
    pub fn crop(&self, start_time: f32, duration: f32) -> Result<Clip, AnimationError> {
        let in_range = start_time.is_finite()
            && duration.is_finite()
            && start_time >= 0.0
            && duration > 0.0
            && start_time + duration <= self.duration;
        if !in_range {
            return Err(AnimationError::CropOutOfRange {
                start_time,
                duration,
                clip_duration: self.duration,
            });
        }
        Ok(Clip {
            name: self.name.clone(),
            offset: self.offset + start_time,
            duration,
        })
    }
}
