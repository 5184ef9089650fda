//! Load-once catalog of named animation windows.
//!
//! The catalog is parsed from an object-of-arrays JSON document once at startup
//! and is read-only afterwards. Lookups are a linear scan over the declared
//! order; the first structurally matching window wins.
//!
//! Document shape:
//!
//! ```json
//! {
//!   "animals": [
//!     {
//!       "animalType": "dog",
//!       "animations": [
//!         { "animationType": "sit", "startTime": 20.0, "duration": 4.0 }
//!       ]
//!     }
//!   ]
//! }
//! ```

use serde::Deserialize;

use crate::error::AnimationError;
use crate::kinds::{AnimalKind, AnimationKind};

/// A labeled time-slice of an animal's master clip, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationWindow {
    pub animal: AnimalKind,
    pub animation: AnimationKind,
    pub start_time: f32,
    pub duration: f32,
}

/// Ordered, immutable collection of [`AnimationWindow`]s.
#[derive(Clone, Debug, Default)]
pub struct AnimationCatalog {
    windows: Vec<AnimationWindow>,
}

impl AnimationCatalog {
    /// Parse a catalog document, failing the whole load on any structural
    /// problem: malformed JSON, unknown kind identifiers, missing numeric
    /// fields, or windows with non-finite/negative start or non-positive
    /// duration. A partial catalog is never produced.
    pub fn from_json(s: &str) -> Result<AnimationCatalog, AnimationError> {
        let doc: CatalogDoc = serde_json::from_str(s)?;

        let mut windows = Vec::new();
        for animal_entry in doc.animals {
            let animal = AnimalKind::from_key(&animal_entry.animal_type).ok_or_else(|| {
                AnimationError::UnknownAnimalKind {
                    name: animal_entry.animal_type.clone(),
                }
            })?;
            for anim_entry in animal_entry.animations {
                let animation =
                    AnimationKind::from_key(&anim_entry.animation_type).ok_or_else(|| {
                        AnimationError::UnknownAnimationKind {
                            name: anim_entry.animation_type.clone(),
                        }
                    })?;
                let window = AnimationWindow {
                    animal,
                    animation,
                    start_time: anim_entry.start_time,
                    duration: anim_entry.duration,
                };
                validate_window(&window)?;
                windows.push(window);
            }
        }

        Ok(AnimationCatalog { windows })
    }

    /// Permissive variant: any load error is logged and degrades to an empty
    /// catalog, meaning "no custom animations available". Callers that want to
    /// abort instead should use [`AnimationCatalog::from_json`].
    pub fn from_json_or_empty(s: &str) -> AnimationCatalog {
        match Self::from_json(s) {
            Ok(catalog) => catalog,
            Err(err) => {
                log::warn!("discarding animation catalog: {err}");
                AnimationCatalog::default()
            }
        }
    }

    /// First window matching the `(animal, animation)` pair, if any.
    /// Well-formed catalogs carry at most one; duplicates are tolerated and
    /// resolved in favor of the earliest entry.
    pub fn lookup(
        &self,
        animal: AnimalKind,
        animation: AnimationKind,
    ) -> Option<&AnimationWindow> {
        self.windows
            .iter()
            .find(|w| w.animal == animal && w.animation == animation)
    }

    /// All windows declared for one animal, in document order.
    pub fn windows_for(&self, animal: AnimalKind) -> impl Iterator<Item = &AnimationWindow> {
        self.windows.iter().filter(move |w| w.animal == animal)
    }

    pub fn windows(&self) -> &[AnimationWindow] {
        &self.windows
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

fn validate_window(window: &AnimationWindow) -> Result<(), AnimationError> {
    if !window.start_time.is_finite() || window.start_time < 0.0 {
        return Err(AnimationError::InvalidWindow {
            animal: window.animal,
            animation: window.animation,
            reason: format!("startTime must be finite and >= 0, got {}", window.start_time),
        });
    }
    if !window.duration.is_finite() || window.duration <= 0.0 {
        return Err(AnimationError::InvalidWindow {
            animal: window.animal,
            animation: window.animation,
            reason: format!("duration must be finite and > 0, got {}", window.duration),
        });
    }
    Ok(())
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct CatalogDoc {
    animals: Vec<AnimalEntry>,
}

#[derive(Debug, Deserialize)]
struct AnimalEntry {
    #[serde(rename = "animalType")]
    animal_type: String,
    #[serde(default)]
    animations: Vec<AnimationEntry>,
}

#[derive(Debug, Deserialize)]
struct AnimationEntry {
    #[serde(rename = "animationType")]
    animation_type: String,
    #[serde(rename = "startTime")]
    start_time: f32,
    duration: f32,
}
