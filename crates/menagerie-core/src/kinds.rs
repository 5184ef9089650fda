//! Closed identifier enums for the supported animals and canned animations.
//!
//! The serde rename strings are the canonical keys: they appear verbatim in the
//! catalog document, as slot keys on a rig, and as spoken keywords. `Lay` ships
//! under the key `"crazy"`; the key set is what matters, not the variant name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported animal identifiers.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalKind {
    Dog,
    Pony,
}

impl AnimalKind {
    pub const ALL: [AnimalKind; 2] = [AnimalKind::Dog, AnimalKind::Pony];

    /// Canonical key for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            AnimalKind::Dog => "dog",
            AnimalKind::Pony => "pony",
        }
    }

    /// Exact-match reverse lookup on the canonical key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported canned-animation identifiers.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    Jump,
    Sit,
    #[serde(rename = "crazy")]
    Lay,
    Yes,
}

impl AnimationKind {
    pub const ALL: [AnimationKind; 4] = [
        AnimationKind::Jump,
        AnimationKind::Sit,
        AnimationKind::Lay,
        AnimationKind::Yes,
    ];

    /// Canonical key for this kind; used as the rig slot key when binding.
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationKind::Jump => "jump",
            AnimationKind::Sit => "sit",
            AnimationKind::Lay => "crazy",
            AnimationKind::Yes => "yes",
        }
    }

    /// Exact-match reverse lookup on the canonical key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
