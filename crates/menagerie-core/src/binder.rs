//! Binding and playback of derived clips on a rig's named slots.
//!
//! Slot resolution searches the target object first, then its immediate
//! children; a child's binding overrides the parent's when both carry the same
//! key. Bindings created here always live on the rig root, keyed by the
//! animation kind's canonical identifier.

use crate::catalog::AnimationWindow;
use crate::clip::Clip;
use crate::error::AnimationError;
use crate::kinds::AnimationKind;
use crate::rig::{AnimationRig, ClipPlayer};

/// Slot key of the default/base animation every imported object carries.
/// Adapters map their engine's default-import key onto this.
pub const BASE_SLOT: &str = "base";

/// Resolve a slot key against the rig root and its immediate children.
/// Child bindings win over the root's; among children, the last match wins.
fn resolve_player_mut<'a>(
    rig: &'a mut dyn AnimationRig,
    key: &str,
) -> Option<&'a mut ClipPlayer> {
    let mut child_idx = None;
    for (idx, child) in rig.children().into_iter().enumerate() {
        if child.player(key).is_some() {
            child_idx = Some(idx);
        }
    }
    match child_idx {
        Some(idx) => rig.children_mut().into_iter().nth(idx)?.player_mut(key),
        None => rig.player_mut(key),
    }
}

/// Attach `clip` to the rig under `slot`'s canonical key, replacing any
/// existing binding there. Playback is not started.
pub fn bind(rig: &mut dyn AnimationRig, slot: AnimationKind, clip: Clip) {
    rig.attach(slot.as_str(), ClipPlayer::new(clip));
}

/// Start the player bound under `slot`.
pub fn play(rig: &mut dyn AnimationRig, slot: AnimationKind) -> Result<(), AnimationError> {
    let player =
        resolve_player_mut(rig, slot.as_str()).ok_or_else(|| AnimationError::SlotNotBound {
            slot: slot.as_str().to_string(),
        })?;
    player.play();
    Ok(())
}

/// Start the base/default animation.
pub fn play_base(rig: &mut dyn AnimationRig) -> Result<(), AnimationError> {
    let player = resolve_player_mut(rig, BASE_SLOT).ok_or_else(|| AnimationError::SlotNotBound {
        slot: BASE_SLOT.to_string(),
    })?;
    player.play();
    Ok(())
}

/// Stop the base animation and every bound slot, recursively across the
/// object's attached sub-parts.
pub fn stop_all(rig: &mut dyn AnimationRig) {
    for key in rig.slot_keys() {
        if let Some(player) = rig.player_mut(&key) {
            player.stop();
        }
    }
    for child in rig.children_mut() {
        stop_all(child);
    }
}

/// Crop the base slot's master clip to `window`, bind the result under the
/// window's animation kind, and start it.
pub fn play_window(
    rig: &mut dyn AnimationRig,
    window: &AnimationWindow,
) -> Result<(), AnimationError> {
    let master = resolve_player_mut(rig, BASE_SLOT)
        .ok_or_else(|| AnimationError::SlotNotBound {
            slot: BASE_SLOT.to_string(),
        })?
        .clip()
        .clone();
    let derived = master.crop(window.start_time, window.duration)?;
    bind(rig, window.animation, derived);
    // Start the player just attached to the root directly; a stale child
    // binding under the same key must not shadow the derived clip.
    let player =
        rig.player_mut(window.animation.as_str())
            .ok_or_else(|| AnimationError::SlotNotBound {
                slot: window.animation.as_str().to_string(),
            })?;
    player.play();
    Ok(())
}
