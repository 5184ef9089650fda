//! Capability surface over the rendering subsystem's scene objects.
//!
//! The core never touches a concrete rendering type: everything it needs from
//! a scene object is the [`AnimationRig`] trait — named player slots, the
//! players bound to them, and the object's immediate children (an object may be
//! a composite of nested sub-objects, each holding its own bindings). Adapters
//! over a real engine implement this; [`RigNode`] is the in-crate reference
//! implementation used by tests.

use crate::clip::Clip;

/// Playback handle for one bound clip.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipPlayer {
    clip: Clip,
    playing: bool,
}

impl ClipPlayer {
    /// Wrap a clip in a stopped player.
    pub fn new(clip: Clip) -> Self {
        Self {
            clip,
            playing: false,
        }
    }

    pub fn clip(&self) -> &Clip {
        &self.clip
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

/// What the binder needs from a scene object: named slots holding players,
/// and immediate children carrying their own slots.
pub trait AnimationRig {
    /// Keys of every slot currently holding a player, in attach order.
    fn slot_keys(&self) -> Vec<String>;

    fn player(&self, key: &str) -> Option<&ClipPlayer>;

    fn player_mut(&mut self, key: &str) -> Option<&mut ClipPlayer>;

    /// Bind `player` under `key`, replacing any existing binding for that key.
    fn attach(&mut self, key: &str, player: ClipPlayer);

    fn children(&self) -> Vec<&dyn AnimationRig>;

    fn children_mut(&mut self) -> Vec<&mut dyn AnimationRig>;
}

/// Reference [`AnimationRig`]: insertion-ordered slots plus nested children.
#[derive(Clone, Debug, Default)]
pub struct RigNode {
    name: String,
    slots: Vec<(String, ClipPlayer)>,
    children: Vec<RigNode>,
}

impl RigNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_child(&mut self, child: RigNode) -> &mut RigNode {
        self.children.push(child);
        self.children.last_mut().unwrap()
    }

    pub fn child(&self, name: &str) -> Option<&RigNode> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut RigNode> {
        self.children.iter_mut().find(|c| c.name == name)
    }
}

impl AnimationRig for RigNode {
    fn slot_keys(&self) -> Vec<String> {
        self.slots.iter().map(|(k, _)| k.clone()).collect()
    }

    fn player(&self, key: &str) -> Option<&ClipPlayer> {
        self.slots.iter().find(|(k, _)| k == key).map(|(_, p)| p)
    }

    fn player_mut(&mut self, key: &str) -> Option<&mut ClipPlayer> {
        self.slots
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, p)| p)
    }

    fn attach(&mut self, key: &str, player: ClipPlayer) {
        if let Some(slot) = self.slots.iter_mut().find(|(k, _)| k == key) {
            slot.1 = player;
        } else {
            self.slots.push((key.to_string(), player));
        }
    }

    fn children(&self) -> Vec<&dyn AnimationRig> {
        self.children.iter().map(|c| c as &dyn AnimationRig).collect()
    }

    fn children_mut(&mut self) -> Vec<&mut dyn AnimationRig> {
        self.children
            .iter_mut()
            .map(|c| c as &mut dyn AnimationRig)
            .collect()
    }
}
