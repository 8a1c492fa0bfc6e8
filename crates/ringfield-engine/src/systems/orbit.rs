use crate::components::item::{Item, MotionMode};
use crate::core::scene::Scene;

/// Items in matched pairs: `items[i]` is a solid shape and `effects[i]` its
/// wireframe overlay. Both share motion parameters, so they move in lockstep.
#[derive(Debug, Default)]
pub struct ItemField {
    items: Vec<Item>,
    effects: Vec<Item>,
}

impl ItemField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(pairs: usize) -> Self {
        Self {
            items: Vec::with_capacity(pairs),
            effects: Vec::with_capacity(pairs),
        }
    }

    /// Append a pair. Returns its index in both sequences.
    pub fn push_pair(&mut self, item: Item, effect: Item) -> usize {
        self.items.push(item);
        self.effects.push(effect);
        self.items.len() - 1
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn effects(&self) -> &[Item] {
        &self.effects
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Switch every item to a different motion mode.
    pub fn set_motion(&mut self, motion: MotionMode) {
        for item in self.items.iter_mut().chain(self.effects.iter_mut()) {
            item.set_motion(motion);
        }
    }

    /// One frame of motion: for each pair, spin then move the solid item,
    /// then spin then move its wireframe, all with the same `dt`.
    pub fn animate(&mut self, scene: &mut Scene, dt: f32) {
        for (item, effect) in self.items.iter_mut().zip(self.effects.iter_mut()) {
            step_item(item, scene, dt);
            step_item(effect, scene, dt);
        }
    }
}

fn step_item(item: &mut Item, scene: &mut Scene, dt: f32) {
    match scene.transform_mut(item.mesh()) {
        Some(transform) => {
            item.rotate_item(transform, dt);
            item.animate(transform, dt);
        }
        None => log::warn!("item mesh {:?} missing from scene, skipping", item.mesh()),
    }
}
