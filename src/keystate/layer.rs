use crate::keycode::{KeyCode, Layer};

use heapless::Vec;

/// Momentary layers currently switched on. Layer 0 is always underneath.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LayerState<const LAYERS: usize> {
    active: Vec<Layer, LAYERS>,
}

impl<const LAYERS: usize> LayerState<LAYERS> {
    pub fn new() -> Self {
        Self { active: Vec::new() }
    }

    pub fn layer_on(&mut self, layer: Layer) {
        if layer == 0 || layer as usize >= LAYERS {
            return;
        }
        self.active.retain(|layer2| layer2 != &layer);
        if self.active.push(layer).is_ok() {
            log::debug!("layer {} on", layer);
        }
        // Highest layer last
        self.active.sort_unstable();
    }

    /// Switches the layer off, even if another key is still holding it.
    pub fn layer_off(&mut self, layer: Layer) {
        let before = self.active.len();
        self.active.retain(|layer2| layer2 != &layer);
        if self.active.len() != before {
            log::debug!("layer {} off", layer);
        }
    }

    pub fn is_on(&self, layer: Layer) -> bool {
        layer == 0 || self.active.contains(&layer)
    }

    /// The highest layer switched on
    pub fn highest(&self) -> Layer {
        self.active.last().copied().unwrap_or(0)
    }

    /// What a key does right now: the highest active layer whose code isn't
    /// transparent, falling back to layer 0. All transparent means nothing.
    pub fn resolve(&self, codes: &[KeyCode; LAYERS]) -> (Layer, KeyCode) {
        self.active
            .iter()
            .rev()
            .chain(core::iter::once(&0))
            .map(|layer| (*layer, codes[*layer as usize]))
            .find(|(_, code)| *code != KeyCode::Trns)
            .unwrap_or((0, KeyCode::NO))
    }
}
