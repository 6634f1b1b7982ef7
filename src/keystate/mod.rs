use crate::host::Host;
use crate::keycode::{KeyCode, Layer, Mods};
use crate::process::{process_record_user, UserState};
use crate::unicode::{cycle_unicode_mode, register_unicode};

pub mod button;
pub mod layer;
/// Shorthand names for writing a layout table
pub mod prelude;

/// Shared state
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct Shared;
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct KeyState<State> {
    state: State,
    shared: Shared,
}

/// Something which is like a key (button, layer etc)
trait Keyish {
    /// Whether the key is back at rest, so that its next press is looked up on
    /// the layers active at that time
    fn is_finished(&self) -> bool;
}

/// One matrix position: what it does on each layer, and whether it is down
#[derive(Debug, PartialEq, Eq)]
struct Keys<const LAYERS: usize> {
    layers: [KeyCode; LAYERS],
    button: button::ButtonState,
}

pub struct Keymap<const SIZE: usize, const LAYERS: usize> {
    layers: layer::LayerState<LAYERS>,
    keys: [Keys<LAYERS>; SIZE],
    user: UserState,
}

impl<const SIZE: usize, const LAYERS: usize> Keymap<SIZE, LAYERS> {
    pub fn new(keymap: [[KeyCode; SIZE]; LAYERS]) -> Self {
        let keys: [Keys<LAYERS>; SIZE] = core::array::from_fn(|key| Keys {
            layers: core::array::from_fn(|layer| keymap[layer][key]),
            button: button::ButtonState::new(),
        });
        Keymap {
            layers: layer::LayerState::new(),
            keys,
            user: UserState::default(),
        }
    }

    /// Feeds one matrix scan; every position whose state changed becomes an
    /// event, in matrix order.
    pub fn process<H: Host>(&mut self, keypresses: &[bool; SIZE], host: &mut H) {
        for (index, pressed) in keypresses.iter().enumerate() {
            self.event(index, *pressed, host);
        }
    }

    /// Handles one position going down or up. Repeated states are ignored.
    pub fn event<H: Host>(&mut self, index: usize, pressed: bool, host: &mut H) {
        let Some(key) = self.keys.get_mut(index) else {
            return;
        };

        let (code, registered) = if pressed {
            if !key.button.is_finished() {
                return;
            }
            let (layer, code) = self.layers.resolve(&key.layers);
            key.button.press(code);
            log::trace!("key {} down on layer {}: {:?}", index, layer, code);
            (code, Mods::empty())
        } else {
            match key.button.release() {
                Some((code, registered)) => {
                    log::trace!("key {} up: {:?}", index, code);
                    (code, registered)
                }
                None => return,
            }
        };

        if process_record_user(&mut self.user, code, pressed, host) {
            let registered = self.process_default(code, pressed, registered, host);
            if pressed {
                self.keys[index].button.set_mods(registered);
            }
        }
    }

    /// Returns the modifiers a press registered. On release, `registered` is
    /// what the press returned; modifiers that were already held when it
    /// went down are left alone.
    fn process_default<H: Host>(
        &mut self,
        code: KeyCode,
        pressed: bool,
        registered: Mods,
        host: &mut H,
    ) -> Mods {
        match (code, pressed) {
            (KeyCode::Md(mods, key), true) => {
                let added = mods.difference(host.mods());
                host.register_mods(added);
                host.register_code(key);
                return added;
            }
            (KeyCode::Md(_, key), false) => {
                host.unregister_code(key);
                host.unregister_mods(registered);
            }

            (KeyCode::Kb(key), true) => host.register_code(key),
            (KeyCode::Kb(key), false) => host.unregister_code(key),

            (KeyCode::La(layer), true) => self.layers.layer_on(layer),
            (KeyCode::La(layer), false) => self.layers.layer_off(layer),

            (KeyCode::Uc(code_point), true) => register_unicode(host, code_point),

            (KeyCode::Media(usage), true) => host.register_consumer(usage),
            (KeyCode::Media(usage), false) => host.unregister_consumer(usage),

            (KeyCode::UcMod, true) => {
                let backwards = host.mods().intersects(Mods::SHIFT);
                cycle_unicode_mode(host, backwards);
            }

            (KeyCode::Uc(_), false)
            | (KeyCode::UcMod, false)
            | (KeyCode::Ck(_), _)
            | (KeyCode::Trns, _) => (),
        }
        Mods::empty()
    }

    /// The highest layer switched on
    pub fn active_layer(&self) -> Layer {
        self.layers.highest()
    }

    /// What the handler last saw of the shift keys
    pub fn shift_pressed(&self) -> bool {
        self.user.shift_pressed
    }

    /// Whether any key is held down
    pub fn is_idle(&self) -> bool {
        self.keys.iter().all(|key| key.button.is_finished())
    }

    /// The code position `index` went down as, if it's held
    pub fn held_code(&self, index: usize) -> Option<KeyCode> {
        self.keys.get(index).and_then(|key| key.button.get_code())
    }
}
