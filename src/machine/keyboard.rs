use super::basics::NUM_KEYS;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// A host-specific key identifier, as delivered by the windowing layer.
pub type HostKey = i32;

lazy_static! {
    /// Host keycodes for '0'..'9' and 'a'..'f' mapped onto the sixteen
    /// logical keys.
    static ref DEFAULT_KEYMAP: HashMap<HostKey, u8> = vec![
        ('0' as HostKey, 0x0),
        ('1' as HostKey, 0x1),
        ('2' as HostKey, 0x2),
        ('3' as HostKey, 0x3),
        ('4' as HostKey, 0x4),
        ('5' as HostKey, 0x5),
        ('6' as HostKey, 0x6),
        ('7' as HostKey, 0x7),
        ('8' as HostKey, 0x8),
        ('9' as HostKey, 0x9),
        ('a' as HostKey, 0xA),
        ('b' as HostKey, 0xB),
        ('c' as HostKey, 0xC),
        ('d' as HostKey, 0xD),
        ('e' as HostKey, 0xE),
        ('f' as HostKey, 0xF),
    ]
    .into_iter()
    .collect();
}

/// The 16-key input device, together with the table translating host
/// keycodes to logical key indices. Host keys without a table entry fall
/// through every operation unchanged.
pub struct Keyboard {
    keys: [bool; NUM_KEYS],
    keymap: HashMap<HostKey, u8>,
}

impl Keyboard {
    pub fn new() -> Keyboard {
        Keyboard::with_keymap(DEFAULT_KEYMAP.clone())
    }

    pub fn with_keymap(keymap: HashMap<HostKey, u8>) -> Keyboard {
        Keyboard {
            keys: [false; NUM_KEYS],
            keymap,
        }
    }

    /// Marks the logical key behind a host keycode as pressed.
    pub fn map_key_down(&mut self, host_key: HostKey) {
        if let Some(key) = self.translate(host_key) {
            self.keys[key as usize] = true;
        }
    }

    /// Marks the logical key behind a host keycode as released.
    pub fn map_key_up(&mut self, host_key: HostKey) {
        if let Some(key) = self.translate(host_key) {
            self.keys[key as usize] = false;
        }
    }

    fn translate(&self, host_key: HostKey) -> Option<u8> {
        self.keymap.get(&host_key).copied()
    }

    /// Whether a logical key is pressed. Indices past the keypad report
    /// false.
    pub fn is_key_down(&self, key: u8) -> bool {
        (key as usize) < NUM_KEYS && self.keys[key as usize]
    }

    /// Whether a logical key is released. Indices past the keypad report
    /// false here as well, so an invalid key is neither down nor up.
    pub fn is_key_up(&self, key: u8) -> bool {
        (key as usize) < NUM_KEYS && !self.keys[key as usize]
    }
}
