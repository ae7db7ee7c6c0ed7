use crate::types::Interaction;

/// Key codes the tag field cares about.
///
/// Hosts map their platform key events to these codes. Only
/// [`KeyCode::Backspace`] changes state, and only while the buffer is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// A character key.
    Char(char),
    /// The Backspace key. Re-opens the last tag when the buffer is empty.
    Backspace,
    /// The Enter/Return key. Hosts report the submit gesture as
    /// [`InputEvent::Submit`] instead.
    Enter,
    Esc,
}

bitflags::bitflags! {
    /// Keyboard modifier flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
        const META  = 0b1000;
    }
}

/// A key press event with optional modifiers.
///
/// The engine matches on `code` only; `mods` is carried for hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the key press.
    pub mods: Modifiers,
}

impl KeyEvent {
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: Modifiers::empty(),
        }
    }
}

/// Raw events reported by the edit surface or by a rendered tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The full content of the edit surface after a change (not a delta).
    TextChanged(String),
    /// A key press on the edit surface.
    Key(KeyEvent),
    /// The surface's return/enter signal.
    Submit,
    /// An interaction on the tag at `index` (tap, click, ...).
    Interact {
        index: usize,
        interaction: Interaction,
    },
}
