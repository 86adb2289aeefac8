//! Keyboard shortcuts
//!
//! Maps key events to editor commands. Nothing fires while a text input or
//! text area has focus.

/// Key identity, independent of the host toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Delete,
    Backspace,
    Escape,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
    /// Cmd on macOS
    pub meta: bool,
    pub shift: bool,
}

impl KeyEvent {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
            shift: false,
        }
    }

    pub fn ctrl(c: char) -> Self {
        Self {
            key: Key::Char(c),
            ctrl: true,
            meta: false,
            shift: false,
        }
    }

    pub fn ctrl_shift(c: char) -> Self {
        Self {
            shift: true,
            ..Self::ctrl(c)
        }
    }

    fn command_modifier(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// What currently holds keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Canvas,
    TextInput,
    TextArea,
}

impl Focus {
    pub fn is_text_entry(&self) -> bool {
        matches!(self, Focus::TextInput | Focus::TextArea)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    DeleteSelected,
    /// Clear the selection, or close overlays when nothing is selected
    Escape,
    ToggleSnap,
    Undo,
    Redo,
}

/// Resolve a key event to a command.
pub fn resolve(event: &KeyEvent, focus: Focus) -> Option<EditorCommand> {
    if focus.is_text_entry() {
        return None;
    }

    match event.key {
        Key::Delete | Key::Backspace => Some(EditorCommand::DeleteSelected),
        Key::Escape => Some(EditorCommand::Escape),
        Key::Char(c) => {
            let c = c.to_ascii_lowercase();
            if event.command_modifier() {
                match (c, event.shift) {
                    ('z', false) => Some(EditorCommand::Undo),
                    ('z', true) | ('y', _) => Some(EditorCommand::Redo),
                    _ => None,
                }
            } else if c == 'g' {
                Some(EditorCommand::ToggleSnap)
            } else {
                None
            }
        }
    }
}
