use super::room::ChatDataset;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
    /// Terminal viewport changed size (columns x rows).
    Resized { width: u16, height: u16 },
    /// The startup fetch delivered the dataset.
    DatasetLoaded(ChatDataset),
}

/// A key press normalized to a name: a single character (`"j"`) or a
/// named key (`"enter"`, `"esc"`, `"backspace"`, `"left"`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }

    /// Returns the character when the key is a single printable char.
    pub fn as_char(&self) -> Option<char> {
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if !ch.is_control() => Some(ch),
            _ => None,
        }
    }
}
