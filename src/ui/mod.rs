//! UI layer: terminal rendering and input for the chat shell.

mod event_source;
mod message_input;
mod message_rendering;
pub mod shell;
mod styles;
mod terminal;
mod text_fit;
mod view;

pub(crate) use event_source::CrosstermEventSource;
