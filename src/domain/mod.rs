//! Domain layer: core entities and state rules.

pub mod comment;
pub mod conversation_state;
pub mod events;
pub mod message_input_state;
pub mod room;
pub mod room_list_state;
pub mod shell_state;
