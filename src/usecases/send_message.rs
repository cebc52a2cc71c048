//! Send Message: appends the draft to the active room as a local comment.
//!
//! Nothing leaves the process; the comment lives only in the in-memory
//! dataset until the program exits.

use chrono::{DateTime, Utc};

use crate::domain::{comment::Comment, shell_state::ShellState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageCommand {
    /// Identity recorded as the comment sender.
    pub sender: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendMessageError {
    /// Draft is empty after trimming whitespace.
    EmptyMessage,
    /// No room is active (dataset not loaded or has no rooms).
    NoActiveRoom,
}

/// Appends the draft, as typed, to the active room and clears the draft.
///
/// Returns the id of the new comment. On error nothing is appended and
/// the draft is left untouched.
pub fn send_message(
    state: &mut ShellState,
    command: SendMessageCommand,
) -> Result<i64, SendMessageError> {
    if state.draft().is_blank() {
        return Err(SendMessageError::EmptyMessage);
    }
    let text = state.draft().text();

    let room = state
        .active_room_mut()
        .ok_or(SendMessageError::NoActiveRoom)?;
    let id = next_comment_id(room.last_comment_id(), command.at.timestamp_millis());
    room.append_comment(Comment::text(id, command.sender, text, command.at));
    let comment_count = room.comments().len();

    state.conversation_mut().follow_latest(comment_count);
    state.draft_mut().clear();

    Ok(id)
}

/// Synthetic ids are creation milliseconds, bumped past the room's last id
/// so a burst of sends within one millisecond stays ordered and unique.
fn next_comment_id(last_id: Option<i64>, now_ms: i64) -> i64 {
    match last_id {
        Some(last) if last >= now_ms => last + 1,
        _ => now_ms,
    }
}
