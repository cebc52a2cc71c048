//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Panel styles
// =============================================================================

pub fn active_panel_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn inactive_panel_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Full-screen notices such as "Loading...".
pub fn notice_style() -> Style {
    Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::ITALIC)
}

pub fn status_line_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn selected_row_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
}

// =============================================================================
// Room list styles
// =============================================================================

pub fn room_name_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Last comment preview under the room name (dimmed).
pub fn room_preview_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn active_room_marker_style() -> Style {
    Style::default().fg(Color::Green)
}

// =============================================================================
// Conversation styles
// =============================================================================

pub fn conversation_title_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// "Group Chat" label next to the room name.
pub fn group_label_style() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn back_hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn message_sender_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Sender name on bubbles written by the local user.
pub fn own_sender_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

pub fn message_time_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn message_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Attachment lines like `[Image] photo.jpg`.
pub fn message_media_style() -> Style {
    Style::default().fg(Color::Cyan)
}

// =============================================================================
// Input styles
// =============================================================================

pub fn input_prompt_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn input_placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
