//! Draft input field rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::domain::{message_input_state::MessageInputState, shell_state::ActivePane};

use super::styles;

const PLACEHOLDER_TEXT: &str = "Type a message here...";

const PROMPT_SYMBOL: &str = "> ";

pub fn render_message_input(
    frame: &mut Frame<'_>,
    area: Rect,
    input_state: &MessageInputState,
    active_pane: ActivePane,
) {
    let is_focused = active_pane == ActivePane::Draft;

    let border_style = if is_focused {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let text_width = usize::from(area.width)
        .saturating_sub(2)
        .saturating_sub(PROMPT_SYMBOL.len());
    let window = DraftWindow::fit(input_state, text_width);

    let paragraph = Paragraph::new(build_input_line(input_state, &window)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(paragraph, area);

    if is_focused {
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(PROMPT_SYMBOL.len() as u16)
            .saturating_add(window.cursor_column.min(u16::MAX as usize) as u16);
        let cursor_y = area.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

/// The slice of the draft that fits the field, scrolled so the cursor stays visible.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DraftWindow {
    visible: String,
    cursor_column: usize,
}

impl DraftWindow {
    fn fit(input_state: &MessageInputState, width: usize) -> Self {
        let chars: Vec<char> = input_state.text().chars().collect();
        let cursor = input_state.cursor_position().min(chars.len());
        let width = width.max(1);

        // Leave one column for the cursor cell after the last char.
        let mut start = cursor;
        let mut before_cursor = 0;
        while start > 0 {
            let next = char_width(chars[start - 1]);
            if before_cursor + next + 1 > width {
                break;
            }
            before_cursor += next;
            start -= 1;
        }

        let mut used = 0;
        let visible: String = chars[start..]
            .iter()
            .take_while(|ch| {
                used += char_width(**ch);
                used <= width
            })
            .collect();

        Self {
            visible,
            cursor_column: before_cursor,
        }
    }
}

fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

fn build_input_line(input_state: &MessageInputState, window: &DraftWindow) -> Line<'static> {
    let prompt = Span::styled(PROMPT_SYMBOL.to_owned(), styles::input_prompt_style());

    if input_state.is_empty() {
        Line::from(vec![
            prompt,
            Span::styled(PLACEHOLDER_TEXT.to_owned(), styles::input_placeholder_style()),
        ])
    } else {
        Line::from(vec![
            prompt,
            Span::styled(window.visible.clone(), styles::input_text_style()),
        ])
    }
}
