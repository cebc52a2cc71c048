use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::domain::{
    room::Room,
    shell_state::{ActivePane, ShellState},
};

use super::message_input::render_message_input;
use super::message_rendering::{
    build_conversation, comment_index_to_row, fragment_to_list_item, render_comment,
};
use super::{styles, text_fit};

const ROOM_LIST_TITLE: &str = "Chat Rooms";
const GROUP_LABEL: &str = "Group Chat";
const BACK_HINT: &str = "< h: back";
const ACTIVE_ROOM_MARKER: &str = "● ";
const INACTIVE_ROOM_MARKER: &str = "  ";

pub fn render(frame: &mut Frame<'_>, state: &mut ShellState, current_user: &str) {
    let [content_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .areas(frame.area());

    let status = Paragraph::new(status_line(state)).style(styles::status_line_style());
    frame.render_widget(status, status_area);

    if state.is_loading() {
        render_notice(frame, content_area, "Loading...");
        return;
    }

    let layout = state.layout();
    if !layout.is_compact() {
        let [rooms_area, conversation_area] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .areas(content_area);

        render_room_list(frame, rooms_area, state, current_user);
        render_conversation(frame, conversation_area, state, current_user);
    } else if layout.shows_conversation() {
        render_conversation(frame, content_area, state, current_user);
    } else {
        render_room_list(frame, content_area, state, current_user);
    }
}

fn render_notice(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let vertical_pad = area.height.saturating_sub(1) / 2;
    let [_, line_area, _] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_pad),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

    let notice = Paragraph::new(message)
        .style(styles::notice_style())
        .alignment(Alignment::Center);
    frame.render_widget(notice, line_area);
}

fn border_style(is_active: bool) -> ratatui::style::Style {
    if is_active {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    }
}

fn render_room_list(frame: &mut Frame<'_>, area: Rect, state: &ShellState, current_user: &str) {
    let is_active = state.active_pane() == ActivePane::RoomList;
    let title_alignment = if state.layout().is_compact() {
        Alignment::Center
    } else {
        Alignment::Left
    };

    // Inner width = area width - 2 (borders)
    let inner_width = area.width.saturating_sub(2) as usize;
    let active_index = state.active_room_index();
    let items: Vec<ListItem<'static>> = state
        .rooms()
        .iter()
        .enumerate()
        .map(|(index, room)| {
            room_list_item(room, Some(index) == active_index, inner_width, current_user)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(ROOM_LIST_TITLE)
                .title_alignment(title_alignment)
                .borders(Borders::ALL)
                .border_style(border_style(is_active)),
        )
        .highlight_style(styles::selected_row_style());

    let mut list_state = ListState::default();
    list_state.select(state.room_list().highlighted());
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn room_list_item(
    room: &Room,
    is_active: bool,
    width: usize,
    current_user: &str,
) -> ListItem<'static> {
    ListItem::new(room_list_lines(room, is_active, width, current_user))
}

fn room_list_lines(
    room: &Room,
    is_active: bool,
    width: usize,
    current_user: &str,
) -> Vec<Line<'static>> {
    let marker = if is_active {
        ACTIVE_ROOM_MARKER
    } else {
        INACTIVE_ROOM_MARKER
    };
    let text_width = width.saturating_sub(INACTIVE_ROOM_MARKER.len());

    let preview = room
        .comments()
        .iter()
        .rev()
        .find_map(|comment| render_comment(comment, room, current_user))
        .map(|fragment| fragment.preview())
        .filter(|preview| !preview.is_empty())
        .unwrap_or_else(|| "No messages yet".to_owned());

    vec![
        Line::from(vec![
            Span::styled(marker.to_owned(), styles::active_room_marker_style()),
            Span::styled(
                text_fit::truncate_to_width(room.name(), text_width),
                styles::room_name_style(),
            ),
        ]),
        Line::from(vec![
            Span::raw(INACTIVE_ROOM_MARKER.to_owned()),
            Span::styled(
                text_fit::truncate_to_width(&preview, text_width),
                styles::room_preview_style(),
            ),
        ]),
    ]
}

fn render_conversation(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &mut ShellState,
    current_user: &str,
) {
    // 3 lines each for header and input: border + text + border
    let [header_area, messages_area, input_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .areas(area);

    let active_pane = state.active_pane();
    let compact = state.layout().is_compact();

    let header = Paragraph::new(conversation_header(state.active_room(), compact)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(active_pane == ActivePane::Conversation)),
    );
    frame.render_widget(header, header_area);

    render_comments(frame, messages_area, state, current_user);
    render_message_input(frame, input_area, state.draft(), active_pane);
}

fn conversation_header(room: Option<&Room>, compact: bool) -> Line<'static> {
    let mut spans = Vec::new();
    if compact {
        spans.push(Span::styled(format!("{BACK_HINT}  "), styles::back_hint_style()));
    }

    let Some(room) = room else {
        spans.push(Span::styled("Select a room".to_owned(), styles::notice_style()));
        return Line::from(spans);
    };

    spans.push(Span::styled(
        room.name().to_owned(),
        styles::conversation_title_style(),
    ));
    if room.is_group() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(GROUP_LABEL.to_owned(), styles::group_label_style()));
    }

    Line::from(spans)
}

fn render_comments(frame: &mut Frame<'_>, area: Rect, state: &mut ShellState, current_user: &str) {
    let is_active = state.active_pane() == ActivePane::Conversation;
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(border_style(is_active));

    let inner_width = area.width.saturating_sub(2) as usize;
    let rendered = match state.active_room() {
        Some(room) => build_conversation(room, current_user),
        None => Vec::new(),
    };

    if rendered.is_empty() {
        let panel = Paragraph::new("No messages yet")
            .style(styles::notice_style())
            .block(block);
        frame.render_widget(panel, area);
        return;
    }

    let items: Vec<ListItem<'static>> = rendered
        .iter()
        .map(|entry| fragment_to_list_item(&entry.fragment, inner_width))
        .collect();

    let viewport_height = area.height as usize;
    let row = state
        .conversation()
        .selected_index()
        .and_then(|comment_index| comment_index_to_row(&rendered, comment_index));

    if let Some(row) = row {
        state
            .conversation_mut()
            .update_scroll_offset(row, viewport_height);
    }

    let mut list = List::new(items).block(block);
    if is_active {
        list = list.highlight_style(styles::selected_row_style());
    }

    let mut list_state = ListState::default();
    list_state.select(row);
    *list_state.offset_mut() = state.conversation().scroll_offset();
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn status_line(state: &ShellState) -> String {
    if state.is_loading() {
        return "loading chat rooms... | q: quit".to_owned();
    }

    let back = if state.layout().is_compact() {
        "h/Esc: back to rooms"
    } else {
        "h/Esc: room list"
    };
    match state.active_pane() {
        ActivePane::RoomList => "j/k: navigate | l/Enter: open room | q: quit".to_owned(),
        ActivePane::Conversation => {
            format!("j/k: navigate | i: compose | o: open attachment | {back} | q: quit")
        }
        ActivePane::Draft => "Enter: send | Esc: cancel | type your message".to_owned(),
    }
}
