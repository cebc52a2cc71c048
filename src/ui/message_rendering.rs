//! Conversation bubble rendering.
//!
//! Every comment type maps to a fragment: a sender line, an optional
//! attachment line, the message body and the local `HH:MM` time. Types the
//! client does not know produce no fragment and are skipped.

use chrono::{DateTime, Local, Utc};
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::ListItem,
};

use crate::domain::{
    comment::{Comment, CommentKind},
    room::Room,
};

use super::{styles, text_fit};

/// Document names are cut to this many columns.
const DOCUMENT_NAME_WIDTH: usize = 28;
const UNKNOWN_TIME: &str = "??:??";
const FALLBACK_FILE_NAME: &str = "file";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attachment {
    Image { name: String },
    Video { name: String, poster: Option<String> },
    Document { name: String },
}

impl Attachment {
    fn label_lines(&self) -> Vec<String> {
        match self {
            Self::Image { name } => vec![format!("[Image] {name}")],
            Self::Video { name, poster } => {
                let mut lines = vec![format!("[Video] {name}")];
                if let Some(poster) = poster {
                    lines.push(format!("poster: {poster}"));
                }
                lines
            }
            Self::Document { name } => vec![format!(
                "📎 {}",
                text_fit::truncate_to_width(name, DOCUMENT_NAME_WIDTH)
            )],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageFragment {
    pub sender: String,
    pub attachment: Option<Attachment>,
    pub text: String,
    pub time: String,
    /// Written by the local user; drawn right-aligned.
    pub own: bool,
}

impl MessageFragment {
    /// One-line summary used by the room list.
    pub fn preview(&self) -> String {
        if !self.text.trim().is_empty() {
            return self.text.split_whitespace().collect::<Vec<_>>().join(" ");
        }
        self.attachment
            .as_ref()
            .and_then(|attachment| attachment.label_lines().into_iter().next())
            .unwrap_or_default()
    }
}

/// A fragment together with the position of its comment in the room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedComment {
    pub comment_index: usize,
    pub fragment: MessageFragment,
}

pub fn render_comment(
    comment: &Comment,
    room: &Room,
    current_user: &str,
) -> Option<MessageFragment> {
    let attachment = match comment.kind {
        CommentKind::Text => None,
        CommentKind::Image => Some(Attachment::Image {
            name: attachment_name(comment),
        }),
        CommentKind::Video => Some(Attachment::Video {
            name: attachment_name(comment),
            poster: comment
                .thumbnail_url
                .clone()
                .filter(|url| !url.trim().is_empty()),
        }),
        CommentKind::Document => Some(Attachment::Document {
            name: attachment_name(comment),
        }),
        CommentKind::Unknown => return None,
    };

    Some(MessageFragment {
        sender: room.participant_name(&comment.sender).to_owned(),
        attachment,
        text: comment.message.clone(),
        time: format_time(comment.timestamp),
        own: comment.sender == current_user,
    })
}

pub fn build_conversation(room: &Room, current_user: &str) -> Vec<RenderedComment> {
    room.comments()
        .iter()
        .enumerate()
        .filter_map(|(comment_index, comment)| {
            render_comment(comment, room, current_user).map(|fragment| RenderedComment {
                comment_index,
                fragment,
            })
        })
        .collect()
}

/// Maps a comment index to its row in the rendered list. A comment that
/// produced no fragment resolves to the next rendered one, or the last.
pub fn comment_index_to_row(rendered: &[RenderedComment], comment_index: usize) -> Option<usize> {
    rendered
        .iter()
        .position(|entry| entry.comment_index >= comment_index)
        .or_else(|| rendered.len().checked_sub(1))
}

pub fn fragment_to_list_item(fragment: &MessageFragment, width: usize) -> ListItem<'static> {
    ListItem::new(bubble_lines(fragment, width))
}

/// Lays a fragment out as a bubble that takes at most three quarters of `width`.
fn bubble_lines(fragment: &MessageFragment, width: usize) -> Vec<Line<'static>> {
    let bubble_width = (width * 3 / 4).max(10).min(width.max(1));
    let alignment = if fragment.own {
        Alignment::Right
    } else {
        Alignment::Left
    };
    let sender_style = if fragment.own {
        styles::own_sender_style()
    } else {
        styles::message_sender_style()
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            text_fit::truncate_to_width(&fragment.sender, bubble_width),
            sender_style,
        ),
    ])];

    if let Some(attachment) = &fragment.attachment {
        for label in attachment.label_lines() {
            for row in text_fit::wrap_to_width(&label, bubble_width) {
                lines.push(Line::from(Span::styled(row, styles::message_media_style())));
            }
        }
    }

    if !fragment.text.trim().is_empty() {
        for row in text_fit::wrap_to_width(&fragment.text, bubble_width) {
            lines.push(Line::from(Span::styled(row, styles::message_text_style())));
        }
    }

    lines.push(Line::from(Span::styled(
        fragment.time.clone(),
        styles::message_time_style(),
    )));

    let mut lines: Vec<Line<'static>> = lines
        .into_iter()
        .map(|line| line.alignment(alignment))
        .collect();
    lines.push(Line::default());
    lines
}

fn attachment_name(comment: &Comment) -> String {
    comment
        .file_name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .or_else(|| {
            comment
                .attachment_url()
                .and_then(|url| url.rsplit('/').next())
                .filter(|segment| !segment.is_empty())
        })
        .unwrap_or(FALLBACK_FILE_NAME)
        .to_owned()
}

pub fn format_time(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(at) => at.with_timezone(&Local).format("%H:%M").to_string(),
        None => UNKNOWN_TIME.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::{
        domain::room::RoomType,
        test_support::{self, AGENT, LOCAL_USER},
    };

    fn group_room(comments: Vec<Comment>) -> Room {
        Room::new(
            test_support::room_info(1, "Product A", RoomType::Group),
            comments,
        )
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn text_comment_shows_sender_message_and_time() {
        let at = Utc.with_ymd_and_hms(2024, 5, 20, 9, 30, 0).unwrap();
        let comment = Comment::text(1, AGENT, "Selamat malam", at);
        let room = group_room(vec![comment.clone()]);

        let fragment = render_comment(&comment, &room, LOCAL_USER).expect("text renders");

        assert_eq!(fragment.sender, "Agent");
        assert_eq!(fragment.text, "Selamat malam");
        assert_eq!(fragment.attachment, None);
        assert_eq!(
            fragment.time,
            at.with_timezone(&Local).format("%H:%M").to_string()
        );
        assert!(!fragment.own);
    }

    #[test]
    fn own_comments_are_flagged() {
        let comment = Comment::text(1, LOCAL_USER, "hi", Utc::now());
        let room = group_room(vec![comment.clone()]);

        let fragment = render_comment(&comment, &room, LOCAL_USER).expect("text renders");

        assert!(fragment.own);
        assert_eq!(fragment.sender, "King Customer");
    }

    #[test]
    fn unknown_sender_falls_back_to_placeholder_name() {
        let comment = Comment::text(1, "ghost@mail.com", "boo", Utc::now());
        let room = group_room(vec![comment.clone()]);

        let fragment = render_comment(&comment, &room, LOCAL_USER).expect("text renders");

        assert_eq!(fragment.sender, "Unknown");
    }

    #[test]
    fn image_comment_carries_image_label() {
        let comment = test_support::media_comment(2, CommentKind::Image, "photo.jpg");
        let room = group_room(vec![comment.clone()]);

        let fragment = render_comment(&comment, &room, LOCAL_USER).expect("image renders");

        assert_eq!(
            fragment.attachment.expect("attachment").label_lines(),
            vec!["[Image] photo.jpg".to_owned()]
        );
    }

    #[test]
    fn video_comment_adds_poster_line_when_thumbnail_exists() {
        let mut comment = test_support::media_comment(3, CommentKind::Video, "clip.mp4");
        comment.thumbnail_url = Some("https://example.com/clip.jpg".to_owned());
        let room = group_room(vec![comment.clone()]);

        let fragment = render_comment(&comment, &room, LOCAL_USER).expect("video renders");

        assert_eq!(
            fragment.attachment.expect("attachment").label_lines(),
            vec![
                "[Video] clip.mp4".to_owned(),
                "poster: https://example.com/clip.jpg".to_owned(),
            ]
        );
    }

    #[test]
    fn video_without_thumbnail_has_single_label() {
        let comment = test_support::media_comment(3, CommentKind::Video, "clip.mp4");
        let room = group_room(vec![comment.clone()]);

        let fragment = render_comment(&comment, &room, LOCAL_USER).expect("video renders");

        assert_eq!(fragment.attachment.expect("attachment").label_lines().len(), 1);
    }

    #[test]
    fn document_name_is_truncated_with_ellipsis() {
        let comment = test_support::media_comment(
            4,
            CommentKind::Document,
            "a-really-long-quarterly-financial-report-2024.pdf",
        );
        let room = group_room(vec![comment.clone()]);

        let fragment = render_comment(&comment, &room, LOCAL_USER).expect("document renders");
        let label = fragment.attachment.expect("attachment").label_lines().remove(0);

        assert!(label.starts_with("📎 "));
        assert!(label.ends_with('…'));
        assert_eq!(
            text_fit::display_width(label.trim_start_matches("📎 ")),
            DOCUMENT_NAME_WIDTH
        );
    }

    #[test]
    fn attachment_name_falls_back_to_url_segment() {
        let mut comment = test_support::media_comment(5, CommentKind::Image, "photo.jpg");
        comment.file_name = None;

        assert_eq!(attachment_name(&comment), "photo.jpg");

        comment.file_url = None;
        assert_eq!(attachment_name(&comment), FALLBACK_FILE_NAME);
    }

    #[test]
    fn unknown_comment_renders_nothing() {
        let mut comment = Comment::text(6, AGENT, "sticker", Utc::now());
        comment.kind = CommentKind::Unknown;
        let room = group_room(vec![comment.clone()]);

        assert_eq!(render_comment(&comment, &room, LOCAL_USER), None);
    }

    #[test]
    fn preview_prefers_text_then_attachment_label() {
        let comment = test_support::media_comment(7, CommentKind::Image, "photo.jpg");
        let room = group_room(vec![comment.clone()]);
        let mut fragment = render_comment(&comment, &room, LOCAL_USER).expect("image renders");

        assert_eq!(fragment.preview(), "[Image] photo.jpg");

        fragment.text = "  look\n at this ".to_owned();
        assert_eq!(fragment.preview(), "look at this");
    }

    #[test]
    fn missing_timestamp_renders_placeholder_time() {
        assert_eq!(format_time(None), "??:??");
    }

    #[test]
    fn conversation_skips_unknown_comments_and_maps_rows() {
        let mut unknown = Comment::text(2, AGENT, "sticker", Utc::now());
        unknown.kind = CommentKind::Unknown;
        let room = group_room(vec![
            Comment::text(1, AGENT, "first", Utc::now()),
            unknown,
            Comment::text(3, LOCAL_USER, "third", Utc::now()),
        ]);

        let rendered = build_conversation(&room, LOCAL_USER);

        assert_eq!(rendered.len(), 2);
        assert_eq!(comment_index_to_row(&rendered, 0), Some(0));
        assert_eq!(comment_index_to_row(&rendered, 1), Some(1));
        assert_eq!(comment_index_to_row(&rendered, 2), Some(1));
        assert_eq!(comment_index_to_row(&rendered, 9), Some(1));
        assert_eq!(comment_index_to_row(&[], 0), None);
    }

    #[test]
    fn bubble_wraps_text_to_three_quarters_of_width() {
        let fragment = MessageFragment {
            sender: "Agent".to_owned(),
            attachment: None,
            text: "one two three four five six seven eight".to_owned(),
            time: "09:30".to_owned(),
            own: false,
        };

        let wide = bubble_lines(&fragment, 80);
        let narrow = bubble_lines(&fragment, 16);

        // sender, text, time, spacer
        assert_eq!(wide.len(), 4);
        assert!(narrow.len() > wide.len());
        assert!(narrow
            .iter()
            .all(|line| text_fit::display_width(&line_text(line)) <= 12));
        assert_eq!(fragment_to_list_item(&fragment, 80).height(), 4);
    }

    #[test]
    fn own_bubble_is_right_aligned_and_skips_empty_body() {
        let fragment = MessageFragment {
            sender: "King Customer".to_owned(),
            attachment: Some(Attachment::Image {
                name: "photo.jpg".to_owned(),
            }),
            text: String::new(),
            time: "10:00".to_owned(),
            own: true,
        };

        let lines = bubble_lines(&fragment, 60);
        let texts: Vec<String> = lines.iter().map(line_text).collect();

        assert_eq!(
            texts,
            vec![
                "King Customer".to_owned(),
                "[Image] photo.jpg".to_owned(),
                "10:00".to_owned(),
                String::new(),
            ]
        );
        assert!(lines[..3]
            .iter()
            .all(|line| line.alignment == Some(Alignment::Right)));
    }

    #[test]
    fn other_bubbles_are_left_aligned() {
        let fragment = MessageFragment {
            sender: "Agent".to_owned(),
            attachment: None,
            text: "hello".to_owned(),
            time: "10:00".to_owned(),
            own: false,
        };

        let lines = bubble_lines(&fragment, 60);

        assert_eq!(lines[0].alignment, Some(Alignment::Left));
    }
}
