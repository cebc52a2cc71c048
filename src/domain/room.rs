use serde::Deserialize;

use super::comment::{Comment, CommentKind};

/// Display name used when a sender is not among the room participants.
pub const UNKNOWN_PARTICIPANT: &str = "Unknown";

/// Type of room for UI rendering purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Group,
    /// 1-to-1 conversation. Also used for missing or unknown tags.
    #[default]
    #[serde(other)]
    Direct,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoomInfo {
    pub id: i64,
    pub name: String,
    /// Avatar URL. Images are not drawn in the terminal.
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(rename = "participant", default)]
    pub participants: Vec<Participant>,
    #[serde(rename = "type", default)]
    pub room_type: RoomType,
}

/// A conversation container. Comments are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Room {
    #[serde(rename = "room")]
    info: RoomInfo,
    #[serde(default)]
    comments: Vec<Comment>,
}

impl Room {
    pub fn new(info: RoomInfo, comments: Vec<Comment>) -> Self {
        Self { info, comments }
    }

    pub fn id(&self) -> i64 {
        self.info.id
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn info(&self) -> &RoomInfo {
        &self.info
    }

    pub fn is_group(&self) -> bool {
        self.info.room_type == RoomType::Group
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn last_comment_id(&self) -> Option<i64> {
        self.comments.last().map(|comment| comment.id)
    }

    pub fn participant_name(&self, sender_id: &str) -> &str {
        self.info
            .participants
            .iter()
            .find(|participant| participant.id == sender_id)
            .map(|participant| participant.name.as_str())
            .unwrap_or(UNKNOWN_PARTICIPANT)
    }

    /// Maps a comment index to the drawn comment it stands for: the first one
    /// at or after `index` with a known kind, else the last drawn comment.
    pub fn visible_comment_index(&self, index: usize) -> Option<usize> {
        let drawn = |position: &usize| self.comments[*position].kind != CommentKind::Unknown;
        (index..self.comments.len())
            .find(drawn)
            .or_else(|| (0..self.comments.len()).rev().find(drawn))
    }

    pub fn append_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}

/// The whole document fetched at startup.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ChatDataset {
    #[serde(default)]
    pub results: Vec<Room>,
}

impl ChatDataset {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.results
    }

    pub fn room_mut(&mut self, index: usize) -> Option<&mut Room> {
        self.results.get_mut(index)
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
