use chrono::{TimeZone, Utc};

use crate::domain::{
    comment::{Comment, CommentKind},
    room::{ChatDataset, Participant, Room, RoomInfo, RoomType},
};

pub const LOCAL_USER: &str = "customer@mail.com";
pub const AGENT: &str = "agent@mail.com";

pub fn dataset(rooms: Vec<Room>) -> ChatDataset {
    ChatDataset { results: rooms }
}

/// A direct room with `comment_count` text comments alternating between
/// the agent and the local user, ids starting at 100.
pub fn room(id: i64, name: &str, comment_count: usize) -> Room {
    let comments = (0..comment_count)
        .map(|index| {
            let sender = if index % 2 == 0 { AGENT } else { LOCAL_USER };
            Comment::text(
                100 + index as i64,
                sender,
                format!("message {index}"),
                Utc.with_ymd_and_hms(2024, 5, 20, 9, index as u32 % 60, 0)
                    .unwrap(),
            )
        })
        .collect();

    Room::new(room_info(id, name, RoomType::Direct), comments)
}

pub fn room_info(id: i64, name: &str, room_type: RoomType) -> RoomInfo {
    RoomInfo {
        id,
        name: name.to_owned(),
        image_url: None,
        participants: vec![
            Participant {
                id: AGENT.to_owned(),
                name: "Agent".to_owned(),
            },
            Participant {
                id: LOCAL_USER.to_owned(),
                name: "King Customer".to_owned(),
            },
        ],
        room_type,
    }
}

pub fn media_comment(id: i64, kind: CommentKind, file_name: &str) -> Comment {
    Comment {
        kind,
        file_url: Some(format!("https://example.com/{file_name}")),
        file_name: Some(file_name.to_owned()),
        ..Comment::text(
            id,
            AGENT,
            "",
            Utc.with_ymd_and_hms(2024, 5, 20, 10, 0, 0).unwrap(),
        )
    }
}
