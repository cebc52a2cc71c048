/// Highlight cursor over the room list. The rooms themselves live in the
/// dataset; this only tracks which row the user is pointing at.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoomListState {
    room_count: usize,
    highlighted: Option<usize>,
}

impl RoomListState {
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Resets the list for `room_count` rooms, highlighting the first one.
    pub fn reset(&mut self, room_count: usize) {
        self.room_count = room_count;
        self.highlighted = (room_count > 0).then_some(0);
    }

    /// Moves the highlight onto `index` when it is in range.
    pub fn highlight(&mut self, index: usize) {
        if index < self.room_count {
            self.highlighted = Some(index);
        }
    }

    pub fn highlight_next(&mut self) {
        let Some(index) = self.highlighted else {
            return;
        };

        let last_index = self.room_count.saturating_sub(1);
        self.highlighted = Some(index.saturating_add(1).min(last_index));
    }

    pub fn highlight_previous(&mut self) {
        let Some(index) = self.highlighted else {
            return;
        };

        self.highlighted = Some(index.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_has_no_highlight() {
        let state = RoomListState::default();

        assert_eq!(state.highlighted(), None);
    }

    #[test]
    fn reset_highlights_first_room() {
        let mut state = RoomListState::default();

        state.reset(3);

        assert_eq!(state.highlighted(), Some(0));
    }

    #[test]
    fn reset_with_no_rooms_clears_highlight() {
        let mut state = RoomListState::default();
        state.reset(2);

        state.reset(0);

        assert_eq!(state.highlighted(), None);
    }

    #[test]
    fn highlight_moves_within_bounds() {
        let mut state = RoomListState::default();
        state.reset(2);

        state.highlight_next();
        state.highlight_next();
        assert_eq!(state.highlighted(), Some(1));

        state.highlight_previous();
        state.highlight_previous();
        assert_eq!(state.highlighted(), Some(0));
    }

    #[test]
    fn highlight_ignores_out_of_range_index() {
        let mut state = RoomListState::default();
        state.reset(2);

        state.highlight(5);
        assert_eq!(state.highlighted(), Some(0));

        state.highlight(1);
        assert_eq!(state.highlighted(), Some(1));
    }

    #[test]
    fn navigation_is_noop_without_rooms() {
        let mut state = RoomListState::default();

        state.highlight_next();
        state.highlight_previous();

        assert_eq!(state.highlighted(), None);
    }
}
