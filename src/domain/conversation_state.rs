/// Rows kept visible above/below the cursor before the list scrolls.
const SCROLL_MARGIN: usize = 3;

/// Which room the conversation pane shows and where its comment cursor is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversationState {
    room_index: Option<usize>,
    comment_count: usize,
    selected_index: Option<usize>,
    scroll_offset: usize,
}

impl ConversationState {
    pub fn room_index(&self) -> Option<usize> {
        self.room_index
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Shows `room_index` with the cursor on its newest comment.
    pub fn open(&mut self, room_index: usize, comment_count: usize) {
        self.room_index = Some(room_index);
        self.scroll_offset = 0;
        self.follow_latest(comment_count);
    }

    /// Moves the cursor onto the newest comment, e.g. after an append.
    pub fn follow_latest(&mut self, comment_count: usize) {
        self.comment_count = comment_count;
        self.selected_index = comment_count.checked_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.comment_count == 0 {
            return;
        }

        self.selected_index = match self.selected_index {
            None => Some(0),
            Some(idx) => Some((idx + 1).min(self.comment_count - 1)),
        };
    }

    pub fn select_previous(&mut self) {
        if self.comment_count == 0 {
            return;
        }

        self.selected_index = match self.selected_index {
            None => Some(self.comment_count - 1),
            Some(idx) => Some(idx.saturating_sub(1)),
        };
    }

    /// Keeps the row at `row_index` inside a viewport of `viewport_height`
    /// rows, with up to `SCROLL_MARGIN` rows of context around it.
    pub fn update_scroll_offset(&mut self, row_index: usize, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        let margin = SCROLL_MARGIN.min(viewport_height / 2);

        if row_index < self.scroll_offset + margin {
            self.scroll_offset = row_index.saturating_sub(margin);
        }

        if row_index + margin >= self.scroll_offset + viewport_height {
            self.scroll_offset = (row_index + margin + 1).saturating_sub(viewport_height);
        }
    }
}
