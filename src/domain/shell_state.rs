use super::{
    conversation_state::ConversationState,
    message_input_state::MessageInputState,
    room::{ChatDataset, Room},
    room_list_state::RoomListState,
};

/// Which pane currently receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePane {
    #[default]
    RoomList,
    Conversation,
    Draft,
}

/// Responsive layout flags. Compact layouts show one pane at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutState {
    compact: bool,
    show_room_list: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            compact: false,
            show_room_list: true,
        }
    }
}

impl LayoutState {
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    pub fn shows_room_list(&self) -> bool {
        self.show_room_list || !self.compact
    }

    pub fn shows_conversation(&self) -> bool {
        !self.compact || !self.show_room_list
    }

    /// Re-evaluates the layout for a viewport `width` columns wide.
    pub fn apply_width(&mut self, width: u16, breakpoint: u16) {
        self.compact = width < breakpoint;
        if !self.compact {
            self.show_room_list = true;
        }
    }

    fn hide_room_list(&mut self) {
        if self.compact {
            self.show_room_list = false;
        }
    }

    fn reveal_room_list(&mut self) {
        self.show_room_list = true;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    dataset: Option<ChatDataset>,
    room_list: RoomListState,
    conversation: ConversationState,
    draft: MessageInputState,
    layout: LayoutState,
    active_pane: ActivePane,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            running: true,
            dataset: None,
            room_list: RoomListState::default(),
            conversation: ConversationState::default(),
            draft: MessageInputState::default(),
            layout: LayoutState::default(),
            active_pane: ActivePane::default(),
        }
    }
}

impl ShellState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// True until the startup fetch has delivered a dataset.
    /// True until a dataset with at least one room has arrived.
    pub fn is_loading(&self) -> bool {
        self.active_room().is_none()
    }

    pub fn rooms(&self) -> &[Room] {
        self.dataset.as_ref().map(ChatDataset::rooms).unwrap_or(&[])
    }

    /// Installs the fetched dataset and makes its first room active.
    pub fn set_dataset(&mut self, dataset: ChatDataset) {
        self.room_list.reset(dataset.rooms().len());
        self.conversation = ConversationState::default();
        if let Some(first) = dataset.rooms().first() {
            self.conversation.open(0, first.comments().len());
        }
        self.dataset = Some(dataset);
    }

    pub fn active_room_index(&self) -> Option<usize> {
        self.conversation.room_index()
    }

    pub fn active_room(&self) -> Option<&Room> {
        let index = self.conversation.room_index()?;
        self.dataset.as_ref()?.rooms().get(index)
    }

    pub fn active_room_mut(&mut self) -> Option<&mut Room> {
        let index = self.conversation.room_index()?;
        self.dataset.as_mut()?.room_mut(index)
    }

    /// Makes the room at `index` active. Returns false when out of range.
    pub fn select_room(&mut self, index: usize) -> bool {
        let Some(comment_count) = self.rooms().get(index).map(|room| room.comments().len())
        else {
            return false;
        };

        self.room_list.highlight(index);
        self.conversation.open(index, comment_count);
        self.layout.hide_room_list();
        true
    }

    /// Returns to the room list (only changes the layout when compact).
    pub fn show_room_list(&mut self) {
        self.layout.reveal_room_list();
        self.active_pane = ActivePane::RoomList;
    }

    pub fn apply_viewport_width(&mut self, width: u16, breakpoint: u16) {
        self.layout.apply_width(width, breakpoint);
        if self.layout.is_compact()
            && self.layout.shows_room_list()
            && self.active_pane != ActivePane::RoomList
        {
            self.active_pane = ActivePane::RoomList;
        }
    }

    pub fn layout(&self) -> LayoutState {
        self.layout
    }

    pub fn active_pane(&self) -> ActivePane {
        self.active_pane
    }

    pub fn set_active_pane(&mut self, pane: ActivePane) {
        self.active_pane = pane;
    }

    pub fn room_list(&self) -> &RoomListState {
        &self.room_list
    }

    pub fn room_list_mut(&mut self) -> &mut RoomListState {
        &mut self.room_list
    }

    pub fn conversation(&self) -> &ConversationState {
        &self.conversation
    }

    pub fn conversation_mut(&mut self) -> &mut ConversationState {
        &mut self.conversation
    }

    pub fn draft(&self) -> &MessageInputState {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut MessageInputState {
        &mut self.draft
    }
}
