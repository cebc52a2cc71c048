use anyhow::Result;
use chrono::Utc;

use crate::{
    domain::{
        events::{AppEvent, KeyInput},
        room::ChatDataset,
        shell_state::{ActivePane, ShellState},
    },
    infra::contracts::ExternalOpener,
};

use super::{
    contracts::ShellOrchestrator,
    send_message::{send_message, SendMessageCommand, SendMessageError},
};

/// Settings the orchestrator needs from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellSettings {
    /// Identity recorded on locally sent comments.
    pub current_user: String,
    /// Viewports narrower than this many columns use the compact layout.
    pub compact_breakpoint: u16,
}

pub struct DefaultShellOrchestrator<O>
where
    O: ExternalOpener,
{
    state: ShellState,
    settings: ShellSettings,
    opener: O,
}

impl<O> DefaultShellOrchestrator<O>
where
    O: ExternalOpener,
{
    pub fn new(settings: ShellSettings, opener: O) -> Self {
        Self {
            state: ShellState::default(),
            settings,
            opener,
        }
    }

    fn handle_dataset(&mut self, dataset: ChatDataset) {
        tracing::info!(rooms = dataset.rooms().len(), "dataset delivered to shell");
        self.state.set_dataset(dataset);
    }

    fn handle_key(&mut self, key: KeyInput) -> Result<()> {
        if key.ctrl {
            if key.key == "c" {
                self.state.stop();
            }
            return Ok(());
        }

        if self.state.is_loading() {
            if key.key == "q" {
                self.state.stop();
            }
            return Ok(());
        }

        match self.state.active_pane() {
            ActivePane::RoomList => self.handle_room_list_key(&key),
            ActivePane::Conversation => self.handle_conversation_key(&key)?,
            ActivePane::Draft => self.handle_draft_key(&key),
        }

        Ok(())
    }

    fn handle_room_list_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "j" | "down" => self.state.room_list_mut().highlight_next(),
            "k" | "up" => self.state.room_list_mut().highlight_previous(),
            "enter" | "l" => {
                let Some(index) = self.state.room_list().highlighted() else {
                    return;
                };
                if self.state.select_room(index) {
                    tracing::debug!(room_index = index, "room selected");
                    self.state.set_active_pane(ActivePane::Conversation);
                }
            }
            "q" => self.state.stop(),
            _ => {}
        }
    }

    fn handle_conversation_key(&mut self, key: &KeyInput) -> Result<()> {
        match key.key.as_str() {
            "j" | "down" => self.state.conversation_mut().select_next(),
            "k" | "up" => self.state.conversation_mut().select_previous(),
            "i" => self.state.set_active_pane(ActivePane::Draft),
            "o" => self.open_selected_attachment()?,
            "h" | "esc" => self.state.show_room_list(),
            "q" => self.state.stop(),
            _ => {}
        }

        Ok(())
    }

    fn handle_draft_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "esc" => self.state.set_active_pane(ActivePane::Conversation),
            "enter" => self.send_draft(),
            "backspace" => self.state.draft_mut().delete_char_before(),
            "delete" => self.state.draft_mut().delete_char_at(),
            "left" => self.state.draft_mut().move_cursor_left(),
            "right" => self.state.draft_mut().move_cursor_right(),
            "home" => self.state.draft_mut().move_cursor_home(),
            "end" => self.state.draft_mut().move_cursor_end(),
            _ => {
                if let Some(ch) = key.as_char() {
                    self.state.draft_mut().insert_char(ch);
                }
            }
        }
    }

    fn send_draft(&mut self) {
        let command = SendMessageCommand {
            sender: self.settings.current_user.clone(),
            at: Utc::now(),
        };

        match send_message(&mut self.state, command) {
            Ok(comment_id) => {
                tracing::debug!(
                    comment_id,
                    room_index = ?self.state.active_room_index(),
                    "local comment appended"
                );
            }
            Err(SendMessageError::EmptyMessage) => {}
            Err(SendMessageError::NoActiveRoom) => {
                tracing::warn!("send ignored: no active room");
            }
        }
    }

    fn open_selected_attachment(&mut self) -> Result<()> {
        let url = self.state.active_room().and_then(|room| {
            let index = room.visible_comment_index(self.state.conversation().selected_index()?)?;
            room.comments()[index].attachment_url().map(ToOwned::to_owned)
        });

        let Some(url) = url else {
            return Ok(());
        };

        if let Err(error) = self.opener.open(&url) {
            tracing::warn!(error = ?error, url = %url, "failed to open attachment");
        }

        Ok(())
    }
}

impl<O> ShellOrchestrator for DefaultShellOrchestrator<O>
where
    O: ExternalOpener,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShellState {
        &mut self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key)?,
            AppEvent::Resized { width, height } => {
                tracing::debug!(width, height, "viewport resized");
                self.state
                    .apply_viewport_width(width, self.settings.compact_breakpoint);
            }
            AppEvent::DatasetLoaded(dataset) => self.handle_dataset(dataset),
        }

        Ok(())
    }
}
