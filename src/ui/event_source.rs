use std::{
    sync::mpsc::{Receiver, TryRecvError},
    time::Duration,
};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    domain::{
        events::{AppEvent, KeyInput},
        room::ChatDataset,
    },
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Merges terminal input with the one-shot dataset delivery.
pub struct CrosstermEventSource {
    dataset_rx: Option<Receiver<ChatDataset>>,
}

impl CrosstermEventSource {
    pub fn new(dataset_rx: Receiver<ChatDataset>) -> Self {
        Self {
            dataset_rx: Some(dataset_rx),
        }
    }

    fn poll_dataset(&mut self) -> Option<AppEvent> {
        let rx = self.dataset_rx.as_ref()?;
        match rx.try_recv() {
            Ok(dataset) => {
                self.dataset_rx = None;
                Some(AppEvent::DatasetLoaded(dataset))
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.dataset_rx = None;
                None
            }
        }
    }
}

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if let Some(loaded) = self.poll_dataset() {
            return Ok(Some(loaded));
        }

        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key)),
            Event::Resize(width, height) => Ok(Some(AppEvent::Resized { width, height })),
            _ => Ok(None),
        }
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        return Some(AppEvent::QuitRequested);
    }

    let name = match key.code {
        KeyCode::Char(ch) => ch.to_string(),
        KeyCode::Enter => "enter".to_owned(),
        KeyCode::Esc => "esc".to_owned(),
        KeyCode::Backspace => "backspace".to_owned(),
        KeyCode::Delete => "delete".to_owned(),
        KeyCode::Left => "left".to_owned(),
        KeyCode::Right => "right".to_owned(),
        KeyCode::Up => "up".to_owned(),
        KeyCode::Down => "down".to_owned(),
        KeyCode::Home => "home".to_owned(),
        KeyCode::End => "end".to_owned(),
        _ => return None,
    };

    Some(AppEvent::InputKey(KeyInput::new(name, ctrl)))
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::test_support;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn ctrl_c_requests_quit() {
        let event = map_key(press(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert_eq!(event, Some(AppEvent::QuitRequested));
    }

    #[test]
    fn plain_q_is_forwarded_as_a_key() {
        let event = map_key(press(KeyCode::Char('q'), KeyModifiers::NONE));

        assert_eq!(event, Some(AppEvent::InputKey(KeyInput::new("q", false))));
    }

    #[test]
    fn named_keys_are_normalized() {
        assert_eq!(
            map_key(press(KeyCode::Enter, KeyModifiers::NONE)),
            Some(AppEvent::InputKey(KeyInput::new("enter", false)))
        );
        assert_eq!(
            map_key(press(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(AppEvent::InputKey(KeyInput::new("backspace", false)))
        );
        assert_eq!(map_key(press(KeyCode::F(5), KeyModifiers::NONE)), None);
    }

    #[test]
    fn delivers_dataset_once_then_stops_polling_channel() {
        let (tx, rx) = mpsc::channel();
        let dataset = test_support::dataset(vec![test_support::room(1, "Product A", 1)]);
        tx.send(dataset.clone()).expect("send dataset");
        let mut source = CrosstermEventSource::new(rx);

        assert_eq!(source.poll_dataset(), Some(AppEvent::DatasetLoaded(dataset)));
        assert!(source.dataset_rx.is_none());
        assert_eq!(source.poll_dataset(), None);
    }

    #[test]
    fn disconnected_loader_is_forgotten() {
        let (tx, rx) = mpsc::channel::<ChatDataset>();
        drop(tx);
        let mut source = CrosstermEventSource::new(rx);

        assert_eq!(source.poll_dataset(), None);
        assert!(source.dataset_rx.is_none());
    }

    #[test]
    fn mock_source_replays_events_in_order() {
        let mut source = MockEventSource::from(vec![AppEvent::Tick, AppEvent::QuitRequested]);

        assert_eq!(source.next_event().expect("event"), Some(AppEvent::Tick));
        assert_eq!(
            source.next_event().expect("event"),
            Some(AppEvent::QuitRequested)
        );
        assert_eq!(source.next_event().expect("event"), None);
    }
}
