use anyhow::Result;

use crate::{
    domain::{events::AppEvent, shell_state::ShellState},
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
    },
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        dataset = %context.config.dataset.location,
        "starting TUI shell"
    );

    let mut terminal = TerminalSession::new()?;
    let size = terminal.size()?;
    orchestrator.handle_event(AppEvent::Resized {
        width: size.width,
        height: size.height,
    })?;

    let current_user = context.config.identity.current_user.as_str();
    run_loop(event_source, orchestrator, |state| {
        terminal.draw(|frame| view::render(frame, state, current_user))
    })
}

/// Drives the shell until the orchestrator stops, drawing before each event.
fn run_loop<D>(
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
    mut draw: D,
) -> Result<()>
where
    D: FnMut(&mut ShellState) -> Result<()>,
{
    while orchestrator.state().is_running() {
        draw(orchestrator.state_mut())?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    tracing::info!("TUI shell stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::events::KeyInput,
        infra::stubs::RecordingOpener,
        test_support,
        ui::event_source::MockEventSource,
        usecases::shell::{DefaultShellOrchestrator, ShellSettings},
    };

    fn orchestrator() -> DefaultShellOrchestrator<RecordingOpener> {
        DefaultShellOrchestrator::new(
            ShellSettings {
                current_user: test_support::LOCAL_USER.to_owned(),
                compact_breakpoint: 80,
            },
            RecordingOpener::default(),
        )
    }

    #[test]
    fn loop_stops_on_quit_from_source() {
        let mut source = MockEventSource::from(vec![AppEvent::Tick, AppEvent::QuitRequested]);
        let mut orchestrator = orchestrator();
        let mut frames = 0;

        run_loop(&mut source, &mut orchestrator, |_| {
            frames += 1;
            Ok(())
        })
        .expect("loop must finish");

        assert!(!orchestrator.state().is_running());
        assert_eq!(frames, 2);
    }

    #[test]
    fn loop_applies_dataset_and_keys_in_order() {
        let dataset = test_support::dataset(vec![
            test_support::room(1, "Product A", 1),
            test_support::room(2, "Product B", 1),
        ]);
        let mut source = MockEventSource::from(vec![
            AppEvent::Resized {
                width: 120,
                height: 40,
            },
            AppEvent::DatasetLoaded(dataset),
            AppEvent::InputKey(KeyInput::new("j", false)),
            AppEvent::InputKey(KeyInput::new("enter", false)),
            AppEvent::InputKey(KeyInput::new("q", false)),
        ]);
        let mut orchestrator = orchestrator();

        run_loop(&mut source, &mut orchestrator, |_| Ok(())).expect("loop must finish");

        assert_eq!(orchestrator.state().active_room_index(), Some(1));
        assert!(!orchestrator.state().is_running());
    }
}
