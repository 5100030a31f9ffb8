mod info;
mod registers;
mod status;

use crate::runner::Runner;
use debugger::{Panel, RefreshDriver};
use eyre_pretty::eyre::Result;
use machine::PauseControl;
use ratatui::{
    DefaultTerminal, Frame,
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    layout::{Constraint, Layout},
    style::{Color, Style, Stylize},
};
use std::time::{Duration, Instant};
use tracing::debug;

/// How much `+` and `-` change the refresh interval by.
const INTERVAL_STEP: Duration = Duration::from_millis(4);

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::LightGreen)
    } else {
        Style::default().fg(Color::White).dim()
    }
}

pub struct Context<'ctx, 'frame> {
    pub frame: &'ctx mut Frame<'frame>,
    pub panel: &'ctx Panel,
    pub driver: &'ctx RefreshDriver,
    pub paused: bool,
    pub executed: u64,
}

/// Things a key press might ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Quit,
    TogglePause,
    Step,
    Reset,
    Faster,
    Slower,
    ScrollUp,
    ScrollDown,
}

fn action(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    Some(match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('p' | ' ') => Action::TogglePause,
        KeyCode::Char('s') => Action::Step,
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Char('+' | '=') => Action::Faster,
        KeyCode::Char('-') => Action::Slower,
        KeyCode::Up | KeyCode::Char('k') => Action::ScrollUp,
        KeyCode::Down | KeyCode::Char('j') => Action::ScrollDown,
        _ => return None,
    })
}

/// The debugger view.
pub struct App {
    runner: Runner,
    driver: RefreshDriver,
    panel: Panel,

    info_pane: info::InfoPane,
    registers_pane: registers::RegistersPane,
    status_pane: status::StatusPane,
}

impl App {
    pub fn new(runner: Runner, driver: RefreshDriver) -> Self {
        Self {
            runner,
            driver,
            panel: Panel::with_labels(),

            info_pane: Default::default(),
            registers_pane: Default::default(),
            status_pane: Default::default(),
        }
    }

    pub fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        loop {
            let wait = self
                .driver
                .poll(Instant::now(), &self.runner, &mut self.panel);

            terminal.draw(|frame| self.draw(frame))?;

            if self.handle_events(wait)? {
                break;
            }
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let [top, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(4)]).areas(frame.area());
        let [info_area, registers_area] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(28)]).areas(top);

        let mut ctx = Context {
            frame,
            panel: &self.panel,
            driver: &self.driver,
            paused: self.runner.paused(),
            executed: self.runner.executed(),
        };

        self.info_pane.render(&mut ctx, info_area);
        self.registers_pane.render(&mut ctx, registers_area, true);
        self.status_pane.render(&mut ctx, status_area);
    }

    /// Waits up to `timeout` for input and handles it. Returns whether the app should quit.
    fn handle_events(&mut self, timeout: Duration) -> Result<bool> {
        let mut timeout = timeout;
        while event::poll(timeout)? {
            // drain whatever else is queued without blocking the next refresh
            timeout = Duration::ZERO;

            let Event::Key(key) = event::read()? else {
                continue;
            };

            let Some(action) = action(key) else { continue };
            match action {
                Action::Quit => return Ok(true),
                Action::TogglePause => {
                    self.runner.toggle_pause();
                }
                Action::Step => self.runner.step(),
                Action::Reset => self.runner.reset(),
                Action::Faster => {
                    let interval = self.driver.interval().saturating_sub(INTERVAL_STEP);
                    self.driver.set_interval(interval);
                    debug!("refresh interval is now {:?}", self.driver.interval());
                }
                Action::Slower => {
                    let interval = self.driver.interval() + INTERVAL_STEP;
                    self.driver.set_interval(interval);
                    debug!("refresh interval is now {:?}", self.driver.interval());
                }
                Action::ScrollUp => self.registers_pane.scroll_up(),
                Action::ScrollDown => self.registers_pane.scroll_down(),
            }
        }

        Ok(false)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn key_bindings() {
        assert_eq!(action(press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(
            action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(action(press(KeyCode::Char('c'))), None);
        assert_eq!(action(press(KeyCode::Char(' '))), Some(Action::TogglePause));
        assert_eq!(action(press(KeyCode::Char('p'))), Some(Action::TogglePause));
        assert_eq!(action(press(KeyCode::Char('s'))), Some(Action::Step));
        assert_eq!(action(press(KeyCode::Char('+'))), Some(Action::Faster));
        assert_eq!(action(press(KeyCode::Down)), Some(Action::ScrollDown));
    }

    #[test]
    fn releases_are_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(action(key), None);
    }
}
