use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::client::{self, CycleOutcome};
use crate::render::{Page, RegionId};
use crate::ui::theme::Theme;

const PAGE_STEP: isize = 10;

pub struct App {
    pub running: bool,
    pub page: Page,
    pub endpoint: String,
    pub interval: Duration,
    pub theme: Theme,
    pub focus: RegionId,
    scroll: [usize; 3],
    pub cycles_applied: u64,
    pub cycles_failed: u64,
}

impl App {
    pub fn new(endpoint: impl Into<String>, interval: Duration, theme: Theme) -> Self {
        App {
            running: true,
            page: Page::new(),
            endpoint: endpoint.into(),
            interval,
            theme,
            focus: RegionId::ProcessList,
            scroll: [0; 3],
            cycles_applied: 0,
            cycles_failed: 0,
        }
    }

    /// Applies a finished fetch. Failures are logged and leave the page as is.
    pub fn on_cycle(&mut self, outcome: CycleOutcome) {
        match client::settle(outcome, &mut self.page) {
            None => {
                self.cycles_applied += 1;
                self.clamp_scroll();
            }
            Some(_) => self.cycles_failed += 1,
        }
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrev,
            KeyCode::Up | KeyCode::Char('k') => Action::Scroll(-1),
            KeyCode::Down | KeyCode::Char('j') => Action::Scroll(1),
            KeyCode::PageUp => Action::Scroll(-PAGE_STEP),
            KeyCode::PageDown => Action::Scroll(PAGE_STEP),
            KeyCode::Home => Action::ScrollTop,
            KeyCode::Char('r') => Action::Refresh,
            _ => Action::None,
        }
    }

    /// Handles UI-local actions. `Refresh` belongs to the scheduler and is a
    /// no-op here.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::FocusNext => self.focus = self.step_focus(1),
            Action::FocusPrev => self.focus = self.step_focus(RegionId::LISTS.len() - 1),
            Action::Scroll(delta) => self.scroll_by(delta),
            Action::ScrollTop => {
                if let Some(slot) = list_slot(self.focus) {
                    self.scroll[slot] = 0;
                }
            }
            Action::Refresh | Action::None => {}
        }
    }

    pub fn scroll_offset(&self, region: RegionId) -> usize {
        list_slot(region).map(|slot| self.scroll[slot]).unwrap_or(0)
    }

    fn step_focus(&self, step: usize) -> RegionId {
        let current = list_slot(self.focus).unwrap_or(0);
        RegionId::LISTS[(current + step) % RegionId::LISTS.len()]
    }

    fn scroll_by(&mut self, delta: isize) {
        let Some(slot) = list_slot(self.focus) else {
            return;
        };
        let max = self.max_offset(self.focus);
        let next = self.scroll[slot].saturating_add_signed(delta);
        self.scroll[slot] = next.min(max);
    }

    fn max_offset(&self, region: RegionId) -> usize {
        self.page
            .list(region)
            .map(|items| items.len().saturating_sub(1))
            .unwrap_or(0)
    }

    fn clamp_scroll(&mut self) {
        for region in RegionId::LISTS {
            if let Some(slot) = list_slot(region) {
                self.scroll[slot] = self.scroll[slot].min(self.max_offset(region));
            }
        }
    }
}

fn list_slot(region: RegionId) -> Option<usize> {
    RegionId::LISTS.iter().position(|r| *r == region)
}
