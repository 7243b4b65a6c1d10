//! # Picker State
//!
//! [`App`] is the selection model: the parsed categories, a cursor in each
//! pane, which pane has focus, and whether the session has ended.
//!
//! Every keyboard input is first mapped to an [`Action`] by
//! [`action_for_key`], then applied with [`App::dispatch`]. Once the session
//! is confirmed or cancelled, `dispatch` ignores everything.
//!
//! Entries are addressed by `(category_index, entry_index)` into owned
//! vectors; nothing holds references into the model.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::manifest::{Category, Entry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    Categories,
    Packages,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `q` / `Ctrl+C`: leave without output.
    Quit,
    /// `Esc`: back out of the package pane, or leave from the category pane.
    Back,
    /// `Enter`: finish and emit the selection.
    Confirm,
    SwitchPane,
    FocusCategories,
    FocusPackages,
    MoveUp,
    MoveDown,
    ToggleEntry,
    ToggleAll,
}

/// Map a key press to a picker action. Releases and unbound keys map to
/// `None`.
pub fn action_for_key(key: &KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc => Action::Back,
        KeyCode::Enter => Action::Confirm,
        KeyCode::Tab | KeyCode::BackTab => Action::SwitchPane,
        KeyCode::Left | KeyCode::Char('h') => Action::FocusCategories,
        KeyCode::Right | KeyCode::Char('l') => Action::FocusPackages,
        KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
        KeyCode::Char(' ') => Action::ToggleEntry,
        KeyCode::Char('a') => Action::ToggleAll,
        _ => return None,
    };
    Some(action)
}

#[derive(Debug)]
pub struct App {
    pub categories: Vec<Category>,
    pub category_index: usize,
    pub entry_index: usize,
    pub focus: FocusPane,
    /// Last known terminal size as `(width, height)`. The renderer lays the
    /// frame out inside it.
    pub viewport: (u16, u16),
    status: SessionStatus,
}

impl App {
    /// Build the model for a non-empty list of categories. The caller rejects
    /// an empty manifest before getting here.
    pub fn new(categories: Vec<Category>) -> Self {
        debug_assert!(!categories.is_empty(), "picker needs at least one category");
        Self {
            categories,
            category_index: 0,
            entry_index: 0,
            focus: FocusPane::Categories,
            viewport: (0, 0),
            status: SessionStatus::Active,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == SessionStatus::Confirmed
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == SessionStatus::Cancelled
    }

    pub fn is_finished(&self) -> bool {
        self.status != SessionStatus::Active
    }

    pub fn current_category(&self) -> Option<&Category> {
        self.categories.get(self.category_index)
    }

    pub fn current_entries(&self) -> &[Entry] {
        self.current_category()
            .map(|c| c.entries.as_slice())
            .unwrap_or_default()
    }

    pub fn current_entry(&self) -> Option<&Entry> {
        self.current_entries().get(self.entry_index)
    }

    /// Selected entries across every category, in manifest order.
    pub fn selected_entries(&self) -> impl Iterator<Item = &Entry> {
        self.categories
            .iter()
            .flat_map(|c| c.entries.iter())
            .filter(|e| e.is_selected())
    }

    pub fn total_selected(&self) -> usize {
        self.selected_entries().count()
    }

    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
    }

    /// Feed one terminal event into the model.
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) => {
                if let Some(action) = action_for_key(key) {
                    self.dispatch(action);
                }
            }
            Event::Resize(width, height) => self.set_viewport(*width, *height),
            _ => {}
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        if self.is_finished() {
            return;
        }

        match action {
            Action::Quit => self.status = SessionStatus::Cancelled,
            Action::Back => match self.focus {
                FocusPane::Packages => self.focus = FocusPane::Categories,
                FocusPane::Categories => self.status = SessionStatus::Cancelled,
            },
            Action::Confirm => self.status = SessionStatus::Confirmed,
            Action::SwitchPane => self.toggle_focus(),
            Action::FocusCategories => self.focus = FocusPane::Categories,
            Action::FocusPackages => self.focus = FocusPane::Packages,
            Action::MoveUp => self.previous(),
            Action::MoveDown => self.next(),
            Action::ToggleEntry => self.toggle_current(),
            Action::ToggleAll => self.toggle_all(),
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPane::Categories => FocusPane::Packages,
            FocusPane::Packages => FocusPane::Categories,
        };
    }

    pub fn previous(&mut self) {
        match self.focus {
            FocusPane::Categories => {
                if self.category_index > 0 {
                    self.category_index -= 1;
                    self.entry_index = 0;
                }
            }
            FocusPane::Packages => {
                self.entry_index = self.entry_index.saturating_sub(1);
            }
        }
    }

    pub fn next(&mut self) {
        match self.focus {
            FocusPane::Categories => {
                if self.category_index + 1 < self.categories.len() {
                    self.category_index += 1;
                    self.entry_index = 0;
                }
            }
            FocusPane::Packages => {
                if self.entry_index + 1 < self.current_entries().len() {
                    self.entry_index += 1;
                }
            }
        }
    }

    /// Toggle the entry under the cursor and step to the next one. Installed
    /// entries are left alone and the cursor stays put.
    pub fn toggle_current(&mut self) {
        if self.focus != FocusPane::Packages {
            return;
        }
        let entry_index = self.entry_index;
        let Some(category) = self.categories.get_mut(self.category_index) else {
            return;
        };
        let len = category.entries.len();
        let Some(entry) = category.entries.get_mut(entry_index) else {
            return;
        };
        if entry.toggle() && entry_index + 1 < len {
            self.entry_index += 1;
        }
    }

    /// Select every installable entry in the current category, or clear them
    /// all when they are already all selected.
    pub fn toggle_all(&mut self) {
        if self.focus != FocusPane::Packages {
            return;
        }
        let Some(category) = self.categories.get_mut(self.category_index) else {
            return;
        };
        let all_selected = category
            .entries
            .iter()
            .filter(|e| !e.installed)
            .all(Entry::is_selected);
        for entry in &mut category.entries {
            entry.set_selected(!all_selected);
        }
    }
}
