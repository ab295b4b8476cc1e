//! Panel state (pure Rust, no FFI).
//!
//! Holds the visibility toggle, the current item list, the selection and
//! the type-ahead query. The Windows layer feeds input in and applies the
//! returned actions to the real window.

use std::path::PathBuf;
use std::time::Instant;

use super::desktop_item::DesktopItem;
use super::keys::Key;
use super::search::{find_next_match, TypeAhead};

/// What the window should do after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    /// Position, refresh, scroll to top, show and activate.
    Show,
    Hide,
}

/// Result of a key press on the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Key not handled (panel hidden or inactive, or not a panel key).
    Ignored,
    /// Handled without changing the selection.
    Unchanged,
    /// Select and scroll to this item.
    Select(usize),
    Hide,
    Launch(PathBuf),
}

#[derive(Debug, Clone, Default)]
pub struct PanelState {
    visible: bool,
    items: Vec<DesktopItem>,
    selected: Option<usize>,
    search: TypeAhead,
}

impl PanelState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flips visibility and tells the caller which way it went.
    pub fn toggle(&mut self) -> PanelAction {
        self.visible = !self.visible;
        if self.visible {
            PanelAction::Show
        } else {
            PanelAction::Hide
        }
    }

    /// Marks the panel hidden. Returns true if it was visible.
    pub fn hide(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }

    pub fn items(&self) -> &[DesktopItem] {
        &self.items
    }

    /// Swaps in a freshly listed set of items and clears the selection.
    pub fn replace_items(&mut self, items: Vec<DesktopItem>) {
        self.items = items;
        self.selected = None;
        self.search.reset();
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Records a selection made with the mouse. Out-of-range indices clear it.
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.items.len());
    }

    pub fn selected_item(&self) -> Option<&DesktopItem> {
        self.selected.and_then(|i| self.items.get(i))
    }

    pub fn search_query(&self) -> &str {
        self.search.query()
    }

    /// Handles a key press.
    ///
    /// Escape hides the panel whenever `close_on_escape` is set. Other keys
    /// only count while the panel is visible and `active`.
    pub fn handle_key(
        &mut self,
        key: Key,
        now: Instant,
        close_on_escape: bool,
        active: bool,
    ) -> KeyOutcome {
        if key == Key::Escape && close_on_escape {
            self.visible = false;
            return KeyOutcome::Hide;
        }

        if !self.visible || !active {
            return KeyOutcome::Ignored;
        }

        match key {
            Key::Char(c) => {
                self.search.push(c, now);
                self.find_match()
            }
            Key::Backspace => {
                if self.search.backspace() {
                    self.find_match()
                } else {
                    KeyOutcome::Unchanged
                }
            }
            Key::Enter => match self.selected_item() {
                Some(item) => KeyOutcome::Launch(item.path.clone()),
                None => KeyOutcome::Unchanged,
            },
            Key::Escape | Key::Other => KeyOutcome::Ignored,
        }
    }

    /// Every keystroke moves to the next item after the selection that
    /// starts with the query, wrapping around.
    fn find_match(&mut self) -> KeyOutcome {
        let query = self.search.query();
        if query.is_empty() {
            return KeyOutcome::Unchanged;
        }

        let names: Vec<&str> = self.items.iter().map(|item| item.name.as_str()).collect();
        match find_next_match(&names, self.selected, query) {
            Some(index) => {
                self.selected = Some(index);
                KeyOutcome::Select(index)
            }
            None => KeyOutcome::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn item(name: &str) -> DesktopItem {
        DesktopItem {
            name: name.to_string(),
            path: PathBuf::from(format!("C:/Users/me/Desktop/{name}")),
            is_folder: false,
        }
    }

    fn visible_panel(names: &[&str]) -> PanelState {
        let mut panel = PanelState::default();
        panel.replace_items(names.iter().map(|n| item(n)).collect());
        assert_eq!(panel.toggle(), PanelAction::Show);
        panel
    }

    #[test]
    fn toggle_alternates() {
        let mut panel = PanelState::default();
        assert!(!panel.is_visible());
        assert_eq!(panel.toggle(), PanelAction::Show);
        assert!(panel.is_visible());
        assert_eq!(panel.toggle(), PanelAction::Hide);
        assert!(!panel.is_visible());
    }

    #[test]
    fn hide_reports_previous_visibility() {
        let mut panel = PanelState::default();
        assert!(!panel.hide());
        panel.toggle();
        assert!(panel.hide());
        assert!(!panel.is_visible());
    }

    #[test]
    fn escape_hides_only_when_enabled() {
        let mut panel = visible_panel(&["a"]);
        let now = Instant::now();
        assert_eq!(panel.handle_key(Key::Escape, now, false, true), KeyOutcome::Ignored);
        assert!(panel.is_visible());
        assert_eq!(panel.handle_key(Key::Escape, now, true, true), KeyOutcome::Hide);
        assert!(!panel.is_visible());
    }

    #[test]
    fn typing_is_ignored_while_inactive() {
        let mut panel = visible_panel(&["alpha"]);
        let now = Instant::now();
        assert_eq!(panel.handle_key(Key::Char('a'), now, true, false), KeyOutcome::Ignored);
        assert_eq!(panel.search_query(), "");
    }

    #[test]
    fn repeated_letter_cycles_through_matches() {
        let mut panel = visible_panel(&["Paint", "Notes", "Pasta"]);
        let t0 = Instant::now();
        let pause = Duration::from_millis(1500);
        assert_eq!(panel.handle_key(Key::Char('p'), t0, true, true), KeyOutcome::Select(0));
        assert_eq!(
            panel.handle_key(Key::Char('p'), t0 + pause, true, true),
            KeyOutcome::Select(2)
        );
        assert_eq!(
            panel.handle_key(Key::Char('p'), t0 + pause * 2, true, true),
            KeyOutcome::Select(0)
        );
    }

    #[test]
    fn each_keystroke_scans_past_the_selection() {
        let mut panel = visible_panel(&["Paint", "Pasta"]);
        let t0 = Instant::now();
        assert_eq!(panel.handle_key(Key::Char('p'), t0, true, true), KeyOutcome::Select(0));
        assert_eq!(
            panel.handle_key(Key::Char('a'), t0 + Duration::from_millis(100), true, true),
            KeyOutcome::Select(1)
        );
        assert_eq!(
            panel.handle_key(Key::Char('s'), t0 + Duration::from_millis(200), true, true),
            KeyOutcome::Select(1)
        );
    }

    #[test]
    fn backspace_rescans_with_shorter_query() {
        let mut panel = visible_panel(&["Paint", "Pasta"]);
        let t0 = Instant::now();
        panel.handle_key(Key::Char('p'), t0, true, true);
        panel.handle_key(Key::Char('a'), t0, true, true);
        panel.handle_key(Key::Char('s'), t0, true, true);
        assert_eq!(panel.selected(), Some(1));
        assert_eq!(panel.handle_key(Key::Backspace, t0, true, true), KeyOutcome::Select(0));
        assert_eq!(panel.search_query(), "pa");
    }

    #[test]
    fn backspace_on_empty_query_is_a_no_op() {
        let mut panel = visible_panel(&["Paint"]);
        assert_eq!(
            panel.handle_key(Key::Backspace, Instant::now(), true, true),
            KeyOutcome::Unchanged
        );
    }

    #[test]
    fn no_match_keeps_selection() {
        let mut panel = visible_panel(&["Paint", "Notes"]);
        panel.select(Some(1));
        assert_eq!(
            panel.handle_key(Key::Char('z'), Instant::now(), true, true),
            KeyOutcome::Unchanged
        );
        assert_eq!(panel.selected(), Some(1));
    }

    #[test]
    fn enter_launches_selected_item() {
        let mut panel = visible_panel(&["Paint", "Notes"]);
        assert_eq!(
            panel.handle_key(Key::Enter, Instant::now(), true, true),
            KeyOutcome::Unchanged
        );
        panel.select(Some(1));
        assert_eq!(
            panel.handle_key(Key::Enter, Instant::now(), true, true),
            KeyOutcome::Launch(PathBuf::from("C:/Users/me/Desktop/Notes"))
        );
    }

    #[test]
    fn refresh_clears_selection_and_query() {
        let mut panel = visible_panel(&["Paint"]);
        panel.handle_key(Key::Char('p'), Instant::now(), true, true);
        panel.replace_items(vec![item("Other")]);
        assert_eq!(panel.selected(), None);
        assert_eq!(panel.search_query(), "");
        assert_eq!(panel.items().len(), 1);
    }

    #[test]
    fn select_rejects_out_of_range() {
        let mut panel = visible_panel(&["Paint"]);
        panel.select(Some(3));
        assert_eq!(panel.selected(), None);
    }
}
