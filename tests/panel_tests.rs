//! Driving the panel state machine with real key codes over a listed
//! desktop folder.

use std::fs;
use std::time::{Duration, Instant};

use desktop_mirror::model::{
    key_from_vk, list_desktop_items, AppConfig, KeyOutcome, PanelAction, PanelState,
};
use desktop_mirror::display_rules;

const VK_BACK: u32 = 0x08;
const VK_RETURN: u32 = 0x0D;
const VK_ESCAPE: u32 = 0x1B;

fn vk_for(c: char) -> u32 {
    c.to_ascii_uppercase() as u32
}

fn shown_panel(dir: &std::path::Path) -> PanelState {
    let (rules, _) = display_rules(&AppConfig::first_run());
    let mut panel = PanelState::default();
    assert_eq!(panel.toggle(), PanelAction::Show);
    panel.replace_items(list_desktop_items(dir, &rules).unwrap());
    panel
}

fn desktop(names: &[&str]) -> tempfile::TempDir {
    let desk = tempfile::tempdir().unwrap();
    for name in names {
        fs::write(desk.path().join(name), b"").unwrap();
    }
    desk
}

#[test]
fn typing_a_name_and_enter_launches_it() {
    let desk = desktop(&["Notes.txt", "Notepad.lnk", "Music.url"]);
    let mut panel = shown_panel(desk.path());
    let t0 = Instant::now();

    // Each key scans forward from the current selection
    let expected = [("n", 1), ("o", 2), ("t", 1), ("e", 2), ("p", 1)];
    for (i, (c, index)) in expected.into_iter().enumerate() {
        let at = t0 + Duration::from_millis(100 * i as u64);
        let c = c.chars().next().unwrap();
        let outcome = panel.handle_key(key_from_vk(vk_for(c)), at, true, true);
        assert_eq!(outcome, KeyOutcome::Select(index), "after {:?}", panel.search_query());
    }
    assert_eq!(panel.selected_item().unwrap().name, "Notepad");

    let launched = panel.handle_key(key_from_vk(VK_RETURN), t0, true, true);
    assert_eq!(launched, KeyOutcome::Launch(desk.path().join("Notepad.lnk")));
}

#[test]
fn pause_starts_a_new_query() {
    let desk = desktop(&["apple.txt", "banana.txt", "berry.txt"]);
    let mut panel = shown_panel(desk.path());
    let t0 = Instant::now();

    panel.handle_key(key_from_vk(vk_for('a')), t0, true, true);
    assert_eq!(panel.search_query(), "a");

    let later = t0 + Duration::from_millis(1200);
    let outcome = panel.handle_key(key_from_vk(vk_for('b')), later, true, true);
    assert_eq!(panel.search_query(), "b");
    assert_eq!(outcome, KeyOutcome::Select(1));
}

#[test]
fn backspace_widens_the_query() {
    let desk = desktop(&["berry.txt", "bread.txt"]);
    let mut panel = shown_panel(desk.path());
    let t0 = Instant::now();

    panel.handle_key(key_from_vk(vk_for('b')), t0, true, true);
    panel.handle_key(key_from_vk(vk_for('r')), t0, true, true);
    assert_eq!(panel.selected_item().unwrap().name, "bread");

    panel.handle_key(key_from_vk(VK_BACK), t0, true, true);
    assert_eq!(panel.search_query(), "b");
    assert_eq!(panel.selected_item().unwrap().name, "berry");
}

#[test]
fn refresh_clears_selection_and_query() {
    let desk = desktop(&["one.txt", "two.txt"]);
    let mut panel = shown_panel(desk.path());
    panel.handle_key(key_from_vk(vk_for('t')), Instant::now(), true, true);
    assert!(panel.selected().is_some());

    fs::write(desk.path().join("three.txt"), b"").unwrap();
    let (rules, _) = display_rules(&AppConfig::first_run());
    panel.replace_items(list_desktop_items(desk.path(), &rules).unwrap());

    assert_eq!(panel.items().len(), 3);
    assert_eq!(panel.selected(), None);
    assert_eq!(panel.search_query(), "");
}

#[test]
fn escape_hides_and_later_keys_are_ignored() {
    let desk = desktop(&["one.txt"]);
    let mut panel = shown_panel(desk.path());
    let now = Instant::now();

    assert_eq!(panel.handle_key(key_from_vk(VK_ESCAPE), now, true, true), KeyOutcome::Hide);
    assert!(!panel.is_visible());
    assert_eq!(
        panel.handle_key(key_from_vk(vk_for('o')), now, true, true),
        KeyOutcome::Ignored
    );
}

#[test]
fn enter_without_selection_does_nothing() {
    let desk = desktop(&["one.txt"]);
    let mut panel = shown_panel(desk.path());
    assert_eq!(
        panel.handle_key(key_from_vk(VK_RETURN), Instant::now(), true, true),
        KeyOutcome::Unchanged
    );
}
