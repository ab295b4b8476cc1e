//! Listing a desktop folder through the public API, with settings loaded
//! the way the app loads them.

use std::fs;
use std::path::Path;

use desktop_mirror::model::{list_desktop_items, AppConfig, HideExtensionsMode};
use desktop_mirror::{display_rules, ConfigStore, Error};

fn touch(path: &Path) {
    fs::write(path, b"").unwrap();
}

fn sample_desktop() -> tempfile::TempDir {
    let desk = tempfile::tempdir().unwrap();
    let root = desk.path();
    fs::create_dir(root.join("projects")).unwrap();
    fs::create_dir(root.join("Archive")).unwrap();
    fs::create_dir(root.join(".cache")).unwrap();
    touch(&root.join("zeta.txt"));
    touch(&root.join("Browser.lnk"));
    touch(&root.join("wiki.url"));
    touch(&root.join("desktop.hidden"));
    touch(&root.join(".profile"));
    touch(&root.join("alpha.PDF"));
    desk
}

fn names(items: &[desktop_mirror::DesktopItem]) -> Vec<&str> {
    items.iter().map(|item| item.name.as_str()).collect()
}

#[test]
fn first_run_settings_hide_dotfiles_and_shortcut_extensions() {
    let desk = sample_desktop();
    let cfg_dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(cfg_dir.path().join("DesktopMirror").join("config.json"));

    let config = store.load_or_init().unwrap();
    assert!(store.path().exists());

    let (rules, problem) = display_rules(&config);
    assert!(problem.is_none());

    let items = list_desktop_items(desk.path(), &rules).unwrap();
    assert_eq!(
        names(&items),
        vec!["Archive", "projects", "alpha", "Browser", "wiki", "zeta"]
    );
    assert!(items[0].is_folder && items[1].is_folder);
    assert!(items[2..].iter().all(|item| !item.is_folder));
    assert_eq!(items[3].path, desk.path().join("Browser.lnk"));
}

#[test]
fn listed_only_strips_just_the_listed_extensions() {
    let desk = sample_desktop();
    let config = AppConfig {
        hide_extensions: HideExtensionsMode::ListedOnly,
        hide_extensions_list: Some(" .LNK | url ".to_string()),
        ..AppConfig::first_run()
    };
    let (rules, _) = display_rules(&config);

    let items = list_desktop_items(desk.path(), &rules).unwrap();
    assert_eq!(
        names(&items),
        vec!["Archive", "projects", "alpha.PDF", "Browser", "wiki", "zeta.txt"]
    );
}

#[test]
fn no_filter_shows_everything() {
    let desk = sample_desktop();
    let (rules, _) = display_rules(&AppConfig::default());

    let items = list_desktop_items(desk.path(), &rules).unwrap();
    assert_eq!(items.len(), 10);
    assert_eq!(items[0].name, ".cache");
    assert!(names(&items).contains(&".profile"));
    assert!(names(&items).contains(&"desktop.hidden"));
}

#[test]
fn invalid_regex_is_reported_and_filters_nothing() {
    let desk = sample_desktop();
    let config = AppConfig {
        hide_regex: Some("([unclosed".to_string()),
        ..AppConfig::default()
    };

    let (rules, problem) = display_rules(&config);
    assert!(matches!(problem, Some(Error::HideRegex(_))));
    assert_eq!(list_desktop_items(desk.path(), &rules).unwrap().len(), 10);
}

#[test]
fn missing_desktop_folder_is_an_error() {
    let desk = tempfile::tempdir().unwrap();
    let (rules, _) = display_rules(&AppConfig::default());

    let err = list_desktop_items(&desk.path().join("gone"), &rules).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn hand_edited_settings_file_is_honoured() {
    let desk = sample_desktop();
    let cfg_dir = tempfile::tempdir().unwrap();
    let path = cfg_dir.path().join("config.json");
    fs::write(
        &path,
        r#"{ "HideRegex": "^z", "HideExtensions": "Never", "Hotkey": "m" }"#,
    )
    .unwrap();

    let config = ConfigStore::new(&path).load_or_init().unwrap();
    assert_eq!(config.hotkey_binding().unwrap().to_string(), "Ctrl+Alt+M");

    let (rules, _) = display_rules(&config);
    let items = list_desktop_items(desk.path(), &rules).unwrap();
    assert!(!names(&items).contains(&"zeta.txt"));
    assert!(names(&items).contains(&"Browser.lnk"));
}
