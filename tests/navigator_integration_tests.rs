use bridgelearn::core::action::{Action, Effect, update};
use bridgelearn::core::catalog::{Catalog, load_catalog};
use bridgelearn::core::config::{BridgeConfig, EnvOverrides, load_config_from, resolve_with_env};
use bridgelearn::core::kind::{ContentKind, FALLBACK_LABEL, resolve_kind_label};
use bridgelearn::core::navigator::{Navigator, View};
use bridgelearn::core::progress::average_progress;
use bridgelearn::core::routes::{NavigationSink, RouteTable};
use bridgelearn::core::state::App;
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

// ============================================================================
// Helper Functions
// ============================================================================

const CATALOG_JSON: &str = r#"[
    {
        "name": "Physics",
        "description": "Forces and motion",
        "icon": "atom",
        "content": [
            { "id": "1", "title": "Newton's Laws", "type": "SIMULATION", "progress": 0.2 },
            { "id": "2", "title": "Friction", "type": "READING", "progress": 0.4 },
            { "id": "3", "title": "Projectiles", "type": "VIDEO", "progress": 0.6 }
        ]
    },
    {
        "name": "Music",
        "description": "Rhythm and pitch",
        "icon": "note",
        "content": [
            { "id": "m1", "title": "Ear Training", "type": "AUDIO", "progress": 0.9 }
        ]
    },
    { "name": "Drafts", "description": "Nothing yet", "icon": "box", "content": [] }
]"#;

fn catalog_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CATALOG_JSON.as_bytes()).unwrap();
    file
}

#[derive(Default)]
struct Recorder(Vec<String>);

impl NavigationSink for Recorder {
    fn navigate(&mut self, destination: &str) {
        self.0.push(destination.to_string());
    }
}

// ============================================================================
// Catalog → Navigator
// ============================================================================

#[test]
fn test_loaded_catalog_drives_navigator() {
    let file = catalog_file();
    let catalog = Rc::new(load_catalog(file.path()).unwrap());
    let mut nav = Navigator::new(Rc::clone(&catalog));

    let transitions = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&transitions);
    nav.subscribe(move |view| {
        log.borrow_mut().push(match view {
            View::Dashboard(_) => "dashboard".to_string(),
            View::Detail(s) => s.name.clone(),
        });
    });

    match nav.current_view() {
        View::Dashboard(subjects) => assert_eq!(subjects.len(), 3),
        View::Detail(_) => panic!("should start on the dashboard"),
    }

    let physics = catalog.find("Physics").unwrap();
    nav.select_subject(physics);
    let music = catalog.find("Music").unwrap();
    nav.select_subject(music);
    nav.clear_selected_subject();
    nav.clear_selected_subject();

    assert_eq!(
        *transitions.borrow(),
        vec!["Physics".to_string(), "Music".to_string(), "dashboard".to_string()]
    );
}

#[test]
fn test_progress_and_labels_from_file() {
    let file = catalog_file();
    let catalog = load_catalog(file.path()).unwrap();

    let physics = catalog.find("Physics").unwrap();
    assert!((average_progress(&physics.content) - 0.4).abs() < 1e-6);

    let drafts = catalog.find("Drafts").unwrap();
    assert_eq!(average_progress(&drafts.content), 0.0);

    let music = catalog.find("Music").unwrap();
    assert_eq!(music.content[0].kind, ContentKind::Other("AUDIO".to_string()));
    assert_eq!(resolve_kind_label(&music.content[0].kind), FALLBACK_LABEL);
    assert_eq!(resolve_kind_label(&physics.content[1].kind).icon, "book-open-text");
}

#[test]
fn test_external_progress_update_is_visible_through_navigator() {
    let catalog = Rc::new(Catalog::from_json(CATALOG_JSON).unwrap());
    let mut nav = Navigator::new(Rc::clone(&catalog));
    nav.select_subject_at(0);

    // The data provider records progress on its own handle
    catalog.get(0).unwrap().content[0].set_progress(0.8);

    let subject = nav.current_view().subject().cloned().unwrap();
    assert!((average_progress(&subject.content) - 0.6).abs() < 1e-6);
}

// ============================================================================
// Routing
// ============================================================================

#[test]
fn test_only_item_one_navigates() {
    let catalog = Rc::new(Catalog::from_json(CATALOG_JSON).unwrap());
    let nav = Navigator::new(Rc::clone(&catalog));
    let routes = RouteTable::default();
    let mut sink = Recorder::default();

    for subject in catalog.subjects() {
        for content in &subject.content {
            nav.activate_content(content, &routes, &mut sink);
        }
    }

    assert_eq!(sink.0, vec!["Interactive".to_string()]);
}

#[test]
fn test_full_session_through_reducer() {
    let catalog = Rc::new(Catalog::from_json(CATALOG_JSON).unwrap());
    let config = resolve_with_env(&BridgeConfig::default(), None, &EnvOverrides::default());
    let mut app = App::from_config(catalog, &config);

    assert_eq!(update(&mut app, Action::SelectSubject(0)), Effect::None);
    assert_eq!(
        update(&mut app, Action::ActivateContent(0)),
        Effect::Navigate("Interactive".to_string())
    );
    assert_eq!(update(&mut app, Action::ActivateContent(2)), Effect::None);
    assert_eq!(update(&mut app, Action::Back), Effect::None);
    assert!(app.navigator.current_view().is_dashboard());
    assert_eq!(update(&mut app, Action::Back), Effect::None);
    assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
}

#[test]
fn test_config_file_routes_drive_reducer() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        r#"
[general]
log_level = "info"

[[routes]]
content_id = "2"
destination = "Quiz"
"#,
    )
    .unwrap();

    let loaded = load_config_from(&config_path).unwrap();
    let config = resolve_with_env(&loaded.config, None, &EnvOverrides::default());
    assert_eq!(config.log_level, log::LevelFilter::Info);

    let catalog = Rc::new(Catalog::from_json(CATALOG_JSON).unwrap());
    let mut app = App::from_config(catalog, &config);
    update(&mut app, Action::SelectSubject(0));

    // The file's routes replace the default "1" route
    assert_eq!(update(&mut app, Action::ActivateContent(0)), Effect::None);
    assert_eq!(
        update(&mut app, Action::ActivateContent(1)),
        Effect::Navigate("Quiz".to_string())
    );
}
