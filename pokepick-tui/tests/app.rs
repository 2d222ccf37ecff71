use mockito::Matcher;
use pokepick_api::{ApiError, Client, NamedResource};
use pokepick_tui::app::{App, spawn_options_fetch};
use pokepick_tui::event::{AppEvent, Key, Modifiers, MouseButton};

fn resources(names: &[&str]) -> Vec<NamedResource> {
    names
        .iter()
        .map(|name| NamedResource {
            name: name.to_string(),
            url: format!("https://pokeapi.co/api/v2/pokemon/{name}/"),
        })
        .collect()
}

fn loaded_app(names: &[&str]) -> App {
    let mut app = App::new();
    app.handle_event(AppEvent::OptionsLoaded(Ok(resources(names))));
    app
}

fn key(key: Key) -> AppEvent {
    AppEvent::Key {
        key,
        modifiers: Modifiers::default(),
    }
}

fn ctrl(c: char) -> AppEvent {
    AppEvent::Key {
        key: Key::Char(c),
        modifiers: Modifiers {
            ctrl: true,
            ..Modifiers::default()
        },
    }
}

// ============================================================================
// Loading lifecycle
// ============================================================================

#[test]
fn test_starts_loading_with_empty_options() {
    let app = App::new();

    assert!(app.loading);
    assert!(app.options.is_empty());
    assert_eq!(app.autocomplete.filtered_count(), 0);
}

#[test]
fn test_options_loaded_sorts_and_fills_widget() {
    let app = loaded_app(&["squirtle", "bulbasaur", "charmander"]);

    assert!(!app.loading);
    let names: Vec<&str> = app.options.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["bulbasaur", "charmander", "squirtle"]);
    assert_eq!(app.autocomplete.filtered_count(), 3);
    assert_eq!(app.autocomplete.filtered_name(0), Some("bulbasaur"));
    assert_eq!(app.status, "3 options");
}

#[test]
fn test_fetch_error_leaves_options_empty() {
    let mut app = App::new();

    app.handle_event(AppEvent::OptionsLoaded(Err(ApiError::http(
        500, "boom",
    ))));

    assert!(!app.loading);
    assert!(app.options.is_empty());
    assert_eq!(app.autocomplete.filtered_count(), 0);
}

#[test]
fn test_late_result_is_ignored_after_settling() {
    let mut app = loaded_app(&["bulbasaur"]);

    app.handle_event(AppEvent::OptionsLoaded(Ok(resources(&["mew", "ditto"]))));

    assert_eq!(app.options.len(), 1);
    assert_eq!(app.options[0].name, "bulbasaur");
}

#[test]
fn test_input_is_ignored_while_loading() {
    let mut app = App::new();

    app.handle_event(key(Key::Char('c')));
    app.handle_event(key(Key::Down));

    assert_eq!(app.autocomplete.value(), "");
    assert!(!app.autocomplete.is_open());
}

#[test]
fn test_tick_advances_spinner_only_while_loading() {
    let mut app = App::new();

    app.handle_event(AppEvent::Tick);
    app.handle_event(AppEvent::Tick);
    assert_eq!(app.spinner_frame, 2);

    app.handle_event(AppEvent::OptionsLoaded(Ok(resources(&["mew"]))));
    app.handle_event(AppEvent::Tick);
    assert_eq!(app.spinner_frame, 2);
}

// ============================================================================
// Quit bindings
// ============================================================================

#[test]
fn test_ctrl_q_quits() {
    let mut app = loaded_app(&["bulbasaur"]);

    app.handle_event(ctrl('q'));

    assert!(app.should_quit);
}

#[test]
fn test_ctrl_c_quits_even_while_loading() {
    let mut app = App::new();

    app.handle_event(ctrl('c'));

    assert!(app.should_quit);
}

#[test]
fn test_plain_q_is_just_text() {
    let mut app = loaded_app(&["bulbasaur"]);

    app.handle_event(key(Key::Char('q')));

    assert!(!app.should_quit);
    assert_eq!(app.autocomplete.value(), "q");
}

// ============================================================================
// Selection and the alert modal
// ============================================================================

#[test]
fn test_selection_raises_alert() {
    let mut app = loaded_app(&["squirtle", "bulbasaur", "charmander"]);

    app.handle_event(key(Key::Down));
    app.handle_event(key(Key::Enter));

    let alert = app.alert.as_ref().expect("alert should be open");
    assert_eq!(alert.message(), "Selected: bulbasaur");
    assert_eq!(app.autocomplete.value(), "bulbasaur");
    assert_eq!(app.status, "Selected: bulbasaur");
}

#[test]
fn test_alert_captures_input_until_dismissed() {
    let mut app = loaded_app(&["bulbasaur"]);

    app.handle_event(key(Key::Down));
    app.handle_event(key(Key::Enter));
    assert!(app.alert.is_some());

    app.handle_event(key(Key::Char('x')));
    assert!(app.alert.is_some());
    assert_eq!(app.autocomplete.value(), "bulbasaur");

    app.handle_event(key(Key::Enter));
    assert!(app.alert.is_none());

    app.handle_event(key(Key::Char('x')));
    assert_eq!(app.autocomplete.value(), "bulbasaurx");
}

#[test]
fn test_escape_dismisses_alert() {
    let mut app = loaded_app(&["bulbasaur"]);

    app.handle_event(key(Key::Down));
    app.handle_event(key(Key::Enter));
    app.handle_event(key(Key::Escape));

    assert!(app.alert.is_none());
}

#[test]
fn test_status_tracks_match_count_while_typing() {
    let mut app = loaded_app(&["squirtle", "bulbasaur", "charmander"]);

    app.handle_event(key(Key::Char('s')));

    assert_eq!(app.status, "Searching: 's' (2 matches)");
}

// ============================================================================
// Mouse dispatch
// ============================================================================

#[test]
fn test_mouse_ignored_while_loading() {
    let mut app = App::new();

    app.handle_event(AppEvent::MouseDown {
        x: 5,
        y: 5,
        button: MouseButton::Left,
    });

    assert!(!app.autocomplete.is_open());
}

#[test]
fn test_non_left_buttons_are_ignored() {
    let mut app = loaded_app(&["bulbasaur"]);

    app.handle_event(key(Key::Down));
    assert!(app.autocomplete.is_open());

    app.handle_event(AppEvent::MouseDown {
        x: 0,
        y: 0,
        button: MouseButton::Right,
    });

    // A right click neither commits nor closes
    assert!(app.autocomplete.is_open());
    assert!(app.alert.is_none());
}

#[test]
fn test_outside_click_with_stale_areas_closes_dropdown() {
    let mut app = loaded_app(&["bulbasaur"]);

    app.handle_event(key(Key::Down));
    assert!(app.autocomplete.is_open());

    // Areas default to zero-sized until the first draw, so any press lands
    // outside the widget
    app.handle_event(AppEvent::MouseDown {
        x: 5,
        y: 5,
        button: MouseButton::Left,
    });

    assert!(!app.autocomplete.is_open());
    assert!(app.alert.is_none());
}

// ============================================================================
// Fetch task
// ============================================================================

#[tokio::test]
async fn test_fetch_task_delivers_options_over_the_channel() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v2/pokemon")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"count": 2, "next": null, "previous": null, "results": [
                {"name": "squirtle", "url": "https://pokeapi.co/api/v2/pokemon/7/"},
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"}
            ]}"#,
        )
        .create_async()
        .await;

    let client = Client::with_base_url(server.url()).expect("mock server url");
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    spawn_options_fetch(client, tx);

    let event = rx.recv().await.expect("fetch result should arrive");
    let mut app = App::new();
    app.handle_event(event);

    assert!(!app.loading);
    assert_eq!(app.status, "2 options");
    assert_eq!(app.autocomplete.filtered_name(0), Some("bulbasaur"));
    assert_eq!(app.autocomplete.filtered_name(1), Some("squirtle"));
}

#[tokio::test]
async fn test_fetch_task_delivers_errors_over_the_channel() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v2/pokemon")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("unavailable")
        .create_async()
        .await;

    let client = Client::with_base_url(server.url()).expect("mock server url");
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    spawn_options_fetch(client, tx);

    let event = rx.recv().await.expect("fetch result should arrive");
    let mut app = App::new();
    app.handle_event(event);

    assert!(!app.loading);
    assert!(app.options.is_empty());
    assert_eq!(app.status, "0 options");
}
