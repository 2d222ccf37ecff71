//! Application state and event handling.

use log::{debug, error};
use tokio::sync::mpsc::UnboundedSender;

use pokepick_api::{ApiError, Client, NamedResource, model};

use crate::event::{AppEvent, Key, Modifiers, MouseButton};
use crate::modal::Alert;
use crate::widgets::autocomplete::{Autocomplete, AutocompleteAreas, AutocompleteEvent};

/// The page requested at startup.
pub const PAGE_LIMIT: u32 = 50;
/// Offset of the startup page.
pub const PAGE_OFFSET: u32 = 0;

/// Root application state.
pub struct App {
    /// The fetched option list, sorted by name.
    pub options: Vec<NamedResource>,
    /// True until the startup fetch resolves.
    pub loading: bool,
    /// The picker widget.
    pub autocomplete: Autocomplete,
    /// Widget areas drawn in the last frame, for mouse dispatch.
    pub areas: AutocompleteAreas,
    /// Active notification modal, if any.
    pub alert: Option<Alert>,
    /// Status line above the input.
    pub status: String,
    /// Advances on ticks while loading.
    pub spinner_frame: usize,
    /// Set when the user asks to quit.
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
            loading: true,
            autocomplete: Autocomplete::with_placeholder("Type to search..."),
            areas: AutocompleteAreas::default(),
            alert: None,
            status: "Loading options...".to_string(),
            spinner_frame: 0,
            should_quit: false,
        }
    }

    /// Apply one event to the state. All transitions happen here.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key { key, modifiers } => self.handle_key(key, modifiers),
            AppEvent::MouseDown { x, y, button } => self.handle_mouse(x, y, button),
            // The next draw picks up the new size
            AppEvent::Resize { .. } => {}
            AppEvent::OptionsLoaded(result) => self.apply_options(result),
            AppEvent::Tick => {
                if self.loading {
                    self.spinner_frame = self.spinner_frame.wrapping_add(1);
                }
            }
        }
    }

    fn handle_key(&mut self, key: Key, modifiers: Modifiers) {
        if modifiers.ctrl && matches!(key, Key::Char('q') | Key::Char('c')) {
            self.should_quit = true;
            return;
        }

        // The alert captures everything until dismissed
        if self.alert.is_some() {
            if matches!(key, Key::Enter | Key::Escape) {
                self.alert = None;
            }
            return;
        }

        if self.loading {
            return;
        }

        match self.autocomplete.on_key(key, modifiers) {
            Some(AutocompleteEvent::Selected(name)) => self.on_selected(name),
            Some(AutocompleteEvent::Changed) => {
                self.status = format!(
                    "Searching: '{}' ({} matches)",
                    self.autocomplete.value(),
                    self.autocomplete.filtered_count()
                );
            }
            None => {}
        }
    }

    fn handle_mouse(&mut self, x: u16, y: u16, button: MouseButton) {
        if button != MouseButton::Left || self.alert.is_some() || self.loading {
            return;
        }

        let Some(hit) = self.areas.hit_test(x, y) else {
            return;
        };

        if let Some(AutocompleteEvent::Selected(name)) = self.autocomplete.on_mouse_down(hit) {
            self.on_selected(name);
        }
    }

    fn on_selected(&mut self, name: String) {
        debug!("selected '{name}'");
        self.status = format!("Selected: {name}");
        self.alert = Some(Alert::selection(&name));
    }

    fn apply_options(&mut self, result: Result<Vec<NamedResource>, ApiError>) {
        // idle -> loading -> settled, never revisited
        if !self.loading {
            debug!("discarding options result after load already settled");
            return;
        }
        self.loading = false;

        match result {
            Ok(mut options) => {
                model::sort_by_name(&mut options);
                debug!("loaded {} options", options.len());
                self.status = format!("{} options", options.len());
                self.autocomplete.set_options(options.clone());
                self.options = options;
            }
            Err(e) => {
                error!("failed to load options: {e}");
                self.status = "0 options".to_string();
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Kick off the one-shot options fetch, reporting back over the channel.
///
/// If the receiver is gone by the time the fetch finishes, the result is
/// dropped without touching any state.
pub fn spawn_options_fetch(client: Client, tx: UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        let result = client.list_pokemon(PAGE_LIMIT, PAGE_OFFSET).await;
        if tx.send(AppEvent::OptionsLoaded(result)).is_err() {
            debug!("options fetch finished after shutdown; discarding result");
        }
    });
}
