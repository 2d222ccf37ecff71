//! Input events - crossterm conversion plus the app-level event type.

use crossterm::event::Event as CrosstermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;
use pokepick_api::ApiError;
use pokepick_api::NamedResource;

/// Events driving the application loop.
#[derive(Debug)]
pub enum AppEvent {
    /// Key press, reduced to the simplified representation.
    Key { key: Key, modifiers: Modifiers },
    /// Mouse button pressed at a terminal cell.
    MouseDown { x: u16, y: u16, button: MouseButton },
    /// Terminal resized.
    Resize { width: u16, height: u16 },
    /// The startup fetch finished.
    OptionsLoaded(Result<Vec<NamedResource>, ApiError>),
    /// Periodic timer tick for spinner animation.
    Tick,
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

fn convert_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Delete => Some(Key::Delete),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        _ => None,
    }
}

/// Convert a raw crossterm event to an app event.
///
/// Key repeats and releases, mouse movement, and scroll are dropped here.
pub fn convert_event(event: CrosstermEvent) -> Option<AppEvent> {
    match event {
        CrosstermEvent::Key(key_event) => convert_key_event(key_event),
        CrosstermEvent::Mouse(mouse_event) => convert_mouse_event(mouse_event),
        CrosstermEvent::Resize(width, height) => Some(AppEvent::Resize { width, height }),
        _ => None,
    }
}

fn convert_key_event(event: KeyEvent) -> Option<AppEvent> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let key = convert_key(event.code)?;
    Some(AppEvent::Key {
        key,
        modifiers: event.modifiers.into(),
    })
}

fn convert_mouse_event(event: MouseEvent) -> Option<AppEvent> {
    match event.kind {
        MouseEventKind::Down(button) => Some(AppEvent::MouseDown {
            x: event.column,
            y: event.row,
            button: button.into(),
        }),
        _ => None,
    }
}
