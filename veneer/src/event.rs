//! Input events fed to the enhancer.
//!
//! The enhancer does not read the terminal itself; the host application
//! translates whatever input source it has into [`UiEvent`] values and feeds
//! them to [`Enhancer::dispatch`](crate::enhancer::Enhancer::dispatch).
//! Conversions from crossterm's event types are provided for hosts that run
//! on a terminal.

/// A user-interface event.
///
/// Pointer events carry screen coordinates and are resolved against the
/// registered elements by hit testing. Text events (`InputChanged`, `Blur`)
/// carry the target element id directly, since the host owns focus and
/// editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Pointer press.
    Click {
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Pointer moved (drives hover enter/leave).
    MouseMove { x: u16, y: u16 },
    /// The value of an editable element changed.
    InputChanged { target: String, value: String },
    /// An editable element lost focus.
    Blur { target: String },
    /// Key press (not consumed by the enhancer; forwarded for completeness).
    Key { key: Key, modifiers: Modifiers },
    /// Screen resized.
    Resize { width: u16, height: u16 },
}

impl UiEvent {
    /// Translate a crossterm event into a [`UiEvent`], if it maps to one.
    ///
    /// Mouse drag, scroll and release events have no enhancer behavior and
    /// return `None`.
    pub fn from_crossterm(event: &crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{Event as CtEvent, MouseEventKind};

        match event {
            CtEvent::Key(key) => Some(UiEvent::Key {
                key: key.code.into(),
                modifiers: key.modifiers.into(),
            }),
            CtEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(button) => Some(UiEvent::Click {
                    x: mouse.column,
                    y: mouse.row,
                    button: button.into(),
                }),
                MouseEventKind::Moved => Some(UiEvent::MouseMove {
                    x: mouse.column,
                    y: mouse.row,
                }),
                _ => None,
            },
            CtEvent::Resize(width, height) => Some(UiEvent::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }
}

/// Simplified key representation.
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

/// Key modifiers.
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

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

// Conversion from crossterm types

impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            // Unmapped keys degrade to a NUL char; the enhancer ignores keys anyway.
            _ => Key::Char('\0'),
        }
    }
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
