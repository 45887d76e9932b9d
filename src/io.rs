use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;

use crate::camera::DOTS_X;
use crate::camera::DOTS_Y;
use crate::events::Event;

/// Converts a crossterm event into an application event.
///
/// Mouse positions are given in terminal characters and converted to braille pixels, pointing
/// at the top left dot of the character.
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        CrossTermEvent::Key(key_event) => convert_key(key_event),
        CrossTermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(Event::Paint {
            x: column as i32 * DOTS_X as i32,
            y: row as i32 * DOTS_Y as i32,
        }),
        CrossTermEvent::Resize(cols, rows) => Some(Event::Resize { cols, rows }),
        _ => None,
    }
}

fn convert_key(key_event: KeyEvent) -> Option<Event> {
    // Windows reports releases too
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    match key_event {
        KeyEvent {
            code: KeyCode::Char('q') | KeyCode::Esc,
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => Some(Event::Exit),
        KeyEvent {
            code: KeyCode::Enter,
            ..
        } => Some(Event::Toggle),
        KeyEvent {
            code: KeyCode::Char('g'),
            ..
        } => Some(Event::ToggleGridlines),
        _ => None,
    }
}
