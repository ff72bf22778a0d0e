use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    Up,
    Down,
}

/// Input the games react to, independent of the terminal backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Click {
        x: i32,
        y: i32,
        button: PointerButton,
    },
    Wheel(WheelDirection),
    Key(char),
}

impl InputEvent {
    /// Translate a crossterm event; events the games ignore yield `None`
    pub fn from_crossterm(event: &Event) -> Option<InputEvent> {
        match event {
            Event::Key(key) => Self::from_key(key),
            Event::Mouse(mouse) => Self::from_mouse(mouse),
            _ => None,
        }
    }

    fn from_key(key: &KeyEvent) -> Option<InputEvent> {
        // Only process Press events
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(InputEvent::Quit);
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),
            KeyCode::Char(c) => Some(InputEvent::Key(c.to_ascii_lowercase())),
            KeyCode::Up => Some(InputEvent::Wheel(WheelDirection::Up)),
            KeyCode::Down => Some(InputEvent::Wheel(WheelDirection::Down)),
            _ => None,
        }
    }

    fn from_mouse(mouse: &MouseEvent) -> Option<InputEvent> {
        let (x, y) = (mouse.column as i32, mouse.row as i32);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::Click {
                x,
                y,
                button: PointerButton::Left,
            }),
            MouseEventKind::Down(MouseButton::Right) => Some(InputEvent::Click {
                x,
                y,
                button: PointerButton::Right,
            }),
            MouseEventKind::ScrollUp => Some(InputEvent::Wheel(WheelDirection::Up)),
            MouseEventKind::ScrollDown => Some(InputEvent::Wheel(WheelDirection::Down)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_quit_keys() {
        for event in [
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
        ] {
            assert_eq!(InputEvent::from_crossterm(&event), Some(InputEvent::Quit));
        }
    }

    #[test]
    fn test_character_keys_are_lowercased() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('N'), KeyModifiers::SHIFT));
        assert_eq!(InputEvent::from_crossterm(&event), Some(InputEvent::Key('n')));
        let space = Event::Key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
        assert_eq!(InputEvent::from_crossterm(&space), Some(InputEvent::Key(' ')));
    }

    #[test]
    fn test_mouse_buttons_and_wheel() {
        assert_eq!(
            InputEvent::from_crossterm(&mouse(MouseEventKind::Down(MouseButton::Left), 12, 4)),
            Some(InputEvent::Click {
                x: 12,
                y: 4,
                button: PointerButton::Left
            })
        );
        assert_eq!(
            InputEvent::from_crossterm(&mouse(MouseEventKind::Down(MouseButton::Right), 1, 2)),
            Some(InputEvent::Click {
                x: 1,
                y: 2,
                button: PointerButton::Right
            })
        );
        assert_eq!(
            InputEvent::from_crossterm(&mouse(MouseEventKind::ScrollDown, 0, 0)),
            Some(InputEvent::Wheel(WheelDirection::Down))
        );
        assert_eq!(
            InputEvent::from_crossterm(&mouse(MouseEventKind::Moved, 3, 3)),
            None
        );
        assert_eq!(
            InputEvent::from_crossterm(&mouse(MouseEventKind::Down(MouseButton::Middle), 3, 3)),
            None
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(InputEvent::from_crossterm(&Event::Key(key)), None);
    }
}
