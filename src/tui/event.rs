use crossterm::event::{self, Event, KeyCode};

/// TUI-specific input events
pub enum TuiEvent {
    Quit,
    PanNorth,
    PanSouth,
    PanEast,
    PanWest,
    ZoomIn,
    ZoomOut,
    CenterOnUser,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                log::debug!("Key event: {:?}", key_event.code);
                match key_event.code {
                    KeyCode::Char('q') | KeyCode::Esc => Some(TuiEvent::Quit),
                    KeyCode::Up => Some(TuiEvent::PanNorth),
                    KeyCode::Down => Some(TuiEvent::PanSouth),
                    KeyCode::Left => Some(TuiEvent::PanWest),
                    KeyCode::Right => Some(TuiEvent::PanEast),
                    KeyCode::Char('+') | KeyCode::Char('=') => Some(TuiEvent::ZoomIn),
                    KeyCode::Char('-') => Some(TuiEvent::ZoomOut),
                    KeyCode::Char('c') => Some(TuiEvent::CenterOnUser),
                    _ => None,
                }
            }
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}
