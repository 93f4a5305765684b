//! Keybinding definitions for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextPage,
    PrevPage,
    SwitchPage(usize),
    MoveUp,
    MoveDown,
    OpenSearch,
    NewItem,
    Configure,
    ToggleAgent,
    StopAgent,
    SyncAll,
    ResetSession,
    Confirm,
    Cancel,
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent {
        code, modifiers, ..
    } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('/') => Some(Action::OpenSearch),
        KeyCode::Char('n') => Some(Action::NewItem),
        KeyCode::Char('c') => Some(Action::Configure),
        KeyCode::Char('t') => Some(Action::ToggleAgent),
        KeyCode::Char('x') => Some(Action::StopAgent),
        KeyCode::Char('y') => Some(Action::SyncAll),
        KeyCode::Char('R') => Some(Action::ResetSession),
        KeyCode::Char('?') => Some(Action::SwitchPage(7)),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Tab => Some(Action::NextPage),
        KeyCode::BackTab => Some(Action::PrevPage),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let digit = c as usize - '0' as usize;
            if (1..=8).contains(&digit) {
                Some(Action::SwitchPage(digit - 1))
            } else {
                None
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn test_digit_keys_map_to_pages() {
        assert_eq!(map_key(key(KeyCode::Char('1'))), Some(Action::SwitchPage(0)));
        assert_eq!(map_key(key(KeyCode::Char('8'))), Some(Action::SwitchPage(7)));
        assert_eq!(map_key(key(KeyCode::Char('9'))), None);
        assert_eq!(map_key(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        };
        assert_eq!(map_key(event), Some(Action::Quit));
    }

    #[test]
    fn test_plain_c_configures() {
        assert_eq!(map_key(key(KeyCode::Char('c'))), Some(Action::Configure));
    }

    #[test]
    fn test_vim_style_movement() {
        assert_eq!(map_key(key(KeyCode::Char('j'))), Some(Action::MoveDown));
        assert_eq!(map_key(key(KeyCode::Char('k'))), Some(Action::MoveUp));
    }
}
