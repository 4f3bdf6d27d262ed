//! Keyboard key names (as in `KeyboardEvent.key`) and the legacy numeric
//! key codes.

pub const ARROW_UP: &str = "ArrowUp";
pub const ARROW_DOWN: &str = "ArrowDown";
pub const ARROW_LEFT: &str = "ArrowLeft";
pub const ARROW_RIGHT: &str = "ArrowRight";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum KeyCode {
    Backspace = 8,
    Tab = 9,
    Enter = 13,
    Esc = 27,
    End = 35,
    Home = 36,
    LeftArrow = 37,
    UpArrow = 38,
    RightArrow = 39,
    DownArrow = 40,
    Del = 46,
}

impl KeyCode {
    pub fn from_code(code: u32) -> Option<Self> {
        let key = match code {
            8 => KeyCode::Backspace,
            9 => KeyCode::Tab,
            13 => KeyCode::Enter,
            27 => KeyCode::Esc,
            35 => KeyCode::End,
            36 => KeyCode::Home,
            37 => KeyCode::LeftArrow,
            38 => KeyCode::UpArrow,
            39 => KeyCode::RightArrow,
            40 => KeyCode::DownArrow,
            46 => KeyCode::Del,
            _ => return None,
        };
        Some(key)
    }

    pub fn is_arrow(self) -> bool {
        matches!(
            self,
            KeyCode::LeftArrow | KeyCode::UpArrow | KeyCode::RightArrow | KeyCode::DownArrow
        )
    }
}

pub fn is_arrow_key(value: &str) -> bool {
    matches!(value, ARROW_UP | ARROW_DOWN | ARROW_LEFT | ARROW_RIGHT)
}

pub fn is_arrow_key_code(code: u32) -> bool {
    KeyCode::from_code(code).is_some_and(KeyCode::is_arrow)
}
