// Input handling with configurable key behaviors
//
// Action keys trigger once per press; navigation keys trigger on press and
// then repeat while held. Query text never goes through here: every typed
// character must land in the input box, held or not.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum gap between triggers of a held action key, for terminals that
/// never send release events
const ACTION_REPEAT_GAP: Duration = Duration::from_millis(150);

/// Defines how a key should behave when pressed/held
#[derive(Debug, Clone, Copy)]
pub enum KeyBehavior {
    /// Trigger once per press (Enter, Tab, toggles)
    StateChange,

    /// Trigger on press, then repeat after an initial delay (arrows, paging)
    Repeatable {
        initial_delay: Duration,
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// Arrow keys
    pub fn navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(500),
            repeat_interval: Duration::from_millis(50),
        }
    }

    /// PageUp/PageDown/Home/End
    pub fn fast_navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(300),
            repeat_interval: Duration::from_millis(30),
        }
    }
}

/// Tracks the state of a single key
#[derive(Debug, Default)]
struct KeyState {
    is_pressed: bool,
    press_started: Option<Instant>,
    last_triggered: Option<Instant>,
}

impl KeyState {
    fn release(&mut self) {
        *self = Self::default();
    }
}

/// Input handler that manages key behaviors
pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
    key_behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            key_states: HashMap::new(),
            key_behaviors: HashMap::new(),
        }
    }

    /// Configure multiple keys with the same behavior
    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.key_behaviors.insert(*key, behavior);
        }
    }

    /// Handle a key press event
    /// Returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.press_at(key, Instant::now())
    }

    fn press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self
            .key_behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::StateChange);

        let state = self.key_states.entry(key).or_default();

        if !state.is_pressed {
            state.is_pressed = true;
            state.press_started = Some(now);
            state.last_triggered = Some(now);
            return true;
        }

        let (Some(press_start), Some(last)) = (state.press_started, state.last_triggered) else {
            return false;
        };

        let fire = match behavior {
            KeyBehavior::StateChange => now.duration_since(last) >= ACTION_REPEAT_GAP,
            KeyBehavior::Repeatable {
                initial_delay,
                repeat_interval,
            } => {
                now.duration_since(press_start) >= initial_delay
                    && now.duration_since(last) >= repeat_interval
            }
        };

        if fire {
            state.last_triggered = Some(now);
        }
        fire
    }

    /// Handle a key release event
    pub fn handle_key_release(&mut self, key: KeyCode) {
        if let Some(state) = self.key_states.get_mut(&key) {
            state.release();
        }
    }

    /// Navigation keys repeat; action keys trigger once per press
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        handler.configure_keys(&[KeyCode::Up, KeyCode::Down], KeyBehavior::navigation());

        handler.configure_keys(
            &[
                KeyCode::PageUp,
                KeyCode::PageDown,
                KeyCode::Home,
                KeyCode::End,
            ],
            KeyBehavior::fast_navigation(),
        );

        handler.configure_keys(
            &[
                KeyCode::Enter,
                KeyCode::Esc,
                KeyCode::Tab,
                KeyCode::BackTab,
                // Ctrl+Y / Ctrl+L
                KeyCode::Char('y'),
                KeyCode::Char('l'),
            ],
            KeyBehavior::StateChange,
        );

        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_change_no_repeat() {
        let mut handler = InputHandler::with_default_config();
        let t0 = Instant::now();

        assert!(handler.press_at(KeyCode::Enter, t0));

        // Held: no re-trigger inside the gap
        assert!(!handler.press_at(KeyCode::Enter, t0 + Duration::from_millis(20)));
        assert!(!handler.press_at(KeyCode::Enter, t0 + Duration::from_millis(100)));

        handler.handle_key_release(KeyCode::Enter);
        assert!(handler.press_at(KeyCode::Enter, t0 + Duration::from_millis(110)));
    }

    #[test]
    fn test_state_change_without_release_events() {
        let mut handler = InputHandler::with_default_config();
        let t0 = Instant::now();

        assert!(handler.press_at(KeyCode::Tab, t0));
        assert!(handler.press_at(KeyCode::Tab, t0 + Duration::from_millis(200)));
    }

    #[test]
    fn test_repeatable_with_delay() {
        let mut handler = InputHandler::new();
        handler.configure_keys(
            &[KeyCode::Down],
            KeyBehavior::Repeatable {
                initial_delay: Duration::from_millis(100),
                repeat_interval: Duration::from_millis(50),
            },
        );
        let t0 = Instant::now();

        assert!(handler.press_at(KeyCode::Down, t0));
        assert!(!handler.press_at(KeyCode::Down, t0 + Duration::from_millis(10)));
        assert!(handler.press_at(KeyCode::Down, t0 + Duration::from_millis(110)));
        assert!(!handler.press_at(KeyCode::Down, t0 + Duration::from_millis(130)));
        assert!(handler.press_at(KeyCode::Down, t0 + Duration::from_millis(170)));
    }
}
