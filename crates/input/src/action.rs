/// Logical key identity, independent of any windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    D,
    W,
    S,
    U,
    J,
    O,
    L,
    P,
    Q,
}

/// A camera or viewer operation produced by one key.
///
/// Rotation and travel actions are applied once per tick while the key is
/// held; the rest fire once per press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    YawLeft,
    YawRight,
    PitchUp,
    PitchDown,
    SpeedUp,
    SpeedDown,
    HeightScaleUp,
    HeightScaleDown,
    ToggleFullscreen,
    Quit,
}

impl Action {
    /// Whether this action repeats every tick while its key is held, as
    /// opposed to firing once on press.
    pub fn is_held(self) -> bool {
        matches!(
            self,
            Self::YawLeft | Self::YawRight | Self::PitchUp | Self::PitchDown
        )
    }
}

/// Key-to-action table. Replaces per-key dispatch chains: the frame loop
/// looks up whatever the table says, so the operation set can be exercised
/// in tests without a window.
#[derive(Debug, Clone)]
pub struct Bindings {
    table: Vec<(Key, Action)>,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            table: vec![
                (Key::A, Action::YawLeft),
                (Key::D, Action::YawRight),
                (Key::W, Action::PitchUp),
                (Key::S, Action::PitchDown),
                (Key::U, Action::SpeedUp),
                (Key::J, Action::SpeedDown),
                (Key::O, Action::HeightScaleUp),
                (Key::L, Action::HeightScaleDown),
                (Key::P, Action::ToggleFullscreen),
                (Key::Q, Action::Quit),
            ],
        }
    }
}

impl Bindings {
    /// Look up the action bound to a key, if any.
    pub fn action(&self, key: Key) -> Option<Action> {
        self.table
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, action)| *action)
    }

    /// Rebind a key, replacing any existing binding for it.
    pub fn bind(&mut self, key: Key, action: Action) {
        if let Some(entry) = self.table.iter_mut().find(|(k, _)| *k == key) {
            tracing::debug!("rebinding {key:?} from {:?} to {action:?}", entry.1);
            entry.1 = action;
        } else {
            self.table.push((key, action));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_covers_all_operations() {
        let bindings = Bindings::default();
        assert_eq!(bindings.action(Key::A), Some(Action::YawLeft));
        assert_eq!(bindings.action(Key::D), Some(Action::YawRight));
        assert_eq!(bindings.action(Key::W), Some(Action::PitchUp));
        assert_eq!(bindings.action(Key::S), Some(Action::PitchDown));
        assert_eq!(bindings.action(Key::U), Some(Action::SpeedUp));
        assert_eq!(bindings.action(Key::J), Some(Action::SpeedDown));
        assert_eq!(bindings.action(Key::O), Some(Action::HeightScaleUp));
        assert_eq!(bindings.action(Key::L), Some(Action::HeightScaleDown));
        assert_eq!(bindings.action(Key::P), Some(Action::ToggleFullscreen));
        assert_eq!(bindings.action(Key::Q), Some(Action::Quit));
    }

    #[test]
    fn held_actions_are_exactly_the_rotations() {
        for action in [
            Action::YawLeft,
            Action::YawRight,
            Action::PitchUp,
            Action::PitchDown,
        ] {
            assert!(action.is_held());
        }
        for action in [
            Action::SpeedUp,
            Action::SpeedDown,
            Action::HeightScaleUp,
            Action::HeightScaleDown,
            Action::ToggleFullscreen,
            Action::Quit,
        ] {
            assert!(!action.is_held());
        }
    }

    #[test]
    fn rebind_replaces_existing_entry() {
        let mut bindings = Bindings::default();
        bindings.bind(Key::Q, Action::SpeedUp);
        assert_eq!(bindings.action(Key::Q), Some(Action::SpeedUp));
    }
}
