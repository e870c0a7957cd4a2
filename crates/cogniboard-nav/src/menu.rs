//! Mobile menu overlay state.

/// Whether the full-screen mobile menu overlay is currently shown.
///
/// Created in `Closed` on mount and mutated only by explicit user triggers
/// (or the forced reset in [`crate::NavState::set_width`]). Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}
