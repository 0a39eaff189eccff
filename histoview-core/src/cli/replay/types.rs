#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Enter(usize),
    Leave(usize),
    /// Only moves the clock.
    Tick,
}

impl PointerAction {
    pub fn as_str(self) -> &'static str {
        match self {
            PointerAction::Enter(_) => "enter",
            PointerAction::Leave(_) => "leave",
            PointerAction::Tick => "tick",
        }
    }

    pub fn bucket(self) -> Option<usize> {
        match self {
            PointerAction::Enter(b) | PointerAction::Leave(b) => Some(b),
            PointerAction::Tick => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub at_ms: u64,
    pub action: PointerAction,
}
