// single-focus hover/selection state machine
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    Idle,
    Hovered(String),
    Selected(String),
}

impl FocusState {
    /// The one focused entry, if any.
    pub fn entry(&self) -> Option<&str> {
        match self {
            FocusState::Idle => None,
            FocusState::Hovered(name) | FocusState::Selected(name) => Some(name),
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, FocusState::Selected(_))
    }
}

/// Pointer input over a named boundary, plus closing the info panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusEvent {
    PointerEnter(String),
    PointerLeave(String),
    Click(String),
    Dismiss,
}

/// Transition table. Pairs not listed keep the current state.
///
/// | from          | event        | to            |
/// |---------------|--------------|---------------|
/// | Idle          | enter X      | Hovered(X)    |
/// | Hovered(X)    | enter Y      | Hovered(Y)    |
/// | Hovered(X)    | leave X      | Idle          |
/// | Idle/Hovered  | click X      | Selected(X)   |
/// | Selected(X)   | click Y      | Selected(Y)   |
/// | any           | dismiss      | Idle          |
///
/// A leave that names some other boundary is stale (an enter already moved
/// focus) and is ignored. A selected entry ignores hover traffic.
pub fn next_state(state: &FocusState, event: &FocusEvent) -> FocusState {
    use FocusEvent::*;
    use FocusState::*;

    match (state, event) {
        (_, Dismiss) => Idle,
        (_, Click(x)) => Selected(x.clone()),
        (Idle | Hovered(_), PointerEnter(x)) => Hovered(x.clone()),
        (Hovered(current), PointerLeave(x)) if current == x => Idle,
        (other, _) => other.clone(),
    }
}

/// Holder for the current focus. Returns whether a transition changed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusMachine {
    state: FocusState,
}

impl FocusMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FocusState {
        &self.state
    }

    pub fn handle(&mut self, event: &FocusEvent) -> bool {
        let next = next_state(&self.state, event);
        if next == self.state {
            return false;
        }
        trace!(from = ?self.state, to = ?next, "focus transition");
        self.state = next;
        true
    }

    pub fn reset(&mut self) {
        self.state = FocusState::Idle;
    }
}
