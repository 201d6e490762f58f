//! Idle/Running state machine for the self-rescheduling frame loop.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopEvent {
    /// A burst added this many flakes.
    Spawned(usize),
    /// A tick finished with this many flakes still alive.
    TickFinished { remaining: usize },
}

impl LoopState {
    /// The single transition function. Only a non-empty spawn starts the loop
    /// and only an empty end-of-tick stops it; everything else keeps the state.
    pub fn transition(self, event: LoopEvent) -> LoopState {
        match (self, event) {
            (LoopState::Idle, LoopEvent::Spawned(n)) if n > 0 => LoopState::Running,
            (LoopState::Running, LoopEvent::TickFinished { remaining: 0 }) => LoopState::Idle,
            (state, _) => state,
        }
    }

    pub fn is_running(self) -> bool {
        self == LoopState::Running
    }
}
