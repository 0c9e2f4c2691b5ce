use crate::grid::Position;

/// Events emitted while carving and solving that renderers can handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeEvent {
    /// The cell's walls will not change for the rest of the carve
    CellFinalized(Position),

    /// The solver stepped from `from` to `to`, or retreated over that edge when `undone`
    Move {
        from: Position,
        to: Position,
        undone: bool,
    },
}

/// Synchronous sink for [`MazeEvent`]s.
pub trait Observer {
    fn handle_event(&mut self, event: &MazeEvent);
}

/// Headless operation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    #[inline]
    fn handle_event(&mut self, _event: &MazeEvent) {}
}

impl<F> Observer for F
where
    F: FnMut(&MazeEvent),
{
    fn handle_event(&mut self, event: &MazeEvent) {
        self(event)
    }
}

/// Records every event in order, for replaying a run after the fact.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    pub events: Vec<MazeEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finalized(&self) -> impl Iterator<Item = Position> + '_ {
        self.events.iter().filter_map(|event| match event {
            MazeEvent::CellFinalized(position) => Some(*position),
            _ => None,
        })
    }

    pub fn moves(&self) -> impl Iterator<Item = (Position, Position, bool)> + '_ {
        self.events.iter().filter_map(|event| match *event {
            MazeEvent::Move { from, to, undone } => Some((from, to, undone)),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Observer for EventLog {
    fn handle_event(&mut self, event: &MazeEvent) {
        self.events.push(*event);
    }
}
