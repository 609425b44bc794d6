//! Move and quit notification channels.
//!
//! Each channel is a plain list of subscribers called synchronously, in the
//! order they subscribed. There is no unsubscribe; channels are filled once
//! while wiring up a game and then handed to [`BridgeGame`](super::BridgeGame).

use std::fmt;

use super::model::{GameMapStatus, GameResult};

/// Receives a snapshot after every non-winning move.
pub trait MoveListener {
    fn on_move(&mut self, status: &GameMapStatus);
}

/// Receives the final snapshot and result when the game quits.
pub trait QuitListener {
    fn on_quit(&mut self, status: &GameMapStatus, result: &GameResult);
}

impl<F> MoveListener for F
where
    F: FnMut(&GameMapStatus),
{
    fn on_move(&mut self, status: &GameMapStatus) {
        self(status)
    }
}

impl<F> QuitListener for F
where
    F: FnMut(&GameMapStatus, &GameResult),
{
    fn on_quit(&mut self, status: &GameMapStatus, result: &GameResult) {
        self(status, result)
    }
}

/// Subscribers of the move channel.
#[derive(Default)]
pub struct MoveEvents {
    listeners: Vec<Box<dyn MoveListener>>,
}

impl MoveEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a subscriber.
    pub fn subscribe(&mut self, listener: impl MoveListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Deliver a snapshot to every subscriber, in subscription order.
    pub fn notify(&mut self, status: &GameMapStatus) {
        for listener in &mut self.listeners {
            listener.on_move(status);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for MoveEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoveEvents")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Subscribers of the quit channel.
#[derive(Default)]
pub struct QuitEvents {
    listeners: Vec<Box<dyn QuitListener>>,
}

impl QuitEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a subscriber.
    pub fn subscribe(&mut self, listener: impl QuitListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Deliver the final snapshot and result to every subscriber, in
    /// subscription order.
    pub fn notify(&mut self, status: &GameMapStatus, result: &GameResult) {
        for listener in &mut self.listeners {
            listener.on_quit(status, result);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for QuitEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuitEvents")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Lane;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn snapshot() -> GameMapStatus {
        GameMapStatus::new(vec![Lane::Up, Lane::Down, Lane::Up], vec![Lane::Up])
    }

    #[test]
    fn test_move_events_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut events = MoveEvents::new();

        for name in ["first", "second"] {
            let log = Rc::clone(&log);
            events.subscribe(move |status: &GameMapStatus| {
                log.borrow_mut().push((name, status.path.len()));
            });
        }
        assert_eq!(events.len(), 2);

        events.notify(&snapshot());
        assert_eq!(*log.borrow(), vec![("first", 1), ("second", 1)]);
    }

    #[test]
    fn test_quit_events_deliver_result() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut events = QuitEvents::new();
        {
            let seen = Rc::clone(&seen);
            events.subscribe(move |_: &GameMapStatus, result: &GameResult| {
                seen.borrow_mut().push(*result);
            });
        }

        events.notify(&snapshot(), &GameResult::new(false, 3));
        assert_eq!(*seen.borrow(), vec![GameResult::new(false, 3)]);
    }

    #[test]
    fn test_empty_channels() {
        let mut moves = MoveEvents::new();
        let mut quits = QuitEvents::new();
        assert!(moves.is_empty());
        assert!(quits.is_empty());

        // Notifying nobody is fine
        moves.notify(&snapshot());
        quits.notify(&snapshot(), &GameResult::new(true, 1));
    }
}
