//! Signals sent by the history when its cursors move.

use std::sync::mpsc::{Sender, SyncSender};

/// Holds the optional slot of a history and forwards signals to it.
#[derive(Clone, Debug)]
pub(crate) struct Socket<S> {
    slot: Option<S>,
}

impl<S> Socket<S> {
    pub const fn new(slot: S) -> Socket<S> {
        Socket { slot: Some(slot) }
    }

    /// Replaces the slot, returning the old one.
    pub fn connect(&mut self, slot: Option<S>) -> Option<S> {
        core::mem::replace(&mut self.slot, slot)
    }

    pub fn disconnect(&mut self) -> Option<S> {
        self.slot.take()
    }
}

impl<S> Default for Socket<S> {
    fn default() -> Self {
        Socket { slot: None }
    }
}

impl<S: Slot> Socket<S> {
    /// The signal is only built when a slot is connected.
    pub fn emit(&mut self, signal: impl FnOnce() -> Signal) {
        if let Some(slot) = self.slot.as_mut() {
            slot.on_emit(signal());
        }
    }

    pub fn emit_if(&mut self, cond: bool, signal: impl FnOnce() -> Signal) {
        if cond {
            self.emit(signal);
        }
    }
}

/// A change in what the history can do next.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Signal {
    /// Undo became available (`true`) or unavailable (`false`).
    Undo(bool),
    /// Redo became available (`true`) or unavailable (`false`).
    Redo(bool),
    /// `sp` moved to the given position.
    Cursor(usize),
}

/// Receiver of the signals a [`History`](crate::History) sends.
///
/// Connect a slot to keep undo and redo buttons in sync with the history
/// without polling [`can_undo`](crate::History::can_undo) and
/// [`can_redo`](crate::History::can_redo). Closures taking a [`Signal`] and
/// mpsc senders are slots, and `()` ignores every signal.
///
/// # Examples
/// ```
/// # use std::sync::mpsc;
/// # use action_history::{History, List, ListAction, Signal};
/// let (sender, receiver) = mpsc::channel();
/// let mut iter = receiver.try_iter();
///
/// let mut list = List::new();
/// let mut history = History::builder().connect(sender).build();
///
/// let pair = ListAction::push_pair(&list, 'a');
/// history.insert_and_apply(&mut list, pair).unwrap();
/// assert_eq!(iter.next(), Some(Signal::Undo(true)));
/// assert_eq!(iter.next(), Some(Signal::Cursor(1)));
/// assert_eq!(iter.next(), None);
///
/// history.undo(&mut list);
/// assert_eq!(iter.next(), Some(Signal::Undo(false)));
/// assert_eq!(iter.next(), Some(Signal::Redo(true)));
/// assert_eq!(iter.next(), Some(Signal::Cursor(0)));
/// assert_eq!(iter.next(), None);
/// ```
pub trait Slot {
    /// Called once for every signal, in the order the changes happened.
    fn on_emit(&mut self, signal: Signal);
}

impl Slot for () {
    fn on_emit(&mut self, _: Signal) {}
}

impl<F: FnMut(Signal)> Slot for F {
    fn on_emit(&mut self, signal: Signal) {
        self(signal)
    }
}

// A disconnected receiver is not an error for the history.
impl Slot for Sender<Signal> {
    fn on_emit(&mut self, signal: Signal) {
        self.send(signal).ok();
    }
}

impl Slot for SyncSender<Signal> {
    fn on_emit(&mut self, signal: Signal) {
        self.send(signal).ok();
    }
}
