//! A linear history of action pairs.

mod builder;
mod display;
mod queue;

pub use builder::Builder;
pub use display::Display;
pub use queue::Queue;

use crate::socket::{Signal, Slot, Socket};
use crate::{Action, ActionPair};
use core::fmt;
use tracing::{debug, trace};

/// A linear history of action pairs.
///
/// The history keeps every recorded pair in a single buffer together with two
/// cursors. Pairs below `sp` are applied to the target, pairs in `sp..top` have
/// been undone and can be redone. Recording a new pair while there are pairs
/// to redo overwrites the slot at `sp` in place and collapses `top` onto `sp`,
/// so the remaining undone pairs can no longer be reached.
///
/// Calling [`undo`](History::undo) with nothing to undo, or
/// [`redo`](History::redo) with nothing to redo, does nothing and returns `None`.
///
/// # Examples
/// ```
/// # use action_history::{History, List, ListAction};
/// let mut list = List::new();
/// let mut history = History::new();
/// let pair = ListAction::push_pair(&list, 'a');
/// history.insert_and_apply(&mut list, pair).unwrap();
/// let pair = ListAction::push_pair(&list, 'b');
/// history.insert_and_apply(&mut list, pair).unwrap();
/// let pair = ListAction::push_pair(&list, 'c');
/// history.insert_and_apply(&mut list, pair).unwrap();
/// assert_eq!(list.as_slice(), ['a', 'b', 'c']);
/// history.undo(&mut list).unwrap().unwrap();
/// history.undo(&mut list).unwrap().unwrap();
/// history.undo(&mut list).unwrap().unwrap();
/// assert!(list.is_empty());
/// history.redo(&mut list).unwrap().unwrap();
/// history.redo(&mut list).unwrap().unwrap();
/// history.redo(&mut list).unwrap().unwrap();
/// assert_eq!(list.as_slice(), ['a', 'b', 'c']);
/// ```
#[derive(Clone)]
pub struct History<A, S = ()> {
    pub(crate) entries: Vec<ActionPair<A>>,
    pub(crate) sp: usize,
    pub(crate) top: usize,
    socket: Socket<S>,
}

impl<A> History<A> {
    /// Returns a new history.
    pub fn new() -> History<A> {
        History::builder().build()
    }
}

impl<A, S> History<A, S> {
    /// Returns a new history builder.
    pub fn builder() -> Builder<A, S> {
        Builder::default()
    }

    /// Reserves capacity for at least `additional` more pairs.
    ///
    /// # Panics
    /// Panics if the new capacity overflows usize.
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
    }

    /// Returns the capacity of the history.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Shrinks the capacity of the history as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.entries.shrink_to_fit();
    }

    /// Returns the number of pairs stored in the history.
    ///
    /// This includes pairs beyond [`top`](History::top) that can no longer be redone.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the position between the applied and the undone pairs.
    pub fn sp(&self) -> usize {
        self.sp
    }

    /// Returns the position after the last pair that can be redone.
    pub fn top(&self) -> usize {
        self.top
    }

    /// Returns `true` if the history can undo.
    pub fn can_undo(&self) -> bool {
        self.sp > 0
    }

    /// Returns `true` if the history can redo.
    pub fn can_redo(&self) -> bool {
        self.sp < self.top
    }

    /// Sets how the signal should be handled when the state changes.
    ///
    /// The previous slot is returned if it exists.
    pub fn connect(&mut self, slot: S) -> Option<S> {
        self.socket.connect(Some(slot))
    }

    /// Removes and returns the slot if it exists.
    pub fn disconnect(&mut self) -> Option<S> {
        self.socket.disconnect()
    }

    /// Returns an iterator over the pairs that can be undone or redone.
    pub fn entries(&self) -> core::slice::Iter<'_, ActionPair<A>> {
        self.entries[..self.top].iter()
    }

    /// Returns a queue.
    pub fn queue(&mut self) -> Queue<A, S> {
        Queue::from(self)
    }

    /// Returns a structure for configurable formatting of the history.
    pub fn display(&self) -> Display<A, S> {
        Display::from(self)
    }
}

impl<A, S: Slot> History<A, S> {
    /// Records the pair at `sp` without applying it.
    ///
    /// If `sp` is at the end of the buffer the pair is appended, otherwise the
    /// pair at `sp` is dropped and replaced. In both cases `top` ends up at `sp`,
    /// so nothing can be redone afterwards.
    pub fn insert(&mut self, pair: ActionPair<A>) {
        let could_undo = self.can_undo();
        let could_redo = self.can_redo();
        if self.sp == self.entries.len() {
            self.entries.push(pair);
        } else {
            if could_redo {
                debug!(
                    sp = self.sp,
                    top = self.top,
                    "discarding {} redo entries",
                    self.top - self.sp
                );
            }
            self.entries[self.sp] = pair;
        }
        self.sp += 1;
        self.top = self.sp;
        trace!(sp = self.sp, top = self.top, len = self.entries.len(), "insert");
        self.socket.emit_if(could_redo, || Signal::Redo(false));
        self.socket.emit_if(!could_undo, || Signal::Undo(true));
        self.socket.emit(|| Signal::Cursor(self.sp));
    }

    /// Removes all pairs from the history without undoing them.
    pub fn clear(&mut self) {
        let could_undo = self.can_undo();
        let could_redo = self.can_redo();
        self.entries.clear();
        self.sp = 0;
        self.top = 0;
        trace!("clear");
        self.socket.emit_if(could_undo, || Signal::Undo(false));
        self.socket.emit_if(could_redo, || Signal::Redo(false));
        self.socket.emit_if(could_undo, || Signal::Cursor(0));
    }
}

impl<A: Action, S: Slot> History<A, S> {
    /// Records the pair with [`insert`](History::insert) and then applies its
    /// forward action.
    ///
    /// # Errors
    /// If the forward action fails, the error is returned. The pair stays
    /// recorded at `sp - 1`, so anything that could be redone before is gone.
    pub fn insert_and_apply(
        &mut self,
        target: &mut A::Target,
        pair: ActionPair<A>,
    ) -> crate::Result<A> {
        self.insert(pair);
        let result = self.entries[self.sp - 1].apply(target);
        if result.is_err() {
            debug!(sp = self.sp, "forward action failed");
        }
        result
    }

    /// Moves `sp` down and applies the inverse action of the pair at the new `sp`.
    ///
    /// Returns `None` if there is nothing to undo.
    ///
    /// # Errors
    /// If the inverse action fails, the error is returned. `sp` has already
    /// moved, so the next call continues with the pair below it.
    pub fn undo(&mut self, target: &mut A::Target) -> Option<crate::Result<A>> {
        self.can_undo().then(|| {
            let old = self.sp;
            self.sp -= 1;
            trace!(sp = self.sp, top = self.top, "undo");
            self.socket.emit_if(old == 1, || Signal::Undo(false));
            self.socket.emit_if(old == self.top, || Signal::Redo(true));
            self.socket.emit(|| Signal::Cursor(self.sp));
            let result = self.entries[self.sp].revert(target);
            if result.is_err() {
                debug!(sp = self.sp, "inverse action failed");
            }
            result
        })
    }

    /// Applies the forward action of the pair at `sp` and moves `sp` up.
    ///
    /// Returns `None` if there is nothing to redo.
    ///
    /// # Errors
    /// If the forward action fails, the error is returned and `sp` is left as is.
    pub fn redo(&mut self, target: &mut A::Target) -> Option<crate::Result<A>> {
        self.can_redo().then(|| {
            let old = self.sp;
            if let Err(err) = self.entries[old].apply(target) {
                debug!(sp = old, "forward action failed");
                return Err(err);
            }
            self.sp += 1;
            trace!(sp = self.sp, top = self.top, "redo");
            self.socket.emit_if(old == 0, || Signal::Undo(true));
            self.socket.emit_if(self.sp == self.top, || Signal::Redo(false));
            self.socket.emit(|| Signal::Cursor(self.sp));
            Ok(())
        })
    }

    /// Repeatedly calls [`undo`](History::undo) or [`redo`](History::redo)
    /// until `sp` reaches `at`.
    ///
    /// Returns `None` if `at` is beyond [`top`](History::top).
    ///
    /// # Errors
    /// If an action fails, the error is returned and `sp` is left where it stopped.
    pub fn go_to(&mut self, target: &mut A::Target, at: usize) -> Option<crate::Result<A>> {
        if at > self.top {
            return None;
        }
        let could_undo = self.can_undo();
        let could_redo = self.can_redo();
        let old = self.sp;
        // Temporarily remove slot so they are not called each iteration.
        let slot = self.socket.disconnect();
        let undo_or_redo = if at > self.sp {
            History::redo
        } else {
            History::undo
        };
        let mut result = Ok(());
        while self.sp != at {
            if let Some(Err(err)) = undo_or_redo(self, target) {
                result = Err(err);
                break;
            }
        }
        self.socket.connect(slot);
        let can_undo = self.can_undo();
        let can_redo = self.can_redo();
        self.socket
            .emit_if(could_undo != can_undo, || Signal::Undo(can_undo));
        self.socket
            .emit_if(could_redo != can_redo, || Signal::Redo(can_redo));
        self.socket.emit_if(old != self.sp, || Signal::Cursor(self.sp));
        Some(result)
    }
}

impl<A: fmt::Display, S> History<A, S> {
    /// Returns the string of the pair which will be undone
    /// in the next call to [`undo`](History::undo).
    pub fn undo_text(&self) -> Option<String> {
        self.sp.checked_sub(1).and_then(|i| self.text(i))
    }

    /// Returns the string of the pair which will be redone
    /// in the next call to [`redo`](History::redo).
    pub fn redo_text(&self) -> Option<String> {
        self.can_redo().then(|| self.text(self.sp)).flatten()
    }

    fn text(&self, i: usize) -> Option<String> {
        self.entries.get(i).map(ActionPair::to_string)
    }
}

impl<A> Default for History<A> {
    fn default() -> History<A> {
        History::new()
    }
}

impl<A: fmt::Debug, S> fmt::Debug for History<A, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("History")
            .field("entries", &self.entries)
            .field("sp", &self.sp)
            .field("top", &self.top)
            .finish_non_exhaustive()
    }
}
