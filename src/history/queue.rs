use crate::{Action, ActionPair, History, Slot};

#[derive(Debug)]
enum QueueAction<A> {
    InsertAndApply(ActionPair<A>),
    Undo,
    Redo,
}

/// Wraps a history and gives it batch queue functionality.
///
/// # Examples
/// ```
/// # use action_history::{History, List, ListAction};
/// let mut list = List::new();
/// let mut history = History::new();
/// let mut queue = history.queue();
///
/// queue.insert_and_apply(ListAction::insert(0, 'a'), ListAction::delete(0));
/// queue.insert_and_apply(ListAction::insert(1, 'b'), ListAction::delete(1));
/// queue.insert_and_apply(ListAction::insert(2, 'c'), ListAction::delete(2));
/// assert!(list.is_empty());
///
/// queue.commit(&mut list).unwrap();
/// assert_eq!(list.as_slice(), ['a', 'b', 'c']);
/// ```
#[derive(Debug)]
pub struct Queue<'a, A, S> {
    history: &'a mut History<A, S>,
    actions: Vec<QueueAction<A>>,
}

impl<A: Action, S: Slot> Queue<'_, A, S> {
    /// Queues an `insert_and_apply` call for the pair built from `forward` and `inverse`.
    pub fn insert_and_apply(&mut self, forward: A, inverse: A) {
        self.push(ActionPair::new(forward, inverse));
    }

    /// Queues an `insert_and_apply` call for `pair`.
    pub fn push(&mut self, pair: ActionPair<A>) {
        self.actions.push(QueueAction::InsertAndApply(pair));
    }

    /// Queues an `undo` call.
    pub fn undo(&mut self) {
        self.actions.push(QueueAction::Undo);
    }

    /// Queues a `redo` call.
    pub fn redo(&mut self) {
        self.actions.push(QueueAction::Redo);
    }

    /// Runs the queued calls in order.
    ///
    /// Queued undos and redos that have nothing to do are skipped.
    ///
    /// # Errors
    /// If an action fails, the remaining calls are dropped and the error is returned.
    pub fn commit(self, target: &mut A::Target) -> crate::Result<A> {
        for action in self.actions {
            let result = match action {
                QueueAction::InsertAndApply(pair) => {
                    Some(self.history.insert_and_apply(target, pair))
                }
                QueueAction::Undo => self.history.undo(target),
                QueueAction::Redo => self.history.redo(target),
            };
            if let Some(Err(err)) = result {
                return Err(err);
            }
        }
        Ok(())
    }

    /// Cancels the queued calls.
    pub fn cancel(self) {}

    /// Returns a queue.
    pub fn queue(&mut self) -> Queue<A, S> {
        self.history.queue()
    }
}

impl<'a, A, S> From<&'a mut History<A, S>> for Queue<'a, A, S> {
    fn from(history: &'a mut History<A, S>) -> Self {
        Queue {
            history,
            actions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{History, List, ListAction};

    #[test]
    fn commit() {
        let mut list = List::new();
        let mut history = History::new();
        let mut q1 = history.queue();
        q1.redo();
        q1.redo();
        q1.redo();
        let mut q2 = q1.queue();
        q2.undo();
        q2.undo();
        q2.undo();
        let mut q3 = q2.queue();
        q3.insert_and_apply(ListAction::insert(0, 'a'), ListAction::delete(0));
        q3.insert_and_apply(ListAction::insert(1, 'b'), ListAction::delete(1));
        q3.insert_and_apply(ListAction::insert(2, 'c'), ListAction::delete(2));
        assert!(list.is_empty());
        q3.commit(&mut list).unwrap();
        assert_eq!(list.as_slice(), ['a', 'b', 'c']);
        q2.commit(&mut list).unwrap();
        assert!(list.is_empty());
        q1.commit(&mut list).unwrap();
        assert_eq!(list.as_slice(), ['a', 'b', 'c']);
    }

    #[test]
    fn commit_stops_at_error() {
        let mut list = List::from(vec![1]);
        let mut history = History::new();
        let mut queue = history.queue();
        queue.insert_and_apply(ListAction::set(0, 2), ListAction::set(0, 1));
        queue.insert_and_apply(ListAction::set(5, 3), ListAction::set(5, 0));
        queue.insert_and_apply(ListAction::set(0, 4), ListAction::set(0, 2));
        assert!(queue.commit(&mut list).is_err());
        assert_eq!(list.as_slice(), [2]);
        // The failing pair is recorded, the one after it never runs.
        assert_eq!((history.sp(), history.top()), (2, 2));
    }

    #[test]
    fn cancel() {
        let mut list = List::<i32>::new();
        let mut history = History::new();
        let mut queue = history.queue();
        queue.insert_and_apply(ListAction::insert(0, 1), ListAction::delete(0));
        queue.cancel();
        assert!(history.is_empty());
        assert!(list.is_empty());
        assert!(history.undo(&mut list).is_none());
    }
}
