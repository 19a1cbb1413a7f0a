use crate::socket::Socket;
use crate::History;
use core::marker::PhantomData;

/// Builder for a [`History`].
///
/// # Examples
/// ```
/// # use action_history::{History, ListAction, Signal};
/// let history = History::<ListAction<char>, _>::builder()
///     .capacity(100)
///     .connect(|s: Signal| { dbg!(s); })
///     .build();
/// assert!(history.capacity() >= 100);
/// ```
#[derive(Debug)]
pub struct Builder<A, S = ()> {
    capacity: usize,
    socket: Socket<S>,
    pd: PhantomData<A>,
}

impl<A, S> Builder<A, S> {
    /// Sets the capacity for the history.
    pub fn capacity(mut self, capacity: usize) -> Builder<A, S> {
        self.capacity = capacity;
        self
    }

    /// Connects the slot.
    pub fn connect(mut self, slot: S) -> Builder<A, S> {
        self.socket = Socket::new(slot);
        self
    }

    /// Builds the history.
    pub fn build(self) -> History<A, S> {
        History {
            entries: Vec::with_capacity(self.capacity),
            sp: 0,
            top: 0,
            socket: self.socket,
        }
    }
}

impl<A, S> Default for Builder<A, S> {
    fn default() -> Self {
        Builder {
            capacity: 0,
            socket: Socket::default(),
            pd: PhantomData,
        }
    }
}
