//! Linear undo-redo history built from caller-supplied action pairs.
//!
//! Every modification of a target is described by an [`Action`]. Before a
//! modification is recorded, the caller pairs it with the action that reverses
//! it, and the resulting [`ActionPair`] is handed to a [`History`]. The history
//! can then roll the target backwards and forwards by replaying the stored
//! inverse and forward actions.
//!
//! Inverses are never computed by the history. It is up to the caller to build
//! an inverse that actually restores the target, usually by reading the state
//! that is about to be overwritten.
//!
//! # Features
//!
//! * [`History`] provides linear undo-redo functionality with two cursors,
//!   one for the applied actions and one for the actions that can be redone.
//! * [`Queue`] wraps a [`History`] and extends it with batch functionality.
//! * [`List`] and [`ListAction`] provide a ready-made receiver and its actions.
//! * Signals are sent to a [`Slot`] when the ability to undo or redo changes.
//! * Configurable display formatting, colored output with the `colored` feature.
//!
//! # Examples
//! ```
//! use action_history::{History, List, ListAction};
//!
//! let mut list = List::new();
//! let mut history = History::new();
//!
//! // The inverse is built from the state the list is in before the change.
//! let pair = ListAction::push_pair(&list, 1);
//! history.insert_and_apply(&mut list, pair).unwrap();
//! let pair = ListAction::push_pair(&list, 2);
//! history.insert_and_apply(&mut list, pair).unwrap();
//! let pair = ListAction::set_pair(&list, 0, 5).unwrap();
//! history.insert_and_apply(&mut list, pair).unwrap();
//! assert_eq!(list.as_slice(), [5, 2]);
//!
//! history.undo(&mut list).unwrap().unwrap();
//! history.undo(&mut list).unwrap().unwrap();
//! assert_eq!(list.as_slice(), [1]);
//!
//! history.redo(&mut list).unwrap().unwrap();
//! assert_eq!(list.as_slice(), [1, 2]);
//! ```

#![doc(html_root_url = "https://docs.rs/action-history")]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod format;
pub mod history;
mod list;
mod pair;
mod socket;

pub use history::History;
pub use list::{List, ListAction, OutOfRange};
pub use pair::ActionPair;
pub use socket::{Signal, Slot};

#[doc(no_inline)]
pub use history::{Builder, Display, Queue};

/// A specialized result type for actions.
pub type Result<A> = core::result::Result<(), <A as Action>::Error>;

/// A single modification of a target.
///
/// An action has no notion of its own inverse. The inverse is just another
/// action, supplied by the caller when the two are joined in an [`ActionPair`].
///
/// # Examples
/// ```
/// # use action_history::{Action, ActionPair, History};
/// struct Push(char);
/// struct Pop;
///
/// enum Edit {
///     Push(Push),
///     Pop(Pop),
/// }
///
/// impl Action for Edit {
///     type Target = String;
///     type Error = &'static str;
///
///     fn apply(&mut self, s: &mut String) -> action_history::Result<Edit> {
///         match self {
///             Edit::Push(Push(c)) => s.push(*c),
///             Edit::Pop(Pop) => {
///                 s.pop().ok_or("string is empty")?;
///             }
///         }
///         Ok(())
///     }
/// }
///
/// let mut target = String::new();
/// let mut history = History::new();
/// let pair = ActionPair::new(Edit::Push(Push('a')), Edit::Pop(Pop));
/// history.insert_and_apply(&mut target, pair).unwrap();
/// assert_eq!(target, "a");
/// history.undo(&mut target).unwrap().unwrap();
/// assert_eq!(target, "");
/// ```
pub trait Action {
    /// The target type.
    type Target;
    /// The error type.
    type Error;

    /// Applies the action on the target and returns `Ok` if everything went fine,
    /// and `Err` if something went wrong.
    fn apply(&mut self, target: &mut Self::Target) -> core::result::Result<(), Self::Error>;
}

impl<A: Action + ?Sized> Action for Box<A> {
    type Target = A::Target;
    type Error = A::Error;

    fn apply(&mut self, target: &mut A::Target) -> core::result::Result<(), A::Error> {
        (**self).apply(target)
    }
}
