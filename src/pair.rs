use crate::Action;
use core::fmt::{self, Display, Formatter};

/// An action joined with the action that reverses it.
///
/// The pair owns both actions. Whether the inverse really reverses the forward
/// action is up to the caller, the pair never checks it.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct ActionPair<A> {
    forward: A,
    inverse: A,
}

impl<A> ActionPair<A> {
    /// Joins `forward` with its `inverse`.
    pub const fn new(forward: A, inverse: A) -> ActionPair<A> {
        ActionPair { forward, inverse }
    }

    /// Returns a reference to the forward action.
    pub fn forward(&self) -> &A {
        &self.forward
    }

    /// Returns a reference to the inverse action.
    pub fn inverse(&self) -> &A {
        &self.inverse
    }

    /// Consumes the pair, returning the forward and inverse actions.
    pub fn into_inner(self) -> (A, A) {
        (self.forward, self.inverse)
    }
}

impl<A: Action> ActionPair<A> {
    /// Applies the forward action.
    pub fn apply(&mut self, target: &mut A::Target) -> crate::Result<A> {
        self.forward.apply(target)
    }

    /// Applies the inverse action.
    pub fn revert(&mut self, target: &mut A::Target) -> crate::Result<A> {
        self.inverse.apply(target)
    }
}

impl<A> From<(A, A)> for ActionPair<A> {
    fn from((forward, inverse): (A, A)) -> Self {
        ActionPair::new(forward, inverse)
    }
}

impl<A: Display> Display for ActionPair<A> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        (&self.forward as &dyn Display).fmt(f)
    }
}
