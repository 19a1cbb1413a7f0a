//! An ordered list receiver and the actions that modify it.

use crate::{Action, ActionPair};
use core::fmt::{self, Debug, Display, Formatter};
use thiserror::Error;

/// The error returned when an index is outside of a [`List`].
#[derive(Error, Copy, Clone, Debug, Hash, Eq, PartialEq)]
#[error("index {index} is out of range for list of size {size}")]
pub struct OutOfRange {
    /// The index that was used.
    pub index: usize,
    /// The size of the list at the time.
    pub size: usize,
}

/// An ordered, index-addressable list.
///
/// `set_item` and `get_item` fail on an invalid index, while `insert_item`
/// appends and `delete_item` does nothing.
///
/// # Examples
/// ```
/// # use action_history::List;
/// let mut list = List::new();
/// assert_eq!(list.insert_item('a', 0), 0);
/// assert_eq!(list.insert_item('c', -1), 1);
/// assert_eq!(list.insert_item('b', 1), 1);
/// assert_eq!(list.to_string(), "{'a', 'b', 'c'}");
/// ```
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct List<T> {
    items: Vec<T>,
}

impl<T> List<T> {
    /// Returns an empty list.
    pub const fn new() -> List<T> {
        List { items: Vec::new() }
    }

    /// Returns the number of items in the list.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a reference to the item at `index`.
    pub fn get_item(&self, index: usize) -> Result<&T, OutOfRange> {
        let size = self.size();
        self.items.get(index).ok_or(OutOfRange { index, size })
    }

    /// Replaces the item at `index` with `value`.
    pub fn set_item(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        let size = self.size();
        let item = self
            .items
            .get_mut(index)
            .ok_or(OutOfRange { index, size })?;
        *item = value;
        Ok(())
    }

    /// Inserts `value` before `index` and returns the index it now occupies.
    ///
    /// If `index` is negative or not less than the size, the value is appended.
    pub fn insert_item(&mut self, value: T, index: isize) -> usize {
        match usize::try_from(index) {
            Ok(index) if index < self.size() => {
                self.items.insert(index, value);
                index
            }
            _ => {
                self.items.push(value);
                self.size() - 1
            }
        }
    }

    /// Removes the item at `index`, does nothing if `index` is out of range.
    pub fn delete_item(&mut self, index: isize) {
        if let Ok(index) = usize::try_from(index) {
            if index < self.size() {
                self.items.remove(index);
            }
        }
    }

    /// Returns the index the next appended item will occupy.
    pub fn next_insert_index(&self) -> usize {
        self.size()
    }

    /// Returns the items as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the items.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the list, returning the items.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        List { items }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        List {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Debug> Display for List<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("{")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item:?}")?;
        }
        f.write_str("}")
    }
}

/// The actions that can be applied to a [`List`].
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub enum ListAction<T> {
    /// Replaces the item at `index`, fails if `index` is out of range.
    Set {
        /// The index of the item.
        index: usize,
        /// The new value.
        value: T,
    },
    /// Inserts before `index`, appends if `index` is out of range.
    Insert {
        /// The index to insert before.
        index: isize,
        /// The value to insert.
        value: T,
    },
    /// Removes the item at `index`, does nothing if `index` is out of range.
    Delete {
        /// The index of the item.
        index: isize,
    },
}

impl<T> ListAction<T> {
    /// Returns a `Set` action.
    pub const fn set(index: usize, value: T) -> ListAction<T> {
        ListAction::Set { index, value }
    }

    /// Returns an `Insert` action.
    pub const fn insert(index: isize, value: T) -> ListAction<T> {
        ListAction::Insert { index, value }
    }

    /// Returns a `Delete` action.
    pub const fn delete(index: isize) -> ListAction<T> {
        ListAction::Delete { index }
    }

    /// Returns a pair that appends `value` to `list` and deletes it again.
    ///
    /// The index is taken from [`List::next_insert_index`], so the pair must be
    /// applied before `list` changes size.
    pub fn push_pair(list: &List<T>, value: T) -> ActionPair<ListAction<T>> {
        // A `Vec` never holds more than `isize::MAX` items.
        let next = isize::try_from(list.next_insert_index()).unwrap_or(isize::MAX);
        ActionPair::new(ListAction::insert(next, value), ListAction::delete(next))
    }
}

impl<T: Clone> ListAction<T> {
    /// Returns a pair that sets the item at `index` to `value` and restores
    /// the value currently stored there.
    pub fn set_pair(
        list: &List<T>,
        index: usize,
        value: T,
    ) -> Result<ActionPair<ListAction<T>>, OutOfRange> {
        let old = list.get_item(index)?.clone();
        Ok(ActionPair::new(
            ListAction::set(index, value),
            ListAction::set(index, old),
        ))
    }
}

impl<T: Clone> Action for ListAction<T> {
    type Target = List<T>;
    type Error = OutOfRange;

    fn apply(&mut self, list: &mut List<T>) -> crate::Result<Self> {
        match self {
            ListAction::Set { index, value } => list.set_item(*index, value.clone()),
            ListAction::Insert { index, value } => {
                list.insert_item(value.clone(), *index);
                Ok(())
            }
            ListAction::Delete { index } => {
                list.delete_item(*index);
                Ok(())
            }
        }
    }
}

impl<T: Debug> Display for ListAction<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ListAction::Set { index, value } => write!(f, "set {index} to {value:?}"),
            ListAction::Insert { index, value } => write!(f, "insert {value:?} at {index}"),
            ListAction::Delete { index } => write!(f, "delete {index}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_appends_out_of_range() {
        let mut list = List::from(vec![1, 2]);
        assert_eq!(list.insert_item(3, 2), 2);
        assert_eq!(list.insert_item(4, 100), 3);
        assert_eq!(list.insert_item(5, -1), 4);
        assert_eq!(list.insert_item(0, 0), 0);
        assert_eq!(list.as_slice(), [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn delete_is_noop_out_of_range() {
        let mut list = List::from(vec![1, 2, 3]);
        list.delete_item(3);
        list.delete_item(-1);
        assert_eq!(list.as_slice(), [1, 2, 3]);
        list.delete_item(1);
        assert_eq!(list.as_slice(), [1, 3]);
    }

    #[test]
    fn set_fails_out_of_range() {
        let mut list = List::from(vec!['a']);
        assert_eq!(list.set_item(1, 'b'), Err(OutOfRange { index: 1, size: 1 }));
        assert_eq!(list.get_item(1), Err(OutOfRange { index: 1, size: 1 }));
        list.set_item(0, 'b').unwrap();
        assert_eq!(list.get_item(0), Ok(&'b'));
    }

    #[test]
    fn actions() {
        let mut list = List::new();
        ListAction::insert(0, 1).apply(&mut list).unwrap();
        ListAction::insert(-1, 2).apply(&mut list).unwrap();
        ListAction::set(0, 3).apply(&mut list).unwrap();
        assert_eq!(list.as_slice(), [3, 2]);
        ListAction::delete(5).apply(&mut list).unwrap();
        ListAction::delete(0).apply(&mut list).unwrap();
        assert_eq!(list.as_slice(), [2]);
        let err = ListAction::set(4, 0).apply(&mut list).unwrap_err();
        assert_eq!(err.to_string(), "index 4 is out of range for list of size 1");
    }

    #[test]
    fn pairs_capture_the_old_state() {
        let mut list = List::from(vec![1, 2]);
        let mut push = ListAction::push_pair(&list, 3);
        assert_eq!(push.forward(), &ListAction::insert(2, 3));
        assert_eq!(push.inverse(), &ListAction::delete(2));
        push.apply(&mut list).unwrap();

        let mut set = ListAction::set_pair(&list, 1, 10).unwrap();
        assert_eq!(set.inverse(), &ListAction::set(1, 2));
        set.apply(&mut list).unwrap();
        assert_eq!(list.as_slice(), [1, 10, 3]);
        set.revert(&mut list).unwrap();
        push.revert(&mut list).unwrap();
        assert_eq!(list.as_slice(), [1, 2]);

        assert!(ListAction::set_pair(&list, 2, 0).is_err());
    }

    #[test]
    fn push_pair_targets_the_next_index() {
        let mut list = List::new();
        let mut first = ListAction::push_pair(&list, 'a');
        assert_eq!(first.forward(), &ListAction::insert(0, 'a'));
        first.apply(&mut list).unwrap();
        let mut second = ListAction::push_pair(&list, 'b');
        assert_eq!(second.inverse(), &ListAction::delete(1));
        second.apply(&mut list).unwrap();
        assert_eq!(list.as_slice(), ['a', 'b']);
        second.revert(&mut list).unwrap();
        first.revert(&mut list).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn display() {
        assert_eq!(List::<u8>::new().to_string(), "{}");
        assert_eq!(List::from(vec![1, 2, 3]).to_string(), "{1, 2, 3}");
        assert_eq!(ListAction::set(1, 10).to_string(), "set 1 to 10");
        assert_eq!(ListAction::<i32>::delete(2).to_string(), "delete 2");
    }
}
