use crate::format::Format;
use crate::{ActionPair, History};
use core::fmt;

/// Configurable display formatting for the [`History`].
///
/// Lists every pair that can be undone or redone, newest first, with the
/// current `sp` and `top` marked.
///
/// # Examples
/// ```
/// # use action_history::{History, List, ListAction};
/// let mut list = List::new();
/// let mut history = History::new();
/// let pair = ListAction::push_pair(&list, 1);
/// history.insert_and_apply(&mut list, pair).unwrap();
/// let pair = ListAction::push_pair(&list, 2);
/// history.insert_and_apply(&mut list, pair).unwrap();
/// history.undo(&mut list);
///
/// let mut display = history.display();
/// # #[cfg(feature = "colored")]
/// # display.colored(false);
/// display.detailed(false);
/// assert_eq!(
///     display.to_string(),
///     "* 2 [TOP] insert 2 at 1\n* 1 [SP] insert 1 at 0\n* 0\n"
/// );
/// ```
pub struct Display<'a, A, S> {
    history: &'a History<A, S>,
    format: Format,
}

impl<A, S> Display<'_, A, S> {
    /// Show colored output (on by default).
    ///
    /// Requires the `colored` feature to be enabled.
    #[cfg(feature = "colored")]
    pub fn colored(&mut self, on: bool) -> &mut Self {
        self.format.colored = on;
        self
    }

    /// Show detailed output (on by default).
    pub fn detailed(&mut self, on: bool) -> &mut Self {
        self.format.detailed = on;
        self
    }

    /// Show the `sp` and `top` cursors in the output (on by default).
    pub fn cursors(&mut self, on: bool) -> &mut Self {
        self.format.cursors = on;
        self
    }
}

impl<A: fmt::Display, S> Display<'_, A, S> {
    fn fmt_list(
        &self,
        f: &mut fmt::Formatter,
        at: usize,
        entry: Option<&ActionPair<A>>,
    ) -> fmt::Result {
        self.format.mark(f)?;
        self.format.position(f, at)?;
        self.format
            .labels(f, at, self.history.sp, self.history.top)?;
        match entry {
            Some(entry) if self.format.detailed => {
                writeln!(f)?;
                self.format.message(f, entry)
            }
            Some(entry) => {
                self.format.separator(f)?;
                self.format.message(f, entry)?;
                writeln!(f)
            }
            None => writeln!(f),
        }
    }
}

impl<'a, A, S> From<&'a History<A, S>> for Display<'a, A, S> {
    fn from(history: &'a History<A, S>) -> Self {
        Display {
            history,
            format: Format::default(),
        }
    }
}

impl<A: fmt::Display, S> fmt::Display for Display<'_, A, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, entry) in self.history.entries().enumerate().rev() {
            self.fmt_list(f, i + 1, Some(entry))?;
        }
        self.fmt_list(f, 0, None)
    }
}
