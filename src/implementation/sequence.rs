mod iterator;

mod stream;
pub use stream::SequenceStream;

/// A bounded, restartable lazy sequence of integers
///
/// A `Sequence` produces `0..bound` in ascending order. It holds no traversal state of its own:
/// every call to [`Sequence::iter`] (or every `for` loop over it) starts again from zero, so the
/// same `Sequence` can be walked any number of times and always yields the same values.
///
/// Values are produced on demand; nothing is computed or stored up front.
///
/// ```
/// let sequence = primer::Sequence::new(3);
/// assert_eq!(sequence.iter().collect::<Vec<_>>(), [0, 1, 2]);
/// assert_eq!(sequence.iter().sum::<u32>(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sequence {
    bound: u32,
}

impl Sequence {
    /// Construct a new `Sequence` producing `0..bound`.
    #[must_use]
    pub const fn new(bound: u32) -> Self {
        Self { bound }
    }

    /// The exclusive upper bound of this sequence
    #[must_use]
    pub const fn bound(&self) -> u32 {
        self.bound
    }

    /// Begin a new traversal, starting at zero.
    #[must_use]
    pub fn iter(&self) -> Iter {
        log::trace!("starting traversal of 0..{}", self.bound);
        Iter::new(self.bound)
    }

    /// Begin a new traversal that can be consumed as a [`Stream`][futures_core::Stream].
    ///
    /// The stream is always ready; it yields the same values as [`Sequence::iter`].
    #[must_use]
    pub fn stream(&self) -> SequenceStream {
        SequenceStream::new(self.iter())
    }
}

impl From<u32> for Sequence {
    fn from(bound: u32) -> Self {
        Self::new(bound)
    }
}

impl IntoIterator for Sequence {
    type Item = u32;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Sequence {
    type Item = u32;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A single traversal of a [`Sequence`]
///
/// Once exhausted it keeps returning `None`. For async consumers, see [`Sequence::stream`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Iter {
    front: u32,
    back: u32,
}

impl Iter {
    pub(crate) fn new(bound: u32) -> Self {
        Self {
            front: 0,
            back: bound,
        }
    }

    fn remaining(&self) -> usize {
        usize::try_from(self.back - self.front).unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod test {
    use super::Sequence;

    #[test]
    fn empty_sequence_yields_nothing() {
        let sequence = Sequence::new(0);
        assert_eq!(sequence.iter().next(), None);
        assert_eq!(sequence.iter().len(), 0);
    }

    #[test]
    fn remaining_shrinks_from_both_ends() {
        let mut iter = Sequence::new(4).iter();
        assert_eq!(iter.remaining(), 4);
        iter.next();
        iter.next_back();
        assert_eq!(iter.remaining(), 2);
        assert_eq!(iter.collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn from_bound() {
        assert_eq!(Sequence::from(7).bound(), 7);
        assert_eq!(Sequence::default().bound(), 0);
    }
}
