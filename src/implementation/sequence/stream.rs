use super::Iter;
use futures_core::Stream;
use std::{
    pin::Pin,
    task::{Context, Poll},
};

/// A single traversal of a [`Sequence`][crate::Sequence], consumed as a [`Stream`]
///
/// Always ready. Yields the same values, in the same order, as [`Sequence::iter`][crate::Sequence::iter].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceStream(Iter);

impl SequenceStream {
    pub(crate) fn new(iter: Iter) -> Self {
        Self(iter)
    }

    /// Take the underlying [`Iter`] out of this stream, keeping its position.
    #[must_use]
    pub fn into_inner(self) -> Iter {
        self.0
    }
}

impl Stream for SequenceStream {
    type Item = u32;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Poll::Ready(self.get_mut().0.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}
