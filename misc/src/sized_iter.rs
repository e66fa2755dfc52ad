/// Wraps an iterator whose exact length is known up front but can't be derived from its
/// adapters, e.g. a chain of `cartesian_product`s.
pub struct SizedIterator<I> {
    inner: I,
    remaining: usize,
}

impl<I: Iterator> SizedIterator<I> {
    pub fn new(iterator: I, len: usize) -> Self {
        Self {
            inner: iterator,
            remaining: len,
        }
    }
}

impl<I: Iterator> Iterator for SizedIterator<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.inner.next();
        if next.is_some() {
            self.remaining = self.remaining.saturating_sub(1);
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<I: Iterator> ExactSizeIterator for SizedIterator<I> {}

impl<I: Iterator + Clone> Clone for SizedIterator<I> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn exact_len_through_product() {
        let iter = (0..3).cartesian_product(0..4);
        let mut sized = SizedIterator::new(iter, 12);
        assert_eq!(sized.len(), 12);

        sized.next();
        sized.next();
        assert_eq!(sized.len(), 10);
        assert_eq!(sized.count(), 10);
    }
}
