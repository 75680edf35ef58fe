//! Iterators over [`Sequence`].
//!
//! Borrowing iteration walks the tree with two explicit stacks, one per end,
//! so each step costs amortized O(1) and nothing is copied. The stacks meet
//! in the middle: a shared countdown stops both ends once every element has
//! been yielded.

use std::iter::FusedIterator;
use std::sync::Arc;

use super::Sequence;
use super::node::Item;
use super::tree::FingerTree;

enum Frame<'a, A> {
    Tree(&'a FingerTree<A>),
    Item(&'a Item<A>),
}

/// A borrowing, double-ended iterator over a [`Sequence`].
///
/// Created by [`Sequence::iter`].
pub struct SequenceIterator<'a, A> {
    front: Vec<Frame<'a, A>>,
    back: Vec<Frame<'a, A>>,
    remaining: usize,
}

impl<'a, A> SequenceIterator<'a, A> {
    pub(super) fn new(tree: &'a FingerTree<A>) -> Self {
        Self {
            front: vec![Frame::Tree(tree)],
            back: vec![Frame::Tree(tree)],
            remaining: tree.measure(),
        }
    }
}

impl<'a, A> SequenceIterator<'a, A> {
    fn next_shared(&mut self) -> Option<&'a Arc<A>> {
        if self.remaining == 0 {
            return None;
        }
        while let Some(frame) = self.front.pop() {
            match frame {
                Frame::Tree(FingerTree::Empty) => {}
                Frame::Tree(FingerTree::Single(item)) => self.front.push(Frame::Item(item)),
                Frame::Tree(FingerTree::Deep(deep)) => {
                    self.front.extend(deep.suffix.iter().rev().map(Frame::Item));
                    self.front.push(Frame::Tree(deep.middle.force()));
                    self.front.extend(deep.prefix.iter().rev().map(Frame::Item));
                }
                Frame::Item(Item::Element(element)) => {
                    self.remaining -= 1;
                    return Some(element);
                }
                Frame::Item(Item::Node(node)) => {
                    let front = &mut self.front;
                    node.fold_right((), |child, ()| front.push(Frame::Item(child)));
                }
            }
        }
        None
    }

    fn next_back_shared(&mut self) -> Option<&'a Arc<A>> {
        if self.remaining == 0 {
            return None;
        }
        while let Some(frame) = self.back.pop() {
            match frame {
                Frame::Tree(FingerTree::Empty) => {}
                Frame::Tree(FingerTree::Single(item)) => self.back.push(Frame::Item(item)),
                Frame::Tree(FingerTree::Deep(deep)) => {
                    self.back.extend(deep.prefix.iter().map(Frame::Item));
                    self.back.push(Frame::Tree(deep.middle.force()));
                    self.back.extend(deep.suffix.iter().map(Frame::Item));
                }
                Frame::Item(Item::Element(element)) => {
                    self.remaining -= 1;
                    return Some(element);
                }
                Frame::Item(Item::Node(node)) => {
                    let back = &mut self.back;
                    node.fold_left((), |(), child| back.push(Frame::Item(child)));
                }
            }
        }
        None
    }

    /// Turns this iterator into one over the shared element handles.
    pub(super) fn shared(self) -> SharedElements<'a, A> {
        SharedElements(self)
    }
}

impl<'a, A> Iterator for SequenceIterator<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_shared().map(|element| &**element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<A> DoubleEndedIterator for SequenceIterator<'_, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.next_back_shared().map(|element| &**element)
    }
}

impl<A> ExactSizeIterator for SequenceIterator<'_, A> {}

impl<A> FusedIterator for SequenceIterator<'_, A> {}

/// Walks the [`Arc`] handles of the elements so they can be reused in a new sequence.
pub(super) struct SharedElements<'a, A>(SequenceIterator<'a, A>);

impl<'a, A> Iterator for SharedElements<'a, A> {
    type Item = &'a Arc<A>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next_shared()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<A> DoubleEndedIterator for SharedElements<'_, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back_shared()
    }
}

/// An owning iterator over a [`Sequence`], yielding clones of its elements.
///
/// Created by [`Sequence::into_iter`]. Each step is an amortized O(1)
/// [`Sequence::uncons`] or [`Sequence::unsnoc`].
pub struct SequenceIntoIterator<A> {
    sequence: Sequence<A>,
}

impl<A> SequenceIntoIterator<A> {
    pub(super) const fn new(sequence: Sequence<A>) -> Self {
        Self { sequence }
    }
}

impl<A: Clone> Iterator for SequenceIntoIterator<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, tail) = self.sequence.uncons()?;
        let head = head.clone();
        self.sequence = tail;
        Some(head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.sequence.length(), Some(self.sequence.length()))
    }
}

impl<A: Clone> DoubleEndedIterator for SequenceIntoIterator<A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (init, last) = self.sequence.unsnoc()?;
        let last = last.clone();
        self.sequence = init;
        Some(last)
    }
}

impl<A: Clone> ExactSizeIterator for SequenceIntoIterator<A> {}

impl<A: Clone> FusedIterator for SequenceIntoIterator<A> {}

#[cfg(test)]
mod tests {
    use super::super::Sequence;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(9)]
    #[case(1_000)]
    fn forward_and_backward_agree(#[case] length: i32) {
        let sequence: Sequence<i32> = (0..length).collect();
        let forward: Vec<i32> = sequence.iter().copied().collect();
        let mut backward: Vec<i32> = sequence.iter().rev().copied().collect();
        backward.reverse();
        assert_eq!(forward, (0..length).collect::<Vec<_>>());
        assert_eq!(backward, forward);
    }

    #[rstest]
    fn both_ends_meet_without_overlap() {
        let sequence: Sequence<i32> = (0..100).collect();
        let mut iterator = sequence.iter();
        let mut seen = Vec::new();
        loop {
            match (iterator.next(), iterator.next_back()) {
                (Some(front), Some(back)) => {
                    seen.push(*front);
                    seen.push(*back);
                }
                (Some(front), None) => seen.push(*front),
                (None, _) => break,
            }
        }
        seen.sort_unstable();
        assert_eq!(seen, (0..100).collect::<Vec<_>>());
        assert_eq!(iterator.len(), 0);
        assert_eq!(iterator.next(), None);
    }

    #[rstest]
    fn exact_size_counts_down() {
        let sequence: Sequence<i32> = (0..10).collect();
        let mut iterator = sequence.iter();
        assert_eq!(iterator.len(), 10);
        iterator.next();
        iterator.next_back();
        assert_eq!(iterator.len(), 8);
    }

    #[rstest]
    fn owning_iterator_clones_from_both_ends() {
        let sequence: Sequence<String> = ["a", "b", "c"].into_iter().map(String::from).collect();
        let mut iterator = sequence.clone().into_iter();
        assert_eq!(iterator.next_back().as_deref(), Some("c"));
        assert_eq!(iterator.len(), 2);
        assert_eq!(iterator.collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(sequence.length(), 3);
    }
}
