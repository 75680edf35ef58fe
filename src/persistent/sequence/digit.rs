//! The one-to-four item affixes at each end of a deep tree.

use std::cmp::Ordering;
use std::sync::Arc;

use smallvec::SmallVec;

use super::node::{Item, Items, Node};

/// One to four items kept directly at an end of a deep tree.
pub(crate) enum Digit<T> {
    One(T),
    Two(T, T),
    Three(T, T, T),
    Four(T, T, T, T),
}

impl<T: Clone> Clone for Digit<T> {
    fn clone(&self) -> Self {
        match self {
            Self::One(first) => Self::One(first.clone()),
            Self::Two(first, second) => Self::Two(first.clone(), second.clone()),
            Self::Three(first, second, third) => {
                Self::Three(first.clone(), second.clone(), third.clone())
            }
            Self::Four(first, second, third, fourth) => {
                Self::Four(first.clone(), second.clone(), third.clone(), fourth.clone())
            }
        }
    }
}

impl<T: Clone> Digit<T> {
    /// Builds a digit from one to four items.
    pub(crate) fn from_slice(items: &[T]) -> Option<Self> {
        match items {
            [first] => Some(Self::One(first.clone())),
            [first, second] => Some(Self::Two(first.clone(), second.clone())),
            [first, second, third] => {
                Some(Self::Three(first.clone(), second.clone(), third.clone()))
            }
            [first, second, third, fourth] => Some(Self::Four(
                first.clone(),
                second.clone(),
                third.clone(),
                fourth.clone(),
            )),
            _ => None,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Two(..) => 2,
            Self::Three(..) => 3,
            Self::Four(..) => 4,
        }
    }

    pub(crate) const fn head(&self) -> &T {
        match self {
            Self::One(first)
            | Self::Two(first, _)
            | Self::Three(first, _, _)
            | Self::Four(first, _, _, _) => first,
        }
    }

    pub(crate) const fn last(&self) -> &T {
        match self {
            Self::One(first) => first,
            Self::Two(_, second) => second,
            Self::Three(_, _, third) => third,
            Self::Four(_, _, _, fourth) => fourth,
        }
    }

    /// The `position`-th item, counted from the front.
    pub(crate) const fn get(&self, position: usize) -> Option<&T> {
        match (self, position) {
            (
                Self::One(item)
                | Self::Two(item, _)
                | Self::Three(item, _, _)
                | Self::Four(item, _, _, _),
                0,
            )
            | (Self::Two(_, item) | Self::Three(_, item, _) | Self::Four(_, item, _, _), 1)
            | (Self::Three(_, _, item) | Self::Four(_, _, item, _), 2)
            | (Self::Four(_, _, _, item), 3) => Some(item),
            _ => None,
        }
    }

    pub(crate) fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        (0..self.len()).filter_map(move |position| self.get(position))
    }

    /// Returns `None` when the digit is already full.
    pub(crate) fn prepend(&self, item: T) -> Option<Self> {
        match self {
            Self::One(first) => Some(Self::Two(item, first.clone())),
            Self::Two(first, second) => Some(Self::Three(item, first.clone(), second.clone())),
            Self::Three(first, second, third) => Some(Self::Four(
                item,
                first.clone(),
                second.clone(),
                third.clone(),
            )),
            Self::Four(..) => None,
        }
    }

    /// Returns `None` when the digit is already full.
    pub(crate) fn append(&self, item: T) -> Option<Self> {
        match self {
            Self::One(first) => Some(Self::Two(first.clone(), item)),
            Self::Two(first, second) => Some(Self::Three(first.clone(), second.clone(), item)),
            Self::Three(first, second, third) => Some(Self::Four(
                first.clone(),
                second.clone(),
                third.clone(),
                item,
            )),
            Self::Four(..) => None,
        }
    }

    /// Drops the first item; `None` when nothing would be left.
    pub(crate) fn pop_front(&self) -> Option<Self> {
        match self {
            Self::One(_) => None,
            Self::Two(_, second) => Some(Self::One(second.clone())),
            Self::Three(_, second, third) => Some(Self::Two(second.clone(), third.clone())),
            Self::Four(_, second, third, fourth) => Some(Self::Three(
                second.clone(),
                third.clone(),
                fourth.clone(),
            )),
        }
    }

    /// Drops the last item; `None` when nothing would be left.
    pub(crate) fn pop_back(&self) -> Option<Self> {
        match self {
            Self::One(_) => None,
            Self::Two(first, _) => Some(Self::One(first.clone())),
            Self::Three(first, second, _) => Some(Self::Two(first.clone(), second.clone())),
            Self::Four(first, second, third, _) => Some(Self::Three(
                first.clone(),
                second.clone(),
                third.clone(),
            )),
        }
    }

    /// A copy with the `position`-th item replaced.
    fn replace(&self, position: usize, item: T) -> Self {
        let mut items: SmallVec<[T; 4]> = self.iter().cloned().collect();
        items[position] = item;
        match items.as_slice() {
            [first] => Self::One(first.clone()),
            [first, second] => Self::Two(first.clone(), second.clone()),
            [first, second, third] => Self::Three(first.clone(), second.clone(), third.clone()),
            [first, second, third, fourth] => {
                Self::Four(first.clone(), second.clone(), third.clone(), fourth.clone())
            }
            _ => unreachable!("digit rebuilt with {} items", items.len()),
        }
    }
}

impl<A> Digit<Item<A>> {
    pub(crate) fn from_node(node: &Node<A>) -> Self {
        match node.children() {
            [first, second] => Self::Two(first.clone(), second.clone()),
            [first, second, third] => Self::Three(first.clone(), second.clone(), third.clone()),
            _ => unreachable!("nodes have two or three children"),
        }
    }

    pub(crate) fn measure(&self) -> usize {
        self.iter().map(Item::measure).sum()
    }

    /// The item covering `offset`, with its position and the measure skipped before it.
    fn locate(&self, offset: usize) -> (usize, usize) {
        let mut skipped = 0;
        for (position, item) in self.iter().enumerate() {
            let measure = item.measure();
            if offset < skipped + measure {
                return (position, skipped);
            }
            skipped += measure;
        }
        unreachable!("digit measure does not cover offset {offset}")
    }

    pub(crate) fn lookup(&self, offset: usize) -> &A {
        let (position, skipped) = self.locate(offset);
        match self.get(position) {
            Some(item) => item.lookup(offset - skipped),
            None => unreachable!("located position {position} is inside the digit"),
        }
    }

    pub(crate) fn update(&self, offset: usize, value: Arc<A>) -> Self {
        let (position, skipped) = self.locate(offset);
        match self.get(position) {
            Some(item) => self.replace(position, item.update(offset - skipped, value)),
            None => unreachable!("located position {position} is inside the digit"),
        }
    }

    /// Splits the items around the one covering `offset`.
    ///
    /// Returns the items before it, the item itself with `offset` made local
    /// to it, and the items after it.
    pub(crate) fn split(&self, offset: usize) -> (Items<A>, Item<A>, usize, Items<A>) {
        let (position, skipped) = self.locate(offset);
        let mut before = Items::new();
        let mut after = Items::new();
        let mut found = None;
        for (index, item) in self.iter().enumerate() {
            match index.cmp(&position) {
                Ordering::Less => before.push(item.clone()),
                Ordering::Equal => found = Some(item.clone()),
                Ordering::Greater => after.push(item.clone()),
            }
        }
        match found {
            Some(item) => (before, item, offset - skipped, after),
            None => unreachable!("located position {position} is inside the digit"),
        }
    }
}
