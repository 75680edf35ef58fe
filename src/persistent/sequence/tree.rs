//! The recursive 2-3 finger tree behind [`Sequence`](super::Sequence).
//!
//! A [`FingerTree`] level is empty, a single item, or deep: a prefix digit, a
//! lazily built middle tree of packed nodes, and a suffix digit. Every level
//! caches its measure (the number of user elements below it), and so does the
//! middle cell, so measures are known without forcing anything.
//!
//! Middle trees are suspended as [`Suspension`] values rather than closures.
//! Before a suspension is created, the middle trees it refers to are forced,
//! so evaluating one only ever does a single level's worth of work plus
//! whatever its own overflow pushes one level deeper.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::control::{Deferred, Thunk};

use super::digit::Digit;
use super::node::{Item, Items, pack};

/// A tree level.
pub(crate) enum FingerTree<A> {
    Empty,
    Single(Item<A>),
    Deep(Arc<Deep<A>>),
}

impl<A> Clone for FingerTree<A> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Single(item) => Self::Single(item.clone()),
            Self::Deep(deep) => Self::Deep(Arc::clone(deep)),
        }
    }
}

pub(crate) struct Deep<A> {
    measure: usize,
    pub(crate) prefix: Digit<Item<A>>,
    pub(crate) middle: Middle<A>,
    pub(crate) suffix: Digit<Item<A>>,
}

/// The lazily evaluated middle of a deep level, with its measure known up front.
pub(crate) struct Middle<A> {
    measure: usize,
    cell: Arc<Deferred<FingerTree<A>, Suspension<A>>>,
}

impl<A> Clone for Middle<A> {
    fn clone(&self) -> Self {
        Self {
            measure: self.measure,
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<A> Middle<A> {
    fn empty() -> Self {
        Self::ready(FingerTree::Empty)
    }

    fn ready(tree: FingerTree<A>) -> Self {
        Self {
            measure: tree.measure(),
            cell: Arc::new(Deferred::ready(tree)),
        }
    }

    fn suspend(measure: usize, suspension: Suspension<A>) -> Self {
        Self {
            measure,
            cell: Arc::new(Deferred::new(suspension)),
        }
    }

    #[inline]
    pub(crate) const fn measure(&self) -> usize {
        self.measure
    }

    pub(crate) fn force(&self) -> &FingerTree<A> {
        self.cell.force()
    }

    #[cfg(test)]
    pub(crate) fn is_evaluated(&self) -> bool {
        self.cell.is_evaluated()
    }

    // Every suspension refers only to forced trees, so the current middle is
    // forced here and evaluating the new cell does a single level of work.
    fn push_front(&self, item: Item<A>) -> Self {
        let inner = self.force().clone();
        Self::suspend(self.measure + item.measure(), Suspension::Prepend(item, inner))
    }

    fn push_back(&self, item: Item<A>) -> Self {
        let inner = self.force().clone();
        Self::suspend(self.measure + item.measure(), Suspension::Append(inner, item))
    }
}

/// Work owed to a middle tree, evaluated at most once by [`Deferred`].
///
/// Every tree held here has already been forced.
pub(crate) enum Suspension<A> {
    Prepend(Item<A>, FingerTree<A>),
    Append(FingerTree<A>, Item<A>),
    Tail(FingerTree<A>),
    Init(FingerTree<A>),
    Concat(FingerTree<A>, Items<A>, FingerTree<A>),
}

impl<A> Thunk<FingerTree<A>> for Suspension<A> {
    fn evaluate(self) -> FingerTree<A> {
        match self {
            Self::Prepend(item, tree) => tree.prepend(item),
            Self::Append(tree, item) => tree.append(item),
            Self::Tail(tree) => tree.tail(),
            Self::Init(tree) => tree.init(),
            Self::Concat(left, items, right) => FingerTree::concat(&left, &items, &right),
        }
    }
}

impl<A> FingerTree<A> {
    fn deep(prefix: Digit<Item<A>>, middle: Middle<A>, suffix: Digit<Item<A>>) -> Self {
        let measure = prefix.measure() + middle.measure() + suffix.measure();
        Self::Deep(Arc::new(Deep {
            measure,
            prefix,
            middle,
            suffix,
        }))
    }

    /// Builds a tree from up to four items, or folds longer runs in one by one.
    pub(crate) fn from_items(items: &[Item<A>]) -> Self {
        match items {
            [] => Self::Empty,
            [only] => Self::Single(only.clone()),
            [first, second] => Self::deep(
                Digit::One(first.clone()),
                Middle::empty(),
                Digit::One(second.clone()),
            ),
            [first, second, third] => Self::deep(
                Digit::Two(first.clone(), second.clone()),
                Middle::empty(),
                Digit::One(third.clone()),
            ),
            [first, second, third, fourth] => Self::deep(
                Digit::Two(first.clone(), second.clone()),
                Middle::empty(),
                Digit::Two(third.clone(), fourth.clone()),
            ),
            _ => items
                .iter()
                .fold(Self::Empty, |tree, item| tree.append(item.clone())),
        }
    }

    /// Builds a one-level tree from two to eight items, splitting them between the digits.
    pub(crate) fn balanced(items: &[Item<A>]) -> Self {
        if items.len() < 2 || items.len() > 8 {
            return Self::from_items(items);
        }
        let (prefix, suffix) = items.split_at(items.len() / 2);
        match (Digit::from_slice(prefix), Digit::from_slice(suffix)) {
            (Some(prefix), Some(suffix)) => Self::deep(prefix, Middle::empty(), suffix),
            _ => unreachable!("two to eight items split into two digits"),
        }
    }

    pub(crate) fn measure(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Single(item) => item.measure(),
            Self::Deep(deep) => deep.measure,
        }
    }

    pub(crate) const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub(crate) fn head(&self) -> Option<&Item<A>> {
        match self {
            Self::Empty => None,
            Self::Single(item) => Some(item),
            Self::Deep(deep) => Some(deep.prefix.head()),
        }
    }

    pub(crate) fn last(&self) -> Option<&Item<A>> {
        match self {
            Self::Empty => None,
            Self::Single(item) => Some(item),
            Self::Deep(deep) => Some(deep.suffix.last()),
        }
    }

    pub(crate) fn prepend(&self, item: Item<A>) -> Self {
        match self {
            Self::Empty => Self::Single(item),
            Self::Single(existing) => {
                Self::deep(Digit::One(item), Middle::empty(), Digit::One(existing.clone()))
            }
            Self::Deep(deep) => deep.prefix.prepend(item.clone()).map_or_else(
                || {
                    let Digit::Four(first, second, third, fourth) = &deep.prefix else {
                        unreachable!("prepend returned None but digit is not Four")
                    };
                    let node = Item::node3(second, third, fourth);
                    Self::deep(
                        Digit::Two(item, first.clone()),
                        deep.middle.push_front(node),
                        deep.suffix.clone(),
                    )
                },
                |prefix| Self::deep(prefix, deep.middle.clone(), deep.suffix.clone()),
            ),
        }
    }

    pub(crate) fn append(&self, item: Item<A>) -> Self {
        match self {
            Self::Empty => Self::Single(item),
            Self::Single(existing) => {
                Self::deep(Digit::One(existing.clone()), Middle::empty(), Digit::One(item))
            }
            Self::Deep(deep) => deep.suffix.append(item.clone()).map_or_else(
                || {
                    let Digit::Four(first, second, third, fourth) = &deep.suffix else {
                        unreachable!("append returned None but digit is not Four")
                    };
                    let node = Item::node3(first, second, third);
                    Self::deep(
                        deep.prefix.clone(),
                        deep.middle.push_back(node),
                        Digit::Two(fourth.clone(), item),
                    )
                },
                |suffix| Self::deep(deep.prefix.clone(), deep.middle.clone(), suffix),
            ),
        }
    }

    /// Everything but the first item; empty stays empty.
    pub(crate) fn tail(&self) -> Self {
        match self {
            Self::Empty | Self::Single(_) => Self::Empty,
            Self::Deep(deep) => deep.prefix.pop_front().map_or_else(
                || Self::borrow_front(&deep.middle, &deep.suffix),
                |prefix| Self::deep(prefix, deep.middle.clone(), deep.suffix.clone()),
            ),
        }
    }

    /// Everything but the last item; empty stays empty.
    pub(crate) fn init(&self) -> Self {
        match self {
            Self::Empty | Self::Single(_) => Self::Empty,
            Self::Deep(deep) => deep.suffix.pop_back().map_or_else(
                || Self::borrow_back(&deep.prefix, &deep.middle),
                |suffix| Self::deep(deep.prefix.clone(), deep.middle.clone(), suffix),
            ),
        }
    }

    /// Rebuilds a level whose prefix ran out by unpacking the middle's first node.
    fn borrow_front(middle: &Middle<A>, suffix: &Digit<Item<A>>) -> Self {
        let inner = middle.force();
        match inner.head() {
            None => Self::from_digit(suffix),
            Some(first) => Self::deep(
                Digit::from_node(first.as_node()),
                Middle::suspend(
                    middle.measure() - first.measure(),
                    Suspension::Tail(inner.clone()),
                ),
                suffix.clone(),
            ),
        }
    }

    /// Rebuilds a level whose suffix ran out by unpacking the middle's last node.
    fn borrow_back(prefix: &Digit<Item<A>>, middle: &Middle<A>) -> Self {
        let inner = middle.force();
        match inner.last() {
            None => Self::from_digit(prefix),
            Some(last) => Self::deep(
                prefix.clone(),
                Middle::suspend(
                    middle.measure() - last.measure(),
                    Suspension::Init(inner.clone()),
                ),
                Digit::from_node(last.as_node()),
            ),
        }
    }

    fn from_digit(digit: &Digit<Item<A>>) -> Self {
        let items: Items<A> = digit.iter().cloned().collect();
        Self::from_items(&items)
    }

    /// A deep level whose prefix may be empty.
    fn deep_front(prefix: &[Item<A>], middle: &Middle<A>, suffix: &Digit<Item<A>>) -> Self {
        Digit::from_slice(prefix).map_or_else(
            || Self::borrow_front(middle, suffix),
            |prefix| Self::deep(prefix, middle.clone(), suffix.clone()),
        )
    }

    /// A deep level whose suffix may be empty.
    fn deep_back(prefix: &Digit<Item<A>>, middle: &Middle<A>, suffix: &[Item<A>]) -> Self {
        Digit::from_slice(suffix).map_or_else(
            || Self::borrow_back(prefix, middle),
            |suffix| Self::deep(prefix.clone(), middle.clone(), suffix),
        )
    }

    /// The element at `index`.
    ///
    /// `index` must be below [`FingerTree::measure`].
    pub(crate) fn lookup(&self, index: usize) -> &A {
        match self {
            Self::Empty => unreachable!("lookup of index {index} in an empty tree"),
            Self::Single(item) => item.lookup(index),
            Self::Deep(deep) => {
                let prefix_measure = deep.prefix.measure();
                if index < prefix_measure {
                    return deep.prefix.lookup(index);
                }
                let index = index - prefix_measure;
                if index < deep.middle.measure() {
                    return deep.middle.force().lookup(index);
                }
                deep.suffix.lookup(index - deep.middle.measure())
            }
        }
    }

    /// A copy with the element at `index` replaced, sharing everything off the path.
    ///
    /// `index` must be below [`FingerTree::measure`].
    pub(crate) fn update(&self, index: usize, value: Arc<A>) -> Self {
        match self {
            Self::Empty => unreachable!("update of index {index} in an empty tree"),
            Self::Single(item) => Self::Single(item.update(index, value)),
            Self::Deep(deep) => {
                let prefix_measure = deep.prefix.measure();
                if index < prefix_measure {
                    return Self::deep(
                        deep.prefix.update(index, value),
                        deep.middle.clone(),
                        deep.suffix.clone(),
                    );
                }
                let index = index - prefix_measure;
                if index < deep.middle.measure() {
                    return Self::deep(
                        deep.prefix.clone(),
                        Middle::ready(deep.middle.force().update(index, value)),
                        deep.suffix.clone(),
                    );
                }
                Self::deep(
                    deep.prefix.clone(),
                    deep.middle.clone(),
                    deep.suffix.update(index - deep.middle.measure(), value),
                )
            }
        }
    }

    /// Joins two trees of the same level with loose items of that level between them.
    pub(crate) fn concat(left: &Self, items: &[Item<A>], right: &Self) -> Self {
        match (left, right) {
            (Self::Empty, _) => Self::prepend_all(items, right.clone()),
            (_, Self::Empty) => Self::append_all(left.clone(), items),
            (Self::Single(first), _) => Self::prepend_all(items, right.clone()).prepend(first.clone()),
            (_, Self::Single(last)) => Self::append_all(left.clone(), items).append(last.clone()),
            (Self::Deep(left), Self::Deep(right)) => {
                let mut loose: SmallVec<[Item<A>; 12]> = SmallVec::new();
                loose.extend(left.suffix.iter().cloned());
                loose.extend(items.iter().cloned());
                loose.extend(right.prefix.iter().cloned());
                let nodes = pack(&loose);
                let measure = left.middle.measure()
                    + loose.iter().map(Item::measure).sum::<usize>()
                    + right.middle.measure();
                let middle = Middle::suspend(
                    measure,
                    Suspension::Concat(
                        left.middle.force().clone(),
                        nodes,
                        right.middle.force().clone(),
                    ),
                );
                Self::deep(left.prefix.clone(), middle, right.suffix.clone())
            }
        }
    }

    fn prepend_all(items: &[Item<A>], tree: Self) -> Self {
        items
            .iter()
            .rev()
            .fold(tree, |tree, item| tree.prepend(item.clone()))
    }

    fn append_all(tree: Self, items: &[Item<A>]) -> Self {
        items
            .iter()
            .fold(tree, |tree, item| tree.append(item.clone()))
    }

    /// Splits around the item covering `index`.
    ///
    /// Returns the tree before that item, the item, `index` made local to the
    /// item, and the tree after it. `index` must be below [`FingerTree::measure`].
    pub(crate) fn split(&self, index: usize) -> (Self, Item<A>, usize, Self) {
        match self {
            Self::Empty => unreachable!("split at index {index} of an empty tree"),
            Self::Single(item) => (Self::Empty, item.clone(), index, Self::Empty),
            Self::Deep(deep) => {
                let prefix_measure = deep.prefix.measure();
                if index < prefix_measure {
                    let (before, item, offset, after) = deep.prefix.split(index);
                    return (
                        Self::from_items(&before),
                        item,
                        offset,
                        Self::deep_front(&after, &deep.middle, &deep.suffix),
                    );
                }
                let index = index - prefix_measure;
                if index < deep.middle.measure() {
                    let (inner_before, node, offset, inner_after) =
                        deep.middle.force().split(index);
                    let (before, item, offset, after) = node.as_node().split(offset);
                    return (
                        Self::deep_back(&deep.prefix, &Middle::ready(inner_before), &before),
                        item,
                        offset,
                        Self::deep_front(&after, &Middle::ready(inner_after), &deep.suffix),
                    );
                }
                let (before, item, offset, after) =
                    deep.suffix.split(index - deep.middle.measure());
                (
                    Self::deep_back(&deep.prefix, &deep.middle, &before),
                    item,
                    offset,
                    Self::from_items(&after),
                )
            }
        }
    }
}
