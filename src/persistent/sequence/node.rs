//! Items and 2-3 nodes, the building blocks of every tree level.
//!
//! A tree level holds [`Item`]s. At the outermost level an item is a user
//! element; one level down it is a [`Node`] of elements; another level down a
//! node of nodes, and so on. The depth is never stored: it is implied by how
//! far a value sits from the outermost level, and every item of one level has
//! the same depth.

use std::sync::Arc;

use smallvec::SmallVec;

/// Items split off either side of a position; a node or digit never has more than four.
pub(crate) type Items<A> = SmallVec<[Item<A>; 4]>;

/// One position in a tree level.
pub(crate) enum Item<A> {
    /// A user element, measure 1.
    Element(Arc<A>),
    /// A packed node of the level above.
    Node(Arc<Node<A>>),
}

impl<A> Clone for Item<A> {
    fn clone(&self) -> Self {
        match self {
            Self::Element(element) => Self::Element(Arc::clone(element)),
            Self::Node(node) => Self::Node(Arc::clone(node)),
        }
    }
}

impl<A> Item<A> {
    #[inline]
    pub(crate) fn element(value: A) -> Self {
        Self::Element(Arc::new(value))
    }

    pub(crate) fn node2(first: &Self, second: &Self) -> Self {
        Self::Node(Arc::new(Node::new(Children::Two([
            first.clone(),
            second.clone(),
        ]))))
    }

    pub(crate) fn node3(first: &Self, second: &Self, third: &Self) -> Self {
        Self::Node(Arc::new(Node::new(Children::Three([
            first.clone(),
            second.clone(),
            third.clone(),
        ]))))
    }

    /// Number of elements under this item.
    #[inline]
    pub(crate) fn measure(&self) -> usize {
        match self {
            Self::Element(_) => 1,
            Self::Node(node) => node.measure(),
        }
    }

    /// The node behind an item of an inner level.
    pub(crate) fn as_node(&self) -> &Node<A> {
        match self {
            Self::Node(node) => node,
            Self::Element(_) => unreachable!("element found where a packed node was expected"),
        }
    }

    /// The shared element behind an item of the outermost level.
    pub(crate) fn as_element(&self) -> &Arc<A> {
        match self {
            Self::Element(element) => element,
            Self::Node(_) => unreachable!("packed node found where an element was expected"),
        }
    }

    /// The element at `index` within this item.
    pub(crate) fn lookup(&self, index: usize) -> &A {
        match self {
            Self::Element(element) => {
                debug_assert_eq!(index, 0, "element items have measure 1");
                element
            }
            Self::Node(node) => node.lookup(index),
        }
    }

    /// A copy of this item with the element at `index` replaced.
    pub(crate) fn update(&self, index: usize, value: Arc<A>) -> Self {
        match self {
            Self::Element(_) => {
                debug_assert_eq!(index, 0, "element items have measure 1");
                Self::Element(value)
            }
            Self::Node(node) => Self::Node(Arc::new(node.update(index, value))),
        }
    }
}

/// Packs 2 to 12 items into 2-3 nodes, preferring 3-nodes.
///
/// # Panics
///
/// Panics if fewer than two items are given.
pub(crate) fn pack<A>(items: &[Item<A>]) -> Items<A> {
    let mut nodes = Items::new();
    let mut rest = items;
    loop {
        match rest {
            [first, second] => {
                nodes.push(Item::node2(first, second));
                break;
            }
            [first, second, third] => {
                nodes.push(Item::node3(first, second, third));
                break;
            }
            [first, second, third, fourth] => {
                nodes.push(Item::node2(first, second));
                nodes.push(Item::node2(third, fourth));
                break;
            }
            [first, second, third, remaining @ ..] => {
                nodes.push(Item::node3(first, second, third));
                rest = remaining;
            }
            [] | [_] => unreachable!("fewer than two items cannot be packed into 2-3 nodes"),
        }
    }
    nodes
}

enum Children<A> {
    Two([Item<A>; 2]),
    Three([Item<A>; 3]),
}

/// An immutable 2- or 3-ary branch with its cached measure.
pub(crate) struct Node<A> {
    measure: usize,
    children: Children<A>,
}

impl<A> Node<A> {
    fn new(children: Children<A>) -> Self {
        let mut node = Self {
            measure: 0,
            children,
        };
        node.measure = node.fold_left(0, |total, child| total + child.measure());
        node
    }

    #[inline]
    pub(crate) const fn measure(&self) -> usize {
        self.measure
    }

    pub(crate) fn children(&self) -> &[Item<A>] {
        match &self.children {
            Children::Two(items) => items,
            Children::Three(items) => items,
        }
    }

    #[inline]
    pub(crate) fn arity(&self) -> usize {
        self.children().len()
    }

    /// The `position`-th child.
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.arity()`.
    pub(crate) fn at(&self, position: usize) -> &Item<A> {
        assert!(
            position < self.arity(),
            "node child {position} requested from a node of arity {}",
            self.arity()
        );
        &self.children()[position]
    }

    /// The child covering `offset`, with its position and the measure skipped before it.
    pub(crate) fn locate(&self, offset: usize) -> (usize, usize) {
        debug_assert!(offset < self.measure(), "offset {offset} outside node");
        let mut skipped = 0;
        for (position, child) in self.children().iter().enumerate() {
            let measure = child.measure();
            if offset < skipped + measure {
                return (position, skipped);
            }
            skipped += measure;
        }
        unreachable!("node measure does not cover offset {offset}")
    }

    /// Visits the children first to last.
    pub(crate) fn fold_left<'a, B, F>(&'a self, init: B, function: F) -> B
    where
        F: FnMut(B, &'a Item<A>) -> B,
    {
        self.children().iter().fold(init, function)
    }

    /// Visits the children last to first.
    pub(crate) fn fold_right<'a, B, F>(&'a self, init: B, mut function: F) -> B
    where
        F: FnMut(&'a Item<A>, B) -> B,
    {
        self.children()
            .iter()
            .rev()
            .fold(init, |accumulator, child| function(child, accumulator))
    }

    pub(crate) fn lookup(&self, index: usize) -> &A {
        let (position, skipped) = self.locate(index);
        self.at(position).lookup(index - skipped)
    }

    fn update(&self, index: usize, value: Arc<A>) -> Self {
        let (position, skipped) = self.locate(index);
        let replacement = self.at(position).update(index - skipped, value);
        let children = match &self.children {
            Children::Two([first, second]) => match position {
                0 => Children::Two([replacement, second.clone()]),
                _ => Children::Two([first.clone(), replacement]),
            },
            Children::Three([first, second, third]) => match position {
                0 => Children::Three([replacement, second.clone(), third.clone()]),
                1 => Children::Three([first.clone(), replacement, third.clone()]),
                _ => Children::Three([first.clone(), second.clone(), replacement]),
            },
        };
        Self {
            measure: self.measure(),
            children,
        }
    }

    /// Splits the children around the one covering `offset`.
    ///
    /// Returns the children before it, the child itself with `offset` made
    /// local to it, and the children after it.
    pub(crate) fn split(&self, offset: usize) -> (Items<A>, Item<A>, usize, Items<A>) {
        let (position, skipped) = self.locate(offset);
        let children = self.children();
        (
            children[..position].iter().cloned().collect(),
            children[position].clone(),
            offset - skipped,
            children[position + 1..].iter().cloned().collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn elements(values: &[i32]) -> Vec<Item<i32>> {
        values.iter().copied().map(Item::element).collect()
    }

    fn flatten(item: &Item<i32>) -> Vec<i32> {
        match item {
            Item::Element(element) => vec![**element],
            Item::Node(node) => node.fold_left(Vec::new(), |mut accumulator, child| {
                accumulator.extend(flatten(child));
                accumulator
            }),
        }
    }

    #[rstest]
    fn node_measure_sums_children() {
        let leaves = elements(&[1, 2, 3]);
        let inner = Item::node3(&leaves[0], &leaves[1], &leaves[2]);
        let outer = Item::node2(&inner, &Item::node2(&leaves[0], &leaves[1]));
        assert_eq!(inner.measure(), 3);
        assert_eq!(outer.measure(), 5);
        assert_eq!(outer.as_node().arity(), 2);
    }

    #[rstest]
    fn nested_measures_are_cached_at_construction() {
        let leaves = elements(&[1, 2, 3, 4, 5, 6, 7]);
        let packed = pack(&leaves);
        let root = Item::node3(&packed[0], &packed[1], &packed[2]);
        assert_eq!(root.as_node().measure(), 7);
        assert_eq!(
            root.as_node()
                .fold_left(0, |total, child| total + child.measure()),
            7
        );
        assert_eq!(flatten(&root), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[rstest]
    #[should_panic(expected = "arity 2")]
    fn at_out_of_range_is_a_defect() {
        let leaves = elements(&[1, 2]);
        let node = Item::node2(&leaves[0], &leaves[1]);
        let _ = node.as_node().at(2);
    }

    #[rstest]
    fn locate_reports_skipped_measure() {
        let leaves = elements(&[1, 2, 3, 4, 5]);
        let left = Item::node3(&leaves[0], &leaves[1], &leaves[2]);
        let right = Item::node2(&leaves[3], &leaves[4]);
        let node = Item::node2(&left, &right);
        assert_eq!(node.as_node().locate(2), (0, 0));
        assert_eq!(node.as_node().locate(3), (1, 3));
        assert_eq!(node.lookup(4), &5);
    }

    #[rstest]
    fn fold_right_visits_children_backwards() {
        let leaves = elements(&[1, 2, 3]);
        let node = Item::node3(&leaves[0], &leaves[1], &leaves[2]);
        let order = node.as_node().fold_right(Vec::new(), |child, mut accumulator| {
            accumulator.push(**child.as_element());
            accumulator
        });
        assert_eq!(order, vec![3, 2, 1]);
    }

    #[rstest]
    #[case(2, &[2])]
    #[case(3, &[3])]
    #[case(4, &[2, 2])]
    #[case(5, &[3, 2])]
    #[case(8, &[3, 3, 2])]
    #[case(12, &[3, 3, 3, 3])]
    fn pack_prefers_three_nodes(#[case] count: i32, #[case] arities: &[usize]) {
        let values: Vec<i32> = (0..count).collect();
        let packed = pack(&elements(&values));
        let actual: Vec<usize> = packed.iter().map(|item| item.as_node().arity()).collect();
        assert_eq!(actual, arities);
        let flattened: Vec<i32> = packed.iter().flat_map(flatten).collect();
        assert_eq!(flattened, values);
    }

    #[rstest]
    fn update_copies_only_the_path() {
        let leaves = elements(&[1, 2, 3]);
        let node = Item::node3(&leaves[0], &leaves[1], &leaves[2]);
        let updated = node.update(1, Arc::new(20));
        assert_eq!(flatten(&updated), vec![1, 20, 3]);
        assert_eq!(flatten(&node), vec![1, 2, 3]);
        let (Item::Node(before), Item::Node(after)) = (&node, &updated) else {
            unreachable!()
        };
        assert!(Arc::ptr_eq(
            before.at(0).as_element(),
            after.at(0).as_element()
        ));
    }

    #[rstest]
    fn split_returns_local_offset() {
        let leaves = elements(&[1, 2, 3]);
        let left = Item::node3(&leaves[0], &leaves[1], &leaves[2]);
        let right = Item::node2(&leaves[0], &leaves[1]);
        let node = Item::node2(&left, &right);
        let (before, middle, offset, after) = node.as_node().split(4);
        assert_eq!(before.len(), 1);
        assert_eq!(middle.measure(), 2);
        assert_eq!(offset, 1);
        assert!(after.is_empty());
    }
}
