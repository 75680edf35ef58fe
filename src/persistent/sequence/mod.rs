//! Persistent sequence backed by a lazy 2-3 finger tree.
//!
//! [`Sequence`] is an immutable, indexed deque with:
//!
//! - O(1) amortized `prepend`, `append`, `head`, `last`, `tail`, `init`
//! - O(log(min(n, m))) concatenation
//! - O(log n) `get`, `update`, `split_at`, `take`, `drop_first`
//! - O(1) `length`
//!
//! # Structure
//!
//! Each level of the tree is empty, a single item, or deep: a 1-4 item
//! prefix, a lazily built middle tree one level down, and a 1-4 item suffix.
//! At the outermost level the items are the elements themselves; one level
//! down they are 2-3 nodes of elements; another level down nodes of nodes.
//! Filling an affix packs three of its items into a node that is handed to the
//! middle, and emptying one borrows a node back. The middle is not built
//! until something reads it, which is what keeps operations at the ends cheap
//! over any sequence of calls.
//!
//! Elements are shared, never copied, between versions: structural
//! operations need no `Clone` bound on the element type.
//!
//! # Capacity
//!
//! A sequence holds at most [`MAX_LENGTH`] elements. Growing past it is a
//! usage error: the plain operations panic, and the `try_*` variants return
//! [`SequenceError::CapacityExceeded`]. The check happens before any
//! structural work, so inputs are left untouched either way.
//!
//! # Examples
//!
//! ```rust
//! use fingerseq::persistent::Sequence;
//! use fingerseq::sequence;
//!
//! let numbers = sequence![2, 3, 4];
//! let extended = numbers.prepend(1).append(5);
//!
//! assert_eq!(extended.head(), Ok(&1));
//! assert_eq!(extended.last(), Ok(&5));
//! assert_eq!(extended.get(2), Ok(&3));
//! assert_eq!(numbers.length(), 3); // unchanged
//!
//! let joined = extended.append_sequence(&numbers);
//! assert_eq!(joined.length(), 8);
//! assert_eq!(joined.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 2, 3, 4]);
//! ```

mod digit;
mod error;
mod iter;
mod node;
mod tree;
mod vocabulary;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use smallvec::SmallVec;

pub use error::SequenceError;
pub use iter::{SequenceIntoIterator, SequenceIterator};

use node::Item;
use tree::FingerTree;

/// The largest number of elements a [`Sequence`] can hold: 2^32 - 16.
pub const MAX_LENGTH: usize = u32::MAX as usize - 15;

/// An immutable sequence with cheap access at both ends, fast concatenation,
/// and logarithmic indexing.
///
/// See the [module documentation](self) for an overview.
///
/// # Examples
///
/// ```rust
/// use fingerseq::persistent::Sequence;
///
/// let sequence: Sequence<i32> = (1..=5).collect();
/// let (left, right) = sequence.split_at(2);
///
/// assert_eq!(left.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
/// assert_eq!(right.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
/// assert_eq!(left.append_sequence(&right), sequence);
/// ```
pub struct Sequence<A> {
    tree: FingerTree<A>,
}

impl<A> Clone for Sequence<A> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

/// Creates a [`Sequence`] from a list of elements.
///
/// Up to eight elements are laid out directly without any rebalancing.
///
/// # Examples
///
/// ```rust
/// use fingerseq::sequence;
/// use fingerseq::persistent::Sequence;
///
/// let empty: Sequence<i32> = sequence![];
/// assert!(empty.is_empty());
///
/// let letters = sequence!['a', 'b', 'c'];
/// assert_eq!(letters.length(), 3);
/// assert_eq!(letters.get(1), Ok(&'b'));
/// ```
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::persistent::Sequence::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::persistent::Sequence::of([$($element),+])
    };
}

fn ensure_capacity(requested: usize) -> Result<(), SequenceError> {
    if requested > MAX_LENGTH {
        Err(SequenceError::CapacityExceeded {
            requested,
            maximum: MAX_LENGTH,
        })
    } else {
        Ok(())
    }
}

// =============================================================================
// Construction and Deque Operations
// =============================================================================

impl<A> Sequence<A> {
    /// Creates an empty sequence.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tree: FingerTree::Empty,
        }
    }

    /// Creates a sequence holding one element.
    #[inline]
    #[must_use]
    pub fn singleton(value: A) -> Self {
        Self {
            tree: FingerTree::Single(Item::element(value)),
        }
    }

    /// Creates a sequence from an array.
    ///
    /// Arrays of up to eight elements are split straight into the two
    /// affixes in O(1); longer arrays are appended one by one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fingerseq::persistent::Sequence;
    ///
    /// let sequence = Sequence::of([1, 2, 3]);
    /// assert_eq!(sequence.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn of<const N: usize>(values: [A; N]) -> Self {
        let items: SmallVec<[Item<A>; 8]> = values.into_iter().map(Item::element).collect();
        Self {
            tree: FingerTree::balanced(&items),
        }
    }

    const fn from_tree(tree: FingerTree<A>) -> Self {
        Self { tree }
    }

    /// Returns the number of elements. O(1).
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.tree.measure()
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfBounds`] if `index >= self.length()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fingerseq::persistent::{Sequence, SequenceError};
    ///
    /// let sequence: Sequence<i32> = (0..100).collect();
    /// assert_eq!(sequence.get(42), Ok(&42));
    /// assert!(matches!(sequence.get(100), Err(SequenceError::IndexOutOfBounds { .. })));
    /// ```
    pub fn get(&self, index: usize) -> Result<&A, SequenceError> {
        self.check_index(index)?;
        Ok(self.tree.lookup(index))
    }

    fn check_index(&self, index: usize) -> Result<(), SequenceError> {
        let length = self.length();
        if index < length {
            Ok(())
        } else {
            Err(SequenceError::IndexOutOfBounds { index, length })
        }
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NoSuchElement`] if the sequence is empty.
    pub fn head(&self) -> Result<&A, SequenceError> {
        self.tree
            .head()
            .map(|item| &**item.as_element())
            .ok_or(SequenceError::NoSuchElement { operation: "head" })
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NoSuchElement`] if the sequence is empty.
    pub fn last(&self) -> Result<&A, SequenceError> {
        self.tree
            .last()
            .map(|item| &**item.as_element())
            .ok_or(SequenceError::NoSuchElement { operation: "last" })
    }

    /// Returns every element but the first.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NoSuchElement`] if the sequence is empty.
    pub fn tail(&self) -> Result<Self, SequenceError> {
        if self.is_empty() {
            return Err(SequenceError::NoSuchElement { operation: "tail" });
        }
        Ok(Self::from_tree(self.tree.tail()))
    }

    /// Returns every element but the last.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NoSuchElement`] if the sequence is empty.
    pub fn init(&self) -> Result<Self, SequenceError> {
        if self.is_empty() {
            return Err(SequenceError::NoSuchElement { operation: "init" });
        }
        Ok(Self::from_tree(self.tree.init()))
    }

    /// Splits off the first element, or returns `None` if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fingerseq::persistent::Sequence;
    ///
    /// let sequence = Sequence::of([1, 2, 3]);
    /// let (head, rest) = sequence.uncons().unwrap();
    /// assert_eq!(*head, 1);
    /// assert_eq!(rest, Sequence::of([2, 3]));
    /// ```
    #[must_use]
    pub fn uncons(&self) -> Option<(&A, Self)> {
        let head = self.tree.head()?;
        Some((&**head.as_element(), Self::from_tree(self.tree.tail())))
    }

    /// Splits off the last element, or returns `None` if the sequence is empty.
    #[must_use]
    pub fn unsnoc(&self) -> Option<(Self, &A)> {
        let last = self.tree.last()?;
        Some((Self::from_tree(self.tree.init()), &**last.as_element()))
    }

    /// Returns a sequence with `value` in front.
    ///
    /// # Panics
    ///
    /// Panics if the sequence already holds [`MAX_LENGTH`] elements.
    #[must_use]
    pub fn prepend(&self, value: A) -> Self {
        self.try_prepend(value)
            .unwrap_or_else(|error| panic!("{error}"))
    }

    /// Returns a sequence with `value` in front.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::CapacityExceeded`] if the sequence already
    /// holds [`MAX_LENGTH`] elements.
    pub fn try_prepend(&self, value: A) -> Result<Self, SequenceError> {
        ensure_capacity(self.length().saturating_add(1))?;
        Ok(Self::from_tree(self.tree.prepend(Item::element(value))))
    }

    /// Returns a sequence with `value` at the back.
    ///
    /// # Panics
    ///
    /// Panics if the sequence already holds [`MAX_LENGTH`] elements.
    #[must_use]
    pub fn append(&self, value: A) -> Self {
        self.try_append(value).unwrap_or_else(|error| panic!("{error}"))
    }

    /// Returns a sequence with `value` at the back.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::CapacityExceeded`] if the sequence already
    /// holds [`MAX_LENGTH`] elements.
    pub fn try_append(&self, value: A) -> Result<Self, SequenceError> {
        ensure_capacity(self.length().saturating_add(1))?;
        Ok(Self::from_tree(self.tree.append(Item::element(value))))
    }

    pub(crate) fn prepend_shared(&self, value: Arc<A>) -> Self {
        Self::from_tree(self.tree.prepend(Item::Element(value)))
    }

    pub(crate) fn append_shared(&self, value: Arc<A>) -> Self {
        Self::from_tree(self.tree.append(Item::Element(value)))
    }

    /// Returns `self` followed by `other`, sharing the structure of both.
    ///
    /// # Panics
    ///
    /// Panics if the combined length exceeds [`MAX_LENGTH`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fingerseq::persistent::Sequence;
    ///
    /// let left = Sequence::of([1, 2]);
    /// let right = Sequence::of([3]);
    /// assert_eq!(left.append_sequence(&right), Sequence::of([1, 2, 3]));
    /// ```
    #[must_use]
    pub fn append_sequence(&self, other: &Self) -> Self {
        self.try_append_sequence(other)
            .unwrap_or_else(|error| panic!("{error}"))
    }

    /// Returns `self` followed by `other`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::CapacityExceeded`] if the combined length
    /// exceeds [`MAX_LENGTH`]; neither input is affected.
    pub fn try_append_sequence(&self, other: &Self) -> Result<Self, SequenceError> {
        ensure_capacity(self.length().saturating_add(other.length()))?;
        Ok(Self::from_tree(FingerTree::concat(
            &self.tree,
            &[],
            &other.tree,
        )))
    }

    /// Returns `other` followed by `self`.
    ///
    /// # Panics
    ///
    /// Panics if the combined length exceeds [`MAX_LENGTH`].
    #[must_use]
    pub fn prepend_sequence(&self, other: &Self) -> Self {
        other.append_sequence(self)
    }

    /// Returns `other` followed by `self`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::CapacityExceeded`] if the combined length
    /// exceeds [`MAX_LENGTH`]; neither input is affected.
    pub fn try_prepend_sequence(&self, other: &Self) -> Result<Self, SequenceError> {
        other.try_append_sequence(self)
    }

    /// Returns a copy with the element at `index` replaced by `value`.
    ///
    /// Only the path to the element is copied; everything else is shared.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfBounds`] if `index >= self.length()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fingerseq::persistent::Sequence;
    ///
    /// let sequence: Sequence<i32> = (0..10).collect();
    /// let updated = sequence.update(4, 40).unwrap();
    /// assert_eq!(updated.get(4), Ok(&40));
    /// assert_eq!(sequence.get(4), Ok(&4));
    /// ```
    pub fn update(&self, index: usize, value: A) -> Result<Self, SequenceError> {
        self.check_index(index)?;
        Ok(Self::from_tree(self.tree.update(index, Arc::new(value))))
    }

    /// Returns a copy with the first element replaced by `value`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NoSuchElement`] if the sequence is empty.
    pub fn with_head(&self, value: A) -> Result<Self, SequenceError> {
        if self.is_empty() {
            return Err(SequenceError::NoSuchElement {
                operation: "with_head",
            });
        }
        Ok(Self::from_tree(self.tree.update(0, Arc::new(value))))
    }

    /// Returns a copy with the last element replaced by `value`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NoSuchElement`] if the sequence is empty.
    pub fn with_last(&self, value: A) -> Result<Self, SequenceError> {
        let length = self.length();
        if length == 0 {
            return Err(SequenceError::NoSuchElement {
                operation: "with_last",
            });
        }
        Ok(Self::from_tree(self.tree.update(length - 1, Arc::new(value))))
    }

    /// Splits into the first `index` elements and the rest.
    ///
    /// An `index` past the end puts everything on the left.
    #[must_use]
    pub fn split_at(&self, index: usize) -> (Self, Self) {
        if index == 0 {
            return (Self::new(), self.clone());
        }
        if index >= self.length() {
            return (self.clone(), Self::new());
        }
        let (before, item, _, after) = self.tree.split(index);
        (Self::from_tree(before), Self::from_tree(after.prepend(item)))
    }

    /// Returns the first `count` elements, or all of them if there are fewer.
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        self.split_at(count).0
    }

    /// Returns everything after the first `count` elements.
    #[must_use]
    pub fn drop_first(&self, count: usize) -> Self {
        self.split_at(count).1
    }

    /// Returns a borrowing iterator, front to back.
    ///
    /// The iterator is double-ended, so `.rev()` walks back to front.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> SequenceIterator<'_, A> {
        SequenceIterator::new(&self.tree)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<A> Default for Sequence<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: PartialEq> PartialEq for Sequence<A> {
    fn eq(&self, other: &Self) -> bool {
        self.length() == other.length() && self.iter().eq(other.iter())
    }
}

impl<A: Eq> Eq for Sequence<A> {}

impl<A: PartialOrd> PartialOrd for Sequence<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<A: Ord> Ord for Sequence<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<A: Hash> Hash for Sequence<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for Sequence<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<A: fmt::Display> fmt::Display for Sequence<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

impl<A> FromIterator<A> for Sequence<A> {
    /// # Panics
    ///
    /// Panics if the iterator yields more than [`MAX_LENGTH`] elements.
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |sequence, element| sequence.append(element))
    }
}

impl<A: Clone> IntoIterator for Sequence<A> {
    type Item = A;
    type IntoIter = SequenceIntoIterator<A>;

    fn into_iter(self) -> Self::IntoIter {
        SequenceIntoIterator::new(self)
    }
}

impl<'a, A> IntoIterator for &'a Sequence<A> {
    type Item = &'a A;
    type IntoIter = SequenceIterator<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<A: serde::Serialize> serde::Serialize for Sequence<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.length()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SequenceVisitor<A> {
    marker: std::marker::PhantomData<A>,
}

#[cfg(feature = "serde")]
impl<A> SequenceVisitor<A> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, A> serde::de::Visitor<'de> for SequenceVisitor<A>
where
    A: serde::Deserialize<'de>,
{
    type Value = Sequence<A>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
    where
        S: serde::de::SeqAccess<'de>,
    {
        let mut sequence = Sequence::new();
        while let Some(element) = seq.next_element()? {
            sequence = sequence
                .try_append(element)
                .map_err(serde::de::Error::custom)?;
        }
        Ok(sequence)
    }
}

#[cfg(feature = "serde")]
impl<'de, A> serde::Deserialize<'de> for Sequence<A>
where
    A: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SequenceVisitor::new())
    }
}

// =============================================================================
// Thread Safety
// =============================================================================

static_assertions::assert_impl_all!(Sequence<i32>: Send, Sync);
static_assertions::assert_impl_all!(Sequence<String>: Send, Sync);
static_assertions::assert_not_impl_any!(Sequence<std::rc::Rc<i32>>: Send, Sync);
static_assertions::assert_not_impl_any!(Sequence<std::cell::Cell<i32>>: Sync);
