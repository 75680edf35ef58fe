//! Functional operations on [`Sequence`], all built from folds, `append`
//! and `prepend`, plus the type class implementations.

use std::sync::Arc;

use crate::typeclass::{
    Applicative, Foldable, Functor, Monad, Monoid, Semigroup, Traversable, TypeConstructor,
};

use super::Sequence;

impl<A> Sequence<A> {
    /// Folds the elements front to back by reference.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fingerseq::persistent::Sequence;
    ///
    /// let sequence = Sequence::of([1, 2, 3]);
    /// let digits = sequence.fold_left_ref(String::new(), |mut text, n| {
    ///     text.push_str(&n.to_string());
    ///     text
    /// });
    /// assert_eq!(digits, "123");
    /// ```
    pub fn fold_left_ref<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, &A) -> B,
    {
        self.iter().fold(init, function)
    }

    /// Folds the elements back to front by reference.
    pub fn fold_right_ref<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(&A, B) -> B,
    {
        self.iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    /// Applies `function` to every element.
    #[must_use]
    pub fn map<B, F>(&self, function: F) -> Sequence<B>
    where
        F: FnMut(&A) -> B,
    {
        self.iter().map(function).collect()
    }

    /// Keeps the elements satisfying `predicate`, in order.
    ///
    /// Kept elements are shared with `self`, not copied.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&A) -> bool,
    {
        self.iter().shared().fold(Self::new(), |sequence, element| {
            if predicate(&**element) {
                sequence.append_shared(Arc::clone(element))
            } else {
                sequence
            }
        })
    }

    /// Combines elements pairwise with `function`, stopping at the shorter input.
    #[must_use]
    pub fn zip_with<B, C, F>(&self, other: &Sequence<B>, mut function: F) -> Sequence<C>
    where
        F: FnMut(&A, &B) -> C,
    {
        self.iter()
            .zip(other.iter())
            .map(|(left, right)| function(left, right))
            .collect()
    }

    /// Pairs elements up, stopping at the shorter input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fingerseq::persistent::Sequence;
    ///
    /// let zipped = Sequence::of([1, 2, 3]).zip(&Sequence::of(['a', 'b']));
    /// assert_eq!(zipped, Sequence::of([(1, 'a'), (2, 'b')]));
    /// ```
    #[must_use]
    pub fn zip<B>(&self, other: &Sequence<B>) -> Sequence<(A, B)>
    where
        A: Clone,
        B: Clone,
    {
        self.zip_with(other, |left, right| (left.clone(), right.clone()))
    }

    /// Maps every element to a sequence and concatenates the results in order.
    ///
    /// # Panics
    ///
    /// Panics if the result would exceed [`MAX_LENGTH`](super::MAX_LENGTH) elements.
    #[must_use]
    pub fn bind<B, F>(&self, mut function: F) -> Sequence<B>
    where
        F: FnMut(&A) -> Sequence<B>,
    {
        self.fold_left_ref(Sequence::new(), |accumulator, element| {
            accumulator.append_sequence(&function(element))
        })
    }

    /// Running left fold: `init` followed by every intermediate accumulator.
    ///
    /// The result has one more element than `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fingerseq::persistent::Sequence;
    ///
    /// let sums = Sequence::of([1, 2, 3]).scan_left(0, |total, n| total + n);
    /// assert_eq!(sums, Sequence::of([0, 1, 3, 6]));
    /// ```
    #[must_use]
    pub fn scan_left<B, F>(&self, init: B, mut function: F) -> Sequence<B>
    where
        F: FnMut(&B, &A) -> B,
    {
        let init = Arc::new(init);
        let (scanned, _) = self.fold_left_ref(
            (Sequence::new().append_shared(Arc::clone(&init)), init),
            |(scanned, current), element| {
                let next = Arc::new(function(&*current, element));
                (scanned.append_shared(Arc::clone(&next)), next)
            },
        );
        scanned
    }

    /// Running right fold: every intermediate accumulator followed by `init`.
    ///
    /// The result has one more element than `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fingerseq::persistent::Sequence;
    ///
    /// let sums = Sequence::of([1, 2, 3]).scan_right(0, |n, total| n + total);
    /// assert_eq!(sums, Sequence::of([6, 5, 3, 0]));
    /// ```
    #[must_use]
    pub fn scan_right<B, F>(&self, init: B, mut function: F) -> Sequence<B>
    where
        F: FnMut(&A, &B) -> B,
    {
        let init = Arc::new(init);
        let (scanned, _) = self.fold_right_ref(
            (Sequence::new().prepend_shared(Arc::clone(&init)), init),
            |element, (scanned, current)| {
                let next = Arc::new(function(element, &*current));
                (scanned.prepend_shared(Arc::clone(&next)), next)
            },
        );
        scanned
    }

    /// Returns the elements in reverse order. O(n); elements are shared.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.iter().shared().fold(Self::new(), |reversed, element| {
            reversed.prepend_shared(Arc::clone(element))
        })
    }

    /// Returns the first element satisfying `predicate`, by reference.
    pub fn find_ref<P>(&self, mut predicate: P) -> Option<&A>
    where
        P: FnMut(&A) -> bool,
    {
        self.iter().find(|element| predicate(*element))
    }

    /// Returns `true` if any element satisfies `predicate`.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Returns `true` if every element satisfies `predicate`; vacuously true when empty.
    pub fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Returns the index of the first element equal to `target`.
    pub fn index_of(&self, target: &A) -> Option<usize>
    where
        A: PartialEq,
    {
        self.iter().position(|element| element == target)
    }

    /// Builds a sequence by appending whatever `generator` produces until it returns `None`.
    ///
    /// Elements come out in generation order.
    ///
    /// # Panics
    ///
    /// Panics if the generator produces more than [`MAX_LENGTH`](super::MAX_LENGTH) elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fingerseq::persistent::Sequence;
    ///
    /// let countdown = Sequence::unfold_right(3, |n| (n > 0).then(|| (n, n - 1)));
    /// assert_eq!(countdown, Sequence::of([3, 2, 1]));
    /// ```
    #[must_use]
    pub fn unfold_right<S, F>(seed: S, mut generator: F) -> Self
    where
        F: FnMut(S) -> Option<(A, S)>,
    {
        let mut sequence = Self::new();
        let mut state = seed;
        while let Some((element, next)) = generator(state) {
            sequence = sequence.append(element);
            state = next;
        }
        sequence
    }

    /// Builds a sequence by prepending whatever `generator` produces until it returns `None`.
    ///
    /// The last generated element ends up first.
    ///
    /// # Panics
    ///
    /// Panics if the generator produces more than [`MAX_LENGTH`](super::MAX_LENGTH) elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fingerseq::persistent::Sequence;
    ///
    /// let ascending = Sequence::unfold_left(3, |n| (n > 0).then(|| (n, n - 1)));
    /// assert_eq!(ascending, Sequence::of([1, 2, 3]));
    /// ```
    #[must_use]
    pub fn unfold_left<S, F>(seed: S, mut generator: F) -> Self
    where
        F: FnMut(S) -> Option<(A, S)>,
    {
        let mut sequence = Self::new();
        let mut state = seed;
        while let Some((element, next)) = generator(state) {
            sequence = sequence.prepend(element);
            state = next;
        }
        sequence
    }
}

impl<A: Clone, B: Clone> Sequence<(A, B)> {
    /// Splits a sequence of pairs into a pair of sequences.
    #[must_use]
    pub fn unzip(&self) -> (Sequence<A>, Sequence<B>) {
        self.fold_left_ref(
            (Sequence::new(), Sequence::new()),
            |(lefts, rights), (left, right)| {
                (lefts.append(left.clone()), rights.append(right.clone()))
            },
        )
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Sequence<A> {
    type Inner = A;
    type WithType<B> = Sequence<B>;
}

impl<A: Clone> Functor for Sequence<A> {
    fn fmap<B, F>(self, function: F) -> Sequence<B>
    where
        F: FnMut(A) -> B,
    {
        self.iter().cloned().map(function).collect()
    }

    fn fmap_ref<B, F>(&self, function: F) -> Sequence<B>
    where
        F: FnMut(&A) -> B,
    {
        self.map(function)
    }
}

impl<A: Clone> Foldable for Sequence<A> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.iter().cloned().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        self.iter()
            .rev()
            .cloned()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn length(&self) -> usize {
        Self::length(self)
    }
}

impl<A> Semigroup for Sequence<A> {
    /// Concatenation.
    ///
    /// # Panics
    ///
    /// Panics if the combined length exceeds [`MAX_LENGTH`](super::MAX_LENGTH).
    fn combine(self, other: Self) -> Self {
        self.append_sequence(&other)
    }
}

impl<A> Monoid for Sequence<A> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<A: Clone> Applicative for Sequence<A> {
    #[inline]
    fn pure<B>(value: B) -> Sequence<B> {
        Sequence::singleton(value)
    }

    fn map2<B, C, F>(self, other: Sequence<B>, mut function: F) -> Sequence<C>
    where
        A: Clone,
        B: Clone,
        F: FnMut(A, B) -> C,
    {
        let mut result = Sequence::new();
        for left in &self {
            for right in &other {
                result = result.append(function(left.clone(), right.clone()));
            }
        }
        result
    }

    fn apply<B, Output>(self, other: Sequence<B>) -> Sequence<Output>
    where
        B: Clone,
        A: FnMut(B) -> Output,
    {
        let mut result = Sequence::new();
        for mut function in self {
            for argument in &other {
                result = result.append(function(argument.clone()));
            }
        }
        result
    }
}

impl<A: Clone> Monad for Sequence<A> {
    fn flat_map<B, F>(self, mut function: F) -> Sequence<B>
    where
        F: FnMut(A) -> Sequence<B>,
    {
        self.iter()
            .cloned()
            .fold(Sequence::new(), |accumulator, element| {
                accumulator.append_sequence(&function(element))
            })
    }
}

impl<A: Clone> Traversable for Sequence<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Sequence<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        let mut result = Sequence::new();
        for element in &self {
            result = result.append(function(element.clone())?);
        }
        Some(result)
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Sequence<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        let mut result = Sequence::new();
        for element in &self {
            result = result.append(function(element.clone())?);
        }
        Ok(result)
    }
}
