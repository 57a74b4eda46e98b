//! Strided, no-copy group views over a flat source.
//!
//! # Responsibility
//! - Partition a flat ordered source into `N` round-robin groups without
//!   copying or allocating.
//! - Translate local (per-group) indices into flat source indices.
//!
//! # Invariants
//! - Group `g` of `N` over a source of length `L` has
//!   `L / N + (1 if L % N > g else 0)` elements.
//! - Local index `k` of group `g` maps to flat index `k * N + g`.
//! - Summed over all groups, lengths equal `L`; every flat index is reached
//!   exactly once.
//! - Views never outlive the borrowed source and never mutate it.

use crate::error::{GridError, GridResult};
use std::collections::VecDeque;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::Index;

/// Ordered, randomly addressable sequence with zero-based contiguous indices.
///
/// Implementations must answer `get` in O(1) and keep indexing stable while
/// any view borrows them.
pub trait IndexedSource {
    type Item;

    /// Number of elements in the source.
    fn len(&self) -> usize;

    /// Element at `index`, or `None` when `index >= len()`.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> IndexedSource for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T, const N: usize> IndexedSource for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> IndexedSource for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> IndexedSource for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}

/// Number of elements group `group` receives when `len` elements are dealt
/// round-robin across `total_groups` groups.
///
/// Lower-indexed groups receive the remainder first. Returns `0` when
/// `total_groups == 0`.
pub fn group_len(len: usize, group: usize, total_groups: usize) -> usize {
    if total_groups == 0 {
        return 0;
    }
    len / total_groups + usize::from(len % total_groups > group)
}

/// Maps a flat index to `(group, local_index)` for `total_groups` groups.
///
/// This is the inverse of [`StridedGroupView::flat_index`]. Returns `None`
/// when `total_groups == 0`.
pub fn locate(flat_index: usize, total_groups: usize) -> Option<(usize, usize)> {
    if total_groups == 0 {
        return None;
    }
    Some((flat_index % total_groups, flat_index / total_groups))
}

/// Read-only view of group `group` out of `total_groups` over a borrowed
/// source.
///
/// Construction is O(1) and never materializes elements. The view is `Copy`:
/// it is just a reference plus two integers.
///
/// ```
/// use waterfall_core::StridedSource;
///
/// let items = vec![0, 1, 2, 3, 4, 5, 6, 7];
/// let first = items.strided_group(0, 2);
/// let second = items.strided_group(1, 2);
/// assert_eq!(first.to_string(), "[0, 2, 4, 6]");
/// assert_eq!(second.to_string(), "[1, 3, 5, 7]");
/// assert_ne!(first, second);
/// ```
pub struct StridedGroupView<'a, S: ?Sized> {
    source: &'a S,
    group: usize,
    total_groups: usize,
}

impl<'a, S: IndexedSource + ?Sized> StridedGroupView<'a, S> {
    /// Creates the view of `group` out of `total_groups`.
    ///
    /// # Panics
    /// - When `total_groups == 0`.
    /// - When `group >= total_groups`.
    ///
    /// Both are programmer errors; use [`Self::try_new`] when the values come
    /// from untrusted input.
    pub fn new(source: &'a S, group: usize, total_groups: usize) -> Self {
        match Self::try_new(source, group, total_groups) {
            Ok(view) => view,
            Err(err) => panic!("invalid strided group view: {err}"),
        }
    }

    /// Creates the view, reporting invalid group parameters as errors.
    ///
    /// # Errors
    /// - `GridError::InvalidGroupCount` when `total_groups == 0`.
    /// - `GridError::GroupOutOfRange` when `group >= total_groups`.
    pub fn try_new(source: &'a S, group: usize, total_groups: usize) -> GridResult<Self> {
        if total_groups == 0 {
            return Err(GridError::InvalidGroupCount { total_groups });
        }
        if group >= total_groups {
            return Err(GridError::GroupOutOfRange {
                group,
                total_groups,
            });
        }
        Ok(Self {
            source,
            group,
            total_groups,
        })
    }

    /// The group (track) this view represents.
    pub fn group(&self) -> usize {
        self.group
    }

    /// Total number of groups the source is dealt across.
    pub fn total_groups(&self) -> usize {
        self.total_groups
    }

    /// The borrowed source.
    pub fn source(&self) -> &'a S {
        self.source
    }

    /// Number of elements in this group. O(1).
    pub fn len(&self) -> usize {
        group_len(self.source.len(), self.group, self.total_groups)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat source index of local index `local`, or `None` when out of range.
    pub fn flat_index(&self, local: usize) -> Option<usize> {
        (local < self.len()).then(|| local * self.total_groups + self.group)
    }

    /// Element at local index `local`, or `None` when out of range.
    pub fn get(&self, local: usize) -> Option<&'a S::Item> {
        let source = self.source;
        self.flat_index(local).and_then(|flat| source.get(flat))
    }

    /// Element at local index `local`.
    ///
    /// # Errors
    /// - `GridError::IndexOutOfBounds` when `local >= len()`.
    pub fn at(&self, local: usize) -> GridResult<&'a S::Item> {
        self.get(local).ok_or(GridError::IndexOutOfBounds {
            index: local,
            len: self.len(),
        })
    }

    pub fn first(&self) -> Option<&'a S::Item> {
        self.get(0)
    }

    pub fn last(&self) -> Option<&'a S::Item> {
        self.len().checked_sub(1).and_then(|local| self.get(local))
    }

    /// Lazy iterator over the group's elements in local order.
    ///
    /// The iterator is double-ended and exact-size; calling `iter()` again
    /// restarts from the first element.
    pub fn iter(&self) -> StridedIter<'a, S> {
        StridedIter {
            view: *self,
            front: 0,
            back: self.len(),
        }
    }

    /// Clones the group's elements into a new vector.
    pub fn to_vec(&self) -> Vec<S::Item>
    where
        S::Item: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<S: ?Sized> Clone for StridedGroupView<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for StridedGroupView<'_, S> {}

impl<S, U> PartialEq<StridedGroupView<'_, U>> for StridedGroupView<'_, S>
where
    S: IndexedSource + ?Sized,
    U: IndexedSource + ?Sized,
    S::Item: PartialEq<U::Item>,
{
    fn eq(&self, other: &StridedGroupView<'_, U>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(lhs, rhs)| lhs == rhs)
    }
}

impl<S> Eq for StridedGroupView<'_, S>
where
    S: IndexedSource + ?Sized,
    S::Item: Eq,
{
}

impl<S> Hash for StridedGroupView<'_, S>
where
    S: IndexedSource + ?Sized,
    S::Item: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for element in self.iter() {
            element.hash(state);
        }
    }
}

impl<S> Display for StridedGroupView<'_, S>
where
    S: IndexedSource + ?Sized,
    S::Item: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (local, element) in self.iter().enumerate() {
            if local > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

impl<S> Debug for StridedGroupView<'_, S>
where
    S: IndexedSource + ?Sized,
    S::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StridedGroupView")
            .field("group", &self.group)
            .field("total_groups", &self.total_groups)
            .field("elements", &Elements(*self))
            .finish()
    }
}

struct Elements<'a, S: ?Sized>(StridedGroupView<'a, S>);

impl<S> Debug for Elements<'_, S>
where
    S: IndexedSource + ?Sized,
    S::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<S: IndexedSource + ?Sized> Index<usize> for StridedGroupView<'_, S> {
    type Output = S::Item;

    /// # Panics
    /// When `local >= len()`, like slice indexing.
    fn index(&self, local: usize) -> &S::Item {
        match self.get(local) {
            Some(element) => element,
            None => panic!(
                "index {local} is out of bounds for view of length {}",
                self.len()
            ),
        }
    }
}

impl<'a, S: IndexedSource + ?Sized> IntoIterator for StridedGroupView<'a, S> {
    type Item = &'a S::Item;
    type IntoIter = StridedIter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, S: IndexedSource + ?Sized> IntoIterator for &StridedGroupView<'a, S> {
    type Item = &'a S::Item;
    type IntoIter = StridedIter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over one strided group. Created by [`StridedGroupView::iter`].
pub struct StridedIter<'a, S: ?Sized> {
    view: StridedGroupView<'a, S>,
    front: usize,
    back: usize,
}

impl<S: ?Sized> Clone for StridedIter<'_, S> {
    fn clone(&self) -> Self {
        Self {
            view: self.view,
            front: self.front,
            back: self.back,
        }
    }
}

impl<S: ?Sized> Debug for StridedIter<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StridedIter")
            .field("group", &self.view.group)
            .field("total_groups", &self.view.total_groups)
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

impl<'a, S: IndexedSource + ?Sized> Iterator for StridedIter<'a, S> {
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let element = self.view.get(self.front);
        self.front += 1;
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }

    fn count(self) -> usize {
        self.back - self.front
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<S: IndexedSource + ?Sized> DoubleEndedIterator for StridedIter<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.view.get(self.back)
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.back = self.back.saturating_sub(n).max(self.front);
        self.next_back()
    }
}

impl<S: IndexedSource + ?Sized> ExactSizeIterator for StridedIter<'_, S> {}

impl<S: IndexedSource + ?Sized> FusedIterator for StridedIter<'_, S> {}

/// Iterator over every group of a source, in group order.
///
/// Yields nothing when `total_groups == 0`.
pub struct StridedGroups<'a, S: ?Sized> {
    source: &'a S,
    next_group: usize,
    total_groups: usize,
}

impl<S: ?Sized> Debug for StridedGroups<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StridedGroups")
            .field("next_group", &self.next_group)
            .field("total_groups", &self.total_groups)
            .finish()
    }
}

impl<'a, S: IndexedSource + ?Sized> Iterator for StridedGroups<'a, S> {
    type Item = StridedGroupView<'a, S>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_group >= self.total_groups {
            return None;
        }
        let view = StridedGroupView {
            source: self.source,
            group: self.next_group,
            total_groups: self.total_groups,
        };
        self.next_group += 1;
        Some(view)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total_groups - self.next_group;
        (remaining, Some(remaining))
    }
}

impl<S: IndexedSource + ?Sized> ExactSizeIterator for StridedGroups<'_, S> {}

impl<S: IndexedSource + ?Sized> FusedIterator for StridedGroups<'_, S> {}

/// Returns every group view of `source` dealt across `total_groups` groups.
pub fn strided_groups<S: IndexedSource + ?Sized>(
    source: &S,
    total_groups: usize,
) -> StridedGroups<'_, S> {
    StridedGroups {
        source,
        next_group: 0,
        total_groups,
    }
}

/// Extension methods for building strided views directly from a source.
pub trait StridedSource: IndexedSource {
    /// View of `group` out of `total_groups`.
    ///
    /// # Panics
    /// Same preconditions as [`StridedGroupView::new`].
    fn strided_group(&self, group: usize, total_groups: usize) -> StridedGroupView<'_, Self> {
        StridedGroupView::new(self, group, total_groups)
    }

    /// All group views over `total_groups` groups, in group order.
    fn strided_groups(&self, total_groups: usize) -> StridedGroups<'_, Self> {
        strided_groups(self, total_groups)
    }
}

impl<S: IndexedSource + ?Sized> StridedSource for S {}

#[cfg(test)]
mod tests {
    use super::{group_len, locate, StridedGroupView, StridedSource};
    use std::collections::VecDeque;

    #[test]
    fn group_len_hands_remainder_to_lowest_groups() {
        assert_eq!(group_len(7, 0, 3), 3);
        assert_eq!(group_len(7, 1, 3), 2);
        assert_eq!(group_len(7, 2, 3), 2);
        assert_eq!(group_len(0, 0, 4), 0);
        assert_eq!(group_len(5, 0, 0), 0);
    }

    #[test]
    fn locate_rejects_zero_groups() {
        assert_eq!(locate(3, 0), None);
        assert_eq!(locate(7, 3), Some((1, 2)));
    }

    #[test]
    fn view_works_over_vec_deque() {
        let mut source = VecDeque::new();
        source.push_back('b');
        source.push_back('c');
        source.push_front('a');

        let view = source.strided_group(0, 2);
        assert_eq!(view.to_vec(), vec!['a', 'c']);
    }

    #[test]
    fn iterator_reports_exact_size_after_partial_consumption() {
        let source = [10, 11, 12, 13, 14, 15, 16];
        let view = StridedGroupView::new(&source, 0, 2);
        let mut iter = view.iter();
        assert_eq!(iter.len(), 4);
        iter.next();
        iter.next_back();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.collect::<Vec<_>>(), vec![&12, &14]);
    }

    #[test]
    fn nth_and_nth_back_skip_without_overrun() {
        let source: Vec<u32> = (0..20).collect();
        let view = source.strided_group(1, 4);
        let mut iter = view.iter();
        assert_eq!(iter.nth(2), Some(&9));
        assert_eq!(iter.nth_back(0), Some(&17));
        assert_eq!(iter.nth(10), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn debug_lists_group_metadata_and_elements() {
        let source = vec![1, 2, 3];
        let rendered = format!("{:?}", source.strided_group(1, 2));
        assert!(rendered.contains("group: 1"));
        assert!(rendered.contains("[2]"));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_panics_past_end() {
        let source = vec![1, 2, 3];
        let view = source.strided_group(0, 2);
        let _value = view[2];
    }
}
