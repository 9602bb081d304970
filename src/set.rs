//! An ordered set based on the intrusive AVL core, via [`AvlMap<T, ()>`].

use crate::map::{self, AvlMap};
use compare::{Compare, Natural};
use std::fmt::{self, Debug};
use std::iter::FromIterator;

/// An ordered set of items, implemented as an [`AvlMap`] with a unit
/// value.
///
/// # Examples
///
/// ```rust
/// use avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.insert(2);
/// set.insert(1);
/// set.insert(3);
///
/// let mut it = set.iter();
/// assert_eq!(it.next(), Some(&1));
/// assert_eq!(it.next(), Some(&2));
/// assert_eq!(it.next(), Some(&3));
/// assert_eq!(it.next(), None);
/// ```
pub struct AvlSet<T, C = Natural<T>>
where
    C: Compare<T>,
{
    map: AvlMap<T, (), C>,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Creates an empty set ordered according to the natural order of its items.
    pub fn new() -> AvlSet<T> {
        AvlSet { map: AvlMap::new() }
    }
}

impl<T> Default for AvlSet<T>
where
    T: Ord,
{
    fn default() -> AvlSet<T> {
        AvlSet::new()
    }
}

impl<T, C> AvlSet<T, C>
where
    C: Compare<T>,
{
    /// Creates an empty set ordered according to the given comparator.
    pub fn with_cmp(cmp: C) -> AvlSet<T, C> {
        AvlSet { map: AvlMap::with_cmp(cmp) }
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the number of items in the set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns a reference to the set's comparator.
    pub fn cmp(&self) -> &C {
        self.map.cmp()
    }

    /// Removes all items from the set.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Inserts an item into the set, returning whether it was newly inserted.
    pub fn insert(&mut self, item: T) -> bool {
        self.map.insert(item, ()).is_none()
    }

    /// Checks whether the set contains the given item.
    pub fn contains(&self, item: &T) -> bool {
        self.map.contains_key(item)
    }

    /// Removes an item from the set, returning whether it was present.
    pub fn remove(&mut self, item: &T) -> bool {
        self.map.remove(item).is_some()
    }

    /// Returns the set's maximum item.
    pub fn max(&self) -> Option<&T> {
        self.map.max().map(|(k, _)| k)
    }

    /// Returns the set's minimum item.
    pub fn min(&self) -> Option<&T> {
        self.map.min().map(|(k, _)| k)
    }

    /// Returns the greatest item strictly less than `item`.
    pub fn pred(&self, item: &T) -> Option<&T> {
        self.map.pred(item).map(|(k, _)| k)
    }

    /// Returns the greatest item less than or equal to `item`.
    pub fn pred_or_eq(&self, item: &T) -> Option<&T> {
        self.map.pred_or_eq(item).map(|(k, _)| k)
    }

    /// Returns the smallest item strictly greater than `item`.
    pub fn succ(&self, item: &T) -> Option<&T> {
        self.map.succ(item).map(|(k, _)| k)
    }

    /// Returns the smallest item greater than or equal to `item`.
    pub fn succ_or_eq(&self, item: &T) -> Option<&T> {
        self.map.succ_or_eq(item).map(|(k, _)| k)
    }

    /// Returns an iterator over the set's items in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.map.iter() }
    }
}

impl<T, C> Clone for AvlSet<T, C>
where
    T: Clone,
    C: Clone + Compare<T>,
{
    fn clone(&self) -> AvlSet<T, C> {
        AvlSet { map: self.map.clone() }
    }
}

impl<T, C> Debug for AvlSet<T, C>
where
    T: Debug,
    C: Compare<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        let mut it = self.iter();
        if let Some(item) = it.next() {
            write!(f, "{:?}", item)?;
            for item in it {
                write!(f, ", {:?}", item)?;
            }
        }
        write!(f, "}}")
    }
}

impl<T, C> Extend<T> for AvlSet<T, C>
where
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, it: I) {
        for item in it {
            self.insert(item);
        }
    }
}

impl<T> FromIterator<T> for AvlSet<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(it: I) -> AvlSet<T> {
        let mut set = AvlSet::new();
        set.extend(it);
        set
    }
}

/// An iterator over a set's items in ascending order.
pub struct Iter<'a, T> {
    inner: map::Iter<'a, T, ()>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|(k, _)| k)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// An iterator that consumes the set in ascending order.
pub struct IntoIter<T> {
    inner: map::IntoIter<T, ()>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.inner.next().map(|(k, _)| k)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T, C> IntoIterator for AvlSet<T, C>
where
    C: Compare<T>,
{
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self.map.into_iter() }
    }
}

impl<'a, T, C> IntoIterator for &'a AvlSet<T, C>
where
    C: Compare<T>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
