use crate::{error::VContainerError, index::*, logging::*};
use itertools::Itertools;
use std::collections::VecDeque;

/// Double-ended queue whose void operations return the deque itself.
///
/// An optional `maxlen` bounds the length: appending to a full deque discards an element from the opposite end.
#[derive(Clone, Debug)]
pub struct SRDeque<T> {
    deque: VecDeque<T>,
    omaxlen: Option<usize>,
}

impl<T> Default for SRDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SRDeque<T> {
    pub fn new() -> Self {
        SRDeque {deque: VecDeque::new(), omaxlen: None}
    }
    pub fn with_maxlen(n_maxlen: usize) -> Self {
        SRDeque {deque: VecDeque::new(), omaxlen: Some(n_maxlen)}
    }
    /// Collects `itt`, keeping only the last `n_maxlen` items.
    pub fn from_iter_with_maxlen(itt: impl IntoIterator<Item=T>, n_maxlen: usize) -> Self {
        let mut deque = Self::with_maxlen(n_maxlen);
        deque.extend(itt);
        deque
    }
    pub fn maxlen(&self) -> Option<usize> {
        self.omaxlen
    }
    pub fn into_inner(self) -> VecDeque<T> {
        self.deque
    }

    fn is_full(&self) -> bool {
        self.omaxlen.map_or(false, |n_maxlen| self.deque.len()>=n_maxlen)
    }

    pub fn append(&mut self, t: T) -> &mut Self {
        if self.omaxlen==Some(0) {
            trace!("SRDeque::append: maxlen 0, discarding element");
            return self;
        }
        if self.is_full() {
            trace!("SRDeque::append: maxlen reached, discarding leftmost element");
            self.deque.pop_front();
        }
        self.deque.push_back(t);
        self
    }
    pub fn append_left(&mut self, t: T) -> &mut Self {
        if self.omaxlen==Some(0) {
            trace!("SRDeque::append_left: maxlen 0, discarding element");
            return self;
        }
        if self.is_full() {
            trace!("SRDeque::append_left: maxlen reached, discarding rightmost element");
            self.deque.pop_back();
        }
        self.deque.push_front(t);
        self
    }
    pub fn extend(&mut self, itt: impl IntoIterator<Item=T>) -> &mut Self {
        for t in itt {
            self.append(t);
        }
        self
    }
    /// Appends each item to the left, one after the other; the items end up in reverse order.
    pub fn extend_left(&mut self, itt: impl IntoIterator<Item=T>) -> &mut Self {
        for t in itt {
            self.append_left(t);
        }
        self
    }
    pub fn pop(&mut self) -> Result<T, VContainerError> {
        self.deque.pop_back()
            .ok_or_else(|| VContainerError::EmptyContainer.logged("SRDeque::pop"))
    }
    pub fn pop_left(&mut self) -> Result<T, VContainerError> {
        self.deque.pop_front()
            .ok_or_else(|| VContainerError::EmptyContainer.logged("SRDeque::pop_left"))
    }
    /// Rotates `n` steps to the right (to the left if `n` is negative).
    pub fn rotate(&mut self, n: isize) -> &mut Self {
        let n_len = self.deque.len();
        if 0<n_len {
            let n_steps = n.unsigned_abs() % n_len;
            if 0<=n {
                self.deque.rotate_right(n_steps);
            } else {
                self.deque.rotate_left(n_steps);
            }
        }
        self
    }
    pub fn clear(&mut self) -> &mut Self {
        self.deque.clear();
        self
    }
    pub fn reverse(&mut self) -> &mut Self {
        self.deque.make_contiguous().reverse();
        self
    }
    pub fn insert(&mut self, i: isize, t: T) -> Result<&mut Self, VContainerError> {
        if let Some(n_maxlen) = self.omaxlen.filter(|_| self.is_full()) {
            return Err(VContainerError::Overflow{maxlen: n_maxlen}.logged("SRDeque::insert"));
        }
        let i_insert = clamp_index(i, self.deque.len());
        self.deque.insert(i_insert, t);
        Ok(self)
    }
    pub fn get(&self, i: isize) -> Result<&T, VContainerError> {
        let i = resolve_index(i, self.deque.len()).map_err(|err| err.logged("SRDeque::get"))?;
        Ok(&self.deque[i])
    }
    pub fn get_mut(&mut self, i: isize) -> Result<&mut T, VContainerError> {
        let i = resolve_index(i, self.deque.len()).map_err(|err| err.logged("SRDeque::get_mut"))?;
        Ok(&mut self.deque[i])
    }
    pub fn set(&mut self, i: isize, t: T) -> Result<&mut Self, VContainerError> {
        *self.get_mut(i)? = t;
        Ok(self)
    }
    pub fn delete(&mut self, i: isize) -> Result<&mut Self, VContainerError> {
        let i = resolve_index(i, self.deque.len()).map_err(|err| err.logged("SRDeque::delete"))?;
        self.deque.remove(i);
        Ok(self)
    }
}

impl<T: PartialEq> SRDeque<T> {
    pub fn count(&self, t: &T) -> usize {
        self.deque.iter().filter(|t_item| *t_item==t).count()
    }
    pub fn index(&self, t: &T) -> Result<usize, VContainerError> {
        self.index_in(t, 0, isize::MAX)
    }
    /// Position of the first occurrence of `t` within the slice `i_start..i_stop` (bounds are clamped).
    pub fn index_in(&self, t: &T, i_start: isize, i_stop: isize) -> Result<usize, VContainerError> {
        let n_len = self.deque.len();
        let i_start = clamp_index(i_start, n_len);
        let i_stop = clamp_index(i_stop, n_len);
        self.deque.iter()
            .enumerate()
            .take(i_stop)
            .skip(i_start)
            .find_map(|(i, t_item)| (t_item==t).then_some(i))
            .ok_or_else(|| VContainerError::ValueNotFound.logged("SRDeque::index"))
    }
    /// Removes the first occurrence of `t`.
    pub fn remove(&mut self, t: &T) -> Result<&mut Self, VContainerError> {
        let i = self.deque.iter()
            .position(|t_item| t_item==t)
            .ok_or_else(|| VContainerError::ValueNotFound.logged("SRDeque::remove"))?;
        self.deque.remove(i);
        Ok(self)
    }
}

// Like the plain deque, equality ignores maxlen.
impl<T: PartialEq> PartialEq for SRDeque<T> {
    fn eq(&self, other: &SRDeque<T>) -> bool {
        self.deque==other.deque
    }
}
impl<T: Eq> Eq for SRDeque<T> {}

impl<T> std::ops::Deref for SRDeque<T> {
    type Target = VecDeque<T>;
    fn deref(&self) -> &VecDeque<T> {
        &self.deque
    }
}

impl<T> From<VecDeque<T>> for SRDeque<T> {
    fn from(deque: VecDeque<T>) -> Self {
        SRDeque {deque, omaxlen: None}
    }
}

impl<T> FromIterator<T> for SRDeque<T> {
    fn from_iter<ItT: IntoIterator<Item=T>>(itt: ItT) -> Self {
        VecDeque::from_iter(itt).into()
    }
}

impl<T> Extend<T> for SRDeque<T> {
    fn extend<ItT: IntoIterator<Item=T>>(&mut self, itt: ItT) {
        for t in itt {
            self.append(t);
        }
    }
}

impl<T> IntoIterator for SRDeque<T> {
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.deque.into_iter()
    }
}

impl<'deque, T> IntoIterator for &'deque SRDeque<T> {
    type Item = &'deque T;
    type IntoIter = std::collections::vec_deque::Iter<'deque, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.deque.iter()
    }
}

impl<T: std::fmt::Debug> std::fmt::Display for SRDeque<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "deque([{:?}]", self.deque.iter().format(", "))?;
        if let Some(n_maxlen) = self.omaxlen {
            write!(f, ", maxlen={}", n_maxlen)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
fn contents<T: Clone>(deque: &SRDeque<T>) -> Vec<T> {
    deque.iter().cloned().collect()
}

#[test]
fn test_void_operations_return_self() {
    let mut deque = SRDeque::new();
    let ptr_deque: *const SRDeque<i32> = &deque;
    assert!(std::ptr::eq(deque.append(1), ptr_deque));
    assert!(std::ptr::eq(deque.append_left(0), ptr_deque));
    assert!(std::ptr::eq(deque.extend([2, 3]), ptr_deque));
    assert!(std::ptr::eq(deque.extend_left([-1]), ptr_deque));
    assert!(std::ptr::eq(deque.rotate(1), ptr_deque));
    assert!(std::ptr::eq(deque.reverse(), ptr_deque));
    assert!(std::ptr::eq(deque.remove(&2).unwrap(), ptr_deque));
    assert!(std::ptr::eq(deque.insert(0, 7).unwrap(), ptr_deque));
    assert!(std::ptr::eq(deque.set(0, 8).unwrap(), ptr_deque));
    assert!(std::ptr::eq(deque.delete(-1).unwrap(), ptr_deque));
    assert!(std::ptr::eq(deque.clear(), ptr_deque));
    assert!(deque.is_empty());
}

#[test]
fn test_matches_plain_deque() {
    let mut deque = SRDeque::new();
    let mut dequen = VecDeque::new();
    deque.append(1).append(2).append_left(0).extend([3, 4]).rotate(2);
    dequen.push_back(1);
    dequen.push_back(2);
    dequen.push_front(0);
    dequen.extend([3, 4]);
    dequen.rotate_right(2);
    assert_eq!(contents(&deque), Vec::from_iter(dequen.iter().cloned()));
    assert_eq!(contents(&deque), vec![3, 4, 0, 1, 2]);
    assert_eq!(deque.pop(), Ok(2));
    assert_eq!(deque.pop_left(), Ok(3));
    assert_eq!(contents(&deque), vec![4, 0, 1]);
}

#[test]
fn test_pop_empty() {
    let mut deque = SRDeque::<i32>::new();
    assert_eq!(deque.pop_left(), Err(VContainerError::EmptyContainer));
    assert_eq!(deque.pop(), Err(VContainerError::EmptyContainer));
}

#[test]
fn test_extend_left_reverses() {
    let mut deque = SRDeque::from_iter([9]);
    deque.extend_left([1, 2, 3]);
    assert_eq!(contents(&deque), vec![3, 2, 1, 9]);
}

#[test]
fn test_rotate() {
    let mut deque = SRDeque::from_iter(0..5);
    assert_eq!(contents(deque.rotate(-2)), vec![2, 3, 4, 0, 1]);
    assert_eq!(contents(deque.rotate(7)), vec![0, 1, 2, 3, 4]);
    assert_eq!(contents(deque.rotate(0)), vec![0, 1, 2, 3, 4]);
    let mut deque_empty = SRDeque::<i32>::new();
    assert!(deque_empty.rotate(3).is_empty());
}

#[test]
fn test_maxlen() {
    let mut deque = SRDeque::with_maxlen(3);
    deque.extend(0..5);
    assert_eq!(contents(&deque), vec![2, 3, 4]);
    deque.append_left(1);
    assert_eq!(contents(&deque), vec![1, 2, 3]);
    assert_eq!(deque.insert(0, 0).err(), Some(VContainerError::Overflow{maxlen: 3}));
    assert_eq!(deque.maxlen(), Some(3));
    assert_eq!(deque.to_string(), "deque([1, 2, 3], maxlen=3)");
    let mut deque_zero = SRDeque::with_maxlen(0);
    deque_zero.append(1).append_left(2);
    assert!(deque_zero.is_empty());
    assert_eq!(contents(&SRDeque::from_iter_with_maxlen("abcd".chars(), 2)), vec!['c', 'd']);
}

#[test]
fn test_indexing() {
    let mut deque = SRDeque::from_iter(["a", "b", "c"]);
    assert_eq!(deque.get(-1), Ok(&"c"));
    assert_eq!(deque.get(3), Err(VContainerError::IndexOutOfRange{index: 3, len: 3}));
    assert_eq!(deque.set(-4, "x").err(), Some(VContainerError::IndexOutOfRange{index: -4, len: 3}));
    deque.set(1, "x").unwrap().insert(-1, "y").unwrap().insert(100, "z").unwrap();
    assert_eq!(contents(&deque), vec!["a", "x", "y", "c", "z"]);
    assert!(deque.delete(5).is_err());
}

#[test]
fn test_search() {
    let mut deque = SRDeque::from_iter([1, 2, 1, 3, 1]);
    assert_eq!(deque.count(&1), 3);
    assert_eq!(deque.index(&3), Ok(3));
    assert_eq!(deque.index_in(&1, 1, -1), Ok(2));
    assert_eq!(deque.index_in(&1, 3, 4), Err(VContainerError::ValueNotFound));
    assert_eq!(deque.remove(&5).err(), Some(VContainerError::ValueNotFound));
    deque.remove(&1).unwrap().remove(&1).unwrap();
    assert_eq!(contents(&deque), vec![2, 3, 1]);
}

#[test]
fn test_display_and_eq() {
    let deque = SRDeque::from_iter(["a", "b"]);
    assert_eq!(deque.to_string(), r#"deque(["a", "b"])"#);
    assert_eq!(SRDeque::<i32>::new().to_string(), "deque([])");
    assert_eq!(deque, SRDeque::from_iter_with_maxlen(["a", "b"], 5));
}
