use crate::{error::VContainerError, index::*};
use itertools::Itertools;

/// Ordered sequence whose void operations return the list itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SRList<T> {
    vect: Vec<T>,
}

impl<T> Default for SRList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SRList<T> {
    pub fn new() -> Self {
        SRList {vect: Vec::new()}
    }
    pub fn into_inner(self) -> Vec<T> {
        self.vect
    }

    pub fn append(&mut self, t: T) -> &mut Self {
        self.vect.push(t);
        self
    }
    pub fn extend(&mut self, itt: impl IntoIterator<Item=T>) -> &mut Self {
        self.vect.extend(itt);
        self
    }
    /// Inserts before position `i`; out-of-range positions insert at the nearest end.
    pub fn insert(&mut self, i: isize, t: T) -> &mut Self {
        let i_insert = clamp_index(i, self.vect.len());
        self.vect.insert(i_insert, t);
        self
    }
    pub fn pop(&mut self) -> Result<T, VContainerError> {
        self.vect.pop()
            .ok_or_else(|| VContainerError::EmptyContainer.logged("SRList::pop"))
    }
    pub fn pop_at(&mut self, i: isize) -> Result<T, VContainerError> {
        if self.vect.is_empty() {
            return Err(VContainerError::EmptyContainer.logged("SRList::pop_at"));
        }
        let i = resolve_index(i, self.vect.len()).map_err(|err| err.logged("SRList::pop_at"))?;
        Ok(self.vect.remove(i))
    }
    pub fn reverse(&mut self) -> &mut Self {
        self.vect.reverse();
        self
    }
    pub fn clear(&mut self) -> &mut Self {
        self.vect.clear();
        self
    }
    /// Stable sort by `fn_key`. With `b_reverse`, elements with equal keys keep their original order.
    pub fn sort_by_key<K: Ord>(&mut self, mut fn_key: impl FnMut(&T) -> K, b_reverse: bool) -> &mut Self {
        if b_reverse {
            self.vect.sort_by(|t_lhs, t_rhs| fn_key(t_rhs).cmp(&fn_key(t_lhs)));
        } else {
            self.vect.sort_by_key(fn_key);
        }
        self
    }
    pub fn get(&self, i: isize) -> Result<&T, VContainerError> {
        let i = resolve_index(i, self.vect.len()).map_err(|err| err.logged("SRList::get"))?;
        Ok(&self.vect[i])
    }
    pub fn get_mut(&mut self, i: isize) -> Result<&mut T, VContainerError> {
        let i = resolve_index(i, self.vect.len()).map_err(|err| err.logged("SRList::get_mut"))?;
        Ok(&mut self.vect[i])
    }
    /// Item assignment: replaces the element at `i`.
    pub fn set(&mut self, i: isize, t: T) -> Result<&mut Self, VContainerError> {
        *self.get_mut(i)? = t;
        Ok(self)
    }
    pub fn delete(&mut self, i: isize) -> Result<&mut Self, VContainerError> {
        let i = resolve_index(i, self.vect.len()).map_err(|err| err.logged("SRList::delete"))?;
        self.vect.remove(i);
        Ok(self)
    }
}

impl<T: Ord> SRList<T> {
    pub fn sort(&mut self) -> &mut Self {
        self.vect.sort();
        self
    }
    pub fn sort_reverse(&mut self) -> &mut Self {
        self.vect.sort_by(|t_lhs, t_rhs| t_rhs.cmp(t_lhs));
        self
    }
}

impl<T: PartialEq> SRList<T> {
    pub fn count(&self, t: &T) -> usize {
        self.vect.iter().filter(|t_item| *t_item==t).count()
    }
    pub fn index(&self, t: &T) -> Result<usize, VContainerError> {
        self.vect.iter()
            .position(|t_item| t_item==t)
            .ok_or_else(|| VContainerError::ValueNotFound.logged("SRList::index"))
    }
    /// Removes the first occurrence of `t`.
    pub fn remove(&mut self, t: &T) -> Result<&mut Self, VContainerError> {
        let i = self.index(t)?;
        self.vect.remove(i);
        Ok(self)
    }
}

impl<T> std::ops::Deref for SRList<T> {
    type Target = Vec<T>;
    fn deref(&self) -> &Vec<T> {
        &self.vect
    }
}

impl<T> From<Vec<T>> for SRList<T> {
    fn from(vect: Vec<T>) -> Self {
        SRList {vect}
    }
}

impl<T> FromIterator<T> for SRList<T> {
    fn from_iter<ItT: IntoIterator<Item=T>>(itt: ItT) -> Self {
        Vec::from_iter(itt).into()
    }
}

impl<T> Extend<T> for SRList<T> {
    fn extend<ItT: IntoIterator<Item=T>>(&mut self, itt: ItT) {
        self.vect.extend(itt);
    }
}

impl<T> IntoIterator for SRList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.vect.into_iter()
    }
}

impl<'list, T> IntoIterator for &'list SRList<T> {
    type Item = &'list T;
    type IntoIter = std::slice::Iter<'list, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.vect.iter()
    }
}

impl<T: std::fmt::Debug> std::fmt::Display for SRList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}]", self.vect.iter().format(", "))
    }
}

#[test]
fn test_void_operations_return_self() {
    let mut list = SRList::new();
    let ptr_list: *const SRList<i32> = &list;
    assert!(std::ptr::eq(list.append(3), ptr_list));
    assert!(std::ptr::eq(list.extend([1, 2]), ptr_list));
    assert!(std::ptr::eq(list.insert(0, 4), ptr_list));
    assert!(std::ptr::eq(list.sort(), ptr_list));
    assert!(std::ptr::eq(list.sort_reverse(), ptr_list));
    assert!(std::ptr::eq(list.reverse(), ptr_list));
    assert!(std::ptr::eq(list.remove(&2).unwrap(), ptr_list));
    assert!(std::ptr::eq(list.set(-1, 5).unwrap(), ptr_list));
    assert!(std::ptr::eq(list.delete(0).unwrap(), ptr_list));
    assert_eq!(*list, vec![3, 5]);
    assert!(std::ptr::eq(list.clear(), ptr_list));
    assert!(list.is_empty());
}

#[test]
fn test_set() {
    let mut list = SRList::from(vec!["1", "2", "3"]);
    assert_eq!(*list.set(0, "x").unwrap(), SRList::from(vec!["x", "2", "3"]));
    assert_eq!(list.set(5, "x").err(), Some(VContainerError::IndexOutOfRange{index: 5, len: 3}));
    assert_eq!(list.set(-3, "y").unwrap().get(0), Ok(&"y"));
    assert!(list.set(-4, "y").is_err());
    assert_eq!(list.to_string(), r#"["y", "2", "3"]"#);
}

#[test]
fn test_pop() {
    let mut list = SRList::from_iter(0..4);
    assert_eq!(list.pop(), Ok(3));
    assert_eq!(list.pop_at(0), Ok(0));
    assert_eq!(list.pop_at(-1), Ok(2));
    assert_eq!(list.pop_at(1), Err(VContainerError::IndexOutOfRange{index: 1, len: 1}));
    assert_eq!(list.pop(), Ok(1));
    assert_eq!(list.pop(), Err(VContainerError::EmptyContainer));
    assert_eq!(list.pop_at(0), Err(VContainerError::EmptyContainer));
}

#[test]
fn test_matches_plain_vec() {
    let mut list = SRList::new();
    let mut vecn = Vec::new();
    list.extend([5, 1, 4]).append(2).insert(1, 7).insert(-10, 0).sort().reverse();
    vecn.extend([5, 1, 4]);
    vecn.push(2);
    vecn.insert(1, 7);
    vecn.insert(0, 0);
    vecn.sort();
    vecn.reverse();
    assert_eq!(list.clone().into_inner(), vecn);
    assert_eq!(list.count(&7), 1);
    assert_eq!(list.index(&4), Ok(2));
    assert_eq!(list.index(&9), Err(VContainerError::ValueNotFound));
}

#[test]
fn test_sort_by_key_stable() {
    let mut list = SRList::from(vec![("b", 1), ("a", 2), ("c", 1), ("d", 2)]);
    list.sort_by_key(|&(_, n)| n, /*b_reverse*/true);
    assert_eq!(list.iter().map(|&(str_name, _)| str_name).collect::<Vec<_>>(), vec!["a", "d", "b", "c"]);
    list.sort_by_key(|&(_, n)| n, /*b_reverse*/false);
    assert_eq!(list.iter().map(|&(str_name, _)| str_name).collect::<Vec<_>>(), vec!["b", "c", "a", "d"]);
}
