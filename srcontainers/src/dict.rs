use crate::error::VContainerError;
use itertools::Itertools;
use std::{
    borrow::Borrow,
    collections::{hash_map, HashMap},
    hash::Hash,
};

/// Key-value mapping whose void operations return the dictionary itself.
#[derive(Clone, Debug)]
pub struct SRDict<K, V> {
    mapkv: HashMap<K, V>,
}

impl<K, V> Default for SRDict<K, V> {
    fn default() -> Self {
        SRDict {mapkv: HashMap::new()}
    }
}

/// Named-argument style `set`: `sr_set!(dict, a=1, b=2)` assigns `dict["a"]=1` and `dict["b"]=2`
/// and evaluates to the dictionary itself. Keys must be identifiers.
#[macro_export]
macro_rules! sr_set {
    ($dict: expr, $($ident_key: ident = $v: expr),+ $(,)?) => {
        ($dict).set([$((stringify!($ident_key), $v),)+])
    };
}

impl<K: Eq + Hash, V> SRDict<K, V> {
    pub fn new() -> Self {
        Self::default()
    }
    /// Maps every key of `itk` to a clone of `v`.
    pub fn from_keys(itk: impl IntoIterator<Item=K>, v: V) -> Self
        where V: Clone,
    {
        itk.into_iter().map(|k| (k, v.clone())).collect()
    }
    pub fn into_inner(self) -> HashMap<K, V> {
        self.mapkv
    }

    /// Item assignment.
    pub fn insert(&mut self, k: K, v: V) -> &mut Self {
        self.mapkv.insert(k, v);
        self
    }
    /// Item lookup.
    pub fn get<Q: Hash + Eq + ?Sized>(&self, q: &Q) -> Result<&V, VContainerError>
        where K: Borrow<Q>,
    {
        self.mapkv.get(q)
            .ok_or_else(|| VContainerError::KeyNotFound.logged("SRDict::get"))
    }
    pub fn get_mut<Q: Hash + Eq + ?Sized>(&mut self, q: &Q) -> Result<&mut V, VContainerError>
        where K: Borrow<Q>,
    {
        self.mapkv.get_mut(q)
            .ok_or_else(|| VContainerError::KeyNotFound.logged("SRDict::get_mut"))
    }
    pub fn get_or<'dict, Q: Hash + Eq + ?Sized>(&'dict self, q: &Q, v_default: &'dict V) -> &'dict V
        where K: Borrow<Q>,
    {
        self.mapkv.get(q).unwrap_or(v_default)
    }
    /// Item deletion.
    pub fn delete<Q: Hash + Eq + ?Sized>(&mut self, q: &Q) -> Result<&mut Self, VContainerError>
        where K: Borrow<Q>,
    {
        self.pop(q)?;
        Ok(self)
    }
    pub fn pop<Q: Hash + Eq + ?Sized>(&mut self, q: &Q) -> Result<V, VContainerError>
        where K: Borrow<Q>,
    {
        self.mapkv.remove(q)
            .ok_or_else(|| VContainerError::KeyNotFound.logged("SRDict::pop"))
    }
    pub fn pop_or<Q: Hash + Eq + ?Sized>(&mut self, q: &Q, v_default: V) -> V
        where K: Borrow<Q>,
    {
        self.mapkv.remove(q).unwrap_or(v_default)
    }
    /// Removes and returns some entry; which one is unspecified.
    pub fn pop_item(&mut self) -> Result<(K, V), VContainerError>
        where K: Clone,
    {
        self.mapkv.keys().next().cloned()
            .and_then(|k| self.mapkv.remove_entry(&k))
            .ok_or_else(|| VContainerError::EmptyContainer.logged("SRDict::pop_item"))
    }
    /// Value for `k`, inserting `v` first if `k` is missing.
    pub fn set_default(&mut self, k: K, v: V) -> &mut V {
        self.mapkv.entry(k).or_insert(v)
    }
    /// Merges `itkv` into the dictionary; later pairs overwrite earlier ones.
    pub fn update(&mut self, itkv: impl IntoIterator<Item=(K, V)>) -> &mut Self {
        self.mapkv.extend(itkv);
        self
    }
    /// Item assignment for each pair, in order.
    pub fn set<KeyLike: Into<K>>(&mut self, itkv: impl IntoIterator<Item=(KeyLike, V)>) -> &mut Self {
        for (k, v) in itkv {
            self.mapkv.insert(k.into(), v);
        }
        self
    }
    pub fn clear(&mut self) -> &mut Self {
        self.mapkv.clear();
        self
    }
    pub fn items(&self) -> hash_map::Iter<'_, K, V> {
        self.mapkv.iter()
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for SRDict<K, V> {
    fn eq(&self, other: &SRDict<K, V>) -> bool {
        self.mapkv==other.mapkv
    }
}
impl<K: Eq + Hash, V: Eq> Eq for SRDict<K, V> {}

impl<K, V> std::ops::Deref for SRDict<K, V> {
    type Target = HashMap<K, V>;
    fn deref(&self) -> &HashMap<K, V> {
        &self.mapkv
    }
}

impl<K, V> From<HashMap<K, V>> for SRDict<K, V> {
    fn from(mapkv: HashMap<K, V>) -> Self {
        SRDict {mapkv}
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for SRDict<K, V> {
    fn from_iter<ItKV: IntoIterator<Item=(K, V)>>(itkv: ItKV) -> Self {
        HashMap::from_iter(itkv).into()
    }
}

impl<K: Eq + Hash, V> Extend<(K, V)> for SRDict<K, V> {
    fn extend<ItKV: IntoIterator<Item=(K, V)>>(&mut self, itkv: ItKV) {
        self.mapkv.extend(itkv);
    }
}

impl<K, V> IntoIterator for SRDict<K, V> {
    type Item = (K, V);
    type IntoIter = hash_map::IntoIter<K, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.mapkv.into_iter()
    }
}

impl<'dict, K, V> IntoIterator for &'dict SRDict<K, V> {
    type Item = (&'dict K, &'dict V);
    type IntoIter = hash_map::Iter<'dict, K, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.mapkv.iter()
    }
}

impl<K: std::fmt::Debug, V: std::fmt::Debug> std::fmt::Display for SRDict<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.mapkv.iter().format_with(", ", |(k, v), formatter| {
            formatter(&format_args!("{:?}: {:?}", k, v))
        }))
    }
}

#[test]
fn test_set() {
    let mut dict = SRDict::new();
    let ptr_dict: *const SRDict<&str, i32> = &dict;
    assert!(std::ptr::eq(dict.set([("a", 1), ("b", 2)]), ptr_dict));
    assert_eq!(dict, SRDict::from_iter([("a", 1), ("b", 2)]));
}

#[test]
fn test_sr_set_macro() {
    let mut dict = SRDict::<String, i32>::new();
    let ptr_dict: *const SRDict<String, i32> = &dict;
    assert!(std::ptr::eq(sr_set!(dict, a=1, b=2,), ptr_dict));
    assert_eq!(dict.get("a"), Ok(&1));
    assert_eq!(dict.get("b"), Ok(&2));
    sr_set!(&mut dict, a=3).insert("not an identifier".to_owned(), 4);
    assert_eq!(dict.len(), 3);
    assert_eq!(dict.get("a"), Ok(&3));
}

#[test]
fn test_update_then_set() {
    let mut dict = SRDict::new();
    let ptr_dict: *const SRDict<&str, i32> = &dict;
    let dict_chained = dict.update([("k", 1)]).set([("m", 2)]);
    assert!(std::ptr::eq(dict_chained, ptr_dict));
    assert_eq!(*dict, HashMap::from([("k", 1), ("m", 2)]));
    assert!(std::ptr::eq(dict.clear(), ptr_dict));
    assert!(dict.is_empty());
}

#[test]
fn test_lookup_and_pop() {
    let mut dict = SRDict::from(HashMap::from([("x", 10), ("y", 20)]));
    assert_eq!(dict.get("z"), Err(VContainerError::KeyNotFound));
    assert_eq!(dict.get_or("z", &0), &0);
    assert_eq!(dict.get_or("x", &0), &10);
    assert_eq!(dict.pop("x"), Ok(10));
    assert_eq!(dict.pop("x"), Err(VContainerError::KeyNotFound));
    assert_eq!(dict.pop_or("x", -1), -1);
    assert_eq!(dict.delete("x").err(), Some(VContainerError::KeyNotFound));
    *dict.get_mut("y").unwrap() += 1;
    assert_eq!(dict.pop_item(), Ok(("y", 21)));
    assert_eq!(dict.pop_item(), Err(VContainerError::EmptyContainer));
}

#[test]
fn test_set_default_and_from_keys() {
    let mut dict = SRDict::from_keys(["a", "b"], 0);
    *dict.set_default("a", 5) += 1;
    *dict.set_default("c", 5) += 1;
    assert_eq!(dict, SRDict::from_iter([("a", 1), ("b", 0), ("c", 6)]));
    assert!(dict.delete("b").unwrap().contains_key("c"));
    assert!(!dict.contains_key("b"));
    assert_eq!(dict.items().count(), 2);
}

#[test]
fn test_display() {
    assert_eq!(SRDict::from_iter([("a", 1)]).to_string(), r#"{"a": 1}"#);
    assert_eq!(SRDict::<i32, i32>::new().to_string(), "{}");
}
