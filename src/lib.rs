#![doc = include_str!("../README.md")]

#![no_std]

#![warn(
    anonymous_parameters,
    missing_copy_implementations,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_qualifications,
    variant_size_differences
)]

extern crate alloc;

use core::{fmt, mem, slice};
use core::iter::FusedIterator;

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// A key-value pair stored in an `OrderedMap`.
#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    #[inline(always)]
    const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

/// An insertion-order-preserving map backed by a vector of entries.
///
/// Lookups are linear scans comparing keys with `PartialEq`. Keys are unique,
/// and overwriting the value of an existing key leaves it where it was.
///
/// The map does no synchronization of its own: mutation goes through
/// `&mut self`, so sharing one map between threads needs an outer lock.
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    // the length of this vec is the size of the map
    entries: Vec<Entry<K, V>>,
}

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty `OrderedMap`.
    ///
    /// The map is initially created with a capacity of 0, so it will not
    /// allocate until it is first inserted into.
    #[inline]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Creates an empty `OrderedMap` able to hold at least `n` entries
    /// without reallocating.
    #[inline]
    pub fn with_capacity(n: usize) -> Self {
        Self { entries: Vec::with_capacity(n) }
    }

    /// Returns the number of entries in the map.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map contains no entries.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries from the map, keeping the allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        log::trace!("clearing {} entries", self.entries.len());
        self.entries.clear()
    }

    /// Reserves capacity for at least `additional` more entries.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional)
    }

    /// Returns an iterator over the entries in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { inner: self.entries.iter() }
    }

    /// Returns a snapshot of the keys in insertion order.
    ///
    /// The returned vector is detached from the map: later mutations of the
    /// map are not reflected in it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_map::OrderedMap;
    ///
    /// let mut map: OrderedMap<&str, i32> = OrderedMap::new();
    /// map.insert("b", 2);
    /// map.insert("a", 1);
    ///
    /// let keys = map.key_set();
    /// map.clear();
    /// assert_eq!(keys, ["b", "a"]);
    /// ```
    pub fn key_set(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.entries.iter().map(|entry| entry.key.clone()).collect()
    }

    /// Returns a snapshot of the values, in the order of their keys.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.entries.iter().map(|entry| entry.value.clone()).collect()
    }

    /// Returns `true` if some entry holds `value`. Stops at the first match.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.entries.iter().any(|entry| entry.value == *value)
    }

    /// Replaces the whole content of the map with a copy of `other`.
    ///
    /// Afterwards the map holds exactly the entries of `other`, in the same
    /// order, whatever it held before.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_map::OrderedMap;
    ///
    /// let mut a: OrderedMap<u8, char> = [(1, 'x'), (2, 'y'), (3, 'z')].into_iter().collect();
    /// let b: OrderedMap<u8, char> = [(9, 'q')].into_iter().collect();
    ///
    /// a.put_all(&b);
    /// assert_eq!(a, b);
    /// assert_eq!(a.len(), 1);
    /// ```
    pub fn put_all(&mut self, other: &OrderedMap<K, V>)
    where
        K: Clone,
        V: Clone,
    {
        log::trace!("replacing {} entries with {}", self.entries.len(), other.entries.len());
        self.entries.clone_from(&other.entries)
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: PartialEq,
{
    /// Returns the position of `key` in insertion order, or `None` if the
    /// map holds no such key.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key == *key)
    }

    /// Returns `true` if the map contains a value for the specified key.
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.index_of(key).is_some()
    }

    /// Returns a reference to the value corresponding to the key, or `None`
    /// if the map holds no such key.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .iter()
            .find(|entry| entry.key == *key)
            .map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|entry| entry.key == *key)
            .map(|entry| &mut entry.value)
    }

    /// Inserts a key-value pair, returning the previous value of the key.
    ///
    /// An existing key keeps its position. A new key is appended and `None`
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.insert(1, "a"), None);
    /// assert_eq!(map.insert(1, "b"), Some("a"));
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.index_of(&key) {
            Some(idx) => Some(mem::replace(&mut self.entries[idx].value, value)),
            None => {
                self.entries.push(Entry::new(key, value));
                None
            }
        }
    }

    /// Associates `value` with `key`.
    ///
    /// Unlike [`insert`](Self::insert), the return value is never empty once
    /// something was stored:
    ///
    /// - an existing key has its value overwritten in place, and the previous
    ///   value is returned;
    /// - a new key is appended, and the value just stored is returned;
    /// - an absent key (`None`) is ignored, and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_map::OrderedMap;
    ///
    /// let mut map: OrderedMap<&str, i32> = OrderedMap::new();
    /// assert_eq!(map.put("a", 1), Some(1));
    /// assert_eq!(map.put("a", 2), Some(1));
    /// assert_eq!(map.put(None, 3), None);
    /// assert_eq!(map.len(), 1);
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn put(&mut self, key: impl Into<Option<K>>, value: V) -> Option<V>
    where
        V: Clone,
    {
        let Some(key) = key.into() else {
            log::trace!("ignoring put with an absent key");
            return None
        };

        if let Some(idx) = self.index_of(&key) {
            return Some(mem::replace(&mut self.entries[idx].value, value))
        }

        let stored = value.clone();
        self.entries.push(Entry::new(key, value));
        Some(stored)
    }

    /// Removes a key from the map, returning its value if it was present.
    ///
    /// Entries after the removed one move up by one position, so the
    /// relative order of the remaining keys is unchanged.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.index_of(key)?;
        Some(self.entries.remove(idx).value)
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: fmt::Display,
    V: DisplayValue,
{
    /// Returns a descriptive block holding the size of the map and its
    /// [`Display`](fmt::Display) rendering.
    ///
    /// ```
    /// use ordered_map::OrderedMap;
    ///
    /// let mut map: OrderedMap<&str, i32> = OrderedMap::new();
    /// map.insert("a", 1);
    /// assert_eq!(
    ///     map.infos(),
    ///     "<b>Map</b>:{<br/>\n\tsize: 1<br/>\n\tdata: [ a = 1 ]<br/>\n}<br/>\n",
    /// );
    /// ```
    pub fn infos(&self) -> String {
        format!(
            "<b>Map</b>:{{<br/>\n\tsize: {}<br/>\n\tdata: {}<br/>\n}}<br/>\n",
            self.len(),
            self
        )
    }
}

/// A value that can be rendered by the `Display` impl of [`OrderedMap`].
///
/// Textual values are wrapped in double quotes, everything else is written
/// as is.
///
/// ```
/// use core::fmt;
/// use ordered_map::{DisplayValue, OrderedMap};
///
/// enum Cell {
///     Num(i64),
///     Text(String),
/// }
///
/// impl fmt::Display for Cell {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         match self {
///             Cell::Num(n) => n.fmt(f),
///             Cell::Text(s) => f.write_str(s),
///         }
///     }
/// }
///
/// impl DisplayValue for Cell {
///     fn is_textual(&self) -> bool {
///         matches!(self, Cell::Text(_))
///     }
/// }
///
/// let mut map = OrderedMap::new();
/// map.insert("a", Cell::Num(1));
/// map.insert("b", Cell::Text("x".into()));
/// assert_eq!(map.to_string(), r#"[ a = 1, b = "x" ]"#);
/// ```
pub trait DisplayValue: fmt::Display {
    /// Whether this value is rendered between double quotes.
    fn is_textual(&self) -> bool {
        false
    }
}

impl DisplayValue for str {
    #[inline]
    fn is_textual(&self) -> bool {
        true
    }
}

impl DisplayValue for String {
    #[inline]
    fn is_textual(&self) -> bool {
        true
    }
}

impl DisplayValue for char {
    #[inline]
    fn is_textual(&self) -> bool {
        true
    }
}

impl<T: DisplayValue + ?Sized> DisplayValue for &T {
    #[inline]
    fn is_textual(&self) -> bool {
        (**self).is_textual()
    }
}

impl<T: DisplayValue + ?Sized> DisplayValue for &mut T {
    #[inline]
    fn is_textual(&self) -> bool {
        (**self).is_textual()
    }
}

impl<T: DisplayValue + ?Sized> DisplayValue for Box<T> {
    #[inline]
    fn is_textual(&self) -> bool {
        (**self).is_textual()
    }
}

macro_rules! impl_display_value {
    ($($t:ty)*) => {
        $(impl DisplayValue for $t {})*
    };
}

impl_display_value! {
    i8 i16 i32 i64 i128 isize
    u8 u16 u32 u64 u128 usize
    f32 f64 bool
}

/// Renders the map as `[ k1 = v1, k2 = "v2" ]`. The empty map is `[  ]`.
impl<K, V> fmt::Display for OrderedMap<K, V>
where
    K: fmt::Display,
    V: DisplayValue,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if value.is_textual() {
                write!(f, "{key} = \"{value}\"")?;
            } else {
                write!(f, "{key} = {value}")?;
            }
        }
        f.write_str(" ]")
    }
}

/// Borrowing iterator over the entries of an `OrderedMap` in insertion order.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    inner: slice::Iter<'a, Entry<K, V>>,
}

impl<K, V> Clone for Iter<'_, K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[cfg_attr(feature = "inline-more", inline)]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.key, &entry.value))
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    #[cfg_attr(feature = "inline-more", inline)]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|entry| (&entry.key, &entry.value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedMap<K, V>
where
    K: PartialEq,
{
    #[cfg_attr(feature = "inline-more", inline)]
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut map = OrderedMap::with_capacity(iter.size_hint().0);
        iter.for_each(|(k, v)| _ = map.insert(k, v));
        map
    }
}

impl<K, V> Extend<(K, V)> for OrderedMap<K, V>
where
    K: PartialEq,
{
    #[cfg_attr(feature = "inline-more", inline)]
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        let reserve = if self.is_empty() {
            iter.size_hint().0
        } else {
            (iter.size_hint().0 + 1) / 2
        };
        self.reserve(reserve);
        iter.for_each(move |(k, v)| _ = self.insert(k, v));
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Positional equality.
///
/// Two maps are equal when they have the same length and the entries at each
/// position carry equal keys and equal values. The same pairs inserted in a
/// different order therefore compare unequal.
impl<K, V, K2, V2> PartialEq<OrderedMap<K2, V2>> for OrderedMap<K, V>
where
    K: PartialEq<K2>,
    V: PartialEq<V2>,
{
    #[inline]
    fn eq(&self, other: &OrderedMap<K2, V2>) -> bool {
        if self.len() != other.len() {
            return false
        }
        self.iter()
            .zip(other.iter())
            .all(|((k, v), (ok, ov))| k == ok && v == ov)
    }
}

impl<K: Eq, V: Eq> Eq for OrderedMap<K, V> {}

impl<K, V> fmt::Debug for OrderedMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
