//! Default selection over keyed maps and ordered candidates.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::IsZero;

/// Keyed lookup used by [`pick`].
///
/// Implemented for `HashMap` and `BTreeMap`, with the same `Borrow`-based key
/// flexibility as their `get` methods (a `HashMap<String, _>` can be queried
/// with a `&str`).
pub trait Lookup<Q: ?Sized, V> {
    /// Returns the value stored under `key`, if any.
    fn lookup(&self, key: &Q) -> Option<&V>;
}

impl<K, V, Q, S> Lookup<Q, V> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, Q> Lookup<Q, V> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

/// Return the value stored under `key`, or `default` when the key is absent.
///
/// Presence is what matters: a key mapped to an empty value returns that
/// empty value, not `default`.
///
/// ```
/// use std::collections::HashMap;
/// use leafkit_core::values::pick;
///
/// let ports = HashMap::from([("http".to_string(), 0u16)]);
/// assert_eq!(pick(&ports, "http", 80), 0);
/// assert_eq!(pick(&ports, "https", 443), 443);
/// ```
pub fn pick<M, Q, V>(map: &M, key: &Q, default: V) -> V
where
    M: Lookup<Q, V> + ?Sized,
    Q: ?Sized,
    V: Clone,
{
    match map.lookup(key) {
        Some(value) => value.clone(),
        None => default,
    }
}

/// Like [`pick`], but only builds the default when the key is absent.
pub fn pick_or_else<M, Q, V, F>(map: &M, key: &Q, default: F) -> V
where
    M: Lookup<Q, V> + ?Sized,
    Q: ?Sized,
    V: Clone,
    F: FnOnce() -> V,
{
    match map.lookup(key) {
        Some(value) => value.clone(),
        None => default(),
    }
}

/// Return the first candidate that is not zero, or the zero value of `T`.
///
/// Candidates are pulled lazily and the scan stops at the first match, so
/// an iterator that computes candidates on demand never computes the ones
/// after it.
///
/// ```
/// use leafkit_core::values::first_non_zero;
///
/// assert_eq!(first_non_zero([0, 0, 42, 7]), 42);
/// assert_eq!(first_non_zero(["", ""]), "");
/// assert_eq!(first_non_zero(Vec::<u32>::new()), 0);
/// ```
pub fn first_non_zero<I>(candidates: I) -> I::Item
where
    I: IntoIterator,
    I::Item: IsZero + Default,
{
    candidates
        .into_iter()
        .find(|candidate| !candidate.is_zero())
        .unwrap_or_default()
}
