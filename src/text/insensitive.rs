//! Case-insensitive keys.

use std::collections::HashMap;
use std::fmt;

/// Sort strings ignoring case. Not locale aware.
///
/// Strings equal up to case keep a stable, case-sensitive order.
pub fn case_insensitive_sort<S: AsRef<str>>(items: &mut [S]) {
    items.sort_by(|a, b| {
        let (a, b) = (a.as_ref(), b.as_ref());
        a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
    });
}

/// A map whose keys compare case-insensitively.
///
/// Keys keep the casing they were last inserted with; inserting a key that
/// differs only in case replaces the existing entry.
///
/// # Example
///
/// ```
/// use alien::text::KeyInsensitiveMap;
///
/// let mut map = KeyInsensitiveMap::new();
/// map.insert("LuaRocks", 1);
/// assert_eq!(map.get("luarocks"), Some(&1));
///
/// map.insert("LUAROCKS", 2);
/// assert_eq!(map.len(), 1);
/// assert_eq!(map.keys().collect::<Vec<_>>(), vec!["LUAROCKS"]);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct KeyInsensitiveMap<V> {
    entries: HashMap<String, (String, V)>,
}

impl<V> KeyInsensitiveMap<V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Associate `value` with `key`, replacing any key equal up to case.
    /// Returns the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        self.entries
            .insert(key.to_lowercase(), (key, value))
            .map(|(_, old)| old)
    }

    /// Look up a value by key in any case.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(&key.to_lowercase()).map(|(_, v)| v)
    }

    /// Look up a value by key in any case, or fall back to `default`.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a V) -> &'a V {
        self.get(key).unwrap_or(default)
    }

    /// Whether `key` exists in any case.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&key.to_lowercase())
    }

    /// Remove a key in any case, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.entries.remove(&key.to_lowercase()).map(|(_, v)| v)
    }

    /// Return the value for `key`, inserting `default` first if missing.
    pub fn get_or_insert(&mut self, key: impl Into<String>, default: V) -> &mut V {
        let key = key.into();
        &mut self
            .entries
            .entry(key.to_lowercase())
            .or_insert((key, default))
            .1
    }

    /// Keys in their original case.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|(k, _)| k.as_str())
    }

    /// Values.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values().map(|(_, v)| v)
    }

    /// `(key, value)` pairs with keys in their original case.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.values().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for KeyInsensitiveMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for KeyInsensitiveMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for KeyInsensitiveMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_ignores_case() {
        let mut names = vec!["rubygems", "CPAN", "LuaRocks", "pip"];
        case_insensitive_sort(&mut names);
        assert_eq!(names, vec!["CPAN", "LuaRocks", "pip", "rubygems"]);
    }

    #[test]
    fn sort_is_deterministic_for_case_twins() {
        let mut names = vec!["pip".to_string(), "PIP".to_string()];
        case_insensitive_sort(&mut names);
        assert_eq!(names, vec!["PIP", "pip"]);
    }

    #[test]
    fn lookups_ignore_case() {
        let map: KeyInsensitiveMap<i32> = [("RubyGems", 3)].into_iter().collect();
        assert_eq!(map.get("rubygems"), Some(&3));
        assert_eq!(map.get("RUBYGEMS"), Some(&3));
        assert!(map.contains_key("rubyGems"));
        assert_eq!(map.get("gems"), None);
    }

    #[test]
    fn insert_with_other_case_replaces_entry() {
        let mut map = KeyInsensitiveMap::new();
        assert_eq!(map.insert("Pip", 1), None);
        assert_eq!(map.insert("PIP", 2), Some(1));
        assert_eq!(map.len(), 1);
        assert_eq!(map.iter().collect::<Vec<_>>(), vec![("PIP", &2)]);
    }

    #[test]
    fn get_or_insert_keeps_existing() {
        let mut map = KeyInsensitiveMap::new();
        map.insert("CPAN", 1);
        *map.get_or_insert("cpan", 10) += 1;
        *map.get_or_insert("PIP", 10) += 1;
        assert_eq!(map.get("CPAN"), Some(&2));
        assert_eq!(map.get("pip"), Some(&11));
    }

    #[test]
    fn get_or_falls_back() {
        let map: KeyInsensitiveMap<&str> = KeyInsensitiveMap::new();
        assert_eq!(*map.get_or("missing", &"default"), "default");
    }

    #[test]
    fn remove_ignores_case() {
        let mut map = KeyInsensitiveMap::new();
        map.insert("LuaRocks", ());
        assert!(map.remove("LUAROCKS").is_some());
        assert!(map.is_empty());
    }

    #[test]
    fn debug_shows_original_keys() {
        let mut map = KeyInsensitiveMap::new();
        map.insert("CPAN", 1);
        assert_eq!(format!("{:?}", map), r#"{"CPAN": 1}"#);
    }
}
