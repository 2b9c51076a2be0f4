// File: crates/series-core/src/period.rs
// Summary: Per-period aggregate records and the insertion-ordered collection that holds them.
// Notes:
// - Wire names follow the sales API (`month`, `totalSales`, `totalUnits`);
//   generic aliases (`period`, `totalPrimary`, `totalSecondary`) are accepted too.
// - Iteration order is insertion order. Calendar ordering is left to callers.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use serde::de::{IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One aggregation period as produced by the upstream data source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRecord")]
pub struct PeriodRecord {
    #[serde(rename = "month")]
    pub period: String,
    #[serde(rename = "totalSales", skip_serializing_if = "Option::is_none")]
    pub total_primary: Option<f64>,
    #[serde(rename = "totalUnits", skip_serializing_if = "Option::is_none")]
    pub total_secondary: Option<f64>,
    /// Further named numeric fields carried by the record.
    #[serde(flatten)]
    pub metrics: BTreeMap<String, f64>,
}

impl PeriodRecord {
    pub fn new(period: impl Into<String>, total_primary: f64, total_secondary: f64) -> Self {
        Self {
            period: period.into(),
            total_primary: Some(total_primary),
            total_secondary: Some(total_secondary),
            metrics: BTreeMap::new(),
        }
    }

    /// Record with only a label; totals unset.
    pub fn empty(period: impl Into<String>) -> Self {
        Self { period: period.into(), total_primary: None, total_secondary: None, metrics: BTreeMap::new() }
    }

    pub fn with_metric(mut self, name: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(name.into(), value);
        self
    }

    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ExtraField {
    Number(f64),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
struct RawRecord {
    #[serde(rename = "month", alias = "period")]
    period: String,
    #[serde(default, rename = "totalSales", alias = "totalPrimary", alias = "total_primary")]
    total_primary: Option<f64>,
    #[serde(default, rename = "totalUnits", alias = "totalSecondary", alias = "total_secondary")]
    total_secondary: Option<f64>,
    #[serde(flatten)]
    extra: BTreeMap<String, ExtraField>,
}

impl From<RawRecord> for PeriodRecord {
    fn from(raw: RawRecord) -> Self {
        // non-numeric extras such as `_id` are dropped
        let metrics = raw
            .extra
            .into_iter()
            .filter_map(|(k, v)| match v {
                ExtraField::Number(n) => Some((k, n)),
                ExtraField::Other(_) => None,
            })
            .collect();
        Self { period: raw.period, total_primary: raw.total_primary, total_secondary: raw.total_secondary, metrics }
    }
}

/// Mapping from period key to record, iterated in insertion order.
/// Keys are unique: inserting an existing key replaces its record in place.
#[derive(Clone)]
pub struct PeriodCollection<K = String> {
    entries: Vec<(K, PeriodRecord)>,
    index: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone> PeriodCollection<K> {
    pub fn new() -> Self {
        Self { entries: Vec::new(), index: HashMap::new() }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self { entries: Vec::with_capacity(n), index: HashMap::with_capacity(n) }
    }

    /// Insert or replace. Returns the previous record when `key` was present;
    /// a replaced record keeps its original position.
    pub fn insert(&mut self, key: K, record: PeriodRecord) -> Option<PeriodRecord> {
        if let Some(&i) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[i].1, record));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, record));
        None
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&PeriodRecord>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }
}

impl<K> PeriodCollection<K> {
    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// `(key, record)` pairs in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &PeriodRecord)> + ExactSizeIterator + '_ {
        self.entries.iter().map(|(k, r)| (k, r))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn records(&self) -> impl DoubleEndedIterator<Item = &PeriodRecord> + ExactSizeIterator + '_ {
        self.entries.iter().map(|(_, r)| r)
    }

    /// Record at position `i` in iteration order.
    pub fn nth(&self, i: usize) -> Option<&PeriodRecord> {
        self.entries.get(i).map(|(_, r)| r)
    }
}

impl<K: Eq + Hash + Clone> Default for PeriodCollection<K> {
    fn default() -> Self { Self::new() }
}

impl<K: fmt::Debug> fmt::Debug for PeriodCollection<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter().map(|(k, r)| (k, r))).finish()
    }
}

impl<K: PartialEq> PartialEq for PeriodCollection<K> {
    fn eq(&self, other: &Self) -> bool { self.entries == other.entries }
}

impl<K: Eq + Hash + Clone> FromIterator<(K, PeriodRecord)> for PeriodCollection<K> {
    fn from_iter<I: IntoIterator<Item = (K, PeriodRecord)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut out = Self::with_capacity(iter.size_hint().0);
        for (k, r) in iter {
            out.insert(k, r);
        }
        out
    }
}

impl<K> IntoIterator for PeriodCollection<K> {
    type Item = (K, PeriodRecord);
    type IntoIter = std::vec::IntoIter<(K, PeriodRecord)>;

    fn into_iter(self) -> Self::IntoIter { self.entries.into_iter() }
}

impl PeriodCollection<String> {
    /// Key records by position ("0", "1", ...), the way an array payload is keyed.
    pub fn from_records(records: impl IntoIterator<Item = PeriodRecord>) -> Self {
        records.into_iter().enumerate().map(|(i, r)| (i.to_string(), r)).collect()
    }
}

impl<K: Serialize> Serialize for PeriodCollection<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, r) in &self.entries {
            map.serialize_entry(k, r)?;
        }
        map.end()
    }
}

struct CollectionVisitor(PhantomData<PeriodCollection<String>>);

impl<'de> Visitor<'de> for CollectionVisitor {
    type Value = PeriodCollection<String>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map or sequence of period records")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut out = PeriodCollection::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((k, r)) = access.next_entry::<String, PeriodRecord>()? {
            out.insert(k, r);
        }
        Ok(out)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut out = PeriodCollection::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(r) = access.next_element::<PeriodRecord>()? {
            out.insert(out.len().to_string(), r);
        }
        Ok(out)
    }
}

/// Accepts a JSON object (document order kept) or an array (positional keys).
impl<'de> Deserialize<'de> for PeriodCollection<String> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CollectionVisitor(PhantomData))
    }
}
