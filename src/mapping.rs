//! Map idioms: default insertion, insertion-ordered maps, and layered lookup.

use std::collections::HashMap;
use std::hash::Hash;

use indexmap::IndexMap;
use indexmap::IndexSet;

/// Map that iterates in first-insertion order.
pub type OrderedMap<K, V> = IndexMap<K, V>;

//==============================================================================
// Default insertion
//==============================================================================

/// Maps that can insert a value only when its key is absent.
pub trait DefaultInsert<K, V> {
    fn insert_default(&mut self, key: K, default: V) -> &mut V;
}

impl<K, V> DefaultInsert<K, V> for HashMap<K, V>
where
    K: Eq + Hash,
{
    fn insert_default(&mut self, key: K, default: V) -> &mut V {
        self.entry(key).or_insert(default)
    }
}

impl<K, V> DefaultInsert<K, V> for IndexMap<K, V>
where
    K: Eq + Hash,
{
    fn insert_default(&mut self, key: K, default: V) -> &mut V {
        self.entry(key).or_insert(default)
    }
}

/// Inserts `default` only when `key` is missing, then returns the stored value.
pub fn set_default<K, V, M>(map: &mut M, key: K, default: V) -> &mut V
where
    M: DefaultInsert<K, V>,
{
    map.insert_default(key, default)
}

//==============================================================================
// ChainMap
//==============================================================================

/// A stack of maps searched front to back.
///
/// Reads see the first layer holding a key. Writes and removals only touch
/// the first layer, so lower layers are never modified through the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainMap<K, V>
where
    K: Eq + Hash,
{
    layers: Vec<OrderedMap<K, V>>,
}

impl<K, V> Default for ChainMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self { layers: Vec::new() }
    }
}

impl<K, V> ChainMap<K, V>
where
    K: Eq + Hash,
{
    pub fn new(layers: Vec<OrderedMap<K, V>>) -> Self {
        Self { layers }
    }

    /// Adds a layer that shadows every existing one.
    pub fn push_front(&mut self, layer: OrderedMap<K, V>) {
        self.layers.insert(0, layer);
    }

    pub fn layers(&self) -> &[OrderedMap<K, V>] {
        &self.layers
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.layers.iter().find_map(|layer| layer.get(key))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.layers.iter().any(|layer| layer.contains_key(key))
    }

    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.layers.is_empty() {
            self.layers.push(OrderedMap::new());
        }
        self.layers[0].insert(key, value)
    }

    /// Removes `key` from the first layer only; a lower layer's entry becomes
    /// visible again.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.layers.first_mut()?.shift_remove(key)
    }

    /// Distinct keys across all layers, first layer's keys first.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.layers
            .iter()
            .flat_map(|layer| layer.keys())
            .collect::<IndexSet<&K>>()
            .into_iter()
    }

    pub fn len(&self) -> usize {
        self.keys().count()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|layer| layer.is_empty())
    }
}

impl<K, V> ChainMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Collapses the chain into one map of the visible entries.
    pub fn flatten(&self) -> OrderedMap<K, V> {
        let mut merged = OrderedMap::new();
        for layer in &self.layers {
            for (key, value) in layer {
                merged.entry(key.clone()).or_insert_with(|| value.clone());
            }
        }
        merged
    }
}
