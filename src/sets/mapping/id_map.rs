use std::marker::PhantomData;

use crate::graph::Identifiable;

/// A dense mapping from identifiable keys to values, stored by key id.
///
/// The domain is `0..domain_size()`. Lookups outside the domain return `None`;
/// [`IdMap::set`] grows the domain when needed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IdMap<K, V> {
    values: Vec<V>,
    _key: PhantomData<fn(&K)>,
}

impl<K, V> IdMap<K, V>
where
    K: Identifiable,
    V: Default,
{
    /// A mapping with `domain_size` default values.
    pub fn with_domain(domain_size: usize) -> Self {
        let mut values = Vec::with_capacity(domain_size);
        values.resize_with(domain_size, V::default);
        IdMap {
            values,
            _key: PhantomData,
        }
    }

    pub fn domain_size(&self) -> usize {
        self.values.len()
    }

    /// Resizes the domain. New ids get the default value, dropped ids lose theirs.
    pub fn set_domain_size(&mut self, domain_size: usize) {
        self.values.resize_with(domain_size, V::default);
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.values.get(key.id())
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.values.get_mut(key.id())
    }

    /// Stores `value` for `key`, returning the old value. Grows the domain to fit the key.
    pub fn set(&mut self, key: &K, value: V) -> V {
        let id = key.id();
        if id >= self.values.len() {
            self.values.resize_with(id + 1, V::default);
        }
        std::mem::replace(&mut self.values[id], value)
    }

    /// `(id, value)` pairs over the whole domain.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &V)> {
        self.values.iter().enumerate()
    }
}

impl<K> IdMap<K, usize>
where
    K: Identifiable,
{
    pub fn increase(&mut self, key: &K, amount: usize) {
        if let Some(value) = self.get_mut(key) {
            *value += amount;
        }
    }

    pub fn decrease(&mut self, key: &K, amount: usize) {
        if let Some(value) = self.get_mut(key) {
            *value = value.saturating_sub(amount);
        }
    }
}

impl<K, V> Default for IdMap<K, V>
where
    K: Identifiable,
    V: Default,
{
    fn default() -> Self {
        IdMap::with_domain(0)
    }
}
