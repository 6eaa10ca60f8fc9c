use std::marker::PhantomData;
use std::ops::Index;
use std::ops::IndexMut;

/// Structure for storing elements of type `Value` which can only be indexed by structures of type
/// `Key`; this prevents accidentally indexing the per-variable data with a colour (or vice versa).
#[derive(Debug, Hash, PartialEq, Eq)]
pub struct KeyedVec<Key, Value> {
    /// [PhantomData] to ensure that the [KeyedVec] is bound to the structure
    key: PhantomData<Key>,
    /// Storage of the elements of type `Value`
    elements: Vec<Value>,
}

// Implemented by hand so that `Key` does not need to implement `Clone`.
impl<Key, Value: Clone> Clone for KeyedVec<Key, Value> {
    fn clone(&self) -> Self {
        Self {
            key: PhantomData,
            elements: self.elements.clone(),
        }
    }
}

impl<Key, Value> Default for KeyedVec<Key, Value> {
    fn default() -> Self {
        Self {
            key: PhantomData,
            elements: Vec::default(),
        }
    }
}

impl<Key, Value> From<Vec<Value>> for KeyedVec<Key, Value> {
    fn from(elements: Vec<Value>) -> Self {
        Self {
            key: PhantomData,
            elements,
        }
    }
}

impl<Key: StorageKey, Value> KeyedVec<Key, Value> {
    /// Creates a [`KeyedVec`] with an entry for each of the keys `0..len`, every entry is produced
    /// by `create`.
    pub fn from_fn(len: usize, create: impl FnMut(Key) -> Value) -> Self {
        Self {
            key: PhantomData,
            elements: (0..len).map(Key::create_from_index).map(create).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the values in the vector.
    pub fn iter(&self) -> impl Iterator<Item = &'_ Value> {
        self.elements.iter()
    }

    /// Iterate over the keys together with the values they index.
    pub fn iter_with_keys(&self) -> impl Iterator<Item = (Key, &'_ Value)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(index, value)| (Key::create_from_index(index), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = Key> {
        (0..self.elements.len()).map(Key::create_from_index)
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &'_ mut Value> {
        self.elements.iter_mut()
    }
}

impl<Key: StorageKey, Value> Index<Key> for KeyedVec<Key, Value> {
    type Output = Value;

    fn index(&self, index: Key) -> &Self::Output {
        &self.elements[index.index()]
    }
}

impl<Key: StorageKey, Value> IndexMut<Key> for KeyedVec<Key, Value> {
    fn index_mut(&mut self, index: Key) -> &mut Self::Output {
        &mut self.elements[index.index()]
    }
}

/// A simple trait which requires that the structures implementing this trait can generate an index.
pub trait StorageKey: Clone {
    fn index(&self) -> usize;

    fn create_from_index(index: usize) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::VariableId;

    #[test]
    fn from_fn_creates_an_entry_per_key() {
        let keyed_vec: KeyedVec<VariableId, u32> = KeyedVec::from_fn(3, |key: VariableId| key.id() * 10);

        assert_eq!(
            vec![
                (VariableId::new(0), &0),
                (VariableId::new(1), &10),
                (VariableId::new(2), &20)
            ],
            keyed_vec.iter_with_keys().collect::<Vec<_>>()
        );
    }

    #[test]
    fn entries_are_indexed_by_key() {
        let mut keyed_vec: KeyedVec<VariableId, Vec<char>> = KeyedVec::from(vec![vec![], vec![]]);

        keyed_vec[VariableId::new(1)].push('b');

        assert!(keyed_vec[VariableId::new(0)].is_empty());
        assert_eq!(vec!['b'], keyed_vec[VariableId::new(1)]);
        assert_eq!(
            vec![VariableId::new(0), VariableId::new(1)],
            keyed_vec.keys().collect::<Vec<_>>()
        );
    }
}
