/// One cell of a table's backing array.
pub(crate) enum Slot<'k, V> {
    /// Never used. Terminates every probe sequence that reaches it.
    Empty,
    /// Holds a live entry. The key bytes are borrowed from the caller.
    Occupied { key: &'k [u8], value: V },
    /// Held an entry that was deleted. Probing continues past it.
    Tombstone,
}

impl<V> Default for Slot<'_, V> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<'k, V> Slot<'k, V> {
    #[inline]
    pub(crate) fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied { .. })
    }

    #[inline]
    pub(crate) fn value(&self) -> Option<&V> {
        match self {
            Self::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> Option<&mut V> {
        match self {
            Self::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }
}
