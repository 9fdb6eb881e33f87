//! Top-level bindings, keyed by symbol.

use tern_foundation::{SymbolId, Value};

/// Global binding table.
///
/// Shares the symbol namespace with method names, so a global's slot is the
/// raw index of its symbol. Entries are added at bootstrap or when a global
/// is declared and are never removed.
#[derive(Clone, Debug, Default)]
pub struct GlobalTable {
    slots: Vec<Option<Value>>,
}

impl GlobalTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `symbol` to `value`, returning the value it replaced.
    pub fn define(&mut self, symbol: SymbolId, value: Value) -> Option<Value> {
        let index = symbol.as_usize();
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }
        self.slots[index].replace(value)
    }

    /// Gets the value bound to `symbol`.
    #[must_use]
    pub fn get(&self, symbol: SymbolId) -> Option<&Value> {
        self.slots.get(symbol.as_usize()).and_then(Option::as_ref)
    }

    /// Returns true if `symbol` has a binding.
    #[must_use]
    pub fn contains(&self, symbol: SymbolId) -> bool {
        self.get(symbol).is_some()
    }

    /// Returns the number of bound globals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns true if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Iterates over bound globals in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &Value)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            #[allow(clippy::cast_possible_truncation)]
            let symbol = SymbolId::from_index(i as u32);
            slot.as_ref().map(|value| (symbol, value))
        })
    }
}
