//! Symbol interning for method and global names.
//!
//! Every method name and top-level identifier is interned once per VM and
//! afterwards referred to by its [`SymbolId`]. Method tables are indexed
//! directly by the raw symbol index, so ids are dense and start at zero.
//!
//! # Signatures
//!
//! Method names carry their arity: the identifier or operator token is
//! followed by one [`SIGNATURE_SEPARATOR`] per argument (the receiver is not
//! counted). The separator never appears inside an identifier, so `-` (negate)
//! and `- ` (subtract) are different symbols in the same flat namespace.
//!
//! | source call      | signature    |
//! |------------------|--------------|
//! | `n.abs`          | `abs`        |
//! | `a - b`          | `- `         |
//! | `s.contains(x)`  | `contains `  |
//! | `io.write(x)`    | `write `     |
//!
//! Getter and setter forms are not distinguished by the encoding; the compiler
//! picks distinct names for setters.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, ErrorKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Byte appended to a method name once per argument.
pub const SIGNATURE_SEPARATOR: u8 = b' ';

/// Interned symbol identifier.
///
/// Symbols index method tables and the global binding table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SymbolId(pub(crate) u32);

impl SymbolId {
    /// Creates a symbol id from a raw table index.
    ///
    /// The id is only meaningful for the table that issued that index.
    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index of this symbol.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Returns the raw index as a `usize`, for table indexing.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolId({})", self.0)
    }
}

/// Builds the signature for a method `name` taking `arity` arguments.
#[must_use]
pub fn signature(name: &str, arity: usize) -> Vec<u8> {
    let mut sig = Vec::with_capacity(name.len() + arity);
    sig.extend_from_slice(name.as_bytes());
    sig.resize(name.len() + arity, SIGNATURE_SEPARATOR);
    sig
}

/// Returns the number of arguments encoded in a signature.
#[must_use]
pub fn arity_of(signature: &[u8]) -> usize {
    signature
        .iter()
        .rev()
        .take_while(|&&b| b == SIGNATURE_SEPARATOR)
        .count()
}

/// Interner for method and global names.
///
/// Names are arbitrary byte strings. Interning is amortized O(1); the table
/// never removes or renumbers an entry.
/// It is not thread-safe; use external synchronization if needed.
///
/// With the `serde` feature a table serializes as its names in symbol order;
/// loading rebuilds the name index and rejects duplicate names.
#[derive(Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Arc<[u8]>>", into = "Vec<Arc<[u8]>>")
)]
pub struct SymbolTable {
    /// Names in symbol order.
    names: Vec<Arc<[u8]>>,
    /// Map from name to `SymbolId`.
    index: HashMap<Arc<[u8]>, SymbolId>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty symbol table with room for `capacity` names.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            names: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Interns a name, returning its [`SymbolId`].
    ///
    /// # Panics
    ///
    /// Panics if the number of interned symbols exceeds `u32::MAX`.
    pub fn intern(&mut self, name: impl AsRef<[u8]>) -> SymbolId {
        let name = name.as_ref();
        if let Some(&id) = self.index.get(name) {
            return id;
        }

        let id = SymbolId(u32::try_from(self.names.len()).expect("too many symbols"));
        let arc: Arc<[u8]> = name.into();
        self.names.push(arc.clone());
        self.index.insert(arc, id);
        id
    }

    /// Looks up a name without interning it.
    #[must_use]
    pub fn get(&self, name: impl AsRef<[u8]>) -> Option<SymbolId> {
        self.index.get(name.as_ref()).copied()
    }

    /// Gets the name for a symbol.
    #[must_use]
    pub fn name(&self, id: SymbolId) -> Option<&[u8]> {
        self.names.get(id.as_usize()).map(AsRef::as_ref)
    }

    /// Gets the name for a symbol as text, replacing invalid UTF-8.
    ///
    /// Unknown symbols render as `#<index>`.
    #[must_use]
    pub fn display_name(&self, id: SymbolId) -> String {
        match self.name(id) {
            Some(name) => String::from_utf8_lossy(name).into_owned(),
            None => format!("#{}", id.0),
        }
    }

    /// Returns the number of interned symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no symbol has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over all symbols in id order.
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &[u8])> {
        self.names.iter().enumerate().map(|(i, name)| {
            #[allow(clippy::cast_possible_truncation)]
            let id = SymbolId(i as u32);
            (id, name.as_ref())
        })
    }
}

impl TryFrom<Vec<Arc<[u8]>>> for SymbolTable {
    type Error = Error;

    /// Rebuilds a table whose symbol `i` is `names[i]`.
    fn try_from(names: Vec<Arc<[u8]>>) -> Result<Self, Self::Error> {
        let mut table = Self::with_capacity(names.len());
        for name in names {
            if table.index.contains_key(&name) {
                return Err(Error::new(ErrorKind::DuplicateSymbol(
                    String::from_utf8_lossy(&name).into_owned(),
                )));
            }
            let id = SymbolId(u32::try_from(table.names.len()).expect("too many symbols"));
            table.names.push(name.clone());
            table.index.insert(name, id);
        }
        Ok(table)
    }
}

impl From<SymbolTable> for Vec<Arc<[u8]>> {
    fn from(table: SymbolTable) -> Self {
        table.names
    }
}
