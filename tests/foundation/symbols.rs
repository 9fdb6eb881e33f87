//! Integration tests for the symbol table
//!
//! Tests interning stability, reverse lookup, and the signature convention.

use proptest::prelude::*;
use tern_foundation::{SIGNATURE_SEPARATOR, SymbolTable, arity_of, signature};

// =============================================================================
// Interning
// =============================================================================

#[test]
fn same_name_same_symbol() {
    let mut symbols = SymbolTable::new();
    let first = symbols.intern("toString");
    symbols.intern("abs");
    symbols.intern("count");
    assert_eq!(symbols.intern("toString"), first);
}

#[test]
fn interning_owned_and_borrowed_agree() {
    let mut symbols = SymbolTable::new();
    let borrowed = symbols.intern("write ");
    let owned = symbols.intern(String::from("write "));
    let bytes = symbols.intern(b"write ".to_vec());
    assert_eq!(borrowed, owned);
    assert_eq!(borrowed, bytes);
}

#[test]
fn symbols_are_never_renumbered() {
    let mut symbols = SymbolTable::new();
    let early = symbols.intern("early");
    for i in 0..1000 {
        symbols.intern(format!("name{i}"));
    }
    assert_eq!(symbols.intern("early"), early);
    assert_eq!(symbols.name(early), Some(&b"early"[..]));
    assert_eq!(symbols.len(), 1001);
}

#[test]
fn independent_tables_are_independent() {
    let mut a = SymbolTable::new();
    let mut b = SymbolTable::new();
    a.intern("only-in-a");
    assert_eq!(b.get("only-in-a"), None);
    assert_eq!(b.intern("other").index(), 0);
}

// =============================================================================
// Signatures
// =============================================================================

#[test]
fn separator_is_space() {
    assert_eq!(SIGNATURE_SEPARATOR, b' ');
}

#[test]
fn unary_and_binary_minus_differ() {
    let mut symbols = SymbolTable::new();
    let negate = symbols.intern(signature("-", 0));
    let subtract = symbols.intern(signature("-", 1));
    assert_ne!(negate, subtract);
    assert_eq!(arity_of(symbols.name(negate).unwrap()), 0);
    assert_eq!(arity_of(symbols.name(subtract).unwrap()), 1);
}

proptest! {
    #[test]
    fn byte_identical_names_share_symbols(names in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..6), 1..30)) {
        let mut symbols = SymbolTable::new();
        let ids: Vec<_> = names.iter().map(|n| symbols.intern(n)).collect();
        for (i, a) in names.iter().enumerate() {
            for (j, b) in names.iter().enumerate() {
                prop_assert_eq!(a == b, ids[i] == ids[j]);
            }
        }
    }
}
