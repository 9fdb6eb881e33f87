//! Integration tests for Layer 1: Core
//!
//! Tests for bootstrap, method tables, primitives, and dispatch.

mod bootstrap;
mod dispatch;
