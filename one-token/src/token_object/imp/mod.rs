//! Implementations of token key objects.

pub mod in_memory;
