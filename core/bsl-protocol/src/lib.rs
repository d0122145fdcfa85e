#![no_std] // Shared by the WASM binding and the native tools

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod grammar;
pub mod ids;

// Re-export core types for convenience
pub use grammar::*;
pub use ids::SignId;

pub mod model;
pub use model::*;
