//! Polynomial and rational-function evaluation over doubling algebras.

pub mod pade;
pub mod polynomial;

pub use pade::Pade;
pub use polynomial::Polynomial;

// Re-export core types for convenience
pub use cayley_core::*;
