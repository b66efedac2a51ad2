//! Top-level facade crate for pulsemock.
//!
//! Re-exports the core model and the backend library so users can depend on a single crate.

pub mod core {
    pub use pulsemock_core::*;
}

pub mod backend {
    pub use pulsemock_backend::*;
}
