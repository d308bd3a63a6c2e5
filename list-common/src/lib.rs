//! # List Common Utilities
//!
//! Building blocks shared by the list crates in this workspace.
//!
//! ## Modules
//!
//! - [`arena`]: Typed slot arena with generational ids and slot reuse
//! - [`render`]: Chain rendering (`( v1 ) -> ( v2 ) -> ( null )`)
//!
//! Linked structures are built on index links into an [`Arena`] rather than
//! on `Rc<RefCell<T>>` or raw pointers.

pub mod arena;
pub mod render;

// Re-export main types for convenience
pub use arena::{Arena, ArenaId};
pub use render::write_chain;
