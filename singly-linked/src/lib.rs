//! # Singly Linked List
//!
//! A singly linked list whose nodes live in a slot arena from
//! [`list_common`] and link to each other by id.
//!
//! ## Modules
//!
//! - [`node`]: The [`Node`] storage cell
//! - [`list`]: [`LinkedList`] and its traversal primitive
//! - [`error`]: [`ListError`] for the checked index operations
//!
//! ## Logging
//!
//! Structural changes are reported through the `log` facade at `trace`
//! level; index operations that silently do nothing report at `debug`.

pub mod error;
pub mod list;
pub mod node;

pub use error::ListError;
pub use list::{Iter, LinkedList};
pub use node::{Node, NodeId};
