//! # Chain Rendering
//!
//! Renders a sequence of values the way a singly linked chain is drawn:
//! each value boxed in parentheses, joined by arrows, and terminated by the
//! `( null )` sentinel.
//!
//! ```
//! use list_common::render::write_chain;
//!
//! let mut out = String::new();
//! write_chain(&mut out, [1, 2, 3]).unwrap();
//! assert_eq!(out, "( 1 ) -> ( 2 ) -> ( 3 ) -> ( null )");
//! ```

use std::fmt::{self, Display, Write};

/// Terminator written after the last value of every chain.
pub const SENTINEL: &str = "( null )";

/// Link drawn between two cells.
pub const ARROW: &str = " -> ";

/// Writes `items` as a chain into any [`fmt::Write`] sink, including a
/// [`fmt::Formatter`].
pub fn write_chain<W, I>(out: &mut W, items: I) -> fmt::Result
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    items
        .into_iter()
        .try_for_each(|item| write!(out, "( {item} ){ARROW}"))?;
    out.write_str(SENTINEL)
}
