//! Line handling that runs before the diff core
//!
//! - `reader`: splitting raw file contents into line sequences
//! - `filter`: dropping marker and blank lines from a sequence
//!
//! Both operate on each input independently and preserve line order.

pub mod filter;
pub mod reader;
