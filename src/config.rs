//! Configuration loader and schema types.
//!
//! Every fixed value of a generation run (playlist identity, scanned
//! directory, extension sets, output location) lives in [`Settings`] and is
//! passed explicitly into the scanner and the manifest writer.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
