//! Build code decoding.
//!
//! Everything needed to turn a pasted character build code into a
//! printable sheet: the game data catalog, the decoders for the two
//! code formats, the chat scanner, and the sheet renderer.

pub mod catalog;
pub mod character;
pub mod decoder;
pub mod modern;
pub mod origin;
pub mod scan;
pub mod sheet;

#[cfg(test)]
pub(crate) mod fixtures;

pub use catalog::GameDataCatalog;
pub use scan::CodeScanner;
