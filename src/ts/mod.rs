// SPDX-License-Identifier: PMPL-1.0-or-later

//! TS document I/O
//!
//! Reading and writing Qt Linguist `.ts` catalogs. The reader and writer
//! are a semantic round-trip pair: serializing a loaded catalog and
//! loading the result yields the same contexts, messages, statuses,
//! comments and locations. Whitespace between elements belongs to the
//! writer; whitespace inside message text is preserved byte for byte.

pub mod reader;
pub mod writer;

pub use reader::{load_file, parse};
pub use writer::{to_xml, write_file};
