// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lincat — loader, linter, and merge tool for Qt Linguist catalogs.
//!
//! A `.ts` translation catalog is parsed once into a typed, immutable
//! model and queried read-only for the life of the process. Everything
//! in this crate is toolchain around that model.
//!
//! CORE PIECES:
//! 1. **Types**: the catalog data model (`Catalog`, `TsContext`,
//!    `Message`, `Status`).
//! 2. **Ts**: the XML reader/writer pair; loading then re-serializing a
//!    catalog preserves every message tuple.
//! 3. **Resolve**: the runtime lookup index keyed by
//!    (context, source, comment), with comment relaxation and
//!    source-text fallback.
//! 4. **Lint / Merge / Scan**: authoring-defect detection, the
//!    extraction-merge lifecycle, and batch validation of catalog trees.

pub mod lang;
pub mod lint;
pub mod merge;
pub mod report;
pub mod resolve;
pub mod scan;
pub mod ts;
pub mod types;
