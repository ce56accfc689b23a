//! High-level operations behind the `satis` commands.

pub mod ops_import;
