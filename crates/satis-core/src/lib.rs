//! Core data types for satis-import.
//!
//! This crate defines the version constraints, requirement maps, lock files
//! and satis.json documents the import command works on, together with the
//! merge that folds locked versions into a `require` section and the JSON
//! stores used to load and save them.
//!
//! Nothing here touches the network, and only [`json_file::JsonFile`]
//! touches the filesystem.

pub mod constraint;
pub mod json_file;
pub mod lockfile;
pub mod manifest;
pub mod package;
pub mod require;

/// Default location of the satis configuration file.
pub const DEFAULT_SATIS_FILE: &str = "./satis.json";
