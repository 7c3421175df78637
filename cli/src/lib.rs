//! The `pngmeta-cli` crate provides a command-line interface for inspecting
//! and editing the metadata chunks of PNG images.
//!
//! This crate is the binary entry point for the `pngmeta` tool; it handles
//! argument parsing, logging and file access, and leaves the chunk format
//! itself to [libpngmeta].
pub mod cli;
pub mod command;
