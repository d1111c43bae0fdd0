//! Perimeter - Express route surface mapper
//!
//! Perimeter is a CLI tool and library for mapping the HTTP route surface
//! of Node.js/Express projects. It scans source files for route
//! registration calls (`.get(`, `.post(`, `.put(`, `.delete(`) and
//! recovers the full multi-line registration statement by balancing
//! parentheses, without parsing the source language.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, exit codes)
//! - `config`: Configuration file loading and parsing
//! - `scan`: Scan pipeline (file catalog, signature detection, span expansion)
//! - `signatures`: Signature hit and span types

pub mod cli;
pub mod config;
pub mod scan;
pub mod signatures;
