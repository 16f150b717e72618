//! Session components
//!
//! This module contains the pieces a diff invocation is built from:
//!
//! - `options`: Settings resolved from the command line
//! - `session`: Output writer and settings shared by the commands
//! - `workspace`: Reading input files into line sequences

pub mod options;
pub mod session;
pub mod workspace;
