//! Command implementations
//!
//! Each submodule turns parsed arguments into calls on the source, platform
//! and delivery layers and renders the result.

pub mod completions;
pub mod copy;
pub mod init;
pub mod list;
pub mod validate;
