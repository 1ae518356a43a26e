//! Shared path resolution for the `~/.claude` configuration tree.

pub mod paths;
