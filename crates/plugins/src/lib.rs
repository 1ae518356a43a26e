//! Installed-plugins registry: resolves plugin names to install paths.

pub mod registry;
