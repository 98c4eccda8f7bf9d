//! Expose mdfy's command line internals for use in testing and by `xtask`.
//! The document composition API lives in `mdfy-core`.
pub mod cli;
pub mod document;
