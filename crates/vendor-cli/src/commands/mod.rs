//! Command implementations for vendor-fix

pub mod fix;
pub mod reporter;

pub use fix::{run_fix_all, run_fix_package};
