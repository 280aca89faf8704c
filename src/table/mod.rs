pub mod hash_table;
pub mod hasher;

// Publicly re-export the table and hasher types from the submodules to
// simplify access from external code.
pub use hash_table::*;
pub use hasher::*;
