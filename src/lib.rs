/// Common error types: invalid construction parameters.
pub mod error;
/// Built-in data structure: the chained hash table.
pub mod table;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Operation errors and result type.
pub use error::{TableError, TableResult};
/// Core table type, its iterator and the pluggable bucket hash.
pub use table::{BucketHasher, DefaultBucketHasher, HashTable, TableIter};
