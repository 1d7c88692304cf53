pub mod context;
pub mod distribution;
pub mod scanner;
pub mod script;
pub mod sync;

pub use context::{classify, InferredParam};
pub use distribution::{next_slice, DistributionCursor};
pub use script::{split, BatchStatement, StatementBatch};
pub use sync::sync;
