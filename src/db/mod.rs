pub mod metadata;
pub mod query;
pub mod session;
pub mod types;

pub use metadata::*;
pub use query::*;
pub use session::*;
pub use types::*;
