pub mod common;
pub mod errors;
pub mod fixtures;
pub mod oracle;
pub mod price;
pub mod snapshot;

pub use common::*;
pub use errors::*;
pub use oracle::*;
pub use price::*;
pub use snapshot::*;
