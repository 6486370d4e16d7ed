// Application layer - the service clients talk to.
// The domain ledger is single-threaded; the service adds locking and turns
// ledger outcomes into log events.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
