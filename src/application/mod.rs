// Application layer - the in-process interface presentation code talks to.
// The service owns the session ledger; summaries are computed on demand.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
