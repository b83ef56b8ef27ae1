//! Connection graph: requests, accept/reject, accepted listings, and the
//! request eligibility gate.

pub mod model;
pub mod repository;
pub mod service;

pub use model::{ConnectionDecision, ConnectionStatus};
pub use repository::ConnectionRepository;
pub use service::ConnectionService;
