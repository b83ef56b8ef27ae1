//! Profile reads and updates, including the composed profile view.

pub mod model;
pub mod service;

pub use model::ProfileView;
pub use service::ProfileService;
