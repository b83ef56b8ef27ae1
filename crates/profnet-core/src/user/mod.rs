//! User accounts, profile attributes, and career history.

pub mod model;
pub mod repository;

pub use model::{EducationDetail, NewAccount, Profile, ProfileUpdate, User, WorkExperience};
pub use repository::UserRepository;
