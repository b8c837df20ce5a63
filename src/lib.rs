pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use domain::application::{NewTutorApplication, TutorApplication};
pub use domain::validate::{validate, ValidationError};
pub use storage::{
    connect_pool, ApplicationStore, MemApplicationStore, PgApplicationStore, StorageError,
};
