//! Account storage - persistence model and repository.

mod model;
mod repository;

pub use model::AccountRecord;
pub use repository::AccountRepository;
