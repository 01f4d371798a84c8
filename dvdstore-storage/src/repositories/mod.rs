//! Repositories over the rental schema
//!
//! One repository per queried entity, each holding an injected
//! [`DatabaseConnection`](crate::connection::DatabaseConnection). Queries
//! are built lazily and execute only when awaited; query construction is
//! split into pure `select_*` functions so SQL generation can be asserted
//! without a live database.

pub mod actor_repository;
pub mod customer_repository;
pub mod film_repository;
pub mod inventory_repository;
pub mod rental_repository;

pub use actor_repository::ActorRepository;
pub use customer_repository::CustomerRepository;
pub use film_repository::{FilmFilters, FilmPage, FilmRepository};
pub use inventory_repository::{InventoryFilters, InventoryPage, InventoryRepository};
pub use rental_repository::RentalRepository;

use crate::error::StorageResult;
use async_trait::async_trait;

/// Common behavior across repositories
#[async_trait(?Send)]
pub trait Repository {
    /// Cheap probe that the repository can reach its table
    async fn health_check(&self) -> StorageResult<()>;
}
