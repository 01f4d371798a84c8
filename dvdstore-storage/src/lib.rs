//! Data access layer for the DVD rental database
//!
//! Entities map the rental schema one-to-one, repositories expose typed
//! query builders over them, and reports cover the multi-join read paths.
//! All access flows through an injected [`DatabaseConnection`] so the pool
//! is created once and closed deliberately.

pub mod connection;
pub mod entities;
pub mod error;
pub mod filters;
pub mod reports;
pub mod repositories;

pub use connection::DatabaseConnection;
pub use error::{StorageError, StorageResult};
pub use filters::RawPredicate;
pub use reports::{overdue_rentals, top_films_for_actor, OverdueRental};
pub use repositories::{
    ActorRepository, CustomerRepository, FilmFilters, FilmPage, FilmRepository, InventoryFilters,
    InventoryPage, InventoryRepository, RentalRepository, Repository,
};
