//! SeaORM entities mirroring the DVD rental schema one-to-one
//!
//! Entities are immutable row snapshots fetched per query; relationship
//! metadata lives in each entity's `Relation` enum and `Related`/`Linked`
//! impls and is checked at compile time.

pub mod actor;
pub mod address;
pub mod customer;
pub mod film;
pub mod film_actor;
pub mod inventory;
pub mod rental;
pub mod store;

pub use actor::{ActiveModel as ActorActiveModel, Column as ActorColumn, Entity as Actors, Model as Actor};
pub use address::{
    ActiveModel as AddressActiveModel, Column as AddressColumn, Entity as Addresses, Model as Address,
};
pub use customer::{
    ActiveModel as CustomerActiveModel, Column as CustomerColumn, Entity as Customers, Model as Customer,
};
pub use film::{
    ActiveModel as FilmActiveModel, Column as FilmColumn, Entity as Films, Model as Film, MpaaRating,
};
pub use film_actor::{
    ActiveModel as FilmActorActiveModel, Column as FilmActorColumn, Entity as FilmActors,
    Model as FilmActor,
};
pub use inventory::{
    ActiveModel as InventoryActiveModel, Column as InventoryColumn, Entity as Inventories,
    Model as Inventory,
};
pub use rental::{
    ActiveModel as RentalActiveModel, Column as RentalColumn, Entity as Rentals, Model as Rental,
    RentalToFilm,
};
pub use store::{ActiveModel as StoreActiveModel, Column as StoreColumn, Entity as Stores, Model as Store};
