use crate::connection::DatabaseConnection;
use crate::entities::{rental, Film, Rental, RentalToFilm, Rentals};
use crate::error::StorageResult;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};

/// Repository for rental queries
#[derive(Clone)]
pub struct RentalRepository {
    db: DatabaseConnection,
}

impl RentalRepository {
    /// Create a new rental repository
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Find a rental by primary key; a missing row is `Ok(None)`
    pub async fn find_by_id(&self, id: i32) -> StorageResult<Option<Rental>> {
        let rental = Rentals::find_by_id(id).one(self.db.get_connection()).await?;
        Ok(rental)
    }

    /// Count all rentals
    pub async fn count(&self) -> StorageResult<u64> {
        let count = Rentals::find().count(self.db.get_connection()).await?;
        Ok(count)
    }

    /// Rentals not yet returned, oldest first
    pub async fn find_outstanding(&self, limit: Option<u64>) -> StorageResult<Vec<Rental>> {
        let mut query = Rentals::find()
            .filter(rental::Column::ReturnDate.is_null())
            .order_by(rental::Column::RentalDate, Order::Asc)
            .order_by(rental::Column::RentalId, Order::Asc);

        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let rentals = query.all(self.db.get_connection()).await?;
        Ok(rentals)
    }

    /// The film a rental is for, through inventory
    pub async fn film(&self, rental: &Rental) -> StorageResult<Option<Film>> {
        let film = rental
            .find_linked(RentalToFilm)
            .one(self.db.get_connection())
            .await?;
        Ok(film)
    }
}

#[async_trait(?Send)]
impl super::Repository for RentalRepository {
    async fn health_check(&self) -> StorageResult<()> {
        self.count().await?;
        Ok(())
    }
}
