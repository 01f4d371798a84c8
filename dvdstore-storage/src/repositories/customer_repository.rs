use crate::connection::DatabaseConnection;
use crate::entities::{rental, Address, Addresses, Customer, Customers, Rental, Rentals};
use crate::error::StorageResult;
use async_trait::async_trait;
use sea_orm::{EntityTrait, ModelTrait, Order, PaginatorTrait, QueryOrder};

/// Repository for customer queries
#[derive(Clone)]
pub struct CustomerRepository {
    db: DatabaseConnection,
}

impl CustomerRepository {
    /// Create a new customer repository
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Find a customer by primary key; a missing row is `Ok(None)`
    pub async fn find_by_id(&self, id: i32) -> StorageResult<Option<Customer>> {
        let customer = Customers::find_by_id(id)
            .one(self.db.get_connection())
            .await?;
        Ok(customer)
    }

    /// Count all customers
    pub async fn count(&self) -> StorageResult<u64> {
        let count = Customers::find().count(self.db.get_connection()).await?;
        Ok(count)
    }

    /// The customer's address through the declared one-to-one relationship
    pub async fn address(&self, customer: &Customer) -> StorageResult<Option<Address>> {
        let address = customer
            .find_related(Addresses)
            .one(self.db.get_connection())
            .await?;
        Ok(address)
    }

    /// The customer's rentals, most recent first
    pub async fn rentals(&self, customer: &Customer) -> StorageResult<Vec<Rental>> {
        let rentals = customer
            .find_related(Rentals)
            .order_by(rental::Column::RentalDate, Order::Desc)
            .order_by(rental::Column::RentalId, Order::Asc)
            .all(self.db.get_connection())
            .await?;
        Ok(rentals)
    }
}

#[async_trait(?Send)]
impl super::Repository for CustomerRepository {
    async fn health_check(&self) -> StorageResult<()> {
        self.count().await?;
        Ok(())
    }
}
