use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Customer entity
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    /// Primary key
    #[sea_orm(primary_key)]
    pub customer_id: i32,

    /// Store the customer is registered at
    pub store_id: i32,

    pub first_name: String,

    pub last_name: String,

    pub email: Option<String>,

    /// Foreign key to the address table
    pub address_id: i32,

    /// Whether the account is active
    pub activebool: bool,

    /// Legacy integer active flag kept for schema compatibility
    pub active: Option<i32>,

    /// Date the account was created
    pub create_date: Date,

    /// Row last-update timestamp
    pub last_update: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::address::Entity",
        from = "Column::AddressId",
        to = "super::address::Column::AddressId"
    )]
    Address,
    #[sea_orm(
        belongs_to = "super::store::Entity",
        from = "Column::StoreId",
        to = "super::store::Column::StoreId"
    )]
    Store,
    #[sea_orm(has_many = "super::rental::Entity")]
    Rental,
}

impl Related<super::address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Address.def()
    }
}

impl Related<super::store::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Store.def()
    }
}

impl Related<super::rental::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rental.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
