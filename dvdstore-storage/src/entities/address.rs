use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Postal address entity, referenced by customers and stores
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "address")]
pub struct Model {
    /// Primary key
    #[sea_orm(primary_key)]
    pub address_id: i32,

    /// First street line
    pub address: String,

    /// Second street line
    pub address2: Option<String>,

    pub district: String,

    /// City reference (city table is outside this slice of the schema)
    pub city_id: i32,

    pub postal_code: Option<String>,

    pub phone: String,

    /// Row last-update timestamp
    pub last_update: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::customer::Entity")]
    Customer,
    #[sea_orm(has_many = "super::store::Entity")]
    Store,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::store::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Store.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
