use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Rental entity, one row per checkout
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rental")]
pub struct Model {
    /// Primary key
    #[sea_orm(primary_key)]
    pub rental_id: i32,

    /// When the item left the store
    pub rental_date: DateTimeUtc,

    /// The physical inventory item rented out
    pub inventory_id: i32,

    pub customer_id: i32,

    /// NULL exactly while the item is still out
    pub return_date: Option<DateTimeUtc>,

    /// Staff member who handled the checkout
    pub staff_id: i32,

    /// Row last-update timestamp
    pub last_update: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::inventory::Entity",
        from = "Column::InventoryId",
        to = "super::inventory::Column::InventoryId"
    )]
    Inventory,
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::CustomerId"
    )]
    Customer,
}

impl Related<super::inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inventory.def()
    }
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

/// Two-hop join path from a rental to its film, through inventory
#[derive(Debug)]
pub struct RentalToFilm;

impl Linked for RentalToFilm {
    type FromEntity = Entity;

    type ToEntity = super::film::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            Relation::Inventory.def(),
            super::inventory::Relation::Film.def(),
        ]
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Whether the item is still out
    pub fn is_outstanding(&self) -> bool {
        self.return_date.is_none()
    }
}
