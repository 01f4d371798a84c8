use crate::connection::DatabaseConnection;
use crate::entities::{inventory, Film, Films, Inventories, Inventory};
use crate::error::StorageResult;
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, EntityTrait, ModelTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};

/// Filters for inventory queries
#[derive(Debug, Clone, Default)]
pub struct InventoryFilters {
    pub film_id: Option<i32>,
    pub store_id: Option<i32>,
    /// Keep only rows whose primary key is strictly below this value
    pub id_below: Option<i32>,
}

/// Pagination and ordering for inventory queries
///
/// As with films, the primary key is appended ascending as a tiebreaker.
#[derive(Debug, Clone, Default)]
pub struct InventoryPage {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub order_by: Option<inventory::Column>,
    pub order_desc: bool,
}

/// Repository for inventory queries
#[derive(Clone)]
pub struct InventoryRepository {
    db: DatabaseConnection,
}

impl InventoryRepository {
    /// Create a new inventory repository
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Find an inventory row by primary key; a missing row is `Ok(None)`
    pub async fn find_by_id(&self, id: i32) -> StorageResult<Option<Inventory>> {
        let inventory = Inventories::find_by_id(id)
            .one(self.db.get_connection())
            .await?;
        Ok(inventory)
    }

    /// Count all inventory rows
    pub async fn count(&self) -> StorageResult<u64> {
        let count = Inventories::find().count(self.db.get_connection()).await?;
        Ok(count)
    }

    /// Count inventory rows matching the filters
    pub async fn count_with_filters(&self, filters: &InventoryFilters) -> StorageResult<u64> {
        let count = apply_inventory_filters(Inventories::find(), filters)
            .count(self.db.get_connection())
            .await?;
        Ok(count)
    }

    /// Find inventory rows matching the filters, paginated
    pub async fn find_with_filters(
        &self,
        filters: &InventoryFilters,
        page: &InventoryPage,
    ) -> StorageResult<Vec<Inventory>> {
        let rows = select_with_filters(filters, page)
            .all(self.db.get_connection())
            .await?;
        Ok(rows)
    }

    /// The film an inventory row stocks
    pub async fn film(&self, inventory: &Inventory) -> StorageResult<Option<Film>> {
        let film = inventory
            .find_related(Films)
            .one(self.db.get_connection())
            .await?;
        Ok(film)
    }
}

/// Build a filtered, paginated inventory select
pub(crate) fn select_with_filters(
    filters: &InventoryFilters,
    page: &InventoryPage,
) -> Select<Inventories> {
    apply_inventory_page(apply_inventory_filters(Inventories::find(), filters), page)
}

/// Apply inventory filters to a select
pub(crate) fn apply_inventory_filters(
    mut query: Select<Inventories>,
    filters: &InventoryFilters,
) -> Select<Inventories> {
    if let Some(film_id) = filters.film_id {
        query = query.filter(inventory::Column::FilmId.eq(film_id));
    }

    if let Some(store_id) = filters.store_id {
        query = query.filter(inventory::Column::StoreId.eq(store_id));
    }

    if let Some(id) = filters.id_below {
        query = query.filter(inventory::Column::InventoryId.lt(id));
    }

    query
}

/// Apply ordering and pagination, with an inventory_id-ascending tiebreaker
pub(crate) fn apply_inventory_page(
    mut query: Select<Inventories>,
    page: &InventoryPage,
) -> Select<Inventories> {
    if let Some(column) = page.order_by {
        let direction = if page.order_desc { Order::Desc } else { Order::Asc };
        query = query.order_by(column, direction);
    }
    query = query.order_by(inventory::Column::InventoryId, Order::Asc);

    if let Some(limit) = page.limit {
        query = query.limit(limit);
    }

    if let Some(offset) = page.offset {
        query = query.offset(offset);
    }

    query
}

#[async_trait(?Send)]
impl super::Repository for InventoryRepository {
    async fn health_check(&self) -> StorageResult<()> {
        self.count().await?;
        Ok(())
    }
}
