use crate::connection::DatabaseConnection;
use crate::entities::{film, film_actor, Film, Films, MpaaRating};
use crate::error::StorageResult;
use crate::filters::RawPredicate;
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Select,
};

/// Filters for film queries
#[derive(Debug, Clone, Default)]
pub struct FilmFilters {
    pub release_year: Option<i16>,
    pub released_on_or_after: Option<i16>,
    pub rating: Option<MpaaRating>,
    pub title_contains: Option<String>,
    /// Escape hatch for predicates the structured filters cannot express.
    /// Fragments are compiled-in literals, never user input.
    pub raw: Option<RawPredicate>,
}

/// Pagination and ordering for film queries
///
/// Whatever ordering is requested, the primary key is appended ascending as
/// a tiebreaker so `order desc + limit` is deterministic.
#[derive(Debug, Clone, Default)]
pub struct FilmPage {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub order_by: Option<film::Column>,
    pub order_desc: bool,
}

/// Repository for film queries
#[derive(Clone)]
pub struct FilmRepository {
    db: DatabaseConnection,
}

impl FilmRepository {
    /// Create a new film repository
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Find a film by primary key; a missing row is `Ok(None)`
    pub async fn find_by_id(&self, id: i32) -> StorageResult<Option<Film>> {
        let film = Films::find_by_id(id).one(self.db.get_connection()).await?;
        Ok(film)
    }

    /// Count all films
    pub async fn count(&self) -> StorageResult<u64> {
        let count = Films::find().count(self.db.get_connection()).await?;
        Ok(count)
    }

    /// Count films matching the filters
    pub async fn count_with_filters(&self, filters: &FilmFilters) -> StorageResult<u64> {
        let count = apply_film_filters(Films::find(), filters)
            .count(self.db.get_connection())
            .await?;
        Ok(count)
    }

    /// Find films matching the filters, paginated
    pub async fn find_with_filters(
        &self,
        filters: &FilmFilters,
        page: &FilmPage,
    ) -> StorageResult<Vec<Film>> {
        let films = select_with_filters(filters, page)
            .all(self.db.get_connection())
            .await?;
        Ok(films)
    }

    /// Find films for an actor using an explicit join on the film_actor
    /// join table
    ///
    /// Must return the same rows as the declared many-to-many relationship
    /// ([`ActorRepository::films`](super::ActorRepository::films)).
    pub async fn find_for_actor(
        &self,
        actor_id: i32,
        filters: &FilmFilters,
        page: &FilmPage,
    ) -> StorageResult<Vec<Film>> {
        let films = select_for_actor(actor_id, filters, page)
            .all(self.db.get_connection())
            .await?;
        Ok(films)
    }
}

/// Build a filtered, paginated film select
pub(crate) fn select_with_filters(filters: &FilmFilters, page: &FilmPage) -> Select<Films> {
    apply_film_page(apply_film_filters(Films::find(), filters), page)
}

/// Build the explicit-join variant of "films for an actor"
pub(crate) fn select_for_actor(
    actor_id: i32,
    filters: &FilmFilters,
    page: &FilmPage,
) -> Select<Films> {
    let query = Films::find()
        .join_rev(JoinType::InnerJoin, film_actor::Relation::Film.def())
        .filter(film_actor::Column::ActorId.eq(actor_id));
    apply_film_page(apply_film_filters(query, filters), page)
}

/// Apply film filters to a select
pub(crate) fn apply_film_filters(mut query: Select<Films>, filters: &FilmFilters) -> Select<Films> {
    if let Some(year) = filters.release_year {
        query = query.filter(film::Column::ReleaseYear.eq(year));
    }

    if let Some(year) = filters.released_on_or_after {
        query = query.filter(film::Column::ReleaseYear.gte(year));
    }

    if let Some(rating) = filters.rating {
        query = query.filter(film::Column::Rating.eq(rating));
    }

    if let Some(fragment) = &filters.title_contains {
        query = query.filter(film::Column::Title.contains(fragment));
    }

    if let Some(raw) = &filters.raw {
        query = query.filter(raw.clone().into_expr());
    }

    query
}

/// Apply ordering and pagination, with a film_id-ascending tiebreaker
pub(crate) fn apply_film_page(mut query: Select<Films>, page: &FilmPage) -> Select<Films> {
    if let Some(column) = page.order_by {
        let direction = if page.order_desc { Order::Desc } else { Order::Asc };
        query = query.order_by(column, direction);
    }
    query = query.order_by(film::Column::FilmId, Order::Asc);

    if let Some(limit) = page.limit {
        query = query.limit(limit);
    }

    if let Some(offset) = page.offset {
        query = query.offset(offset);
    }

    query
}

#[async_trait(?Send)]
impl super::Repository for FilmRepository {
    async fn health_check(&self) -> StorageResult<()> {
        self.count().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn test_filter_sql_generation() {
        let filters = FilmFilters {
            release_year: Some(2006),
            rating: Some(MpaaRating::Pg13),
            ..Default::default()
        };
        let sql = select_with_filters(&filters, &FilmPage::default())
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#""film"."release_year" = 2006"#), "{sql}");
        assert!(sql.contains(r#""film"."rating" = 'PG-13'"#), "{sql}");
        assert!(sql.ends_with(r#"ORDER BY "film"."film_id" ASC"#), "{sql}");
    }

    #[test]
    fn test_ordering_has_primary_key_tiebreaker() {
        let page = FilmPage {
            limit: Some(3),
            order_by: Some(film::Column::Length),
            order_desc: true,
            ..Default::default()
        };
        let sql = select_with_filters(&FilmFilters::default(), &page)
            .build(DbBackend::Postgres)
            .to_string();

        assert!(
            sql.contains(r#"ORDER BY "film"."length" DESC, "film"."film_id" ASC LIMIT 3"#),
            "{sql}"
        );
    }

    #[test]
    fn test_actor_join_sql_uses_descriptor_columns() {
        let sql = select_for_actor(7, &FilmFilters::default(), &FilmPage::default())
            .build(DbBackend::Postgres)
            .to_string();

        assert!(
            sql.contains(
                r#"INNER JOIN "film_actor" ON "film_actor"."film_id" = "film"."film_id""#
            ),
            "{sql}"
        );
        assert!(sql.contains(r#""film_actor"."actor_id" = 7"#), "{sql}");
    }

    #[test]
    fn test_raw_predicate_is_attached() {
        let filters = FilmFilters {
            raw: Some(
                RawPredicate::new(r#""film"."length" > ?"#)
                    .unwrap()
                    .bind(120),
            ),
            ..Default::default()
        };
        let statement = select_with_filters(&filters, &FilmPage::default())
            .build(DbBackend::Postgres);
        let sql = statement.to_string();

        // The fragment keeps its placeholder; the value travels as a bound
        // parameter
        assert!(sql.contains(r#""film"."length" > ?"#), "{sql}");
        let values = format!("{:?}", statement.values);
        assert!(values.contains("120"), "{values}");
    }
}
