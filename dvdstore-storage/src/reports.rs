//! Cross-entity reporting queries
//!
//! Reports project a handful of columns out of multi-join queries into
//! plain structs instead of loading full entity rows. They take any
//! [`ConnectionTrait`] implementor so they run against the live pool and
//! against mock connections alike.

use crate::entities::{address, customer, film, inventory, rental, Film, Rentals};
use crate::error::StorageResult;
use crate::filters::RawPredicate;
use crate::repositories::film_repository;
use crate::repositories::{FilmFilters, FilmPage};
use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbBackend, EntityTrait, FromQueryResult, JoinType, Order,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

/// One row of the overdue rentals report
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct OverdueRental {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub title: String,
}

/// Rentals whose due date has passed without a return, as of the given
/// instant
///
/// The due date is `rental_date` plus the film's `rental_duration` in
/// days; the clock is passed in explicitly so results are reproducible.
pub async fn overdue_rentals<C: ConnectionTrait>(
    db: &C,
    as_of: DateTime<Utc>,
    limit: Option<u64>,
) -> StorageResult<Vec<OverdueRental>> {
    let query = select_overdue(db.get_database_backend(), as_of, limit)?;
    let rows = query.into_model::<OverdueRental>().all(db).await?;
    Ok(rows)
}

/// An actor's longest films released on or after a given year
pub async fn top_films_for_actor<C: ConnectionTrait>(
    db: &C,
    actor_id: i32,
    released_on_or_after: i16,
    limit: u64,
) -> StorageResult<Vec<Film>> {
    let filters = FilmFilters {
        released_on_or_after: Some(released_on_or_after),
        ..Default::default()
    };
    let page = FilmPage {
        limit: Some(limit),
        order_by: Some(film::Column::Length),
        order_desc: true,
        ..Default::default()
    };
    let films = film_repository::select_for_actor(actor_id, &filters, &page)
        .all(db)
        .await?;
    Ok(films)
}

/// Build the overdue report query for a backend
pub(crate) fn select_overdue(
    backend: DbBackend,
    as_of: DateTime<Utc>,
    limit: Option<u64>,
) -> StorageResult<Select<Rentals>> {
    let mut query = Rentals::find()
        .select_only()
        .column(customer::Column::FirstName)
        .column(customer::Column::LastName)
        .column(address::Column::Phone)
        .column(film::Column::Title)
        .join(JoinType::InnerJoin, rental::Relation::Customer.def())
        .join(JoinType::InnerJoin, customer::Relation::Address.def())
        .join(JoinType::InnerJoin, rental::Relation::Inventory.def())
        .join(JoinType::InnerJoin, inventory::Relation::Film.def())
        .filter(rental::Column::ReturnDate.is_null())
        .filter(overdue_predicate(backend, as_of)?.into_expr())
        .order_by(film::Column::Title, Order::Asc)
        .order_by(rental::Column::RentalId, Order::Asc);

    if let Some(limit) = limit {
        query = query.limit(limit);
    }

    Ok(query)
}

/// Due-date arithmetic differs per backend: Postgres has interval
/// multiplication, SQLite spells it with datetime() and string
/// concatenation
fn overdue_predicate(backend: DbBackend, as_of: DateTime<Utc>) -> StorageResult<RawPredicate> {
    let predicate = match backend {
        DbBackend::Sqlite => RawPredicate::new(
            r#"datetime("rental"."rental_date", '+' || "film"."rental_duration" || ' days') < datetime(?)"#,
        )?
        .bind(as_of.naive_utc().format("%Y-%m-%d %H:%M:%S").to_string()),
        _ => RawPredicate::new(
            r#""rental"."rental_date" + "film"."rental_duration" * interval '1 day' < ?"#,
        )?
        .bind(as_of),
    };
    Ok(predicate)
}
