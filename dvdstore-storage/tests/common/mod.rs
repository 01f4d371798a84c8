//! Shared harness for integration tests
//!
//! Connects to an in-memory SQLite database, creates the declared schema
//! from the entity definitions, and seeds a small, fixed rental fixture.
#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use dvdstore_config::DatabaseConfig;
use dvdstore_storage::entities::{
    actor, address, customer, film, film_actor, inventory, rental, store, MpaaRating,
};
use dvdstore_storage::DatabaseConnection;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbBackend, Schema, Set};

/// The fixed clock all fixture assertions are written against
pub fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2005, 8, 1, 12, 0, 0).unwrap()
}

pub fn ts(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 10, 0, 0).unwrap()
}

/// Connect to a fresh in-memory database with the schema created
///
/// The pool is pinned to a single connection; every pooled connection to
/// `sqlite::memory:` would otherwise see its own empty database.
pub async fn connect() -> DatabaseConnection {
    let config = DatabaseConfig {
        url: Some("sqlite::memory:".to_string()),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let db = DatabaseConnection::new(config).await.unwrap();
    create_schema(&db).await;
    db
}

async fn create_schema(db: &DatabaseConnection) {
    let schema = Schema::new(DbBackend::Sqlite);
    let conn = db.get_connection();
    let statements = [
        schema.create_table_from_entity(actor::Entity),
        schema.create_table_from_entity(address::Entity),
        schema.create_table_from_entity(store::Entity),
        schema.create_table_from_entity(customer::Entity),
        schema.create_table_from_entity(film::Entity),
        schema.create_table_from_entity(film_actor::Entity),
        schema.create_table_from_entity(inventory::Entity),
        schema.create_table_from_entity(rental::Entity),
    ];
    for statement in &statements {
        conn.execute(DbBackend::Sqlite.build(statement)).await.unwrap();
    }
}

/// Seed the standard fixture
///
/// Two customers, two actors, three films, four inventory items and three
/// rentals. Relative to [`as_of`], rental 1 (MARY SMITH, ACE GOLDFINGER)
/// is overdue, rental 2 is out but not yet due, rental 3 was returned.
pub async fn seed_fixture(db: &DatabaseConnection) {
    let conn = db.get_connection();
    let now = ts(2005, 5, 1);

    for (id, line, phone) in [
        (1, "47 MySakila Drive", "28303384290"),
        (2, "28 MySQL Boulevard", "14033335568"),
    ] {
        address::ActiveModel {
            address_id: Set(id),
            address: Set(line.to_string()),
            address2: Set(None),
            district: Set("Alberta".to_string()),
            city_id: Set(300),
            postal_code: Set(None),
            phone: Set(phone.to_string()),
            last_update: Set(now),
        }
        .insert(conn)
        .await
        .unwrap();
    }

    store::ActiveModel {
        store_id: Set(1),
        manager_staff_id: Set(1),
        address_id: Set(1),
        last_update: Set(now),
    }
    .insert(conn)
    .await
    .unwrap();

    for (id, first, last, address_id) in [(1, "MARY", "SMITH", 1), (2, "PATRICIA", "JOHNSON", 2)] {
        customer::ActiveModel {
            customer_id: Set(id),
            store_id: Set(1),
            first_name: Set(first.to_string()),
            last_name: Set(last.to_string()),
            email: Set(None),
            address_id: Set(address_id),
            activebool: Set(true),
            active: Set(Some(1)),
            create_date: Set(NaiveDate::from_ymd_opt(2005, 1, 1).unwrap()),
            last_update: Set(now),
        }
        .insert(conn)
        .await
        .unwrap();
    }

    for (id, first, last) in [(1, "PENELOPE", "GUINESS"), (2, "NICK", "WAHLBERG")] {
        actor::ActiveModel {
            actor_id: Set(id),
            first_name: Set(first.to_string()),
            last_name: Set(last.to_string()),
            last_update: Set(now),
        }
        .insert(conn)
        .await
        .unwrap();
    }

    for (id, title, year, duration, length, rating) in [
        (1, "ACADEMY DINOSAUR", 2006, 6, 86, MpaaRating::Pg),
        (2, "ACE GOLDFINGER", 2006, 3, 48, MpaaRating::G),
        (3, "ADAPTATION HOLES", 2005, 7, 50, MpaaRating::Nc17),
    ] {
        film::ActiveModel {
            film_id: Set(id),
            title: Set(title.to_string()),
            description: Set(None),
            release_year: Set(Some(year)),
            rental_duration: Set(duration),
            rental_rate: Set(Decimal::new(499, 2)),
            length: Set(Some(length)),
            rating: Set(Some(rating)),
            special_features: Set(Some("Trailers".to_string())),
            last_update: Set(now),
        }
        .insert(conn)
        .await
        .unwrap();
    }

    // Actor 1 appears in all three films, actor 2 only in film 1
    for (actor_id, film_id) in [(1, 1), (1, 2), (1, 3), (2, 1)] {
        film_actor::ActiveModel {
            actor_id: Set(actor_id),
            film_id: Set(film_id),
            last_update: Set(now),
        }
        .insert(conn)
        .await
        .unwrap();
    }

    for (id, film_id) in [(1, 1), (2, 2), (3, 3), (4, 1)] {
        inventory::ActiveModel {
            inventory_id: Set(id),
            film_id: Set(film_id),
            store_id: Set(1),
            last_update: Set(now),
        }
        .insert(conn)
        .await
        .unwrap();
    }

    for (id, inventory_id, customer_id, rented, returned) in [
        // Film 2 has a 3 day rental period, so this is overdue at as_of
        (1, 2, 1, ts(2005, 7, 1), None),
        // Film 1 allows 6 days, due after as_of
        (2, 1, 2, ts(2005, 7, 30), None),
        (3, 3, 1, ts(2005, 6, 1), Some(ts(2005, 6, 5))),
    ] {
        rental::ActiveModel {
            rental_id: Set(id),
            rental_date: Set(rented),
            inventory_id: Set(inventory_id),
            customer_id: Set(customer_id),
            return_date: Set(returned),
            staff_id: Set(1),
            last_update: Set(now),
        }
        .insert(conn)
        .await
        .unwrap();
    }
}
