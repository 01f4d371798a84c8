//! Guided walk through the query layer

use anyhow::Result;
use chrono::Utc;
use dvdstore_storage::entities::film;
use dvdstore_storage::{
    overdue_rentals, ActorRepository, DatabaseConnection, FilmFilters, FilmPage, FilmRepository,
    InventoryFilters, InventoryPage, InventoryRepository,
};
use tracing::info;

pub async fn demo(
    db: &DatabaseConnection,
    actor_id: i32,
    released_on_or_after: i16,
    top: u64,
    inventory_below: i32,
) -> Result<()> {
    let actors = ActorRepository::new(db.clone());
    let films = FilmRepository::new(db.clone());
    let inventories = InventoryRepository::new(db.clone());

    info!("Looking up actor {}", actor_id);
    let actor = match actors.find_by_id(actor_id).await? {
        Some(actor) => actor,
        None => {
            println!("No actor with id {}", actor_id);
            return Ok(());
        }
    };
    println!("Actor {}: {}", actor.actor_id, actor.full_name());

    let filters = FilmFilters {
        released_on_or_after: Some(released_on_or_after),
        ..Default::default()
    };
    let page = FilmPage {
        limit: Some(top),
        order_by: Some(film::Column::Length),
        order_desc: true,
        ..Default::default()
    };

    let top_films = actors.films(&actor, &filters, &page).await?;
    println!(
        "\nLongest films with {} released {} or later:",
        actor.full_name(),
        released_on_or_after
    );
    for film in &top_films {
        println!(
            "  {:<30} {:>4} min  {}",
            film.title,
            film.length.unwrap_or(0),
            film.rating
                .map(|r| r.to_string())
                .unwrap_or_else(|| "unrated".to_string()),
        );
    }

    let total = films.count().await?;
    let matching = films.count_with_filters(&filters).await?;
    println!(
        "\n{} films in the catalog, {} released {} or later",
        total, matching, released_on_or_after
    );

    let inventory_filters = InventoryFilters {
        id_below: Some(inventory_below),
        ..Default::default()
    };
    let inventory_page = InventoryPage {
        limit: Some(5),
        order_by: Some(dvdstore_storage::entities::inventory::Column::InventoryId),
        order_desc: true,
        ..Default::default()
    };
    let stock = inventories
        .find_with_filters(&inventory_filters, &inventory_page)
        .await?;
    println!("\nNewest inventory below id {}:", inventory_below);
    for item in &stock {
        println!(
            "  inventory {} -> film {} (store {})",
            item.inventory_id, item.film_id, item.store_id
        );
    }

    let overdue = overdue_rentals(db.get_connection(), Utc::now(), Some(5)).await?;
    println!("\nOverdue rentals:");
    if overdue.is_empty() {
        println!("  none");
    }
    for row in &overdue {
        println!(
            "  {} {} ({}) still has {}",
            row.first_name, row.last_name, row.phone, row.title
        );
    }

    Ok(())
}
