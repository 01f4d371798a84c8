//! Overdue rentals report command

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use dvdstore_storage::{overdue_rentals, DatabaseConnection};
use tracing::info;

pub async fn overdue(db: &DatabaseConnection, as_of: Option<&str>, limit: u64) -> Result<()> {
    let as_of = parse_as_of(as_of)?;
    info!("Running overdue report as of {}", as_of);

    let rows = overdue_rentals(db.get_connection(), as_of, Some(limit)).await?;

    if rows.is_empty() {
        println!("No overdue rentals as of {}", as_of.to_rfc3339());
        return Ok(());
    }

    println!("Overdue rentals as of {}:", as_of.to_rfc3339());
    for row in &rows {
        println!(
            "  {:<12} {:<12} {:<15} {}",
            row.first_name, row.last_name, row.phone, row.title
        );
    }

    Ok(())
}

fn parse_as_of(as_of: Option<&str>) -> Result<DateTime<Utc>> {
    match as_of {
        Some(raw) => {
            let parsed = DateTime::parse_from_rfc3339(raw)
                .context("--as-of must be an RFC 3339 timestamp")?;
            Ok(parsed.with_timezone(&Utc))
        }
        None => Ok(Utc::now()),
    }
}
