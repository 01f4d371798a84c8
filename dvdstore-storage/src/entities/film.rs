use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use sea_orm::{ActiveValue, ConnectionTrait};
use serde::{Deserialize, Serialize};

/// Lowest release year the schema accepts
pub const RELEASE_YEAR_MIN: i16 = 1901;
/// Highest release year the schema accepts
pub const RELEASE_YEAR_MAX: i16 = 2155;

/// MPAA rating enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(5))")]
pub enum MpaaRating {
    #[sea_orm(string_value = "G")]
    G,
    #[sea_orm(string_value = "PG")]
    Pg,
    #[sea_orm(string_value = "PG-13")]
    Pg13,
    #[sea_orm(string_value = "R")]
    R,
    #[sea_orm(string_value = "NC-17")]
    Nc17,
}

impl std::fmt::Display for MpaaRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MpaaRating::G => "G",
            MpaaRating::Pg => "PG",
            MpaaRating::Pg13 => "PG-13",
            MpaaRating::R => "R",
            MpaaRating::Nc17 => "NC-17",
        };
        f.write_str(label)
    }
}

/// Film entity, one row per title in the catalog
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "film")]
pub struct Model {
    /// Primary key
    #[sea_orm(primary_key)]
    pub film_id: i32,

    /// Film title
    pub title: String,

    /// Synopsis
    pub description: Option<String>,

    /// Release year, bounded [1901, 2155]
    pub release_year: Option<i16>,

    /// Rental period in days
    pub rental_duration: i16,

    /// Rental price per period
    #[sea_orm(column_type = "Decimal(Some((4, 2)))")]
    pub rental_rate: Decimal,

    /// Running time in minutes
    pub length: Option<i16>,

    /// MPAA rating
    pub rating: Option<MpaaRating>,

    /// Comma-separated feature list (trailers, commentaries, ...)
    pub special_features: Option<String>,

    /// Row last-update timestamp
    pub last_update: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::inventory::Entity")]
    Inventory,
}

impl Related<super::inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inventory.def()
    }
}

/// Many-to-many to Actor through the film_actor join table
impl Related<super::actor::Entity> for Entity {
    fn to() -> RelationDef {
        super::film_actor::Relation::Actor.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::film_actor::Relation::Film.def().rev())
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Reject out-of-range release years instead of letting the database
    /// clamp or truncate them
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        match &self.release_year {
            ActiveValue::Set(Some(year)) | ActiveValue::Unchanged(Some(year)) => {
                validate_release_year(*year)?;
            }
            _ => {}
        }
        Ok(self)
    }
}

/// Validate a release year against the schema's bounds
pub fn validate_release_year(year: i16) -> Result<(), DbErr> {
    if !(RELEASE_YEAR_MIN..=RELEASE_YEAR_MAX).contains(&year) {
        return Err(DbErr::Custom(format!(
            "release_year {} outside valid range [{}, {}]",
            year, RELEASE_YEAR_MIN, RELEASE_YEAR_MAX
        )));
    }
    Ok(())
}

impl Model {
    /// The special features as a list
    pub fn special_feature_list(&self) -> Vec<String> {
        self.special_features
            .as_deref()
            .map(|features| {
                features
                    .split(',')
                    .map(|f| f.trim().to_string())
                    .filter(|f| !f.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}
