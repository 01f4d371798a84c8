use crate::connection::DatabaseConnection;
use crate::entities::{Actor, Actors, Film, Films};
use crate::error::StorageResult;
use async_trait::async_trait;
use sea_orm::{EntityTrait, ModelTrait, PaginatorTrait, Select};

use super::film_repository::{apply_film_filters, apply_film_page, FilmFilters, FilmPage};

/// Repository for actor queries
#[derive(Clone)]
pub struct ActorRepository {
    db: DatabaseConnection,
}

impl ActorRepository {
    /// Create a new actor repository
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Find an actor by primary key; a missing row is `Ok(None)`
    pub async fn find_by_id(&self, id: i32) -> StorageResult<Option<Actor>> {
        let actor = Actors::find_by_id(id).one(self.db.get_connection()).await?;
        Ok(actor)
    }

    /// Count all actors
    pub async fn count(&self) -> StorageResult<u64> {
        let count = Actors::find().count(self.db.get_connection()).await?;
        Ok(count)
    }

    /// Films for an actor through the declared many-to-many relationship
    pub async fn films(
        &self,
        actor: &Actor,
        filters: &FilmFilters,
        page: &FilmPage,
    ) -> StorageResult<Vec<Film>> {
        let films = select_films(actor, filters, page)
            .all(self.db.get_connection())
            .await?;
        Ok(films)
    }
}

/// Build the declared-relationship variant of "films for an actor"
pub(crate) fn select_films(actor: &Actor, filters: &FilmFilters, page: &FilmPage) -> Select<Films> {
    let query = actor.find_related(Films);
    apply_film_page(apply_film_filters(query, filters), page)
}

#[async_trait(?Send)]
impl super::Repository for ActorRepository {
    async fn health_check(&self) -> StorageResult<()> {
        self.count().await?;
        Ok(())
    }
}
