use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter,
};
use uuid::Uuid;

use crate::{
    entities::{film_work, genre, genre_film_work, person, person_film_work},
    error::{AppError, AppResult},
    models::{CatalogCounts, Credit, FilmworkDetails, NewFilmwork},
};

/// Persistence operations over the catalog schema. All writes go through the
/// active models so the lifecycle hooks (ids, timestamps, rating bounds) run.
#[derive(Clone)]
pub struct Catalog {
    db: DatabaseConnection,
}

impl Catalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn add_genre(&self, name: &str, description: &str) -> AppResult<genre::Model> {
        let model = genre::ActiveModel {
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            ..Default::default()
        };
        Ok(model.insert(&self.db).await?)
    }

    pub async fn add_person(&self, full_name: &str) -> AppResult<person::Model> {
        let model = person::ActiveModel {
            full_name: Set(full_name.to_string()),
            ..Default::default()
        };
        Ok(model.insert(&self.db).await?)
    }

    pub async fn add_film_work(&self, new: NewFilmwork) -> AppResult<film_work::Model> {
        let model = film_work::ActiveModel {
            title: Set(new.title),
            creation_date: Set(new.creation_date),
            description: Set(new.description),
            rating: Set(new.rating),
            file_path: Set(new.file_path),
            kind: Set(new.kind),
            ..Default::default()
        };
        Ok(model.insert(&self.db).await?)
    }

    pub async fn update_rating(
        &self,
        film_work_id: Uuid,
        rating: Option<f64>,
    ) -> AppResult<film_work::Model> {
        let film = film_work::Entity::find_by_id(film_work_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| {
                AppError::Db(DbErr::RecordNotFound(format!("film_work {film_work_id}")))
            })?;

        let mut model: film_work::ActiveModel = film.into();
        model.rating = Set(rating);
        Ok(model.update(&self.db).await?)
    }

    /// Duplicate (genre, film_work) pairs are rejected by the unique index
    /// and surface as a database error.
    pub async fn assign_genre(
        &self,
        film_work_id: Uuid,
        genre_id: Uuid,
    ) -> AppResult<genre_film_work::Model> {
        let link = genre_film_work::ActiveModel {
            film_work_id: Set(film_work_id),
            genre_id: Set(genre_id),
            ..Default::default()
        };
        Ok(link.insert(&self.db).await?)
    }

    /// Duplicate (role, person, film_work) triples are rejected by the unique
    /// index; the same person may be linked again under a different role.
    pub async fn assign_person(
        &self,
        film_work_id: Uuid,
        person_id: Uuid,
        role: person_film_work::PersonRole,
    ) -> AppResult<person_film_work::Model> {
        let link = person_film_work::ActiveModel {
            film_work_id: Set(film_work_id),
            person_id: Set(person_id),
            role: Set(role),
            ..Default::default()
        };
        Ok(link.insert(&self.db).await?)
    }

    pub async fn film_work(&self, id: Uuid) -> AppResult<Option<film_work::Model>> {
        Ok(film_work::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn film_work_details(&self, id: Uuid) -> AppResult<Option<FilmworkDetails>> {
        let Some(film) = film_work::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let genres = film.find_related(genre::Entity).all(&self.db).await?;

        let links = person_film_work::Entity::find()
            .filter(person_film_work::Column::FilmWorkId.eq(id))
            .find_also_related(person::Entity)
            .all(&self.db)
            .await?;

        let credits = links
            .into_iter()
            .filter_map(|(link, person)| person.map(|p| Credit { role: link.role, person: p }))
            .collect();

        Ok(Some(FilmworkDetails { film_work: film, genres, credits }))
    }

    pub async fn remove_film_work(&self, id: Uuid) -> AppResult<u64> {
        let res = film_work::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected)
    }

    pub async fn counts(&self) -> AppResult<CatalogCounts> {
        Ok(CatalogCounts {
            film_works: film_work::Entity::find().count(&self.db).await?,
            genres: genre::Entity::find().count(&self.db).await?,
            people: person::Entity::find().count(&self.db).await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::NaiveDate;

    use super::*;
    use crate::{
        db,
        entities::{film_work::FilmworkType, person_film_work::PersonRole},
    };

    async fn setup() -> Catalog {
        let db = db::connect_and_migrate("sqlite::memory:").await.expect("init db");
        Catalog::new(db)
    }

    fn sample_film(title: &str, rating: Option<f64>) -> NewFilmwork {
        NewFilmwork {
            title: title.to_string(),
            creation_date: NaiveDate::from_ymd_opt(1999, 3, 31),
            description: "a hacker discovers the truth".to_string(),
            rating,
            file_path: String::new(),
            kind: FilmworkType::Movie,
        }
    }

    #[tokio::test]
    async fn film_work_round_trip_with_relations() {
        let catalog = setup().await;

        let film = catalog.add_film_work(sample_film("The Matrix", Some(87.0))).await.expect("film");
        let scifi = catalog.add_genre("Sci-Fi", "").await.expect("genre");
        let action = catalog.add_genre("Action", "").await.expect("genre");
        let keanu = catalog.add_person("Keanu Reeves").await.expect("person");

        catalog.assign_genre(film.id, scifi.id).await.expect("link genre");
        catalog.assign_genre(film.id, action.id).await.expect("link genre");
        catalog.assign_person(film.id, keanu.id, PersonRole::Actor).await.expect("link person");

        let details =
            catalog.film_work_details(film.id).await.expect("query").expect("details present");
        assert_eq!(details.film_work.title, "The Matrix");
        assert_eq!(details.film_work.kind, FilmworkType::Movie);
        assert_eq!(details.genres.len(), 2);
        assert_eq!(details.credits.len(), 1);
        assert_eq!(details.credits[0].role, PersonRole::Actor);
        assert_eq!(details.credits[0].person.full_name, "Keanu Reeves");
    }

    #[tokio::test]
    async fn missing_film_work_has_no_details() {
        let catalog = setup().await;
        let details = catalog.film_work_details(Uuid::new_v4()).await.expect("query");
        assert!(details.is_none());
    }

    #[tokio::test]
    async fn rating_outside_bounds_is_rejected() {
        let catalog = setup().await;
        let err = catalog.add_film_work(sample_film("Bad", Some(100.5))).await.unwrap_err();
        assert!(err.to_string().contains("outside [0, 100]"));

        let err = catalog.add_film_work(sample_film("Worse", Some(-1.0))).await.unwrap_err();
        assert!(err.to_string().contains("outside [0, 100]"));
    }

    #[tokio::test]
    async fn rating_bounds_are_inclusive_and_optional() {
        let catalog = setup().await;
        catalog.add_film_work(sample_film("Floor", Some(0.0))).await.expect("rating 0");
        catalog.add_film_work(sample_film("Ceiling", Some(100.0))).await.expect("rating 100");
        let unrated = catalog.add_film_work(sample_film("Unrated", None)).await.expect("no rating");
        assert!(unrated.rating.is_none());
    }

    #[tokio::test]
    async fn update_rating_revalidates_and_touches_updated_at() {
        let catalog = setup().await;
        let film = catalog.add_film_work(sample_film("Film", Some(50.0))).await.expect("film");

        tokio::time::sleep(Duration::from_millis(10)).await;

        let updated = catalog.update_rating(film.id, Some(75.0)).await.expect("update");
        assert_eq!(updated.rating, Some(75.0));
        assert_eq!(updated.created_at, film.created_at);
        assert!(updated.updated_at > film.updated_at);

        let err = catalog.update_rating(film.id, Some(101.0)).await.unwrap_err();
        assert!(err.to_string().contains("outside [0, 100]"));
    }

    #[tokio::test]
    async fn duplicate_genre_link_is_rejected() {
        let catalog = setup().await;
        let film = catalog.add_film_work(sample_film("Film", None)).await.expect("film");
        let genre = catalog.add_genre("Drama", "").await.expect("genre");

        catalog.assign_genre(film.id, genre.id).await.expect("first link");
        let err = catalog.assign_genre(film.id, genre.id).await.unwrap_err();
        assert!(err.is_unique_violation());
    }

    #[tokio::test]
    async fn same_person_may_hold_multiple_roles() {
        let catalog = setup().await;
        let film = catalog.add_film_work(sample_film("Film", None)).await.expect("film");
        let person = catalog.add_person("Clint Eastwood").await.expect("person");

        catalog.assign_person(film.id, person.id, PersonRole::Actor).await.expect("actor");
        catalog.assign_person(film.id, person.id, PersonRole::Director).await.expect("director");

        let err =
            catalog.assign_person(film.id, person.id, PersonRole::Director).await.unwrap_err();
        assert!(err.is_unique_violation());

        let details =
            catalog.film_work_details(film.id).await.expect("query").expect("details present");
        assert_eq!(details.credits.len(), 2);
    }

    #[tokio::test]
    async fn deleting_film_work_cascades_to_links() {
        let catalog = setup().await;
        let film = catalog.add_film_work(sample_film("Film", None)).await.expect("film");
        let genre = catalog.add_genre("Horror", "").await.expect("genre");
        let person = catalog.add_person("Someone").await.expect("person");

        catalog.assign_genre(film.id, genre.id).await.expect("link genre");
        catalog.assign_person(film.id, person.id, PersonRole::Writer).await.expect("link person");

        let removed = catalog.remove_film_work(film.id).await.expect("delete");
        assert_eq!(removed, 1);

        let genre_links =
            genre_film_work::Entity::find().count(catalog.db()).await.expect("count");
        let person_links =
            person_film_work::Entity::find().count(catalog.db()).await.expect("count");
        assert_eq!(genre_links, 0);
        assert_eq!(person_links, 0);

        // the referenced rows themselves survive
        let counts = catalog.counts().await.expect("counts");
        assert_eq!(counts.film_works, 0);
        assert_eq!(counts.genres, 1);
        assert_eq!(counts.people, 1);
    }

    #[tokio::test]
    async fn timestamps_are_set_on_insert() {
        let catalog = setup().await;
        let genre = catalog.add_genre("Comedy", "funny ones").await.expect("genre");
        assert_eq!(genre.created_at, genre.updated_at);
        assert!(!genre.id.is_nil());
    }
}
