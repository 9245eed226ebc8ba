use sea_orm::{ActiveValue::Set, ConnectionTrait, entity::prelude::*, sea_query::StringLen};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "film_work")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub creation_date: Option<Date>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub rating: Option<f64>,
    #[sea_orm(column_type = "Text")]
    pub file_path: String,
    #[sea_orm(column_name = "type")]
    pub kind: FilmworkType,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(30))")]
pub enum FilmworkType {
    #[sea_orm(string_value = "movie")]
    Movie,
    #[sea_orm(string_value = "tv_show")]
    TvShow,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::genre_film_work::Entity")]
    GenreFilmWork,
    #[sea_orm(has_many = "super::person_film_work::Entity")]
    PersonFilmWork,
}

impl Related<super::genre_film_work::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GenreFilmWork.def()
    }
}

impl Related<super::person_film_work::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PersonFilmWork.def()
    }
}

impl Related<super::genre::Entity> for Entity {
    fn to() -> RelationDef {
        super::genre_film_work::Relation::Genre.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::genre_film_work::Relation::FilmWork.def().rev())
    }
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        super::person_film_work::Relation::Person.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::person_film_work::Relation::FilmWork.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Mirrors the database CHECK on rating so a bad value fails before
    /// reaching the driver, and keeps the timestamps current.
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let Set(Some(rating)) = &self.rating {
            if !(0.0..=100.0).contains(rating) {
                return Err(DbErr::Custom(format!("rating {rating} outside [0, 100]")));
            }
        }

        let now = chrono::Utc::now().fixed_offset();
        if insert {
            if self.id.is_not_set() {
                self.id = Set(Uuid::new_v4());
            }
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);
        Ok(self)
    }
}
