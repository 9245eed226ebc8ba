use sea_orm::{ActiveValue::Set, ConnectionTrait, entity::prelude::*, sea_query::StringLen};
use serde::{Deserialize, Serialize};

/// Join row for the Filmwork <-> Person many-to-many; a person may appear on
/// the same film work once per role, so (role, person_id, film_work_id) is
/// unique.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "person_film_work")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub film_work_id: Uuid,
    pub person_id: Uuid,
    pub role: PersonRole,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(15))")]
pub enum PersonRole {
    #[sea_orm(string_value = "actor")]
    Actor,
    #[sea_orm(string_value = "writer")]
    Writer,
    #[sea_orm(string_value = "director")]
    Director,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::film_work::Entity",
        from = "Column::FilmWorkId",
        to = "super::film_work::Column::Id",
        on_delete = "Cascade"
    )]
    FilmWork,
    #[sea_orm(
        belongs_to = "super::person::Entity",
        from = "Column::PersonId",
        to = "super::person::Column::Id",
        on_delete = "Cascade"
    )]
    Person,
}

impl Related<super::film_work::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmWork.def()
    }
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Person.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            if self.id.is_not_set() {
                self.id = Set(Uuid::new_v4());
            }
            self.created_at = Set(chrono::Utc::now().fixed_offset());
        }
        Ok(self)
    }
}
