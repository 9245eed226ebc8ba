use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Genre::Table)
                    .if_not_exists()
                    .col(uuid(Genre::Id).primary_key())
                    .col(string(Genre::Name))
                    .col(text(Genre::Description))
                    .col(timestamp_with_time_zone(Genre::CreatedAt))
                    .col(timestamp_with_time_zone(Genre::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .if_not_exists()
                    .col(uuid(Person::Id).primary_key())
                    .col(string(Person::FullName))
                    .col(timestamp_with_time_zone(Person::CreatedAt))
                    .col(timestamp_with_time_zone(Person::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FilmWork::Table)
                    .if_not_exists()
                    .col(uuid(FilmWork::Id).primary_key())
                    .col(string(FilmWork::Title))
                    .col(date_null(FilmWork::CreationDate))
                    .col(text(FilmWork::Description))
                    .col(double_null(FilmWork::Rating).check(
                        Expr::col(FilmWork::Rating)
                            .gte(0.0)
                            .and(Expr::col(FilmWork::Rating).lte(100.0)),
                    ))
                    .col(text(FilmWork::FilePath))
                    .col(string_len(FilmWork::Type, 30))
                    .col(timestamp_with_time_zone(FilmWork::CreatedAt))
                    .col(timestamp_with_time_zone(FilmWork::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GenreFilmWork::Table)
                    .if_not_exists()
                    .col(uuid(GenreFilmWork::Id).primary_key())
                    .col(uuid(GenreFilmWork::FilmWorkId))
                    .col(uuid(GenreFilmWork::GenreId))
                    .col(timestamp_with_time_zone(GenreFilmWork::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_genre_film_work_film_work")
                            .from(GenreFilmWork::Table, GenreFilmWork::FilmWorkId)
                            .to(FilmWork::Table, FilmWork::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_genre_film_work_genre")
                            .from(GenreFilmWork::Table, GenreFilmWork::GenreId)
                            .to(Genre::Table, Genre::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_genre_film_work_unique")
                    .table(GenreFilmWork::Table)
                    .col(GenreFilmWork::GenreId)
                    .col(GenreFilmWork::FilmWorkId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_genre_film_work_film_work")
                    .table(GenreFilmWork::Table)
                    .col(GenreFilmWork::FilmWorkId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PersonFilmWork::Table)
                    .if_not_exists()
                    .col(uuid(PersonFilmWork::Id).primary_key())
                    .col(uuid(PersonFilmWork::FilmWorkId))
                    .col(uuid(PersonFilmWork::PersonId))
                    .col(string_len(PersonFilmWork::Role, 15))
                    .col(timestamp_with_time_zone(PersonFilmWork::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_person_film_work_film_work")
                            .from(PersonFilmWork::Table, PersonFilmWork::FilmWorkId)
                            .to(FilmWork::Table, FilmWork::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_person_film_work_person")
                            .from(PersonFilmWork::Table, PersonFilmWork::PersonId)
                            .to(Person::Table, Person::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_person_film_work_unique")
                    .table(PersonFilmWork::Table)
                    .col(PersonFilmWork::Role)
                    .col(PersonFilmWork::PersonId)
                    .col(PersonFilmWork::FilmWorkId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_person_film_work_film_work")
                    .table(PersonFilmWork::Table)
                    .col(PersonFilmWork::FilmWorkId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PersonFilmWork::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(GenreFilmWork::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(FilmWork::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Person::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Genre::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Genre {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Person {
    Table,
    Id,
    FullName,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum FilmWork {
    Table,
    Id,
    Title,
    CreationDate,
    Description,
    Rating,
    FilePath,
    Type,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum GenreFilmWork {
    Table,
    Id,
    FilmWorkId,
    GenreId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PersonFilmWork {
    Table,
    Id,
    FilmWorkId,
    PersonId,
    Role,
    CreatedAt,
}
