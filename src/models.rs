use chrono::NaiveDate;
use serde::Serialize;

use crate::entities::{film_work, film_work::FilmworkType, genre, person, person_film_work::PersonRole};

/// Input shape for creating a film work; ids and timestamps are filled in by
/// the persistence layer.
#[derive(Clone, Debug)]
pub struct NewFilmwork {
    pub title: String,
    pub creation_date: Option<NaiveDate>,
    pub description: String,
    pub rating: Option<f64>,
    pub file_path: String,
    pub kind: FilmworkType,
}

#[derive(Clone, Debug, Serialize)]
pub struct Credit {
    pub role: PersonRole,
    pub person: person::Model,
}

/// A film work together with everything reachable through its join tables.
#[derive(Clone, Debug, Serialize)]
pub struct FilmworkDetails {
    pub film_work: film_work::Model,
    pub genres: Vec<genre::Model>,
    pub credits: Vec<Credit>,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct CatalogCounts {
    pub film_works: u64,
    pub genres: u64,
    pub people: u64,
}
