use kinoteka::{catalog::Catalog, config::Config, db, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let config = Config::from_env()?;
    let db = db::connect_and_migrate(&config.database_url).await?;
    let catalog = Catalog::new(db);

    let counts = catalog.counts().await?;
    tracing::info!(
        film_works = counts.film_works,
        genres = counts.genres,
        people = counts.people,
        "catalog schema ready"
    );

    Ok(())
}
