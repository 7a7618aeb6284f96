//! Per-fetch session state: one record, one cast list, one source label.
//!
//! A session is created by one fetch-assemble cycle and replaced wholesale
//! by the next; exports recompute their tables from it on demand. No
//! ambient global state, no sharing across concurrent fetches.

use super::cast::{CastEntry, CastOrigin, CastResolver, PrimaryCast};
use super::provider::{KinopoiskProvider, UnofficialProvider};
use super::record::{FilmRecord, assemble};
use super::Result;
use tracing::info;

pub struct Session {
    pub film_id: String,
    pub record: FilmRecord,
    pub cast: Vec<CastEntry>,
    pub cast_origin: CastOrigin,
}

impl Session {
    /// Run one full fetch-then-assemble cycle.
    ///
    /// The primary fetch is fatal on failure. The secondary source, when a
    /// credential is supplied, is queried first for the cast and awaited in
    /// full before the primary fallback path is considered; its failures
    /// are absorbed by the resolver.
    pub async fn fetch(
        film_id: &str,
        api_key: &str,
        unofficial_api_key: Option<&str>,
    ) -> Result<Self> {
        let primary = KinopoiskProvider::new(api_key)?;
        let movie = primary.get_movie(film_id).await?;

        let record = assemble(&movie);

        let mut resolver = CastResolver::new();
        if let Some(key) = unofficial_api_key {
            resolver.add_source(UnofficialProvider::new(key)?);
        }
        resolver.add_source(PrimaryCast::new(movie.persons.clone()));

        let (cast, cast_origin) = resolver.resolve(film_id).await;
        info!(
            "Film {film_id}: {} cast entries from {} source",
            cast.len(),
            cast_origin
        );

        Ok(Self {
            film_id: film_id.to_string(),
            record,
            cast,
            cast_origin,
        })
    }
}
