//! Canonical film record: a fixed-key ordered mapping from display label
//! to display-ready string, assembled once per successful fetch.

use super::extract::{extract_boxoffice, extract_premieres};
use super::format::{MISSING, format_duration, format_vote_count};
use super::provider::kinopoisk::api_types::MovieResponse;
use super::types::{Named, NumLike};

/// The fixed, ordered key set of a fully assembled record
pub const RECORD_KEYS: [&str; 16] = [
    "Название (RU)",
    "Оригинальное название",
    "Год",
    "Жанры",
    "Страна",
    "Рейтинг IMDB",
    "Рейтинг Кинопоиска",
    "Кол-во голосов КП",
    "Описание",
    "Продолжительность (мин)",
    "Бюджет",
    "Касса (мир)",
    "Касса (РФ)",
    "Касса (США)",
    "Премьера в РФ",
    "Премьера мировая",
];

/// Ordered label → value mapping. Every value is a formatted string or
/// `"-"`; no key from [`RECORD_KEYS`] is ever absent.
#[derive(Debug, Clone)]
pub struct FilmRecord {
    rows: Vec<(&'static str, String)>,
}

impl FilmRecord {
    pub fn rows(&self) -> &[(&'static str, String)] {
        &self.rows
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Empty and missing scalars collapse to the sentinel
fn safe(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => MISSING.to_string(),
    }
}

/// Comma-join a list of genre/country values of either shape
fn join_named(items: &[Named]) -> String {
    if items.is_empty() {
        return MISSING.to_string();
    }
    items
        .iter()
        .map(Named::name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// KP rating rounded to one decimal when numeric, passed through
/// unchanged when it is non-numeric text, `"-"` when absent
fn round_rating(value: Option<&NumLike>) -> String {
    let Some(value) = value else {
        return MISSING.to_string();
    };

    match value {
        NumLike::Int(0) => MISSING.to_string(),
        NumLike::Float(f) if *f == 0.0 => MISSING.to_string(),
        NumLike::Text(t) if t.is_empty() || t == MISSING => MISSING.to_string(),
        _ => match value.as_float() {
            Some(rating) => format!("{rating:.1}"),
            None => value.to_string(),
        },
    }
}

/// Build the canonical record from the primary payload
pub fn assemble(movie: &MovieResponse) -> FilmRecord {
    let original_title = movie
        .alternative_name
        .as_deref()
        .filter(|t| !t.is_empty())
        .or(movie.en_name.as_deref());

    let (rating_kp, rating_imdb) = match &movie.rating {
        Some(rating) => (
            round_rating(rating.kp.as_ref()),
            safe(rating.imdb.as_ref().map(|v| v.to_string()).as_deref()),
        ),
        None => (MISSING.to_string(), MISSING.to_string()),
    };

    let votes_kp = match &movie.votes {
        Some(votes) => format_vote_count(votes.kp.as_ref()),
        None => MISSING.to_string(),
    };

    let boxoffice = extract_boxoffice(movie);
    let (premiere_russia, premiere_world) = extract_premieres(movie);

    let rows = vec![
        ("Название (RU)", safe(movie.name.as_deref())),
        ("Оригинальное название", safe(original_title)),
        ("Год", safe(movie.year.map(|y| y.to_string()).as_deref())),
        ("Жанры", join_named(&movie.genres)),
        ("Страна", join_named(&movie.countries)),
        ("Рейтинг IMDB", rating_imdb),
        ("Рейтинг Кинопоиска", rating_kp),
        ("Кол-во голосов КП", votes_kp),
        ("Описание", safe(movie.description.as_deref())),
        (
            "Продолжительность (мин)",
            format_duration(movie.movie_length.as_ref()),
        ),
        ("Бюджет", boxoffice.budget.unwrap_or_else(|| MISSING.into())),
        (
            "Касса (мир)",
            boxoffice.world.unwrap_or_else(|| MISSING.into()),
        ),
        (
            "Касса (РФ)",
            boxoffice.russia.unwrap_or_else(|| MISSING.into()),
        ),
        (
            "Касса (США)",
            boxoffice.usa.unwrap_or_else(|| MISSING.into()),
        ),
        ("Премьера в РФ", premiere_russia),
        ("Премьера мировая", premiere_world),
    ];

    debug_assert!(
        rows.iter().map(|(k, _)| *k).eq(RECORD_KEYS),
        "record keys drifted from RECORD_KEYS"
    );

    FilmRecord { rows }
}
