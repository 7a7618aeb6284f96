//! Pulls nested boxoffice and premiere sub-objects out of the primary
//! payload and runs them through the field formatters.

use super::format::{MISSING, format_date, format_money};
use super::provider::kinopoisk::api_types::MovieResponse;

/// Formatted boxoffice figures. Keys the payload does not carry stay
/// `None`; the assembler substitutes the sentinel, not the extractor.
#[derive(Debug, Clone, Default)]
pub struct Boxoffice {
    pub budget: Option<String>,
    pub world: Option<String>,
    pub russia: Option<String>,
    pub usa: Option<String>,
}

pub fn extract_boxoffice(movie: &MovieResponse) -> Boxoffice {
    let mut result = Boxoffice {
        budget: movie.budget.as_ref().map(|m| format_money(Some(m))),
        ..Default::default()
    };

    if let Some(fees) = &movie.fees {
        result.world = fees.world.as_ref().map(|m| format_money(Some(m)));
        result.russia = fees.russia.as_ref().map(|m| format_money(Some(m)));
        result.usa = fees.usa.as_ref().map(|m| format_money(Some(m)));
    }

    result
}

/// Returns `(domestic premiere, world premiere)`, both defaulting to `"-"`
pub fn extract_premieres(movie: &MovieResponse) -> (String, String) {
    let mut russia = MISSING.to_string();
    let mut world = MISSING.to_string();

    if let Some(premiere) = &movie.premiere {
        if let Some(date) = &premiere.russia {
            russia = format_date(date);
        }
        if let Some(date) = &premiere.world {
            world = format_date(date);
        }
    }

    (russia, world)
}
