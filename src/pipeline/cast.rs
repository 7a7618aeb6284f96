//! Cast/crew resolution: two-source fallback with profession filtering.
//!
//! Sources form a priority chain. Each source returns its already-filtered
//! entries; the first source yielding anything wins outright and later
//! sources are never consulted. Source failures are downgraded to "no data"
//! and logged, never escalated.

use super::Result;
use super::provider::kinopoisk::api_types::Person;
use super::provider::unofficial::api_types::StaffMember;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Free-text profession categories removed from the cast output.
/// Matched case-insensitively as substrings.
pub const EXCLUDED_PROFESSION_TEXT: &[&str] = &[
    "монтажер",
    "монтажёр",
    "художник",
    "editor",
    "artist",
    "звукорежиссёр",
    "звукооператор",
    "costume designer",
    "art director",
    "set decorator",
];

/// Machine profession keys excluded on the unofficial source.
/// Matched exactly, uppercase.
pub const EXCLUDED_PROFESSION_KEYS: &[&str] = &["EDITOR", "DESIGN", "PRODUCER_USSR"];

/// One cast/crew member surviving profession filtering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastEntry {
    pub name: String,
    pub external_id: Option<String>,
}

impl CastEntry {
    pub fn new(name: impl Into<String>, external_id: Option<String>) -> Self {
        Self {
            name: name.into(),
            external_id,
        }
    }

    /// String-encoded intermediate form: `"name;id"`, or just the name
    /// when no id is known.
    pub fn to_line(&self) -> String {
        match &self.external_id {
            Some(id) => format!("{};{}", self.name, id),
            None => self.name.clone(),
        }
    }

    /// Parse the intermediate form, splitting on the first semicolon only
    /// so names containing semicolons are never mis-split.
    pub fn from_line(line: &str) -> Self {
        match line.split_once(';') {
            Some((name, id)) => Self {
                name: name.trim().to_string(),
                external_id: Some(id.trim().to_string()),
            },
            None => Self {
                name: line.trim().to_string(),
                external_id: None,
            },
        }
    }
}

/// Which source produced the cast list, kept for display and audit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastOrigin {
    Primary,
    Unofficial,
}

impl std::fmt::Display for CastOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Unofficial => write!(f, "unofficial"),
        }
    }
}

/// Substring check against the free-text exclusion list, case-insensitive
fn text_is_excluded(profession: &str) -> bool {
    let lowered = profession.to_lowercase();
    EXCLUDED_PROFESSION_TEXT
        .iter()
        .any(|term| lowered.contains(term))
}

/// Exact uppercase match against the machine-key exclusion list
fn key_is_excluded(key: &str) -> bool {
    let upper = key.to_uppercase();
    EXCLUDED_PROFESSION_KEYS.iter().any(|k| *k == upper)
}

/// Filter one unofficial-source staff array down to cast entries.
///
/// Persons without any usable name are skipped entirely, unlike the
/// primary path which substitutes a placeholder.
pub fn filter_unofficial_staff(staff: &[StaffMember]) -> Vec<CastEntry> {
    let mut cast = Vec::new();

    for member in staff {
        if let Some(key) = &member.profession_key
            && key_is_excluded(key)
        {
            continue;
        }
        if let Some(text) = &member.profession_text
            && text_is_excluded(text)
        {
            continue;
        }

        let name = member
            .name_ru
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .or_else(|| {
                member
                    .name_en
                    .as_deref()
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
            });
        let Some(name) = name else {
            continue;
        };

        // A zero id means "no id", same as an absent one
        cast.push(CastEntry::new(
            name,
            member
                .staff_id
                .filter(|id| *id != 0)
                .map(|id| id.to_string()),
        ));
    }

    cast
}

/// Filter the primary payload's `persons` array down to cast entries.
///
/// Nameless persons get the `"-"` placeholder instead of being dropped.
pub fn filter_primary_persons(persons: &[Person]) -> Vec<CastEntry> {
    let mut cast = Vec::new();

    for person in persons {
        let excluded = person
            .profession
            .as_deref()
            .is_some_and(text_is_excluded)
            || person
                .en_profession
                .as_deref()
                .is_some_and(text_is_excluded);
        if excluded {
            continue;
        }

        let name = person
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(person.en_name.as_deref().filter(|n| !n.is_empty()))
            .unwrap_or("-");

        cast.push(CastEntry::new(
            name,
            person.id.filter(|id| *id != 0).map(|id| id.to_string()),
        ));
    }

    cast
}

/// One link of the cast priority chain
#[async_trait]
pub trait CastSource: Send + Sync {
    /// Which label the resolver attaches to this source's output
    fn origin(&self) -> CastOrigin;

    /// Fetch and filter this source's cast list
    async fn fetch_cast(&self, film_id: &str) -> Result<Vec<CastEntry>>;
}

/// Terminal chain link backed by the already-fetched primary payload
pub struct PrimaryCast {
    persons: Vec<Person>,
}

impl PrimaryCast {
    pub fn new(persons: Vec<Person>) -> Self {
        Self { persons }
    }
}

#[async_trait]
impl CastSource for PrimaryCast {
    fn origin(&self) -> CastOrigin {
        CastOrigin::Primary
    }

    async fn fetch_cast(&self, _film_id: &str) -> Result<Vec<CastEntry>> {
        Ok(filter_primary_persons(&self.persons))
    }
}

/// Ordered cast source chain: first non-empty filtered result wins
#[derive(Default)]
pub struct CastResolver {
    sources: Vec<Box<dyn CastSource>>,
}

impl CastResolver {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Append a source; earlier sources take priority
    pub fn add_source<S: CastSource + 'static>(&mut self, source: S) {
        self.sources.push(Box::new(source));
    }

    /// Walk the chain in order. Errors count as "no data from that
    /// source"; when every source comes back empty, the last source's
    /// empty result and origin are returned.
    pub async fn resolve(&self, film_id: &str) -> (Vec<CastEntry>, CastOrigin) {
        let mut last = (Vec::new(), CastOrigin::Primary);

        for source in &self.sources {
            match source.fetch_cast(film_id).await {
                Ok(cast) if !cast.is_empty() => {
                    debug!(
                        "Cast source {} returned {} entries",
                        source.origin(),
                        cast.len()
                    );
                    return (cast, source.origin());
                }
                Ok(_) => {
                    debug!("Cast source {} returned no usable entries", source.origin());
                    last = (Vec::new(), source.origin());
                }
                Err(e) => {
                    debug!("Cast source {} failed: {e}", source.origin());
                }
            }
        }

        last
    }
}
