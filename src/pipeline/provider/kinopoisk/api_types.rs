use crate::pipeline::types::{Money, Named, NumLike};
use serde::Deserialize;

/// `GET /movie/{id}` response, reduced to the fields the record uses.
/// Unknown fields are ignored; every consumed field tolerates absence.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieResponse {
    pub name: Option<String>,
    #[serde(rename = "alternativeName")]
    pub alternative_name: Option<String>,
    #[serde(rename = "enName")]
    pub en_name: Option<String>,
    pub year: Option<i64>,
    pub description: Option<String>,
    #[serde(rename = "movieLength")]
    pub movie_length: Option<NumLike>,
    pub rating: Option<RatingBlock>,
    pub votes: Option<VotesBlock>,
    #[serde(default)]
    pub genres: Vec<Named>,
    #[serde(default)]
    pub countries: Vec<Named>,
    #[serde(default)]
    pub persons: Vec<Person>,
    pub budget: Option<Money>,
    pub fees: Option<Fees>,
    pub premiere: Option<Premiere>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RatingBlock {
    pub kp: Option<NumLike>,
    pub imdb: Option<NumLike>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VotesBlock {
    pub kp: Option<NumLike>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Fees {
    pub world: Option<Money>,
    pub russia: Option<Money>,
    pub usa: Option<Money>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Premiere {
    pub russia: Option<String>,
    pub world: Option<String>,
}

/// One entry of the primary payload's `persons` array. Professions come
/// as lowercase Russian/English free text only.
#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub id: Option<i64>,
    pub name: Option<String>,
    #[serde(rename = "enName")]
    pub en_name: Option<String>,
    pub profession: Option<String>,
    #[serde(rename = "enProfession")]
    pub en_profession: Option<String>,
}
