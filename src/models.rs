use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// Serde structs, field names follow the API's JSON
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Team {
    #[serde(rename = "nome", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "gols", deserialize_with = "null_as_default")]
    pub goals: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Match {
    #[serde(rename = "data", deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(rename = "mandante", deserialize_with = "null_as_default")]
    pub home: Team,
    #[serde(rename = "visitante", deserialize_with = "null_as_default")]
    pub away: Team,
    #[serde(rename = "placar", deserialize_with = "null_as_default")]
    pub score: String,
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {} {}", self.date, self.home.name, self.score, self.away.name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Round {
    #[serde(rename = "ano", deserialize_with = "text_or_number")]
    pub year: String,
    #[serde(rename = "rodada", deserialize_with = "text_or_number")]
    pub number: String,
    /// Kept in server order.
    #[serde(rename = "jogos", deserialize_with = "null_as_default")]
    pub matches: Vec<Match>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Champion {
    #[serde(rename = "ano", deserialize_with = "text_or_number")]
    pub year: String,
    /// Empty while the season is undecided.
    #[serde(rename = "campeao", deserialize_with = "null_as_default")]
    pub team: String,
}

impl Champion {
    pub fn is_decided(&self) -> bool {
        !self.team.is_empty()
    }
}

/// Body of every non-2xx response.
// `erro` is required, a body without it counts as an unknown server error
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(rename = "erro")]
    pub message: String,
}

// null reads as the zero value, same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// `ano` and `rodada` come from URL path segments, some servers echo them back as numbers
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(i64),
    }

    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(text)) => text,
        Some(TextOrNumber::Number(number)) => number.to_string(),
        None => String::new(),
    })
}
