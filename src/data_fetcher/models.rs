use serde::{Deserialize, Serialize};

/// Country a team belongs to, as reported by the teams endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Country {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

/// A team record from the `/teams` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub country: Option<Country>,
}

impl Team {
    /// Country name, or an empty string when the payload omits it.
    pub fn country_name(&self) -> &str {
        self.country
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .unwrap_or("")
    }
}

/// Team as embedded in a standings entry. The standings payload does not
/// always carry an id, so identity falls back to the name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsTeam {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
}

/// Win or loss totals inside a standings record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameTotals {
    #[serde(default)]
    pub total: u32,
}

/// Win/loss record for a standings entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GamesRecord {
    #[serde(default)]
    pub win: GameTotals,
    #[serde(default)]
    pub lose: GameTotals,
}

/// One row of a standings table: team plus its season record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsEntry {
    #[serde(default)]
    pub position: Option<u32>,
    pub team: StandingsTeam,
    #[serde(default)]
    pub games: GamesRecord,
}

/// Envelope for the `/standings` endpoint. The service nests the standings
/// array one level deep: `response[0]` holds the rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsResponse {
    #[serde(default)]
    pub response: Vec<Vec<StandingsEntry>>,
}

impl StandingsResponse {
    /// Flattens the envelope into the standings rows. An absent or empty
    /// outer array is a valid empty result, not an error.
    pub fn into_entries(self) -> Vec<StandingsEntry> {
        self.response.into_iter().next().unwrap_or_default()
    }
}

/// Envelope for the `/teams` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamsResponse {
    #[serde(default)]
    pub response: Vec<Team>,
}
