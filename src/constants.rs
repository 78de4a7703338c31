//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers, fixed name lists and configuration
//! constants so the pipeline code stays free of embedded literals.

#![allow(dead_code)]

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Default settings for the api-basketball service
pub mod api {
    /// Base URL of the statistics service
    pub const DEFAULT_API_DOMAIN: &str = "https://api-basketball.p.rapidapi.com";

    /// Value for the `x-rapidapi-host` header
    pub const DEFAULT_API_HOST: &str = "api-basketball.p.rapidapi.com";
}

/// League and season resolution constants
pub mod leagues {
    /// League id for the NBA, the default league shown on the standings view
    pub const NBA: u32 = 12;

    /// Leagues whose seasons are expressed in the multi-year "YYYY-YYYY"
    /// format; everything else uses single-year "YYYY".
    pub const MULTI_YEAR_SEASON_LEAGUES: &[u32] = &[
        3, 6, 7, 12, 13, 14, 24, 25, 26, 29, 77, 111, 112, 121, 122, 123, 179, 181, 183, 189, 233,
        247, 306, 308, 314, 316, 317,
    ];

    /// Season strings probed in order until one yields a non-empty response.
    pub const SEASON_CANDIDATES: &[&str] = &[
        "2023-2024",
        "2023",
        "2022",
        "2022-2023",
        "2021-2022",
        "2020-2021",
        "2019",
        "2018-2019",
        "2018",
        "2017",
        "2016",
        "2014-2015",
    ];
}

/// Retry configuration
pub mod retry {
    /// Cooldown after a 429 before probing the next season candidate (seconds)
    pub const RATE_LIMIT_COOLDOWN_SECONDS: u64 = 60;
}

/// NBA conference membership, matched by substring against team names
pub mod conferences {
    pub const EASTERN_TEAM_NAMES: &[&str] = &[
        "Celtics", "Nets", "Knicks", "76ers", "Raptors", "Bulls", "Cavaliers", "Pistons", "Heat",
        "Magic", "Hawks", "Hornets", "Pacers", "Wizards",
    ];

    pub const WESTERN_TEAM_NAMES: &[&str] = &[
        "Thunder",
        "Mavericks",
        "Nuggets",
        "Warriors",
        "Rockets",
        "Clippers",
        "Lakers",
        "Trail Blazers",
        "Suns",
        "Grizzlies",
        "Kings",
        "Pelicans",
        "Jazz",
        "Timberwolves",
    ];
}

/// Country/league names hidden from team listings. Exact-match denylist
/// carried over from the product's curation list.
pub const DENIED_COUNTRY_NAMES: &[&str] = &[
    "Albania",
    "Asia",
    "Bosnia Women",
    "China",
    "Republica Checa Women",
    "Europe Women League",
    "Cup Finlandia",
    "Grecia Cup Women",
    "Japão B2",
    "Cazaquistão Higher",
    "Cazaquistão Women",
    "Kosovo Women",
    "Líbano",
    "África do Sul",
    "Taiwan P League",
    "Taiwan T1 League",
    "Reino Unido Women",
    "Prvenstvo BiH Women",
    "Czech Cup Women",
    "Suomen Cup",
    "Suomen Cup Women",
    "Greek Cup Women",
    "B2.League",
    "Higher League",
    "National League Women",
    "Division 1",
    "South American League",
    "Betty Codona Trophy Women",
    "P.League+",
    "Taiwan",
    "World",
];

/// Environment variable names
pub mod env_vars {
    /// Environment variable for the RapidAPI key override
    pub const API_KEY: &str = "COURTSIDE_API_KEY";

    /// Environment variable for the RapidAPI host override
    pub const API_HOST: &str = "COURTSIDE_API_HOST";

    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "COURTSIDE_API_DOMAIN";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "COURTSIDE_LOG_FILE";

    /// Environment variable for HTTP timeout in seconds (default: 30)
    pub const HTTP_TIMEOUT: &str = "COURTSIDE_HTTP_TIMEOUT";
}
