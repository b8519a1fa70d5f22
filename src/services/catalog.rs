use crate::config::DataSettings;
use crate::core::prizes::multiplier_key;
use crate::models::{DrawResult, GameDefinition};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use thiserror::Error;

const BUNDLED_GAMES: &str = include_str!("../../data/games.toml");
const BUNDLED_DRAWS: &str = include_str!("../../data/draws.json");

/// Errors raised while loading or querying the catalog
///
/// Everything except `UnknownGame` is a configuration error and is fatal at
/// startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid game catalog: {0}")]
    GamesFormat(#[from] toml::de::Error),

    #[error("Invalid draw history: {0}")]
    DrawsFormat(#[from] serde_json::Error),

    #[error("Invalid game definition '{game}': {reason}")]
    InvalidGame { game: String, reason: String },

    #[error("Invalid draw for '{game}' on {date}: {reason}")]
    InvalidDraw {
        game: String,
        date: NaiveDate,
        reason: String,
    },

    #[error("Invalid data settings: {0}")]
    InvalidSettings(String),

    #[error("Unknown game: {0}")]
    UnknownGame(String),
}

#[derive(Debug, Deserialize)]
struct GamesFile {
    games: Vec<GameDefinition>,
}

/// Read-only store of game definitions and their draw history
///
/// Draws are kept newest first. Built once at startup and shared behind an
/// `Arc`; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct LotteryCatalog {
    games: Vec<GameDefinition>,
    draws: BTreeMap<String, Vec<DrawResult>>,
}

impl LotteryCatalog {
    /// Build a catalog, validating every game and draw
    pub fn new(
        games: Vec<GameDefinition>,
        mut draws: BTreeMap<String, Vec<DrawResult>>,
    ) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        for game in &games {
            validate_game(game)?;
            if !ids.insert(game.id.as_str()) {
                return Err(CatalogError::InvalidGame {
                    game: game.id.clone(),
                    reason: "duplicate game id".to_string(),
                });
            }
        }

        if let Some(unknown) = draws.keys().find(|id| !ids.contains(id.as_str())) {
            return Err(CatalogError::UnknownGame(unknown.clone()));
        }

        for game in &games {
            let history = draws.entry(game.id.clone()).or_default();
            validate_draws(game, history)?;
            history.sort_by(|a, b| b.draw_date.cmp(&a.draw_date));
        }

        tracing::debug!(
            "Catalog built: {} games, {} draws",
            games.len(),
            draws.values().map(Vec::len).sum::<usize>()
        );

        Ok(Self { games, draws })
    }

    /// Parse a TOML game catalog and a JSON draw history
    pub fn from_sources(games_toml: &str, draws_json: &str) -> Result<Self, CatalogError> {
        let games: GamesFile = toml::from_str(games_toml)?;
        let draws: BTreeMap<String, Vec<DrawResult>> = serde_json::from_str(draws_json)?;
        Self::new(games.games, draws)
    }

    /// Load the catalog from files on disk
    pub fn from_paths<P: AsRef<Path>, Q: AsRef<Path>>(games_path: P, draws_path: Q) -> Result<Self, CatalogError> {
        let games = read_file(games_path.as_ref())?;
        let draws = read_file(draws_path.as_ref())?;
        Self::from_sources(&games, &draws)
    }

    /// Dataset compiled into the binary
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_sources(BUNDLED_GAMES, BUNDLED_DRAWS)
    }

    /// Load from the configured paths, or the bundled dataset when none are set
    pub fn from_settings(settings: &DataSettings) -> Result<Self, CatalogError> {
        match (&settings.games_path, &settings.draws_path) {
            (Some(games), Some(draws)) => {
                tracing::info!("Loading dataset from {} and {}", games, draws);
                Self::from_paths(games, draws)
            }
            (None, None) => {
                tracing::info!("Using bundled dataset");
                Self::bundled()
            }
            _ => Err(CatalogError::InvalidSettings(
                "data.games_path and data.draws_path must be set together".to_string(),
            )),
        }
    }

    pub fn games(&self) -> &[GameDefinition] {
        &self.games
    }

    pub fn game(&self, id: &str) -> Result<&GameDefinition, CatalogError> {
        self.games
            .iter()
            .find(|g| g.id == id)
            .ok_or_else(|| CatalogError::UnknownGame(id.to_string()))
    }

    /// Full history for a game, newest first
    pub fn draws(&self, id: &str) -> Result<&[DrawResult], CatalogError> {
        self.game(id)?;
        Ok(self.draws.get(id).map(Vec::as_slice).unwrap_or_default())
    }

    pub fn recent_draws(&self, id: &str, limit: usize) -> Result<&[DrawResult], CatalogError> {
        let draws = self.draws(id)?;
        Ok(&draws[..limit.min(draws.len())])
    }

    pub fn latest_draw(&self, id: &str) -> Result<Option<&DrawResult>, CatalogError> {
        Ok(self.draws(id)?.first())
    }

    pub fn draw_on(&self, id: &str, date: NaiveDate) -> Result<Option<&DrawResult>, CatalogError> {
        Ok(self.draws(id)?.iter().find(|d| d.draw_date == date))
    }
}

fn read_file(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn validate_game(game: &GameDefinition) -> Result<(), CatalogError> {
    let invalid = |reason: &str| CatalogError::InvalidGame {
        game: game.id.clone(),
        reason: reason.to_string(),
    };

    if game.id.is_empty() {
        return Err(invalid("empty id"));
    }
    if game.regular_number_range.is_empty() || game.regular_number_range.min == 0 {
        return Err(invalid("regular number range must start at 1 or above and be non-empty"));
    }
    if game.special_ball_range.is_empty() || game.special_ball_range.min == 0 {
        return Err(invalid("special ball range must start at 1 or above and be non-empty"));
    }
    if game.regular_number_count == 0 || game.regular_number_count as usize > game.regular_number_range.len() {
        return Err(invalid("regular number count does not fit the range"));
    }

    let factors: HashSet<String> = game.multipliers.iter().map(|&f| multiplier_key(f)).collect();
    for tier in &game.prize_tiers {
        if tier.matched > game.regular_number_count {
            return Err(invalid("prize tier requires more matches than numbers drawn"));
        }
        if tier.multiplier_prizes.keys().any(|key| !factors.contains(key)) {
            return Err(invalid("multiplier prize keyed by a factor the game does not offer"));
        }
    }

    for pick in &game.smart_picks {
        if !fits_game(&pick.numbers, pick.special_ball, game) {
            return Err(invalid("smart pick combination does not fit the game rules"));
        }
    }

    Ok(())
}

fn validate_draws(game: &GameDefinition, draws: &[DrawResult]) -> Result<(), CatalogError> {
    let mut dates = HashSet::new();
    for draw in draws {
        let invalid = |reason: &str| CatalogError::InvalidDraw {
            game: game.id.clone(),
            date: draw.draw_date,
            reason: reason.to_string(),
        };

        if !dates.insert(draw.draw_date) {
            return Err(invalid("duplicate draw date"));
        }
        if !fits_game(&draw.regular_numbers, draw.special_ball, game) {
            return Err(invalid("numbers do not fit the game rules"));
        }
    }
    Ok(())
}

/// Right count of distinct numbers, all within their ranges
fn fits_game(numbers: &[u8], special_ball: u8, game: &GameDefinition) -> bool {
    let distinct: HashSet<u8> = numbers.iter().copied().collect();
    distinct.len() == numbers.len()
        && numbers.len() == game.regular_number_count as usize
        && numbers.iter().all(|&n| game.regular_number_range.contains(n))
        && game.special_ball_range.contains(special_ball)
}
