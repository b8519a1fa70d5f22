use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Inclusive number range, written as `[min, max]` in data files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 2]", into = "[u8; 2]")]
pub struct NumberRange {
    pub min: u8,
    pub max: u8,
}

impl NumberRange {
    pub fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, number: u8) -> bool {
        number >= self.min && number <= self.max
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> {
        self.min..=self.max
    }

    pub fn len(&self) -> usize {
        if self.max < self.min {
            0
        } else {
            (self.max - self.min) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<[u8; 2]> for NumberRange {
    fn from([min, max]: [u8; 2]) -> Self {
        Self { min, max }
    }
}

impl From<NumberRange> for [u8; 2] {
    fn from(range: NumberRange) -> Self {
        [range.min, range.max]
    }
}

/// Static description of a supported game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDefinition {
    pub id: String,
    #[serde(rename(serialize = "displayName"))]
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename(serialize = "regularNumberRange"))]
    pub regular_number_range: NumberRange,
    #[serde(rename(serialize = "specialBallRange"))]
    pub special_ball_range: NumberRange,
    #[serde(rename(serialize = "regularNumberCount"))]
    pub regular_number_count: u8,
    #[serde(rename(serialize = "specialBallDisplayName"))]
    pub special_ball_display_name: String,
    #[serde(rename(serialize = "multiplierDisplayName"), default)]
    pub multiplier_display_name: Option<String>,
    /// Available multiplier factors, empty when the game has none
    #[serde(default)]
    pub multipliers: Vec<u8>,
    #[serde(rename(serialize = "drawDays"), default)]
    pub draw_days: Option<String>,
    #[serde(rename(serialize = "ticketPrice"), default)]
    pub ticket_price: Option<String>,
    #[serde(rename(serialize = "overallOdds"), default)]
    pub overall_odds: Option<String>,
    #[serde(rename(serialize = "prizeTiers"), default)]
    pub prize_tiers: Vec<PrizeTier>,
    #[serde(rename(serialize = "smartPicks"), default, skip_serializing)]
    pub smart_picks: Vec<PredictedCombination>,
}

/// One row of a game's prize matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrizeTier {
    pub matched: u8,
    #[serde(rename(serialize = "specialBall"))]
    pub special_ball: bool,
    pub odds: String,
    pub prize: String,
    /// Keyed by factor label, e.g. `x2`
    #[serde(rename(serialize = "multiplierPrizes"), default)]
    pub multiplier_prizes: BTreeMap<String, String>,
}

impl PrizeTier {
    /// Render the tier as "4 + Mega Ball" or "4"
    pub fn label(&self, special_ball_name: &str) -> String {
        if self.special_ball {
            format!("{} + {}", self.matched, special_ball_name)
        } else {
            self.matched.to_string()
        }
    }
}

/// A single historical draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    #[serde(rename = "drawDate", with = "draw_date_format")]
    pub draw_date: NaiveDate,
    #[serde(rename = "regularNumbers")]
    pub regular_numbers: Vec<u8>,
    #[serde(rename = "specialBall")]
    pub special_ball: u8,
    #[serde(default)]
    pub multiplier: Option<u8>,
    #[serde(rename = "jackpot", alias = "jackpotAmount")]
    pub jackpot_amount: String,
}

/// Serde adapter for the `DD/MM/YYYY` dates used by the draw dataset
pub mod draw_date_format {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%d/%m/%Y";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Which ball pool a number belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Pool {
    #[default]
    Regular,
    Special,
}

/// Occurrence counts per number, every in-range number present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTally {
    pub regular: BTreeMap<u8, u32>,
    pub special: BTreeMap<u8, u32>,
    #[serde(rename = "totalDraws")]
    pub total_draws: usize,
}

impl FrequencyTally {
    pub fn pool(&self, pool: Pool) -> &BTreeMap<u8, u32> {
        match pool {
            Pool::Regular => &self.regular,
            Pool::Special => &self.special,
        }
    }
}

/// Display row for one number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberFrequency {
    pub number: u8,
    pub count: u32,
    pub percentage: f64,
    /// Draws elapsed since the number last appeared, `None` if never seen
    #[serde(rename = "drawsSinceSeen")]
    pub draws_since_seen: Option<usize>,
}

/// Frequency tally expanded into per-number rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyReport {
    #[serde(rename = "gameId")]
    pub game_id: String,
    #[serde(rename = "totalDraws")]
    pub total_draws: usize,
    pub regular: Vec<NumberFrequency>,
    pub special: Vec<NumberFrequency>,
}

impl FrequencyReport {
    pub fn pool(&self, pool: Pool) -> &[NumberFrequency] {
        match pool {
            Pool::Regular => &self.regular,
            Pool::Special => &self.special,
        }
    }
}

/// Ticket submitted for checking, discarded after the check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTicket {
    pub chosen_numbers: Vec<u8>,
    pub chosen_special_ball: u8,
    pub target_draw_date: NaiveDate,
}

impl UserTicket {
    pub fn new(chosen_numbers: Vec<u8>, chosen_special_ball: u8, target_draw_date: NaiveDate) -> Self {
        Self {
            chosen_numbers,
            chosen_special_ball,
            target_draw_date,
        }
    }

    /// Chosen numbers with duplicates removed
    pub fn distinct_numbers(&self) -> BTreeSet<u8> {
        self.chosen_numbers.iter().copied().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchOutcome {
    #[serde(rename = "matchedRegularCount")]
    pub matched_regular_count: u8,
    #[serde(rename = "specialBallMatched")]
    pub special_ball_matched: bool,
    #[serde(rename = "referenceDraw")]
    pub reference_draw: DrawResult,
}

/// Result of a ticket check; a missing draw is not the same as zero matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Matched(MatchOutcome),
    NotFound { draw_date: NaiveDate },
}

/// Decorative label attached to Smart Pick combinations. Carries no
/// statistical meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub const ALL: [Confidence; 3] = [Confidence::High, Confidence::Medium, Confidence::Low];
}

/// Precomputed Smart Pick combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictedCombination {
    pub numbers: Vec<u8>,
    #[serde(rename = "specialBall", alias = "special_ball")]
    pub special_ball: u8,
    #[serde(default)]
    pub confidence: Option<Confidence>,
}
