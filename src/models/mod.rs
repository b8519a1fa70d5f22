// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CheckOutcome, Confidence, DrawResult, FrequencyReport, FrequencyTally, GameDefinition, MatchOutcome,
    NumberFrequency, NumberRange, Pool, PredictedCombination, PrizeTier, UserTicket,
};
pub use requests::{CheckTicketRequest, HotColdQuery, ResultsQuery, SmartPickRequest};
pub use responses::{
    CheckTicketResponse, ErrorResponse, FrequencyResponse, GamesResponse, HealthResponse, HotColdResponse,
    PrizeAward, PrizeMatrixResponse, PrizeRow, ResultsResponse, SmartPickResponse,
};
