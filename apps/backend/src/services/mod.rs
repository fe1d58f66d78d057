//! Domain services: validation and orchestration over the repos.

pub mod games;
pub mod players;
pub mod score_ledger;

pub use games::GameService;
pub use players::PlayerService;
pub use score_ledger::ScoreLedgerService;
