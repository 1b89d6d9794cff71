//! The routing module generates alternative route candidates for a corridor and ranks
//! them with a priority-weighted, temporally adjusted score.

mod generator;
pub use self::generator::generate_candidates;

mod scorer;
pub use self::scorer::{score_route, select_optimal, Departure};
