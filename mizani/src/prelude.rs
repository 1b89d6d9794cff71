//! This module reimports commonly used types.

pub use crate::evolution::Evolution;
pub use crate::evolution::EvolutionConfig;
pub use crate::evolution::EvolutionConfigBuilder;
pub use crate::evolution::Individual;
pub use crate::evolution::SearchOutcome;
pub use crate::evolution::VariationOperator;

pub use crate::termination::CompositeTermination;
pub use crate::termination::MaxGeneration;
pub use crate::termination::MaxStagnation;
pub use crate::termination::MaxTime;
pub use crate::termination::SearchStatistics;
pub use crate::termination::Termination;

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::Quota;
pub use crate::utils::Random;
pub use crate::utils::TimeQuota;
pub use crate::utils::Timer;
