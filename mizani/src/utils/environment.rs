use crate::utils::{DefaultRandom, Float, Random, Timer};
use std::sync::Arc;

/// Specifies a computational quota for search algorithms.
pub trait Quota: Send + Sync {
    /// Returns true when the quota is reached.
    fn is_reached(&self) -> bool;
}

/// A quota limited by wall-clock time.
pub struct TimeQuota {
    timer: Timer,
    limit_in_secs: Float,
}

impl TimeQuota {
    /// Creates a new instance of `TimeQuota`, starting the clock immediately.
    pub fn new(limit_in_secs: Float) -> Self {
        Self { timer: Timer::start(), limit_in_secs }
    }
}

impl Quota for TimeQuota {
    fn is_reached(&self) -> bool {
        self.timer.elapsed_secs_as_float() > self.limit_in_secs
    }
}

/// Specifies a logging function type.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
pub struct Environment {
    /// A random generator.
    pub random: Arc<dyn Random>,
    /// A computational quota, optional.
    pub quota: Option<Arc<dyn Quota>>,
    /// A logging function.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(random: Arc<dyn Random>, quota: Option<Arc<dyn Quota>>, logger: InfoLogger) -> Self {
        Self { random, quota, logger }
    }

    /// Creates a new instance of `Environment` with a seeded random generator,
    /// useful to get reproducible results.
    pub fn with_seed(seed: u64) -> Self {
        Self { random: Arc::new(DefaultRandom::with_seed(seed)), ..Self::default() }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(DefaultRandom::default()), None, Arc::new(|msg: &str| println!("{msg}")))
    }
}
