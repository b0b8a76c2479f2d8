pub mod rate;
pub mod summary;

pub use rate::CriticalRate;
pub use summary::SummaryStatistics;
