//! Writing statistics of a run in the form `{PREFIX} {NAME}={VALUE}`.

mod statistic_logging;

pub use statistic_logging::configure_statistic_logging;
pub use statistic_logging::log_statistic;
pub use statistic_logging::log_statistic_postfix;
