mod database_tests;
mod fixture_metadata;

use log::LevelFilter;

/// Every test binary shares one logger, so later calls are no-ops.
pub(crate) fn init_logger() {
    let _ = colog::default_builder()
        .filter_level(LevelFilter::Trace)
        .is_test(true)
        .try_init();
}
