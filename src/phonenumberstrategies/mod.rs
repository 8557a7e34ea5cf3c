mod helper_constants;
mod helper_functions;
mod metadata_source;
pub mod enums;
pub mod errors;
pub mod helper_types;
pub mod region_registry;
pub mod strategies;

use std::sync::{Arc, LazyLock};

pub use enums::PhoneNumberFormat;
use region_registry::RegionRegistry;

/// Registry over the bundled libphonenumber metadata, built on first use.
pub static PHONE_NUMBER_REGISTRY: LazyLock<Arc<RegionRegistry>> = LazyLock::new(|| {
    Arc::new(RegionRegistry::new())
});
