mod interfaces;
mod phonenumberstrategies;
mod generator_cache;
mod regexp_cache;
mod regex_based_matcher;
pub mod i18n;
pub(crate) mod regex_util;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use interfaces::{MatcherApi, MetadataSource};
pub use phonenumberstrategies::{
    PHONE_NUMBER_REGISTRY,
    enums::{Inclusion, Notation, NumberFormatKind, PhoneNumberFormat},
    errors::{FormatError, InvalidArgument},
    helper_types::{GeneratedPhoneNumber, PhoneNumberRegion, RegionMetadata, RegionalNamedFormat},
    region_registry::RegionRegistry,
    strategies::{
        NationalNumberStrategy, PhoneNumberStrategy, PhoneNumberStrategyBuilder,
        invalid_national_number, phone_number,
    },
};
