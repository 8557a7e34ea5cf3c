use crate::phonenumberstrategies::helper_types::RegionMetadata;

/// Source of numbering-plan metadata the region registry is built from.
///
/// Isolates the underlying database so the registry can be populated from
/// the bundled libphonenumber data or from a hand-written fixture.
pub trait MetadataSource {
    /// Returns one entry per `(country calling code, region code)` pair, in
    /// the order regions should be enumerated.
    fn region_metadata(&self) -> Vec<RegionMetadata>;
}

/// Internal phonenumber matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub trait MatcherApi {
    /// Returns whether the given national number (a string containing only decimal
    /// digits) fully matches the given national number pattern.
    fn match_national_number(&self, number: &str, national_number_pattern: &str) -> bool;
}
