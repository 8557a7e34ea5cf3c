// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{
    borrow::Cow,
    collections::{BTreeSet, HashMap, HashSet},
    fmt,
};

use log::{trace, warn};
use proptest::strategy::SBoxedStrategy;

use crate::{
    generator_cache::GeneratorCache,
    interfaces::{MatcherApi, MetadataSource},
    regex_based_matcher::RegexBasedMatcher,
    string_util::remove_whitespace,
};

use super::{
    enums::NumberFormatKind,
    errors::InvalidArgument,
    helper_functions::generator_pattern,
    helper_types::{PhoneNumberRegion, RegionMetadata, RegionalNamedFormat},
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, InvalidArgument>;

/// Every region of a numbering plan database with the national number
/// patterns of its named formats.
pub struct RegionRegistry {
    /// All `(country calling code, region code)` pairs in source order.
    regions: Vec<PhoneNumberRegion>,

    /// A mapping from a region to everything known about it.
    region_to_metadata_map: HashMap<PhoneNumberRegion, RegionMetadata>,

    /// Every pattern of every region, flattened.
    number_formats: Vec<RegionalNamedFormat>,

    /// Regions able to produce numbers of a named format.
    availability_lists: HashMap<NumberFormatKind, Vec<PhoneNumberRegion>>,

    country_codes: HashSet<u16>,
    region_codes: HashSet<String>,

    /// An API for validation checking.
    matcher_api: Box<dyn MatcherApi + Send + Sync>,

    generators: GeneratorCache,
}

impl RegionRegistry {
    /// Builds the registry from the bundled libphonenumber metadata.
    pub fn new() -> Self {
        Self::from_source(&*phonenumber::metadata::DATABASE)
    }

    pub fn from_source(source: &dyn MetadataSource) -> Self {
        let mut instance = Self {
            regions: Default::default(),
            region_to_metadata_map: Default::default(),
            number_formats: Default::default(),
            availability_lists: Default::default(),
            country_codes: Default::default(),
            region_codes: Default::default(),
            matcher_api: Box::new(RegexBasedMatcher::new()),
            generators: GeneratorCache::with_capacity(512),
        };

        for mut metadata in source.region_metadata() {
            let region = metadata.region.clone();
            for pattern in metadata.patterns.values_mut() {
                if let Cow::Owned(stripped) = remove_whitespace(pattern) {
                    *pattern = stripped;
                }
            }
            if instance.region_to_metadata_map.contains_key(&region) {
                trace!("Skipping duplicate metadata for region {}", region);
                continue;
            }
            for (kind, pattern) in &metadata.patterns {
                instance
                    .availability_lists
                    .entry(*kind)
                    .or_default()
                    .push(region.clone());
                instance.number_formats.push(RegionalNamedFormat {
                    region: region.clone(),
                    format_name: *kind,
                    format_regex: pattern.clone(),
                });
            }
            instance.country_codes.insert(region.country_code);
            instance.region_codes.insert(region.region_code.clone());
            instance.regions.push(region.clone());
            instance.region_to_metadata_map.insert(region, metadata);
        }
        trace!(
            "Region registry holds {} regions and {} number formats",
            instance.regions.len(),
            instance.number_formats.len()
        );
        instance
    }

    pub fn regions(&self) -> &[PhoneNumberRegion] {
        &self.regions
    }

    pub fn contains(&self, region: &PhoneNumberRegion) -> bool {
        self.region_to_metadata_map.contains_key(region)
    }

    pub fn region_metadata(&self, region: &PhoneNumberRegion) -> Option<&RegionMetadata> {
        self.region_to_metadata_map.get(region).or_else(|| {
            warn!("Invalid or unknown region provided: {}", region);
            None
        })
    }

    pub fn number_formats(&self) -> &[RegionalNamedFormat] {
        &self.number_formats
    }

    /// Regions that have a pattern for the named format.
    pub fn regions_with_format(&self, kind: NumberFormatKind) -> &[PhoneNumberRegion] {
        self.availability_lists
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Keeps the regions passing every requested check.
    ///
    /// `has_national_trunk_prefix` set to `Some(true)` keeps regions with a
    /// trunk prefix, `Some(false)` keeps regions without one and `None`
    /// does not look at it. Every format in `required_number_formats` must
    /// be available in a kept region. Unknown regions are dropped.
    pub fn region_filter(
        &self,
        regions_to_filter: Option<&[PhoneNumberRegion]>,
        has_national_trunk_prefix: Option<bool>,
        required_number_formats: &[NumberFormatKind],
    ) -> Vec<PhoneNumberRegion> {
        regions_to_filter
            .unwrap_or(&self.regions)
            .iter()
            .filter(|region| {
                let Some(metadata) = self.region_metadata(region) else {
                    return false;
                };
                let prefix_check = has_national_trunk_prefix
                    .is_none_or(|wanted| metadata.has_national_prefix() == wanted);
                prefix_check && required_number_formats.iter().all(|kind| metadata.has_format(*kind))
            })
            .cloned()
            .collect()
    }

    /// Finds the regions served by the given country calling codes, or the
    /// regions with the given region codes. Without either all regions are
    /// returned.
    pub fn region_finder(
        &self,
        country_codes: Option<&[u16]>,
        region_codes: Option<&[&str]>,
    ) -> Result<Vec<PhoneNumberRegion>> {
        match (country_codes, region_codes) {
            (Some(_), Some(_)) => Err(InvalidArgument::BothCountryAndRegionCodes),
            (Some(country_codes), None) => {
                if let Some(unknown) = country_codes
                    .iter()
                    .find(|code| !self.country_codes.contains(*code))
                {
                    return Err(InvalidArgument::InvalidCountryCode(*unknown));
                }
                Ok(self
                    .regions
                    .iter()
                    .filter(|region| country_codes.contains(&region.country_code))
                    .cloned()
                    .collect())
            }
            (None, Some(region_codes)) => {
                let region_codes = region_codes
                    .iter()
                    .map(|code| code.to_ascii_uppercase())
                    .collect::<Vec<_>>();
                if let Some(unknown) = region_codes
                    .iter()
                    .find(|code| !self.region_codes.contains(code.as_str()))
                {
                    return Err(InvalidArgument::InvalidRegionCode(unknown.clone()));
                }
                Ok(self
                    .regions
                    .iter()
                    .filter(|region| region_codes.contains(&region.region_code))
                    .cloned()
                    .collect())
            }
            (None, None) => Ok(self.regions.clone()),
        }
    }

    /// Union of the named formats available across the regions.
    pub fn named_number_formats_from_regions<'a>(
        &self,
        regions: impl IntoIterator<Item = &'a PhoneNumberRegion>,
    ) -> BTreeSet<NumberFormatKind> {
        regions
            .into_iter()
            .filter_map(|region| self.region_metadata(region))
            .flat_map(|metadata| metadata.patterns.keys().copied())
            .collect()
    }

    /// Checks that the national number fully matches the region's pattern
    /// for the named format. Missing patterns never match.
    pub fn matches_format(
        &self,
        region: &PhoneNumberRegion,
        kind: NumberFormatKind,
        national_number: &str,
    ) -> bool {
        self.region_metadata(region)
            .and_then(|metadata| metadata.patterns.get(&kind))
            .is_some_and(|pattern| self.matcher_api.match_national_number(national_number, pattern))
    }

    /// Returns a generator of national numbers for the region's named
    /// format, drawing ASCII digits only.
    pub fn generator_for(
        &self,
        region: &PhoneNumberRegion,
        kind: NumberFormatKind,
    ) -> Result<SBoxedStrategy<String>> {
        let metadata = self
            .region_metadata(region)
            .ok_or_else(|| InvalidArgument::InvalidRegion(region.clone()))?;
        let pattern = metadata
            .patterns
            .get(&kind)
            .ok_or(InvalidArgument::NoAvailableFormats)?;
        self.generator_for_pattern(&generator_pattern(pattern))
    }

    pub(crate) fn generator_for_pattern(&self, pattern: &str) -> Result<SBoxedStrategy<String>> {
        self.generators.get_generator(pattern)
    }
}

impl fmt::Debug for RegionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegionRegistry")
            .field("regions", &self.regions.len())
            .field("number_formats", &self.number_formats.len())
            .field("cached_generators", &self.generators.len())
            .finish_non_exhaustive()
    }
}

impl Default for RegionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
