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

//! Strategies generating phone numbers from numbering plan metadata.
//!
//! National trunk prefixes are not a feature of every region, and regions
//! vary in the number formats they define (many have no shared cost
//! numbers, for instance). Each feature is therefore controlled by an
//! [`Inclusion`]: `Require` keeps it in the output *and* limits the search
//! space to regions able to produce it, `Allow` produces it where available
//! without limiting regions, `Exclude` keeps it out of the output.

use std::{collections::BTreeMap, sync::Arc};

use log::{trace, warn};
use proptest::{
    sample::select,
    strategy::{BoxedStrategy, Map, NewTree, SBoxedStrategy, Strategy, ValueTree},
    test_runner::TestRunner,
};
use strum::IntoEnumIterator;

use super::{
    PHONE_NUMBER_REGISTRY,
    enums::{Inclusion, Notation, NumberFormatKind, PhoneNumberFormat},
    errors::InvalidArgument,
    helper_constants::{ASCII_DIGIT_CLASS, MAX_LENGTH_FOR_NSN},
    helper_types::{GeneratedPhoneNumber, PhoneNumberRegion},
    region_registry::{RegionRegistry, Result},
};

#[derive(Debug, Clone)]
struct FormatCandidate {
    kind: NumberFormatKind,
    generator: SBoxedStrategy<String>,
}

#[derive(Debug, Clone)]
struct RegionCandidate {
    region: PhoneNumberRegion,
    national_prefix: Option<String>,
    formats: Vec<FormatCandidate>,
    notations: Vec<Notation>,
}

/// Options of a [`PhoneNumberStrategy`].
///
/// Every number format and the local and international notations are
/// allowed by default; the trunk prefix notation is used wherever the
/// region has one.
#[derive(Debug, Clone)]
pub struct PhoneNumberStrategyBuilder {
    registry: Arc<RegionRegistry>,
    regions: Option<Vec<PhoneNumberRegion>>,
    number_formats: BTreeMap<NumberFormatKind, Inclusion>,
    /// E.123 international notation, `+` followed by the country code.
    international_prefix: Inclusion,
    /// The national (trunk) prefix dialled before an area code, `0` in
    /// most regions.
    national_prefix: Inclusion,
    /// Bare national numbers without any prefix.
    local_number: Inclusion,
}

impl PhoneNumberStrategyBuilder {
    fn new(registry: Arc<RegionRegistry>) -> Self {
        Self {
            registry,
            regions: None,
            number_formats: BTreeMap::new(),
            international_prefix: Inclusion::Allow,
            national_prefix: Inclusion::Allow,
            local_number: Inclusion::Allow,
        }
    }

    /// Limits generation to these regions. Each must be known to the registry.
    pub fn regions<R: Into<PhoneNumberRegion>>(mut self, regions: impl IntoIterator<Item = R>) -> Self {
        self.regions = Some(regions.into_iter().map(Into::into).collect());
        self
    }

    /// Generates only the given formats, excluding every other.
    pub fn number_formats(mut self, kinds: impl IntoIterator<Item = NumberFormatKind>) -> Self {
        self.number_formats = NumberFormatKind::iter()
            .map(|kind| (kind, Inclusion::Exclude))
            .collect();
        for kind in kinds {
            self.number_formats.insert(kind, Inclusion::Allow);
        }
        self
    }

    pub fn number_format(mut self, kind: NumberFormatKind, inclusion: Inclusion) -> Self {
        self.number_formats.insert(kind, inclusion);
        self
    }

    /// `Allow` and `Require` both put `+<country code>` numbers in the output.
    pub fn international_prefix(mut self, inclusion: Inclusion) -> Self {
        self.international_prefix = inclusion;
        self
    }

    pub fn national_prefix(mut self, inclusion: Inclusion) -> Self {
        self.national_prefix = inclusion;
        self
    }

    /// `Allow` and `Require` both put bare national numbers in the output.
    pub fn local_number(mut self, inclusion: Inclusion) -> Self {
        self.local_number = inclusion;
        self
    }

    fn inclusion_of(&self, kind: NumberFormatKind) -> Inclusion {
        self.number_formats.get(&kind).copied().unwrap_or_default()
    }

    fn notation_enabled(&self, notation: Notation, has_national_prefix: bool) -> bool {
        match notation {
            Notation::International => self.international_prefix.is_enabled(),
            Notation::NationalTrunk => self.national_prefix.is_enabled() && has_national_prefix,
            Notation::Local => self.local_number.is_enabled(),
        }
    }

    pub fn build(self) -> Result<PhoneNumberStrategy> {
        if !self.international_prefix.is_enabled()
            && !self.national_prefix.is_enabled()
            && !self.local_number.is_enabled()
        {
            return Err(InvalidArgument::NoNotationsEnabled);
        }

        let regions = match &self.regions {
            Some(regions) => {
                if let Some(unknown) = regions.iter().find(|region| !self.registry.contains(region)) {
                    return Err(InvalidArgument::InvalidRegion(unknown.clone()));
                }
                regions.clone()
            }
            None => self.registry.regions().to_vec(),
        };

        let required_formats = NumberFormatKind::iter()
            .filter(|kind| self.inclusion_of(*kind) == Inclusion::Require)
            .collect::<Vec<_>>();
        // A trunk prefix is needed either on request or when it is the only
        // notation left.
        let trunk_prefix_required = self.national_prefix == Inclusion::Require
            || (!self.international_prefix.is_enabled() && !self.local_number.is_enabled());
        let regions = self.registry.region_filter(
            Some(regions.as_slice()),
            trunk_prefix_required.then_some(true),
            &required_formats,
        );

        let mut candidates = Vec::with_capacity(regions.len());
        for region in regions {
            let Some(metadata) = self.registry.region_metadata(&region) else {
                continue;
            };
            let mut formats = Vec::new();
            for kind in metadata.patterns.keys().copied() {
                if !self.inclusion_of(kind).is_enabled() {
                    continue;
                }
                match self.registry.generator_for(&region, kind) {
                    Ok(generator) => formats.push(FormatCandidate { kind, generator }),
                    Err(err) => warn!("Skipping {} numbers of {}: {}", kind, region, err),
                }
            }
            let has_required = required_formats
                .iter()
                .all(|required| formats.iter().any(|format| format.kind == *required));
            let notations = Notation::iter()
                .filter(|notation| self.notation_enabled(*notation, metadata.has_national_prefix()))
                .collect::<Vec<_>>();

            if formats.is_empty() || notations.is_empty() || !has_required {
                trace!("Region {} can not produce the requested numbers", region);
                continue;
            }
            candidates.push(RegionCandidate {
                region,
                national_prefix: metadata.national_prefix.clone(),
                formats,
                notations,
            });
        }

        if candidates.is_empty() {
            return Err(InvalidArgument::NoAvailableFormats);
        }
        trace!("Phone number strategy draws from {} regions", candidates.len());
        Ok(PhoneNumberStrategy::from_candidates(self.registry, candidates))
    }
}

/// Generates [`GeneratedPhoneNumber`]s.
///
/// A draw selects a region, then one of the region's selected number
/// formats, then a national number fully matching that format's pattern,
/// then a notation. Values shrink toward the first region and format and
/// toward simpler digits.
#[must_use = "strategies do nothing unless used"]
#[derive(Debug, Clone)]
pub struct PhoneNumberStrategy {
    registry: Arc<RegionRegistry>,
    regions: Vec<PhoneNumberRegion>,
    inner: BoxedStrategy<GeneratedPhoneNumber>,
}

/// Strategy of bare national significant numbers, see [`phone_number`].
pub type NationalNumberStrategy = Map<PhoneNumberStrategy, fn(GeneratedPhoneNumber) -> String>;

impl PhoneNumberStrategy {
    /// Builder over the bundled numbering plan metadata.
    pub fn builder() -> PhoneNumberStrategyBuilder {
        PhoneNumberStrategyBuilder::new(Arc::clone(&*PHONE_NUMBER_REGISTRY))
    }

    pub fn builder_with_registry(registry: Arc<RegionRegistry>) -> PhoneNumberStrategyBuilder {
        PhoneNumberStrategyBuilder::new(registry)
    }

    fn from_candidates(registry: Arc<RegionRegistry>, candidates: Vec<RegionCandidate>) -> Self {
        let regions = candidates.iter().map(|candidate| candidate.region.clone()).collect();
        let inner = select(candidates)
            .prop_flat_map(|candidate| {
                let RegionCandidate { region, national_prefix, formats, notations } = candidate;
                select(formats).prop_flat_map(move |format| {
                    let region = region.clone();
                    let national_prefix = national_prefix.clone();
                    let kind = format.kind;
                    (format.generator, select(notations.clone())).prop_map(
                        move |(national_number, notation)| GeneratedPhoneNumber {
                            region: region.clone(),
                            number_format: kind,
                            national_number,
                            notation,
                            national_prefix: national_prefix.clone(),
                        },
                    )
                })
            })
            .boxed();
        Self { registry, regions, inner }
    }

    /// Regions this strategy draws from.
    pub fn regions(&self) -> &[PhoneNumberRegion] {
        &self.regions
    }

    pub fn registry(&self) -> &Arc<RegionRegistry> {
        &self.registry
    }

    /// Writes every drawn number with the numbering plan's own formatting
    /// rules. Numbers the plan's parser rejects are filtered out.
    pub fn formatted(self, format: PhoneNumberFormat) -> BoxedStrategy<String> {
        self.prop_filter_map("generated number is not parseable", move |number| {
            number
                .format(format)
                .map_err(|err| trace!("Dropping generated number: {}", err))
                .ok()
        })
        .boxed()
    }

    /// Only the rendered text of every drawn number.
    pub fn rendered(self) -> Map<Self, fn(GeneratedPhoneNumber) -> String> {
        self.prop_map(render as fn(GeneratedPhoneNumber) -> String)
    }
}

impl Strategy for PhoneNumberStrategy {
    type Tree = Box<dyn ValueTree<Value = GeneratedPhoneNumber>>;
    type Value = GeneratedPhoneNumber;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        self.inner.new_tree(runner)
    }
}

fn render(number: GeneratedPhoneNumber) -> String {
    number.to_string()
}

fn national_number_of(number: GeneratedPhoneNumber) -> String {
    number.national_number
}

/// National significant numbers of the given regions and formats, drawn
/// from the bundled metadata. `None` means every region or every format.
pub fn phone_number(
    regions: Option<&[PhoneNumberRegion]>,
    number_formats: Option<&[NumberFormatKind]>,
) -> Result<NationalNumberStrategy> {
    let mut builder = PhoneNumberStrategy::builder()
        .international_prefix(Inclusion::Exclude)
        .national_prefix(Inclusion::Exclude);
    if let Some(regions) = regions {
        builder = builder.regions(regions);
    }
    if let Some(number_formats) = number_formats {
        builder = builder.number_formats(number_formats.iter().copied());
    }
    Ok(builder
        .build()?
        .prop_map(national_number_of as fn(GeneratedPhoneNumber) -> String))
}

/// Digit strings that are not valid national numbers of the region: they
/// do not match the region's general description.
pub fn invalid_national_number(
    registry: &Arc<RegionRegistry>,
    region: impl Into<PhoneNumberRegion>,
) -> Result<BoxedStrategy<String>> {
    let region = region.into();
    let metadata = registry
        .region_metadata(&region)
        .ok_or_else(|| InvalidArgument::InvalidRegion(region.clone()))?;
    if !metadata.has_format(NumberFormatKind::GeneralDesc) {
        return Err(InvalidArgument::NoAvailableFormats);
    }

    let mut buf = itoa::Buffer::new();
    let max_length = buf.format(MAX_LENGTH_FOR_NSN);
    let digits_pattern = fast_cat::concat_str!(ASCII_DIGIT_CLASS, "{1,", max_length, "}");
    let digits = registry.generator_for_pattern(&digits_pattern)?;
    let registry = Arc::clone(registry);
    Ok(digits
        .prop_filter("number is valid for the region", move |number| {
            !registry.matches_format(&region, NumberFormatKind::GeneralDesc, number)
        })
        .boxed())
}
