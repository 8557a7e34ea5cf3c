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

use std::collections::BTreeMap;

use log::trace;
use phonenumber::metadata::{Database, Descriptor, Descriptors, Metadata};
use strum::IntoEnumIterator;

use crate::{i18n, interfaces::MetadataSource};

use super::{
    enums::NumberFormatKind,
    helper_constants::{MAX_COUNTRY_CODE, NOT_AVAILABLE_PATTERN},
    helper_functions::generator_pattern,
    helper_types::{PhoneNumberRegion, RegionMetadata},
};

/// Returns the description inside the metadata of the appropriate
/// named format.
fn get_descriptor_by_kind(descriptors: &Descriptors, kind: NumberFormatKind) -> Option<&Descriptor> {
    match kind {
        NumberFormatKind::GeneralDesc => Some(descriptors.general()),
        NumberFormatKind::FixedLine => descriptors.fixed_line(),
        NumberFormatKind::Mobile => descriptors.mobile(),
        NumberFormatKind::TollFree => descriptors.toll_free(),
        NumberFormatKind::PremiumRate => descriptors.premium_rate(),
        NumberFormatKind::SharedCost => descriptors.shared_cost(),
        NumberFormatKind::PersonalNumber => descriptors.personal_number(),
        NumberFormatKind::Voip => descriptors.voip(),
        NumberFormatKind::Pager => descriptors.pager(),
        NumberFormatKind::Uan => descriptors.uan(),
        NumberFormatKind::Emergency => descriptors.emergency(),
        NumberFormatKind::Voicemail => descriptors.voicemail(),
        NumberFormatKind::ShortCode => descriptors.short_code(),
        NumberFormatKind::StandardRate => descriptors.standard_rate(),
        NumberFormatKind::CarrierSpecific => descriptors.carrier(),
        NumberFormatKind::NoInternationalDialling => descriptors.no_international(),
        // Only short number metadata describes SMS services.
        NumberFormatKind::SmsServices => None,
    }
}

fn region_metadata_for(metadata: &Metadata) -> RegionMetadata {
    let descriptors = metadata.descriptors();
    let patterns = NumberFormatKind::iter()
        .filter_map(|kind| {
            let pattern = get_descriptor_by_kind(descriptors, kind)?
                .national_number()
                .as_str();
            let prepared = generator_pattern(pattern);
            (!prepared.is_empty() && prepared != NOT_AVAILABLE_PATTERN)
                .then(|| (kind, pattern.to_owned()))
        })
        .collect::<BTreeMap<_, _>>();

    RegionMetadata {
        region: PhoneNumberRegion::new(metadata.country_code(), metadata.id()),
        national_prefix: metadata
            .national_prefix()
            .filter(|prefix| !prefix.is_empty())
            .map(str::to_owned),
        patterns,
    }
}

impl MetadataSource for Database {
    fn region_metadata(&self) -> Vec<RegionMetadata> {
        let mut regions = Vec::new();
        for country_code in 1..=MAX_COUNTRY_CODE {
            let Some(metadata_list) = self.by_code(&country_code) else {
                continue;
            };
            for metadata in metadata_list {
                if metadata.id() == i18n::RegionCode::get_unknown() {
                    continue;
                }
                regions.push(region_metadata_for(metadata));
            }
        }
        trace!("Loaded numbering plan metadata for {} regions", regions.len());
        regions
    }
}
