use std::{collections::BTreeMap, sync::Arc};

use crate::{
    MetadataSource, NumberFormatKind, RegionMetadata, RegionRegistry,
    NumberFormatKind::{FixedLine, GeneralDesc, Mobile, PremiumRate, TollFree, Voip},
};

use super::region_code::RegionCode;

/// Small hand-written numbering plan, loosely following the real one.
pub struct FixtureSource {
    entries: Vec<RegionMetadata>,
}

fn entry(
    region: crate::PhoneNumberRegion,
    national_prefix: Option<&str>,
    patterns: &[(NumberFormatKind, &str)],
) -> RegionMetadata {
    RegionMetadata {
        region,
        national_prefix: national_prefix.map(str::to_owned),
        patterns: patterns
            .iter()
            .map(|(kind, pattern)| (*kind, pattern.to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}

impl FixtureSource {
    /// AU, US, CA, GB and the +800 toll free service, in this order.
    pub fn new() -> Self {
        Self {
            entries: vec![
                entry(RegionCode::au(), Some("0"), &[
                    (GeneralDesc, r"[1-578]\d{4,14}"),
                    (FixedLine, r"[2378]\d{8}"),
                    (Mobile, r"4\d{8}"),
                    (TollFree, r"180(?:0\d{3}|2)\d{3}"),
                ]),
                entry(RegionCode::us(), Some("1"), &[
                    (GeneralDesc, r"[2-9]\d{9}"),
                    (FixedLine, r"[2-9]\d{2}[2-9]\d{6}"),
                    (Mobile, r"[2-9]\d{2}[2-9]\d{6}"),
                    (TollFree, r"8(?:00|33|44|55|66|77|88)[2-9]\d{6}"),
                ]),
                entry(RegionCode::ca(), Some("1"), &[
                    (GeneralDesc, r"[2-9]\d{9}"),
                    (FixedLine, r"(?:204|236|250)[2-9]\d{6}"),
                ]),
                entry(RegionCode::gb(), Some("0"), &[
                    (GeneralDesc, "[1-9]\\d{9}"),
                    (FixedLine, "[1-3]\\d{9}"),
                    (Mobile, "7 [1-57-9]\n    \\d{8}"),
                    (Voip, "^(?:56\\d{8})$"),
                ]),
                entry(RegionCode::un001_800(), None, &[
                    (GeneralDesc, r"(?:00|[1-9]\d)\d{6}"),
                    (TollFree, r"(?:00|[1-9]\d)\d{6}"),
                ]),
            ],
        }
    }

    /// A region whose fixed line pattern can not be compiled.
    pub fn with_broken_pattern() -> Self {
        Self {
            entries: vec![entry(RegionCode::un001_979(), None, &[
                (GeneralDesc, r"[1359]\d{8}"),
                (FixedLine, r"[1359\d{8}"),
                (PremiumRate, r"[1359]\d{8}"),
            ])],
        }
    }

    /// Lists AU twice; the second entry has no national prefix.
    pub fn with_duplicate() -> Self {
        let mut source = Self::new();
        source.entries.push(entry(RegionCode::au(), None, &[(Mobile, r"5\d{8}")]));
        source
    }
}

impl MetadataSource for FixtureSource {
    fn region_metadata(&self) -> Vec<RegionMetadata> {
        self.entries.clone()
    }
}

pub fn fixture_registry() -> Arc<RegionRegistry> {
    super::init_logger();
    Arc::new(RegionRegistry::from_source(&FixtureSource::new()))
}
