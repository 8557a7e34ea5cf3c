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

use std::{collections::BTreeMap, fmt};

use super::{
    enums::{Notation, NumberFormatKind, PhoneNumberFormat},
    errors::FormatError,
    helper_functions::prefix_number_with_country_calling_code,
};

/// A country calling code together with one of the regions it serves.
///
/// Country calling codes are the numerical prefix routing a call to a
/// country; region codes are ISO 3166-1 alpha-2 abbreviations. Several
/// regions may share a calling code (NANPA regions share `1`), and
/// non-geographical entities use the region code `001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhoneNumberRegion {
    pub country_code: u16,
    pub region_code: String,
}

impl PhoneNumberRegion {
    pub fn new(country_code: u16, region_code: impl Into<String>) -> Self {
        Self { country_code, region_code: region_code.into() }
    }
}

impl From<(u16, &str)> for PhoneNumberRegion {
    fn from((country_code, region_code): (u16, &str)) -> Self {
        Self::new(country_code, region_code)
    }
}

impl From<(u16, String)> for PhoneNumberRegion {
    fn from((country_code, region_code): (u16, String)) -> Self {
        Self::new(country_code, region_code)
    }
}

impl From<&PhoneNumberRegion> for PhoneNumberRegion {
    fn from(region: &PhoneNumberRegion) -> Self {
        region.clone()
    }
}

impl fmt::Display for PhoneNumberRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{})", self.region_code, self.country_code)
    }
}

/// One national number pattern of one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionalNamedFormat {
    pub region: PhoneNumberRegion,
    pub format_name: NumberFormatKind,
    pub format_regex: String,
}

/// Everything the strategies need to know about a single region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMetadata {
    pub region: PhoneNumberRegion,
    /// National (trunk) prefix, `0` in most regions; not every region has one.
    pub national_prefix: Option<String>,
    /// National number pattern per available named format.
    pub patterns: BTreeMap<NumberFormatKind, String>,
}

impl RegionMetadata {
    pub fn has_national_prefix(&self) -> bool {
        self.national_prefix.as_deref().is_some_and(|prefix| !prefix.is_empty())
    }

    pub fn has_format(&self, kind: NumberFormatKind) -> bool {
        self.patterns.contains_key(&kind)
    }
}

/// A value drawn by [`PhoneNumberStrategy`](crate::PhoneNumberStrategy).
///
/// `Display` writes the number in its drawn [`Notation`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratedPhoneNumber {
    pub region: PhoneNumberRegion,
    pub number_format: NumberFormatKind,
    /// National significant number, ASCII digits only.
    pub national_number: String,
    pub notation: Notation,
    pub national_prefix: Option<String>,
}

impl GeneratedPhoneNumber {
    /// `+<country code><national number>` regardless of the drawn notation.
    pub fn e164(&self) -> String {
        let mut number = self.national_number.clone();
        prefix_number_with_country_calling_code(
            self.region.country_code,
            PhoneNumberFormat::E164,
            &mut number,
        );
        number
    }

    /// Formats the number with the numbering plan's own formatting rules.
    pub fn format(&self, format: PhoneNumberFormat) -> Result<String, FormatError> {
        let e164 = self.e164();
        let parsed = phonenumber::parse(None, &e164).map_err(|err| FormatError::Unparseable {
            number: e164.clone(),
            reason: err.to_string(),
        })?;
        Ok(phonenumber::format(&parsed).mode(format.mode()).to_string())
    }
}

impl fmt::Display for GeneratedPhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.notation {
            Notation::International => {
                let mut number = self.national_number.clone();
                prefix_number_with_country_calling_code(
                    self.region.country_code,
                    PhoneNumberFormat::International,
                    &mut number,
                );
                f.write_str(&number)
            }
            Notation::NationalTrunk => {
                f.write_str(self.national_prefix.as_deref().unwrap_or_default())?;
                f.write_str(&self.national_number)
            }
            Notation::Local => f.write_str(&self.national_number),
        }
    }
}
