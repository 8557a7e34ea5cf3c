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

use std::str::FromStr;

use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::errors::InvalidArgument;

/// Defines the various standardized formats for representing phone numbers.
///
/// For example, the Google Switzerland office number would be:
/// - **INTERNATIONAL**: `+41 44 668 1800`
/// - **NATIONAL**: `044 668 1800`
/// - **E164**: `+41446681800` (international format without formatting)
/// - **RFC3966**: `tel:+41-44-668-1800` (hyphen-separated with a "tel:" prefix)
///
/// Names are parsed case-insensitively, so `"e164"` and `"Rfc3966"` are accepted.
#[derive(Debug, Display, EnumString, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum PhoneNumberFormat {
    /// **E.164 format.**
    /// Example: `+41446681800`.
    #[strum(serialize = "E164")]
    E164,
    /// **International format.**
    /// Example: `+41 44 668 1800`.
    #[strum(serialize = "INTERNATIONAL")]
    International,
    /// **National format.**
    /// May include a national prefix (like '0') and uses local formatting conventions.
    /// Example: `044 668 1800`.
    #[strum(serialize = "NATIONAL")]
    National,
    /// **RFC3966 format.**
    /// Example: `tel:+41-44-668-1800`.
    #[strum(serialize = "RFC3966")]
    RFC3966,
}

impl PhoneNumberFormat {
    pub(crate) fn mode(self) -> phonenumber::Mode {
        match self {
            PhoneNumberFormat::E164 => phonenumber::Mode::E164,
            PhoneNumberFormat::International => phonenumber::Mode::International,
            PhoneNumberFormat::National => phonenumber::Mode::National,
            PhoneNumberFormat::RFC3966 => phonenumber::Mode::Rfc3966,
        }
    }
}

/// Named number formats a region's numbering plan may describe, each with
/// its own national number pattern.
///
/// Not every region has every format; regions sharing a number type (for
/// example shared cost) are a minority.
#[derive(
    Debug, Display, EnumString, EnumIter, AsRefStr,
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[strum(serialize_all = "snake_case")]
pub enum NumberFormatKind {
    /// General description: covers every number the region can dial.
    GeneralDesc,
    FixedLine,
    Mobile,
    /// Free for the caller, e.g. "800" numbers.
    TollFree,
    PremiumRate,
    SharedCost,
    /// Routed to a person rather than a location or device.
    PersonalNumber,
    Voip,
    Pager,
    /// Universal Access Numbers.
    Uan,
    Emergency,
    Voicemail,
    ShortCode,
    StandardRate,
    CarrierSpecific,
    SmsServices,
    NoInternationalDialling,
}

impl NumberFormatKind {
    /// Parses a format name such as `"toll_free"`.
    pub fn from_name(name: &str) -> Result<Self, InvalidArgument> {
        Self::from_str(name).map_err(|_| InvalidArgument::InvalidNumberFormat(name.to_owned()))
    }
}

/// Tri-state control of a feature in the generated output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Inclusion {
    /// Want it in the output, and limit the search space to regions
    /// where it can be produced.
    Require,
    /// May be produced when available; regions are not limited.
    #[default]
    Allow,
    /// Never in the output.
    Exclude,
}

impl Inclusion {
    pub fn is_enabled(self) -> bool {
        !matches!(self, Inclusion::Exclude)
    }
}

/// How a generated national number is written out.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// E.123 international notation: `+61 412345678`.
    International,
    /// National number preceded by the region's trunk prefix: `0412345678`.
    NationalTrunk,
    /// Bare national significant number: `412345678`.
    Local,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::{NumberFormatKind, PhoneNumberFormat};
    use crate::InvalidArgument;

    #[test]
    fn number_format_names() {
        assert_eq!(NumberFormatKind::iter().count(), 17);
        assert_eq!(NumberFormatKind::GeneralDesc.as_ref(), "general_desc");
        assert_eq!(NumberFormatKind::Voip.to_string(), "voip");
        assert_eq!(NumberFormatKind::Uan.as_ref(), "uan");
        assert_eq!(
            NumberFormatKind::from_name("no_international_dialling"),
            Ok(NumberFormatKind::NoInternationalDialling)
        );
        assert_eq!(
            NumberFormatKind::from_name("landline"),
            Err(InvalidArgument::InvalidNumberFormat("landline".to_owned()))
        );
        for kind in NumberFormatKind::iter() {
            assert_eq!(NumberFormatKind::from_name(kind.as_ref()), Ok(kind));
        }
    }

    #[test]
    fn phone_number_format_is_case_insensitive() {
        assert_eq!("e164".parse::<PhoneNumberFormat>().unwrap(), PhoneNumberFormat::E164);
        assert_eq!("Rfc3966".parse::<PhoneNumberFormat>().unwrap(), PhoneNumberFormat::RFC3966);
        assert_eq!("INTERNATIONAL".parse::<PhoneNumberFormat>().unwrap(), PhoneNumberFormat::International);
        assert_eq!(PhoneNumberFormat::National.to_string(), "NATIONAL");
        assert!("tel".parse::<PhoneNumberFormat>().is_err());
    }
}
