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

use thiserror::Error;

use super::helper_types::PhoneNumberRegion;

/// Misuse detected while looking regions up or constructing a strategy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("Cannot specify both country code and region code")]
    BothCountryAndRegionCodes,
    #[error("Invalid country code: {0}")]
    InvalidCountryCode(u16),
    #[error("Invalid region code: {0}")]
    InvalidRegionCode(String),
    #[error("Invalid region: {0}")]
    InvalidRegion(PhoneNumberRegion),
    #[error("Invalid number format: {0}")]
    InvalidNumberFormat(String),
    /// International, national trunk and local notations were all excluded.
    #[error("Every notation is excluded, nothing can be generated")]
    NoNotationsEnabled,
    /// No selected region provides any of the selected number formats.
    #[error("No region provides the requested number formats")]
    NoAvailableFormats,
    #[error("Pattern {pattern} can not be used for generation: {reason}")]
    InvalidPattern {
        pattern: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The numbering plan database rejected the generated number.
    #[error("Generated number {number} could not be parsed: {reason}")]
    Unparseable {
        number: String,
        reason: String,
    },
}
