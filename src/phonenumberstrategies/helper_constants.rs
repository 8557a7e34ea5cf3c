// Copyright (C) 2009 The Libphonenumber Authors
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

// The maximum length of the national significant number.
// The ITU says the maximum length should be 15, but we have found longer
// numbers in Germany.
pub const MAX_LENGTH_FOR_NSN: usize = 17;
/// The largest country calling code (three digits).
pub const MAX_COUNTRY_CODE: u16 = 999;

pub const PLUS_SIGN: &'static str = "+";
pub const RFC3966_PREFIX: &'static str = "tel:";

/// Digits the generated numbers are drawn from. Metadata patterns use `\d`,
/// which is Unicode-aware in regex syntax.
pub const ASCII_DIGIT_CLASS: &'static str = "[0-9]";
pub const UNICODE_DIGIT_CLASS: &'static str = r"\d";

// Older metadata marks a number type without numbers by this pattern
// instead of leaving it out.
pub const NOT_AVAILABLE_PATTERN: &'static str = "NA";

pub const ANCHOR_PREFIX: &'static str = "^(?:";
pub const ANCHOR_SUFFIX: &'static str = ")$";
