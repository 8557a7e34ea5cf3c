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

use std::borrow::Cow;

use crate::string_util::{remove_whitespace, strip_cow_wrapper};

use super::{
    PhoneNumberFormat,
    helper_constants::{
        ANCHOR_PREFIX, ANCHOR_SUFFIX, ASCII_DIGIT_CLASS, PLUS_SIGN, RFC3966_PREFIX,
        UNICODE_DIGIT_CLASS,
    },
};

/// A helper function that is used by the generated number's renderers.
pub(super) fn prefix_number_with_country_calling_code(
    country_calling_code: u16,
    number_format: PhoneNumberFormat,
    formatted_number: &mut String,
) {
    if let PhoneNumberFormat::National = number_format {
        return;
    }
    let mut buf = itoa::Buffer::new();
    let country_calling_code_str = buf.format(country_calling_code);

    // we anyway allocate a new string in concatenation, so we'l do it once
    // with capacity of resulting string
    match number_format {
        PhoneNumberFormat::E164 => {
            let new_str =
                fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, &formatted_number);
            *formatted_number = new_str;
        }
        PhoneNumberFormat::International => {
            let new_str =
                fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, " ", &formatted_number);

            *formatted_number = new_str;
        }
        PhoneNumberFormat::RFC3966 => {
            let new_str = fast_cat::concat_str!(
                RFC3966_PREFIX,
                PLUS_SIGN,
                country_calling_code_str,
                "-",
                &formatted_number
            );

            *formatted_number = new_str;
        }
        // here code is already returned
        PhoneNumberFormat::National => {}
    }
}

/// Turns a metadata national number pattern into one the regex generator
/// can draw from: whitespace removed, a `^(?:...)$` wrapper stripped and
/// `\d` restricted to ASCII digits.
pub(crate) fn generator_pattern(national_number_pattern: &str) -> String {
    let pattern = remove_whitespace(national_number_pattern);
    let pattern = match strip_cow_wrapper(pattern.clone(), ANCHOR_PREFIX, ANCHOR_SUFFIX) {
        Some(stripped) => stripped,
        None => pattern,
    };
    restrict_digits_to_ascii(pattern).into_owned()
}

fn restrict_digits_to_ascii(pattern: Cow<'_, str>) -> Cow<'_, str> {
    if !pattern.contains(UNICODE_DIGIT_CLASS) {
        return pattern;
    }
    let mut result = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('d') => result.push_str(ASCII_DIGIT_CLASS),
            // keep any other escape, including an escaped backslash, intact
            Some(escaped) => {
                result.push('\\');
                result.push(escaped);
            }
            None => result.push('\\'),
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::{generator_pattern, prefix_number_with_country_calling_code};
    use crate::PhoneNumberFormat;

    #[test]
    fn prefixes_country_calling_code() {
        let cases = [
            (PhoneNumberFormat::E164, "+44207654321"),
            (PhoneNumberFormat::International, "+44 207654321"),
            (PhoneNumberFormat::RFC3966, "tel:+44-207654321"),
            (PhoneNumberFormat::National, "207654321"),
        ];
        for (format, expected) in cases {
            let mut number = "207654321".to_owned();
            prefix_number_with_country_calling_code(44, format, &mut number);
            assert_eq!(number, expected);
        }
    }

    #[test]
    fn prepares_metadata_patterns() {
        assert_eq!(generator_pattern(r"4\d{8}"), "4[0-9]{8}");
        assert_eq!(generator_pattern(r"^(?:[2-9]\d{2})$"), "[2-9][0-9]{2}");
        assert_eq!(generator_pattern("(?:\n  1\\d|2\n)\\d{3}"), "(?:1[0-9]|2)[0-9]{3}");
        assert_eq!(generator_pattern(r"1\\d"), r"1\\d");
        assert_eq!(generator_pattern("[13-9]"), "[13-9]");
    }
}
