// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 The Kashin Vladislav (Rust adaptation author)
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

use regex::Regex;

pub trait RegexFullMatch {
    /// Eq of C fullMatch
    ///
    /// Leftmost-first semantics mean a pattern with alternatives of
    /// different length must be compiled through [`anchored_pattern`]
    /// for this to be exact.
    fn full_match(&self, s: &str) -> bool;
}

impl RegexFullMatch for Regex {
    fn full_match(&self, s: &str) -> bool {
        let found = self.find(s);
        if let Some(matched) = found {
            return matched.start() == 0 && matched.end() == s.len();
        }
        false
    }
}

/// Wraps pattern into `^(?:...)$` unless it is wrapped already.
pub fn anchored_pattern(pattern: &str) -> Cow<'_, str> {
    if pattern.starts_with("^(?:") && pattern.ends_with(")$") {
        return Cow::Borrowed(pattern);
    }
    Cow::Owned(fast_cat::concat_str!("^(?:", pattern, ")$"))
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use regex::Regex;

    use super::{RegexFullMatch, anchored_pattern};

    #[test]
    fn full_match_requires_whole_input() {
        let regex = Regex::new(r"4\d{2}").unwrap();
        assert!(regex.full_match("412"));
        assert!(!regex.full_match("4123"));
        assert!(!regex.full_match("0412"));
        assert!(!regex.full_match(""));
    }

    #[test]
    fn anchoring_handles_alternatives() {
        let regex = Regex::new(&anchored_pattern(r"4\d{2}|4\d{3}")).unwrap();
        assert!(regex.full_match("4123"));
        assert!(regex.full_match("412"));
        assert!(!regex.full_match("41"));

        assert!(matches!(anchored_pattern("^(?:1)$"), Cow::Borrowed("^(?:1)$")));
    }
}
