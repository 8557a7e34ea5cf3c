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

/// Strips prefix and suffix of given string Cow at once. Returns option
/// with `Some` only if both were found and stripped.
///
/// Calls `drain`/`truncate` if string is owned and returns slice if string is borrowed
pub fn strip_cow_wrapper<'a>(cow: Cow<'a, str>, prefix: &str, suffix: &str) -> Option<Cow<'a, str>> {
    if cow.len() < prefix.len() + suffix.len() {
        return None;
    }
    match cow {
        Cow::Borrowed(s) => s
            .strip_prefix(prefix)
            .and_then(|s| s.strip_suffix(suffix))
            .map(Cow::Borrowed),
        Cow::Owned(mut s) => {
            if s.starts_with(prefix) && s.ends_with(suffix) {
                s.truncate(s.len() - suffix.len());
                s.drain(0..prefix.len());
                return Some(Cow::Owned(s));
            }
            None
        }
    }
}

/// Removes all whitespace, borrowing when there is nothing to remove.
pub fn remove_whitespace(s: &str) -> Cow<'_, str> {
    if s.chars().any(char::is_whitespace) {
        Cow::Owned(s.chars().filter(|c| !c.is_whitespace()).collect())
    } else {
        Cow::Borrowed(s)
    }
}

pub fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
