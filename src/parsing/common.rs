// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Common parsing utilities for number extraction, size formatting, and mount sources.

use std::str::FromStr;

use crate::common::config::AppConfig;

/// Parse a number from a string after trimming surrounding whitespace.
/// Returns None if parsing fails.
pub fn parse_number<T: FromStr>(s: &str) -> Option<T> {
    s.trim().parse::<T>().ok()
}

/// Render a byte count in the largest binary unit it strictly exceeds.
///
/// One decimal is kept for P/T/G/M/K; anything up to and including 1024
/// is printed as a bare integer.
pub fn block_size_to_string(bytes: u64) -> String {
    const UNITS: [(u64, &str); 5] = [
        (AppConfig::SIZE_PB, "P"),
        (AppConfig::SIZE_TB, "T"),
        (AppConfig::SIZE_GB, "G"),
        (AppConfig::SIZE_MB, "M"),
        (AppConfig::SIZE_KB, "K"),
    ];

    for (threshold, suffix) in UNITS {
        if bytes > threshold {
            return format!("{:.1}{suffix}", bytes as f64 / threshold as f64);
        }
    }
    bytes.to_string()
}

/// Round to two decimal places.
pub fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The volume field of a `host:volume` mount source: the text between the
/// first and second ':'. The whole source is returned when there is no ':'.
pub fn source_volume(source: &str) -> &str {
    source.split(':').nth(1).unwrap_or(source)
}
