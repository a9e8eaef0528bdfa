// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Serde support for [`Range`], enabled by the `serde` feature.
//!
//! A range serializes as its `start`, `end` and stored `step`.
//! Deserialization runs the step normalizer again, so a payload with a zero
//! step on distinct bounds is rejected and a step with the wrong sign is
//! corrected.

use crate::{num::value::RangeValue, range::Range};
use ::serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
#[serde(rename = "Range")]
#[serde(bound(
    serialize = "T: Serialize, T::Step: Serialize",
    deserialize = "T: Deserialize<'de>, T::Step: Deserialize<'de>"
))]
struct RangeParts<T>
where
    T: RangeValue,
{
    start: T,
    end: T,
    step: T::Step,
}

impl<T> Serialize for Range<T>
where
    T: RangeValue + Serialize,
    T::Step: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RangeParts {
            start: self.start(),
            end: self.end(),
            step: self.step(),
        }
        .serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Range<T>
where
    T: RangeValue + Deserialize<'de>,
    T::Step: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parts = RangeParts::<T>::deserialize(deserializer)?;
        Range::try_with_step(parts.start, parts.end, parts.step).map_err(D::Error::custom)
    }
}
