use std::fmt;

use serde::de::{self, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserializer, Serialize, Serializer};

use super::DisplayRecord;

/// Field order of a display row
pub const DISPLAY_COLUMNS: [&str; 6] = [
    "title",
    "poster_link",
    "release_date",
    "runtime",
    "vote_average",
    "overview",
];

impl Serialize for DisplayRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut row = serializer.serialize_tuple(DISPLAY_COLUMNS.len())?;
        row.serialize_element(&self.title)?;
        row.serialize_element(&self.poster_link)?;
        row.serialize_element(&self.release_date)?;
        row.serialize_element(&self.runtime)?;
        row.serialize_element(&self.vote_average)?;
        row.serialize_element(&self.overview)?;
        row.end()
    }
}

/// Vote counts written by dataframe tools often come out as `"1234.0"`.
/// Accept integral floats, reject negative or fractional ones.
pub fn de_vote_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct CountVisitor;

    impl<'de> Visitor<'de> for CountVisitor {
        type Value = u64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a non-negative integral vote count")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
            u64::try_from(v).map_err(|_| E::custom(format!("negative vote count: {v}")))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
            if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u64::MAX as f64 {
                Ok(v as u64)
            } else {
                Err(E::custom(format!("invalid vote count: {v}")))
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
            let v = v.trim();
            if let Ok(n) = v.parse::<u64>() {
                return Ok(n);
            }
            match v.parse::<f64>() {
                Ok(f) => self.visit_f64(f),
                Err(_) => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
            }
        }
    }

    deserializer.deserialize_any(CountVisitor)
}
