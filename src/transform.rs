use serde::{Deserialize, Serialize};

use crate::error::EtlError;
use crate::extract::RawGdpRecord;

/// One country with its GDP in USD billions.  The serde renames are the
/// column names used by both the CSV file and the database table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GdpRecord {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "GDP_USD_billions")]
    pub gdp_usd_billions: f64,
}

/// Normalize the raw estimates: strip thousands separators, parse, convert
/// millions to billions, round to 2 decimals.  Pure, no I/O.
pub fn transform(raw: Vec<RawGdpRecord>) -> Result<Vec<GdpRecord>, EtlError> {
    raw.into_iter()
        .map(|record| {
            let cleaned = record.gdp_usd_millions.replace(',', "");
            let millions: f64 = cleaned.parse().map_err(|_| {
                EtlError::Parse(format!(
                    "GDP value {:?} for {} is not numeric",
                    record.gdp_usd_millions, record.country
                ))
            })?;
            Ok(GdpRecord {
                country: record.country,
                gdp_usd_billions: round2(millions / 1000.0),
            })
        })
        .collect()
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(country: &str, gdp: &str) -> RawGdpRecord {
        RawGdpRecord {
            country: country.to_string(),
            gdp_usd_millions: gdp.to_string(),
        }
    }

    #[test]
    fn test_millions_to_billions() {
        let records = transform(vec![
            raw("United States", "26,854,599"),
            raw("Tuvalu", "63"),
        ])
        .unwrap();
        assert_eq!(records[0].gdp_usd_billions, 26854.6);
        assert_eq!(records[1].gdp_usd_billions, 0.06);
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        let records = transform(vec![raw("A", "1,234")]).unwrap();
        assert_eq!(
            records[0],
            GdpRecord {
                country: "A".to_string(),
                gdp_usd_billions: 1.23,
            }
        );
    }

    #[test]
    fn test_non_negative_stays_non_negative() {
        let records = transform(vec![raw("A", "0"), raw("B", "1")]).unwrap();
        assert!(records.iter().all(|r| r.gdp_usd_billions >= 0.0));
    }

    #[test]
    fn test_non_numeric_fails() {
        let err = transform(vec![raw("A", "n/a")]).unwrap_err();
        assert!(err.to_string().contains("not numeric"));
    }
}
