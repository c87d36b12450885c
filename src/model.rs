use serde::{Deserialize, Deserializer};

const CM_TO_IN: f64 = 0.393701;

/// One entry of the ranked resort list returned by `/api/resorts`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResortSummary {
    pub name: String,
    #[serde(default)]
    pub region: Option<String>,
    pub score: f64,
}

/// Snow conditions for a single resort returned by `/api/search`.
///
/// Depths are in inches. Every field except `name` may be absent upstream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "WireDetail")]
pub struct ResortDetail {
    pub name: String,
    pub region: Option<String>,
    pub bottom_snow_depth: Option<f64>,
    pub top_snow_depth: Option<f64>,
    pub recent_snowfall: Option<f64>,
    pub last_snowfall_date: Option<String>,
}

#[derive(Deserialize)]
struct WireBasicInfo {
    name: String,
    #[serde(default)]
    region: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireDetail {
    basic_info: WireBasicInfo,
    #[serde(default, deserialize_with = "depth")]
    bot_snow_depth: Option<f64>,
    #[serde(default, deserialize_with = "depth")]
    top_snow_depth: Option<f64>,
    #[serde(default, deserialize_with = "depth")]
    fresh_snowfall: Option<f64>,
    #[serde(default)]
    last_snowfall_date: Option<String>,
}

impl From<WireDetail> for ResortDetail {
    fn from(wire: WireDetail) -> Self {
        Self {
            name: wire.basic_info.name,
            region: wire.basic_info.region,
            bottom_snow_depth: wire.bot_snow_depth,
            top_snow_depth: wire.top_snow_depth,
            recent_snowfall: wire.fresh_snowfall,
            last_snowfall_date: wire.last_snowfall_date,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDepth {
    Number(f64),
    Text(String),
}

fn depth<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawDepth>::deserialize(deserializer)? {
        Some(RawDepth::Number(n)) => Some(n),
        Some(RawDepth::Text(s)) => parse_depth(&s),
        None => None,
    })
}

/// Parse a measurement such as `"40in"` or `"102cm"` into inches.
///
/// Centimetres are converted and rounded to two decimals. Unknown units and
/// blank strings yield `None`.
pub fn parse_depth(measurement: &str) -> Option<f64> {
    let m = measurement.trim();
    if let Some(cm) = m.strip_suffix("cm") {
        let value: f64 = cm.trim().parse().ok()?;
        Some((value * CM_TO_IN * 100.0).round() / 100.0)
    } else if let Some(inches) = m.strip_suffix("in") {
        inches.trim().parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_from_canonical_shape() {
        let json = r#"{
            "basicInfo": {"name": "Vail", "region": "CO"},
            "botSnowDepth": 40,
            "topSnowDepth": 60,
            "freshSnowfall": 5,
            "lastSnowfallDate": "2024-01-02"
        }"#;
        let detail: ResortDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.name, "Vail");
        assert_eq!(detail.region.as_deref(), Some("CO"));
        assert_eq!(detail.bottom_snow_depth, Some(40.0));
        assert_eq!(detail.top_snow_depth, Some(60.0));
        assert_eq!(detail.recent_snowfall, Some(5.0));
        assert_eq!(detail.last_snowfall_date.as_deref(), Some("2024-01-02"));
    }

    #[test]
    fn test_detail_accepts_measurement_strings() {
        let json = r#"{
            "basicInfo": {"name": "Whistler Blackcomb"},
            "botSnowDepth": "102cm",
            "topSnowDepth": "80in",
            "freshSnowfall": "",
            "lastSnowfallDate": null
        }"#;
        let detail: ResortDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.region, None);
        assert_eq!(detail.bottom_snow_depth, Some(40.16));
        assert_eq!(detail.top_snow_depth, Some(80.0));
        assert_eq!(detail.recent_snowfall, None);
        assert_eq!(detail.last_snowfall_date, None);
    }

    #[test]
    fn test_detail_without_basic_info_is_rejected() {
        let json = r#"{"name": "Vail", "region": "CO", "topSnowDepth": 60}"#;
        assert!(serde_json::from_str::<ResortDetail>(json).is_err());
    }

    #[test]
    fn test_summary_region_is_optional() {
        let json = r#"[{"name": "Alta", "score": 2.5}, {"name": "Vail", "region": "Colorado", "score": 1}]"#;
        let list: Vec<ResortSummary> = serde_json::from_str(json).unwrap();
        assert_eq!(list[0].region, None);
        assert_eq!(list[1].region.as_deref(), Some("Colorado"));
        assert_eq!(list[1].score, 1.0);
    }

    #[test]
    fn test_parse_depth() {
        assert_eq!(parse_depth("12in"), Some(12.0));
        assert_eq!(parse_depth(" 10cm "), Some(3.94));
        assert_eq!(parse_depth("0in"), Some(0.0));
        assert_eq!(parse_depth("12ft"), None);
        assert_eq!(parse_depth(""), None);
        assert_eq!(parse_depth("abcin"), None);
    }
}
