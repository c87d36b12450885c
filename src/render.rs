//! Pure conversion of fetched resort data into table descriptions.
//!
//! Nothing here touches the terminal; the `ui` module draws whatever these
//! functions return.

use crate::model::{ResortDetail, ResortSummary};
use chrono::{NaiveDate, NaiveDateTime};

pub const SHOW_ALL_HEADERS: [&str; 4] = ["RANK", "RESORT", "REGION", "SCORE"];

pub const SEARCH_HEADERS: [&str; 6] = [
    "RESORT",
    "REGION",
    "BOTTOM SNOW DEPTH",
    "TOP SNOW DEPTH",
    "RECENT SNOWFALL",
    "LAST SNOWFALL DATE",
];

/// Placeholder for fields the API did not provide.
pub const MISSING: &str = "N/A";

/// Headers plus fully formatted rows for one modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

/// Ranked list of all resorts, one row per entry in server order.
pub fn show_all_table(resorts: &[ResortSummary]) -> TableView {
    let rows = resorts
        .iter()
        .enumerate()
        .map(|(index, resort)| {
            vec![
                (index + 1).to_string(),
                resort.name.clone(),
                text_or_missing(resort.region.as_deref()),
                format!("{:.2}", resort.score),
            ]
        })
        .collect();

    TableView {
        headers: SHOW_ALL_HEADERS.to_vec(),
        rows,
    }
}

/// Single-row table describing one search result.
pub fn search_table(detail: &ResortDetail) -> TableView {
    let row = vec![
        text_or_missing(Some(detail.name.as_str())),
        text_or_missing(detail.region.as_deref()),
        format_measure(detail.bottom_snow_depth),
        format_measure(detail.top_snow_depth),
        format_measure(detail.recent_snowfall),
        format_date(detail.last_snowfall_date.as_deref()),
    ];

    TableView {
        headers: SEARCH_HEADERS.to_vec(),
        rows: vec![row],
    }
}

/// Names for the fixed inline slots, blank where fewer resorts exist.
pub fn top_slots(resorts: &[ResortSummary], count: usize) -> Vec<String> {
    let mut slots: Vec<String> = resorts
        .iter()
        .take(count)
        .map(|r| r.name.clone())
        .collect();
    slots.resize(count, String::new());
    slots
}

fn text_or_missing(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => MISSING.to_string(),
    }
}

/// Whole numbers print bare, fractions keep at most two decimals.
fn format_measure(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let s = format!("{v:.2}");
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => MISSING.to_string(),
    }
}

fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return MISSING.to_string();
    };
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return ts.date().format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn summary(name: &str, region: &str, score: f64) -> ResortSummary {
        ResortSummary {
            name: name.to_string(),
            region: Some(region.to_string()),
            score,
        }
    }

    #[test]
    fn test_top_slots_pad_with_blanks() {
        let resorts = vec![summary("Alta", "Utah", 92.0), summary("Vail", "Colorado", 88.0)];
        assert_eq!(top_slots(&resorts, 5), ["Alta", "Vail", "", "", ""]);
    }

    #[test]
    fn test_top_slots_truncate() {
        let resorts: Vec<_> = (0..8).map(|i| summary(&format!("R{i}"), "X", 1.0)).collect();
        assert_eq!(top_slots(&resorts, 5), ["R0", "R1", "R2", "R3", "R4"]);
    }

    #[test]
    fn test_search_table_row() {
        let detail = ResortDetail {
            name: "Vail".to_string(),
            region: Some("CO".to_string()),
            bottom_snow_depth: Some(40.0),
            top_snow_depth: Some(60.0),
            recent_snowfall: Some(5.0),
            last_snowfall_date: Some("2024-01-02".to_string()),
        };
        let table = search_table(&detail);
        assert_eq!(table.headers, SEARCH_HEADERS);
        assert_eq!(table.rows, vec![vec!["Vail", "CO", "40", "60", "5", "2024-01-02"]]);
    }

    #[test]
    fn test_search_table_missing_fields() {
        let detail = ResortDetail {
            name: "Alta".to_string(),
            region: Some("  ".to_string()),
            bottom_snow_depth: None,
            top_snow_depth: Some(40.16),
            recent_snowfall: Some(0.5),
            last_snowfall_date: Some("2024-03-01T08:30:00".to_string()),
        };
        let table = search_table(&detail);
        assert_eq!(table.rows[0], ["Alta", "N/A", "N/A", "40.16", "0.5", "2024-03-01"]);
    }

    #[test]
    fn test_unparsed_date_is_shown_verbatim() {
        assert_eq!(format_date(Some("yesterday")), "yesterday");
        assert_eq!(format_date(None), MISSING);
    }

    #[test]
    fn test_show_all_empty_keeps_headers() {
        let table = show_all_table(&[]);
        assert_eq!(table.headers, SHOW_ALL_HEADERS);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_show_all_missing_region() {
        let resorts = vec![ResortSummary {
            name: "Taos".to_string(),
            region: None,
            score: 1.876,
        }];
        assert_eq!(show_all_table(&resorts).rows[0], ["1", "Taos", "N/A", "1.88"]);
    }

    fn arb_summaries() -> impl Strategy<Value = Vec<ResortSummary>> {
        prop::collection::vec(
            ("[A-Za-z ]{1,12}", "[A-Za-z]{0,8}", 0.0f64..100.0)
                .prop_map(|(name, region, score)| summary(&name, &region, score)),
            0..40,
        )
    }

    proptest! {
        #[test]
        fn prop_show_all_rank_matches_position(resorts in arb_summaries()) {
            let table = show_all_table(&resorts);
            prop_assert_eq!(table.rows.len(), resorts.len());
            for (i, row) in table.rows.iter().enumerate() {
                prop_assert_eq!(&row[0], &(i + 1).to_string());
                prop_assert_eq!(&row[1], &resorts[i].name);
            }
        }

        #[test]
        fn prop_show_all_is_idempotent(resorts in arb_summaries()) {
            prop_assert_eq!(show_all_table(&resorts), show_all_table(&resorts));
        }

        #[test]
        fn prop_top_slots_have_fixed_length(resorts in arb_summaries(), count in 1usize..10) {
            let slots = top_slots(&resorts, count);
            prop_assert_eq!(slots.len(), count);
            for (i, slot) in slots.iter().enumerate() {
                match resorts.get(i) {
                    Some(r) => prop_assert_eq!(slot, &r.name),
                    None => prop_assert!(slot.is_empty()),
                }
            }
        }
    }
}
