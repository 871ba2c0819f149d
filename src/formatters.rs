use crate::constants::{AREA_NOT_FOUND, FORECAST_UNAVAILABLE, MISSING_VALUE};
use crate::error::FetchError;
use crate::models::{AreaEntry, Celsius, ForecastEntry, ForecastResponse};

/// Separator between rendered forecast blocks
pub const BLOCK_SEPARATOR: &str = "\n---\n";

fn or_missing(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING_VALUE)
}

fn celsius_or_missing(value: Option<&Celsius>) -> String {
    value.map_or_else(|| MISSING_VALUE.to_string(), Celsius::to_string)
}

fn format_entry(entry: &ForecastEntry) -> String {
    format!(
        "\n{}:\nweather: {}\nwind: {}\nwave: {}\ntemperature: {}~{}\n",
        entry.date,
        or_missing(entry.detail.weather.as_deref()),
        or_missing(entry.detail.wind.as_deref()),
        or_missing(entry.detail.wave.as_deref()),
        celsius_or_missing(entry.temperature.min.celsius.as_ref()),
        celsius_or_missing(entry.temperature.max.celsius.as_ref()),
    )
}

/// Formats a forecast into a description block followed by one block per
/// entry, in upstream order.
pub fn format_forecast(forecast: &ForecastResponse) -> String {
    let mut blocks = Vec::with_capacity(forecast.forecasts.len() + 1);
    blocks.push(format!("\ndescription: {}\n", forecast.description.text));
    // Every entry is rendered; upstream usually sends three days.
    blocks.extend(forecast.forecasts.iter().map(format_entry));
    blocks.join(BLOCK_SEPARATOR)
}

/// Text for any forecast failure
pub fn forecast_failure_text() -> String {
    FORECAST_UNAVAILABLE.to_string()
}

/// Formats area entries, one `"{prefecture} - {city}: {code}"` per line
pub fn format_area_codes(entries: &[AreaEntry]) -> String {
    if entries.is_empty() {
        return AREA_NOT_FOUND.to_string();
    }

    entries
        .iter()
        .map(|e| format!("{} - {}: {}", e.prefecture, e.city, e.code))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Text for an area directory failure, one wording per category
pub fn format_area_error(err: &FetchError) -> String {
    match err {
        FetchError::Status { status, body } => {
            format!("HTTPエラー: ステータスコード {} - {}", status.as_u16(), body)
        }
        FetchError::Request(e) => format!("リクエストエラー: {}", e),
        FetchError::Xml(e) => format!("XML解析エラー: {}", e),
        FetchError::Malformed(e) => format!("予期しないエラー: {}", e),
        FetchError::Unexpected(e) => format!("予期しないエラー: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use rstest::rstest;

    const TWO_DAY_FORECAST: &str = r#"{
        "description": {"text": "晴れ"},
        "forecasts": [
            {
                "date": "2024-01-01",
                "detail": {"weather": "晴れ", "wind": "北の風", "wave": "０．５メートル"},
                "temperature": {"min": {"celsius": "5"}, "max": {"celsius": "15"}}
            },
            {
                "date": "2024-01-02",
                "detail": {"weather": "くもり", "wind": "南の風", "wave": "１メートル"},
                "temperature": {"min": {"celsius": "6"}, "max": {"celsius": "16"}}
            }
        ]
    }"#;

    fn decode(json: &str) -> ForecastResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn two_day_forecast_renders_literally() {
        let expected = "\ndescription: 晴れ\n\
            \n---\n\
            \n2024-01-01:\nweather: 晴れ\nwind: 北の風\nwave: ０．５メートル\ntemperature: 5~15\n\
            \n---\n\
            \n2024-01-02:\nweather: くもり\nwind: 南の風\nwave: １メートル\ntemperature: 6~16\n";

        assert_eq!(format_forecast(&decode(TWO_DAY_FORECAST)), expected);
    }

    #[test]
    fn null_leaves_render_placeholder() {
        let forecast = decode(
            r#"{
                "description": {"text": "雨"},
                "forecasts": [{
                    "date": "2024-06-01",
                    "detail": {"weather": "雨", "wind": null, "wave": null},
                    "temperature": {"min": {"celsius": null}, "max": {"celsius": "22"}}
                }]
            }"#,
        );

        let text = format_forecast(&forecast);
        assert!(text.contains("wind: -\n"));
        assert!(text.contains("wave: -\n"));
        assert!(text.contains("temperature: -~22\n"));
    }

    #[test]
    fn all_entries_rendered_without_cap() {
        let entries = (1..=5)
            .map(|day| {
                format!(
                    r#"{{"date": "2024-01-0{day}", "detail": {{}}, "temperature": {{"min": {{}}, "max": {{}}}}}}"#
                )
            })
            .collect::<Vec<_>>()
            .join(",");
        let forecast = decode(&format!(
            r#"{{"description": {{"text": "x"}}, "forecasts": [{entries}]}}"#
        ));

        let text = format_forecast(&forecast);
        let blocks: Vec<&str> = text.split(BLOCK_SEPARATOR).collect();
        assert_eq!(blocks.len(), 6);
        assert!(blocks[5].contains("2024-01-05"));
    }

    #[test]
    fn empty_forecast_list_renders_description_only() {
        let forecast = decode(r#"{"description": {"text": "晴れ"}, "forecasts": []}"#);
        assert_eq!(format_forecast(&forecast), "\ndescription: 晴れ\n");
    }

    #[test]
    fn area_codes_render_one_line_per_city() {
        let entries = vec![
            AreaEntry {
                prefecture: "道北".to_string(),
                city: "稚内".to_string(),
                code: "011000".to_string(),
            },
            AreaEntry {
                prefecture: "大阪府".to_string(),
                city: "大阪".to_string(),
                code: "270000".to_string(),
            },
        ];

        assert_eq!(
            format_area_codes(&entries),
            "道北 - 稚内: 011000\n大阪府 - 大阪: 270000"
        );
    }

    #[test]
    fn empty_area_list_is_not_found_message() {
        assert_eq!(format_area_codes(&[]), AREA_NOT_FOUND);
    }

    #[rstest]
    #[case(
        FetchError::Status { status: StatusCode::NOT_FOUND, body: "missing".to_string() },
        &["HTTPエラー", "404", "missing"]
    )]
    #[case(FetchError::Xml("bad tag".to_string()), &["XML解析エラー", "bad tag"])]
    #[case(FetchError::Unexpected("boom".to_string()), &["予期しないエラー", "boom"])]
    fn area_errors_carry_category_and_detail(#[case] err: FetchError, #[case] needles: &[&str]) {
        let text = format_area_error(&err);
        for needle in needles {
            assert!(text.contains(needle), "{text:?} should contain {needle:?}");
        }
    }

    #[test]
    fn forecast_failure_is_uniform() {
        assert_eq!(forecast_failure_text(), "Unable to fetch detailed forecast.");
    }
}
