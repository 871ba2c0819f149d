use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::config::WeatherConfig;
use crate::error::{FetchError, Result};
use crate::formatters::{format_area_codes, format_area_error};
use crate::http;
use crate::models::AreaEntry;

/// Fetches the area directory and renders it, or renders the failure.
pub async fn get_area_codes(config: &WeatherConfig) -> String {
    match fetch_area_entries(config).await {
        Ok(entries) => {
            tracing::info!("Loaded {} area entries", entries.len());
            format_area_codes(&entries)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load area directory");
            format_area_error(&e)
        }
    }
}

async fn fetch_area_entries(config: &WeatherConfig) -> Result<Vec<AreaEntry>> {
    let body = http::fetch_text(config, &config.area_directory_url).await?;
    parse_area_directory(&body)
}

/// Collects every `city` inside a `pref`, in document order.
///
/// The body must be a single well-formed document: exactly one root
/// element, closed before the end of input, with only whitespace around it.
pub fn parse_area_directory(xml: &str) -> Result<Vec<AreaEntry>> {
    let mut reader = Reader::from_str(xml);
    let mut entries = Vec::new();
    let mut prefecture: Option<String> = None;
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        match reader.read_event().map_err(FetchError::xml)? {
            Event::Start(e) => {
                enter_element(depth, &mut seen_root)?;
                depth += 1;
                match e.local_name().as_ref() {
                    b"pref" => prefecture = Some(attribute(&e, b"title")?.unwrap_or_default()),
                    b"city" => push_city(&mut entries, prefecture.as_deref(), &e)?,
                    _ => {}
                }
            }
            Event::Empty(e) => {
                enter_element(depth, &mut seen_root)?;
                if e.local_name().as_ref() == b"city" {
                    push_city(&mut entries, prefecture.as_deref(), &e)?;
                }
            }
            Event::End(e) => {
                depth = depth.saturating_sub(1);
                if e.local_name().as_ref() == b"pref" {
                    prefecture = None;
                }
            }
            Event::Text(t) if depth == 0 && !t.iter().all(u8::is_ascii_whitespace) => {
                return Err(FetchError::xml("text outside the root element"));
            }
            Event::CData(_) if depth == 0 => {
                return Err(FetchError::xml("CDATA outside the root element"));
            }
            Event::Eof if depth > 0 => {
                return Err(FetchError::xml(format!(
                    "unexpected end of document with {} unclosed element(s)",
                    depth
                )));
            }
            Event::Eof if !seen_root => {
                return Err(FetchError::xml("document has no root element"));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(entries)
}

fn enter_element(depth: usize, seen_root: &mut bool) -> Result<()> {
    if depth == 0 {
        if *seen_root {
            return Err(FetchError::xml("more than one root element"));
        }
        *seen_root = true;
    }
    Ok(())
}

fn push_city(
    entries: &mut Vec<AreaEntry>,
    prefecture: Option<&str>,
    element: &BytesStart<'_>,
) -> Result<()> {
    let Some(prefecture) = prefecture else {
        return Ok(());
    };

    match (attribute(element, b"title")?, attribute(element, b"id")?) {
        (Some(city), Some(code)) => entries.push(AreaEntry {
            prefecture: prefecture.to_string(),
            city,
            code,
        }),
        _ => tracing::debug!(prefecture, "Skipping city without title or id"),
    }
    Ok(())
}

fn attribute(element: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>> {
    for attr in element.attributes() {
        let attr = attr.map_err(FetchError::xml)?;
        if attr.key.local_name().as_ref() == name {
            let raw = std::str::from_utf8(&attr.value).map_err(FetchError::xml)?;
            let value = quick_xml::escape::unescape(raw).map_err(FetchError::xml)?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}
