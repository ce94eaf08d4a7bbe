// Functions to interact with the Play Store frontend (app details page and
// the batchexecute reviews RPC).

use anyhow::Context;
use reqwest::Client;
use scraper::{Html, Selector};
use serde_json::Value;
use std::time::Duration;

use crate::config::Settings;
use crate::error::{ScrapeError, ScrapeResult};
use crate::models::AppDetails;

/// Reviews RPC id on the batchexecute endpoint.
const REVIEWS_RPC_ID: &str = "UsvDTd";
/// Newest-first sort order.
const SORT_NEWEST: u32 = 2;
/// Largest page size the RPC serves in one call.
const PAGE_SIZE: usize = 199;
/// Requested counts above this switch to unbounded mode: paginate until the
/// catalog runs out, then truncate client-side.
const UNBOUNDED_THRESHOLD: u32 = 1000;

/// Reusable HTTP client configured from settings.
pub fn get_client(settings: &Settings) -> anyhow::Result<Client> {
    Client::builder()
        .user_agent(&settings.user_agent)
        .timeout(Duration::from_secs(settings.request_timeout_secs))
        .build()
        .context("Failed to build reqwest client")
}

/// Fetch app metadata from the store details page. The page embeds a
/// `ld+json` block carrying the name, author, and aggregate rating.
pub async fn fetch_app_details(
    client: &Client,
    base_url: &str,
    app_id: &str,
    country: &str,
    lang: &str,
) -> ScrapeResult<AppDetails> {
    let url = format!(
        "{}/store/apps/details?id={}&hl={}&gl={}",
        base_url, app_id, lang, country
    );
    tracing::debug!(%url, "Fetching app details page");

    let response_text = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let document = Html::parse_document(&response_text);
    let selector = Selector::parse(r#"script[type="application/ld+json"]"#)
        .map_err(|e| ScrapeError::Response(format!("bad ld+json selector: {e:?}")))?;

    let ld_json = document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>())
        .ok_or_else(|| ScrapeError::Response("no ld+json block on details page".to_string()))?;

    let data: Value = serde_json::from_str(&ld_json)
        .map_err(|e| ScrapeError::Response(format!("ld+json parse error: {e}")))?;

    let title = data
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| ScrapeError::Response("details page has no app name".to_string()))?
        .to_string();
    let developer = data
        .pointer("/author/name")
        .and_then(Value::as_str)
        .unwrap_or("Unknown")
        .to_string();
    // ratingValue/ratingCount come back as either numbers or strings
    // depending on locale, so accept both.
    let score = data
        .pointer("/aggregateRating/ratingValue")
        .and_then(as_lenient_f64);
    let ratings = data
        .pointer("/aggregateRating/ratingCount")
        .and_then(as_lenient_u64);

    tracing::debug!(app_id, %title, ?score, "Parsed app details");
    Ok(AppDetails {
        title,
        developer,
        score,
        ratings,
    })
}

/// Fetch reviews, newest first, as raw entries for the normalizer.
///
/// `count == 0` or `count > UNBOUNDED_THRESHOLD` selects unbounded mode:
/// paginate until the continuation token runs out, truncating client-side
/// afterwards when a positive count was given. Otherwise pages are fetched
/// only until `count` entries have been collected.
pub async fn fetch_reviews(
    client: &Client,
    base_url: &str,
    app_id: &str,
    country: &str,
    lang: &str,
    count: u32,
) -> ScrapeResult<Vec<Value>> {
    let unbounded = count == 0 || count > UNBOUNDED_THRESHOLD;
    tracing::debug!(app_id, count, unbounded, "Starting review fetch");

    let mut collected: Vec<Value> = Vec::new();
    let mut token: Option<String> = None;

    loop {
        let page_size = if unbounded {
            PAGE_SIZE
        } else {
            (count as usize - collected.len()).min(PAGE_SIZE)
        };

        let (entries, next_token) =
            fetch_review_page(client, base_url, app_id, country, lang, page_size, token.as_deref())
                .await?;
        let page_len = entries.len();
        collected.extend(entries);
        tracing::debug!(page_len, total = collected.len(), "Fetched review page");

        token = next_token;
        if token.is_none() || page_len == 0 {
            break;
        }
        if !unbounded && collected.len() >= count as usize {
            break;
        }
    }

    if count > 0 {
        collected.truncate(count as usize);
    }
    Ok(collected)
}

/// Fetch one page of reviews. Returns the raw entries plus the continuation
/// token for the next page, if any.
async fn fetch_review_page(
    client: &Client,
    base_url: &str,
    app_id: &str,
    country: &str,
    lang: &str,
    page_size: usize,
    token: Option<&str>,
) -> ScrapeResult<(Vec<Value>, Option<String>)> {
    let url = format!(
        "{}/_/PlayStoreUi/data/batchexecute?hl={}&gl={}",
        base_url, lang, country
    );

    // Inner request: [null, null, [2, sort, [count, null, token], null, []],
    // [app_id, 7]] — serialized to a string and wrapped in the rpc envelope.
    let inner = serde_json::json!([
        null,
        null,
        [2, SORT_NEWEST, [page_size, null, token], null, []],
        [app_id, 7]
    ])
    .to_string();
    let f_req = serde_json::json!([[[REVIEWS_RPC_ID, inner, null, "generic"]]]).to_string();

    let body = client
        .post(&url)
        .form(&[("f.req", f_req.as_str())])
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    parse_review_envelope(&body)
}

/// Unwrap the batchexecute response envelope down to the reviews array and
/// continuation token. The body starts with an anti-XSSI guard line, then a
/// JSON array whose `[0][2]` element is itself a JSON-encoded string.
fn parse_review_envelope(body: &str) -> ScrapeResult<(Vec<Value>, Option<String>)> {
    let stripped = body.trim_start().trim_start_matches(")]}'").trim_start();
    let outer: Value = serde_json::from_str(stripped)
        .map_err(|e| ScrapeError::Response(format!("batchexecute envelope parse error: {e}")))?;

    let inner_str = match outer.pointer("/0/2").and_then(Value::as_str) {
        Some(s) => s,
        // A null payload means the app has no reviews (or none left).
        None => return Ok((Vec::new(), None)),
    };

    let inner: Value = serde_json::from_str(inner_str)
        .map_err(|e| ScrapeError::Response(format!("reviews payload parse error: {e}")))?;

    let entries = inner
        .get(0)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    let next_token = inner
        .pointer("/1/1")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    Ok((entries, next_token))
}

fn as_lenient_f64(v: &Value) -> Option<f64> {
    v.as_f64().or_else(|| v.as_str().and_then(|s| s.parse().ok()))
}

fn as_lenient_u64(v: &Value) -> Option<u64> {
    v.as_u64()
        .or_else(|| v.as_str().and_then(|s| s.replace(',', "").parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_with_reviews_and_token_parses() {
        let inner = serde_json::json!([
            [["id-1", ["Alice"], 5], ["id-2", ["Bob"], 1]],
            [null, "NEXT_TOKEN"]
        ])
        .to_string();
        let body = format!(
            ")]}}'\n\n{}",
            serde_json::json!([["wrb.fr", "UsvDTd", inner, null, null]])
        );

        let (entries, token) = parse_review_envelope(&body).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(token.as_deref(), Some("NEXT_TOKEN"));
    }

    #[test]
    fn envelope_without_token_ends_pagination() {
        let inner = serde_json::json!([[["id-1", ["Alice"], 5]], [null, null]]).to_string();
        let body = format!(
            ")]}}'\n\n{}",
            serde_json::json!([["wrb.fr", "UsvDTd", inner, null, null]])
        );

        let (entries, token) = parse_review_envelope(&body).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(token.is_none());
    }

    #[test]
    fn null_payload_means_no_reviews() {
        let body = format!(
            ")]}}'\n\n{}",
            serde_json::json!([["wrb.fr", "UsvDTd", null, null, null]])
        );
        let (entries, token) = parse_review_envelope(&body).unwrap();
        assert!(entries.is_empty());
        assert!(token.is_none());
    }

    #[test]
    fn garbage_body_is_a_response_error() {
        let err = parse_review_envelope("<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, ScrapeError::Response(_)));
    }

    #[test]
    fn lenient_numbers_accept_strings() {
        assert_eq!(as_lenient_f64(&serde_json::json!("4.3")), Some(4.3));
        assert_eq!(as_lenient_f64(&serde_json::json!(4.3)), Some(4.3));
        assert_eq!(as_lenient_u64(&serde_json::json!("12,345")), Some(12345));
        assert_eq!(as_lenient_u64(&serde_json::json!(12345)), Some(12345));
    }
}
