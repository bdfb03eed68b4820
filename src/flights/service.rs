use std::time::Duration;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use crate::{error::AppError, state::AppState};

use super::dto::{PopularQueries, PopularQueryItem, SearchType};
use super::upstream::{StatsEntry, StatsPayload};

/// Reference URL the provider emits for hits it could not attribute.
const UNKNOWN_CALLSIGN_URL: &str = "/v0/callsign/unknown";

/// The provider signals a miss with a string payload starting with this
/// prefix instead of a distinct status code.
const UNKNOWN_PREFIX: &str = "unknown";

fn is_registration(query: &str) -> bool {
    lazy_static! {
        static ref REGISTRATION_RE: Regex = Regex::new(r"^[A-Za-z0-9]{6}$").unwrap();
    }
    REGISTRATION_RE.is_match(query)
}

/// Picks the upstream lookup kind for a free-text query.
///
/// Provider identifier conventions: IATA/ICAO airline codes are three
/// characters, tail/registration numbers are six alphanumerics, callsigns
/// are free-form. The precedence airline > aircraft > callsign is the
/// tie-break for queries matching more than one shape.
pub fn resolve_type(query: &str, explicit: &str) -> Result<SearchType, AppError> {
    match explicit {
        "" => Ok(if query.chars().count() == 3 {
            SearchType::Airline
        } else if is_registration(query) {
            SearchType::Aircraft
        } else {
            SearchType::Callsign
        }),
        "aircraft" => Ok(SearchType::Aircraft),
        "airline" => Ok(SearchType::Airline),
        "callsign" => Ok(SearchType::Callsign),
        _ => Err(AppError::InvalidInput("Unsupported search type".into())),
    }
}

fn map_items(entries: Vec<StatsEntry>, kind: SearchType) -> Vec<PopularQueryItem> {
    entries
        .into_iter()
        .filter_map(|entry| {
            let url = entry.url.filter(|u| !u.is_empty())?;
            if url == UNKNOWN_CALLSIGN_URL {
                return None;
            }
            let query = url.rsplit('/').next().unwrap_or_default().to_string();
            Some(PopularQueryItem {
                kind,
                query,
                count: entry.count,
            })
        })
        .collect()
}

/// Normalizes the provider's daily stats into the three popular lists.
pub fn popular_from_stats(stats: StatsPayload) -> PopularQueries {
    let daily = stats.daily;
    PopularQueries {
        callsign: map_items(daily.callsign, SearchType::Callsign),
        aircraft: map_items(daily.aircraft, SearchType::Aircraft),
        airline: map_items(daily.airline, SearchType::Airline),
    }
}

/// Returns the popular lists, fetching from upstream at most once per cache
/// window. Upstream failures are never papered over with a stale entry.
pub async fn popular_stats(state: &AppState) -> Result<PopularQueries, AppError> {
    if let Some(cached) = state.stats_cache.get() {
        debug!("stats cache hit");
        return Ok(cached);
    }

    let stats = state.upstream.stats().await.map_err(|err| {
        warn!(error = %err, "upstream stats call failed");
        AppError::Upstream("Failed to fetch stats".into())
    })?;

    let popular = popular_from_stats(stats);
    state.stats_cache.put(
        popular.clone(),
        Duration::from_secs(state.config.stats_cache_ttl_seconds),
    );
    Ok(popular)
}

/// Resolves the lookup kind and forwards the query to the matching upstream
/// operation.
pub async fn search(
    state: &AppState,
    query: &str,
    explicit: &str,
) -> Result<(SearchType, serde_json::Value), AppError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AppError::InvalidInput("Query is required".into()));
    }

    let kind = resolve_type(query, explicit.trim())?;

    let data = match kind {
        SearchType::Callsign => state.upstream.callsign(query).await,
        SearchType::Aircraft => state.upstream.aircraft(query).await,
        SearchType::Airline => state.upstream.airline(query).await,
    }
    .map_err(|err| {
        warn!(error = %err, "upstream lookup failed");
        AppError::Upstream("Failed to fetch search result".into())
    })?;

    // Translate the provider's "unknown ..." string payload here, so nothing
    // past this point inspects string prefixes.
    if data.as_str().map_or(false, |s| s.starts_with(UNKNOWN_PREFIX)) {
        return Err(AppError::NotFound("No data found".into()));
    }

    Ok((kind, data))
}
