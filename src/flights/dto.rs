use serde::{Deserialize, Serialize};

/// Lookup kinds supported by the flight-data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Aircraft,
    Airline,
    Callsign,
}

/// A frequently requested lookup, surfaced so users can pick a common
/// search without typing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularQueryItem {
    #[serde(rename = "type")]
    pub kind: SearchType,
    pub query: String,
    pub count: i64,
}

/// The three popular lists. This is both the cache value and the payload
/// under `popular` in the stats response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularQueries {
    pub callsign: Vec<PopularQueryItem>,
    pub aircraft: Vec<PopularQueryItem>,
    pub airline: Vec<PopularQueryItem>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub popular: PopularQueries,
}

/// Query string of `GET /api/flights/search`. Both parameters arrive as
/// plain strings; an absent parameter is an empty string.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub r#type: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub ok: bool,
    #[serde(rename = "type")]
    pub kind: SearchType,
    pub data: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SearchType::Aircraft).unwrap(),
            "\"aircraft\""
        );
        assert_eq!(
            serde_json::to_string(&SearchType::Callsign).unwrap(),
            "\"callsign\""
        );
    }

    #[test]
    fn popular_item_uses_type_key() {
        let item = PopularQueryItem {
            kind: SearchType::Airline,
            query: "BAW".into(),
            count: 42,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "airline");
        assert_eq!(json["query"], "BAW");
        assert_eq!(json["count"], 42);
    }
}
