//! HTTP request handlers

use super::state::AppState;
use crate::query::{CriteriaError, QueryCriteria, SortKey};
use axum::{
    extract::{Query, RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tera::Context;

/// Query parameters for the dashboard
///
/// The multi-select widgets submit one `regions`/`agencies` pair per
/// selected value, so those fields collect every occurrence instead of
/// keeping only the last one. Comma-joined values are accepted too.
#[derive(Debug, Default)]
pub struct DashboardParams {
    /// Search text
    pub q: Option<String>,
    /// Region selections (repeated key or comma-separated)
    pub regions: Vec<String>,
    /// Agency selections (repeated key or comma-separated)
    pub agencies: Vec<String>,
    /// Sort key label
    pub sort: Option<String>,
    /// Output format (html, json, csv)
    pub format: Option<String>,
}

impl DashboardParams {
    /// Parse the raw query string of a dashboard request
    pub fn from_query(raw: &str) -> Self {
        let mut params = Self::default();
        for pair in raw.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode_component(value);
            match decode_component(key).as_str() {
                "q" => params.q = Some(value),
                "regions" => params.regions.push(value),
                "agencies" => params.agencies.push(value),
                "sort" => params.sort = Some(value),
                "format" => params.format = Some(value),
                _ => {}
            }
        }
        params
    }
}

/// Decode one form-urlencoded component ('+' is a space)
fn decode_component(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw,
    }
}

/// Query results for JSON format
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub search_text: String,
    pub sort_key: SortKey,
    pub number_of_results: usize,
    pub results: Vec<crate::records::UpdateRecord>,
}

/// Build criteria from raw widget parameters.
///
/// Trims free text, splits the comma-joined multi-select values into sets,
/// and parses the sort label. A bad label is the caller's contract
/// violation and becomes an error here, before the engine runs.
pub fn criteria_from_params(params: &DashboardParams) -> Result<QueryCriteria, CriteriaError> {
    let sort_key = match params.sort.as_deref() {
        Some(label) if !label.trim().is_empty() => SortKey::parse(label)?,
        _ => SortKey::default(),
    };

    Ok(QueryCriteria::new()
        .with_search(params.q.clone().unwrap_or_default())
        .with_regions(split_selection(&params.regions))
        .with_agencies(split_selection(&params.agencies))
        .with_sort(sort_key))
}

/// Flatten multi-select values; empty input means no selection
fn split_selection(values: &[String]) -> Vec<String> {
    values
        .iter()
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Dashboard handler: search box, filters, sort dropdown, results table
pub async fn dashboard(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Response {
    let params = DashboardParams::from_query(raw.as_deref().unwrap_or(""));
    let criteria = match criteria_from_params(&params) {
        Ok(criteria) => criteria,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    let results = state.engine.query(&criteria);

    match params.format.as_deref() {
        Some("json") => Json(DashboardResponse {
            search_text: criteria.search_text,
            sort_key: criteria.sort_key,
            number_of_results: results.len(),
            results,
        })
        .into_response(),
        Some("csv") => {
            let mut csv = String::from("agency,title,region,impact_score,date,summary\n");
            for r in results {
                csv.push_str(&format!(
                    "\"{}\",\"{}\",\"{}\",{},{},\"{}\"\n",
                    r.agency.replace('"', "\"\""),
                    r.title.replace('"', "\"\""),
                    r.region.replace('"', "\"\""),
                    r.impact_score,
                    r.date,
                    r.summary.replace('"', "\"\""),
                ));
            }
            ([(axum::http::header::CONTENT_TYPE, "text/csv")], csv).into_response()
        }
        _ => {
            let mut ctx = Context::new();
            ctx.insert("instance_name", state.instance_name());
            ctx.insert("search_text", &criteria.search_text);
            ctx.insert("selected_regions", &criteria.regions);
            ctx.insert("selected_agencies", &criteria.agencies);
            ctx.insert("sort_key", criteria.sort_key.as_str());
            ctx.insert(
                "sort_options",
                &SortKey::all().map(|k| k.as_str()).to_vec(),
            );
            ctx.insert("regions", &state.store.regions());
            ctx.insert("agencies", &state.store.agencies());
            ctx.insert("results", &results);
            ctx.insert("result_count", &results.len());
            ctx.insert("topics", &state.insights.topics());
            ctx.insert("version", crate::VERSION);

            match state.templates.render_with_context("index.html", &ctx) {
                Ok(html) => Html(html).into_response(),
                Err(e) => {
                    tracing::error!("Template error: {}", e);
                    (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
                }
            }
        }
    }
}

/// Parameters for insight requests
#[derive(Debug, Deserialize)]
pub struct InsightParams {
    pub topic: Option<String>,
}

/// Sidebar insight handler
pub async fn insight(
    State(state): State<AppState>,
    Query(params): Query<InsightParams>,
) -> impl IntoResponse {
    let topic = params.topic.unwrap_or_default();
    Json(serde_json::json!({
        "topic": topic,
        "insight": state.insights.respond(&topic),
    }))
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criteria_from_empty_params() {
        let criteria = criteria_from_params(&DashboardParams::default()).unwrap();
        assert!(criteria.is_unfiltered());
        assert_eq!(criteria.sort_key, SortKey::Newest);
    }

    #[test]
    fn test_criteria_from_widget_params() {
        let params = DashboardParams {
            q: Some("  oncology ".to_string()),
            regions: vec!["US, EU".to_string()],
            agencies: vec!["FDA".to_string()],
            sort: Some("Highest Impact".to_string()),
            format: None,
        };
        let criteria = criteria_from_params(&params).unwrap();

        assert_eq!(criteria.search_text, "oncology");
        assert!(criteria.regions.contains("US"));
        assert!(criteria.regions.contains("EU"));
        assert!(criteria.agencies.contains("FDA"));
        assert_eq!(criteria.sort_key, SortKey::HighestImpact);
    }

    #[test]
    fn test_multi_select_repeated_keys() {
        // the form a <select multiple> actually submits
        let params = DashboardParams::from_query("q=&regions=US&regions=EU&sort=Highest+Impact");
        let criteria = criteria_from_params(&params).unwrap();

        assert_eq!(criteria.regions.len(), 2);
        assert!(criteria.regions.contains("US"));
        assert!(criteria.regions.contains("EU"));
        assert!(criteria.agencies.is_empty());
        assert_eq!(criteria.sort_key, SortKey::HighestImpact);
    }

    #[test]
    fn test_from_query_percent_decoding() {
        let params = DashboardParams::from_query("q=drug%20safety&format=json");
        assert_eq!(params.q.as_deref(), Some("drug safety"));
        assert_eq!(params.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_from_query_comma_form_still_accepted() {
        let params = DashboardParams::from_query("regions=US,EU");
        let criteria = criteria_from_params(&params).unwrap();
        assert!(criteria.regions.contains("US"));
        assert!(criteria.regions.contains("EU"));
    }

    #[test]
    fn test_criteria_rejects_bad_sort_label() {
        let params = DashboardParams {
            sort: Some("Trending".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            criteria_from_params(&params),
            Err(CriteriaError::InvalidSortKey(_))
        ));
    }

    #[test]
    fn test_trailing_commas_mean_no_selection() {
        let params = DashboardParams {
            regions: vec![" , ,".to_string()],
            ..Default::default()
        };
        let criteria = criteria_from_params(&params).unwrap();
        assert!(criteria.regions.is_empty());
    }

    #[test]
    fn test_health_handler() {
        let response = tokio_test::block_on(health()).into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
