//! API Module Tests
//!
//! Drives the router in-process and checks the JSON contract of each endpoint.
//!
//! ## Test Scopes
//! - **Parameter conversion**: Lists, age and date bounds, sort parsing.
//! - **Validation**: Rejection of bad page and limit values.
//! - **Endpoints**: Sales queries, filter options, health and unknown routes.

#[cfg(test)]
mod tests {
    use crate::api::handlers::build_query_spec;
    use crate::api::routes::build_router;
    use crate::api::types::SalesParams;
    use crate::dataset::loader::SharedDataset;
    use crate::dataset::types::{Dataset, Record};
    use crate::query::types::{AgeBounds, SortDirection, SortKey};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use chrono::NaiveDate;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let regions = ["North", "East", "South", "East", "West", "East"];
        let records = regions
            .iter()
            .enumerate()
            .map(|(i, region)| Record {
                customer_id: format!("C{}", i + 1),
                customer_name: format!("Shopper {}", i + 1),
                phone_number: format!("555-01{:02}", i),
                region: region.to_string(),
                gender: (if i % 2 == 0 { "Female" } else { "Male" }).to_string(),
                age: 25 + i as u32 * 5,
                quantity: (i as u32 * 7) % 5 + 1,
                tags: vec!["retail".to_string()],
                date: format!("2023-0{}-15", i + 1),
                payment_method: "Card".to_string(),
                ..Record::default()
            })
            .collect();
        build_router(SharedDataset::preloaded(Dataset::from_records(records)))
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    fn params() -> SalesParams {
        SalesParams::default()
    }

    // ============================================================
    // PARAMETER CONVERSION TESTS
    // ============================================================

    #[test]
    fn test_build_query_spec_defaults() {
        let spec = build_query_spec(&params()).unwrap();

        assert_eq!(spec.page, 1);
        assert_eq!(spec.page_size, 10);
        assert!(spec.search.is_none());
        assert!(spec.sort.is_none());
        assert!(spec.filters.is_empty());
    }

    #[test]
    fn test_build_query_spec_splits_lists() {
        let spec = build_query_spec(&SalesParams {
            region: Some(" North, South ,,".to_string()),
            tags: Some("a,b".to_string()),
            payment_method: Some("".to_string()),
            ..params()
        })
        .unwrap();

        assert_eq!(spec.filters.regions, vec!["North", "South"]);
        assert_eq!(spec.filters.tags, vec!["a", "b"]);
        assert!(spec.filters.payment_methods.is_empty());
    }

    #[test]
    fn test_build_query_spec_age_defaults() {
        let only_min = build_query_spec(&SalesParams {
            age_min: Some("30".to_string()),
            ..params()
        })
        .unwrap();
        assert_eq!(only_min.filters.age, Some(AgeBounds { min: 30, max: 999 }));

        let only_max = build_query_spec(&SalesParams {
            age_max: Some("40".to_string()),
            ..params()
        })
        .unwrap();
        assert_eq!(only_max.filters.age, Some(AgeBounds { min: 0, max: 40 }));

        let neither = build_query_spec(&SalesParams {
            age_min: Some(" ".to_string()),
            ..params()
        })
        .unwrap();
        assert_eq!(neither.filters.age, None);
    }

    #[test]
    fn test_build_query_spec_age_reads_leading_integer() {
        let suffixed = build_query_spec(&SalesParams {
            age_min: Some("25 yrs".to_string()),
            age_max: Some("40abc".to_string()),
            ..params()
        })
        .unwrap();
        assert_eq!(suffixed.filters.age, Some(AgeBounds { min: 25, max: 40 }));

        let zero_max = build_query_spec(&SalesParams {
            age_max: Some("0".to_string()),
            ..params()
        })
        .unwrap();
        assert_eq!(zero_max.filters.age, Some(AgeBounds { min: 0, max: 999 }));

        let garbage_max = build_query_spec(&SalesParams {
            age_min: Some("30".to_string()),
            age_max: Some("old".to_string()),
            ..params()
        })
        .unwrap();
        assert_eq!(garbage_max.filters.age, Some(AgeBounds { min: 30, max: 999 }));
    }

    #[test]
    fn test_build_query_spec_dates() {
        let spec = build_query_spec(&SalesParams {
            date_from: Some("2023-01-01".to_string()),
            date_to: Some("garbage".to_string()),
            ..params()
        })
        .unwrap();

        let dates = spec.filters.dates.unwrap();
        assert_eq!(dates.from, NaiveDate::from_ymd_opt(2023, 1, 1));
        assert_eq!(dates.to, None);

        let unparsable = build_query_spec(&SalesParams {
            date_from: Some("soon".to_string()),
            ..params()
        })
        .unwrap();
        assert!(unparsable.filters.dates.is_none());
    }

    #[test]
    fn test_build_query_spec_sort() {
        let spec = build_query_spec(&SalesParams {
            sort_by: Some("customerName".to_string()),
            sort_order: Some("DESC".to_string()),
            ..params()
        })
        .unwrap();
        let sort = spec.sort.unwrap();
        assert_eq!(sort.key, SortKey::CustomerName);
        assert_eq!(sort.direction, SortDirection::Desc);

        let default_order = build_query_spec(&SalesParams {
            sort_by: Some("date".to_string()),
            ..params()
        })
        .unwrap();
        assert_eq!(default_order.sort.unwrap().direction, SortDirection::Asc);

        let unknown = build_query_spec(&SalesParams {
            sort_by: Some("price".to_string()),
            ..params()
        })
        .unwrap();
        assert!(unknown.sort.is_none());
    }

    #[test]
    fn test_build_query_spec_rejects_bad_page_and_limit() {
        for page in ["0", "-1", "abc", "1.5"] {
            let result = build_query_spec(&SalesParams {
                page: Some(page.to_string()),
                ..params()
            });
            assert_eq!(result, Err("Invalid page number"), "page={}", page);
        }

        for limit in ["0", "101", "ten"] {
            let result = build_query_spec(&SalesParams {
                limit: Some(limit.to_string()),
                ..params()
            });
            assert_eq!(result, Err("Invalid limit"), "limit={}", limit);
        }

        let max = build_query_spec(&SalesParams {
            limit: Some("100".to_string()),
            ..params()
        })
        .unwrap();
        assert_eq!(max.page_size, 100);
    }

    // ============================================================
    // ENDPOINT TESTS
    // ============================================================

    #[tokio::test]
    async fn test_sales_endpoint_filters_sorts_and_paginates() {
        let (status, body) = get_json(
            test_router(),
            "/api/sales?region=East&sortBy=quantity&sortOrder=desc&page=1&limit=2",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert!(data.iter().all(|r| r["region"] == "East"));
        assert!(data[0]["quantity"].as_u64() >= data[1]["quantity"].as_u64());

        assert_eq!(body["pagination"]["totalRecords"], 3);
        assert_eq!(body["pagination"]["totalPages"], 2);
        assert_eq!(body["pagination"]["pageSize"], 2);
        assert_eq!(body["filters"]["regions"][0], "East");
    }

    #[tokio::test]
    async fn test_sales_endpoint_search_and_camel_case_fields() {
        let (status, body) = get_json(test_router(), "/api/sales?search=shopper%203").await;

        assert_eq!(status, StatusCode::OK);
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["customerName"], "Shopper 3");
        assert_eq!(data[0]["paymentMethod"], "Card");
        assert!(data[0].get("finalAmount").is_some());
    }

    #[tokio::test]
    async fn test_sales_endpoint_date_and_age_filters() {
        let (_, body) = get_json(
            test_router(),
            "/api/sales?dateFrom=2023-02-01&dateTo=2023-04-15&ageMin=30",
        )
        .await;

        let ids: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["customerId"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["C2", "C3", "C4"]);
    }

    #[tokio::test]
    async fn test_sales_endpoint_clamps_page() {
        let (status, body) = get_json(test_router(), "/api/sales?page=50&limit=4").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pagination"]["page"], 2);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_sales_endpoint_rejects_invalid_page() {
        let (status, body) = get_json(test_router(), "/api/sales?page=abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Invalid page number");
    }

    #[tokio::test]
    async fn test_sales_endpoint_rejects_invalid_limit() {
        let (status, body) = get_json(test_router(), "/api/sales?limit=500").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid limit");
    }

    #[tokio::test]
    async fn test_sales_endpoint_rejects_malformed_query_string_as_json() {
        let (status, body) = get_json(test_router(), "/api/sales?page=1&page=2").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Invalid query parameters");
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_sales_endpoint_long_search_matches_nothing() {
        let uri = format!("/api/sales?search={}", "k".repeat(50_000));
        let (status, body) = get_json(test_router(), &uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pagination"]["totalRecords"], 0);
        assert!(body["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sales_endpoint_reports_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        let router = build_router(SharedDataset::new(dir.path().join("missing.csv")));

        let (status, body) = get_json(router, "/api/sales").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Failed to retrieve data");
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_filter_options_endpoint() {
        let (status, body) = get_json(test_router(), "/api/filters/options").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let filters = &body["filters"];
        assert_eq!(filters["regions"].as_array().unwrap().len(), 4);
        assert_eq!(filters["genders"][0], "Female");
        assert_eq!(filters["paymentMethods"][0], "Card");
        assert_eq!(filters["tags"][0], "retail");
        assert_eq!(filters["ageRange"]["min"], 25);
        assert_eq!(filters["ageRange"]["max"], 50);
        assert_eq!(filters["dateRange"]["from"], "2023-01-15");
        assert_eq!(filters["dateRange"]["to"], "2023-06-15");
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (status, body) = get_json(test_router(), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "OK");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, body) = get_json(test_router(), "/api/nothing").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Route not found");
    }
}
