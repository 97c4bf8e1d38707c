//! Strategy catalogue HTTP handlers.
//!
//! ```text
//! GET /api/strategies
//! GET /api/strategies?id=1,2
//! GET /api/strategies/{id}
//! ```

use actix_web::{HttpRequest, HttpResponse, get, web};

use crate::domain::{Error, Strategy, StrategyId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, StrategySchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_strategy_id, parse_strategy_id_query};

const STRATEGY_NOT_FOUND: &str = "Strategy not found";

async fn find_one(state: &HttpState, id: StrategyId) -> ApiResult<Strategy> {
    state
        .strategies
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found(STRATEGY_NOT_FOUND))
}

/// List the catalogue, optionally filtered by id.
///
/// With no `id` the full catalogue is returned. A single `id` returns that
/// one entry as an object. Several ids return the matching entries; unknown
/// ids are skipped.
#[utoipa::path(
    get,
    path = "/api/strategies",
    params(
        ("id" = Option<String>, Query, description = "Strategy id, repeatable or comma separated")
    ),
    responses(
        (status = 200, description = "Strategies, or one strategy for a single id", body = [StrategySchema]),
        (status = 400, description = "Invalid strategy ID", body = ErrorSchema),
        (status = 404, description = "Strategy not found", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["strategies"],
    operation_id = "listStrategies"
)]
#[get("/strategies")]
pub async fn list_strategies(
    state: web::Data<HttpState>,
    request: HttpRequest,
) -> ApiResult<HttpResponse> {
    let ids = parse_strategy_id_query(request.query_string())?;
    match ids.as_slice() {
        [] => Ok(HttpResponse::Ok().json(state.strategies.list_all().await?)),
        [id] => Ok(HttpResponse::Ok().json(find_one(&state, *id).await?)),
        _ => {
            let mut strategies = state.strategies.find_by_ids(&ids).await?;
            strategies.sort_by_key(|strategy| strategy.id);
            Ok(HttpResponse::Ok().json(strategies))
        }
    }
}

/// Fetch one strategy.
#[utoipa::path(
    get,
    path = "/api/strategies/{id}",
    params(("id" = String, Path, description = "Numeric strategy id")),
    responses(
        (status = 200, description = "Strategy", body = StrategySchema),
        (status = 400, description = "Invalid strategy ID", body = ErrorSchema),
        (status = 404, description = "Strategy not found", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["strategies"],
    operation_id = "getStrategy"
)]
#[get("/strategies/{id}")]
pub async fn get_strategy(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Strategy>> {
    let id = parse_strategy_id(&path.into_inner())?;
    find_one(&state, id).await.map(web::Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::StrategyRepositoryError;
    use crate::inbound::http::test_utils::{MockPorts, strategy};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::Value;

    async fn get(ports: MockPorts, uri: &str) -> actix_web::dev::ServiceResponse {
        let app = actix_test::init_service(
            App::new().app_data(ports.into_state()).service(
                web::scope("/api")
                    .service(list_strategies)
                    .service(get_strategy),
            ),
        )
        .await;
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await
    }

    #[actix_web::test]
    async fn full_catalogue_without_filter() {
        let mut ports = MockPorts::default();
        ports
            .strategies
            .expect_list_all()
            .times(1)
            .returning(|| Ok((1..=8).map(strategy).collect()));

        let res = get(ports, "/api/strategies").await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        let entries = body.as_array().expect("array body");
        assert_eq!(entries.len(), 8);
        assert_eq!(entries[0]["riskLevel"], "low");
    }

    #[actix_web::test]
    async fn single_id_returns_an_object() {
        let mut ports = MockPorts::default();
        ports
            .strategies
            .expect_find_by_id()
            .withf(|id| *id == StrategyId::new(4))
            .returning(|id| Ok(Some(strategy(id.value()))));

        let res = get(ports, "/api/strategies?id=4").await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["id"], 4);
    }

    #[actix_web::test]
    async fn id_list_returns_matches_in_id_order() {
        let mut ports = MockPorts::default();
        ports
            .strategies
            .expect_find_by_ids()
            .withf(|ids| ids.to_vec() == vec![StrategyId::new(5), StrategyId::new(2), StrategyId::new(42)])
            .returning(|_| Ok(vec![strategy(5), strategy(2)]));

        let res = get(ports, "/api/strategies?id=5,2&id=42").await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        let ids: Vec<i64> = body
            .as_array()
            .expect("array body")
            .iter()
            .filter_map(|entry| entry["id"].as_i64())
            .collect();
        assert_eq!(ids, vec![2, 5]);
    }

    #[rstest]
    #[case("/api/strategies/abc", StatusCode::BAD_REQUEST, "Invalid strategy ID")]
    #[case("/api/strategies?id=x", StatusCode::BAD_REQUEST, "Invalid strategy ID")]
    #[case("/api/strategies/99", StatusCode::NOT_FOUND, "Strategy not found")]
    #[case("/api/strategies?id=99", StatusCode::NOT_FOUND, "Strategy not found")]
    #[actix_web::test]
    async fn lookup_failures(
        #[case] uri: &str,
        #[case] status: StatusCode,
        #[case] message: &str,
    ) {
        let mut ports = MockPorts::default();
        ports.strategies.expect_find_by_id().returning(|_| Ok(None));

        let res = get(ports, uri).await;
        assert_eq!(res.status(), status);
        let payload: Error = actix_test::read_body_json(res).await;
        assert_eq!(payload.message(), message);
    }

    #[actix_web::test]
    async fn path_lookup_returns_entry() {
        let mut ports = MockPorts::default();
        ports
            .strategies
            .expect_find_by_id()
            .returning(|id| Ok(Some(strategy(id.value()))));

        let res = get(ports, "/api/strategies/7").await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["id"], 7);
        assert_eq!(body["category"], "informative");
    }

    #[actix_web::test]
    async fn storage_outage_maps_to_service_unavailable() {
        let mut ports = MockPorts::default();
        ports
            .strategies
            .expect_list_all()
            .returning(|| Err(StrategyRepositoryError::connection("pool exhausted")));

        let res = get(ports, "/api/strategies").await;
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
        let payload: Error = actix_test::read_body_json(res).await;
        assert_eq!(payload.code(), ErrorCode::ServiceUnavailable);
    }
}
