use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use ridersim_core::RiderRecord;
use ridersim_similarity::{
    Profile, SimilarRiders, SimilarityEngine, SimilarityError, SimilarityResult,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    query: String,
}

#[derive(Deserialize)]
struct RiderQuery {
    name: String,
    limit: Option<usize>,
}

#[derive(Serialize)]
struct RiderList<'a> {
    riders: Vec<&'a str>,
}

#[derive(Serialize)]
struct SelectedRider<'a> {
    #[serde(flatten)]
    rider: &'a RiderRecord,
    profile: Profile,
}

#[derive(Serialize)]
struct RiderDataResponse<'a> {
    selected: SelectedRider<'a>,
    similar: Vec<SimilarityResult>,
    profile: Profile,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(engine: Arc<SimilarityEngine>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(engine.clone()))
                .configure(Self::routes)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }

    /// Register the rider routes; expects `web::Data<Arc<SimilarityEngine>>` app data
    pub fn routes(cfg: &mut web::ServiceConfig) {
        cfg.route("/riders", web::get().to(list_riders))
            .route("/riders/search", web::get().to(search_riders))
            .route("/rider", web::get().to(get_rider_data));
    }
}

async fn list_riders(engine: web::Data<Arc<SimilarityEngine>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(RiderList {
        riders: engine.roster().sorted_names(),
    }))
}

async fn search_riders(
    engine: web::Data<Arc<SimilarityEngine>>,
    query: web::Query<SearchQuery>,
) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(RiderList {
        riders: engine.roster().search(&query.query),
    }))
}

async fn get_rider_data(
    engine: web::Data<Arc<SimilarityEngine>>,
    query: web::Query<RiderQuery>,
) -> ActixResult<HttpResponse> {
    let limit = query
        .limit
        .unwrap_or(engine.config().default_max_results);

    let similar = match engine.similar(&query.name, limit) {
        Ok(similar) => similar,
        Err(e @ SimilarityError::RiderNotFound(_)) => {
            warn!("{}", e);
            return Ok(HttpResponse::NotFound().json(serde_json::json!({
                "error": e.to_string()
            })));
        }
        Err(e) => {
            return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            })));
        }
    };

    let SimilarRiders {
        rider,
        profile,
        results,
    } = similar;
    Ok(HttpResponse::Ok().json(RiderDataResponse {
        selected: SelectedRider {
            rider: &rider,
            profile,
        },
        similar: results,
        profile,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};
    use ridersim_core::{Roster, Specialty, SpecialtyScores};
    use serde_json::Value;

    fn create_test_engine() -> Arc<SimilarityEngine> {
        let sprint = |v: f64| SpecialtyScores::default().with(Specialty::Sprint, v);
        let roster = Roster::new(vec![
            RiderRecord::new("Van Aert Wout", 29.0, sprint(90.0)).with_team("Visma"),
            RiderRecord::new("Philipsen Jasper", 26.0, sprint(95.0)),
            RiderRecord::new("Pogacar Tadej", 25.0, sprint(60.0)),
        ])
        .unwrap();
        Arc::new(SimilarityEngine::with_defaults(roster).unwrap())
    }

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(create_test_engine()))
                    .configure(RestApi::routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_list_riders_sorted() {
        let app = app!();
        let req = test::TestRequest::get().uri("/riders").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body["riders"],
            serde_json::json!(["Philipsen Jasper", "Pogacar Tadej", "Van Aert Wout"])
        );
    }

    #[actix_web::test]
    async fn test_search_riders() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/riders/search?query=PO")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["riders"], serde_json::json!(["Pogacar Tadej"]));
    }

    #[actix_web::test]
    async fn test_get_rider_data() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/rider?name=Van%20Aert%20Wout&limit=1")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["selected"]["name"], "Van Aert Wout");
        assert_eq!(body["selected"]["team"], "Visma");
        assert_eq!(body["selected"]["profile"], "Sprinter");
        assert_eq!(body["profile"], "Sprinter");

        let similar = body["similar"].as_array().unwrap();
        assert_eq!(similar.len(), 1);
        assert_eq!(similar[0]["rider"]["name"], "Philipsen Jasper");
        assert_eq!(similar[0]["reasons"], "SPR");
    }

    #[actix_web::test]
    async fn test_unknown_rider_is_not_found() {
        let app = app!();
        let req = test::TestRequest::get().uri("/rider?name=Nobody").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
