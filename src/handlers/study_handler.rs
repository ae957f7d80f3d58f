use std::sync::Arc;

use actix_web::{post, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::request::StudyRequestDto};

#[post("/api/study")]
async fn create_study_pack(
    state: web::Data<Arc<AppState>>,
    request: web::Json<StudyRequestDto>,
) -> Result<HttpResponse, AppError> {
    let pack = state
        .study_service
        .create_study_pack(&request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(pack))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        clients::{MockEncyclopediaClient, MockGenerativeModel},
        clock::FixedClock,
        config::Config,
        handlers::json_config,
        models::domain::EncyclopediaResult,
        test_utils::{
            fixtures::photosynthesis,
            test_helpers::{assert_error_status, assert_success_status},
        },
    };
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    fn state(encyclopedia: MockEncyclopediaClient, model: Option<MockGenerativeModel>) -> Arc<AppState> {
        Arc::new(AppState::with_collaborators(
            Config::test_config(),
            Arc::new(encyclopedia),
            model.map(|m| Arc::new(m) as Arc<dyn crate::clients::GenerativeModel>),
            Arc::new(FixedClock::from_millis(1_700_000_000_000)),
        ))
    }

    fn photosynthesis_encyclopedia() -> MockEncyclopediaClient {
        let mut encyclopedia = MockEncyclopediaClient::new();
        encyclopedia.expect_fetch().returning(|_| Ok(photosynthesis()));
        encyclopedia
    }

    async fn post_study(state: Arc<AppState>, body: Value) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(json_config())
                .service(create_study_pack),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/study")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_missing_topic_is_bad_request() {
        let mut encyclopedia = MockEncyclopediaClient::new();
        encyclopedia.expect_fetch().times(0);

        let (status, body) = post_study(state(encyclopedia, None), json!({})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"].as_str().unwrap().contains("Invalid"));
        assert_eq!(body["error"]["status"], 400);
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn test_non_string_topic_is_bad_request() {
        let (status, _) = post_study(
            state(MockEncyclopediaClient::new(), None),
            json!({"topic": 42}),
        )
        .await;
        assert_error_status(status);
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_normal_mode_without_ai() {
        let (status, body) = post_study(
            state(photosynthesis_encyclopedia(), None),
            json!({"topic": "Photosynthesis"}),
        )
        .await;

        assert_success_status(status);
        assert_eq!(body["topic"], "Photosynthesis");
        assert_eq!(body["mode"], "normal");
        assert!(body["math"].is_null());
        assert_eq!(body["quiz"].as_array().unwrap().len(), 3);
        assert!(body["quiz"][0]["q"].is_string());
        assert!(body["studyTip"].is_string());
        assert_eq!(
            body["source"]["wikipedia"],
            "https://en.wikipedia.org/wiki/Photosynthesis"
        );
    }

    #[actix_web::test]
    async fn test_math_mode_with_ai() {
        let mut model = MockGenerativeModel::new();
        model.expect_generate().times(1).returning(|_| {
            Ok(r#"```json
{"summary":["a","b","c"],"quiz":[],"math":{"question":"2+2?","answer":"4","explanation":"Add."},"studyTip":"Practice.","funFact":"Fun."}
```"#
                .to_string())
        });

        let (status, body) = post_study(
            state(photosynthesis_encyclopedia(), Some(model)),
            json!({"topic": "Photosynthesis", "mode": "math"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "math");
        assert_eq!(body["math"]["answer"], "4");
        assert_eq!(body["summary"], json!(["a", "b", "c"]));
        assert_eq!(body["quiz"].as_array().unwrap().len(), 3);
        assert_eq!(body["studyTip"], "Practice.");
        assert_eq!(body["funFact"], "Fun.");
    }

    #[actix_web::test]
    async fn test_unknown_topic_is_not_found() {
        let mut encyclopedia = MockEncyclopediaClient::new();
        encyclopedia
            .expect_fetch()
            .returning(|topic| Ok(EncyclopediaResult::not_found(topic)));

        let (status, body) =
            post_study(state(encyclopedia, None), json!({"topic": "Qwxzzy"})).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "Topic not found on Wikipedia");
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(MockEncyclopediaClient::new(), None)))
                .app_data(json_config())
                .service(create_study_pack),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/study")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
