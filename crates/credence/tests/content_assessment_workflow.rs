//! Integration specifications for the misinformation-risk assessment workflow.
//!
//! Scenarios exercise the public engine facade and the HTTP router end to end,
//! covering combined text-and-link checks, the link-only mode, and media
//! placeholder verdicts without reaching into private modules.

mod common {
    use std::sync::Arc;

    use credence::assessment::domain::{AssessmentRequest, MediaUpload};
    use credence::assessment::{assessment_router, AssessmentEngine, SignalCatalog};

    pub(super) fn engine() -> AssessmentEngine {
        AssessmentEngine::new(SignalCatalog::standard())
    }

    pub(super) fn build_router() -> axum::Router {
        assessment_router(Arc::new(engine()))
    }

    pub(super) fn content(text: &str, url: Option<&str>) -> AssessmentRequest {
        AssessmentRequest::Content {
            text: Some(text.to_string()),
            url: url.map(str::to_string),
        }
    }

    pub(super) fn url_only(url: &str) -> AssessmentRequest {
        AssessmentRequest::Content {
            text: None,
            url: Some(url.to_string()),
        }
    }

    pub(super) fn link(url: &str) -> AssessmentRequest {
        AssessmentRequest::Link {
            url: Some(url.to_string()),
        }
    }

    pub(super) fn upload(filename: &str) -> AssessmentRequest {
        AssessmentRequest::Media {
            upload: Some(MediaUpload {
                filename: filename.to_string(),
                size_bytes: 48_213,
                declared_type: Some("image/jpeg".to_string()),
            }),
        }
    }

    pub(super) fn labels(verdict: &credence::assessment::domain::Verdict) -> Vec<&str> {
        verdict
            .signals
            .iter()
            .map(|signal| signal.label.as_str())
            .collect()
    }
}

mod scoring {
    use super::common::*;
    use credence::assessment::domain::RiskBand;

    #[test]
    fn sensational_claim_with_weak_host_scores_high() {
        let engine = engine();
        let verdict = engine
            .assess(content(
                "SHOCKING secret exposed by insiders!!!",
                Some("http://example.blogspot.com/post"),
            ))
            .expect("combined assessment succeeds");

        assert_eq!(
            labels(&verdict),
            vec![
                "Sensational punctuation",
                "Clickbait phrasing",
                "Unverified host",
                "Not an authority domain",
            ]
        );
        assert_eq!(verdict.score, 0.65);
        assert_eq!(verdict.risk, RiskBand::High);
    }

    #[test]
    fn virality_nudges_land_in_the_medium_band() {
        let engine = engine();
        let verdict = engine
            .assess(content(
                "Forward this to everyone you know right now!!!",
                None,
            ))
            .expect("text-only assessment succeeds");

        assert_eq!(
            labels(&verdict),
            vec!["Sensational punctuation", "Virality nudge"]
        );
        assert_eq!(verdict.score, 0.40);
        assert_eq!(verdict.risk, RiskBand::Medium);
    }

    #[test]
    fn calm_reporting_with_an_authority_source_scores_low() {
        let engine = engine();
        let verdict = engine
            .assess(content(
                "The city council opens the renovated library branch on Saturday.",
                Some("https://www.citylibrary.org/announcements"),
            ))
            .expect("combined assessment succeeds");

        assert!(verdict.signals.is_empty());
        assert_eq!(verdict.score, 0.0);
        assert_eq!(verdict.risk, RiskBand::Low);
        assert_eq!(verdict.recommendations.len(), 3);
    }

    #[test]
    fn link_mode_weighs_the_same_findings_heavier() {
        let engine = engine();

        let combined = engine
            .assess(url_only("https://medium.com/@writer/story"))
            .expect("combined assessment succeeds");
        let link_only = engine
            .assess(link("https://medium.com/@writer/story"))
            .expect("link assessment succeeds");

        assert_eq!(
            labels(&combined),
            vec!["Unverified host", "Not an authority domain"]
        );
        assert_eq!(labels(&link_only), labels(&combined));
        assert_eq!(combined.score, 0.20);
        assert_eq!(link_only.score, 0.30);
    }

    #[test]
    fn unparseable_input_counts_as_malformed_evidence() {
        let engine = engine();
        let verdict = engine
            .assess(link("not a url"))
            .expect("link assessment succeeds");

        assert_eq!(labels(&verdict), vec!["Malformed URL"]);
        assert_eq!(verdict.score, 0.30);
        assert_eq!(verdict.risk, RiskBand::Medium);
    }

    #[test]
    fn media_uploads_get_the_placeholder_verdict() {
        let engine = engine();
        let verdict = engine
            .assess(upload("street-rally.jpg"))
            .expect("media assessment succeeds");

        assert_eq!(
            labels(&verdict),
            vec!["Unknown provenance", "No embedded metadata check"]
        );
        assert_eq!(verdict.score, 0.45);
        assert_eq!(verdict.risk, credence::assessment::domain::RiskBand::Medium);
        assert_eq!(
            verdict.recommendations[0],
            "Request original, uncompressed source file."
        );
    }
}

mod routing {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn read_json_body(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        serde_json::from_slice(&body).expect("json")
    }

    #[tokio::test]
    async fn post_detect_returns_a_full_verdict() {
        let router = build_router();

        let request = Request::builder()
            .method("POST")
            .uri("/api/detect")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({
                    "text": "SHOCKING secret exposed by insiders!!!",
                })
                .to_string(),
            ))
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let payload = read_json_body(response).await;
        assert_eq!(payload.get("risk"), Some(&json!("medium")));
        assert_eq!(payload.get("score"), Some(&json!(0.45)));
        assert_eq!(
            payload
                .get("signals")
                .and_then(Value::as_array)
                .map(Vec::len),
            Some(2)
        );
        assert_eq!(
            payload
                .get("recommendations")
                .and_then(Value::as_array)
                .and_then(|items| items.first().cloned()),
            Some(json!("Cross-check with at least two reputable sources."))
        );
    }

    #[tokio::test]
    async fn post_detect_link_without_url_is_rejected() {
        let router = build_router();

        let request = Request::builder()
            .method("POST")
            .uri("/api/detect/link")
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let payload = read_json_body(response).await;
        assert_eq!(
            payload.get("error").and_then(Value::as_str),
            Some("Please provide a URL in the request body as `url`")
        );
    }

    #[tokio::test]
    async fn post_detect_link_scores_authority_hosts_clean() {
        let router = build_router();

        let request = Request::builder()
            .method("POST")
            .uri("/api/detect/link")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({ "url": "https://pib.gov.in/factcheck" }).to_string(),
            ))
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let payload = read_json_body(response).await;
        assert_eq!(payload.get("risk"), Some(&json!("low")));
        assert_eq!(payload.get("score"), Some(&json!(0.0)));
        assert_eq!(payload.get("signals"), Some(&json!([])));
    }
}
