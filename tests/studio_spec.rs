//! End-to-end: studio client against a real in-process gateway, with the
//! upstream model API mocked.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Router};
use serde_json::json;

use grader_gateway::api::{create_router, AppState};
use grader_gateway::config::GatewayConfig;
use studio::forms::{CriterionForm, RubricForm, SubmissionForm};
use studio::render::render_outcome;
use studio::{ClientError, GradeClient, GradeOutcome};
use validator::Validate;

#[derive(Clone)]
struct MockUpstream {
    status: StatusCode,
    body: String,
}

async fn respond(State(mock): State<MockUpstream>) -> impl IntoResponse {
    (mock.status, mock.body)
}

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server died");
    });
    format!("http://{}", addr)
}

/// Spin up mock upstream plus gateway; return a client pointed at the gateway.
async fn setup(upstream_status: StatusCode, upstream_body: String) -> GradeClient {
    let upstream = Router::new()
        .route("/responses", post(respond))
        .with_state(MockUpstream {
            status: upstream_status,
            body: upstream_body,
        });
    let upstream_url = spawn(upstream).await;

    let state = AppState::new(GatewayConfig::new("test-key", &upstream_url));
    let gateway_url = spawn(create_router(state)).await;

    GradeClient::new(format!("{}/api/v1", gateway_url))
}

fn rubric_form() -> RubricForm {
    RubricForm {
        name: "Rubric - Midterm 1".to_string(),
        criteria: vec![
            CriterionForm::new("Correctness", 60.0, "check the key steps"),
            CriterionForm::new("Method", 40.0, "score logic and clarity"),
        ],
    }
}

fn submission_form() -> SubmissionForm {
    SubmissionForm {
        student_id: "00123".to_string(),
        answers: "Answer to task 1: x=5".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn grades_a_validated_submission() {
    let form = rubric_form();
    assert!(form.validate().is_ok());
    let rubric = form.into_rubric();

    let result = json!({
        "total": 80,
        "perCriterion": [
            { "id": rubric.criteria[0].id, "points": 50, "feedback": "right idea" },
            { "id": rubric.criteria[1].id, "points": 30, "feedback": "" }
        ],
        "feedbackSummary": "solid"
    });
    let upstream_body = json!({ "output_parsed": result });
    let client = setup(StatusCode::OK, upstream_body.to_string()).await;

    let outcome = client
        .grade(&rubric, &submission_form().into_submission())
        .await
        .expect("grade call failed");

    match &outcome {
        GradeOutcome::Graded(graded) => {
            assert_eq!(graded.total, 80.0);
            assert_eq!(graded.per_criterion.len(), 2);
        }
        other => panic!("expected Graded, got {:?}", other),
    }

    let report = render_outcome(&rubric, &outcome);
    assert!(report.contains("Total: 80 / 100"));
    assert!(report.contains("Correctness: +50  right idea"));
}

#[tokio::test]
async fn surfaces_the_raw_text_diagnostic_to_the_caller() {
    let upstream_body = json!({
        "output": [{
            "type": "message",
            "content": [{ "type": "output_text", "text": "not json{" }]
        }]
    });
    let client = setup(StatusCode::OK, upstream_body.to_string()).await;

    let rubric = rubric_form().into_rubric();
    let outcome = client
        .grade(&rubric, &submission_form().into_submission())
        .await
        .expect("grade call failed");

    assert_eq!(
        outcome,
        GradeOutcome::RawText {
            raw: "not json{".to_string()
        }
    );
    let report = render_outcome(&rubric, &outcome);
    assert!(report.contains("could not be parsed"));
}

#[tokio::test]
async fn surfaces_the_raw_response_diagnostic_to_the_caller() {
    let upstream_body = json!({ "id": "resp_1", "output": [] });
    let client = setup(StatusCode::OK, upstream_body.to_string()).await;

    let outcome = client
        .grade(
            &rubric_form().into_rubric(),
            &submission_form().into_submission(),
        )
        .await
        .expect("grade call failed");

    match outcome {
        GradeOutcome::RawResponse { raw_response } => {
            assert_eq!(raw_response["id"], "resp_1");
        }
        other => panic!("expected RawResponse, got {:?}", other),
    }
}

#[tokio::test]
async fn upstream_failure_becomes_a_typed_error_with_status_and_body() {
    let client = setup(
        StatusCode::TOO_MANY_REQUESTS,
        r#"{"error":{"message":"quota exceeded"}}"#.to_string(),
    )
    .await;

    let err = client
        .grade(
            &rubric_form().into_rubric(),
            &submission_form().into_submission(),
        )
        .await
        .expect_err("expected an upstream error");

    match err {
        ClientError::Upstream { status, body } => {
            assert_eq!(status, 429);
            assert!(body.contains("quota exceeded"));
        }
        other => panic!("expected Upstream, got {:?}", other),
    }
}

#[tokio::test]
async fn saves_and_lists_templates_and_rubrics() {
    // The grade route is unused here; the upstream can be anything.
    let client = setup(StatusCode::OK, "{}".to_string()).await;

    let template = studio::TemplateForm {
        title: "Midterm 1".to_string(),
        instructions: "Task 1: ...\nTask 2: ...".to_string(),
        allow_attachments: false,
        attachment: None,
    };
    assert!(template.validate().is_ok());
    let saved = client
        .save_template(&template.into_template())
        .await
        .expect("save_template failed");
    assert_eq!(saved.template.title, "Midterm 1");

    let fetched = client.get_template(saved.id).await.expect("get failed");
    assert_eq!(fetched.id, saved.id);

    let rubric = rubric_form().into_rubric();
    let saved_rubric = client.save_rubric(&rubric).await.expect("save_rubric failed");
    assert_eq!(saved_rubric.rubric.criteria.len(), 2);

    let rubrics = client.list_rubrics().await.expect("list failed");
    assert_eq!(rubrics.len(), 1);
}
