#![cfg(feature = "native")]

use axum::{extract::Path, http::StatusCode, routing::get, Router};
use std::cell::RefCell;

use calificaciones::config::ApiConfig;
use calificaciones::{
    load_student_grades, GradesError, HttpGradeClient, NotificationKind, Notifier, GRADES_FAILED,
    GRADES_LOADED,
};

const GRADES_BODY: &str = r#"[
    {"tarea": "Ensayo 1", "calificacion": 9.5, "fecha_calificacion": "2024-09-02 08:05"},
    {"tarea": "Proyecto", "calificacion": 10, "fecha_calificacion": "2024-08-20 13:40"}
]"#;

async fn grades_handler(Path(id): Path<String>) -> (StatusCode, String) {
    match id.as_str() {
        "7" => (StatusCode::OK, GRADES_BODY.to_string()),
        "500" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error": "Error de conexión"}"#.to_string(),
        ),
        "malformed" => (StatusCode::OK, "{\"tarea\": ".to_string()),
        _ => (StatusCode::NOT_FOUND, "Not Found".to_string()),
    }
}

/// Start a portal stand-in on an ephemeral port and return its origin
async fn spawn_portal() -> String {
    let app = Router::new().route("/api/grades/:id", get(grades_handler));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn client_for(base_url: &str) -> HttpGradeClient {
    HttpGradeClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        request_timeout_secs: 5,
    })
    .unwrap()
}

#[derive(Default)]
struct RecordingNotifier {
    seen: RefCell<Vec<(NotificationKind, String)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        self.seen.borrow_mut().push((kind, message.to_string()));
    }
}

impl RecordingNotifier {
    fn kinds(&self) -> Vec<NotificationKind> {
        self.seen.borrow().iter().map(|(k, _)| *k).collect()
    }
}

#[tokio::test]
async fn test_loads_grades_over_http() {
    let base = spawn_portal().await;
    let client = client_for(&base);
    let notifier = RecordingNotifier::default();

    let grades = load_student_grades(&client, &notifier, "7").await.unwrap();

    assert_eq!(grades.len(), 2);
    assert_eq!(grades.records()[1]["tarea"], "Proyecto");
    assert_eq!(notifier.kinds(), vec![NotificationKind::Success]);
    assert_eq!(notifier.seen.borrow()[0].1, GRADES_LOADED);
}

#[tokio::test]
async fn test_http_500_gives_exactly_one_danger_notification() {
    let base = spawn_portal().await;
    let client = client_for(&base);
    let notifier = RecordingNotifier::default();

    let err = load_student_grades(&client, &notifier, "500")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        GradesError::Status {
            status: 500,
            message: "Error de conexión".to_string(),
        }
    );
    assert_eq!(notifier.kinds(), vec![NotificationKind::Danger]);
    assert_eq!(notifier.seen.borrow()[0].1, GRADES_FAILED);
}

#[tokio::test]
async fn test_malformed_body_is_a_parse_error() {
    let base = spawn_portal().await;
    let client = client_for(&base);
    let notifier = RecordingNotifier::default();

    let err = load_student_grades(&client, &notifier, "malformed")
        .await
        .unwrap_err();

    assert!(matches!(err, GradesError::Parse(_)));
    assert_eq!(notifier.kinds(), vec![NotificationKind::Danger]);
}

#[tokio::test]
async fn test_unreachable_server_is_a_network_error() {
    // Grab a free port, then close it so nothing is listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{}", addr));
    let notifier = RecordingNotifier::default();

    let err = load_student_grades(&client, &notifier, "7").await.unwrap_err();

    assert!(matches!(err, GradesError::Network(_)));
    assert_eq!(notifier.kinds(), vec![NotificationKind::Danger]);
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let base = spawn_portal().await;
    let client = client_for(&format!("{}/", base));
    assert_eq!(client.base_url(), base);

    let notifier = RecordingNotifier::default();
    assert!(load_student_grades(&client, &notifier, "7").await.is_ok());
}
