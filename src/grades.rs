//! Student Grades
//!
//! Fetches a student's grades from `GET /api/grades/{id}`. The record shape
//! belongs to the server, so the parsed body is handed back as-is and the
//! caller decides how to show it.
//!
//! Every failure (bad status, network, malformed body) collapses into one
//! user-facing danger notification; the details only go to the log.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GradesError, GradesResult};
use crate::notifications::NotificationKind;

pub const GRADES_LOADED: &str = "Calificaciones cargadas";
pub const GRADES_FAILED: &str = "Error al cargar calificaciones";

/// Endpoint path for one student's grades
pub fn grades_path(student_id: &str) -> String {
    format!("/api/grades/{}", urlencoding::encode(student_id.trim()))
}

/// Status and raw body of an HTTP response
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues GET requests against the grades API.
///
/// Futures are not `Send` so the browser transport can implement this.
#[async_trait(?Send)]
pub trait GradeTransport {
    async fn get(&self, path: &str) -> GradesResult<HttpReply>;
}

/// Receives user-facing outcome messages
pub trait Notifier {
    fn notify(&self, kind: NotificationKind, message: &str);
}

/// Error body the server sends alongside failure statuses
#[derive(Debug, Deserialize)]
struct ApiError {
    error: String,
}

/// Parsed grades body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grades(pub Value);

impl Grades {
    /// The records, when the body is a JSON array
    pub fn records(&self) -> &[Value] {
        self.0.as_array().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Flatten object records into a header row plus text rows.
    ///
    /// Columns follow first appearance across records.
    pub fn to_table(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let mut headers: Vec<String> = Vec::new();
        for record in self.records() {
            if let Some(obj) = record.as_object() {
                for key in obj.keys() {
                    if !headers.contains(key) {
                        headers.push(key.clone());
                    }
                }
            }
        }

        let rows = self
            .records()
            .iter()
            .map(|record| {
                headers
                    .iter()
                    .map(|h| record.get(h).map(cell_text).unwrap_or_default())
                    .collect()
            })
            .collect();

        (headers, rows)
    }
}

/// Text shown for a JSON value inside a table cell
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Fetch and parse without reporting to the user
pub async fn fetch_grades<T>(transport: &T, student_id: &str) -> GradesResult<Grades>
where
    T: GradeTransport + ?Sized,
{
    let path = grades_path(student_id);
    let reply = transport.get(&path).await?;

    if !reply.is_success() {
        let message = serde_json::from_str::<ApiError>(&reply.body)
            .map(|e| e.error)
            .unwrap_or_else(|_| "Request failed".to_string());
        return Err(GradesError::Status {
            status: reply.status,
            message,
        });
    }

    let value: Value = serde_json::from_str(&reply.body)?;
    Ok(Grades(value))
}

/// Fetch a student's grades and report the outcome through `notifier`.
///
/// Exactly one notification is raised per call: success or danger.
pub async fn load_student_grades<T, N>(
    transport: &T,
    notifier: &N,
    student_id: &str,
) -> GradesResult<Grades>
where
    T: GradeTransport + ?Sized,
    N: Notifier + ?Sized,
{
    match fetch_grades(transport, student_id).await {
        Ok(grades) => {
            tracing::info!(student_id, records = grades.len(), "grades loaded");
            notifier.notify(NotificationKind::Success, GRADES_LOADED);
            Ok(grades)
        }
        Err(e) => {
            tracing::error!(student_id, error = %e, "failed to load grades");
            notifier.notify(NotificationKind::Danger, GRADES_FAILED);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeTransport {
        reply: GradesResult<HttpReply>,
        requested: RefCell<Vec<String>>,
    }

    impl FakeTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(HttpReply {
                    status,
                    body: body.to_string(),
                }),
                requested: RefCell::new(Vec::new()),
            }
        }

        fn failing(error: &str) -> Self {
            Self {
                reply: Err(GradesError::Network(error.to_string())),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl GradeTransport for FakeTransport {
        async fn get(&self, path: &str) -> GradesResult<HttpReply> {
            self.requested.borrow_mut().push(path.to_string());
            self.reply.clone()
        }
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
        fn count(&self, kind: NotificationKind) -> usize {
            self.seen.borrow().iter().filter(|(k, _)| *k == kind).count()
        }
    }

    const BODY: &str = r#"[
        {"tarea": "Ensayo 1", "calificacion": 9.5, "fecha_calificacion": "2024-09-02 08:05"},
        {"tarea": "Ensayo 2", "calificacion": 8, "fecha_calificacion": null}
    ]"#;

    #[test]
    fn test_grades_path() {
        assert_eq!(grades_path("42"), "/api/grades/42");
        assert_eq!(grades_path(" 42 "), "/api/grades/42");
        assert_eq!(grades_path("a/b c"), "/api/grades/a%2Fb%20c");
    }

    #[tokio::test]
    async fn test_success_returns_parsed_body() {
        let transport = FakeTransport::replying(200, BODY);
        let notifier = RecordingNotifier::default();

        let grades = load_student_grades(&transport, &notifier, "7").await.unwrap();

        assert_eq!(grades.len(), 2);
        assert_eq!(grades.records()[0]["tarea"], "Ensayo 1");
        assert_eq!(transport.requested.borrow().as_slice(), ["/api/grades/7"]);
        assert_eq!(
            notifier.seen.borrow().as_slice(),
            [(NotificationKind::Success, GRADES_LOADED.to_string())]
        );
    }

    #[tokio::test]
    async fn test_server_error_raises_one_danger_notification() {
        let transport = FakeTransport::replying(500, r#"{"error": "Error de conexión"}"#);
        let notifier = RecordingNotifier::default();

        let err = load_student_grades(&transport, &notifier, "7").await.unwrap_err();

        assert_eq!(
            err,
            GradesError::Status {
                status: 500,
                message: "Error de conexión".to_string()
            }
        );
        assert_eq!(notifier.count(NotificationKind::Danger), 1);
        assert_eq!(notifier.count(NotificationKind::Success), 0);
        assert_eq!(notifier.seen.borrow()[0].1, GRADES_FAILED);
    }

    #[tokio::test]
    async fn test_non_json_error_body() {
        let transport = FakeTransport::replying(404, "<html>Not Found</html>");
        let err = fetch_grades(&transport, "7").await.unwrap_err();
        assert_eq!(
            err,
            GradesError::Status {
                status: 404,
                message: "Request failed".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_network_and_parse_failures_collapse() {
        for transport in [
            FakeTransport::failing("connection refused"),
            FakeTransport::replying(200, "{truncated"),
        ] {
            let notifier = RecordingNotifier::default();
            let result = load_student_grades(&transport, &notifier, "7").await;

            assert!(result.is_err());
            assert_eq!(
                notifier.seen.borrow().as_slice(),
                [(NotificationKind::Danger, GRADES_FAILED.to_string())]
            );
        }
    }

    #[test]
    fn test_to_table() {
        let grades = Grades(serde_json::from_str(BODY).unwrap());
        let (headers, rows) = grades.to_table();

        assert_eq!(headers.len(), 3);
        assert!(headers.contains(&"tarea".to_string()));

        let col = headers.iter().position(|h| h == "calificacion").unwrap();
        assert_eq!(rows[0][col], "9.5");
        assert_eq!(rows[1][col], "8");

        let date_col = headers.iter().position(|h| h == "fecha_calificacion").unwrap();
        assert_eq!(rows[1][date_col], "");
    }

    #[test]
    fn test_non_array_body_has_no_records() {
        let grades = Grades(serde_json::json!({"promedio": 9.1}));
        assert!(grades.is_empty());
        assert_eq!(grades.to_table(), (Vec::new(), Vec::new()));
    }
}
