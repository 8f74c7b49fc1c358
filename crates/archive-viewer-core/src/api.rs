//! Wire format of the extraction backend.
//!
//! - `POST /process-archive` with `{archive_url}` returns
//!   `{session_id, structure}` or `{error}`
//! - `GET /view-file/{session_id}/{encoded path}` serves file bytes
//!
//! The HTTP transport itself lives in the shell; this module only builds
//! requests and interprets responses so the rules can be tested natively.

use serde::{Deserialize, Serialize};

use crate::config::VIEW_FILE_ENDPOINT;
use crate::error::ApiError;
use crate::session::{ResourceLocator, SessionId};
use crate::tree::{ArchiveTree, Node};

/// Body of `POST /process-archive`.
#[derive(Clone, Debug, Serialize)]
pub struct ProcessArchiveRequest<'a> {
    pub archive_url: &'a str,
}

/// Raw response body. Every field is optional on the wire.
#[derive(Clone, Debug, Default, Deserialize)]
struct ProcessArchiveResponse {
    #[serde(default)]
    session_id: Option<String>,
    #[serde(default)]
    structure: Option<Node>,
    #[serde(default)]
    error: Option<String>,
}

/// A successfully processed archive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessedArchive {
    pub session_id: SessionId,
    pub tree: ArchiveTree,
}

/// Interpret a `/process-archive` response.
///
/// # Rules
///
/// - Non-2xx: the body's `error` if it has one, else `Server error: {status} {status_text}`
/// - 2xx with `error`: that error
/// - 2xx without `session_id` or `structure`: decode error
pub fn interpret_response(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<ProcessedArchive, ApiError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ProcessArchiveResponse>(body)
            .ok()
            .and_then(|r| r.error);
        return Err(match message {
            Some(message) => ApiError::Server(message),
            None => ApiError::Http {
                status,
                status_text: status_text.to_string(),
            },
        });
    }

    let response: ProcessArchiveResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;

    if let Some(error) = response.error {
        return Err(ApiError::Server(error));
    }

    let session_id = response
        .session_id
        .ok_or_else(|| ApiError::Decode("missing session_id".to_string()))?;
    let structure = response
        .structure
        .ok_or_else(|| ApiError::Decode("missing structure".to_string()))?;

    Ok(ProcessedArchive {
        session_id: SessionId::new(session_id),
        tree: ArchiveTree::new(structure),
    })
}

/// Build the locator for a file: the whole path is encoded as one component.
pub fn view_file_url(session: &SessionId, path: &str) -> ResourceLocator {
    ResourceLocator::new(format!(
        "{}/{}/{}",
        VIEW_FILE_ENDPOINT,
        session,
        urlencoding::encode(path)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body() {
        let body = serde_json::to_string(&ProcessArchiveRequest {
            archive_url: "https://example.com/a.zip",
        })
        .unwrap();
        assert_eq!(body, r#"{"archive_url":"https://example.com/a.zip"}"#);
    }

    #[test]
    fn test_success() {
        let body = r#"{
            "message": "ok",
            "session_id": "1717",
            "structure": {"name": "root", "type": "directory", "children": [
                {"name": "z.jpg", "type": "file", "is_image": true}
            ]}
        }"#;
        let archive = interpret_response(200, "OK", body).unwrap();
        assert_eq!(archive.session_id.as_str(), "1717");
        assert_eq!(archive.tree.root().children.len(), 1);
    }

    #[test]
    fn test_error_field_on_success_status() {
        let err = interpret_response(200, "OK", r#"{"error": "bad archive"}"#).unwrap_err();
        assert_eq!(err, ApiError::Server("bad archive".to_string()));
    }

    #[test]
    fn test_http_error_with_body() {
        let err = interpret_response(400, "Bad Request", r#"{"error": "no url"}"#).unwrap_err();
        assert_eq!(err, ApiError::Server("no url".to_string()));
    }

    #[test]
    fn test_http_error_without_body() {
        let err = interpret_response(500, "Internal Server Error", "<html>").unwrap_err();
        assert_eq!(err.to_string(), "Server error: 500 Internal Server Error");
    }

    #[test]
    fn test_malformed_success_body() {
        assert!(matches!(
            interpret_response(200, "OK", "not json"),
            Err(ApiError::Decode(_))
        ));
        assert!(matches!(
            interpret_response(200, "OK", r#"{"session_id": "1"}"#),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_view_file_url_encodes_path() {
        let id = SessionId::new("99");
        assert_eq!(view_file_url(&id, "z.jpg").as_str(), "/view-file/99/z.jpg");
        assert_eq!(
            view_file_url(&id, "a/x.png").as_str(),
            "/view-file/99/a%2Fx.png"
        );
        assert_eq!(
            view_file_url(&id, "صور/1.png").as_str(),
            "/view-file/99/%D8%B5%D9%88%D8%B1%2F1.png"
        );
    }
}
