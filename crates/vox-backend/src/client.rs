use std::time::Duration;

use reqwest::blocking::multipart;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::contracts::ExpectedOutput;
use crate::contracts::JobInput;
use crate::contracts::JobRequest;
use crate::contracts::JobStatus;
use crate::executor::build_result;
use crate::executor::JobContext;
use crate::executor::JobExecutor;
use crate::executor::JobOutcome;
use crate::executor::JobPayload;

/// JSON body of a text-result response.
#[derive(Debug, Deserialize)]
struct TextResponse {
    text: Option<String>,
    accuracy: Option<u8>,
}

/// Live backend over HTTP. Posts multipart forms (file plus parameter
/// fields) or JSON bodies and decodes either a `{text, accuracy}` result or
/// a binary media payload. Failures stay inside the returned outcome; no
/// retry, no cancellation; the request timeout is the only bound.
pub struct HttpBackend {
    client: Client,
}

impl HttpBackend {
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    fn round_trip(
        &self,
        request: &JobRequest,
        context: &JobContext<'_>,
    ) -> Result<JobPayload, String> {
        let url = format!("{}{}", context.origin, request.endpoint);

        let response = match &request.input {
            JobInput::Text { body } => self.client.post(&url).json(body).send(),
            JobInput::Upload {
                path,
                file_field,
                fields,
            } => {
                let mut form = multipart::Form::new()
                    .file(file_field.clone(), path)
                    .map_err(|err| format!("failed to read {}: {err}", path.display()))?;
                for field in fields {
                    form = form.text(field.name.clone(), field.value.clone());
                }
                self.client.post(&url).multipart(form).send()
            }
        }
        .map_err(|err| format!("network error: {err}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(format!("backend returned {status}: {body}"));
        }

        match request.output {
            ExpectedOutput::Json => {
                let decoded: TextResponse = response
                    .json()
                    .map_err(|err| format!("parse error: {err}"))?;
                Ok(JobPayload::Text {
                    text: decoded
                        .text
                        .unwrap_or_else(|| "No text was returned.".to_string()),
                    accuracy: decoded.accuracy,
                })
            }
            ExpectedOutput::Media => {
                let mime = response
                    .headers()
                    .get(reqwest::header::CONTENT_TYPE)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = response
                    .bytes()
                    .map_err(|err| format!("read error: {err}"))?
                    .to_vec();
                Ok(JobPayload::Media { bytes, mime })
            }
        }
    }
}

impl JobExecutor for HttpBackend {
    fn execute(&self, request: JobRequest, context: &JobContext<'_>) -> JobOutcome {
        match self.round_trip(&request, context) {
            Ok(payload) => JobOutcome {
                result: build_result(
                    &request,
                    JobStatus::Succeeded,
                    None,
                    vec![format!("{}{} responded", context.origin, request.endpoint)],
                ),
                payload: Some(payload),
            },
            Err(cause) => {
                log::error!("{} request failed: {cause}", request.feature_id);
                JobOutcome {
                    result: build_result(
                        &request,
                        JobStatus::Failed,
                        Some(format!(
                            "Failed to process {} request. Please try again.",
                            request.feature_id
                        )),
                        vec![cause],
                    ),
                    payload: None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::HttpBackend;
    use crate::contracts::ExpectedOutput;
    use crate::contracts::FormField;
    use crate::contracts::JobInput;
    use crate::contracts::JobRequest;
    use crate::contracts::JobStatus;
    use crate::executor::JobContext;
    use crate::executor::JobExecutor;

    fn backend() -> HttpBackend {
        HttpBackend::new(Duration::from_secs(1)).expect("client")
    }

    #[test]
    fn missing_upload_file_fails_before_any_network_io() {
        let outcome = backend().execute(
            JobRequest {
                project_id: "p1".to_string(),
                feature_id: "audio_to_text".to_string(),
                endpoint: "/audio_dubbing".to_string(),
                output: ExpectedOutput::Json,
                input: JobInput::Upload {
                    path: "/definitely/not/here.wav".into(),
                    file_field: "audio".to_string(),
                    fields: vec![FormField {
                        name: "src_lang".to_string(),
                        value: "en".to_string(),
                    }],
                },
            },
            &JobContext {
                origin: "http://127.0.0.1:9",
            },
        );

        assert_eq!(outcome.result.status, JobStatus::Failed);
        assert!(outcome.payload.is_none());
        assert!(outcome
            .result
            .message
            .expect("message")
            .contains("audio_to_text"));
    }

    #[test]
    fn unreachable_backend_fails_with_an_inline_message() {
        let outcome = backend().execute(
            JobRequest {
                project_id: "p1".to_string(),
                feature_id: "text_translate".to_string(),
                endpoint: "/text_translate".to_string(),
                output: ExpectedOutput::Json,
                input: JobInput::Text {
                    body: serde_json::json!({ "text": "hello", "dest_lang": "hi" }),
                },
            },
            // Discard port: nothing listens there.
            &JobContext {
                origin: "http://127.0.0.1:9",
            },
        );

        assert_eq!(outcome.result.status, JobStatus::Failed);
        assert!(!outcome.result.logs.is_empty());
    }
}
