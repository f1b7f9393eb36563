use std::thread;
use std::time::Duration;

use crate::contracts::JobRequest;
use crate::contracts::JobResult;
use crate::contracts::JobStatus;

/// Artifact produced by a successful job. Not serialized; media bytes are
/// handed straight to the caller.
#[derive(Debug, Clone)]
pub enum JobPayload {
    Text {
        text: String,
        accuracy: Option<u8>,
    },
    Media {
        bytes: Vec<u8>,
        mime: String,
    },
    ImageUrl(String),
}

#[derive(Debug, Clone)]
pub struct JobOutcome {
    pub result: JobResult,
    /// Absent when the job failed.
    pub payload: Option<JobPayload>,
}

pub struct JobContext<'a> {
    /// Backend origin, e.g. `http://127.0.0.1:5000`.
    pub origin: &'a str,
}

pub trait JobExecutor {
    fn execute(&self, request: JobRequest, context: &JobContext<'_>) -> JobOutcome;
}

/// Minimal RIFF/WAVE header followed by no samples; enough for hosts that
/// only route the bytes onward.
const SILENT_WAV: [u8; 44] = [
    0x52, 0x49, 0x46, 0x46, 0x24, 0x00, 0x00, 0x00, 0x57, 0x41, 0x56, 0x45, 0x66, 0x6D, 0x74,
    0x20, 0x10, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x44, 0xAC, 0x00, 0x00, 0x88, 0x58,
    0x01, 0x00, 0x02, 0x00, 0x10, 0x00, 0x64, 0x61, 0x74, 0x61, 0x00, 0x00, 0x00, 0x00,
];

const SAMPLE_IMAGE_URL: &str =
    "https://images.pexels.com/photos/1103970/pexels-photo-1103970.jpeg?auto=compress&cs=tinysrgb&w=800";

/// Stands in for the backend with a fixed-delay timer and a canned result
/// per feature. There is no error path for known features.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedBackend {
    delay: Duration,
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(2),
        }
    }
}

impl SimulatedBackend {
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl JobExecutor for SimulatedBackend {
    fn execute(&self, request: JobRequest, _context: &JobContext<'_>) -> JobOutcome {
        thread::sleep(self.delay);

        let payload = match request.feature_id.as_str() {
            "audio_to_text" | "audio_transcription" => Some(JobPayload::Text {
                text: "Welcome to our demonstration. Today we explore how media \
                       travels across languages without losing its voice."
                    .to_string(),
                accuracy: Some(95),
            }),
            "text_translate" | "document_translation" => Some(JobPayload::Text {
                text: "Bienvenido a nuestra demostración.".to_string(),
                accuracy: None,
            }),
            "text_summarize" => Some(JobPayload::Text {
                text: "The passage introduces cross-language media conversion."
                    .to_string(),
                accuracy: None,
            }),
            "image_to_description" => Some(JobPayload::Text {
                text: "A sunlit street scene with storefront signs in two scripts."
                    .to_string(),
                accuracy: None,
            }),
            "text_to_speech" => Some(JobPayload::Media {
                bytes: SILENT_WAV.to_vec(),
                mime: "audio/wav".to_string(),
            }),
            "video_dubbing" => Some(JobPayload::Media {
                bytes: SILENT_WAV.to_vec(),
                mime: "video/mp4".to_string(),
            }),
            "text_to_image" => Some(JobPayload::ImageUrl(SAMPLE_IMAGE_URL.to_string())),
            _ => None,
        };

        match payload {
            Some(payload) => JobOutcome {
                result: build_result(
                    &request,
                    JobStatus::Succeeded,
                    None,
                    vec!["simulated execution completed".to_string()],
                ),
                payload: Some(payload),
            },
            None => JobOutcome {
                result: build_result(
                    &request,
                    JobStatus::Failed,
                    Some(format!("Unknown feature: {}", request.feature_id)),
                    vec!["unknown feature id".to_string()],
                ),
                payload: None,
            },
        }
    }
}

pub(crate) fn build_result(
    request: &JobRequest,
    status: JobStatus,
    message: Option<String>,
    logs: Vec<String>,
) -> JobResult {
    JobResult {
        project_id: request.project_id.clone(),
        feature_id: request.feature_id.clone(),
        status,
        message,
        logs,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::JobContext;
    use super::JobExecutor;
    use super::JobOutcome;
    use super::JobPayload;
    use super::SimulatedBackend;
    use crate::contracts::ExpectedOutput;
    use crate::contracts::JobInput;
    use crate::contracts::JobRequest;
    use crate::contracts::JobStatus;

    fn request(feature_id: &str, output: ExpectedOutput) -> JobRequest {
        JobRequest {
            project_id: "p1".to_string(),
            feature_id: feature_id.to_string(),
            endpoint: format!("/{feature_id}"),
            output,
            input: JobInput::Text {
                body: serde_json::json!({ "text": "hello" }),
            },
        }
    }

    fn run(feature_id: &str, output: ExpectedOutput) -> JobOutcome {
        let executor = SimulatedBackend::with_delay(Duration::ZERO);
        executor.execute(request(feature_id, output), &JobContext { origin: "" })
    }

    #[test]
    fn transcription_features_return_text_with_accuracy() {
        let outcome = run("audio_to_text", ExpectedOutput::Json);
        assert_eq!(outcome.result.status, JobStatus::Succeeded);
        match outcome.payload.expect("payload") {
            JobPayload::Text { text, accuracy } => {
                assert!(!text.is_empty());
                assert_eq!(accuracy, Some(95));
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn media_features_return_typed_bytes() {
        let outcome = run("text_to_speech", ExpectedOutput::Media);
        match outcome.payload.expect("payload") {
            JobPayload::Media { bytes, mime } => {
                assert_eq!(mime, "audio/wav");
                assert_eq!(&bytes[..4], b"RIFF");
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn image_generation_returns_a_url() {
        let outcome = run("text_to_image", ExpectedOutput::Json);
        assert!(matches!(
            outcome.payload.expect("payload"),
            JobPayload::ImageUrl(url) if url.starts_with("https://")
        ));
    }

    #[test]
    fn unknown_feature_fails_without_payload() {
        let outcome = run("ppt_to_hologram", ExpectedOutput::Json);
        assert_eq!(outcome.result.status, JobStatus::Failed);
        assert!(outcome.payload.is_none());
        assert!(outcome
            .result
            .message
            .expect("message")
            .contains("ppt_to_hologram"));
    }
}
