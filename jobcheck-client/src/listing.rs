//! Listing helper

use jobcheck_core::domain::job::Job;
use serde_json::Value;

use crate::JobsClient;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::logger::log_response;
use crate::recorder::ExchangeRecorder;

/// Fetch the whole collection, record it, and render every job
///
/// No validation happens here beyond decoding; callers assert on the
/// returned envelope themselves.
pub async fn fetch_all_jobs(client: &JobsClient, recorder: &dyn ExchangeRecorder) -> Result<Envelope> {
    let response = client.list_jobs().await?;
    let envelope = log_response(recorder, response).await?;

    render_jobs(recorder, "All Jobs:", &envelope);

    Ok(envelope)
}

/// Render each element of a collection body under a heading
pub fn render_jobs(recorder: &dyn ExchangeRecorder, heading: &str, envelope: &Envelope) {
    recorder.record_note(heading);

    match envelope.items() {
        Some(items) => {
            for item in items {
                recorder.record_note(&render_item(item));
            }
        }
        None => {
            tracing::warn!("Expected a job list, got: {}", envelope.body);
        }
    }
}

fn render_item(item: &Value) -> String {
    match serde_json::from_value::<Job>(item.clone()) {
        Ok(job) => format!("  {}", job),
        Err(_) => format!("  {}", item),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::MemoryRecorder;
    use reqwest::StatusCode;

    #[test]
    fn test_render_jobs_lists_every_element() {
        let recorder = MemoryRecorder::new();
        let envelope = Envelope::from_parts(
            StatusCode::OK,
            br#"[
                {"id":1,"jobName":"Build Project","status":"In Progress","jobType":"Build"},
                {"unexpected":true}
            ]"#,
        );

        render_jobs(&recorder, "All Jobs:", &envelope);

        assert_eq!(
            recorder.notes(),
            vec![
                "All Jobs:".to_string(),
                "  #1 Build Project [In Progress] type=Build".to_string(),
                r#"  {"unexpected":true}"#.to_string(),
            ]
        );
    }

    #[test]
    fn test_render_jobs_with_non_list_body() {
        let recorder = MemoryRecorder::new();
        let envelope = Envelope::from_parts(StatusCode::OK, b"oops");

        render_jobs(&recorder, "All Jobs:", &envelope);

        assert_eq!(recorder.notes(), vec!["All Jobs:".to_string()]);
    }
}
