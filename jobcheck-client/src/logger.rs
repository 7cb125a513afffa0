//! Response logger

use reqwest::Response;

use crate::envelope::Envelope;
use crate::error::Result;
use crate::recorder::ExchangeRecorder;

/// Read a response into an [`Envelope`] and record it
///
/// The body is decoded as JSON; anything else becomes the non-JSON sentinel
/// rather than an error. Status and body are recorded, in that order, before
/// the envelope is handed back for assertions.
///
/// Only a failure to read the body off the wire is returned as an error.
pub async fn log_response(recorder: &dyn ExchangeRecorder, response: Response) -> Result<Envelope> {
    let status = response.status();
    let bytes = response.bytes().await?;

    let envelope = Envelope::from_parts(status, &bytes);
    recorder.record_status(envelope.status);
    recorder.record_body(&envelope.body);

    Ok(envelope)
}
