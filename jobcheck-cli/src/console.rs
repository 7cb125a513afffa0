//! Console recorder
//!
//! Status codes and bodies go to the log; rendered jobs and headings are
//! printed to stdout for whoever is watching the run.

use colored::*;
use jobcheck_client::{Body, ExchangeRecorder, StatusCode, TracingRecorder};

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleRecorder {
    log: TracingRecorder,
}

impl ExchangeRecorder for ConsoleRecorder {
    fn record_status(&self, status: StatusCode) {
        self.log.record_status(status);
    }

    fn record_body(&self, body: &Body) {
        self.log.record_body(body);
    }

    fn record_note(&self, note: &str) {
        if note.ends_with(':') {
            println!("\n{}", note.bold());
        } else {
            println!("{}", note);
        }
    }
}
