// File: src/submission.rs
// Purpose: Where submitted payloads go

use crate::field::FieldName;
use crate::payload::SubmissionPayload;
use std::io::{self, Write};
use tracing::info;

/// Receives the snapshot of a submitted form
pub trait SubmissionSink {
    fn accept(&mut self, payload: &SubmissionPayload) -> io::Result<()>;
}

/// Collects payloads in memory
impl SubmissionSink for Vec<SubmissionPayload> {
    fn accept(&mut self, payload: &SubmissionPayload) -> io::Result<()> {
        self.push(payload.clone());
        Ok(())
    }
}

/// Logs each submission at `info`; the password is never written
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn accept(&mut self, payload: &SubmissionPayload) -> io::Result<()> {
        info!(
            email = %payload.email,
            first_name = %payload.first_name,
            last_name = %payload.last_name,
            password = "[redacted]",
            hear_about = %payload.hear_about,
            optin = payload.optin,
            "sign-up submitted"
        );
        Ok(())
    }
}

/// Writes one JSON object per submission
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SubmissionSink for JsonLinesSink<W> {
    fn accept(&mut self, payload: &SubmissionPayload) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, payload)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

/// Why a submission did not reach the sink
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("form is not submittable, unsatisfied fields: {}", format_fields(.unsatisfied))]
    NotSubmittable { unsatisfied: Vec<FieldName> },

    #[error("submission sink failed")]
    Sink(#[from] io::Error),
}

fn format_fields(fields: &[FieldName]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
