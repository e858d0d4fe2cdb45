use super::open_input;
use anyhow::{Context, Result};
use signup_form::{
    Config, FieldValidationEngine, FormEvent, JsonLinesSink, LogSink, SignupForm, SubmissionSink,
    SubmitError,
};
use std::fs::File;
use std::io::BufRead;
use std::path::Path;
use tracing::info;

/// Outcome counts of one replay
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub events: usize,
    pub accepted: usize,
    pub rejected: usize,
}

pub fn run(config: &Config, events: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let mut form = config.build_form()?;
    let reader = open_input(events)?;

    let mut sink: Box<dyn SubmissionSink> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?;
            Box::new(JsonLinesSink::new(file))
        }
        None => Box::new(LogSink),
    };

    let stats = replay(&mut form, reader, sink.as_mut())?;
    info!(events = stats.events, accepted = stats.accepted, rejected = stats.rejected, "replay finished");

    print!("{}", summary(&form));
    println!(
        "submissions: {} accepted, {} rejected",
        stats.accepted, stats.rejected
    );
    Ok(())
}

/// Apply every event line to `form`
///
/// Blank lines and lines starting with `#` are skipped. A rejected submit is
/// counted, any other failure stops the replay.
pub fn replay<E, R, S>(form: &mut SignupForm<E>, reader: R, sink: &mut S) -> Result<ReplayStats>
where
    E: FieldValidationEngine,
    R: BufRead,
    S: SubmissionSink + ?Sized,
{
    let mut stats = ReplayStats::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read event")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let event: FormEvent = serde_json::from_str(line)
            .with_context(|| format!("Invalid event on line {}", index + 1))?;
        stats.events += 1;

        match form.apply(event, sink) {
            Ok(Some(_)) => stats.accepted += 1,
            Ok(None) => {}
            Err(SubmitError::NotSubmittable { .. }) => stats.rejected += 1,
            Err(e) => return Err(e).with_context(|| format!("Submit failed on line {}", index + 1)),
        }
    }

    Ok(stats)
}

/// One line per validated field: name, touched flag, displayed error
pub fn summary<E: FieldValidationEngine>(form: &SignupForm<E>) -> String {
    let mut out = String::new();

    for (name, state) in form.state().fields() {
        let touched = if state.touched { "touched" } else { "-" };
        let status = form.visible_error(name).unwrap_or("ok");
        out.push_str(&format!("{:<10} {:<8} {}\n", name.as_str(), touched, status));
    }
    out.push_str(&format!("can submit: {}\n", form.can_submit()));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use signup_form::SubmissionPayload;
    use std::io::Cursor;

    const SCRIPT: &str = r#"
# first attempt, password missing
{"type":"input","field":"firstName","value":"Ann"}
{"type":"blur","field":"firstName"}
{"type":"input","field":"lastName","value":"Lee"}
{"type":"blur","field":"lastName"}
{"type":"input","field":"email","value":"ann@lee.com"}
{"type":"blur","field":"email"}
{"type":"submit"}

{"type":"input","field":"password","value":"abc12345!"}
{"type":"blur","field":"password"}
{"type":"submit"}
"#;

    #[test]
    fn test_replay_counts() {
        let mut form = SignupForm::new();
        let mut sink: Vec<SubmissionPayload> = Vec::new();

        let stats = replay(&mut form, Cursor::new(SCRIPT), &mut sink).unwrap();

        assert_eq!(
            stats,
            ReplayStats {
                events: 10,
                accepted: 1,
                rejected: 1
            }
        );
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].password, "abc12345!");
    }

    #[test]
    fn test_trusting_form_keeps_the_gate() {
        let mut form = SignupForm::new().revalidate_on_submit(false);
        let mut sink: Vec<SubmissionPayload> = Vec::new();

        let stats = replay(&mut form, Cursor::new(SCRIPT), &mut sink).unwrap();
        assert_eq!(stats.accepted, 1);
        assert_eq!(stats.rejected, 1);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_trusting_form_rejects_invalid_email() {
        let mut form = SignupForm::new().revalidate_on_submit(false);
        let mut sink: Vec<SubmissionPayload> = Vec::new();
        let script = "{\"type\":\"input\",\"field\":\"email\",\"value\":\"ab\"}\n{\"type\":\"submit\"}\n";

        let stats = replay(&mut form, Cursor::new(script), &mut sink).unwrap();
        assert_eq!(stats.rejected, 1);
        assert!(sink.is_empty());
    }

    struct ClosedSink;

    impl SubmissionSink for ClosedSink {
        fn accept(&mut self, _payload: &SubmissionPayload) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_sink_failure_stops_replay() {
        let mut form = SignupForm::new();

        let err = replay(&mut form, Cursor::new(SCRIPT), &mut ClosedSink).unwrap_err();
        assert_eq!(err.to_string(), "Submit failed on line 13");
        assert!(err.root_cause().to_string().contains("closed"));
    }

    #[test]
    fn test_bad_line_reports_position() {
        let mut form = SignupForm::new();
        let mut sink: Vec<SubmissionPayload> = Vec::new();
        let script = "{\"type\":\"submit\"}\n{\"type\":\"wiggle\"}\n";

        let err = replay(&mut form, Cursor::new(script), &mut sink).unwrap_err();
        assert_eq!(err.to_string(), "Invalid event on line 2");
    }

    #[test]
    fn test_summary() {
        let mut form = SignupForm::new();
        form.input(signup_form::FieldName::Email, "ann");
        form.blur(signup_form::FieldName::Email);

        let text = summary(&form);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "email      touched  Email must be valid.");
        assert_eq!(lines[1], "firstName  -        ok");
        assert_eq!(lines[4], "can submit: false");
    }
}
