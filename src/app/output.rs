//! Per-URL result lines printed on stdout.

use log::error;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::pipeline::Outcome;

/// One result as emitted by `--output json`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ResultRecord<'a> {
    pub input: &'a str,
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

impl<'a> ResultRecord<'a> {
    pub fn new(input: &'a str, outcome: &'a Outcome) -> Self {
        let (label, url, reason) = match outcome {
            Outcome::Neutralised(url) => ("neutralised", Some(url.as_str()), None),
            Outcome::Malicious(reason) => ("malicious", None, Some(reason.as_str())),
            Outcome::Unreachable(kind) => ("unreachable", None, Some(kind.as_str())),
        };
        Self {
            input,
            outcome: label,
            url,
            reason,
        }
    }
}

/// Formats one result line.
///
/// Plain lines read `input -> url`, or `input -> <outcome>: <reason>` for
/// rejected input. If JSON encoding fails the error is logged and the plain
/// line is returned instead.
pub fn render(input: &str, outcome: &Outcome, format: OutputFormat) -> String {
    let record = ResultRecord::new(input, outcome);
    match format {
        OutputFormat::Json => match serde_json::to_string(&record) {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to encode result for {} as JSON: {}", input, e);
                plain_line(&record)
            }
        },
        OutputFormat::Plain => plain_line(&record),
    }
}

fn plain_line(record: &ResultRecord<'_>) -> String {
    match (record.url, record.reason) {
        (Some(url), _) => format!("{} -> {}", record.input, url),
        (None, reason) => format!(
            "{} -> {}: {}",
            record.input,
            record.outcome,
            reason.unwrap_or_default()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::FailureKind;
    use crate::malice::MaliceReason;

    #[test]
    fn test_render_plain() {
        let ok = Outcome::Neutralised("https://example.com/a".to_string());
        assert_eq!(
            render("www.example.com/a/", &ok, OutputFormat::Plain),
            "www.example.com/a/ -> https://example.com/a"
        );

        let bad = Outcome::Malicious(MaliceReason::ScriptInjection);
        assert_eq!(
            render("x", &bad, OutputFormat::Plain),
            "x -> malicious: Script injection"
        );
    }

    #[test]
    fn test_render_json() {
        let ok = Outcome::Neutralised("https://example.com/".to_string());
        let line = render("example.com", &ok, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["input"], "example.com");
        assert_eq!(value["outcome"], "neutralised");
        assert_eq!(value["url"], "https://example.com/");
        assert!(value.get("reason").is_none());

        let gone = Outcome::Unreachable(FailureKind::Timeout);
        let line = render("slow.example", &gone, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["outcome"], "unreachable");
        assert_eq!(value["reason"], "Timeout");
        assert!(value.get("url").is_none());
    }

    #[test]
    fn test_render_json_is_one_line_for_awkward_input() {
        let bad = Outcome::Malicious(MaliceReason::ScriptInjection);
        let input = "https://example.com/?q=\"a\"\n<script>";
        let line = render(input, &bad, OutputFormat::Json);
        assert!(!line.is_empty());
        assert!(!line.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["input"], input);
        assert_eq!(value["reason"], "Script injection");
    }
}
