//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cli::args::{FuzzfixArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::levenshtein::MisspellingSpan;

/// One learned correction.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionEntry {
    pub misspelling: String,
    pub correction: String,
    pub frequency: usize,
}

/// A correction with every misspelling mapped to it.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportEntry {
    pub correction: String,
    pub count: usize,
    pub misspellings: Vec<String>,
}

/// Result of the distance command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub dictionary_word: String,
    pub word: String,
    pub distance: usize,
    pub misspelling: MisspellingSpan,
}

/// Write a result in the format selected on the command line.
pub fn output_result<T: Serialize, W: Write>(
    message: &str,
    result: &T,
    args: &FuzzfixArgs,
    out: &mut W,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args, out),
        OutputFormat::Json => output_json(result, args, out),
        OutputFormat::Tsv => output_tsv(result, out),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize, W: Write>(
    message: &str,
    result: &T,
    args: &FuzzfixArgs,
    out: &mut W,
) -> Result<()> {
    if args.verbosity() > 0 {
        writeln!(out, "{message}")?;
        writeln!(out)?;
    }

    let value = serde_json::to_value(result)?;
    match value {
        Value::Array(items) => {
            for item in &items {
                match item {
                    Value::Object(obj) => {
                        let line: Vec<String> = obj.values().map(format_value).collect();
                        writeln!(out, "{}", line.join("  "))?;
                    }
                    other => writeln!(out, "{}", format_value(other))?,
                }
            }
        }
        Value::Object(obj) => {
            for (key, val) in &obj {
                writeln!(out, "{key}: {}", format_value(val))?;
            }
        }
        other => writeln!(out, "{}", format_value(&other))?,
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize, W: Write>(result: &T, args: &FuzzfixArgs, out: &mut W) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

/// Output in tab-separated format.
fn output_tsv<T: Serialize, W: Write>(result: &T, out: &mut W) -> Result<()> {
    let value = serde_json::to_value(result)?;

    match value {
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                if let Value::Object(obj) = item {
                    if i == 0 {
                        let headers: Vec<&str> = obj.keys().map(String::as_str).collect();
                        writeln!(out, "{}", headers.join("\t"))?;
                    }
                    let values: Vec<String> = obj.values().map(format_value).collect();
                    writeln!(out, "{}", values.join("\t"))?;
                } else {
                    writeln!(out, "{}", format_value(item))?;
                }
            }
        }
        Value::Object(obj) => {
            for (key, val) in &obj {
                writeln!(out, "{key}\t{}", format_value(val))?;
            }
        }
        other => writeln!(out, "{}", format_value(&other))?,
    }
    Ok(())
}

/// Format a JSON value for plain-text output.
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(arr) => arr.iter().map(format_value).collect::<Vec<_>>().join(","),
        Value::Object(obj) => obj
            .iter()
            .map(|(key, val)| format!("{key}={}", format_value(val)))
            .collect::<Vec<_>>()
            .join(" "),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::Parser;

    fn args(format: &str) -> FuzzfixArgs {
        FuzzfixArgs::try_parse_from(["fuzzfix", "-q", "-f", format, "distance", "a", "b"]).unwrap()
    }

    fn entries() -> Vec<CorrectionEntry> {
        vec![CorrectionEntry {
            misspelling: "correkt".to_string(),
            correction: "correct".to_string(),
            frequency: 2,
        }]
    }

    #[test]
    fn test_tsv_output() {
        let mut out = Vec::new();
        output_result("", &entries(), &args("tsv"), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("correkt"));
        assert!(lines[1].contains('\t'));
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        output_result("", &entries(), &args("json"), &mut out).unwrap();

        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["correction"], "correct");
        assert_eq!(value[0]["frequency"], 2);
    }

    #[test]
    fn test_human_output_object() {
        let result = DistanceResult {
            dictionary_word: "correct".to_string(),
            word: "korrect".to_string(),
            distance: 1,
            misspelling: MisspellingSpan::new("c", "k"),
        };
        let mut out = Vec::new();
        output_result("Distance", &result, &args("human"), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("distance: 1"));
        assert!(text.contains("misspelling: dictionary=c word=k"));
        // Quiet mode suppresses the message line.
        assert!(!text.starts_with("Distance"));
    }
}
