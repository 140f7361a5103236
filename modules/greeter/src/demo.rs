//! One-shot demo run.
//!
//! Drives every [`Service`] operation once and renders the console
//! transcript printed by the `pipeline-demo` binary.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{info, instrument};

use crate::domain::Service;

/// First line of the transcript.
pub const BANNER: &str = "=== Jenkins Pipeline Demo Application ===";

/// Last line of the transcript.
pub const COMPLETION: &str = "Application executed successfully!";

/// Name greeted when none is configured.
pub const DEFAULT_NAME: &str = "Jenkins Pipeline";

/// Inputs of a demo run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoInput {
    /// Name to greet; `None` or a blank value greets a guest.
    ///
    /// Numbers and booleans (`2024`, `true`) are taken as their text form.
    #[serde(deserialize_with = "name_as_text")]
    pub name: Option<String>,
    /// Left operand of the sum.
    pub a: i64,
    /// Right operand of the sum.
    pub b: i64,
}

impl Default for DemoInput {
    fn default() -> Self {
        Self {
            name: Some(DEFAULT_NAME.to_owned()),
            a: 10,
            b: 20,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Self::Bool(v) => v.to_string(),
            Self::Int(v) => v.to_string(),
            Self::UInt(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
            Self::Text(v) => v,
        }
    }
}

fn name_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_text))
}

/// Results of a demo run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub greeting: String,
    pub a: i64,
    pub b: i64,
    pub sum: i64,
    pub sum_is_even: bool,
    pub timestamp_millis: i64,
}

impl DemoReport {
    /// Render the console transcript, one entry per line.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        vec![
            BANNER.to_owned(),
            self.greeting.clone(),
            format!("Sum of {} + {} = {}", self.a, self.b, self.sum),
            format!("Is {} even? {}", self.sum, self.sum_is_even),
            COMPLETION.to_owned(),
        ]
    }
}

/// Run every operation once against `input`.
#[must_use]
#[instrument(skip(service))]
pub fn run_demo(service: &Service, input: &DemoInput) -> DemoReport {
    let greeting = service.format_welcome(input.name.as_deref());
    let sum = service.sum(input.a, input.b);
    let sum_is_even = service.is_even(sum);
    let timestamp_millis = service.current_timestamp_millis();

    info!(sum, sum_is_even, timestamp_millis, "demo run completed");

    DemoReport {
        greeting,
        a: input.a,
        b: input.b,
        sum,
        sum_is_even,
        timestamp_millis,
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::Clock;

    struct FixedClock;

    impl Clock for FixedClock {
        fn now_millis(&self) -> i64 {
            42
        }
    }

    fn fixed_service() -> Service {
        Service::with_clock(Arc::new(FixedClock))
    }

    #[test]
    fn test_default_transcript() {
        let report = run_demo(&fixed_service(), &DemoInput::default());

        assert_eq!(
            report.lines(),
            vec![
                "=== Jenkins Pipeline Demo Application ===",
                "Welcome to Jenkins Pipeline!",
                "Sum of 10 + 20 = 30",
                "Is 30 even? true",
                "Application executed successfully!",
            ]
        );
        assert_eq!(report.timestamp_millis, 42);
    }

    #[test]
    fn test_guest_and_odd_sum() {
        let input = DemoInput {
            name: Some("  ".to_owned()),
            a: -5,
            b: 2,
        };
        let report = run_demo(&fixed_service(), &input);

        assert_eq!(report.greeting, "Welcome, Guest!");
        assert_eq!(report.sum, -3);
        assert!(!report.sum_is_even);
        assert_eq!(report.lines()[3], "Is -3 even? false");
    }

    #[test]
    fn test_input_deserializes_with_defaults() {
        let input: DemoInput = serde_json::from_str(r#"{"b": 7}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some(DEFAULT_NAME));
        assert_eq!(input.a, 10);
        assert_eq!(input.b, 7);
    }

    #[test]
    fn test_input_name_accepts_scalars() {
        let input: DemoInput = serde_json::from_str(r#"{"name": 2024}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some("2024"));

        let input: DemoInput = serde_json::from_str(r#"{"name": -7}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some("-7"));

        let input: DemoInput = serde_json::from_str(r#"{"name": true}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some("true"));

        let input: DemoInput = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(input.name, None);

        let input: DemoInput = serde_json::from_str(r#"{"name": 2024}"#).unwrap();
        let report = run_demo(&fixed_service(), &input);
        assert_eq!(report.greeting, "Welcome to 2024!");
    }

    #[test]
    fn test_input_name_rejects_structures() {
        let result: Result<DemoInput, _> = serde_json::from_str(r#"{"name": [1, 2]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_input_rejects_unknown_fields() {
        let result: Result<DemoInput, _> = serde_json::from_str(r#"{"c": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_report_serializes() {
        let report = run_demo(&fixed_service(), &DemoInput::default());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["greeting"], "Welcome to Jenkins Pipeline!");
        assert_eq!(json["sum"], 30);
        assert_eq!(json["sum_is_even"], true);
        assert_eq!(json["timestamp_millis"], 42);
    }
}
