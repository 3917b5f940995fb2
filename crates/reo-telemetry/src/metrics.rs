//! Pipeline metric names and recording helpers

use std::time::Instant;

use opentelemetry::KeyValue;
use opentelemetry::metrics::{Counter, Histogram};

pub const SPEECH_REQUEST_COUNT: &str = "speech.request.count";
pub const SPEECH_STAGE_DURATION: &str = "speech.stage.duration";

/// Instruments recorded by the speech pipeline
///
/// Backed by the global meter provider, which is a no-op unless an OTLP
/// exporter was configured.
#[derive(Clone)]
pub struct SpeechMetrics {
    requests: Counter<u64>,
    stage_duration: Histogram<f64>,
}

impl SpeechMetrics {
    pub fn new() -> Self {
        let meter = opentelemetry::global::meter("reo-speech");

        Self {
            requests: meter
                .u64_counter(SPEECH_REQUEST_COUNT)
                .with_description("Speech synthesis requests by outcome")
                .build(),
            stage_duration: meter
                .f64_histogram(SPEECH_STAGE_DURATION)
                .with_description("Duration of each pipeline stage")
                .with_unit("s")
                .build(),
        }
    }

    /// Count a finished request; `outcome` is `ok` or the error type
    pub fn record_request(&self, outcome: &str) {
        self.requests.add(1, &[KeyValue::new("outcome", outcome.to_owned())]);
    }

    /// Record how long `stage` took since `start`
    pub fn record_stage(&self, stage: &'static str, start: Instant) {
        self.stage_duration
            .record(start.elapsed().as_secs_f64(), &[KeyValue::new("stage", stage)]);
    }
}

impl Default for SpeechMetrics {
    fn default() -> Self {
        Self::new()
    }
}
