use metrics::counter;

pub struct Telemetry;

impl Telemetry {
    pub fn record_request(operation: &str) {
        counter!("notes_requests_total", "operation" => operation.to_string()).increment(1);
    }

    pub fn record_summary_fallback() {
        counter!("notes_summary_fallbacks_total").increment(1);
    }
}
