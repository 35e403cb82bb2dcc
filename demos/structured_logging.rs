use http_errors::{
    BadGatewayError, ErrorRecord, HttpError, InternalServerError, ServiceUnavailableError, TooManyRequestsError,
    define_http_error,
};

define_http_error!(
    /// Upstream inventory service did not answer in time.
    InventoryTimeoutError = 504
);

/// Minimal log sink: one line per error, key/value style.
fn log_error(record: &ErrorRecord<'_>) {
    let mut line = String::new();
    if record.write_to(&mut line).is_ok() {
        let level = if record.code().is_server_error() { "ERROR" } else { "WARN" };
        println!("   {:<5} {}", level, line);
    }
}

fn main() {
    println!("--- Structured Logging Example ---\n");

    let errors: Vec<HttpError> = vec![
        TooManyRequestsError::new("client 10.0.0.7 exceeded 100 req/min"),
        BadGatewayError::new("payment provider returned garbage"),
        InventoryTimeoutError::new("GET /inventory/42 after 30s"),
        ServiceUnavailableError::empty(),
        InternalServerError::new("x".repeat(4096)),
    ];

    println!("1. Full records (what the operator sees):");
    for err in &errors {
        err.with_record(log_error);
    }

    println!("\n2. Client-facing text (what the caller sees):");
    for err in &errors {
        println!("   {}", err);
    }

    println!("\n3. Retry decisions:");
    for err in &errors {
        let record = err.record();
        println!(
            "   {:<28} {:<5} retry={}",
            record.type_name(),
            record.code(),
            record.is_retryable()
        );
    }
}
