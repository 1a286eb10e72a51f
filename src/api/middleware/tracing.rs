//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Opens an `INFO` span per request (method, URI, HTTP version) and logs
/// an `INFO` line per response with the status code and latency in
/// milliseconds. Handler-level diagnostics (classification, chosen
/// target) attach to this span.
///
/// ```text
/// INFO request{method=GET uri=/ version=HTTP/1.1}: redirect ...
/// INFO request{method=GET uri=/ version=HTTP/1.1}: finished processing request latency=0 ms status=302
/// ```
pub fn layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
