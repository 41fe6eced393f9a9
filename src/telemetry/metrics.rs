use opentelemetry::{
    global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::LazyLock;

pub static METER: LazyLock<Meter> = LazyLock::new(|| global::meter("growthpro-api"));

pub static REPORTS_GENERATED: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("reports.generated")
        .with_description("Total business reports generated")
        .build()
});

pub static HEADLINES_REGENERATED: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("headlines.regenerated")
        .with_description("Total headlines regenerated")
        .build()
});

pub static VALIDATION_FAILURES: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("validation.failures")
        .with_description("Requests rejected for a missing name or location")
        .build()
});

pub static HTTP_REQUESTS_TOTAL: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("http.requests.total")
        .with_description("Total number of HTTP requests")
        .with_unit("{request}")
        .build()
});

pub static HTTP_REQUEST_DURATION: LazyLock<Histogram<f64>> = LazyLock::new(|| {
    METER
        .f64_histogram("http.request.duration")
        .with_description("HTTP request duration in milliseconds")
        .with_unit("ms")
        .with_boundaries(vec![
            1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0, 10000.0,
        ])
        .build()
});
