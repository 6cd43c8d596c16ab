//! Observability infrastructure - Prometheus metrics

mod metrics;

pub use metrics::{
    create_metrics_router, init_metrics, record_http_request, record_key_generated,
    record_store_failure, record_verification, PrometheusMetrics, StoreOperation,
};
