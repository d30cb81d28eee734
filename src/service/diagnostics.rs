use serde_json::{Value, json};

/// Auxiliary computation surfaced by the `/test` endpoint.
/// The computation itself lives outside the service core; anything
/// JSON-serializable satisfies the contract, so callers inject it.
pub trait DiagnosticsProbe: Send + Sync {
    fn value(&self) -> Value;
}

/// Default probe reporting the build identity of the running binary.
pub struct BuildInfoProbe;

impl DiagnosticsProbe for BuildInfoProbe {
    fn value(&self) -> Value {
        json!({
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "status": "ok",
        })
    }
}
