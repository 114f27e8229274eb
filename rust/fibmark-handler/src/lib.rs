//! Serverless-style handler wrapper around the Fibonacci workload.
//!
//! The handler receives an event payload and an invocation context, ignores
//! both, computes `fib(35)`, and returns a structured response with a fixed
//! success status.  The invocation convention of the external host is out of
//! scope; the `bootstrap` binary adapts [`handle`] to a line-oriented
//! stdin/stdout protocol so the handler can be exercised at all.

mod logger;

pub use logger::{LogLevel, Logger};

use fibmark_core::{fib, BENCH_N};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Invocation context
// ---------------------------------------------------------------------------

/// Opaque invocation metadata supplied by the external host.
///
/// Nothing in here influences the computation; it exists so the handler has
/// the conventional `(event, context)` shape and so log lines can carry a
/// request id when one is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    /// Unique request ID, if the host assigns one.
    #[serde(default)]
    pub request_id: String,

    /// Name of the invoked function, if the host supplies it.
    #[serde(default)]
    pub function_name: String,
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// Structured handler response.
///
/// Serializes to `{"statusCode":200,"body":"fibonacci(35)=9227465"}` — the
/// exact wire shape the benchmark baselines emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Fixed success status.
    pub status_code: u16,

    /// Message embedding the computed value.
    pub body: String,
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// Handle one invocation.
///
/// Both parameters are accepted per the invocation convention and ignored.
/// Infallible: the computation is total for the fixed input.
pub fn handle(_event: &serde_json::Value, _ctx: &Context) -> Response {
    let result = fib(BENCH_N);
    Response {
        status_code: 200,
        body: format!("fibonacci({BENCH_N})={result}"),
    }
}
