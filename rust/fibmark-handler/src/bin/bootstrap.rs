//! Adapter between the pure handler and a line-oriented host.
//!
//! Reads newline-delimited JSON events from stdin and writes one JSON
//! response per event to stdout.  With no input at all it still performs a
//! single invocation, so running the binary bare behaves like a one-shot
//! benchmark.  Log lines go to stderr and never mix with responses.

use fibmark_handler::{handle, Context, Logger};
use std::io::{self, BufRead, Write};

fn invoke(
    event: &serde_json::Value,
    ctx: &Context,
    logger: &Logger,
    out: &mut impl Write,
) -> io::Result<()> {
    let response = handle(event, ctx);
    let request_id = (!ctx.request_id.is_empty()).then_some(ctx.request_id.as_str());
    logger.info(&response.body, request_id);
    // Response is a plain struct of serializable fields; to_string cannot fail.
    let wire = serde_json::to_string(&response)?;
    writeln!(out, "{wire}")
}

/// Pull the request id out of an event, if the host embedded one.
fn context_for(event: &serde_json::Value, seq: u64) -> Context {
    let request_id = event
        .pointer("/requestContext/requestId")
        .and_then(serde_json::Value::as_str)
        .map_or_else(|| format!("local-{seq}"), str::to_string);
    Context {
        request_id,
        function_name: String::new(),
    }
}

fn run() -> io::Result<()> {
    let logger = Logger::default();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut seq: u64 = 0;
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        seq += 1;
        // A malformed event is still an invocation: the handler ignores the
        // payload anyway, so fall back to null rather than dropping it.
        let event = serde_json::from_str(&line).unwrap_or_else(|e| {
            logger.error(&format!("unparseable event: {e}"), None);
            serde_json::Value::Null
        });
        let ctx = context_for(&event, seq);
        invoke(&event, &ctx, &logger, &mut out)?;
    }

    if seq == 0 {
        invoke(
            &serde_json::Value::Null,
            &context_for(&serde_json::Value::Null, 1),
            &logger,
            &mut out,
        )?;
    }

    out.flush()
}

fn main() {
    if let Err(e) = run() {
        eprintln!("bootstrap: {e}");
        std::process::exit(1);
    }
}
