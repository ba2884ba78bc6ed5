//! Request handling for the `geoids` command-line front end.
//!
//! Supports two execution modes:
//! - Single request: every `--ids` occurrence is one raw `ids` parameter
//! - Batch: each input line is the `ids` value of one request
//!
//! Accepted requests print their sanitized identifiers in raw form on the output
//! writer, rejected ones print one `error: <message>` line per error on the error
//! writer.

use std::{
    convert::Infallible,
    io::{BufRead, Write},
};

use clap::Parser;
use geoids_core::sanitization::{
    api::{CleanParams, IDS_PARAM, RawParams},
    error::SanitizationError,
    infrastructure::{
        naming::{CompositeId, join_ids},
        vocabulary::TypeVocabulary,
    },
    init_sanitizer,
};
use tower::{BoxError, Service, ServiceExt, service_fn};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "geoids")]
#[command(about = "Sanitize composite identifier lists", long_about = None)]
pub struct Args {
    /// Raw value of the `ids` parameter, repeat to supply it several times
    #[arg(short, long)]
    pub ids: Vec<String>,

    /// Comma-separated list of accepted types (defaults to the built-in vocabulary)
    #[arg(short, long)]
    pub types: Option<TypeVocabulary>,
}

/// Runs the requests described by `args`, reading `input` in batch mode.
///
/// Returns `false` when at least one request was rejected.
pub async fn run<R, O, E>(args: Args, input: R, out: &mut O, err: &mut E) -> anyhow::Result<bool>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let vocabulary = args.types.unwrap_or_default();
    info!("Accepted types: [{}]", vocabulary);

    let mut pipeline = init_sanitizer(
        vocabulary,
        service_fn(|clean: CleanParams| async move {
            Ok::<_, Infallible>(clean.ids.unwrap_or_default())
        }),
    );

    if args.ids.is_empty() {
        run_batch_mode(&mut pipeline, input, out, err).await
    } else {
        let raw: RawParams = args.ids.into_iter().map(|value| (IDS_PARAM, value)).collect();
        run_request(&mut pipeline, raw, out, err).await
    }
}

/// Run in batch mode, one request per input line
async fn run_batch_mode<S, R, O, E>(
    pipeline: &mut S,
    input: R,
    out: &mut O,
    err: &mut E,
) -> anyhow::Result<bool>
where
    S: Service<RawParams, Response = Vec<CompositeId>, Error = BoxError>,
    R: BufRead,
    O: Write,
    E: Write,
{
    let mut all_accepted = true;
    for (line_number, line) in input.lines().enumerate() {
        let line = line?;
        // CRLF input leaves a carriage return behind
        let line = line.trim_end_matches('\r');
        debug!("Request {}: {:?}", line_number + 1, line);
        let raw = RawParams::new().with_param(IDS_PARAM, line);
        all_accepted &= run_request(pipeline, raw, out, err).await?;
    }
    Ok(all_accepted)
}

/// Sends one request through the pipeline and reports the outcome.
///
/// Returns `false` when the request was rejected by the sanitizer.
async fn run_request<S, O, E>(
    pipeline: &mut S,
    raw: RawParams,
    out: &mut O,
    err: &mut E,
) -> anyhow::Result<bool>
where
    S: Service<RawParams, Response = Vec<CompositeId>, Error = BoxError>,
    O: Write,
    E: Write,
{
    let result = pipeline.ready().await.map_err(|e| anyhow::anyhow!(e))?.call(raw).await;
    match result {
        Ok(ids) => {
            writeln!(out, "{}", join_ids(&ids))?;
            Ok(true)
        }
        Err(e) => {
            if let Some(SanitizationError::Rejected(diagnostics)) =
                e.downcast_ref::<SanitizationError>()
            {
                for error in &diagnostics.errors {
                    writeln!(err, "error: {error}")?;
                }
                return Ok(false);
            }
            Err(anyhow::anyhow!(e))
        }
    }
}
