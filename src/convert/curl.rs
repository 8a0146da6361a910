//! cURL command rendering
//!
//! Turns one example's original request into a single `curl` command line.

use tracing::trace;

use super::{substitute, VariableStore};
use crate::collection::{OriginalRequest, Result};

/// Methods whose raw body is forwarded with `--data-raw`. Matched case-sensitively.
const BODY_METHODS: [&str; 3] = ["POST", "PUT", "PATCH"];

/// Render an original request as `curl -X <method> [-H '<k>: <v>']... '<url>' [--data-raw '<body>']`
pub fn render_request(request: &OriginalRequest<'_>, variables: &VariableStore) -> Result<String> {
    let method = request.method()?;
    let url = substitute(request.raw_url()?, variables);

    let mut command = format!("curl -X {}", method);

    for header in request.headers()? {
        let value = substitute(header.value, variables);
        command.push_str(&format!(" -H '{}: {}'", header.key, value));
    }

    command.push_str(&format!(" '{}'", url));

    if BODY_METHODS.contains(&method) {
        if let Some(raw) = request.body()?.and_then(|body| body.raw) {
            let data = substitute(raw, variables);
            command.push_str(&format!(" --data-raw '{}'", data));
        }
    }

    trace!(location = request.location(), "Rendered {}", command);
    Ok(command)
}
