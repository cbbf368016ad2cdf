//! Outcome classification.
//!
//! Each invocation of a client callback carries an optional result object
//! and an optional transport error. `classify` folds that pair into a
//! single outcome: a success payload or a classified failure.

use crate::error::{Error, Result, TransportError};
use crate::response::Response;
use crate::value::Value;

/// Classifies one callback invocation.
///
/// The priority order is fixed:
///
/// 1. A transport error surfaces as [`Error::Transport`], regardless of any
///    accompanying partial result. A stale result must never mask a
///    connectivity failure.
/// 2. Otherwise, a result carrying domain-level errors surfaces as
///    [`Error::GraphQl`] with the full ordered list.
/// 3. Otherwise, a present result resolves to its payload, which may be
///    absent (a cache miss is a success with no data).
/// 4. Otherwise (no result and no error) the invocation is malformed and
///    surfaces as [`Error::Unknown`].
pub fn classify(response: Option<Response>, error: Option<TransportError>) -> Result<Option<Value>> {
    if let Some(cause) = error {
        return Err(Error::Transport(cause));
    }

    let Some(response) = response else {
        return Err(Error::Unknown);
    };

    if response.has_errors() {
        return Err(Error::GraphQl {
            errors: response.errors,
        });
    }

    Ok(response.data)
}
