//! Property-based tests for outcome classification using proptest.

use proptest::prelude::*;
use rivulet_core::{classify, Error, GraphQlError, Response, TransportError, Value};

/// Builds the raw callback pair out of generated parts.
fn build_outcome(
    transport: &Option<String>,
    present: bool,
    data: &Option<i64>,
    errors: &[String],
) -> (Option<Response>, Option<TransportError>) {
    let response = present.then(|| Response {
        data: data.map(Value::from),
        errors: errors.iter().map(GraphQlError::new).collect(),
    });
    let error = transport.as_ref().map(TransportError::new);
    (response, error)
}

proptest! {
    /// A transport error always classifies as a transport failure, no matter
    /// what result accompanies it.
    #[test]
    fn transport_error_always_wins(
        message in "[a-z ]{1,16}",
        present in any::<bool>(),
        data in prop::option::of(0i64..1000),
        errors in prop::collection::vec("[A-Z][0-9]{1,3}", 0..4),
    ) {
        let (response, error) = build_outcome(&Some(message.clone()), present, &data, &errors);
        let outcome = classify(response, error);

        match outcome {
            Err(Error::Transport(cause)) => prop_assert_eq!(cause.message(), message.as_str()),
            other => prop_assert!(false, "Expected transport failure, got {:?}", other),
        }
    }

    /// Without a transport error, a non-empty error list classifies as a
    /// domain-level failure carrying the exact list, order preserved.
    #[test]
    fn domain_errors_preserved_verbatim(
        data in prop::option::of(0i64..1000),
        errors in prop::collection::vec("[A-Z][0-9]{1,3}", 1..5),
    ) {
        let (response, error) = build_outcome(&None, true, &data, &errors);
        let outcome = classify(response, error);

        match outcome {
            Err(Error::GraphQl { errors: classified }) => {
                let messages: Vec<&str> = classified.iter().map(|e| e.message.as_str()).collect();
                let expected: Vec<&str> = errors.iter().map(|e| e.as_str()).collect();
                prop_assert_eq!(messages, expected);
            }
            other => prop_assert!(false, "Expected GraphQL failure, got {:?}", other),
        }
    }

    /// Without a transport error or domain errors, a present result resolves
    /// to its payload, including an absent one.
    #[test]
    fn clean_result_resolves_to_payload(data in prop::option::of(0i64..1000)) {
        let (response, error) = build_outcome(&None, true, &data, &[]);
        let outcome = classify(response, error);

        prop_assert_eq!(outcome, Ok(data.map(Value::from)));
    }

    /// An invocation carrying nothing at all is the defensive fallback.
    #[test]
    fn empty_invocation_is_unknown(_seed in any::<u8>()) {
        prop_assert_eq!(classify(None, None), Err(Error::Unknown));
    }
}
