//! Oracle functions for report verification.
//!
//! Oracles receive a finished [`ProcessReport`] and check one property of it.
//! They return `Err(message)` instead of panicking so proptest and fuzz
//! targets can decide how to surface the failure.

use fuzzgate_core::{ProcessReport, ProcessorState, RejectionKind};

/// Oracle function type.
///
/// Receives the report and returns:
/// - `Ok(())` if the property holds
/// - `Err(message)` if it does not
pub type OracleFn = Box<dyn Fn(&ProcessReport) -> Result<(), String>>;

/// The call was rejected with `kind`.
pub fn rejected_with(kind: RejectionKind) -> OracleFn {
    Box::new(move |report| {
        if report.state == ProcessorState::Rejected(kind) {
            Ok(())
        } else {
            Err(format!("expected rejection {}, got {:?}", kind, report.state))
        }
    })
}

/// The call reached the dispatcher and produced a success message.
pub fn dispatched_successfully() -> OracleFn {
    Box::new(|report| {
        if report.state == ProcessorState::Dispatched && report.outcome.is_success() {
            Ok(())
        } else {
            Err(format!("expected successful dispatch, got {}", report))
        }
    })
}

/// The sensitive action was not invoked.
pub fn no_sensitive_invocation() -> OracleFn {
    Box::new(|report| match &report.sensitive {
        None => Ok(()),
        Some(invocation) => {
            Err(format!("sensitive action invoked with {:?}", invocation.argument))
        },
    })
}

/// The sensitive action was invoked with exactly `argument`.
pub fn sensitive_invoked_with(argument: &'static str) -> OracleFn {
    Box::new(move |report| match &report.sensitive {
        Some(invocation) if invocation.argument == argument => Ok(()),
        Some(invocation) => Err(format!(
            "sensitive action invoked with {:?}, expected {:?}",
            invocation.argument, argument
        )),
        None => Err(format!("sensitive action not invoked, expected {:?}", argument)),
    })
}

/// Combine multiple oracles into one.
pub fn all_of(oracles: Vec<OracleFn>) -> OracleFn {
    Box::new(move |report| {
        for oracle in &oracles {
            oracle(report)?;
        }
        Ok(())
    })
}
