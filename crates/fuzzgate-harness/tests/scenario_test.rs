//! Exact input scenarios.
//!
//! Hand-built byte sequences, checked against the outcome each one must
//! produce, including the trigger frame with both executor scripts.

use fuzzgate_core::{
    ExecConfig, ProcessingOutcome, Processor, ProcessorState, RejectionKind, SystemExecutor,
};
use fuzzgate_harness::{RecordingExecutor, oracle, seed_corpus};

fn trigger_input() -> Vec<u8> {
    let checksum = [0x05u8, b'j', b'a', b'z', b'z', b'e'].iter().fold(0u8, |acc, b| acc ^ b);

    let mut raw = b"FUZZ".to_vec();
    raw.push(checksum);
    raw.push(0x05);
    raw.extend_from_slice(b"jazze");
    raw
}

#[test]
fn empty_payload_is_benign_noop() {
    let executor = RecordingExecutor::succeeding();
    let report = Processor::new(executor.clone()).process(&[b'F', b'U', b'Z', b'Z', 0x00, 0x00]);

    assert_eq!(report.state, ProcessorState::Dispatched);
    assert_eq!(report.outcome, ProcessingOutcome::Success("no-op: ".to_string()));
    assert!(report.sensitive.is_none());
    assert_eq!(executor.call_count(), 0);
}

#[test]
fn trigger_invokes_sensitive_action_once() {
    let executor = RecordingExecutor::succeeding();
    let report = Processor::new(executor.clone()).process(&trigger_input());

    let check = oracle::all_of(vec![
        oracle::dispatched_successfully(),
        oracle::sensitive_invoked_with("jazze"),
    ]);
    assert_eq!(check(&report), Ok(()));

    assert_eq!(executor.invocations(), vec!["jazze".to_string()]);
    assert!(report.is_security_relevant());
    assert_eq!(
        report.sensitive.as_ref().map(|s| s.mechanism),
        Some(RecordingExecutor::MECHANISM)
    );
}

#[test]
fn refused_trigger_is_dispatch_execution_failure() {
    let executor = RecordingExecutor::failing("No such file or directory");
    let report = Processor::new(executor.clone()).process(&trigger_input());

    assert_eq!(oracle::sensitive_invoked_with("jazze")(&report), Ok(()));
    assert_eq!(report.outcome.rejection_kind(), Some(RejectionKind::DispatchExecutionFailure));
    assert!(report.is_security_relevant());

    let ProcessingOutcome::Rejected(rejection) = &report.outcome else {
        panic!("expected rejection, got {:?}", report.outcome);
    };
    assert!(rejection.detail.contains(RecordingExecutor::MECHANISM));
    assert!(rejection.detail.contains("jazze"));
    assert_eq!(executor.call_count(), 1);
}

#[test]
fn trigger_without_matching_checksum_never_executes() {
    let mut raw = trigger_input();
    raw[4] ^= 0x05; // checksum over the token alone

    let executor = RecordingExecutor::succeeding();
    let report = Processor::new(executor.clone()).process(&raw);

    assert_eq!(oracle::rejected_with(RejectionKind::ChecksumMismatch)(&report), Ok(()));
    assert_eq!(executor.call_count(), 0);
}

#[test]
fn near_miss_tokens_are_noops() {
    let executor = RecordingExecutor::succeeding();
    let processor = Processor::new(executor.clone());

    for token in [&b"jazz"[..], b"jazzer", b"Jazze", b"jazze "] {
        let raw = fuzzgate_harness::corpus::frame_for(token).expect("fits");
        let report = processor.process(&raw);

        assert_eq!(
            report.outcome,
            ProcessingOutcome::Success(format!("no-op: {}", String::from_utf8_lossy(token)))
        );
    }
    assert_eq!(executor.call_count(), 0);
}

#[test]
fn seed_corpus_reaches_dispatcher() {
    let executor = RecordingExecutor::succeeding();
    let processor = Processor::new(executor.clone());

    for seed in seed_corpus().expect("all tokens fit") {
        let report = processor.process(&seed.bytes);
        assert_eq!(report.state, ProcessorState::Dispatched, "seed {}", seed.name);
        assert_eq!(report.sensitive.is_some(), seed.name == "trigger", "seed {}", seed.name);
    }
    assert_eq!(executor.invocations(), vec!["jazze".to_string()]);
}

#[test]
fn system_executor_failure_names_std_process() {
    // An existing but empty lookup path: the trigger cannot resolve
    let empty_dir = std::env::temp_dir().join(format!("fuzzgate-empty-path-{}", std::process::id()));
    std::fs::create_dir_all(&empty_dir).expect("create empty dir");

    let executor = SystemExecutor::new(ExecConfig {
        search_path: Some(empty_dir.clone().into_os_string()),
        ..ExecConfig::default()
    });
    let report = Processor::new(executor).process(&trigger_input());

    assert_eq!(report.state, ProcessorState::Dispatched);
    assert_eq!(report.sensitive.as_ref().map(|s| s.mechanism), Some(SystemExecutor::MECHANISM));
    assert_eq!(report.outcome.rejection_kind(), Some(RejectionKind::DispatchExecutionFailure));
    match &report.outcome {
        ProcessingOutcome::Rejected(rejection) => {
            assert!(rejection.detail.starts_with("std::process::Command"), "{}", rejection.detail);
            assert!(rejection.detail.contains("jazze"), "{}", rejection.detail);
        },
        other => panic!("expected execution failure, got {}", other),
    }

    std::fs::remove_dir_all(&empty_dir).ok();
}
