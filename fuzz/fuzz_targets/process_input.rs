//! Fuzz target for Processor::process
//!
//! Feeds arbitrary bytes through every gate to find:
//! - Panics or over-reads in the gates
//! - Rejections that escape their classification
//! - Any path other than the trigger word reaching the executor
//!
//! The recording executor stands in for the host, so no process is ever
//! created.

#![no_main]

use fuzzgate_core::{Processor, ProcessorState, dispatch::TRIGGER_WORD};
use fuzzgate_harness::RecordingExecutor;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let executor = RecordingExecutor::succeeding();
    let processor = Processor::new(executor.clone());

    let report = processor.process(data);

    // INVARIANT 1: every call ends in a terminal state
    assert!(report.state.is_terminal());

    // INVARIANT 2: gate rejections are never security relevant
    if let ProcessorState::Rejected(kind) = report.state {
        assert!(!kind.is_security_relevant(), "gate produced {:?}", kind);
        assert!(report.sensitive.is_none());
    }

    // INVARIANT 3: only the trigger word reaches the executor
    for argument in executor.invocations() {
        assert_eq!(argument.as_bytes(), TRIGGER_WORD);
    }

    // INVARIANT 4: no hidden state
    assert_eq!(processor.process(data).outcome, report.outcome);
});
