//! Exhaustive positive space fuzzer for frame encoding and dispatch
//!
//! Unlike random fuzzing (process_input.rs), this fuzzer walks every
//! table token plus edge-case lengths, and lets libFuzzer choose the token
//! bytes and trailing data. Every encoded frame must pass all three gates.

#![no_main]

use fuzzgate_core::{Processor, ProcessorState, dispatch::DISPATCH_TABLE};
use fuzzgate_harness::RecordingExecutor;
use fuzzgate_proto::{Frame, FrameHeader, checksum::xor_fold};
use libfuzzer_sys::fuzz_target;

// Token lengths to test
const TOKEN_LENGTHS: &[usize] = &[
    0,   // Empty
    1,   // Single byte
    5,   // Trigger length
    127, // Midpoint
    254, // One below max
    255, // Max for the length byte
];

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let executor = RecordingExecutor::succeeding();
    let processor = Processor::new(executor.clone());

    let table_tokens = DISPATCH_TABLE.iter().map(|entry| entry.token.to_vec());
    let sized_tokens = TOKEN_LENGTHS
        .iter()
        .map(|&len| data.iter().copied().cycle().take(len).collect::<Vec<u8>>());

    for token in table_tokens.chain(sized_tokens) {
        let mut wire: Vec<u8> = Frame::encode_to_vec(&token).expect("token length is at most 255");

        // INVARIANT 1: encoded size is header plus token
        assert_eq!(wire.len(), FrameHeader::SIZE + token.len());

        // INVARIANT 2: every encoded frame is dispatched
        let report = processor.process(&wire);
        assert_eq!(report.state, ProcessorState::Dispatched, "token {:?}", token);

        // INVARIANT 3: trailing bytes that fold to zero do not change the outcome
        let trailing = [data[0], data[0]];
        debug_assert_eq!(xor_fold(&trailing), 0);
        wire.extend_from_slice(&trailing);
        assert_eq!(processor.process(&wire).outcome, report.outcome);
    }
});
