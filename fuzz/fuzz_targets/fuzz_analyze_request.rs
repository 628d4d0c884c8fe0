//! Fuzz target for analyze request decoding and scoring
//!
//! Feeds arbitrary bytes through request decoding and, when they decode,
//! through batch analysis to find panics.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Don't fuzz extremely long inputs - diminishing returns
    if data.len() > 4096 {
        return;
    }

    if let Ok(request) = genoscore::AnalyzeRequest::from_slice(data) {
        let expected = request.snps.len();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let response = runtime.block_on(genoscore::analyze(&genoscore::HeuristicModel, request));
        assert_eq!(response.results.len(), expected);
    }
});
