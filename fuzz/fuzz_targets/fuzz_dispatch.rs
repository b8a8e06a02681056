#![no_main]

use libfuzzer_sys::fuzz_target;

use phase_knock::{Dispatcher, PayloadPolicy, Vocabulary};

fuzz_target!(|data: &[u8]| {
    // Classify arbitrary server output against both vocabularies; errors are
    // fine, panics are not.
    let msg = String::from_utf8_lossy(data);
    for vocab in [Vocabulary::stages(), Vocabulary::matrix_shift()] {
        for policy in [PayloadPolicy::Lenient, PayloadPolicy::Strict] {
            let _ = Dispatcher::new(vocab.clone(), policy).respond(&msg);
        }
    }
});
