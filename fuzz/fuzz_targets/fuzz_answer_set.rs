#![no_main]
use finwell::Assessment;
use finwell::model::{AnswerSet, Locale};
use libfuzzer_sys::fuzz_target;

/// Fuzz lenient answer parsing and the full assessment pipeline.
///
/// Any input must parse to some answer set and assess without panicking.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let answers = AnswerSet::from_json_lenient(s);
        if let Ok(assessment) = Assessment::builtin() {
            let report = assessment.assess(&answers, Locale::En);
            assert!(report.answered_questions <= report.total_questions);
        }
    }
});
