#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use tzrule::{TimeChangeRule, Timezone};

    if let Ok(bytes) = data.try_into() {
        let _ = Timezone::from_bytes(bytes);
    }

    if let Ok(bytes) = data.try_into() {
        let _ = TimeChangeRule::from_bytes(bytes);
    }
});
