#![no_main]

use libfuzzer_sys::fuzz_target;

use workout_core::package::Package;
use workout_core::registry::read_package;

fuzz_target!(|data: &[u8]| {
    // Text form: package parser and dispatcher end to end.
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(package) = text.parse::<Package>() {
            if let Ok(training) = read_package(&package.code, &package.values) {
                let _ = training.summary().message();
            }
        }
    }

    // Binary form: first byte picks the code, the rest are raw f64 values.
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let code = ["SWM", "RUN", "WLK"][usize::from(selector % 3)];
    let values: Vec<f64> = rest
        .chunks_exact(8)
        .map(|chunk| f64::from_le_bytes(chunk.try_into().unwrap()))
        .collect();

    // Accepted input always yields finite statistics.
    if let Ok(training) = read_package(code, &values) {
        let summary = training.summary();
        assert!(summary.distance_km.is_finite());
        assert!(summary.mean_speed_kmh.is_finite());
        assert!(summary.calories.is_finite());
    }
});
