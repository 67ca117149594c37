#![no_main]

use libfuzzer_sys::fuzz_target;
use scfw::infrastructure::package_managers::pip;

fuzz_target!(|data: &[u8]| {
    if let Ok(stdout) = std::str::from_utf8(data) {
        // Every parsed target must have survived validation
        if let Ok(targets) = pip::parse_dry_run_report(stdout) {
            for target in targets {
                assert!(!target.package().is_empty());
                assert!(!target.version().is_empty());
            }
        }
    }
});
