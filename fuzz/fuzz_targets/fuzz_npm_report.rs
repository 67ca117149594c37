#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(stdout) = std::str::from_utf8(data) {
        // Fuzz npm dry-run summary parsing - this should never panic
        let _ = scfw::infrastructure::package_managers::npm::parse_dry_run_report(stdout);
    }
});
