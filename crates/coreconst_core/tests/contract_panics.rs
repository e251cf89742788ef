//! Out-of-range panics from the positional accessors report the caller's location.
//!
//! Kept in its own test binary: the panic hook is process-global.

use std::panic;
use std::sync::{Arc, Mutex};

use coreconst_core::ConstantRegistry;

#[test]
fn test_out_of_range_panic_points_at_caller() {
    let mut registry = ConstantRegistry::new();
    registry.initialize().unwrap();

    let location: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&location);
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        *sink.lock().unwrap() = info.location().map(|l| l.file().to_string());
    }));

    let accessors: [fn(&ConstantRegistry); 4] = [
        |r| {
            let _ = r.name_at(r.count());
        },
        |r| {
            let _ = r.value_at(r.count());
        },
        |r| {
            let _ = r.enum_group_at(r.count());
        },
        |r| {
            let _ = r.hide_value_in_docs_at(r.count());
        },
    ];
    let mut files = Vec::new();
    for access in accessors {
        let result = panic::catch_unwind(panic::AssertUnwindSafe(|| access(&registry)));
        assert!(result.is_err());
        files.push(location.lock().unwrap().take());
    }

    panic::set_hook(previous);
    for file in files {
        let file = file.unwrap();
        assert!(file.ends_with("contract_panics.rs"), "panic reported at {file}");
    }
}
