use pretok_rs::{ByteLevelPretokenizer, PretokError, PRETOK_MAX_INSTANCES_ENV};

// Kept alone in this binary: it drives allocation through the capacity env
// var, which would race against other tests allocating in parallel.
#[test]
fn test_forced_allocation_failure_leaves_no_resource() {
    #[allow(unused_unsafe)]
    unsafe {
        std::env::set_var(PRETOK_MAX_INSTANCES_ENV, "1");
    }

    let first = ByteLevelPretokenizer::new().expect("Failed to allocate within capacity");
    let error = ByteLevelPretokenizer::new().expect_err("Should fail at capacity");
    assert!(matches!(error, PretokError::Allocation(_)));

    // The failed construction must not have leaked a slot: releasing the
    // live instance frees the only one there is.
    drop(first);
    let recovered = ByteLevelPretokenizer::new().expect("Failed to allocate after release");
    assert!(recovered.pretokenize("recovered").is_ok());

    #[allow(unused_unsafe)]
    unsafe {
        std::env::remove_var(PRETOK_MAX_INSTANCES_ENV);
    }
}
