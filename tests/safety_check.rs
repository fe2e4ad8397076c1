use pretok_rs::{ByteLevelPretokenizer, HANDLE_SENTINEL};

#[test]
fn test_handle_lifecycle_safety() {
    // Exercise allocate/release churn: handles must stay unique while live,
    // every drop must release its entry, and a handle must never come back
    // from a dead instance.

    let mut seen = std::collections::HashSet::new();
    for round in 0..64 {
        let pretok = ByteLevelPretokenizer::new().expect("Failed to allocate");
        let handle = pretok.raw_handle();
        assert_ne!(handle, HANDLE_SENTINEL);
        assert!(seen.insert(handle), "handle {handle} reissued in round {round}");

        // The instance must stay usable for its whole lifetime.
        let words = pretok.pretokenize("still alive").expect("Failed to pretokenize");
        assert_eq!(pretok.decode(&words).expect("Failed to decode"), "still alive");
    }
}

#[test]
fn test_many_live_instances_are_independent() {
    let instances: Vec<ByteLevelPretokenizer> = (0..32)
        .map(|_| ByteLevelPretokenizer::new().expect("Failed to allocate"))
        .collect();

    for (index, pretok) in instances.iter().enumerate() {
        let text = format!("instance {index}");
        let words = pretok.pretokenize(&text).expect("Failed to pretokenize");
        assert_eq!(pretok.decode(&words).expect("Failed to decode"), text);
    }

    // Dropping one instance must not disturb the others.
    let mut instances = instances;
    let survivor = instances.pop().expect("non-empty");
    drop(instances);
    let words = survivor.pretokenize("survivor").expect("Failed to pretokenize");
    assert_eq!(survivor.decode(&words).expect("Failed to decode"), "survivor");
}

#[test]
fn test_drop_during_unwinding_does_not_panic() {
    // Release runs on every exit path, including panics, and must not throw.
    let result = std::panic::catch_unwind(|| {
        let _pretok = ByteLevelPretokenizer::new().expect("Failed to allocate");
        panic!("mid-call failure");
    });
    assert!(result.is_err());

    // The registry is still healthy.
    let pretok = ByteLevelPretokenizer::new().expect("Failed to allocate");
    assert!(pretok.pretokenize("after unwind").is_ok());
}
