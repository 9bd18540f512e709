use crate::{MonotonicSample, is_monotonic, now, now_sec};

#[test]
fn test_samples_never_decrease() {
    if !is_monotonic() {
        return;
    }
    let mut prev = now().expect("sample");
    for _ in 0..1000 {
        let next = now().expect("sample");
        assert!(next >= prev, "clock went backward: {prev:?} -> {next:?}");
        prev = next;
    }
}

#[test]
fn test_sample_is_normalized() {
    let sample = now().expect("sample");
    assert!((0..1_000_000).contains(&sample.usec));
}

#[test]
fn test_now_sec_matches_now() {
    if !is_monotonic() {
        return;
    }
    let before = now().expect("sample");
    let sec = now_sec().expect("seconds");
    let after = now().expect("sample");
    assert!(sec >= before.sec);
    assert!(sec <= after.sec);
}

#[test]
fn test_add_millis_without_carry() {
    let mut sample = MonotonicSample { sec: 10, usec: 0 };
    sample.add_millis(250);
    assert_eq!(sample, MonotonicSample { sec: 10, usec: 250_000 });
}

#[test]
fn test_add_millis_carries_into_seconds() {
    let mut sample = MonotonicSample { sec: 1, usec: 999_500 };
    sample.add_millis(1);
    assert_eq!(sample, MonotonicSample { sec: 2, usec: 500 });

    let mut sample = MonotonicSample { sec: 0, usec: 600_000 };
    sample.add_millis(2500);
    assert_eq!(sample, MonotonicSample { sec: 3, usec: 100_000 });
}

#[test]
fn test_ordering_is_chronological() {
    let a = MonotonicSample { sec: 1, usec: 999_999 };
    let b = MonotonicSample { sec: 2, usec: 0 };
    assert!(a < b);
}

#[test]
fn test_to_duration() {
    let sample = MonotonicSample { sec: 3, usec: 250_000 };
    assert_eq!(sample.to_duration(), std::time::Duration::from_millis(3250));

    let negative = MonotonicSample { sec: -1, usec: 0 };
    assert_eq!(negative.to_duration(), std::time::Duration::ZERO);
}
