// Copyright (c) 2024-present, window-scan
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use rand::Rng;
use window_scan::{max_window_sum, min_window_sum, window_sums, Error};

#[test]
fn window_sum_known_answer() {
    assert_eq!(Ok(9), max_window_sum(&[2, 1, 5, 1, 3, 2], 3));
}

#[test]
fn window_sum_rejects_bad_sizes() {
    let items = [2, 1, 5, 1, 3, 2];

    assert_eq!(
        Err(Error::InvalidWindowLen { len: 6, size: 0 }),
        max_window_sum(&items, 0),
    );
    assert_eq!(
        Err(Error::InvalidWindowLen { len: 6, size: 7 }),
        max_window_sum(&items, 7),
    );
    assert_eq!(
        Err(Error::InvalidWindowLen { len: 0, size: 3 }),
        max_window_sum::<i64>(&[], 3),
    );
}

#[test]
fn window_sums_match_rescan() -> Result<(), Error> {
    let mut rng = rand::rng();

    for _ in 0..1_000 {
        let len = rng.random_range(1..64);
        let size = rng.random_range(1..=len);
        let seq = (0..len)
            .map(|_| rng.random_range(-1_000..=1_000i64))
            .collect::<Vec<_>>();

        let sums = window_sums(&seq, size)?.collect::<Vec<_>>();
        let rescanned = seq
            .windows(size)
            .map(|w| w.iter().sum::<i64>())
            .collect::<Vec<_>>();

        assert_eq!(rescanned, sums, "diverged on {seq:?} with size {size}");
        assert_eq!(len - size + 1, sums.len());
    }

    Ok(())
}

#[test]
fn window_sum_extremes_match_rescan() -> Result<(), Error> {
    let mut rng = rand::rng();

    for _ in 0..1_000 {
        let len = rng.random_range(1..48);
        let size = rng.random_range(1..=len);
        let seq = (0..len)
            .map(|_| rng.random_range(-100..=100i64))
            .collect::<Vec<_>>();

        let naive_max = seq
            .windows(size)
            .map(|w| w.iter().sum::<i64>())
            .max()
            .expect("at least one window");
        let naive_min = seq
            .windows(size)
            .map(|w| w.iter().sum::<i64>())
            .min()
            .expect("at least one window");

        assert_eq!(naive_max, max_window_sum(&seq, size)?);
        assert_eq!(naive_min, min_window_sum(&seq, size)?);
    }

    Ok(())
}

#[test]
fn window_sum_beats_any_single_window() -> Result<(), Error> {
    let seq = [4i64, -7, 12, 0, 3, 3, -1, 8];
    let size = 3;

    let best = max_window_sum(&seq, size)?;

    for window in seq.windows(size) {
        assert!(window.iter().sum::<i64>() <= best);
    }

    Ok(())
}
