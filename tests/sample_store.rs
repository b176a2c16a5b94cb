//! Tests for the sample store and the fractional reader

use feedback_delay_dsp::utils::delay_line::SampleStore;
use feedback_delay_dsp::{MAX_DELAY, MIN_DELAY, STORE_SIZE};

fn filled_store() -> SampleStore<i16, 16> {
    let mut store = SampleStore::<i16, 16>::new();
    for n in 0..10 {
        store.write(n * 100);
        store.advance();
    }

    store
}

#[test]
fn write_and_advance() {
    let mut store = SampleStore::<i16, 16>::new();
    store.write(5);
    assert_eq!(store.write_cursor(), 0);
    store.advance();
    assert_eq!(store.write_cursor(), 1);
    assert_eq!(store.sample(0), 5);

    for _ in 0..15 {
        store.advance();
    }
    assert_eq!(store.write_cursor(), 0);
}

#[test]
fn out_of_range_writes_saturate() {
    let mut store = SampleStore::<i16, 16>::new();
    store.write(40000);
    store.advance();
    store.write(-40000);

    assert_eq!(store.sample(0), i16::MAX as i32);
    assert_eq!(store.sample(1), i16::MIN as i32);
}

#[test]
fn read_whole_samples() {
    let store = filled_store();
    assert_eq!(store.write_cursor(), 10);

    // Delay 2 reads 3 samples behind the cursor.
    assert_eq!(store.read(2 << 7), 700);
    assert_eq!(store.read(0), 900);
}

#[test]
fn read_fractional() {
    let store = filled_store();

    assert_eq!(store.read((2 << 7) + 64), 650);
    assert_eq!(store.read((2 << 7) + 32), 675);
    assert_eq!(store.read((2 << 7) + 127), 601);
}

#[test]
fn read_wraps_around() {
    let store = filled_store();

    // 11 and 12 behind cursor 10 are the untouched slots 15 and 14.
    assert_eq!(store.resolve(10, 11), 15);
    assert_eq!(store.resolve(10, 12), 14);
    assert_eq!(store.read(10 << 7), 0);

    assert_eq!(store.resolve(3, 20), 15);
    assert_eq!(store.resolve(0, 16), 0);
    assert_eq!(store.read_interpolated(11, 1 << 7), 900);
}

#[test]
fn writes_wrap_around() {
    let mut store = SampleStore::<i16, 16>::new();
    for n in 0..20 {
        store.write(n * 10);
        store.advance();
    }

    assert_eq!(store.write_cursor(), 4);
    assert_eq!(store.sample(0), 160);
    assert_eq!(store.read(3 << 7), 160);
    assert_eq!(store.read(5 << 7), 140);
}

#[test]
fn reset_clears_store() {
    let mut store = filled_store();
    store.reset();

    assert_eq!(store.write_cursor(), 0);
    assert!((0..16).all(|index| store.sample(index) == 0));
}

#[test]
fn indices_stay_in_range_for_all_delays() {
    let store = Box::new(SampleStore::<i16, STORE_SIZE>::new());
    let cursors = [0, 1, 99, 50000, STORE_SIZE - 2, STORE_SIZE - 1];
    let delays = (MIN_DELAY..=MAX_DELAY)
        .step_by(997)
        .chain([MIN_DELAY, MAX_DELAY]);

    for delay in delays {
        for &cursor in cursors.iter() {
            for behind in [delay + 1, delay + 2] {
                let index = store.resolve(cursor, behind);
                assert!(index < STORE_SIZE);
                assert_eq!(
                    index,
                    (cursor + STORE_SIZE - behind as usize) % STORE_SIZE
                );
            }
        }
    }
}
