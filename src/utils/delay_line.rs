//! Circular sample store with a fractional reader.
//!
//! Unlike a classic delay line, the cursor is not advanced by [`SampleStore::write`]. Reads
//! happen relative to an arbitrary cursor so that a frozen loop can play back from a cursor
//! other than the live one.

use num_traits::{Bounded, FromPrimitive, Num, Signed, ToPrimitive};

use crate::DELAY_FRACTION_BITS;

const FRACTION_ONE: i32 = 1 << DELAY_FRACTION_BITS;
const FRACTION_MASK: i32 = FRACTION_ONE - 1;

#[derive(Debug)]
pub struct SampleStore<T, const SIZE: usize> {
    write_cursor: usize,
    line: [T; SIZE],
}

impl<T, const SIZE: usize> Default for SampleStore<T, SIZE>
where
    T: Copy + Default + Num + Signed + Bounded + FromPrimitive + ToPrimitive,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const SIZE: usize> SampleStore<T, SIZE>
where
    T: Copy + Default + Num + Signed + Bounded + FromPrimitive + ToPrimitive,
{
    pub fn new() -> Self {
        Self {
            write_cursor: 0,
            line: [T::zero(); SIZE],
        }
    }

    pub fn init(&mut self) {
        self.reset();
    }

    pub fn reset(&mut self) {
        for elem in self.line.iter_mut() {
            *elem = T::zero();
        }
        self.write_cursor = 0;
    }

    pub fn size(&self) -> usize {
        SIZE
    }

    #[inline]
    pub fn write_cursor(&self) -> usize {
        self.write_cursor
    }

    /// Stores a sample at the write cursor without moving it, saturating to the range of `T`.
    #[inline]
    pub fn write(&mut self, sample: i32) {
        self.line[self.write_cursor] = T::from_i32(sample).unwrap_or_else(|| {
            if sample < 0 {
                T::min_value()
            } else {
                T::max_value()
            }
        });
    }

    #[inline]
    pub fn advance(&mut self) {
        self.write_cursor = (self.write_cursor + 1) % SIZE;
    }

    /// Index of the slot `behind` positions before `cursor`, wrapped into `0..SIZE`.
    #[inline]
    pub fn resolve(&self, cursor: usize, behind: i32) -> usize {
        (cursor as i64 - behind as i64).rem_euclid(SIZE as i64) as usize
    }

    #[inline]
    pub fn sample(&self, index: usize) -> i32 {
        self.line[index % SIZE].to_i32().unwrap_or_default()
    }

    /// Interpolated read behind `cursor`.
    ///
    /// `delay` carries 7 fractional bits. The result blends the samples `d + 1` and `d + 2`
    /// behind the cursor, where `d` is the integral part.
    #[inline]
    pub fn read_interpolated(&self, cursor: usize, delay: i32) -> i32 {
        let delay_integral = delay >> DELAY_FRACTION_BITS;
        let delay_fractional = delay & FRACTION_MASK;
        let a = self.sample(self.resolve(cursor, delay_integral + 1));
        let b = self.sample(self.resolve(cursor, delay_integral + 2));

        (b * delay_fractional + a * (FRACTION_ONE - delay_fractional) + FRACTION_ONE / 2)
            >> DELAY_FRACTION_BITS
    }

    /// Interpolated read behind the live write cursor.
    #[inline]
    pub fn read(&self, delay: i32) -> i32 {
        self.read_interpolated(self.write_cursor, delay)
    }
}
