//! Register-step decibel scales.
//!
//! Chips expose gain and power controls as plain register steps; the
//! datasheet gives the step size and the level at the bottom of the
//! span. [`DbScale`] describes that mapping in millibels. Scale values
//! are plain `Copy` data owned by the caller and passed by shared
//! reference; the pure conversions in [`fixed`](crate::fixed) never
//! consult them.

use crate::fixed::{exp2_q16, LOG2_Q16_CEIL, OCTAVES_PER_MB_Q16};

/// An inclusive span of raw register values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawRange {
    pub min: u32,
    pub max: u32,
}

impl RawRange {
    /// `min` must not exceed `max`.
    pub const fn new(min: u32, max: u32) -> Self {
        debug_assert!(min <= max);

        Self { min, max }
    }

    #[inline]
    pub const fn contains(&self, raw: u32) -> bool {
        raw >= self.min && raw <= self.max
    }

    /// The number of register steps above `min`.
    #[inline]
    pub const fn steps(&self) -> u32 {
        self.max - self.min
    }
}

/// A linear mapping from raw register steps to millibel values.
///
/// `min` is the level at [`RawRange::min`] and `step` is the level
/// increase per register step, both in millibels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DbScale {
    pub min: i32,
    pub step: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScaleError {
    #[error("raw value {raw} is outside the range {min}..={max}")]
    RawOutOfRange { raw: u32, min: u32, max: u32 },
    #[error("{db} mB is outside the scale span {min}..={max} mB")]
    DbOutOfSpan { db: i32, min: i32, max: i32 },
    #[error("the scale span overflows the millibel range")]
    SpanOverflow,
}

impl DbScale {
    pub const fn new(min: i32, step: u32) -> Self {
        Self { min, step }
    }

    /// Returns the millibel value of a register value.
    pub fn db_at(&self, raw: u32, range: &RawRange) -> Result<i32, ScaleError> {
        if !range.contains(raw) {
            return Err(ScaleError::RawOutOfRange {
                raw,
                min: range.min,
                max: range.max,
            });
        }

        let db = i128::from(self.min) + i128::from(raw - range.min) * i128::from(self.step);

        i32::try_from(db).map_err(|_| ScaleError::SpanOverflow)
    }

    /// Returns the millibel values at the bottom and top of `range`.
    pub fn db_span(&self, range: &RawRange) -> Result<(i32, i32), ScaleError> {
        let top = i128::from(self.min) + i128::from(range.steps()) * i128::from(self.step);

        Ok((
            self.min,
            i32::try_from(top).map_err(|_| ScaleError::SpanOverflow)?,
        ))
    }

    /// Returns the largest register value whose level does not exceed
    /// `db`.
    ///
    /// Errors when `db` lies outside the scale span; use
    /// [`raw_for_db_clamped`](DbScale::raw_for_db_clamped) on write
    /// paths that should absorb out-of-span requests.
    pub fn raw_for_db(&self, db: i32, range: &RawRange) -> Result<u32, ScaleError> {
        let (bottom, top) = self.db_span(range)?;

        if db < bottom || db > top {
            return Err(ScaleError::DbOutOfSpan {
                db,
                min: bottom,
                max: top,
            });
        }

        if self.step == 0 {
            return Ok(range.min);
        }

        let steps = (i64::from(db) - i64::from(self.min)) / i64::from(self.step);

        Ok(range.min + steps as u32)
    }

    /// Like [`raw_for_db`](DbScale::raw_for_db), but clamps
    /// out-of-span requests to the nearest end of `range`.
    pub fn raw_for_db_clamped(&self, db: i32, range: &RawRange) -> u32 {
        if db < self.min {
            log::debug!("{} mB is below the scale bottom {} mB, clamping", db, self.min);
            return range.min;
        }

        if self.step == 0 {
            return range.min;
        }

        let steps = (i64::from(db) - i64::from(self.min)) / i64::from(self.step);
        if steps > i64::from(range.steps()) {
            log::debug!("{} mB is above the scale top, clamping", db);
            range.max
        } else {
            range.min + steps as u32
        }
    }

    /// Returns the linear power gain of a register value in Q16 fixed
    /// point (`65_536` is unity).
    ///
    /// Gains below `2^-16` underflow to `0`; gains above the `u64`
    /// range saturate to `u64::MAX`.
    pub fn gain_q16(&self, raw: u32, range: &RawRange) -> Result<u64, ScaleError> {
        let db = self.db_at(raw, range)?;

        // Shift the exponent up 16 octaves so sub-unity gains stay
        // representable.
        let log2 = ((i64::from(db) * OCTAVES_PER_MB_Q16 as i64) >> 16) + (16 << 16);

        if log2 < 0 {
            return Ok(0);
        }
        if log2 >= i64::from(LOG2_Q16_CEIL) {
            return Ok(u64::MAX);
        }

        Ok(exp2_q16(log2 as u32))
    }
}
