//! Single-symbol rotation

/// Rotation applied to one untagged symbol value.
///
/// Values outside `0..=25` are not letters and must come back unchanged.
pub trait ShiftTransform {
    /// Rotates a letter value forward by `offset`
    fn shift_forward(&self, value: i32, offset: i32) -> i32;

    /// Rotates a letter value backward by `offset`
    fn shift_backward(&self, value: i32, offset: i32) -> i32;
}

/// Bit-compatible rotation whose forward wrap reduces modulo 25.
///
/// Forward and backward only disagree when the forward sum reaches 50,
/// i.e. `Z` shifted by 25, which lands on `-1` instead of `Y`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyShift;

/// Plain modulo-26 rotation in both directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModularShift;

fn is_letter(value: i32) -> bool {
    (0..=25).contains(&value)
}

/// Forward shift with the mod-25 wrap.
///
/// Sums wrap on `i32` overflow.
pub fn shift(value: i32, offset: i32) -> i32 {
    if !is_letter(value) {
        return value;
    }
    let sum = value.wrapping_add(offset);
    if sum <= 25 {
        sum
    } else {
        sum % 25 - 1
    }
}

/// Backward shift
pub fn unshift(value: i32, offset: i32) -> i32 {
    if !is_letter(value) {
        return value;
    }
    let difference = value.wrapping_sub(offset);
    if difference >= 0 {
        difference
    } else {
        25 + (difference + 1)
    }
}

impl ShiftTransform for LegacyShift {
    fn shift_forward(&self, value: i32, offset: i32) -> i32 {
        shift(value, offset)
    }

    fn shift_backward(&self, value: i32, offset: i32) -> i32 {
        unshift(value, offset)
    }
}

impl ShiftTransform for ModularShift {
    fn shift_forward(&self, value: i32, offset: i32) -> i32 {
        if is_letter(value) {
            (value + offset.rem_euclid(26)) % 26
        } else {
            value
        }
    }

    fn shift_backward(&self, value: i32, offset: i32) -> i32 {
        if is_letter(value) {
            (value - offset.rem_euclid(26)).rem_euclid(26)
        } else {
            value
        }
    }
}
