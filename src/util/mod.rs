//! A set of utility functions for working with fixed-width digit strings,
//! which is most of what this engine does all day.

#[cfg(test)]
pub(crate) mod test;

use crate::error::{Error, Result};

/// Map a digit string into its numeric values, failing on empty or
/// non-numeric input. Every checksum and every field composer funnels its
/// input through here, so nothing downstream ever sees a non-digit.
pub(crate) fn digit_values(digits: &str) -> Result<Vec<u32>> {
    if digits.is_empty() {
        Err(Error::NonNumericInput(digits.into()))?;
    }
    digits.chars()
        .map(|c| c.to_digit(10).ok_or_else(|| Error::NonNumericInput(digits.into())))
        .collect()
}

/// Left-pad a digit string with zeroes out to `width`. A value already wider
/// than `width` is an overflow, never a truncation.
pub(crate) fn zpad(value: &str, width: usize) -> Result<String> {
    digit_values(value)?;
    if value.len() > width {
        Err(Error::FieldOverflow { value: value.into(), width })?;
    }
    Ok(format!("{:0>width$}", value, width = width))
}

/// Zero-pad a numeric value out to `width` digits.
pub(crate) fn zpad_num(value: u64, width: usize) -> Result<String> {
    let formatted = value.to_string();
    if formatted.len() > width {
        Err(Error::FieldOverflow { value: formatted, width })?;
    }
    Ok(format!("{:0width$}", value, width = width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_values_rejects_junk() {
        assert_eq!(digit_values("0451"), Ok(vec![0, 4, 5, 1]));
        assert_eq!(digit_values(""), Err(Error::NonNumericInput("".into())));
        assert_eq!(digit_values("12a4"), Err(Error::NonNumericInput("12a4".into())));
        assert_eq!(digit_values("12-4"), Err(Error::NonNumericInput("12-4".into())));
    }

    #[test]
    fn zpad_pads_and_overflows() {
        assert_eq!(zpad("42", 6).unwrap(), "000042");
        assert_eq!(zpad("123456", 6).unwrap(), "123456");
        assert_eq!(
            zpad("1234567", 6),
            Err(Error::FieldOverflow { value: "1234567".into(), width: 6 })
        );
        assert_eq!(zpad("4x", 6), Err(Error::NonNumericInput("4x".into())));
    }

    #[test]
    fn zpad_num_pads_and_overflows() {
        assert_eq!(zpad_num(42, 10).unwrap(), "0000000042");
        assert_eq!(zpad_num(0, 4).unwrap(), "0000");
        assert_eq!(
            zpad_num(12345, 4),
            Err(Error::FieldOverflow { value: "12345".into(), width: 4 })
        );
    }
}
