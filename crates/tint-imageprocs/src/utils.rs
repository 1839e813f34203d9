/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use tint_image::errors::ImageErrors;

/// Convert to an integer sample, truncating toward zero
///
/// `as` saturates out of range values and maps NaN to zero
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn truncate(value: f64) -> i32 {
    value as i32
}

/// Confirm `value` is a finite percentage in `[0,100]`
pub(crate) fn check_percentage(parameter: &'static str, value: f64) -> Result<(), ImageErrors> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ImageErrors::OutOfRange(
            parameter,
            format!("expected a value between 0 and 100 but found {value}")
        ))
    }
}

#[test]
fn percentage_bounds_are_inclusive() {
    assert!(check_percentage("p", 0.0).is_ok());
    assert!(check_percentage("p", 100.0).is_ok());
    assert!(check_percentage("p", -0.5).is_err());
    assert!(check_percentage("p", 100.01).is_err());
    assert!(check_percentage("p", f64::NAN).is_err());
}
