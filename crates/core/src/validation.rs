//! Custom validation rules referenced by the entity DTOs via
//! `#[validate(custom)]` / `#[validate(schema)]`.
//!
//! Field-level checks (non-empty strings, email format, numeric ranges) live
//! on the DTOs themselves through the `validator` derive; only the rules the
//! derive cannot express are here.

use validator::ValidationError;

use crate::types::Date;

/// Hotel ratings run from 1.0 to 5.0 inclusive, in half-star steps.
pub fn rating_in_half_steps(rating: f64) -> Result<(), ValidationError> {
    if !(1.0..=5.0).contains(&rating) {
        return Err(ValidationError::new("rating_out_of_range")
            .with_message("rating must be between 1.0 and 5.0".into()));
    }
    // Half-star granularity: 1.0, 1.5, ..., 5.0.
    let doubled = rating * 2.0;
    if (doubled - doubled.round()).abs() > f64::EPSILON {
        return Err(ValidationError::new("rating_not_half_step")
            .with_message("rating must be a multiple of 0.5".into()));
    }
    Ok(())
}

/// A stay's check-out must be strictly after its check-in; a zero-night
/// reservation is rejected.
pub fn stay_interval(check_in: Date, check_out: Date) -> Result<(), ValidationError> {
    if check_out <= check_in {
        return Err(ValidationError::new("check_out_not_after_check_in")
            .with_message("check_out must be strictly after check_in".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rating_accepts_half_steps() {
        for rating in [1.0, 1.5, 3.0, 4.5, 5.0] {
            assert!(rating_in_half_steps(rating).is_ok(), "rating {rating}");
        }
    }

    #[test]
    fn rating_rejects_out_of_range() {
        assert!(rating_in_half_steps(0.5).is_err());
        assert!(rating_in_half_steps(5.5).is_err());
    }

    #[test]
    fn rating_rejects_off_step_values() {
        assert!(rating_in_half_steps(3.2).is_err());
        assert!(rating_in_half_steps(4.75).is_err());
    }

    #[test]
    fn stay_requires_strictly_later_check_out() {
        let d1 = date(2024, 3, 10);
        let d2 = date(2024, 3, 12);
        assert!(stay_interval(d1, d2).is_ok());
        assert!(stay_interval(d1, d1).is_err(), "same-day stay rejected");
        assert!(stay_interval(d2, d1).is_err(), "reversed interval rejected");
    }
}
