//! Per-section validation
//!
//! Sections check their own values and report every problem at once so a
//! user can fix the whole file in one pass.

use std::fmt::Display;
use std::ops::RangeInclusive;

pub use crate::error::ValidationError;

/// A top-level table of the config file
pub trait ConfigSection: Default {
    /// Reports every out-of-bounds value in the section
    fn validate(&self) -> Result<(), Vec<ValidationError>>;

    /// Overwrites this section with `other`
    fn merge(&mut self, other: Self);

    /// Table name in the TOML file
    fn section_name(&self) -> &'static str;
}

/// Accumulates validation problems for one section
#[derive(Debug, Default)]
pub struct Validator {
    problems: Vec<ValidationError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires `value` to fall within `bounds`
    pub fn within<T>(mut self, field: &'static str, value: T, bounds: RangeInclusive<T>) -> Self
    where
        T: PartialOrd + Display,
    {
        if !bounds.contains(&value) {
            self.problems.push(
                ValidationError::new(
                    field,
                    format!("must be within {}..={}", bounds.start(), bounds.end()),
                )
                .found(value),
            );
        }
        self
    }

    /// Requires `value` to contain something besides whitespace
    pub fn not_blank(mut self, field: &'static str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.problems.push(ValidationError::new(field, "must not be blank"));
        }
        self
    }

    pub fn finish(self) -> Result<(), Vec<ValidationError>> {
        if self.problems.is_empty() {
            Ok(())
        } else {
            Err(self.problems)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        for value in [1, 50, 100] {
            assert!(Validator::new().within("n", value, 1..=100).finish().is_ok());
        }
    }

    #[test]
    fn test_out_of_bounds_records_value() {
        let problems = Validator::new()
            .within("n", 101, 1..=100)
            .finish()
            .unwrap_err();
        assert_eq!(problems[0].found.as_deref(), Some("101"));
    }

    #[test]
    fn test_blank_strings() {
        assert!(Validator::new().not_blank("s", "podfeed").finish().is_ok());
        assert!(Validator::new().not_blank("s", "").finish().is_err());
        assert!(Validator::new().not_blank("s", " \t").finish().is_err());
    }

    #[test]
    fn test_collects_every_problem() {
        let problems = Validator::new()
            .within("a", 0, 1..=10)
            .not_blank("b", "ok")
            .within("c", 11, 1..=10)
            .finish()
            .unwrap_err();

        let fields: Vec<_> = problems.iter().map(|p| p.field).collect();
        assert_eq!(fields, vec!["a", "c"]);
    }
}
