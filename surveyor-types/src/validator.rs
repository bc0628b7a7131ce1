use std::fmt;
use std::sync::Arc;

use crate::AnswerValue;

type ValidateFn = dyn Fn(&AnswerValue) -> Result<(), String> + Send + Sync;

/// A per-question validator.
///
/// Receives the plain (sanitized) answer value and returns a human-readable
/// message when it is invalid. Prompt adapters show the message and ask again.
#[derive(Clone)]
pub struct Validator(Arc<ValidateFn>);

impl Validator {
    /// Wrap a validation function.
    pub fn new<F>(validate: F) -> Self
    where
        F: Fn(&AnswerValue) -> Result<(), String> + Send + Sync + 'static,
    {
        Self(Arc::new(validate))
    }

    /// Run the validator against a value.
    pub fn validate(&self, value: &AnswerValue) -> Result<(), String> {
        (self.0)(value)
    }

    /// Rejects empty answers.
    pub fn required() -> Self {
        Self::new(|value| {
            if value.is_empty() {
                Err("Value is required".to_string())
            } else {
                Ok(())
            }
        })
    }

    /// Rejects strings shorter than `min` characters. Other values pass.
    pub fn min_length(min: usize) -> Self {
        Self::new(move |value| match value.as_str() {
            Some(s) if s.chars().count() < min => {
                Err(format!("Value must be at least {min} characters long"))
            }
            _ => Ok(()),
        })
    }

    /// Rejects strings longer than `max` characters. Other values pass.
    pub fn max_length(max: usize) -> Self {
        Self::new(move |value| match value.as_str() {
            Some(s) if s.chars().count() > max => {
                Err(format!("Value must be at most {max} characters long"))
            }
            _ => Ok(()),
        })
    }

    /// Accepts `v`-prefixed semantic versions such as `v1.0.0` or `v0.2.1-rc.1`.
    pub fn semver() -> Self {
        Self::new(|value| match value.as_str() {
            Some(s) if is_semver_with_prefix(s) => Ok(()),
            Some(_) => Err("invalid version format".to_string()),
            None => Err("version has an invalid value type".to_string()),
        })
    }

    /// Runs each validator in order and reports the first failure.
    pub fn compose(validators: impl IntoIterator<Item = Validator>) -> Self {
        let validators: Vec<_> = validators.into_iter().collect();
        Self::new(move |value| {
            validators
                .iter()
                .try_for_each(|validator| validator.validate(value))
        })
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validator(..)")
    }
}

/// Check a `v`-prefixed SemVer 2.0.0 version, pre-release and build metadata included.
pub fn is_semver_with_prefix(version: &str) -> bool {
    version
        .strip_prefix('v')
        .is_some_and(|v| semver::Version::parse(v).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_empty() {
        let v = Validator::required();
        assert!(v.validate(&AnswerValue::from("")).is_err());
        assert!(v.validate(&AnswerValue::List(Vec::new())).is_err());
        assert!(v.validate(&AnswerValue::from("orders")).is_ok());
        assert!(v.validate(&AnswerValue::Bool(false)).is_ok());
    }

    #[test]
    fn length_bounds() {
        let v = Validator::compose([Validator::min_length(3), Validator::max_length(5)]);
        assert!(v.validate(&AnswerValue::from("ab")).is_err());
        assert!(v.validate(&AnswerValue::from("abc")).is_ok());
        assert!(v.validate(&AnswerValue::from("abcdef")).is_err());
        assert!(v.validate(&AnswerValue::Bool(true)).is_ok());
    }

    #[test]
    fn compose_reports_first_failure() {
        let v = Validator::compose([Validator::required(), Validator::min_length(3)]);
        assert_eq!(
            v.validate(&AnswerValue::from("")).unwrap_err(),
            "Value is required"
        );
    }

    #[test]
    fn semver_versions() {
        assert!(is_semver_with_prefix("v0.1.0"));
        assert!(is_semver_with_prefix("v10.20.30"));
        assert!(is_semver_with_prefix("v1.0.0-rc.1"));
        assert!(is_semver_with_prefix("v1.0.0+build.5"));
        assert!(!is_semver_with_prefix("0.1.0"));
        assert!(!is_semver_with_prefix("v1.0"));
        assert!(!is_semver_with_prefix("v01.0.0"));
        assert!(!is_semver_with_prefix("v1.0.0-"));
        assert!(!is_semver_with_prefix("vx.y.z"));
    }

    #[test]
    fn semver_rejects_leading_zero_prerelease() {
        assert!(!is_semver_with_prefix("v1.0.0-01"));
        assert!(is_semver_with_prefix("v1.0.0-0.3.7"));
        assert!(Validator::semver().validate(&AnswerValue::from("v1.0.0-01")).is_err());
    }

    #[test]
    fn semver_validator_rejects_non_strings() {
        assert_eq!(
            Validator::semver()
                .validate(&AnswerValue::Bool(true))
                .unwrap_err(),
            "version has an invalid value type"
        );
    }
}
