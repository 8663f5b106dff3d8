//! Required-field policy applied to submissions before they are stored.

use super::AdvertSubmission;
use crate::error::AdvertError;

/// Configurable submission rules.
///
/// The title is always required. Whether a description is required, and
/// the maximum field lengths, come from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Reject submissions with a blank description.
    pub require_description: bool,
    /// Maximum title length in characters.
    pub max_title_len: usize,
    /// Maximum description length in characters.
    pub max_description_len: usize,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            require_description: false,
            max_title_len: 200,
            max_description_len: 4000,
        }
    }
}

impl ValidationPolicy {
    /// Checks a submission against the policy.
    ///
    /// # Errors
    ///
    /// Returns [`AdvertError::Invalid`] naming the first offending field.
    pub fn check(&self, submission: &AdvertSubmission) -> Result<(), AdvertError> {
        if submission.title.trim().is_empty() {
            return Err(AdvertError::invalid("title must not be blank"));
        }
        if submission.title.chars().count() > self.max_title_len {
            return Err(AdvertError::invalid(format!(
                "title exceeds {} characters",
                self.max_title_len
            )));
        }
        if self.require_description && submission.description.trim().is_empty() {
            return Err(AdvertError::invalid("description must not be blank"));
        }
        if submission.description.chars().count() > self.max_description_len {
            return Err(AdvertError::invalid(format!(
                "description exceeds {} characters",
                self.max_description_len
            )));
        }
        if !submission.price.is_finite() || submission.price < 0.0 {
            return Err(AdvertError::invalid(
                "price must be a finite, non-negative number",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_title_only_by_default() {
        let policy = ValidationPolicy::default();
        assert!(policy.check(&AdvertSubmission::titled("Bike")).is_ok());
    }

    #[test]
    fn rejects_blank_title() {
        let policy = ValidationPolicy::default();
        let err = policy.check(&AdvertSubmission::titled("   "));
        assert!(matches!(err, Err(AdvertError::Invalid(_))));
    }

    #[test]
    fn description_required_when_configured() {
        let policy = ValidationPolicy {
            require_description: true,
            ..ValidationPolicy::default()
        };
        assert!(policy.check(&AdvertSubmission::titled("Bike")).is_err());

        let mut sub = AdvertSubmission::titled("Bike");
        sub.description = "Red".to_string();
        assert!(policy.check(&sub).is_ok());
    }

    #[test]
    fn enforces_length_limits() {
        let policy = ValidationPolicy {
            max_title_len: 4,
            max_description_len: 3,
            ..ValidationPolicy::default()
        };
        assert!(policy.check(&AdvertSubmission::titled("Bike")).is_ok());
        assert!(policy.check(&AdvertSubmission::titled("Bikes")).is_err());

        let mut sub = AdvertSubmission::titled("Bike");
        sub.description = "long".to_string();
        assert!(policy.check(&sub).is_err());
    }

    #[test]
    fn rejects_negative_or_nan_price() {
        let policy = ValidationPolicy::default();
        let mut sub = AdvertSubmission::titled("Bike");
        sub.price = -1.0;
        assert!(policy.check(&sub).is_err());
        sub.price = f64::NAN;
        assert!(policy.check(&sub).is_err());
        sub.price = 0.0;
        assert!(policy.check(&sub).is_ok());
    }
}
