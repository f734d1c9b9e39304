//! Validation for user-submitted reviews.
//!
//! The form arrives as raw text, the way a browser or terminal would send
//! it. Validation turns it into a `NewReview` or explains what is wrong.

use data_loader::NewReview;

use crate::error::{Result, ServiceError};

/// Lowest star rating a user can give
pub const MIN_RATING: i32 = 1;
/// Highest star rating a user can give
pub const MAX_RATING: i32 = 5;

/// A review exactly as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewForm {
    pub reviewer_name: String,
    /// Still text: "5", " 4 ", or "five" all need handling
    pub rating: String,
    pub comment: String,
}

impl ReviewForm {
    pub fn new(
        reviewer_name: impl Into<String>,
        rating: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            reviewer_name: reviewer_name.into(),
            rating: rating.into(),
            comment: comment.into(),
        }
    }

    /// Check every field and build the review to store.
    ///
    /// Name and comment are trimmed and must not be blank; the rating must
    /// be a whole number from 1 to 5.
    pub fn validate(self) -> Result<NewReview> {
        let reviewer_name = required("reviewer_name", &self.reviewer_name)?;
        let comment = required("comment", &self.comment)?;

        let rating: i32 = self
            .rating
            .trim()
            .parse()
            .map_err(|_| ServiceError::InvalidInput {
                field: "rating".to_string(),
                reason: format!("'{}' is not a whole number", self.rating.trim()),
            })?;

        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(ServiceError::InvalidInput {
                field: "rating".to_string(),
                reason: format!("must be between {} and {}, got {}", MIN_RATING, MAX_RATING, rating),
            });
        }

        Ok(NewReview::new(reviewer_name, rating, comment))
    }
}

fn required(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ServiceError::InvalidInput {
            field: field.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_field(form: ReviewForm) -> String {
        match form.validate() {
            Err(ServiceError::InvalidInput { field, .. }) => field,
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_form() {
        let review = ReviewForm::new("  Alice ", " 5 ", "Amazing!").validate().unwrap();
        assert_eq!(review, NewReview::new("Alice", 5, "Amazing!"));
    }

    #[test]
    fn test_non_numeric_rating() {
        assert_eq!(invalid_field(ReviewForm::new("Alice", "five", "Amazing!")), "rating");
        assert_eq!(invalid_field(ReviewForm::new("Alice", "4.5", "Amazing!")), "rating");
        assert_eq!(invalid_field(ReviewForm::new("Alice", "", "Amazing!")), "rating");
    }

    #[test]
    fn test_rating_out_of_range() {
        assert_eq!(invalid_field(ReviewForm::new("Alice", "0", "Bad")), "rating");
        assert_eq!(invalid_field(ReviewForm::new("Alice", "6", "Good")), "rating");
        assert!(ReviewForm::new("Alice", "1", "Bad").validate().is_ok());
    }

    #[test]
    fn test_blank_fields() {
        assert_eq!(invalid_field(ReviewForm::new("   ", "3", "Fine")), "reviewer_name");
        assert_eq!(invalid_field(ReviewForm::new("Alice", "3", "")), "comment");
    }
}
