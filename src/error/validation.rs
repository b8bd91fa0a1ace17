use thiserror::Error;

/// Client and group intake validation failures.
///
/// Each variant's display string is the exact message the API returns with
/// a 400 status; callers match on the variant, never on the text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required client intake fields is missing or zero.
    #[error("Name, Last Name, Email, Age, and Birth Day are required")]
    MissingFields,

    /// Group creation without a name.
    #[error("Group name is required")]
    MissingGroupName,

    /// The email does not match the accepted grammar.
    #[error("Invalid email format")]
    Email,

    /// The telephone is shorter than 7 characters or not all digits.
    #[error("Phone number must be numeric and at least 7 digits long")]
    Phone,

    /// The declared age does not agree with the birth date as of today.
    #[error("Age does not match birth date")]
    Age,
}
