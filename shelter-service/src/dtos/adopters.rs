use serde::Deserialize;
use validator::Validate;

use crate::models::AdopterContact;

/// Body of `PUT /adopters/{ssn}`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateAdopterRequest {
    #[serde(rename = "Phone")]
    #[validate(length(min = 1, max = 20, message = "Phone must be 1-20 characters"))]
    pub phone: String,
    #[serde(rename = "Email")]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

impl From<UpdateAdopterRequest> for AdopterContact {
    fn from(req: UpdateAdopterRequest) -> Self {
        Self {
            phone: req.phone,
            email: req.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_contact_passes() {
        let req: UpdateAdopterRequest =
            serde_json::from_str(r#"{"Phone":"555-0100","Email":"kim@example.org"}"#)
                .expect("body should parse");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn bad_email_fails() {
        let req: UpdateAdopterRequest =
            serde_json::from_str(r#"{"Phone":"555-0100","Email":"not-an-address"}"#)
                .expect("body should parse");
        assert!(req.validate().is_err());
    }
}
