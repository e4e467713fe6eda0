//! The form fields collected for one eviction notice.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::common::today_iso;
use super::traits::Validator;
use super::validation::{validate_notice_period, ValidationErrors, MIN_NOTICE_PERIOD_DAYS};

/// Landlord, tenant and lease details for a single eviction notice.
///
/// Every text field is free-form and defaults to an empty string when
/// omitted; the only checked field is `notice_period`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct NoticeRequest {
    pub your_name: String,
    pub your_address: String,
    /// Landlord's city, state and ZIP code
    pub city_state_zip: String,
    pub email: String,
    pub phone: String,
    /// Date printed on the notice; today's date when left empty
    pub date: String,

    pub tenant_name: String,
    pub tenant_address: String,
    /// Tenant's city, state and ZIP code
    pub tenant_city_state_zip: String,

    pub date_of_lease: String,
    pub grounds_for_eviction: String,
    /// Days the tenant has to vacate, at least 1
    #[schema(minimum = 1, example = 30)]
    pub notice_period: i64,
    pub outstanding_rent: String,
    pub rent_period: String,
    pub inspection_date_time: String,
    pub return_keys_date: String,

    pub your_full_name: String,
    pub your_signature: String,
}

impl Default for NoticeRequest {
    fn default() -> Self {
        Self {
            your_name: String::new(),
            your_address: String::new(),
            city_state_zip: String::new(),
            email: String::new(),
            phone: String::new(),
            date: String::new(),
            tenant_name: String::new(),
            tenant_address: String::new(),
            tenant_city_state_zip: String::new(),
            date_of_lease: String::new(),
            grounds_for_eviction: String::new(),
            notice_period: MIN_NOTICE_PERIOD_DAYS,
            outstanding_rent: String::new(),
            rent_period: String::new(),
            inspection_date_time: String::new(),
            return_keys_date: String::new(),
            your_full_name: String::new(),
            your_signature: String::new(),
        }
    }
}

impl NoticeRequest {
    /// Fill fields the form would have pre-populated.
    pub fn with_defaults(mut self) -> Self {
        if self.date.trim().is_empty() {
            self.date = today_iso();
        }
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        Validator::validate(self)
    }
}

impl Validator for NoticeRequest {
    fn validate(&self) -> Result<(), String> {
        let mut errors = ValidationErrors::new();
        validate_notice_period(self.notice_period, "notice_period", &mut errors);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserialization() {
        let json = r#"{
            "your_name": "John Smith",
            "tenant_name": "Jane Doe",
            "tenant_address": "12 Oak St",
            "notice_period": 30,
            "outstanding_rent": "$1200",
            "rent_period": "March 2024"
        }"#;

        let request: NoticeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.tenant_name, "Jane Doe");
        assert_eq!(request.notice_period, 30);
        assert_eq!(request.email, "");
    }

    #[test]
    fn test_missing_notice_period_defaults_to_minimum() {
        let request: NoticeRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.notice_period, 1);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_zero_notice_period_rejected() {
        let request = NoticeRequest {
            notice_period: 0,
            ..Default::default()
        };
        let message = request.validate().unwrap_err();
        assert!(message.contains("notice_period"));
    }

    #[test]
    fn test_with_defaults_keeps_supplied_date() {
        let request = NoticeRequest {
            date: "2024-04-01".to_string(),
            ..Default::default()
        }
        .with_defaults();
        assert_eq!(request.date, "2024-04-01");

        let filled = NoticeRequest::default().with_defaults();
        assert_eq!(filled.date.len(), "2024-04-01".len());
    }
}
