//! Contact form field values and validation.

use serde::{Deserialize, Serialize};

use crate::contact::{Field, FormVariant};
use crate::error::ContactError;

/// Values typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub products: String,
    pub region: String,
    pub message: String,
}

impl ContactFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Company => &self.company,
            Field::Products => &self.products,
            Field::Region => &self.region,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Company => self.company = value,
            Field::Products => self.products = value,
            Field::Region => self.region = value,
            Field::Message => self.message = value,
        }
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Required fields that are blank after trimming, in form order.
    pub fn missing(&self, variant: FormVariant) -> Vec<Field> {
        variant
            .required_fields()
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    pub fn validate(&self, variant: FormVariant) -> Result<(), ContactError> {
        let missing = self.missing(variant);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ContactError::Validation { missing })
        }
    }

    /// Copy with surrounding whitespace removed and fields the variant
    /// does not show cleared.
    pub fn normalized(&self, variant: FormVariant) -> Self {
        let mut out = ContactFields::new();
        for field in variant.fields() {
            out.set(*field, self.get(*field).trim());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFields {
        ContactFields::new()
            .with(Field::FirstName, "Jane")
            .with(Field::LastName, "Doe")
            .with(Field::Email, "jane@fleet.example")
            .with(Field::Message, "Need a quote for 40 trucks")
    }

    #[test]
    fn test_default_variant_valid() {
        assert!(filled().validate(FormVariant::Default).is_ok());
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let fields = filled().with(Field::LastName, "   ");
        assert_eq!(fields.missing(FormVariant::Default), vec![Field::LastName]);
    }

    #[test]
    fn test_quote_requires_products() {
        let err = filled().validate(FormVariant::Quote).unwrap_err();
        assert_eq!(
            err,
            ContactError::Validation {
                missing: vec![Field::Products]
            }
        );
        assert!(filled()
            .with(Field::Products, "Engine oils")
            .validate(FormVariant::Quote)
            .is_ok());
    }

    #[test]
    fn test_distributor_requires_region() {
        assert_eq!(
            filled().missing(FormVariant::Distributor),
            vec![Field::Region]
        );
    }

    #[test]
    fn test_optional_fields_not_required() {
        let fields = filled();
        assert!(fields.phone.is_empty());
        assert!(fields.company.is_empty());
        assert!(fields.missing(FormVariant::Default).is_empty());
    }

    #[test]
    fn test_every_missing_field_reported() {
        let missing = ContactFields::new().missing(FormVariant::Quote);
        assert_eq!(missing.len(), 5);
    }

    #[test]
    fn test_normalized_drops_hidden_fields() {
        let fields = filled()
            .with(Field::FirstName, "  Jane ")
            .with(Field::Region, "Western Europe");
        let clean = fields.normalized(FormVariant::Default);
        assert_eq!(clean.first_name, "Jane");
        assert!(clean.region.is_empty());
    }
}
