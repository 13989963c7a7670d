use crate::common::{error::ValidationError, key};

use aws_sdk_dynamodb::types;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_dynamo::{Result, to_attribute_value, to_item};
use std::collections;

/// One way of reaching a customer.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Marks the preferred contact; unset means `false`.
    #[serde(default)]
    pub is_primary: bool,
}

/// A stored customer record.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Lookup key, immutable once created.
    pub customer_id: String,
    /// Customer name.
    pub name: String,
    /// Customer email.
    pub email: String,
    /// Whether the customer is active.
    pub active: bool,
    /// Birth date, stored as given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    /// Postal addresses, in caller order.
    #[serde(default)]
    pub address_list: Vec<String>,
    /// Contacts, at least one of them primary.
    pub contact_info_list: Vec<ContactInfo>,
}

impl TryFrom<Customer> for collections::HashMap<String, types::AttributeValue> {
    type Error = serde_dynamo::Error;

    fn try_from(customer: Customer) -> Result<Self> {
        to_item(customer)
    }
}

/// Check a supplied contact list: non-empty with at least one primary entry.
pub fn validate_contact_list(contact_info_list: &[ContactInfo]) -> Result<(), ValidationError> {
    if contact_info_list.is_empty() {
        return Err(ValidationError::EmptyContactList);
    }
    if !contact_info_list.iter().any(|contact| contact.is_primary) {
        return Err(ValidationError::NoPrimaryContact);
    }
    Ok(())
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::MissingField(field)),
    }
}

/// Body of a create request.
///
/// Every field is optional at parse time so that missing pieces are reported
/// as validation failures rather than as a malformed body.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    /// Caller assigned identifier.
    pub customer_id: Option<String>,
    /// Customer name.
    pub name: Option<String>,
    /// Customer email.
    pub email: Option<String>,
    /// Active flag, `false` when absent.
    #[serde(default)]
    pub active: bool,
    /// Birth date.
    pub birthdate: Option<String>,
    /// Postal addresses.
    #[serde(default)]
    pub address_list: Vec<String>,
    /// Contacts.
    pub contact_info_list: Option<Vec<ContactInfo>>,
}

impl TryFrom<NewCustomer> for Customer {
    type Error = ValidationError;

    fn try_from(new_customer: NewCustomer) -> Result<Self, ValidationError> {
        let contact_info_list = new_customer.contact_info_list.unwrap_or_default();
        validate_contact_list(&contact_info_list)?;
        let customer_id = key::CustomerId::parse(new_customer.customer_id.as_deref())?;
        let customer = Self {
            customer_id: customer_id.as_str().to_string(),
            name: required(new_customer.name, "name")?,
            email: required(new_customer.email, "email")?,
            active: new_customer.active,
            birthdate: new_customer.birthdate,
            address_list: new_customer.address_list,
            contact_info_list,
        };
        Ok(customer)
    }
}

/// Body of an update request: only the fields to change.
///
/// Presence decides what is written, so `"active": false` is an update.
/// A `customerId` in the body is ignored.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPatch {
    /// New name.
    pub name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New active flag.
    pub active: Option<bool>,
    /// New birth date.
    pub birthdate: Option<String>,
    /// Replacement address list.
    pub address_list: Option<Vec<String>>,
    /// Replacement contact list.
    pub contact_info_list: Option<Vec<ContactInfo>>,
}

impl CustomerPatch {
    /// Validate the patch, rejecting a bad contact list or an empty patch.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(contact_info_list) = &self.contact_info_list {
            validate_contact_list(contact_info_list)?;
        }
        if self.is_empty() {
            return Err(ValidationError::NoUpdateFields);
        }
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.active.is_none()
            && self.birthdate.is_none()
            && self.address_list.is_none()
            && self.contact_info_list.is_none()
    }

    /// Attribute assignments for the fields present, in a stable order.
    pub fn into_assignments(self) -> Result<IndexMap<String, types::AttributeValue>> {
        let mut assignments: IndexMap<String, types::AttributeValue> = IndexMap::new();
        if let Some(name) = self.name {
            assignments.insert("name".to_string(), to_attribute_value(name)?);
        }
        if let Some(email) = self.email {
            assignments.insert("email".to_string(), to_attribute_value(email)?);
        }
        if let Some(active) = self.active {
            assignments.insert("active".to_string(), to_attribute_value(active)?);
        }
        if let Some(birthdate) = self.birthdate {
            assignments.insert("birthdate".to_string(), to_attribute_value(birthdate)?);
        }
        if let Some(address_list) = self.address_list {
            assignments.insert("addressList".to_string(), to_attribute_value(address_list)?);
        }
        if let Some(contact_info_list) = self.contact_info_list {
            assignments.insert(
                "contactInfoList".to_string(),
                to_attribute_value(contact_info_list)?,
            );
        }
        Ok(assignments)
    }
}
