use serde::Serialize;
use thiserror::Error;

use crate::config::LEAD_SOURCE;

/// A validated inquiry, ready to be inserted into the leads table.
///
/// Only [`Lead::from_fields`] builds one, so every value that reaches a sink
/// has a non-empty trimmed name, contact and message.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Lead {
    pub name: String,
    pub company: Option<String>,
    pub contact: String,
    pub message: String,
    pub source: &'static str,
}

/// Raw text as typed into the inquiry form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadFields {
    pub name: String,
    pub company: String,
    pub contact: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Company,
    Contact,
    Message,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadError {
    #[error("name is required")]
    MissingName,
    #[error("contact is required")]
    MissingContact,
    #[error("message is required")]
    MissingMessage,
}

impl LeadFields {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Company => self.company = value,
            Field::Contact => self.contact = value,
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn required(value: &str, err: LeadError) -> Result<String, LeadError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(err)
    } else {
        Ok(trimmed.to_string())
    }
}

impl Lead {
    pub fn from_fields(fields: &LeadFields) -> Result<Self, LeadError> {
        let name = required(&fields.name, LeadError::MissingName)?;
        let contact = required(&fields.contact, LeadError::MissingContact)?;
        let message = required(&fields.message, LeadError::MissingMessage)?;
        let company = Some(fields.company.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Ok(Self {
            name,
            company,
            contact,
            message,
            source: LEAD_SOURCE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(name: &str, company: &str, contact: &str, message: &str) -> LeadFields {
        LeadFields {
            name: name.to_string(),
            company: company.to_string(),
            contact: contact.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn blank_company_serializes_as_null() {
        let lead = Lead::from_fields(&fields("Jane", "", "jane@x.com", "Need a dashboard")).unwrap();
        assert_eq!(
            serde_json::to_value(&lead).unwrap(),
            json!({
                "name": "Jane",
                "company": null,
                "contact": "jane@x.com",
                "message": "Need a dashboard",
                "source": "company-profile",
            })
        );
    }

    #[test]
    fn whitespace_company_is_absent() {
        let lead = Lead::from_fields(&fields("Jane", "   \t", "jane@x.com", "hi")).unwrap();
        assert_eq!(lead.company, None);
    }

    #[test]
    fn values_are_trimmed() {
        let lead = Lead::from_fields(&fields("  Bo  ", " Acme ", " 555 ", " hi ")).unwrap();
        assert_eq!(lead.name, "Bo");
        assert_eq!(lead.company.as_deref(), Some("Acme"));
        assert_eq!(lead.contact, "555");
        assert_eq!(lead.message, "hi");
    }

    #[test]
    fn each_required_field_is_checked() {
        assert_eq!(
            Lead::from_fields(&fields("", "", "555-1234", "Hi")),
            Err(LeadError::MissingName)
        );
        assert_eq!(
            Lead::from_fields(&fields("Bo", "Acme", "  ", "Hi")),
            Err(LeadError::MissingContact)
        );
        assert_eq!(
            Lead::from_fields(&fields("Bo", "Acme", "555", "\n")),
            Err(LeadError::MissingMessage)
        );
    }

    #[test]
    fn set_touches_only_the_named_field() {
        let mut f = LeadFields::default();
        f.set(Field::Contact, "jane@x.com".to_string());
        assert_eq!(f.contact, "jane@x.com");
        assert_eq!(f.name, "");
        f.clear();
        assert_eq!(f, LeadFields::default());
    }
}
