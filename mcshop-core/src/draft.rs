//! Add-item form contents and validation.
//!
//! A validated draft is never inserted into the catalog; the form only
//! collects and checks input.
use crate::catalog::Category;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    pub price: String,
    pub description: String,
}

/// Which form field a draft value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Category,
    Price,
    Description,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("name must not be blank")]
    BlankName,
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("price must be a non-negative whole number, got {0:?}")]
    InvalidPrice(String),
    #[error("description must not be blank")]
    BlankDescription,
}

impl DraftError {
    #[must_use]
    pub const fn field(&self) -> DraftField {
        match self {
            Self::BlankName => DraftField::Name,
            Self::UnknownCategory(_) => DraftField::Category,
            Self::InvalidPrice(_) => DraftField::Price,
            Self::BlankDescription => DraftField::Description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedDraft {
    pub name: String,
    pub category: Category,
    pub price: u32,
    pub description: String,
}

impl ItemDraft {
    /// Replace one field's value.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Name => self.name = value,
            DraftField::Category => self.category = value,
            DraftField::Price => self.price = value,
            DraftField::Description => self.description = value,
        }
    }

    /// Check every field, reporting the first problem in form order.
    ///
    /// # Errors
    ///
    /// Returns the [`DraftError`] for the first invalid field.
    pub fn validate(&self) -> Result<ValidatedDraft, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::BlankName);
        }
        let category = self
            .category
            .parse::<Category>()
            .map_err(|_| DraftError::UnknownCategory(self.category.clone()))?;
        let price = self
            .price
            .trim()
            .parse::<u32>()
            .map_err(|_| DraftError::InvalidPrice(self.price.clone()))?;
        let description = self.description.trim();
        if description.is_empty() {
            return Err(DraftError::BlankDescription);
        }
        Ok(ValidatedDraft {
            name: name.to_string(),
            category,
            price,
            description: description.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ItemDraft {
        let mut draft = ItemDraft::default();
        draft.set(DraftField::Name, "  Незеритовый меч ");
        draft.set(DraftField::Category, "Оружие");
        draft.set(DraftField::Price, "2500");
        draft.set(DraftField::Description, "Крепче алмаза");
        draft
    }

    #[test]
    fn valid_draft_is_trimmed_and_typed() {
        let validated = filled().validate().unwrap();
        assert_eq!(validated.name, "Незеритовый меч");
        assert_eq!(validated.category, Category::Weapons);
        assert_eq!(validated.price, 2500);
    }

    #[test]
    fn first_invalid_field_is_reported() {
        let mut draft = filled();
        draft.set(DraftField::Name, "   ");
        draft.set(DraftField::Price, "abc");
        let err = draft.validate().unwrap_err();
        assert_eq!(err, DraftError::BlankName);
        assert_eq!(err.field(), DraftField::Name);
    }

    #[test]
    fn negative_and_fractional_prices_are_rejected() {
        for bad in ["-5", "12.5", ""] {
            let mut draft = filled();
            draft.set(DraftField::Price, bad);
            assert_eq!(
                draft.validate().unwrap_err(),
                DraftError::InvalidPrice(bad.to_string())
            );
        }
    }

    #[test]
    fn unknown_category_and_blank_description() {
        let mut draft = filled();
        draft.set(DraftField::Category, "Шапки");
        assert_eq!(draft.validate().unwrap_err().field(), DraftField::Category);

        let mut draft = filled();
        draft.set(DraftField::Description, "");
        assert_eq!(draft.validate().unwrap_err(), DraftError::BlankDescription);
    }
}
