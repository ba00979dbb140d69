use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::utils::NaturalKey;

// ============= CREATURE =============

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Creature {
    pub id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
}

/// Payload for creating a creature; the identity is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCreature {
    pub name: String,
    pub birth_date: NaiveDate,
}

impl NewCreature {
    pub fn new(name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            birth_date,
        }
    }

    pub fn natural_key(&self) -> NaturalKey {
        NaturalKey::single(&self.name)
    }
}

// ============= CATEGORY =============

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn natural_key(&self) -> NaturalKey {
        NaturalKey::single(&self.name)
    }
}

// ============= COUNTRY =============

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCountry {
    pub name: String,
}

impl NewCountry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn natural_key(&self) -> NaturalKey {
        NaturalKey::single(&self.name)
    }
}

// ============= OWNER =============

/// An owner belongs to one country; `country_id` stays `None` when the
/// country it was linked to could not be resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub country_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOwner {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
}

impl NewOwner {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender: gender.into(),
        }
    }

    pub fn natural_key(&self) -> NaturalKey {
        NaturalKey::pair(&self.first_name, &self.last_name)
    }
}

// ============= REVIEWER =============

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reviewer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReviewer {
    pub first_name: String,
    pub last_name: String,
}

impl NewReviewer {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn natural_key(&self) -> NaturalKey {
        NaturalKey::pair(&self.first_name, &self.last_name)
    }
}

// ============= REVIEW =============

/// A review of one creature written by one reviewer. Either reference may be
/// absent if it did not resolve when the review was created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub rating: i32,
    pub creature_id: Option<i32>,
    pub reviewer_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReview {
    pub title: String,
    pub text: String,
    pub rating: i32,
}

impl NewReview {
    pub fn new(title: impl Into<String>, text: impl Into<String>, rating: i32) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            rating,
        }
    }

    pub fn natural_key(&self) -> NaturalKey {
        NaturalKey::single(&self.title)
    }
}
