/// Test data factories using builder pattern
///
/// Provides convenient methods to create drafts with sensible defaults
use chrono::NaiveDate;
use creature_catalog::{NewCategory, NewCountry, NewCreature, NewOwner, NewReview, NewReviewer};

pub struct CreatureFactory {
    name: String,
    birth_date: NaiveDate,
}

impl Default for CreatureFactory {
    fn default() -> Self {
        Self {
            name: "Pikachu".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1996, 2, 27).expect("valid date"),
        }
    }
}

impl CreatureFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn born(mut self, year: i32, month: u32, day: u32) -> Self {
        self.birth_date = NaiveDate::from_ymd_opt(year, month, day).expect("valid date");
        self
    }

    pub fn build(self) -> NewCreature {
        NewCreature::new(self.name, self.birth_date)
    }
}

pub struct OwnerFactory {
    first_name: String,
    last_name: String,
    gender: String,
}

impl Default for OwnerFactory {
    fn default() -> Self {
        Self {
            first_name: "Ash".to_string(),
            last_name: "Ketchum".to_string(),
            gender: "male".to_string(),
        }
    }
}

impl OwnerFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, first_name: &str, last_name: &str) -> Self {
        self.first_name = first_name.to_string();
        self.last_name = last_name.to_string();
        self
    }

    pub fn with_gender(mut self, gender: &str) -> Self {
        self.gender = gender.to_string();
        self
    }

    pub fn build(self) -> NewOwner {
        NewOwner::new(self.first_name, self.last_name, self.gender)
    }
}

pub struct ReviewFactory {
    title: String,
    text: String,
    rating: i32,
}

impl Default for ReviewFactory {
    fn default() -> Self {
        Self {
            title: "Great companion".to_string(),
            text: "Loyal and energetic.".to_string(),
            rating: 5,
        }
    }
}

impl ReviewFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    pub fn build(self) -> NewReview {
        NewReview::new(self.title, self.text, self.rating)
    }
}

pub fn category(name: &str) -> NewCategory {
    NewCategory::new(name)
}

pub fn country(name: &str) -> NewCountry {
    NewCountry::new(name)
}

pub fn reviewer(first_name: &str, last_name: &str) -> NewReviewer {
    NewReviewer::new(first_name, last_name)
}
