//! Repository contracts, one per entity type.
//!
//! Every mutating operation succeeds only when the store confirms at least
//! one affected row. `update` and `delete` take a fully populated entity;
//! `update` reports `NotFound` before writing when the identity is unknown.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::entities::{
    Category, Country, Creature, NewCategory, NewCountry, NewCreature, NewOwner, NewReview,
    NewReviewer, Owner, Review, Reviewer,
};
use crate::shared::errors::AppResult;

#[async_trait]
pub trait CreatureRepository: Send + Sync {
    /// All creatures, most recently created first.
    async fn list(&self) -> AppResult<Vec<Creature>>;
    async fn get_by_id(&self, id: i32) -> AppResult<Creature>;
    async fn get_by_name(&self, name: &str) -> AppResult<Creature>;
    async fn exists(&self, id: i32) -> AppResult<bool>;
    /// Mean review rating, `0` when the creature has no reviews.
    async fn rating(&self, id: i32) -> AppResult<Decimal>;
    /// Creates the creature together with its single initial owner and category link.
    async fn create(
        &self,
        owner_id: i32,
        category_id: i32,
        creature: NewCreature,
    ) -> AppResult<Creature>;
    async fn update(&self, creature: &Creature) -> AppResult<()>;
    async fn delete(&self, creature: &Creature) -> AppResult<()>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Category>>;
    async fn get_by_id(&self, id: i32) -> AppResult<Category>;
    async fn get_by_name(&self, name: &str) -> AppResult<Category>;
    async fn exists(&self, id: i32) -> AppResult<bool>;
    async fn creatures(&self, category_id: i32) -> AppResult<Vec<Creature>>;
    async fn create(&self, category: NewCategory) -> AppResult<Category>;
    async fn update(&self, category: &Category) -> AppResult<()>;
    async fn delete(&self, category: &Category) -> AppResult<()>;
}

#[async_trait]
pub trait OwnerRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Owner>>;
    async fn get_by_id(&self, id: i32) -> AppResult<Owner>;
    async fn exists(&self, id: i32) -> AppResult<bool>;
    async fn owners_of_creature(&self, creature_id: i32) -> AppResult<Vec<Owner>>;
    async fn creatures_of_owner(&self, owner_id: i32) -> AppResult<Vec<Creature>>;
    async fn create(&self, country_id: i32, owner: NewOwner) -> AppResult<Owner>;
    async fn update(&self, owner: &Owner) -> AppResult<()>;
    async fn delete(&self, owner: &Owner) -> AppResult<()>;
}

#[async_trait]
pub trait CountryRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Country>>;
    async fn get_by_id(&self, id: i32) -> AppResult<Country>;
    async fn exists(&self, id: i32) -> AppResult<bool>;
    /// `None` when the owner has no resolved country.
    async fn country_of_owner(&self, owner_id: i32) -> AppResult<Option<Country>>;
    async fn owners_of_country(&self, country_id: i32) -> AppResult<Vec<Owner>>;
    async fn create(&self, country: NewCountry) -> AppResult<Country>;
    async fn update(&self, country: &Country) -> AppResult<()>;
    async fn delete(&self, country: &Country) -> AppResult<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Review>>;
    async fn get_by_id(&self, id: i32) -> AppResult<Review>;
    async fn exists(&self, id: i32) -> AppResult<bool>;
    async fn reviews_of_creature(&self, creature_id: i32) -> AppResult<Vec<Review>>;
    async fn create(
        &self,
        reviewer_id: i32,
        creature_id: i32,
        review: NewReview,
    ) -> AppResult<Review>;
    async fn update(&self, review: &Review) -> AppResult<()>;
    async fn delete(&self, review: &Review) -> AppResult<()>;
}

#[async_trait]
pub trait ReviewerRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Reviewer>>;
    async fn get_by_id(&self, id: i32) -> AppResult<Reviewer>;
    async fn exists(&self, id: i32) -> AppResult<bool>;
    async fn reviews_of_reviewer(&self, reviewer_id: i32) -> AppResult<Vec<Review>>;
    async fn create(&self, reviewer: NewReviewer) -> AppResult<Reviewer>;
    async fn update(&self, reviewer: &Reviewer) -> AppResult<()>;
    async fn delete(&self, reviewer: &Reviewer) -> AppResult<()>;
}
