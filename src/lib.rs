//! Relationship-aware data access layer for a creature review catalog.
//!
//! Creatures, categories, owners, countries, reviews and reviewers live in a
//! SQLite store. The [`Catalog`] wires one repository per entity type against
//! a shared [`Database`]; relationship queries go through the
//! [`AssociationManager`] and the average creature rating through the
//! [`RatingAggregator`].

pub mod modules;
mod schema;
pub mod shared;

pub use modules::catalog::{
    infrastructure::AssociationManager, Catalog, Category, Country, Creature, NewCategory,
    NewCountry, NewCreature, NewOwner, NewReview, NewReviewer, Owner, RatingAggregator, Review,
    Reviewer,
};
pub use shared::errors::{AppError, AppResult};
pub use shared::utils::init_logger;
pub use shared::{Database, DatabaseConfig};
