pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::Catalog;
pub use domain::{
    Category, CategoryRepository, Country, CountryRepository, Creature, CreatureRepository,
    NewCategory, NewCountry, NewCreature, NewOwner, NewReview, NewReviewer, Owner,
    OwnerRepository, RatingAggregator, Review, ReviewRepository, Reviewer, ReviewerRepository,
};
