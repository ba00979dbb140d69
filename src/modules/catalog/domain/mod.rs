pub mod entities;
pub mod repositories;
pub mod services;

// Re-exports for easy access
pub use entities::{
    Category, Country, Creature, NewCategory, NewCountry, NewCreature, NewOwner, NewReview,
    NewReviewer, Owner, Review, Reviewer,
};
pub use repositories::{
    CategoryRepository, CountryRepository, CreatureRepository, OwnerRepository,
    ReviewRepository, ReviewerRepository,
};
pub use services::RatingAggregator;
