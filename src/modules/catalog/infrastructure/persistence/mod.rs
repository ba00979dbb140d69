// Relationship and uniqueness plumbing shared by the repositories
pub mod associations;
pub mod uniqueness;

// Shared mapping utilities
pub mod mapper;

pub mod category_repository_impl;
pub mod country_repository_impl;
pub mod creature_repository_impl;
pub mod owner_repository_impl;
pub mod review_repository_impl;
pub mod reviewer_repository_impl;

// Re-export repository implementations
pub use associations::AssociationManager;
pub use category_repository_impl::CategoryRepositoryImpl;
pub use country_repository_impl::CountryRepositoryImpl;
pub use creature_repository_impl::CreatureRepositoryImpl;
pub use owner_repository_impl::OwnerRepositoryImpl;
pub use review_repository_impl::ReviewRepositoryImpl;
pub use reviewer_repository_impl::ReviewerRepositoryImpl;
pub use uniqueness::{KeyedEntity, UniquenessGuard};
