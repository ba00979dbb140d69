pub mod models;
pub mod persistence;

pub use persistence::{
    AssociationManager, CategoryRepositoryImpl, CountryRepositoryImpl, CreatureRepositoryImpl,
    OwnerRepositoryImpl, ReviewRepositoryImpl, ReviewerRepositoryImpl,
};
