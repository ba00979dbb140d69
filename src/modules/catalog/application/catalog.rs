use std::sync::Arc;

use crate::log_info;
use crate::modules::catalog::domain::{
    repositories::{
        CategoryRepository, CountryRepository, CreatureRepository, OwnerRepository,
        ReviewRepository, ReviewerRepository,
    },
    services::RatingAggregator,
};
use crate::modules::catalog::infrastructure::persistence::{
    AssociationManager, CategoryRepositoryImpl, CountryRepositoryImpl, CreatureRepositoryImpl,
    OwnerRepositoryImpl, ReviewRepositoryImpl, ReviewerRepositoryImpl,
};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::{Database, PoolStatus};

/// Every repository of the catalog wired against one [`Database`].
///
/// This is what the request-handling layer holds on to. Repositories and
/// services are shared behind `Arc`, so a `Catalog` is cheap to clone.
#[derive(Clone)]
pub struct Catalog {
    db: Arc<Database>,
    creatures: Arc<dyn CreatureRepository>,
    categories: Arc<dyn CategoryRepository>,
    owners: Arc<dyn OwnerRepository>,
    countries: Arc<dyn CountryRepository>,
    reviews: Arc<dyn ReviewRepository>,
    reviewers: Arc<dyn ReviewerRepository>,
    associations: Arc<AssociationManager>,
    ratings: Arc<RatingAggregator>,
}

impl Catalog {
    /// Builds the pool from the environment, applies pending migrations and
    /// wires the repositories.
    pub fn connect() -> AppResult<Self> {
        let db = Arc::new(Database::new()?);
        db.run_migrations()?;
        Ok(Self::with_database(db))
    }

    pub fn with_database(db: Arc<Database>) -> Self {
        let associations = Arc::new(AssociationManager::new(Arc::clone(&db)));

        let reviews: Arc<dyn ReviewRepository> = Arc::new(ReviewRepositoryImpl::new(
            Arc::clone(&db),
            Arc::clone(&associations),
        ));
        let ratings = Arc::new(RatingAggregator::new(Arc::clone(&reviews)));

        let creatures: Arc<dyn CreatureRepository> = Arc::new(CreatureRepositoryImpl::new(
            Arc::clone(&db),
            Arc::clone(&ratings),
        ));
        let categories: Arc<dyn CategoryRepository> = Arc::new(CategoryRepositoryImpl::new(
            Arc::clone(&db),
            Arc::clone(&associations),
        ));
        let owners: Arc<dyn OwnerRepository> = Arc::new(OwnerRepositoryImpl::new(
            Arc::clone(&db),
            Arc::clone(&associations),
        ));
        let countries: Arc<dyn CountryRepository> = Arc::new(CountryRepositoryImpl::new(
            Arc::clone(&db),
            Arc::clone(&associations),
        ));
        let reviewers: Arc<dyn ReviewerRepository> = Arc::new(ReviewerRepositoryImpl::new(
            Arc::clone(&db),
            Arc::clone(&associations),
        ));

        log_info!("Catalog repositories initialized");

        Self {
            db,
            creatures,
            categories,
            owners,
            countries,
            reviews,
            reviewers,
            associations,
            ratings,
        }
    }

    pub fn creatures(&self) -> &Arc<dyn CreatureRepository> {
        &self.creatures
    }

    pub fn categories(&self) -> &Arc<dyn CategoryRepository> {
        &self.categories
    }

    pub fn owners(&self) -> &Arc<dyn OwnerRepository> {
        &self.owners
    }

    pub fn countries(&self) -> &Arc<dyn CountryRepository> {
        &self.countries
    }

    pub fn reviews(&self) -> &Arc<dyn ReviewRepository> {
        &self.reviews
    }

    pub fn reviewers(&self) -> &Arc<dyn ReviewerRepository> {
        &self.reviewers
    }

    /// Relationship queries across entity types.
    pub fn associations(&self) -> &AssociationManager {
        &self.associations
    }

    pub fn ratings(&self) -> &RatingAggregator {
        &self.ratings
    }

    pub fn database(&self) -> &Arc<Database> {
        &self.db
    }

    pub fn pool_status(&self) -> PoolStatus {
        self.db.pool_status()
    }
}
