use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;

use super::associations::AssociationManager;
use super::mapper::into_entities;
use super::uniqueness::{KeyedEntity, UniquenessGuard};
use crate::log_info;
use crate::modules::catalog::domain::{
    entities::{NewReview, Review},
    repositories::ReviewRepository,
};
use crate::modules::catalog::infrastructure::models::{ReviewModel, ReviewRecord};
use crate::schema::reviews;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{Database, UnitOfWork};

pub struct ReviewRepositoryImpl {
    db: Arc<Database>,
    associations: Arc<AssociationManager>,
}

impl ReviewRepositoryImpl {
    pub fn new(db: Arc<Database>, associations: Arc<AssociationManager>) -> Self {
        Self { db, associations }
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryImpl {
    async fn list(&self) -> AppResult<Vec<Review>> {
        let rows = self
            .db
            .read(|conn| reviews::table.load::<ReviewModel>(conn))
            .await?;
        Ok(into_entities(rows))
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Review> {
        let row = self
            .db
            .read(move |conn| reviews::table.find(id).first::<ReviewModel>(conn).optional())
            .await?;
        row.map(Review::from)
            .ok_or_else(|| AppError::NotFound(format!("Review with ID {} not found", id)))
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        self.db
            .read(move |conn| {
                diesel::select(diesel::dsl::exists(reviews::table.find(id))).get_result(conn)
            })
            .await
    }

    async fn reviews_of_creature(&self, creature_id: i32) -> AppResult<Vec<Review>> {
        self.associations.reviews_of_creature(creature_id).await
    }

    async fn create(
        &self,
        reviewer_id: i32,
        creature_id: i32,
        review: NewReview,
    ) -> AppResult<Review> {
        let created = UnitOfWork::run(&self.db, move |uow| {
            UniquenessGuard::ensure_unique(uow, KeyedEntity::Review, &review.natural_key())?;
            AssociationManager::link_review_to_reviewer_and_creature(
                uow,
                reviewer_id,
                creature_id,
                &review,
            )
        })
        .await?;

        log_info!("Created review '{}' (ID: {})", created.title, created.id);
        Ok(created)
    }

    async fn update(&self, review: &Review) -> AppResult<()> {
        let review = review.clone();

        UnitOfWork::run(&self.db, move |uow| {
            let exists = uow.read(|conn| {
                diesel::select(diesel::dsl::exists(reviews::table.find(review.id)))
                    .get_result::<bool>(conn)
            })?;
            if !exists {
                return Err(AppError::NotFound(format!(
                    "Review with ID {} not found",
                    review.id
                )));
            }

            uow.execute(|conn| {
                diesel::update(reviews::table.find(review.id))
                    .set(&ReviewRecord::from(&review))
                    .execute(conn)
            })?;
            Ok(())
        })
        .await
    }

    async fn delete(&self, review: &Review) -> AppResult<()> {
        let id = review.id;

        UnitOfWork::run(&self.db, move |uow| {
            uow.execute(|conn| diesel::delete(reviews::table.find(id)).execute(conn))?;
            Ok(())
        })
        .await?;

        log_info!("Deleted review '{}' (ID: {})", review.title, id);
        Ok(())
    }
}
