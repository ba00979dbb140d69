use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;

use super::associations::AssociationManager;
use super::mapper::into_entities;
use super::uniqueness::{KeyedEntity, UniquenessGuard};
use crate::log_info;
use crate::modules::catalog::domain::{
    entities::{NewReviewer, Review, Reviewer},
    repositories::ReviewerRepository,
};
use crate::modules::catalog::infrastructure::models::{ReviewerModel, ReviewerRecord};
use crate::schema::reviewers;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{Database, UnitOfWork};

pub struct ReviewerRepositoryImpl {
    db: Arc<Database>,
    associations: Arc<AssociationManager>,
}

impl ReviewerRepositoryImpl {
    pub fn new(db: Arc<Database>, associations: Arc<AssociationManager>) -> Self {
        Self { db, associations }
    }
}

#[async_trait]
impl ReviewerRepository for ReviewerRepositoryImpl {
    async fn list(&self) -> AppResult<Vec<Reviewer>> {
        let rows = self
            .db
            .read(|conn| reviewers::table.load::<ReviewerModel>(conn))
            .await?;
        Ok(into_entities(rows))
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Reviewer> {
        let row = self
            .db
            .read(move |conn| {
                reviewers::table
                    .find(id)
                    .first::<ReviewerModel>(conn)
                    .optional()
            })
            .await?;
        row.map(Reviewer::from)
            .ok_or_else(|| AppError::NotFound(format!("Reviewer with ID {} not found", id)))
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        self.db
            .read(move |conn| {
                diesel::select(diesel::dsl::exists(reviewers::table.find(id))).get_result(conn)
            })
            .await
    }

    async fn reviews_of_reviewer(&self, reviewer_id: i32) -> AppResult<Vec<Review>> {
        self.associations.reviews_of_reviewer(reviewer_id).await
    }

    async fn create(&self, reviewer: NewReviewer) -> AppResult<Reviewer> {
        let created = UnitOfWork::run(&self.db, move |uow| {
            UniquenessGuard::ensure_unique(uow, KeyedEntity::Reviewer, &reviewer.natural_key())?;
            let row: ReviewerModel = uow.insert(|conn| {
                diesel::insert_into(reviewers::table)
                    .values(&ReviewerRecord {
                        first_name: &reviewer.first_name,
                        last_name: &reviewer.last_name,
                    })
                    .get_result(conn)
            })?;
            Ok(Reviewer::from(row))
        })
        .await?;

        log_info!(
            "Created reviewer '{} {}' (ID: {})",
            created.first_name,
            created.last_name,
            created.id
        );
        Ok(created)
    }

    async fn update(&self, reviewer: &Reviewer) -> AppResult<()> {
        let reviewer = reviewer.clone();

        UnitOfWork::run(&self.db, move |uow| {
            let exists = uow.read(|conn| {
                diesel::select(diesel::dsl::exists(reviewers::table.find(reviewer.id)))
                    .get_result::<bool>(conn)
            })?;
            if !exists {
                return Err(AppError::NotFound(format!(
                    "Reviewer with ID {} not found",
                    reviewer.id
                )));
            }

            uow.execute(|conn| {
                diesel::update(reviewers::table.find(reviewer.id))
                    .set(&ReviewerRecord {
                        first_name: &reviewer.first_name,
                        last_name: &reviewer.last_name,
                    })
                    .execute(conn)
            })?;
            Ok(())
        })
        .await
    }

    async fn delete(&self, reviewer: &Reviewer) -> AppResult<()> {
        let id = reviewer.id;

        UnitOfWork::run(&self.db, move |uow| {
            uow.execute(|conn| diesel::delete(reviewers::table.find(id)).execute(conn))?;
            Ok(())
        })
        .await?;

        log_info!("Deleted reviewer '{}' (ID: {})", reviewer.first_name, id);
        Ok(())
    }
}
