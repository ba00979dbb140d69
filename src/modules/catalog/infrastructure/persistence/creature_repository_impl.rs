use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use rust_decimal::Decimal;

use super::associations::AssociationManager;
use super::mapper::into_entities;
use super::uniqueness::{KeyedEntity, UniquenessGuard};
use crate::modules::catalog::domain::{
    entities::{Creature, NewCreature},
    repositories::CreatureRepository,
    services::RatingAggregator,
};
use crate::modules::catalog::infrastructure::models::{CreatureChangeset, CreatureModel};
use crate::schema::creatures;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{Database, UnitOfWork};
use crate::shared::utils::NaturalKey;
use crate::{log_debug, log_info};

pub struct CreatureRepositoryImpl {
    db: Arc<Database>,
    ratings: Arc<RatingAggregator>,
}

impl CreatureRepositoryImpl {
    pub fn new(db: Arc<Database>, ratings: Arc<RatingAggregator>) -> Self {
        Self { db, ratings }
    }

    fn not_found(id: i32) -> AppError {
        AppError::NotFound(format!("Creature with ID {} not found", id))
    }
}

#[async_trait]
impl CreatureRepository for CreatureRepositoryImpl {
    async fn list(&self) -> AppResult<Vec<Creature>> {
        let rows = self
            .db
            .read(|conn| {
                creatures::table
                    .order(creatures::id.desc())
                    .load::<CreatureModel>(conn)
            })
            .await?;
        Ok(into_entities(rows))
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Creature> {
        let row = self
            .db
            .read(move |conn| {
                creatures::table
                    .find(id)
                    .first::<CreatureModel>(conn)
                    .optional()
            })
            .await?;
        row.map(Creature::from).ok_or_else(|| Self::not_found(id))
    }

    async fn get_by_name(&self, name: &str) -> AppResult<Creature> {
        let key = NaturalKey::single(name);
        let rows = self
            .db
            .read(|conn| creatures::table.load::<CreatureModel>(conn))
            .await?;

        rows.into_iter()
            .find(|row| NaturalKey::single(&row.name) == key)
            .map(Creature::from)
            .ok_or_else(|| AppError::NotFound(format!("Creature named '{}' not found", name)))
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        self.db
            .read(move |conn| {
                diesel::select(diesel::dsl::exists(creatures::table.find(id))).get_result(conn)
            })
            .await
    }

    async fn rating(&self, id: i32) -> AppResult<Decimal> {
        self.ratings.average_rating(id).await
    }

    async fn create(
        &self,
        owner_id: i32,
        category_id: i32,
        creature: NewCreature,
    ) -> AppResult<Creature> {
        log_debug!(
            "Repository creating creature: {} (owner: {}, category: {})",
            creature.name,
            owner_id,
            category_id
        );

        let created = UnitOfWork::run(&self.db, move |uow| {
            UniquenessGuard::ensure_unique(uow, KeyedEntity::Creature, &creature.natural_key())?;
            AssociationManager::link_creature_to_owner_and_category(
                uow,
                owner_id,
                category_id,
                &creature,
            )
        })
        .await?;

        log_info!("Created creature '{}' (ID: {})", created.name, created.id);
        Ok(created)
    }

    async fn update(&self, creature: &Creature) -> AppResult<()> {
        let creature = creature.clone();
        let id = creature.id;

        UnitOfWork::run(&self.db, move |uow| {
            let exists = uow.read(|conn| {
                diesel::select(diesel::dsl::exists(creatures::table.find(creature.id)))
                    .get_result::<bool>(conn)
            })?;
            if !exists {
                return Err(Self::not_found(creature.id));
            }

            uow.execute(|conn| {
                diesel::update(creatures::table.find(creature.id))
                    .set(&CreatureChangeset::from(&creature))
                    .execute(conn)
            })?;
            Ok(())
        })
        .await?;

        log_info!("Updated creature {}", id);
        Ok(())
    }

    async fn delete(&self, creature: &Creature) -> AppResult<()> {
        let id = creature.id;

        UnitOfWork::run(&self.db, move |uow| {
            uow.execute(|conn| diesel::delete(creatures::table.find(id)).execute(conn))?;
            Ok(())
        })
        .await?;

        log_info!("Deleted creature '{}' (ID: {})", creature.name, id);
        Ok(())
    }
}
