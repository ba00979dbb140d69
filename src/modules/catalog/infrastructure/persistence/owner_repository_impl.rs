use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;

use super::associations::AssociationManager;
use super::mapper::into_entities;
use super::uniqueness::{KeyedEntity, UniquenessGuard};
use crate::modules::catalog::domain::{
    entities::{Creature, NewOwner, Owner},
    repositories::OwnerRepository,
};
use crate::modules::catalog::infrastructure::models::{OwnerModel, OwnerRecord};
use crate::schema::owners;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{Database, UnitOfWork};
use crate::{log_debug, log_info};

pub struct OwnerRepositoryImpl {
    db: Arc<Database>,
    associations: Arc<AssociationManager>,
}

impl OwnerRepositoryImpl {
    pub fn new(db: Arc<Database>, associations: Arc<AssociationManager>) -> Self {
        Self { db, associations }
    }
}

#[async_trait]
impl OwnerRepository for OwnerRepositoryImpl {
    async fn list(&self) -> AppResult<Vec<Owner>> {
        let rows = self
            .db
            .read(|conn| owners::table.load::<OwnerModel>(conn))
            .await?;
        Ok(into_entities(rows))
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Owner> {
        let row = self
            .db
            .read(move |conn| owners::table.find(id).first::<OwnerModel>(conn).optional())
            .await?;
        row.map(Owner::from)
            .ok_or_else(|| AppError::NotFound(format!("Owner with ID {} not found", id)))
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        self.db
            .read(move |conn| {
                diesel::select(diesel::dsl::exists(owners::table.find(id))).get_result(conn)
            })
            .await
    }

    async fn owners_of_creature(&self, creature_id: i32) -> AppResult<Vec<Owner>> {
        self.associations.owners_of_creature(creature_id).await
    }

    async fn creatures_of_owner(&self, owner_id: i32) -> AppResult<Vec<Creature>> {
        self.associations.creatures_of_owner(owner_id).await
    }

    async fn create(&self, country_id: i32, owner: NewOwner) -> AppResult<Owner> {
        log_debug!(
            "Repository creating owner: {} {} (country: {})",
            owner.first_name,
            owner.last_name,
            country_id
        );

        let created = UnitOfWork::run(&self.db, move |uow| {
            UniquenessGuard::ensure_unique(uow, KeyedEntity::Owner, &owner.natural_key())?;
            AssociationManager::link_owner_to_country(uow, country_id, &owner)
        })
        .await?;

        log_info!(
            "Created owner '{} {}' (ID: {})",
            created.first_name,
            created.last_name,
            created.id
        );
        Ok(created)
    }

    async fn update(&self, owner: &Owner) -> AppResult<()> {
        let owner = owner.clone();

        UnitOfWork::run(&self.db, move |uow| {
            let exists = uow.read(|conn| {
                diesel::select(diesel::dsl::exists(owners::table.find(owner.id)))
                    .get_result::<bool>(conn)
            })?;
            if !exists {
                return Err(AppError::NotFound(format!(
                    "Owner with ID {} not found",
                    owner.id
                )));
            }

            uow.execute(|conn| {
                diesel::update(owners::table.find(owner.id))
                    .set(&OwnerRecord::from(&owner))
                    .execute(conn)
            })?;
            Ok(())
        })
        .await
    }

    async fn delete(&self, owner: &Owner) -> AppResult<()> {
        let id = owner.id;

        UnitOfWork::run(&self.db, move |uow| {
            uow.execute(|conn| diesel::delete(owners::table.find(id)).execute(conn))?;
            Ok(())
        })
        .await?;

        log_info!("Deleted owner '{}' (ID: {})", owner.first_name, id);
        Ok(())
    }
}
