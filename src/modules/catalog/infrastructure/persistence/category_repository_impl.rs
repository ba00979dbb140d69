use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;

use super::associations::AssociationManager;
use super::mapper::into_entities;
use super::uniqueness::{KeyedEntity, UniquenessGuard};
use crate::log_info;
use crate::modules::catalog::domain::{
    entities::{Category, Creature, NewCategory},
    repositories::CategoryRepository,
};
use crate::modules::catalog::infrastructure::models::{CategoryModel, CategoryRecord};
use crate::schema::categories;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{Database, UnitOfWork};
use crate::shared::utils::NaturalKey;

pub struct CategoryRepositoryImpl {
    db: Arc<Database>,
    associations: Arc<AssociationManager>,
}

impl CategoryRepositoryImpl {
    pub fn new(db: Arc<Database>, associations: Arc<AssociationManager>) -> Self {
        Self { db, associations }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryImpl {
    async fn list(&self) -> AppResult<Vec<Category>> {
        let rows = self
            .db
            .read(|conn| categories::table.load::<CategoryModel>(conn))
            .await?;
        Ok(into_entities(rows))
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Category> {
        let row = self
            .db
            .read(move |conn| {
                categories::table
                    .find(id)
                    .first::<CategoryModel>(conn)
                    .optional()
            })
            .await?;
        row.map(Category::from)
            .ok_or_else(|| AppError::NotFound(format!("Category with ID {} not found", id)))
    }

    async fn get_by_name(&self, name: &str) -> AppResult<Category> {
        let key = NaturalKey::single(name);
        let rows = self
            .db
            .read(|conn| categories::table.load::<CategoryModel>(conn))
            .await?;

        rows.into_iter()
            .find(|row| NaturalKey::single(&row.name) == key)
            .map(Category::from)
            .ok_or_else(|| AppError::NotFound(format!("Category named '{}' not found", name)))
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        self.db
            .read(move |conn| {
                diesel::select(diesel::dsl::exists(categories::table.find(id))).get_result(conn)
            })
            .await
    }

    async fn creatures(&self, category_id: i32) -> AppResult<Vec<Creature>> {
        self.associations.creatures_of_category(category_id).await
    }

    async fn create(&self, category: NewCategory) -> AppResult<Category> {
        let created = UnitOfWork::run(&self.db, move |uow| {
            UniquenessGuard::ensure_unique(uow, KeyedEntity::Category, &category.natural_key())?;
            let row: CategoryModel = uow.insert(|conn| {
                diesel::insert_into(categories::table)
                    .values(&CategoryRecord {
                        name: &category.name,
                    })
                    .get_result(conn)
            })?;
            Ok(Category::from(row))
        })
        .await?;

        log_info!("Created category '{}' (ID: {})", created.name, created.id);
        Ok(created)
    }

    async fn update(&self, category: &Category) -> AppResult<()> {
        let category = category.clone();

        UnitOfWork::run(&self.db, move |uow| {
            let exists = uow.read(|conn| {
                diesel::select(diesel::dsl::exists(categories::table.find(category.id)))
                    .get_result::<bool>(conn)
            })?;
            if !exists {
                return Err(AppError::NotFound(format!(
                    "Category with ID {} not found",
                    category.id
                )));
            }

            uow.execute(|conn| {
                diesel::update(categories::table.find(category.id))
                    .set(&CategoryRecord {
                        name: &category.name,
                    })
                    .execute(conn)
            })?;
            Ok(())
        })
        .await
    }

    async fn delete(&self, category: &Category) -> AppResult<()> {
        let id = category.id;

        UnitOfWork::run(&self.db, move |uow| {
            uow.execute(|conn| diesel::delete(categories::table.find(id)).execute(conn))?;
            Ok(())
        })
        .await?;

        log_info!("Deleted category '{}' (ID: {})", category.name, id);
        Ok(())
    }
}
