use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;

use super::associations::AssociationManager;
use super::mapper::into_entities;
use super::uniqueness::{KeyedEntity, UniquenessGuard};
use crate::log_info;
use crate::modules::catalog::domain::{
    entities::{Country, NewCountry, Owner},
    repositories::CountryRepository,
};
use crate::modules::catalog::infrastructure::models::{CountryModel, CountryRecord};
use crate::schema::countries;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{Database, UnitOfWork};

pub struct CountryRepositoryImpl {
    db: Arc<Database>,
    associations: Arc<AssociationManager>,
}

impl CountryRepositoryImpl {
    pub fn new(db: Arc<Database>, associations: Arc<AssociationManager>) -> Self {
        Self { db, associations }
    }
}

#[async_trait]
impl CountryRepository for CountryRepositoryImpl {
    async fn list(&self) -> AppResult<Vec<Country>> {
        let rows = self
            .db
            .read(|conn| countries::table.load::<CountryModel>(conn))
            .await?;
        Ok(into_entities(rows))
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Country> {
        let row = self
            .db
            .read(move |conn| {
                countries::table
                    .find(id)
                    .first::<CountryModel>(conn)
                    .optional()
            })
            .await?;
        row.map(Country::from)
            .ok_or_else(|| AppError::NotFound(format!("Country with ID {} not found", id)))
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        self.db
            .read(move |conn| {
                diesel::select(diesel::dsl::exists(countries::table.find(id))).get_result(conn)
            })
            .await
    }

    async fn country_of_owner(&self, owner_id: i32) -> AppResult<Option<Country>> {
        self.associations.country_of_owner(owner_id).await
    }

    async fn owners_of_country(&self, country_id: i32) -> AppResult<Vec<Owner>> {
        self.associations.owners_of_country(country_id).await
    }

    async fn create(&self, country: NewCountry) -> AppResult<Country> {
        let created = UnitOfWork::run(&self.db, move |uow| {
            UniquenessGuard::ensure_unique(uow, KeyedEntity::Country, &country.natural_key())?;
            let row: CountryModel = uow.insert(|conn| {
                diesel::insert_into(countries::table)
                    .values(&CountryRecord {
                        name: &country.name,
                    })
                    .get_result(conn)
            })?;
            Ok(Country::from(row))
        })
        .await?;

        log_info!("Created country '{}' (ID: {})", created.name, created.id);
        Ok(created)
    }

    async fn update(&self, country: &Country) -> AppResult<()> {
        let country = country.clone();

        UnitOfWork::run(&self.db, move |uow| {
            let exists = uow.read(|conn| {
                diesel::select(diesel::dsl::exists(countries::table.find(country.id)))
                    .get_result::<bool>(conn)
            })?;
            if !exists {
                return Err(AppError::NotFound(format!(
                    "Country with ID {} not found",
                    country.id
                )));
            }

            uow.execute(|conn| {
                diesel::update(countries::table.find(country.id))
                    .set(&CountryRecord {
                        name: &country.name,
                    })
                    .execute(conn)
            })?;
            Ok(())
        })
        .await
    }

    async fn delete(&self, country: &Country) -> AppResult<()> {
        let id = country.id;

        UnitOfWork::run(&self.db, move |uow| {
            uow.execute(|conn| diesel::delete(countries::table.find(id)).execute(conn))?;
            Ok(())
        })
        .await?;

        log_info!("Deleted country '{}' (ID: {})", country.name, id);
        Ok(())
    }
}
