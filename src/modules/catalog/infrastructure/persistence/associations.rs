use std::sync::Arc;

use diesel::prelude::*;

use super::mapper::into_entities;
use crate::modules::catalog::domain::entities::{
    Category, Country, Creature, NewCreature, NewOwner, NewReview, Owner, Review,
};
use crate::modules::catalog::infrastructure::models::{
    CategoryModel, CountryModel, CreatureCategoryModel, CreatureModel, CreatureOwnerModel,
    NewCreatureModel, OwnerModel, OwnerRecord, ReviewModel, ReviewRecord,
};
use crate::schema::{
    categories, countries, creature_categories, creature_owners, creatures, owners, reviewers,
    reviews,
};
use crate::shared::errors::AppResult;
use crate::log_debug;
use crate::shared::infrastructure::{Database, UnitOfWork};
use crate::shared::utils::LogContext;

/// Creates and resolves the links between catalog entities.
///
/// Referenced ids are resolved permissively: an id that does not resolve
/// becomes an absent (`NULL`) reference, it is not rejected. The link
/// operations stage their rows on the caller's [`UnitOfWork`], so the entity
/// and its links commit or roll back together.
pub struct AssociationManager {
    db: Arc<Database>,
}

impl AssociationManager {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    // -------------------------------------------------------------------------
    // Write side
    // -------------------------------------------------------------------------

    /// Stages the creature with exactly one owner link and one category link.
    pub fn link_creature_to_owner_and_category(
        uow: &mut UnitOfWork,
        owner_id: i32,
        category_id: i32,
        creature: &NewCreature,
    ) -> AppResult<Creature> {
        let owner = uow.read(|conn| {
            owners::table
                .find(owner_id)
                .select(owners::id)
                .first::<i32>(conn)
                .optional()
        })?;
        if owner.is_none() {
            LogContext::absent_reference("Owner", owner_id, &creature.name);
        }

        let category = uow.read(|conn| {
            categories::table
                .find(category_id)
                .select(categories::id)
                .first::<i32>(conn)
                .optional()
        })?;
        if category.is_none() {
            LogContext::absent_reference("Category", category_id, &creature.name);
        }

        let model: CreatureModel = uow.insert(|conn| {
            diesel::insert_into(creatures::table)
                .values(&NewCreatureModel {
                    name: &creature.name,
                    birth_date: creature.birth_date,
                })
                .get_result(conn)
        })?;

        uow.execute(|conn| {
            diesel::insert_into(creature_owners::table)
                .values(&CreatureOwnerModel {
                    creature_id: model.id,
                    owner_id: owner,
                })
                .execute(conn)
        })?;

        uow.execute(|conn| {
            diesel::insert_into(creature_categories::table)
                .values(&CreatureCategoryModel {
                    creature_id: model.id,
                    category_id: category,
                })
                .execute(conn)
        })?;

        log_debug!(
            "Staged creature '{}' (ID: {}) with owner {:?} and category {:?}",
            model.name,
            model.id,
            owner,
            category
        );
        Ok(model.into())
    }

    pub fn link_review_to_reviewer_and_creature(
        uow: &mut UnitOfWork,
        reviewer_id: i32,
        creature_id: i32,
        review: &NewReview,
    ) -> AppResult<Review> {
        let reviewer = uow.read(|conn| {
            reviewers::table
                .find(reviewer_id)
                .select(reviewers::id)
                .first::<i32>(conn)
                .optional()
        })?;
        let creature = uow.read(|conn| {
            creatures::table
                .find(creature_id)
                .select(creatures::id)
                .first::<i32>(conn)
                .optional()
        })?;

        if reviewer.is_none() {
            LogContext::absent_reference("Reviewer", reviewer_id, &review.title);
        }
        if creature.is_none() {
            LogContext::absent_reference("Creature", creature_id, &review.title);
        }

        let model: ReviewModel = uow.insert(|conn| {
            diesel::insert_into(reviews::table)
                .values(&ReviewRecord {
                    title: &review.title,
                    text: &review.text,
                    rating: review.rating,
                    creature_id: creature,
                    reviewer_id: reviewer,
                })
                .get_result(conn)
        })?;

        Ok(model.into())
    }

    pub fn link_owner_to_country(
        uow: &mut UnitOfWork,
        country_id: i32,
        owner: &NewOwner,
    ) -> AppResult<Owner> {
        let country = uow.read(|conn| {
            countries::table
                .find(country_id)
                .select(countries::id)
                .first::<i32>(conn)
                .optional()
        })?;
        if country.is_none() {
            let referrer = format!("{} {}", owner.first_name, owner.last_name);
            LogContext::absent_reference("Country", country_id, &referrer);
        }

        let model: OwnerModel = uow.insert(|conn| {
            diesel::insert_into(owners::table)
                .values(&OwnerRecord {
                    first_name: &owner.first_name,
                    last_name: &owner.last_name,
                    gender: &owner.gender,
                    country_id: country,
                })
                .get_result(conn)
        })?;

        Ok(model.into())
    }

    // -------------------------------------------------------------------------
    // Query side
    // -------------------------------------------------------------------------

    pub async fn categories_of_creature(&self, creature_id: i32) -> AppResult<Vec<Category>> {
        let rows = self
            .db
            .read(move |conn| {
                creature_categories::table
                    .inner_join(categories::table)
                    .filter(creature_categories::creature_id.eq(creature_id))
                    .select(categories::all_columns)
                    .load::<CategoryModel>(conn)
            })
            .await?;
        Ok(into_entities(rows))
    }

    pub async fn creatures_of_category(&self, category_id: i32) -> AppResult<Vec<Creature>> {
        let rows = self
            .db
            .read(move |conn| {
                creature_categories::table
                    .inner_join(creatures::table)
                    .filter(creature_categories::category_id.eq(category_id))
                    .select(creatures::all_columns)
                    .load::<CreatureModel>(conn)
            })
            .await?;
        Ok(into_entities(rows))
    }

    pub async fn owners_of_creature(&self, creature_id: i32) -> AppResult<Vec<Owner>> {
        let rows = self
            .db
            .read(move |conn| {
                creature_owners::table
                    .inner_join(owners::table)
                    .filter(creature_owners::creature_id.eq(creature_id))
                    .select(owners::all_columns)
                    .load::<OwnerModel>(conn)
            })
            .await?;
        Ok(into_entities(rows))
    }

    pub async fn creatures_of_owner(&self, owner_id: i32) -> AppResult<Vec<Creature>> {
        let rows = self
            .db
            .read(move |conn| {
                creature_owners::table
                    .inner_join(creatures::table)
                    .filter(creature_owners::owner_id.eq(owner_id))
                    .select(creatures::all_columns)
                    .load::<CreatureModel>(conn)
            })
            .await?;
        Ok(into_entities(rows))
    }

    pub async fn owners_of_country(&self, country_id: i32) -> AppResult<Vec<Owner>> {
        let rows = self
            .db
            .read(move |conn| {
                owners::table
                    .filter(owners::country_id.eq(country_id))
                    .load::<OwnerModel>(conn)
            })
            .await?;
        Ok(into_entities(rows))
    }

    /// `None` when the owner does not exist or has no resolved country.
    pub async fn country_of_owner(&self, owner_id: i32) -> AppResult<Option<Country>> {
        let row = self
            .db
            .read(move |conn| {
                owners::table
                    .inner_join(countries::table)
                    .filter(owners::id.eq(owner_id))
                    .select(countries::all_columns)
                    .first::<CountryModel>(conn)
                    .optional()
            })
            .await?;
        Ok(row.map(Country::from))
    }

    pub async fn reviews_of_creature(&self, creature_id: i32) -> AppResult<Vec<Review>> {
        let rows = self
            .db
            .read(move |conn| {
                reviews::table
                    .filter(reviews::creature_id.eq(creature_id))
                    .load::<ReviewModel>(conn)
            })
            .await?;
        Ok(into_entities(rows))
    }

    pub async fn reviews_of_reviewer(&self, reviewer_id: i32) -> AppResult<Vec<Review>> {
        let rows = self
            .db
            .read(move |conn| {
                reviews::table
                    .filter(reviews::reviewer_id.eq(reviewer_id))
                    .load::<ReviewModel>(conn)
            })
            .await?;
        Ok(into_entities(rows))
    }
}
