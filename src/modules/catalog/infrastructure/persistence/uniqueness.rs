use diesel::prelude::*;

use crate::log_debug;
use crate::schema::{categories, countries, creatures, owners, reviewers, reviews};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::UnitOfWork;
use crate::shared::utils::NaturalKey;

/// Entity types that carry a natural key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyedEntity {
    Creature,
    Category,
    Country,
    Owner,
    Reviewer,
    Review,
}

impl KeyedEntity {
    pub fn label(&self) -> &'static str {
        match self {
            KeyedEntity::Creature => "Creature",
            KeyedEntity::Category => "Category",
            KeyedEntity::Country => "Country",
            KeyedEntity::Owner => "Owner",
            KeyedEntity::Reviewer => "Reviewer",
            KeyedEntity::Review => "Review",
        }
    }
}

/// Create-time duplicate check on normalized natural keys.
///
/// Stored keys are normalized on the Rust side before comparison, so the
/// trim + case-fold rule is the same one applied to the incoming key
/// (SQLite's `UPPER` only folds ASCII).
pub struct UniquenessGuard;

impl UniquenessGuard {
    pub fn exists_by_natural_key(
        uow: &mut UnitOfWork,
        entity: KeyedEntity,
        key: &NaturalKey,
    ) -> AppResult<bool> {
        let stored: Vec<NaturalKey> = match entity {
            KeyedEntity::Creature => Self::single_keys(
                uow.read(|conn| creatures::table.select(creatures::name).load::<String>(conn))?,
            ),
            KeyedEntity::Category => Self::single_keys(
                uow.read(|conn| categories::table.select(categories::name).load::<String>(conn))?,
            ),
            KeyedEntity::Country => Self::single_keys(
                uow.read(|conn| countries::table.select(countries::name).load::<String>(conn))?,
            ),
            KeyedEntity::Review => Self::single_keys(
                uow.read(|conn| reviews::table.select(reviews::title).load::<String>(conn))?,
            ),
            KeyedEntity::Owner => Self::pair_keys(uow.read(|conn| {
                owners::table
                    .select((owners::first_name, owners::last_name))
                    .load::<(String, String)>(conn)
            })?),
            KeyedEntity::Reviewer => Self::pair_keys(uow.read(|conn| {
                reviewers::table
                    .select((reviewers::first_name, reviewers::last_name))
                    .load::<(String, String)>(conn)
            })?),
        };

        Ok(stored.iter().any(|existing| existing == key))
    }

    /// Fails with `Conflict` when `key` is already taken.
    pub fn ensure_unique(
        uow: &mut UnitOfWork,
        entity: KeyedEntity,
        key: &NaturalKey,
    ) -> AppResult<()> {
        if Self::exists_by_natural_key(uow, entity, key)? {
            log_debug!("{} '{}' rejected as duplicate", entity.label(), key);
            return Err(AppError::Conflict(format!(
                "{} already exists!",
                entity.label()
            )));
        }
        Ok(())
    }

    fn single_keys(values: Vec<String>) -> Vec<NaturalKey> {
        values.iter().map(|v| NaturalKey::single(v)).collect()
    }

    fn pair_keys(values: Vec<(String, String)>) -> Vec<NaturalKey> {
        values
            .iter()
            .map(|(first, last)| NaturalKey::pair(first, last))
            .collect()
    }
}
