use crate::modules::catalog::domain::entities::{
    Category, Country, Creature, Owner, Review, Reviewer,
};
use crate::modules::catalog::infrastructure::models::{
    CategoryModel, CountryModel, CreatureChangeset, CreatureModel, OwnerModel, OwnerRecord,
    ReviewModel, ReviewRecord, ReviewerModel,
};

impl From<CreatureModel> for Creature {
    fn from(model: CreatureModel) -> Self {
        Creature {
            id: model.id,
            name: model.name,
            birth_date: model.birth_date,
        }
    }
}

impl<'a> From<&'a Creature> for CreatureChangeset<'a> {
    fn from(entity: &'a Creature) -> Self {
        CreatureChangeset {
            name: &entity.name,
            birth_date: entity.birth_date,
        }
    }
}

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<CountryModel> for Country {
    fn from(model: CountryModel) -> Self {
        Country {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<OwnerModel> for Owner {
    fn from(model: OwnerModel) -> Self {
        Owner {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            gender: model.gender,
            country_id: model.country_id,
        }
    }
}

impl<'a> From<&'a Owner> for OwnerRecord<'a> {
    fn from(entity: &'a Owner) -> Self {
        OwnerRecord {
            first_name: &entity.first_name,
            last_name: &entity.last_name,
            gender: &entity.gender,
            country_id: entity.country_id,
        }
    }
}

impl From<ReviewerModel> for Reviewer {
    fn from(model: ReviewerModel) -> Self {
        Reviewer {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
        }
    }
}

impl From<ReviewModel> for Review {
    fn from(model: ReviewModel) -> Self {
        Review {
            id: model.id,
            title: model.title,
            text: model.text,
            rating: model.rating,
            creature_id: model.creature_id,
            reviewer_id: model.reviewer_id,
        }
    }
}

impl<'a> From<&'a Review> for ReviewRecord<'a> {
    fn from(entity: &'a Review) -> Self {
        ReviewRecord {
            title: &entity.title,
            text: &entity.text,
            rating: entity.rating,
            creature_id: entity.creature_id,
            reviewer_id: entity.reviewer_id,
        }
    }
}

/// Convert a batch of rows into domain entities.
pub fn into_entities<M, E: From<M>>(models: Vec<M>) -> Vec<E> {
    models.into_iter().map(E::from).collect()
}
