/// Test helper functions for seeding related rows
use super::factories::{self, CreatureFactory, OwnerFactory, ReviewFactory};
use creature_catalog::{Catalog, Category, Country, Creature, Owner, Review, Reviewer};

/// The rows a creature needs before it can be created.
pub struct Seed {
    pub country: Country,
    pub owner: Owner,
    pub category: Category,
}

pub async fn seed(catalog: &Catalog) -> Seed {
    let country = catalog
        .countries()
        .create(factories::country("Japan"))
        .await
        .expect("Failed to create country");
    let owner = catalog
        .owners()
        .create(country.id, OwnerFactory::new().build())
        .await
        .expect("Failed to create owner");
    let category = catalog
        .categories()
        .create(factories::category("Electric"))
        .await
        .expect("Failed to create category");

    Seed {
        country,
        owner,
        category,
    }
}

pub async fn create_creature(catalog: &Catalog, seed: &Seed, name: &str) -> Creature {
    catalog
        .creatures()
        .create(
            seed.owner.id,
            seed.category.id,
            CreatureFactory::new().with_name(name).build(),
        )
        .await
        .expect("Failed to create creature")
}

pub async fn create_reviewer(catalog: &Catalog, first_name: &str, last_name: &str) -> Reviewer {
    catalog
        .reviewers()
        .create(factories::reviewer(first_name, last_name))
        .await
        .expect("Failed to create reviewer")
}

pub async fn review_creature(
    catalog: &Catalog,
    reviewer: &Reviewer,
    creature: &Creature,
    title: &str,
    rating: i32,
) -> Review {
    catalog
        .reviews()
        .create(
            reviewer.id,
            creature.id,
            ReviewFactory::new()
                .with_title(title)
                .with_rating(rating)
                .build(),
        )
        .await
        .expect("Failed to create review")
}
