/// Creature repository tests
///
/// Tests cover:
/// - Creation with the initial owner and category links
/// - Listing order (newest first)
/// - Lookup by id and by normalized name
/// - Update and delete semantics on missing or stale rows
mod utils;

use creature_catalog::AppError;
use utils::factories::CreatureFactory;
use utils::helpers::{self, create_creature};
use utils::test_db::TestDb;

#[tokio::test]
async fn created_creature_is_reachable_through_its_links_and_list() {
    let test_db = TestDb::new();
    let catalog = test_db.catalog();
    let seed = helpers::seed(&catalog).await;

    let creature = create_creature(&catalog, &seed, "Pikachu").await;

    let owners = catalog
        .associations()
        .owners_of_creature(creature.id)
        .await
        .unwrap();
    assert_eq!(owners, vec![seed.owner.clone()]);

    let categories = catalog
        .associations()
        .categories_of_creature(creature.id)
        .await
        .unwrap();
    assert_eq!(categories, vec![seed.category.clone()]);

    let listed = catalog.creatures().list().await.unwrap();
    assert!(listed.contains(&creature));

    let of_owner = catalog
        .owners()
        .creatures_of_owner(seed.owner.id)
        .await
        .unwrap();
    assert_eq!(of_owner, vec![creature.clone()]);

    let of_category = catalog.categories().creatures(seed.category.id).await.unwrap();
    assert_eq!(of_category, vec![creature]);
}

#[tokio::test]
async fn list_returns_newest_first() {
    let test_db = TestDb::new();
    let catalog = test_db.catalog();
    let seed = helpers::seed(&catalog).await;

    let a = create_creature(&catalog, &seed, "Abra").await;
    let b = create_creature(&catalog, &seed, "Bulbasaur").await;
    let c = create_creature(&catalog, &seed, "Charmander").await;

    let names: Vec<String> = catalog
        .creatures()
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|creature| creature.name)
        .collect();
    assert_eq!(names, vec![c.name, b.name, a.name]);
}

#[tokio::test]
async fn normalized_name_collision_is_a_conflict() {
    let test_db = TestDb::new();
    let catalog = test_db.catalog();
    let seed = helpers::seed(&catalog).await;

    create_creature(&catalog, &seed, "Pika ").await;

    let err = catalog
        .creatures()
        .create(
            seed.owner.id,
            seed.category.id,
            CreatureFactory::new().with_name("PIKA").build(),
        )
        .await
        .unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(err.status_code(), 422);

    // Nothing from the rejected create was written, links included.
    assert_eq!(catalog.creatures().list().await.unwrap().len(), 1);
    assert_eq!(
        catalog
            .owners()
            .creatures_of_owner(seed.owner.id)
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn get_by_name_ignores_case_and_surrounding_whitespace() {
    let test_db = TestDb::new();
    let catalog = test_db.catalog();
    let seed = helpers::seed(&catalog).await;

    let creature = create_creature(&catalog, &seed, "Eevee").await;

    let found = catalog.creatures().get_by_name("  eEVEE ").await.unwrap();
    assert_eq!(found, creature);

    let err = catalog.creatures().get_by_name("Vaporeon").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn get_by_id_of_unknown_creature_is_not_found() {
    let test_db = TestDb::new();
    let catalog = test_db.catalog();

    let err = catalog.creatures().get_by_id(42).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert!(!catalog.creatures().exists(42).await.unwrap());
}

#[tokio::test]
async fn delete_then_exists_is_false() {
    let test_db = TestDb::new();
    let catalog = test_db.catalog();
    let seed = helpers::seed(&catalog).await;

    let creature = create_creature(&catalog, &seed, "Mew").await;
    assert!(catalog.creatures().exists(creature.id).await.unwrap());

    catalog.creatures().delete(&creature).await.unwrap();

    assert!(!catalog.creatures().exists(creature.id).await.unwrap());
}

#[tokio::test]
async fn deleting_an_already_deleted_creature_is_a_storage_failure() {
    let test_db = TestDb::new();
    let catalog = test_db.catalog();
    let seed = helpers::seed(&catalog).await;

    let creature = create_creature(&catalog, &seed, "Ditto").await;
    catalog.creatures().delete(&creature).await.unwrap();

    let err = catalog.creatures().delete(&creature).await.unwrap_err();
    assert!(err.is_storage_failure());
}

#[tokio::test]
async fn update_replaces_the_full_record() {
    let test_db = TestDb::new();
    let catalog = test_db.catalog();
    let seed = helpers::seed(&catalog).await;

    let mut creature = create_creature(&catalog, &seed, "Pichu").await;
    creature.name = "Raichu".to_string();
    creature.birth_date = chrono::NaiveDate::from_ymd_opt(1999, 11, 21).unwrap();

    catalog.creatures().update(&creature).await.unwrap();

    let stored = catalog.creatures().get_by_id(creature.id).await.unwrap();
    assert_eq!(stored, creature);
}

#[tokio::test]
async fn update_of_unknown_id_is_not_found_and_writes_nothing() {
    let test_db = TestDb::new();
    let catalog = test_db.catalog();
    let seed = helpers::seed(&catalog).await;

    let mut ghost = create_creature(&catalog, &seed, "Gastly").await;
    ghost.id += 100;
    ghost.name = "Haunter".to_string();

    let err = catalog.creatures().update(&ghost).await.unwrap_err();
    assert!(err.is_not_found());

    let names: Vec<String> = catalog
        .creatures()
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Gastly".to_string()]);
}

#[tokio::test]
async fn unresolved_owner_and_category_still_create_the_creature() {
    let test_db = TestDb::new();
    let catalog = test_db.catalog();

    let creature = catalog
        .creatures()
        .create(404, 405, CreatureFactory::new().with_name("Missingno").build())
        .await
        .unwrap();

    assert!(catalog.creatures().exists(creature.id).await.unwrap());
    assert!(catalog
        .associations()
        .owners_of_creature(creature.id)
        .await
        .unwrap()
        .is_empty());
    assert!(catalog
        .associations()
        .categories_of_creature(creature.id)
        .await
        .unwrap()
        .is_empty());
}
