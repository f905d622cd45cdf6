use super::*;

/// Tests named references load as `{id, name}` and skip missing ids.
///
/// Expected: Ok with one entry for the existing expansion only
#[tokio::test]
async fn loads_named_references() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let expansion = factory::expansion_type::ExpansionTypeFactory::new(db)
        .name("Gorm")
        .build()
        .await?;

    let refs = entity::expansion_type::Entity::load(db, vec![expansion.id, 999]).await?;

    assert_eq!(refs.len(), 1);
    assert_eq!(refs[&expansion.id].name, "Gorm");

    Ok(())
}

/// Tests players render with their account's username.
///
/// Expected: Ok with `{id, username}` for the player
#[tokio::test]
async fn loads_player_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, player) = factory::player::PlayerFactory::new(db)
        .username("twilight")
        .build()
        .await?;

    let refs = entity::player::Entity::load(db, vec![player.id]).await?;

    assert_eq!(refs[&player.id].id, player.id);
    assert_eq!(refs[&player.id].username, "twilight");

    Ok(())
}

/// Tests resource references embed their resource type.
///
/// Expected: Ok with the resource's type nested as `{id: 2, name: "Bone"}`
#[tokio::test]
async fn loads_resource_with_nested_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::resource_type::ResourceTypeFactory::new(db)
        .id(2)
        .name("Bone")
        .build()
        .await?;
    let resource = factory::resource::ResourceFactory::new(db, 2)
        .name("Monster Bone")
        .build()
        .await?;

    let refs = entity::resource::Entity::load(db, vec![resource.id]).await?;
    let loaded = &refs[&resource.id];

    assert_eq!(loaded.name, "Monster Bone");
    assert_eq!(loaded.resource_type.id, 2);
    assert_eq!(loaded.resource_type.name, "Bone");

    Ok(())
}

/// Tests an empty id list does not query.
///
/// Expected: Ok with an empty map
#[tokio::test]
async fn empty_ids_load_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let refs = entity::monster::Entity::load(db, Vec::new()).await?;

    assert!(refs.is_empty());

    Ok(())
}

#[test]
fn unique_keeps_first_occurrence_order() {
    assert_eq!(unique(vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);
}
