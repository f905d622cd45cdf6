use super::*;
use crate::{
    model::{
        campaign::{
            MilestonePayload, ProficiencyLevelPayload, SessionPayload,
            SettlementInventoryPayload,
        },
        catalog::{
            CampaignPayload, CardPayload, DisorderPayload, MilestoneTypePayload, NamedPayload,
            WeaponProficiencyPayload,
        },
        reference::{MilestoneTypeDto, PlayerRefDto},
    },
    server::kind::{
        Abilities, Campaigns, Disorders, ExpansionTypes, FightingArts, MilestoneTypes,
        Milestones, ProficiencyLevels, ResourceTypes, Sessions, SettlementInventories,
        WeaponProficiencies,
    },
};

fn player_ref(player: &entity::player::Model, username: &str) -> PlayerRefDto {
    PlayerRefDto {
        id: player.id,
        username: username.to_string(),
    }
}

/// Tests a session renders its host and de-duplicated players, and update replaces them.
///
/// Expected: players `[a, b]` after create with `[a, b, a]`, `[b]` after update, then gone
#[tokio::test]
async fn session_players() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, host) = factory::player::PlayerFactory::new(db)
        .username("host")
        .build()
        .await?;
    let (_, a) = factory::player::PlayerFactory::new(db)
        .username("antelope")
        .build()
        .await?;
    let (_, b) = factory::player::PlayerFactory::new(db)
        .username("butcher")
        .build()
        .await?;
    let settlement = factory::create_settlement(db, host.id).await?;

    let service = ResourceService::<Sessions>::new(db);
    let created = service
        .create(SessionPayload {
            host: host.id,
            settlement: settlement.id,
            players: vec![a.id, b.id, a.id],
        })
        .await?;

    assert_eq!(created.host, player_ref(&host, "host"));
    assert_eq!(created.settlement, settlement.id);
    let mut players = created.players.clone();
    players.sort_by_key(|p| p.id);
    assert_eq!(
        players,
        vec![player_ref(&a, "antelope"), player_ref(&b, "butcher")]
    );

    let fetched = service.get(created.id).await?.unwrap();
    assert_eq!(fetched.players.len(), 2);

    assert!(
        service
            .update(
                created.id,
                SessionPayload {
                    host: host.id,
                    settlement: settlement.id,
                    players: vec![b.id],
                },
            )
            .await?
    );
    let fetched = service.get(created.id).await?.unwrap();
    assert_eq!(fetched.players, vec![player_ref(&b, "butcher")]);

    assert!(service.delete(created.id).await?);
    assert!(service.get(created.id).await?.is_none());

    Ok(())
}

/// Tests a milestone renders its type and an update without `achieved` resets it.
///
/// Expected: achieved true after create, false after a full replace omitting it
#[tokio::test]
async fn milestone_full_replace() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, settlement) = factory::helpers::create_settlement_with_game_master(db).await?;
    let first_type = factory::create_milestone_type(db).await?;
    let second_type = factory::create_milestone_type(db).await?;

    let service = ResourceService::<Milestones>::new(db);
    let created = service
        .create(MilestonePayload {
            settlement: settlement.id,
            milestone_type: first_type.id,
            achieved: true,
        })
        .await?;

    assert_eq!(
        created.milestone_type,
        MilestoneTypeDto {
            id: first_type.id,
            label: first_type.label.clone(),
        }
    );
    assert!(created.achieved);

    let payload: MilestonePayload = serde_json::from_value(serde_json::json!({
        "settlement": settlement.id,
        "milestone_type": second_type.id,
    }))
    .unwrap();
    assert!(service.update(created.id, payload).await?);

    let fetched = service.get(created.id).await?.unwrap();
    assert_eq!(fetched.milestone_type.id, second_type.id);
    assert!(!fetched.achieved);

    assert!(service.delete(created.id).await?);
    assert!(service.get(created.id).await?.is_none());

    Ok(())
}

/// Tests an inventory entry nests the resource together with its type.
///
/// Expected: `resource` = `{id, name, type: {id, name}}`, amount updated, then gone
#[tokio::test]
async fn settlement_inventory_nests_resource() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, settlement) = factory::helpers::create_settlement_with_game_master(db).await?;
    let hide = factory::resource_type::ResourceTypeFactory::new(db)
        .name("Hide")
        .build()
        .await?;
    let resource = factory::resource::ResourceFactory::new(db, hide.id)
        .name("Lion Hide")
        .build()
        .await?;

    let service = ResourceService::<SettlementInventories>::new(db);
    let created = service
        .create(SettlementInventoryPayload {
            settlement: settlement.id,
            resource: resource.id,
            amount: 3,
        })
        .await?;

    assert_eq!(created.settlement, settlement.id);
    assert_eq!(created.resource.id, resource.id);
    assert_eq!(created.resource.name, "Lion Hide");
    assert_eq!(
        created.resource.resource_type,
        NamedDto {
            id: hide.id,
            name: "Hide".to_string()
        }
    );
    assert_eq!(created.amount, 3);

    assert!(
        service
            .update(
                created.id,
                SettlementInventoryPayload {
                    settlement: settlement.id,
                    resource: resource.id,
                    amount: 7,
                },
            )
            .await?
    );
    assert_eq!(service.get(created.id).await?.unwrap().amount, 7);

    assert!(service.delete(created.id).await?);
    assert!(service.get(created.id).await?.is_none());

    Ok(())
}

/// Tests a proficiency level resolves its optional references and an update clears them.
///
/// Expected: weapon type and survivor nested after create, both null after update
#[tokio::test]
async fn proficiency_level_optional_references() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, player) = factory::create_player(db).await?;
    let survivor = factory::create_survivor(db, player.id).await?;
    let weapon = factory::create_weapon_proficiency(db).await?;

    let service = ResourceService::<ProficiencyLevels>::new(db);
    let created = service
        .create(ProficiencyLevelPayload {
            name: "Sword".to_string(),
            level: 2,
            weapon_type: Some(weapon.id),
            survivor: Some(survivor.id),
        })
        .await?;

    assert_eq!(
        created.weapon_type,
        Some(NamedDto {
            id: weapon.id,
            name: weapon.name.clone()
        })
    );
    assert_eq!(
        created.survivor,
        Some(NamedDto {
            id: survivor.id,
            name: survivor.name.clone()
        })
    );

    assert!(
        service
            .update(
                created.id,
                ProficiencyLevelPayload {
                    name: "Sword".to_string(),
                    level: 3,
                    weapon_type: None,
                    survivor: None,
                },
            )
            .await?
    );
    let fetched = service.get(created.id).await?.unwrap();
    assert_eq!(fetched.level, 3);
    assert!(fetched.weapon_type.is_none());
    assert!(fetched.survivor.is_none());

    assert!(service.delete(created.id).await?);
    assert!(service.get(created.id).await?.is_none());

    Ok(())
}

/// Tests the card kinds create, update and delete with a nested expansion.
///
/// Expected: each card renders its expansion, updates its text, then is gone
#[tokio::test]
async fn card_kinds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let gorm = factory::expansion_type::ExpansionTypeFactory::new(db)
        .name("Gorm")
        .build()
        .await?;
    let expansion = Some(NamedDto {
        id: gorm.id,
        name: "Gorm".to_string(),
    });

    let abilities = ResourceService::<Abilities>::new(db);
    let ability = abilities
        .create(CardPayload {
            name: "Ageless".to_string(),
            effect: "Never retires".to_string(),
            expansion: Some(gorm.id),
        })
        .await?;
    assert_eq!(ability.expansion, expansion);
    assert!(
        abilities
            .update(
                ability.id,
                CardPayload {
                    name: "Ageless".to_string(),
                    effect: "Hunts forever".to_string(),
                    expansion: None,
                },
            )
            .await?
    );
    let fetched = abilities.get(ability.id).await?.unwrap();
    assert_eq!(fetched.effect, "Hunts forever");
    assert!(fetched.expansion.is_none());
    assert!(abilities.delete(ability.id).await?);
    assert!(abilities.get(ability.id).await?.is_none());

    let arts = ResourceService::<FightingArts>::new(db);
    let art = arts
        .create(CardPayload {
            name: "Timeless Eye".to_string(),
            effect: "Always hit".to_string(),
            expansion: None,
        })
        .await?;
    assert_eq!(arts.get(art.id).await?.unwrap().name, "Timeless Eye");

    let disorders = ResourceService::<Disorders>::new(db);
    let disorder = disorders
        .create(DisorderPayload {
            name: "Hoarder".to_string(),
            flavor_text: "Mine".to_string(),
            effect: "Keeps everything".to_string(),
            expansion: Some(gorm.id),
        })
        .await?;
    let fetched = disorders.get(disorder.id).await?.unwrap();
    assert_eq!(fetched.flavor_text, "Mine");
    assert_eq!(fetched.expansion, expansion);

    let weapons = ResourceService::<WeaponProficiencies>::new(db);
    let weapon = weapons
        .create(WeaponProficiencyPayload {
            name: "Katar".to_string(),
            specialist_effect: "Combo".to_string(),
            master_effect: "Frenzy".to_string(),
            expansion: None,
        })
        .await?;
    let fetched = weapons.get(weapon.id).await?.unwrap();
    assert_eq!(fetched.specialist_effect, "Combo");
    assert_eq!(fetched.master_effect, "Frenzy");
    assert!(weapons.delete(weapon.id).await?);
    assert!(weapons.get(weapon.id).await?.is_none());

    Ok(())
}

/// Tests the lookup kinds and campaigns round-trip through create, update and delete.
///
/// Expected: renamed rows read back, deleted rows are gone
#[tokio::test]
async fn lookup_kinds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let expansions = ResourceService::<ExpansionTypes>::new(db);
    let expansion = expansions
        .create(NamedPayload {
            name: "Sunstalker".to_string(),
        })
        .await?;
    assert!(
        expansions
            .update(
                expansion.id,
                NamedPayload {
                    name: "Sunstalker Expansion".to_string(),
                },
            )
            .await?
    );
    assert_eq!(
        expansions.get(expansion.id).await?.unwrap().name,
        "Sunstalker Expansion"
    );

    let resource_types = ResourceService::<ResourceTypes>::new(db);
    let organ = resource_types
        .create(NamedPayload {
            name: "Organ".to_string(),
        })
        .await?;
    assert_eq!(resource_types.get(organ.id).await?.unwrap().name, "Organ");
    assert!(resource_types.delete(organ.id).await?);
    assert!(resource_types.get(organ.id).await?.is_none());

    let milestone_types = ResourceService::<MilestoneTypes>::new(db);
    let first_child = milestone_types
        .create(MilestoneTypePayload {
            label: "First child is born".to_string(),
        })
        .await?;
    assert_eq!(
        milestone_types.get(first_child.id).await?.unwrap().label,
        "First child is born"
    );

    let campaigns = ResourceService::<Campaigns>::new(db);
    let campaign = campaigns
        .create(CampaignPayload {
            name: "People of the Sun".to_string(),
            years: 25,
            expansion: Some(expansion.id),
        })
        .await?;
    assert_eq!(
        campaign.expansion,
        Some(NamedDto {
            id: expansion.id,
            name: "Sunstalker Expansion".to_string()
        })
    );
    assert!(
        campaigns
            .update(
                campaign.id,
                CampaignPayload {
                    name: "People of the Sun".to_string(),
                    years: 30,
                    expansion: None,
                },
            )
            .await?
    );
    let fetched = campaigns.get(campaign.id).await?.unwrap();
    assert_eq!(fetched.years, 30);
    assert!(fetched.expansion.is_none());
    assert!(campaigns.delete(campaign.id).await?);
    assert!(campaigns.get(campaign.id).await?.is_none());

    Ok(())
}
