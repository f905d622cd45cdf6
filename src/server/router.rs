use axum::{routing::post, Router};

use crate::server::{
    controller::{
        auth::{login, register},
        resource::routes,
    },
    kind::{
        Abilities, Campaigns, Disorders, Events, ExpansionTypes, FightingArts, MilestoneTypes,
        Milestones, Monsters, Players, ProficiencyLevels, ResourceTypes, Resources, Sessions,
        SettlementEvents, SettlementInventories, Settlements, Survivors, WeaponProficiencies,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .merge(routes::<Players>())
        .merge(routes::<Settlements>())
        .merge(routes::<Survivors>())
        .merge(routes::<Resources>())
        .merge(routes::<ResourceTypes>())
        .merge(routes::<Events>())
        .merge(routes::<SettlementEvents>())
        .merge(routes::<SettlementInventories>())
        .merge(routes::<Milestones>())
        .merge(routes::<MilestoneTypes>())
        .merge(routes::<Abilities>())
        .merge(routes::<Disorders>())
        .merge(routes::<FightingArts>())
        .merge(routes::<WeaponProficiencies>())
        .merge(routes::<ProficiencyLevels>())
        .merge(routes::<Sessions>())
        .merge(routes::<Campaigns>())
        .merge(routes::<Monsters>())
        .merge(routes::<ExpansionTypes>())
}
