//! Static monster table shared by every session.

use crate::types::MonsterKind;

pub struct MonsterTemplate {
    pub kind: MonsterKind,
    pub name: &'static str,
    pub icon: &'static str,
    pub base_hp: i32,
    pub base_attack: i32,
    pub xp_reward: u32,
    /// Shallowest depth the template may spawn on.
    pub unlock_depth: u32,
}

pub const MONSTER_TEMPLATES: [MonsterTemplate; 3] = [
    MonsterTemplate {
        kind: MonsterKind::Bat,
        name: "Bat",
        icon: "🦇",
        base_hp: 15,
        base_attack: 3,
        xp_reward: 5,
        unlock_depth: 1,
    },
    MonsterTemplate {
        kind: MonsterKind::Ghost,
        name: "Ghost",
        icon: "👻",
        base_hp: 30,
        base_attack: 8,
        xp_reward: 12,
        unlock_depth: 3,
    },
    MonsterTemplate {
        kind: MonsterKind::Ogre,
        name: "Ogre",
        icon: "👹",
        base_hp: 60,
        base_attack: 15,
        xp_reward: 25,
        unlock_depth: 6,
    },
];

pub fn template_for(kind: MonsterKind) -> &'static MonsterTemplate {
    match kind {
        MonsterKind::Bat => &MONSTER_TEMPLATES[0],
        MonsterKind::Ghost => &MONSTER_TEMPLATES[1],
        MonsterKind::Ogre => &MONSTER_TEMPLATES[2],
    }
}

/// Templates unlocked at `depth`, in table order.
pub fn eligible_templates(depth: u32) -> Vec<&'static MonsterTemplate> {
    MONSTER_TEMPLATES.iter().filter(|template| template.unlock_depth <= depth).collect()
}
