//! Persistent player progression.
//!
//! Experience, remaining lives and purchased upgrade tiers survive level
//! reconstruction; everything else in the session state is rebuilt from
//! level data. Upgrades are bought between levels against a fixed,
//! per-stat-capped cost table and raise the player's effective caps and
//! damage for every later level load.

/// The four purchasable stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeStat {
    MaxHealth,
    MaxMana,
    DaggerDamage,
    ClawDamage,
}

/// Purchased tier per stat (0 = base).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpgradeLevels {
    pub max_health: u8,
    pub max_mana: u8,
    pub dagger_damage: u8,
    pub claw_damage: u8,
}

const HEALTH_COSTS: [u32; 3] = [300, 600, 1200];
const HEALTH_VALUES: [f32; 3] = [125.0, 150.0, 175.0];
const MANA_COSTS: [u32; 3] = [250, 500, 1000];
const MANA_VALUES: [f32; 3] = [100.0, 120.0, 140.0];
const DAGGER_COSTS: [u32; 2] = [400, 800];
const DAGGER_VALUES: [f32; 2] = [20.0, 25.0];
const CLAW_COSTS: [u32; 2] = [500, 1000];
const CLAW_VALUES: [f32; 2] = [40.0, 50.0];

#[derive(Debug, Clone)]
pub struct Progression {
    pub experience: u32,
    pub lives: u32,
    pub upgrades: UpgradeLevels,
}

impl Progression {
    pub const STARTING_LIVES: u32 = 3;

    pub const BASE_MAX_HEALTH: f32 = 100.0;
    pub const BASE_MAX_MANA: f32 = 80.0;
    pub const BASE_DAGGER_DAMAGE: f32 = 15.0;
    pub const BASE_CLAW_DAMAGE: f32 = 30.0;

    pub fn new() -> Self {
        Self {
            experience: 0,
            lives: Self::STARTING_LIVES,
            upgrades: UpgradeLevels::default(),
        }
    }

    fn tiered(base: f32, values: &[f32], tier: u8) -> f32 {
        if tier == 0 {
            base
        } else {
            values[usize::from(tier - 1).min(values.len() - 1)]
        }
    }

    pub fn max_health(&self) -> f32 {
        Self::tiered(Self::BASE_MAX_HEALTH, &HEALTH_VALUES, self.upgrades.max_health)
    }

    pub fn max_mana(&self) -> f32 {
        Self::tiered(Self::BASE_MAX_MANA, &MANA_VALUES, self.upgrades.max_mana)
    }

    pub fn dagger_damage(&self) -> f32 {
        Self::tiered(Self::BASE_DAGGER_DAMAGE, &DAGGER_VALUES, self.upgrades.dagger_damage)
    }

    pub fn claw_damage(&self) -> f32 {
        Self::tiered(Self::BASE_CLAW_DAMAGE, &CLAW_VALUES, self.upgrades.claw_damage)
    }

    /// Cost of the next tier for a stat, or None at the cap.
    pub fn next_cost(&self, stat: UpgradeStat) -> Option<u32> {
        let (costs, tier): (&[u32], u8) = match stat {
            UpgradeStat::MaxHealth => (&HEALTH_COSTS, self.upgrades.max_health),
            UpgradeStat::MaxMana => (&MANA_COSTS, self.upgrades.max_mana),
            UpgradeStat::DaggerDamage => (&DAGGER_COSTS, self.upgrades.dagger_damage),
            UpgradeStat::ClawDamage => (&CLAW_COSTS, self.upgrades.claw_damage),
        };
        costs.get(usize::from(tier)).copied()
    }

    /// Spend experience on the next tier of a stat. A purchase past the
    /// cap or without the experience silently no-ops and returns false.
    pub fn purchase(&mut self, stat: UpgradeStat) -> bool {
        let Some(cost) = self.next_cost(stat) else {
            return false;
        };
        if self.experience < cost {
            return false;
        }

        self.experience -= cost;
        let tier = match stat {
            UpgradeStat::MaxHealth => &mut self.upgrades.max_health,
            UpgradeStat::MaxMana => &mut self.upgrades.max_mana,
            UpgradeStat::DaggerDamage => &mut self.upgrades.dagger_damage,
            UpgradeStat::ClawDamage => &mut self.upgrades.claw_damage,
        };
        *tier += 1;
        tracing::debug!(?stat, tier = *tier, "upgrade purchased");
        true
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_values_without_purchases() {
        let progression = Progression::new();
        assert_eq!(progression.max_health(), 100.0);
        assert_eq!(progression.max_mana(), 80.0);
        assert_eq!(progression.dagger_damage(), 15.0);
        assert_eq!(progression.claw_damage(), 30.0);
    }

    #[test]
    fn purchase_applies_cost_and_value() {
        let mut progression = Progression::new();
        progression.experience = 700;

        assert!(progression.purchase(UpgradeStat::MaxHealth));
        assert_eq!(progression.experience, 400);
        assert_eq!(progression.max_health(), 125.0);

        assert!(progression.purchase(UpgradeStat::DaggerDamage));
        assert_eq!(progression.experience, 0);
        assert_eq!(progression.dagger_damage(), 20.0);
    }

    #[test]
    fn purchase_without_experience_noops() {
        let mut progression = Progression::new();
        progression.experience = 100;
        assert!(!progression.purchase(UpgradeStat::MaxMana));
        assert_eq!(progression.experience, 100);
        assert_eq!(progression.upgrades.max_mana, 0);
    }

    #[test]
    fn purchase_past_cap_noops() {
        let mut progression = Progression::new();
        progression.experience = 100_000;

        assert!(progression.purchase(UpgradeStat::ClawDamage));
        assert!(progression.purchase(UpgradeStat::ClawDamage));
        assert!(!progression.purchase(UpgradeStat::ClawDamage));
        assert_eq!(progression.claw_damage(), 50.0);
        assert_eq!(progression.experience, 100_000 - 1500);
    }
}
