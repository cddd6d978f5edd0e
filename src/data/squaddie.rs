//! Squaddie data: identity, offense/defense stats, vitals, and equipped-power state.
//! Mutated only by the commit engine; the forecast pipeline reads it as a snapshot.

use serde::{Deserialize, Serialize};

use crate::data::power::Power;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Affiliation {
    Player,
    Enemy,
    Ally,
    Neutral,
}

/// A combat-capable character. Vitals clamp at 0 on reduction and never
/// exceed their maxima.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Squaddie {
    pub id: String,
    pub name: String,
    pub affiliation: Affiliation,
    pub aim: i32,
    pub strength: i32,
    pub mind: i32,
    pub dodge: i32,
    pub deflect: i32,
    pub armor: i32,
    pub max_barrier: i32,
    pub current_barrier: i32,
    pub max_hit_points: i32,
    pub current_hit_points: i32,
    /// Ids of the powers this squaddie owns.
    #[serde(default)]
    pub powers: Vec<String>,
    #[serde(default)]
    pub equipped_power: Option<String>,
}

impl Squaddie {
    pub fn is_alive(&self) -> bool {
        self.current_hit_points > 0
    }

    pub fn is_dead(&self) -> bool {
        !self.is_alive()
    }

    pub fn missing_hit_points(&self) -> i32 {
        (self.max_hit_points - self.current_hit_points).max(0)
    }

    pub fn owns_power(&self, power_id: &str) -> bool {
        self.powers.iter().any(|owned| owned == power_id)
    }

    pub fn set_hit_points_to_max(&mut self) {
        self.current_hit_points = self.max_hit_points;
    }

    pub fn set_barrier_to_max(&mut self) {
        self.current_barrier = self.max_barrier;
    }

    /// Apply health damage and barrier burn, clamping both vitals at 0.
    pub fn take_damage(&mut self, health_damage: i32, barrier_burnt: i32) {
        self.current_hit_points = (self.current_hit_points - health_damage.max(0)).max(0);
        self.current_barrier = (self.current_barrier - barrier_burnt.max(0)).max(0);
    }

    /// Restore hit points up to the maximum. Returns the amount actually
    /// restored.
    pub fn receive_healing(&mut self, amount: i32) -> i32 {
        let restored = amount.max(0).min(self.missing_hit_points());
        self.current_hit_points += restored;
        restored
    }

    /// Try to equip a power. Fails silently, keeping the prior equipped
    /// power, when the power is not equippable or not owned. Returns whether
    /// the equip took effect.
    pub fn equip_power(&mut self, power: &Power) -> bool {
        if !power.can_be_equipped() || !self.owns_power(&power.id) {
            return false;
        }
        self.equipped_power = Some(power.id.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::power::{AttackEffect, Power, PowerType};

    fn recruit() -> Squaddie {
        Squaddie {
            id: "recruit".to_string(),
            name: "Recruit".to_string(),
            affiliation: Affiliation::Player,
            aim: 1,
            strength: 1,
            mind: 0,
            dodge: 1,
            deflect: 0,
            armor: 0,
            max_barrier: 2,
            current_barrier: 2,
            max_hit_points: 5,
            current_hit_points: 5,
            powers: vec!["spear".to_string()],
            equipped_power: None,
        }
    }

    #[test]
    fn take_damage_clamps_vitals_at_zero() {
        let mut squaddie = recruit();
        squaddie.take_damage(9, 7);
        assert_eq!(squaddie.current_hit_points, 0);
        assert_eq!(squaddie.current_barrier, 0);
        assert!(squaddie.is_dead());
    }

    #[test]
    fn receive_healing_caps_at_max_hit_points() {
        let mut squaddie = recruit();
        squaddie.take_damage(3, 0);
        assert_eq!(squaddie.receive_healing(10), 3);
        assert_eq!(squaddie.current_hit_points, squaddie.max_hit_points);
        assert_eq!(squaddie.receive_healing(1), 0);
    }

    #[test]
    fn equip_power_keeps_prior_power_when_not_owned() {
        let mut squaddie = recruit();
        let axe = Power {
            id: "axe".to_string(),
            name: "Axe".to_string(),
            power_type: PowerType::Physical,
            attack: Some(AttackEffect::default()),
            healing: None,
        };
        assert!(!squaddie.equip_power(&axe));
        assert_eq!(squaddie.equipped_power, None);

        let spear = Power {
            id: "spear".to_string(),
            name: "Spear".to_string(),
            power_type: PowerType::Physical,
            attack: Some(AttackEffect::default()),
            healing: None,
        };
        assert!(squaddie.equip_power(&spear));
        assert_eq!(squaddie.equipped_power.as_deref(), Some("spear"));
    }
}
