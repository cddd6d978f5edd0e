//! Power definitions: attack and healing effects, critical parameters, and
//! the counter-attack flags the forecast orchestrator keys off.

use serde::{Deserialize, Serialize};

/// Margin-of-victory base for critical hits on 2d6. A power's effective
/// threshold is this base plus its critical effect's threshold bonus.
pub const CRITICAL_HIT_THRESHOLD_BASE: i32 = 6;

/// Determines which offense stat feeds raw damage and which defense stat
/// opposes the attack. Spell damage bypasses armor entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerType {
    Physical,
    Spell,
}

/// How much of the healer's Mind stat is added to a heal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealingAdjustment {
    Full,
    Half,
    #[default]
    Zero,
}

impl HealingAdjustment {
    /// Parse a policy keyword. Unrecognized keywords map to the no-op
    /// variant `Zero`.
    pub fn parse_keyword(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "full" => Self::Full,
            "half" => Self::Half,
            _ => Self::Zero,
        }
    }

    pub fn mind_bonus(self, mind: i32) -> i32 {
        match self {
            Self::Full => mind,
            Self::Half => mind / 2,
            Self::Zero => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CriticalEffect {
    /// Added to [CRITICAL_HIT_THRESHOLD_BASE] to form the margin a hit must
    /// reach to critical.
    #[serde(default)]
    pub threshold_bonus: i32,
    /// Extra damage on a critical, applied after the raw damage doubles.
    #[serde(default)]
    pub bonus_damage: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackEffect {
    #[serde(default)]
    pub to_hit_bonus: i32,
    #[serde(default)]
    pub damage_bonus: i32,
    /// Bonus barrier damage that competes with main damage for the barrier
    /// pool but never reaches armor or health.
    #[serde(default)]
    pub extra_barrier_burn: i32,
    #[serde(default)]
    pub can_counter_attack: bool,
    /// Signed to-hit modifier applied once when this power is used as a
    /// counter-attack. Typically negative.
    #[serde(default)]
    pub counter_attack_to_hit_penalty: i32,
    #[serde(default = "default_can_be_equipped")]
    pub can_be_equipped: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<CriticalEffect>,
}

fn default_can_be_equipped() -> bool {
    true
}

impl Default for AttackEffect {
    fn default() -> Self {
        AttackEffect {
            to_hit_bonus: 0,
            damage_bonus: 0,
            extra_barrier_burn: 0,
            can_counter_attack: false,
            counter_attack_to_hit_penalty: 0,
            can_be_equipped: true,
            critical: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealingEffect {
    pub hit_points_healed: i32,
    #[serde(default)]
    pub adjustment: HealingAdjustment,
}

/// A named ability. Immutable for the duration of one forecast/commit cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Power {
    pub id: String,
    pub name: String,
    pub power_type: PowerType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack: Option<AttackEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healing: Option<HealingEffect>,
}

impl Power {
    pub fn is_attack(&self) -> bool {
        self.attack.is_some()
    }

    pub fn is_healing(&self) -> bool {
        self.healing.is_some()
    }

    /// Effective critical-hit threshold. 0 means the power cannot critical.
    pub fn critical_hit_threshold(&self) -> i32 {
        match self.attack.as_ref().and_then(|attack| attack.critical) {
            Some(critical) => CRITICAL_HIT_THRESHOLD_BASE + critical.threshold_bonus,
            None => 0,
        }
    }

    pub fn can_critically_hit(&self) -> bool {
        self.critical_hit_threshold() != 0
    }

    pub fn can_counter_attack(&self) -> bool {
        self.attack
            .as_ref()
            .map(|attack| attack.can_counter_attack)
            .unwrap_or(false)
    }

    /// Only attack powers flagged equippable can be equipped.
    pub fn can_be_equipped(&self) -> bool {
        self.attack
            .as_ref()
            .map(|attack| attack.can_be_equipped)
            .unwrap_or(false)
    }
}
