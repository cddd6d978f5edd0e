pub mod attacker;
pub mod chance;
pub mod commit;
pub mod defender;
pub mod dice;
pub mod forecast;
pub mod versus;

pub use attacker::{attacker_context, AttackerContext};
pub use chance::{critical_hit_chance, to_hit_chance};
pub use commit::{commit_forecast, ActionResult, ResultPerTarget};
pub use defender::{defender_context, DefenderContext};
pub use dice::{DiceRoller, ScriptedDice, SeededDice};
pub use forecast::{
    forecast_action, ActionSetup, AttackForecast, Calculation, Forecast, HealingForecast,
};
pub use versus::{distribute_damage, versus_context, DamageDistribution, VersusContext};
