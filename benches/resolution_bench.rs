//! Pipeline throughput benchmarks: forecasts per second and full
//! forecast-and-commit cycles per second.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use skirmish::combat::{commit_forecast, forecast_action, ActionSetup, SeededDice};
use skirmish::data::{
    Affiliation, AttackEffect, CriticalEffect, Power, PowerRepository, PowerType, Squaddie,
    SquaddieRepository,
};

fn attacker() -> Squaddie {
    Squaddie {
        id: "attacker".to_string(),
        name: "Attacker".to_string(),
        affiliation: Affiliation::Player,
        aim: 2,
        strength: 2,
        mind: 1,
        dodge: 1,
        deflect: 1,
        armor: 1,
        max_barrier: 2,
        current_barrier: 2,
        max_hit_points: 8,
        current_hit_points: 8,
        powers: vec!["spear".to_string()],
        equipped_power: Some("spear".to_string()),
    }
}

fn defender() -> Squaddie {
    Squaddie {
        id: "defender".to_string(),
        name: "Defender".to_string(),
        affiliation: Affiliation::Enemy,
        aim: 1,
        strength: 2,
        mind: 0,
        dodge: 2,
        deflect: 3,
        armor: 2,
        max_barrier: 4,
        current_barrier: 4,
        max_hit_points: 10,
        current_hit_points: 10,
        powers: vec!["axe".to_string()],
        equipped_power: Some("axe".to_string()),
    }
}

fn powers() -> PowerRepository {
    PowerRepository::from_powers([
        Power {
            id: "spear".to_string(),
            name: "Spear".to_string(),
            power_type: PowerType::Physical,
            attack: Some(AttackEffect {
                to_hit_bonus: 1,
                damage_bonus: 2,
                extra_barrier_burn: 1,
                can_counter_attack: true,
                counter_attack_to_hit_penalty: -2,
                critical: Some(CriticalEffect::default()),
                ..AttackEffect::default()
            }),
            healing: None,
        },
        Power {
            id: "axe".to_string(),
            name: "Axe".to_string(),
            power_type: PowerType::Physical,
            attack: Some(AttackEffect {
                to_hit_bonus: 1,
                damage_bonus: 1,
                can_counter_attack: true,
                counter_attack_to_hit_penalty: -2,
                ..AttackEffect::default()
            }),
            healing: None,
        },
    ])
}

fn bench_resolution(c: &mut Criterion) {
    let squaddies = SquaddieRepository::from_squaddies([attacker(), defender()]);
    let power_repository = powers();
    let setup = ActionSetup::new("attacker", "spear", &["defender"]);

    let mut group = c.benchmark_group("resolution");
    group.sample_size(100);
    group.throughput(Throughput::Elements(1));

    group.bench_function("forecast_with_counter", |b| {
        b.iter(|| {
            black_box(
                forecast_action(&setup, &squaddies, &power_repository)
                    .expect("forecast should succeed"),
            )
        });
    });

    group.bench_function("forecast_and_commit", |b| {
        let forecast = forecast_action(&setup, &squaddies, &power_repository)
            .expect("forecast should succeed");
        b.iter_batched(
            || (squaddies.clone(), SeededDice::new(7)),
            |(mut live_squaddies, mut dice)| {
                black_box(
                    commit_forecast(&forecast, &mut live_squaddies, &power_repository, &mut dice)
                        .expect("commit should succeed"),
                )
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_resolution);
criterion_main!(benches);
