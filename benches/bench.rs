// Criterion benchmarks for FitRank

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use fitrank::core::{matching::match_percentage, normalize::normalize_gyms, Ranker};
use fitrank::models::{GymCandidate, PlanType, RawGymRecord, UserProfile};
use std::collections::BTreeSet;

fn create_candidate(id: i64) -> GymCandidate {
    GymCandidate {
        id,
        daily_price: if id % 3 == 0 { None } else { Some(100.0 + (id % 50) as f64 * 5.0) },
        monthly_price: Some(800.0 + (id % 40) as f64 * 50.0),
        annual_price: None,
        gym_type: Some(if id % 2 == 0 { "General" } else { "CrossFit" }.to_string()),
        equipment_ids: (0..(id % 30)).collect(),
        amenity_ids: (0..(id % 8)).collect(),
        has_personal_trainers: id % 2 == 0,
        has_classes: id % 3 == 0,
        is_airconditioned: id % 4 == 0,
        is_24_hours: id % 5 == 0,
        latitude: Some(14.5764 + (id as f64 * 0.001) % 0.2),
        longitude: Some(121.0851),
    }
}

fn create_profile() -> UserProfile {
    UserProfile {
        budget: Some(1500.0),
        plan_type: Some(PlanType::Monthly),
        preferred_equipment_ids: BTreeSet::from([1, 4, 9, 16, 25]),
        preferred_amenity_ids: BTreeSet::from([2, 3]),
        latitude: Some(14.5764),
        longitude: Some(121.0851),
    }
}

fn bench_match_percentage(c: &mut Criterion) {
    let required: BTreeSet<i64> = (0..20).collect();
    let owned: BTreeSet<i64> = (10..60).collect();

    c.bench_function("match_percentage", |b| {
        b.iter(|| match_percentage(black_box(&required), black_box(&owned)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let ranker = Ranker::with_default_weights();
    let profile = create_profile();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<GymCandidate> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| ranker.rank(black_box(&profile), black_box(&candidates)));
            },
        );
    }

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let raw: Vec<RawGymRecord> = (0..100)
        .map(|i| {
            serde_json::from_value(serde_json::json!({
                "gym_id": i,
                "daily_price": format!("{}.00", 100 + i),
                "monthly_price": 1500,
                "equipment_ids": [1, 2, 3],
                "has_classes": 1
            }))
            .unwrap()
        })
        .collect();

    c.bench_function("normalize_100_gyms", |b| {
        b.iter(|| normalize_gyms(black_box(&raw)));
    });
}

criterion_group!(
    benches,
    bench_match_percentage,
    bench_ranking,
    bench_normalize
);

criterion_main!(benches);
