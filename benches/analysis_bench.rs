// ABOUTME: Criterion benchmarks for progress analysis, weight recommendation, and prompt generation
// ABOUTME: Measures the hot paths a coaching request runs through for growing workout histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the coaching pipeline.
//!
//! Covers history analysis, per-exercise weight recommendation, template
//! rendering, and full meta-prompt composition.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use chrono::{Duration, NaiveDate, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cyclecoach::intelligence::{ProgressAnalyzer, WeightRecommender};
use cyclecoach::models::{
    Difficulty, Language, SessionContext, UserProfile, WorkoutRecord, WorkoutRecordBuilder,
};
use cyclecoach::prompts::PromptComposer;
use cyclecoach::templates::{RenderData, TemplateRenderer};
use serde_json::json;
use uuid::Uuid;

const EXERCISES: [&str; 8] = [
    "Bench Press",
    "Back Squat",
    "Barbell Row",
    "Overhead Press",
    "Deadlift",
    "Plank",
    "Bicep Curl",
    "Lunge",
];

/// History sizes: a few weeks, a training block, a year of logging
const HISTORY_SIZES: [usize; 3] = [20, 200, 1000];

#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
fn generate_history(user_id: Uuid, count: usize) -> Vec<WorkoutRecord> {
    let now = Utc::now();
    (0..count)
        .map(|index| {
            let difficulty = match index % 3 {
                0 => Difficulty::Easy,
                1 => Difficulty::Moderate,
                _ => Difficulty::Hard,
            };
            WorkoutRecordBuilder::new(
                user_id,
                EXERCISES[index % EXERCISES.len()],
                40.0 + ((index * 7) % 60) as f64,
                5 + (index % 8) as u32,
            )
            .sets(3 + (index % 3) as u32)
            .difficulty(difficulty)
            .timestamp(now - Duration::hours((index * 30) as i64))
            .build()
            .unwrap()
        })
        .collect()
}

fn bench_analyze_progress(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_progress");
    let analyzer = ProgressAnalyzer::new();
    let user_id = Uuid::new_v4();

    for size in HISTORY_SIZES {
        let history = generate_history(user_id, size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &history, |b, history| {
            b.iter(|| analyzer.analyze_progress(black_box(history), None));
        });
    }

    group.finish();
}

fn bench_recommend_weight(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend_weight");
    let recommender = WeightRecommender::new();
    let user_id = Uuid::new_v4();

    for size in HISTORY_SIZES {
        let history = generate_history(user_id, size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &history, |b, history| {
            b.iter(|| recommender.recommend_weight(black_box("Back Squat"), black_box(history)));
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let renderer = TemplateRenderer::new();
    let template = "Session {{session}}: {{title}}\n{{#items}}- {{name}} x{{reps}}{{/items}}\n{{missing}}";
    let mut data = RenderData::new();
    data.insert("session".to_owned(), json!(3));
    data.insert("title".to_owned(), json!("Upper Body Pull"));
    data.insert(
        "items".to_owned(),
        json!((0..25)
            .map(|i| json!({ "name": format!("Exercise {i}"), "reps": i }))
            .collect::<Vec<_>>()),
    );

    c.bench_function("render_template", |b| {
        b.iter(|| renderer.render(black_box(template), black_box(&data)));
    });
}

fn bench_generate_full_prompt(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_full_prompt");
    let composer = PromptComposer::default();
    let user_id = Uuid::new_v4();
    let profile = UserProfile::new(user_id, "Bench Athlete");
    let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

    for size in HISTORY_SIZES {
        let mut ctx = SessionContext::new(user_id, Utc::now());
        ctx.performance = generate_history(user_id, size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &ctx, |b, ctx| {
            b.iter(|| {
                composer
                    .generate_full_prompt_on(black_box(&profile), black_box(ctx), Language::English, date)
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_analyze_progress,
    bench_recommend_weight,
    bench_render,
    bench_generate_full_prompt
);
criterion_main!(benches);
