//! # Emotune Performance Benchmarks
//!
//! Benchmarks for the hot paths of a recommendation request.
//!
//! ## Benchmark Categories
//!
//! - **Aggregation**: Ranking long label sequences from a scan
//! - **Partitioned Catalog**: Loading and sampling the tagged dataset
//! - **Recommendation**: Both recommendation flows end to end
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark group
//! cargo bench aggregation
//! cargo bench recommendation
//! ```

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::hint::black_box;
use tempfile::TempDir;

use emotune::aggregator;
use emotune::catalog::local::LocalCatalog;
use emotune::catalog::partition::{PartitionedTable, SongRow};
use emotune::catalog::NoLocalSongs;
use emotune::emotion::EmotionLabel;
use emotune::recommend;

/// Label sequence cycling through every emotion with a skew towards `Sad`
fn create_sequence(len: usize) -> Vec<EmotionLabel> {
    (0..len)
        .map(|i| {
            if i % 3 == 0 {
                EmotionLabel::Sad
            } else {
                EmotionLabel::ALL[i % EmotionLabel::ALL.len()]
            }
        })
        .collect()
}

fn create_rows(count: u32) -> Vec<SongRow> {
    (0..count)
        .map(|i| SongRow {
            name: format!("Track {i}"),
            artist: format!("Artist {}", i % 500),
            link: format!("https://www.last.fm/music/artist{}/_/track{i}", i % 500),
            emotional: i % 40,
            pleasant: f64::from(i % 90) / 10.0,
        })
        .collect()
}

/// Benchmark ranking of scan sequences
fn benchmark_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    for size in [20, 200, 2_000, 20_000].iter() {
        let sequence = create_sequence(*size);

        group.bench_with_input(BenchmarkId::new("rank", size), &sequence, |b, sequence| {
            b.iter(|| aggregator::rank(black_box(sequence)))
        });
    }

    let labels: Vec<String> = create_sequence(200)
        .into_iter()
        .map(|e| e.as_str().to_lowercase())
        .collect();
    group.bench_function("rank_labels_200", |b| {
        b.iter(|| aggregator::rank_labels(black_box(labels.as_slice())))
    });

    group.finish();
}

/// Benchmark the partitioned dataset
fn benchmark_partitioned_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("partitioned_catalog");

    let rows = create_rows(100_000);
    group.bench_function("sort_100k_rows", |b| {
        b.iter_batched(
            || rows.clone(),
            |rows| PartitionedTable::from_rows(black_box(rows)),
            BatchSize::LargeInput,
        )
    });

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let dataset = temp_dir.path().join("muse_v3.csv");
    let mut csv = String::from("lastfm_url,track,artist,number_of_emotion_tags,valence_tags\n");
    for row in create_rows(10_000) {
        csv.push_str(&format!(
            "{},{},{},{},{}\n",
            row.link, row.name, row.artist, row.emotional, row.pleasant
        ));
    }
    fs::write(&dataset, csv).expect("Failed to write dataset");

    group.bench_function("load_csv_10k_rows", |b| {
        b.iter(|| PartitionedTable::from_csv_with_bucket_size(black_box(&dataset), 2_000))
    });

    group.finish();
}

/// Benchmark both recommendation flows
fn benchmark_recommendation(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommendation");
    let mut rng = StdRng::seed_from_u64(42);

    let sequence = create_sequence(20);
    group.bench_function("dominant_fixed_playlist", |b| {
        b.iter(|| {
            recommend::recommend_dominant(
                Some(black_box(sequence.as_slice())),
                &NoLocalSongs,
                "http://localhost:5000/",
                &mut rng,
            )
        })
    });

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let sad_dir = temp_dir.path().join("Sad");
    fs::create_dir_all(&sad_dir).expect("Failed to create songs directory");
    for i in 0..100 {
        fs::write(sad_dir.join(format!("song{i:03}.mp3")), b"ID3").expect("Failed to write song");
    }
    let local = LocalCatalog::new(temp_dir.path());
    group.bench_function("dominant_local_100_files", |b| {
        b.iter(|| {
            recommend::recommend_dominant(
                Some(black_box(sequence.as_slice())),
                &local,
                "http://localhost:5000/",
                &mut rng,
            )
        })
    });

    let table = PartitionedTable::with_bucket_size(create_rows(100_000), 18_000);
    for k in 1..=5 {
        let ranked: Vec<EmotionLabel> = EmotionLabel::ALL.iter().copied().take(k).collect();
        group.bench_with_input(BenchmarkId::new("weighted_playlist", k), &ranked, |b, ranked| {
            b.iter(|| recommend::weighted_playlist(black_box(ranked), &table, &mut rng))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_aggregation,
    benchmark_partitioned_catalog,
    benchmark_recommendation
);

criterion_main!(benches);
