//! End-to-end pipeline tests
//!
//! Exercises the full load → partition → merge → report flow against real
//! files, plus the partition/merge round-trip property across worker
//! counts.

use reelband::pipeline::{chunk_ranges, group_by_genre, PartitionMap, SharedGenreMap};
use reelband::{LoadError, MovieRecord, Pipeline, PipelineConfig, PipelineError};
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

fn dataset(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn read_json(path: &std::path::Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn test_end_to_end_single_worker() {
    let input = dataset("Alpha|Drama|7.5\nBeta|Drama|3.2\nGamma|Comedy|9.0\n");
    let out = tempdir().unwrap();
    let config = PipelineConfig::new(input.path())
        .with_output_dir(out.path())
        .with_workers(1);

    let summary = Pipeline::new(config).run().await.unwrap();
    assert_eq!(summary.records, 3);
    assert_eq!(summary.genres, 2);
    assert_eq!(summary.reports_written, 2);
    assert_eq!(summary.report_failures, 0);

    let drama = read_json(&out.path().join("Drama_rating_distribution.json"));
    assert_eq!(
        drama,
        serde_json::json!({
            "2.1-4.0": ["Beta"],
            "6.1-8.0": ["Alpha"],
        })
    );

    let comedy = read_json(&out.path().join("Comedy_rating_distribution.json"));
    assert_eq!(comedy, serde_json::json!({ "8.1-10.0": ["Gamma"] }));
}

#[tokio::test]
async fn test_end_to_end_with_more_workers_than_records() {
    let input = dataset("Alpha|Drama|7.5\nBeta|Drama|3.2\nGamma|Comedy|9.0\n");
    let out = tempdir().unwrap();
    let config = PipelineConfig::new(input.path())
        .with_output_dir(out.path())
        .with_workers(16);

    let summary = Pipeline::new(config).run().await.unwrap();
    assert_eq!(summary.reports_written, 2);

    let drama = read_json(&out.path().join("Drama_rating_distribution.json"));
    assert_eq!(
        drama,
        serde_json::json!({
            "2.1-4.0": ["Beta"],
            "6.1-8.0": ["Alpha"],
        })
    );
}

#[tokio::test]
async fn test_unrated_band_is_emitted_last() {
    let input = dataset("Ghost|Indie|0.0\nSolid|Indie|5.0\n");
    let out = tempdir().unwrap();
    let config = PipelineConfig::new(input.path())
        .with_output_dir(out.path())
        .with_workers(1);

    Pipeline::new(config).run().await.unwrap();

    let path = out.path().join("Indie_rating_distribution.json");
    let value = read_json(&path);
    assert_eq!(
        value,
        serde_json::json!({
            "4.1-6.0": ["Solid"],
            "Unrated": ["Ghost"],
        })
    );

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.find("4.1-6.0").unwrap() < raw.find("Unrated").unwrap());
}

#[tokio::test]
async fn test_zero_record_input_halts_before_writing() {
    let input = dataset("not a record\nAlpha|Drama|ten\n\n");
    let out = tempdir().unwrap();
    let config = PipelineConfig::new(input.path())
        .with_output_dir(out.path())
        .with_workers(2);

    let err = Pipeline::new(config).run().await.unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Load(LoadError::NoUsableRecords { .. })
    ));
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_missing_input_file_fails_the_run() {
    let out = tempdir().unwrap();
    let config = PipelineConfig::new("/nonexistent/movies.txt").with_output_dir(out.path());

    let err = Pipeline::new(config).run().await.unwrap_err();
    assert!(matches!(err, PipelineError::Load(LoadError::Io(_))));
}

#[tokio::test]
async fn test_unwritable_output_fails_genres_not_the_run() {
    let input = dataset("Alpha|Drama|7.5\nGamma|Comedy|9.0\n");
    let dir = tempdir().unwrap();
    // occupy the output path with a regular file so create_dir_all fails
    let blocker = dir.path().join("output");
    fs::write(&blocker, b"in the way").unwrap();

    let config = PipelineConfig::new(input.path())
        .with_output_dir(&blocker)
        .with_workers(1);

    let summary = Pipeline::new(config).run().await.unwrap();
    assert_eq!(summary.genres, 2);
    assert_eq!(summary.reports_written, 0);
    assert_eq!(summary.report_failures, 2);
}

/// Direct single-pass group-by over the whole sequence, the reference the
/// partitioned pipeline must reproduce.
fn direct_group_by(records: &[MovieRecord]) -> PartitionMap {
    group_by_genre(records, 0..records.len())
}

#[test]
fn test_partition_merge_round_trip_matches_direct_group_by() {
    let records: Vec<MovieRecord> = [
        ("A", "Drama", 7.5),
        ("B", "Comedy", 3.2),
        ("C", "Drama", 9.0),
        ("D", "Horror", 5.5),
        ("E", "Comedy", 6.6),
        ("F", "Drama", 1.1),
        ("G", "Horror", 8.8),
        ("H", "Drama", 2.2),
        ("I", "Comedy", 4.4),
        ("J", "Drama", 0.0),
    ]
    .iter()
    .map(|(title, genre, rating)| MovieRecord {
        title: title.to_string(),
        genre: genre.to_string(),
        rating: *rating,
    })
    .collect();

    let reference = direct_group_by(&records);

    for workers in 1..=6 {
        let partitions: Vec<PartitionMap> = chunk_ranges(records.len(), workers)
            .into_iter()
            .map(|range| group_by_genre(&records, range))
            .collect();

        let shared = SharedGenreMap::new();
        shared.merge_partitions(partitions);

        let genres: Vec<String> = reference.keys().cloned().collect();
        assert_eq!(shared.genres(), genres, "workers={workers}");
        for genre in &genres {
            assert_eq!(
                &shared.snapshot(genre),
                &reference[genre],
                "workers={workers} genre={genre}"
            );
        }
    }
}

#[test]
fn test_uneven_remainder_chunking() {
    // n=10, W=3 → [0,3), [3,6), [6,10)
    assert_eq!(chunk_ranges(10, 3), vec![0..3, 3..6, 6..10]);
}
