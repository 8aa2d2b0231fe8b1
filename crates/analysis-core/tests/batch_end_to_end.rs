use std::path::PathBuf;

use openfield_analysis_core::{Analyzer, TrajectoryError};
use openfield_common::config::AnalysisConfig;
use openfield_track_model::record::{parse_record, RawRecord, RawRow};

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("sample-session")
}

fn load_fixture_inputs() -> Vec<(String, String)> {
    let mut inputs = std::fs::read_dir(fixture_dir())
        .expect("fixture directory should be readable")
        .map(|entry| entry.expect("fixture entry").path())
        .filter(|path| path.to_string_lossy().ends_with("_XY.txt"))
        .map(|path| {
            let text = std::fs::read_to_string(&path).expect("fixture should be readable");
            (path.display().to_string(), text)
        })
        .collect::<Vec<_>>();
    // Feed the batch out of order so sorting is exercised.
    inputs.sort_by(|a, b| b.0.cmp(&a.0));
    inputs
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn fixture_session_summaries_are_sorted_and_failures_reported() {
    let inputs = load_fixture_inputs();
    let analyzer = Analyzer::new(AnalysisConfig::default()).unwrap();
    let report = analyzer.analyze_batch(inputs.iter().map(|(s, t)| (s.as_str(), t.as_str())));

    let ids = report
        .summaries()
        .iter()
        .map(|s| s.subject_id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, ["M-01", "M-02"]);

    assert_eq!(report.failures().len(), 1);
    assert!(report.failures()[0].source.ends_with("M-99_XY.txt"));
    assert!(report.failures()[0].reason.contains("none of the 2 frames"));
}

#[test]
fn fixture_subject_metrics() {
    let inputs = load_fixture_inputs();
    let analyzer = Analyzer::new(AnalysisConfig::default()).unwrap();
    let report = analyzer.analyze_batch(inputs.iter().map(|(s, t)| (s.as_str(), t.as_str())));
    let m01 = &report.summaries()[0];

    // center, center, center, corner, corner, center at 1/3 cm per pixel
    let out = 5725f64.sqrt() / 3.0;
    let back = 5000f64.sqrt() / 3.0;
    let center = 1.0 + 4.0 / 3.0 + back;
    assert!(close(m01.distance_traveled_total, center + out));
    assert!(close(m01.center_distance_traveled, center));
    assert!(close(m01.periphery_distance_traveled, out));
    assert!(close(m01.distance_traveled_5, m01.distance_traveled_total));
    assert_eq!(m01.distance_traveled_10, 0.0);

    assert_eq!(m01.whole_arena_performance_time, 3.0);
    assert_eq!(m01.center_performance_time, 2.0);
    assert_eq!(m01.periphery_performance_time, 1.0);
    // frames 2, 3 rest in center, frame 5 rests in the corner
    assert_eq!(m01.center_resting_time, 1.0);
    assert_eq!(m01.periphery_resting_time, 0.5);
    assert_eq!(m01.latency_to_center_entry, 0.5);
    assert_eq!(m01.number_of_center_entry, 2);
    assert!(close(m01.percentage_center_time, 200.0 / 3.0));
}

#[test]
fn repaired_distance_follows_interpolation() {
    let analyzer = Analyzer::new(AnalysisConfig::default()).unwrap();
    let text = std::fs::read_to_string(fixture_dir().join("M-02_XY.txt")).unwrap();
    let analysis = analyzer.analyze_text(&text).unwrap();
    let t = &analysis.trajectory;

    assert_eq!(t.repaired_frames(), 3);
    let second = t.frame(2).unwrap();
    assert_eq!((second.pixel().x, second.pixel().y), (22.0, 20.0));
    let seventh = t.frame(7).unwrap();
    assert_eq!((seventh.pixel().x, seventh.pixel().y), (60.0, 62.0));

    // 2 px steps through the first gap, 1 px through the second
    for frame in 2..=4 {
        assert!(close(t.frame(frame).unwrap().distance_cm(), 2.0 / 3.0));
    }
    assert!(close(t.frame(7).unwrap().distance_cm(), 1.0 / 3.0));
}

#[test]
fn generated_records_round_trip_through_the_text_format() {
    let full = RawRecord {
        subject_id: "B".to_string(),
        rows: (1..=10)
            .map(|frame| RawRow::present(frame, 30.0 + frame as f64 * 3.0, 60.0))
            .collect(),
    };
    let gapped = RawRecord {
        subject_id: "A".to_string(),
        rows: (1..=10)
            .map(|frame| {
                if frame == 5 {
                    RawRow::missing(frame)
                } else {
                    RawRow::present(frame, 30.0 + frame as f64 * 3.0, 60.0)
                }
            })
            .collect(),
    };

    let texts = [("b.txt", full.to_xy_text()), ("a.txt", gapped.to_xy_text())];
    assert_eq!(parse_record(&texts[1].1).unwrap(), gapped);

    let analyzer = Analyzer::new(AnalysisConfig::default()).unwrap();
    let report = analyzer.analyze_batch(texts.iter().map(|(s, t)| (*s, t.as_str())));
    assert!(report.failures().is_empty());

    let [a, b] = report.summaries() else {
        panic!("expected two summaries");
    };
    assert_eq!(a.subject_id, "A");
    assert_eq!(b.subject_id, "B");
    // Interpolating a straight line restores the missing step exactly.
    assert!(close(a.distance_traveled_total, b.distance_traveled_total));
    assert!(close(a.distance_traveled_total, 9.0));
}

#[test]
fn frame_numbering_must_be_contiguous() {
    let analyzer = Analyzer::new(AnalysisConfig::default()).unwrap();
    let err = analyzer
        .analyze_text("Animal ID\tX1\nSlice\tX\tY\n1\t1\t1\n2\t2\t2\n4\t4\t4\n")
        .unwrap_err();
    assert_eq!(
        err,
        TrajectoryError::NonContiguousFrames {
            expected: 3,
            found: 4
        }
    );
}
