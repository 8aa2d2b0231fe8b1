//! Per-subject result rows.
//!
//! A summary combines whole-experiment metrics with the distance travelled in
//! each 5-minute quarter of a 20-minute reference session. Quarters that start
//! after the configured duration report `0.0`; a quarter cut short by the
//! duration ends at the duration.
//!
//! Ratios are not guarded: a zone the subject never visited yields a NaN
//! average speed, and the row keeps it.

use serde::Serialize;

use crate::trajectory::Trajectory;

/// Length of one reporting quarter [sec].
pub const QUARTER_SECS: f64 = 300.0;

/// Number of reporting quarters in the reference session.
pub const QUARTER_COUNT: usize = 4;

/// The fixed result row for one subject.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectSummary {
    #[serde(rename = "Animal")]
    pub subject_id: String,
    #[serde(rename = "Distance travelled 5")]
    pub distance_traveled_5: f64,
    #[serde(rename = "Distance travelled 10")]
    pub distance_traveled_10: f64,
    #[serde(rename = "Distance travelled 15")]
    pub distance_traveled_15: f64,
    #[serde(rename = "Distance travelled 20")]
    pub distance_traveled_20: f64,
    #[serde(rename = "Whole arena resting time")]
    pub whole_arena_resting_time: f64,
    #[serde(rename = "Whole arena permanence time")]
    pub whole_arena_performance_time: f64,
    #[serde(rename = "Whole arena average speed")]
    pub whole_arena_average_speed: f64,
    #[serde(rename = "Periphery distance travelled")]
    pub periphery_distance_traveled: f64,
    #[serde(rename = "Periphery resting time")]
    pub periphery_resting_time: f64,
    #[serde(rename = "Periphery permanence time")]
    pub periphery_performance_time: f64,
    #[serde(rename = "Periphery average speed")]
    pub periphery_average_speed: f64,
    #[serde(rename = "Center distance travelled")]
    pub center_distance_traveled: f64,
    #[serde(rename = "Center resting time")]
    pub center_resting_time: f64,
    #[serde(rename = "Center permanence time")]
    pub center_performance_time: f64,
    #[serde(rename = "Center average speed")]
    pub center_average_speed: f64,
    #[serde(rename = "Latency to center entry")]
    pub latency_to_center_entry: f64,
    #[serde(rename = "Number of center entries")]
    pub number_of_center_entry: usize,
    #[serde(rename = "Distance travelled - total")]
    pub distance_traveled_total: f64,
    #[serde(rename = "Percentage center time")]
    pub percentage_center_time: f64,
}

/// `(start, end)` windows of the reporting quarters, clipped to the duration.
///
/// `None` marks a quarter that starts after the experiment ended.
pub fn quarter_windows(duration_secs: f64) -> [Option<(f64, f64)>; QUARTER_COUNT] {
    std::array::from_fn(|k| {
        let start = QUARTER_SECS * k as f64;
        let end = start + QUARTER_SECS;
        (duration_secs >= start).then(|| (start, duration_secs.min(end)))
    })
}

impl SubjectSummary {
    pub fn from_trajectory(trajectory: &Trajectory) -> Self {
        let t = trajectory;
        let duration = t.duration_secs();

        let [q1, q2, q3, q4] = quarter_windows(duration)
            .map(|window| window.map_or(0.0, |(start, end)| t.total_move(start, end)));

        let all_move = t.total_move(0.0, duration);
        let center_move = t.total_move_in_center(0.0, duration);
        let periphery_move = t.total_move_in_peripheral(0.0, duration);
        let perform_all = t.performance_time(0.0, duration);
        let perform_center = t.performance_time_in_center(0.0, duration);
        let perform_periphery = t.performance_time_in_peripheral(0.0, duration);

        Self {
            subject_id: t.subject_id().to_string(),
            distance_traveled_5: q1,
            distance_traveled_10: q2,
            distance_traveled_15: q3,
            distance_traveled_20: q4,
            whole_arena_resting_time: t.resting_time(0.0, duration),
            whole_arena_performance_time: perform_all,
            whole_arena_average_speed: all_move / duration,
            periphery_distance_traveled: periphery_move,
            periphery_resting_time: t.resting_time_in_peripheral(0.0, duration),
            periphery_performance_time: perform_periphery,
            periphery_average_speed: periphery_move / perform_periphery,
            center_distance_traveled: center_move,
            center_resting_time: t.resting_time_in_center(0.0, duration),
            center_performance_time: perform_center,
            center_average_speed: center_move / perform_center,
            latency_to_center_entry: t.latency_to_center_entry(),
            number_of_center_entry: t.number_of_center_entry(),
            distance_traveled_total: all_move,
            percentage_center_time: perform_center / perform_all * 100.0,
        }
    }

    /// Distances of the four quarters, in order.
    pub fn quarter_distances(&self) -> [f64; QUARTER_COUNT] {
        [
            self.distance_traveled_5,
            self.distance_traveled_10,
            self.distance_traveled_15,
            self.distance_traveled_20,
        ]
    }
}
