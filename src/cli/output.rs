//! Output formatting utilities

use crate::domain::Workout;
use crate::infrastructure::MarkerLayer;

/// Format one workout as a list entry: title line, then its details
pub fn format_workout(workout: &Workout) -> String {
    let kind = workout.kind();
    let metric = workout.metric();

    let extra = match workout {
        Workout::Running(r) => format!("🦶🏼 {} spm", r.cadence),
        Workout::Cycling(c) => format!("⛰ {} m", c.elevation_gain),
    };

    format!(
        "{}  [{}]\n  {} {} km  ⏱ {} min  ⚡️ {:.1} {}  {}\n",
        workout.description(),
        workout.id(),
        kind.icon(),
        workout.distance(),
        workout.duration(),
        metric.value(),
        metric.unit(),
        extra
    )
}

/// Format workouts in collection order
pub fn format_workout_list(workouts: &[Workout]) -> String {
    if workouts.is_empty() {
        return "No workouts recorded".to_string();
    }

    workouts.iter().map(format_workout).collect()
}

/// Format the map view and its markers
pub fn format_map(map: &MarkerLayer) -> String {
    let mut output = match map.center() {
        Some(center) => format!("Map centered on {} (zoom {})\n", center, map.zoom()),
        None => "Map has no view\n".to_string(),
    };

    if map.markers().is_empty() {
        output.push_str("No markers\n");
    }
    for marker in map.markers() {
        output.push_str(&format!("📍 {}  {}\n", marker.coords, marker.popup));
    }
    output
}
