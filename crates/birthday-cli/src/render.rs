//! Text and JSON output for CLI reports.

use birthday_core::calendar::DAYS_IN_YEAR;
use birthday_core::{month_spans, OccupancyHistogram, OccupancyTier, Seed, ThrottleStats};
use serde::Serialize;

const ROW_WIDTH: usize = 31;

#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub seed: Seed,
    pub people: usize,
    pub days: usize,
    pub collisions: usize,
    pub max_occupancy: u32,
    pub histogram: OccupancyHistogram,
}

impl SimulationReport {
    pub fn new(seed: Seed, people: usize, histogram: OccupancyHistogram) -> Self {
        Self {
            seed,
            people,
            days: histogram.len(),
            collisions: histogram.collisions(),
            max_occupancy: histogram.max_occupancy(),
            histogram,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StreamDraw {
    pub index: usize,
    pub state: u32,
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct ThrottleEvent {
    pub at_ms: i64,
    pub accepted: bool,
}

#[derive(Debug, Serialize)]
pub struct ThrottleReport {
    pub window_ms: f64,
    pub events: Vec<ThrottleEvent>,
    pub stats: ThrottleStats,
}

fn glyphs(counts: &[u32]) -> String {
    counts
        .iter()
        .map(|&c| OccupancyTier::from_count(c).glyph())
        .collect()
}

/// Summary lines followed by the calendar. A 365-day histogram is grouped by
/// month; anything else is wrapped into fixed-width rows.
pub fn simulation_text(report: &SimulationReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Seed: {}\n", report.seed));
    out.push_str(&format!("Number of days: {}\n", report.days));
    out.push_str(&format!("Number of people: {}\n", report.people));
    out.push_str(&format!("Collisions in this set: {}\n", report.collisions));
    out.push('\n');

    let counts = report.histogram.counts();
    if counts.len() == DAYS_IN_YEAR {
        for span in month_spans() {
            out.push_str(&format!("{:<10} {}\n", span.name, glyphs(&counts[span.range()])));
        }
    } else {
        for (row, chunk) in counts.chunks(ROW_WIDTH).enumerate() {
            out.push_str(&format!("{:>5} {}\n", row * ROW_WIDTH + 1, glyphs(chunk)));
        }
    }
    out
}

pub fn stream_text(draws: &[StreamDraw]) -> String {
    let mut out = String::new();
    for draw in draws {
        out.push_str(&format!("{:>4} {:>10} {:.10}\n", draw.index, draw.state, draw.value));
    }
    out
}

pub fn throttle_text(report: &ThrottleReport) -> String {
    let mut out = String::new();
    for event in &report.events {
        let verdict = if event.accepted { "accepted" } else { "dropped" };
        out.push_str(&format!("{:>8} ms  {verdict}\n", event.at_ms));
    }
    out.push_str(&format!(
        "window {} ms: {} accepted, {} dropped\n",
        report.window_ms, report.stats.accepted, report.stats.dropped
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use birthday_core::{generate_distribution, SeededRandomStream};

    #[test]
    fn year_histogram_renders_one_line_per_month() {
        let mut stream = SeededRandomStream::new(1234);
        let histogram = generate_distribution(5, 365, &mut stream).unwrap();
        let text = simulation_text(&SimulationReport::new(Seed(1234), 5, histogram));

        assert!(text.contains("Collisions in this set: 0"));
        let months: Vec<&str> = text.lines().skip(5).collect();
        assert_eq!(months.len(), 12);
        assert!(months[0].starts_with("January"));
        assert_eq!(months[1].trim_start_matches("February").trim().len(), 28);
    }

    #[test]
    fn other_sizes_wrap_into_rows() {
        let mut stream = SeededRandomStream::new(1234);
        let histogram = generate_distribution(5, 1, &mut stream).unwrap();
        let text = simulation_text(&SimulationReport::new(Seed(1234), 5, histogram));

        assert!(text.contains("Collisions in this set: 1"));
        assert!(text.trim_end().ends_with("1 #"));
    }

    #[test]
    fn throttle_summary_counts_verdicts() {
        let report = ThrottleReport {
            window_ms: 100.0,
            events: vec![
                ThrottleEvent { at_ms: 0, accepted: true },
                ThrottleEvent { at_ms: 50, accepted: false },
            ],
            stats: ThrottleStats { accepted: 1, dropped: 1 },
        };
        let text = throttle_text(&report);
        assert!(text.contains("50 ms  dropped"));
        assert!(text.ends_with("window 100 ms: 1 accepted, 1 dropped\n"));
    }

    #[test]
    fn report_json_carries_histogram_array() {
        let histogram = OccupancyHistogram::new(3).unwrap();
        let json = serde_json::to_value(SimulationReport::new(Seed(7), 0, histogram)).unwrap();
        assert_eq!(json["histogram"], serde_json::json!([0, 0, 0]));
        assert_eq!(json["seed"], 7);
        assert_eq!(json["collisions"], 0);
    }
}
