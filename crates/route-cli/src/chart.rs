// crates/route-cli/src/chart.rs

//! Horizontal bar chart of a [`RouteReport`], quickest mode on top.

use route_core::{ModeTable, RouteReport};
use std::fmt::Write;

/// Width, in characters, of the longest bar.
pub const DEFAULT_WIDTH: usize = 40;

const BAR: char = '#';

/// Renders `report.ranked` as one bar per mode, each proportional to its
/// duration, followed by the recommended mode.
pub fn render(report: &RouteReport, modes: &ModeTable, width: usize) -> String {
    let longest_label = modes.labels().map(str::len).max().unwrap_or(0);
    let max_minutes = report
        .ranked
        .iter()
        .map(|e| e.total_minutes())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({:.2} km)",
        report.title(),
        report.distance_km
    );

    for e in &report.ranked {
        let label = modes.get(e.mode_index).map_or("?", |m| m.label.as_str());
        let len = bar_len(e.total_minutes(), max_minutes, width);
        let _ = writeln!(
            out,
            "{label:<w$} |{bar:<width$}| {e}",
            w = longest_label,
            bar = BAR.to_string().repeat(len),
        );
    }

    let _ = write!(
        out,
        "Recommended: {}",
        report.recommended(modes).label
    );
    out
}

/// Bars scale linearly; any non-zero duration gets at least one cell.
fn bar_len(minutes: u32, max_minutes: u32, width: usize) -> usize {
    if max_minutes == 0 || minutes == 0 {
        return 0;
    }
    let scaled = (f64::from(minutes) / f64::from(max_minutes) * width as f64).round() as usize;
    scaled.clamp(1, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use route_core::{plan, CityRecord};

    fn london_paris() -> (RouteReport, ModeTable) {
        let modes = ModeTable::default();
        let london = CityRecord::new("London", "UK", 51.5074, -0.1278).unwrap();
        let paris = CityRecord::new("Paris", "France", 48.8566, 2.3522).unwrap();
        (plan(&london, &paris, &modes).unwrap(), modes)
    }

    #[test]
    fn bars_follow_ranking() {
        let (report, modes) = london_paris();
        let chart = render(&report, &modes, 20);
        let lines: Vec<_> = chart.lines().collect();

        assert_eq!(lines[0], "London to Paris (343.56 km)");
        // quickest first, slowest (car) last with a full bar
        assert!(lines[1].starts_with("Hyperloop"));
        assert!(lines[5].starts_with("Car"));
        assert!(lines[5].contains(&"#".repeat(20)));
        assert!(lines[5].ends_with("4h.38m."));
        assert_eq!(lines[6], "Recommended: Hyperloop");
    }

    #[test]
    fn bar_lengths() {
        assert_eq!(bar_len(0, 100, 40), 0);
        assert_eq!(bar_len(1, 1000, 40), 1);
        assert_eq!(bar_len(50, 100, 40), 20);
        assert_eq!(bar_len(100, 100, 40), 40);
        assert_eq!(bar_len(10, 0, 40), 0);
    }
}
