//! Text rendering of the scoreboard and the event log.

use std::fmt::Write;

use crate::models::{HockeyMatch, QUARTERS};

pub const EMPTY_LOG_PLACEHOLDER: &str = "No events yet.";

pub fn render_scoreboard(m: &HockeyMatch) -> String {
    let home = m.home();
    let away = m.away();
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "\n=== FIELD HOCKEY SCOREBOARD ===");
    let _ = writeln!(
        out,
        "{:<20} {} - {} {:<20}",
        home.name(),
        home.goals(),
        away.goals(),
        away.name()
    );
    if m.is_over() {
        let _ = writeln!(out, "Quarter: {}/{} (full time)\n", m.quarter(), QUARTERS);
    } else {
        let _ = writeln!(out, "Quarter: {}/{}\n", m.quarter(), QUARTERS);
    }
    let _ = writeln!(out, "Cards & PCs:");
    let _ = writeln!(out, "{:<20} {}", home.name(), home.stats_line());
    let _ = writeln!(out, "{:<20} {}", away.name(), away.stats_line());
    let _ = writeln!(out, "================================\n");

    out
}

pub fn render_event_log(m: &HockeyMatch) -> String {
    let mut out = String::from("\n--- Event Log ---\n");

    if m.events().is_empty() {
        out.push_str(EMPTY_LOG_PLACEHOLDER);
        out.push('\n');
    } else {
        for event in m.events() {
            let _ = writeln!(out, "{event}");
        }
    }
    out.push_str("-----------------\n\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CardKind, TeamSide};

    #[test]
    fn test_scoreboard_layout() {
        let mut m = HockeyMatch::new("A", "B");
        m.goal_for(TeamSide::Home);
        m.card_for(TeamSide::Away, CardKind::Yellow);
        m.penalty_corner_for(TeamSide::Home);

        let expected = format!(
            "\n=== FIELD HOCKEY SCOREBOARD ===\n\
             {:<20} 1 - 0 {:<20}\n\
             Quarter: 1/4\n\n\
             Cards & PCs:\n\
             {:<20} 0G 0Y 0R 1PC\n\
             {:<20} 0G 1Y 0R 0PC\n\
             ================================\n\n",
            "A", "B", "A", "B"
        );
        assert_eq!(render_scoreboard(&m), expected);
    }

    #[test]
    fn test_scoreboard_marks_full_time() {
        let mut m = HockeyMatch::new("A", "B");
        for _ in 0..QUARTERS {
            m.advance_quarter();
        }
        assert!(render_scoreboard(&m).contains("Quarter: 4/4 (full time)\n"));
    }

    #[test]
    fn test_empty_event_log() {
        let m = HockeyMatch::new("A", "B");
        assert_eq!(
            render_event_log(&m),
            "\n--- Event Log ---\nNo events yet.\n-----------------\n\n"
        );
    }

    #[test]
    fn test_event_log_in_order() {
        let mut m = HockeyMatch::new("A", "B");
        m.goal_for(TeamSide::Away);
        m.advance_quarter();

        assert_eq!(
            render_event_log(&m),
            "\n--- Event Log ---\n\
             Q1 - B goal!\n\
             Q1 - === End of Q1 ===\n\
             Q2 - === Start of Q2 ===\n\
             -----------------\n\n"
        );
    }
}
