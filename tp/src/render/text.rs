//! Plain-terminal rendering of a plan view (used by `tp plan`)

use colored::{ColoredString, Colorize};

use super::view::PlanView;

/// Render a plan view as terminal text
///
/// With `color` off the output is plain ASCII tags, suitable for pipes.
pub fn render_text(view: &PlanView<'_>, color: bool) -> String {
    let style = |s: ColoredString| if color { s.to_string() } else { s.clear().to_string() };

    let mut out = String::new();
    out.push_str(&style(
        format!("Your {}-Day Adventure in {}", view.trip_days, view.destination)
            .magenta()
            .bold(),
    ));
    out.push('\n');

    for day in &view.days {
        out.push('\n');
        out.push_str(&style(day.heading().bold()));
        out.push_str("  ");
        out.push_str(&style(format!("({})", day.daily_budget).yellow()));
        out.push('\n');

        for entry in &day.entries {
            let marker = if color {
                entry.category.glyph()
            } else {
                entry.category.tag()
            };
            let time = format!("{:>10}", entry.time);
            out.push_str(&format!(
                "  {}  {} {}  {}\n",
                style(time.cyan().bold()),
                marker,
                entry.description,
                style(entry.estimated_cost.green()),
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItineraryActivity, ItineraryDay, ItineraryPlan};

    fn plan() -> ItineraryPlan {
        ItineraryPlan {
            destination: "Tokyo, Japan".to_string(),
            itinerary: vec![
                ItineraryDay {
                    day: 2,
                    title: "Markets".to_string(),
                    daily_budget: "~$35".to_string(),
                    activities: vec![ItineraryActivity {
                        time: "Morning".to_string(),
                        description: "Tsukiji outer market".to_string(),
                        estimated_cost: "~$15".to_string(),
                    }],
                },
                ItineraryDay {
                    day: 1,
                    title: "Arrival".to_string(),
                    daily_budget: "~$20".to_string(),
                    activities: vec![ItineraryActivity {
                        time: "Evening".to_string(),
                        description: "Settle into the hostel".to_string(),
                        estimated_cost: "Free".to_string(),
                    }],
                },
            ],
        }
    }

    #[test]
    fn test_plain_rendering() {
        let plan = plan();
        let text = render_text(&PlanView::from_plan(&plan), false);

        assert!(text.starts_with("Your 5-Day Adventure in Tokyo, Japan\n"));
        assert!(text.contains("Day 1: Arrival  (~$20)"));
        assert!(text.contains("[food] Tsukiji outer market  ~$15"));
        assert!(text.contains("[activity] Settle into the hostel  Free"));
        assert!(!text.contains('\u{1b}'));

        let first = text.find("Day 1").unwrap();
        let second = text.find("Day 2").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_colored_rendering_uses_glyphs() {
        let plan = plan();
        let text = render_text(&PlanView::from_plan(&plan), true);
        assert!(text.contains("🍜"));
        assert!(text.contains("Tsukiji outer market"));
    }

    #[test]
    fn test_colored_times_keep_alignment() {
        let plan = plan();
        colored::control::set_override(true);
        let text = render_text(&PlanView::from_plan(&plan), true);
        colored::control::unset_override();

        assert!(text.contains('\u{1b}'));
        assert!(text.contains("   Morning"));
        assert!(text.contains("   Evening"));
    }
}
