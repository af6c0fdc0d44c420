//! Human-facing summary pieces of a pathway: the total duration string and
//! the encouragement message.

const HOURS_PER_WEEK: u32 = 10;
const WEEKS_PER_MONTH: u32 = 4;
/// Above this many weeks the duration is reported in months.
const MAX_WEEKS_SHOWN: u32 = 8;

/// `ceil(hours / 10)` weeks, switching to `ceil(weeks / 4)` months once the
/// week count exceeds 8. Non-decreasing in `total_hours`.
pub fn format_duration(total_hours: u32) -> String {
    let weeks = total_hours.div_ceil(HOURS_PER_WEEK);
    if weeks > MAX_WEEKS_SHOWN {
        plural(weeks.div_ceil(WEEKS_PER_MONTH), "month")
    } else {
        plural(weeks, "week")
    }
}

fn plural(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Encouragement
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum GapCount {
    Exactly(usize),
    AtLeast(usize),
}

impl GapCount {
    fn matches(self, count: usize) -> bool {
        match self {
            GapCount::Exactly(n) => count == n,
            GapCount::AtLeast(n) => count >= n,
        }
    }
}

/// Evaluated in order; first match wins.
const ENCOURAGEMENT_RULES: &[(GapCount, &str)] = &[
    (
        GapCount::Exactly(0),
        "You already have the core skills for this role. Time to polish your portfolio and start applying!",
    ),
    (
        GapCount::Exactly(1),
        "You're one skill away from this role. A focused push will get you there.",
    ),
    (
        GapCount::Exactly(2),
        "Two skills stand between you and this role. Steady weekly progress will close the gap.",
    ),
    (
        GapCount::AtLeast(3),
        "This is a meaningful career move. Take it one skill at a time and build on what you already know.",
    ),
];

const GENERIC_ENCOURAGEMENT: &str =
    "Every skill you add brings you closer to your goal. Keep going!";

pub fn encouragement_for(gap_count: usize) -> &'static str {
    select_encouragement(ENCOURAGEMENT_RULES, gap_count)
}

fn select_encouragement(rules: &[(GapCount, &'static str)], gap_count: usize) -> &'static str {
    rules
        .iter()
        .find(|(rule, _)| rule.matches(gap_count))
        .map(|(_, message)| *message)
        .unwrap_or(GENERIC_ENCOURAGEMENT)
}
