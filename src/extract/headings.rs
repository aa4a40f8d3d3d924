//! Heading classification for interview metadata
//!
//! Interview pages carry their metadata as a loose run of `<h3>` headings
//! with no markup distinguishing a venue from a team from a session label.
//! Classification is an ordered rule table evaluated against each heading in
//! document order: the first rule whose predicate matches consumes the
//! heading, and a rule only fills its field the first time (a heading that
//! matches an already-filled field is consumed without effect). The
//! vocabularies are closed, hand-maintained lists; headings outside them
//! simply leave their field empty.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a full month-name date like "October 4, 2023".
static FULL_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-z]+\s+\d{1,2},?\s+\d{4}$").expect("FULL_DATE regex")
});

const VENUE_KEYWORDS: [&str; 4] = ["field", "stadium", "park", "center"];

const SESSION_KEYWORDS: [&str; 3] = ["press", "conference", "session"];

/// Venue keywords for the late, comma-separated "City, Venue Arena" form.
const SECONDARY_VENUE_KEYWORDS: [&str; 5] = ["field", "stadium", "park", "center", "arena"];

/// One token per MLB club, lowercase. "indians" kept alongside "guardians"
/// because older transcripts predate the rename.
const TEAM_TOKENS: [&str; 30] = [
    "twins",
    "yankees",
    "sox",
    "mets",
    "dodgers",
    "braves",
    "guardians",
    "angels",
    "mariners",
    "athletics",
    "rangers",
    "royals",
    "tigers",
    "rays",
    "orioles",
    "blue jays",
    "nationals",
    "phillies",
    "marlins",
    "cardinals",
    "cubs",
    "brewers",
    "pirates",
    "reds",
    "astros",
    "giants",
    "padres",
    "diamondbacks",
    "rockies",
    "indians",
];

/// True when the text is a full display date ("October 4, 2023").
pub fn is_full_date(text: &str) -> bool {
    FULL_DATE.is_match(text)
}

/// Fields recoverable from the heading sequence. All optional; empty strings
/// mean the page never yielded the field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeadingFields {
    pub date: String,
    pub player_name: String,
    pub venue: String,
    pub team: String,
    pub session_type: String,
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Date,
    PlayerName,
    Venue,
    SessionType,
    Team,
}

struct Rule {
    slot: Slot,
    applies: fn(text: &str, lower: &str, index: usize) -> bool,
}

fn date_rule(text: &str, _lower: &str, _index: usize) -> bool {
    is_full_date(text)
}

// Any non-date heading; ordered after the date rule so the first plain
// heading becomes the player name.
fn player_rule(_text: &str, _lower: &str, _index: usize) -> bool {
    true
}

fn venue_rule(_text: &str, lower: &str, _index: usize) -> bool {
    VENUE_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

fn session_rule(_text: &str, lower: &str, _index: usize) -> bool {
    SESSION_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

fn team_rule(_text: &str, lower: &str, _index: usize) -> bool {
    TEAM_TOKENS.iter().any(|kw| lower.contains(kw))
}

// Late venue form like "St. Louis, Busch Stadium": only trusted when it
// contains a comma and sits past the metadata block (index >= 3).
fn secondary_venue_rule(_text: &str, lower: &str, index: usize) -> bool {
    lower.contains(',')
        && index >= 3
        && SECONDARY_VENUE_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Classification policy, highest precedence first.
const RULES: [Rule; 6] = [
    Rule {
        slot: Slot::Date,
        applies: date_rule,
    },
    Rule {
        slot: Slot::PlayerName,
        applies: player_rule,
    },
    Rule {
        slot: Slot::Venue,
        applies: venue_rule,
    },
    Rule {
        slot: Slot::SessionType,
        applies: session_rule,
    },
    Rule {
        slot: Slot::Team,
        applies: team_rule,
    },
    Rule {
        slot: Slot::Venue,
        applies: secondary_venue_rule,
    },
];

impl HeadingFields {
    fn slot_filled(&self, slot: Slot) -> bool {
        match slot {
            Slot::Date => !self.date.is_empty(),
            Slot::PlayerName => !self.player_name.is_empty(),
            Slot::Venue => !self.venue.is_empty(),
            Slot::SessionType => !self.session_type.is_empty(),
            Slot::Team => !self.team.is_empty(),
        }
    }

    fn fill(&mut self, slot: Slot, text: &str) {
        let field = match slot {
            Slot::Date => &mut self.date,
            Slot::PlayerName => &mut self.player_name,
            Slot::Venue => &mut self.venue,
            Slot::SessionType => &mut self.session_type,
            Slot::Team => &mut self.team,
        };
        if field.is_empty() {
            *field = text.to_string();
        }
    }
}

/// Classifies a heading sequence into metadata fields.
///
/// Headings are visited top-to-bottom; each is consumed by the first matching
/// rule, and each field is set at most once. Empty headings are skipped.
/// A skip rule note: the player-name rule matches anything, so it must stay
/// directly after the date rule.
pub fn classify(headings: &[String]) -> HeadingFields {
    let mut fields = HeadingFields::default();

    for (index, heading) in headings.iter().enumerate() {
        let text = heading.trim();
        if text.is_empty() {
            continue;
        }
        let lower = text.to_lowercase();

        for rule in &RULES {
            // The player rule is special: it must not swallow headings that a
            // lower-precedence vocabulary rule would classify once the name
            // is taken.
            if matches!(rule.slot, Slot::PlayerName) && fields.slot_filled(Slot::PlayerName) {
                continue;
            }
            if (rule.applies)(text, &lower, index) {
                fields.fill(rule.slot, text);
                break;
            }
        }
    }

    fields
}
