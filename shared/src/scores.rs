use std::fmt::Write;

/// Placeholder SEVI scores per state, keyed by the state name as published in the GeoJSON.
const SEVI_SCORES: &[(&str, f64)] = &[
    ("Delhi", 0.72),
    ("Karnataka", 0.58),
    ("Kerala", 0.99),
    ("Maharashtra", 0.65),
    ("Tamil Nadu", 0.49),
    ("Uttar Pradesh", 0.79),
    ("West Bengal", 0.68),
];

pub const MISSING_SCORE: &str = "N/A";

/// Read-only lookup from region name to a score in `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct ScoreTable {
    entries: &'static [(&'static str, f64)],
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::sevi()
    }
}

impl ScoreTable {
    pub const fn sevi() -> Self {
        Self {
            entries: SEVI_SCORES,
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, score)| *score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.entries.iter().copied()
    }
}

pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(value) => format!("{value:.2}"),
        None => MISSING_SCORE.to_string(),
    }
}

/// Tooltip body: bold region name, then the score line.
pub fn tooltip_html(name: &str, score: Option<f64>) -> String {
    let mut html = String::with_capacity(64);
    html.push_str("<strong>");
    push_escaped(&mut html, name);
    html.push_str("</strong><br>");
    let _ = write!(html, "SEVI Score: {}", format_score(score));
    html
}

fn push_escaped(buf: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => buf.push_str("&amp;"),
            '<' => buf.push_str("&lt;"),
            '>' => buf.push_str("&gt;"),
            '"' => buf.push_str("&quot;"),
            '\'' => buf.push_str("&#39;"),
            _ => buf.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_states_have_scores() {
        let table = ScoreTable::sevi();
        assert_eq!(table.get("Kerala"), Some(0.99));
        assert_eq!(table.get("Tamil Nadu"), Some(0.49));
        assert_eq!(table.get("kerala"), None);
        assert_eq!(table.iter().count(), 7);
    }

    #[test]
    fn all_scores_are_in_unit_range() {
        assert!(ScoreTable::sevi().iter().all(|(_, s)| (0.0..=1.0).contains(&s)));
    }

    #[test]
    fn score_formats_to_two_decimals() {
        assert_eq!(format_score(Some(0.7)), "0.70");
        assert_eq!(format_score(Some(0.999)), "1.00");
        assert_eq!(format_score(None), "N/A");
    }

    #[test]
    fn tooltip_for_unscored_region_shows_sentinel() {
        let html = tooltip_html("Goa", ScoreTable::sevi().get("Goa"));
        assert_eq!(html, "<strong>Goa</strong><br>SEVI Score: N/A");
    }

    #[test]
    fn tooltip_escapes_region_name() {
        let html = tooltip_html("Jammu & <Kashmir>", Some(0.5));
        assert_eq!(
            html,
            "<strong>Jammu &amp; &lt;Kashmir&gt;</strong><br>SEVI Score: 0.50"
        );
    }
}
