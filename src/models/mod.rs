use serde::{Deserialize, Serialize};

/// Handedness, stored as a single-letter code in the datastore
/// and exposed as the full word in API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handedness {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "A")]
    Ambi,
}

impl Handedness {
    /// Parse the query-parameter form (`left`/`right`/`ambi`, case-insensitive).
    pub fn from_param(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "left" => Some(Handedness::Left),
            "right" => Some(Handedness::Right),
            "ambi" => Some(Handedness::Ambi),
            _ => None,
        }
    }

    pub fn as_word(&self) -> &'static str {
        match self {
            Handedness::Left => "left",
            Handedness::Right => "right",
            Handedness::Ambi => "ambi",
        }
    }
}

/// Player record as persisted in the datastore file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pid: i64,
    pub fname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lname: Option<String>,
    pub handed: Handedness,
    pub is_active: bool,
    pub balance_usd: String,
}

impl Player {
    pub fn to_view(&self) -> PlayerView {
        let name = match &self.lname {
            Some(lname) => format!("{} {}", self.fname, lname),
            None => self.fname.clone(),
        };
        PlayerView {
            id: self.pid,
            name,
            handed: self.handed.as_word(),
            is_active: self.is_active,
            balance_usd: self.balance_usd.clone(),
        }
    }
}

/// External representation for API responses: first/last names are
/// collapsed into a single display name and the handedness code is
/// expanded to its full word.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub id: i64,
    pub name: String,
    pub handed: &'static str,
    pub is_active: bool,
    pub balance_usd: String,
}

/// Name fields must be one or more ASCII letters. An empty string is a
/// present-but-invalid value, not an absent one.
pub fn is_valid_name(value: &str) -> bool {
    let re = regex::Regex::new(r"^[a-zA-Z]+$").expect("name pattern");
    re.is_match(value)
}

/// Parse a USD amount: finite, non-negative, and unchanged by rounding to
/// two decimal places.
pub fn parse_currency(value: &str) -> Option<f64> {
    let amount: f64 = value.trim().parse().ok()?;
    if !amount.is_finite() || amount < 0.0 {
        return None;
    }
    let rounded: f64 = format!("{amount:.2}").parse().ok()?;
    if rounded != amount {
        return None;
    }
    Some(amount)
}

/// Format a USD amount with exactly two fraction digits.
pub fn format_currency(amount: f64) -> String {
    format!("{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handedness_parses_case_insensitively() {
        assert_eq!(Handedness::from_param("left"), Some(Handedness::Left));
        assert_eq!(Handedness::from_param("RIGHT"), Some(Handedness::Right));
        assert_eq!(Handedness::from_param("Ambi"), Some(Handedness::Ambi));
        assert_eq!(Handedness::from_param("up"), None);
        assert_eq!(Handedness::from_param(""), None);
    }

    #[test]
    fn name_validation_requires_letters() {
        assert!(is_valid_name("John"));
        assert!(is_valid_name("McTavish"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("John3"));
        assert!(!is_valid_name("Mary Jane"));
        assert!(!is_valid_name("O'Brien"));
    }

    #[test]
    fn currency_accepts_two_decimal_amounts() {
        assert_eq!(parse_currency("10"), Some(10.0));
        assert_eq!(parse_currency("5.00"), Some(5.0));
        assert_eq!(parse_currency("0.5"), Some(0.5));
        assert_eq!(parse_currency("07.50"), Some(7.5));
    }

    #[test]
    fn currency_rejects_malformed_amounts() {
        assert_eq!(parse_currency("-1"), None);
        assert_eq!(parse_currency("1.234"), None);
        assert_eq!(parse_currency("abc"), None);
        assert_eq!(parse_currency(""), None);
        assert_eq!(parse_currency("NaN"), None);
        assert_eq!(parse_currency("inf"), None);
    }

    #[test]
    fn view_collapses_names() {
        let player = Player {
            pid: 1,
            fname: "John".to_string(),
            lname: Some("Smith".to_string()),
            handed: Handedness::Left,
            is_active: true,
            balance_usd: "10.00".to_string(),
        };
        let view = player.to_view();
        assert_eq!(view.name, "John Smith");
        assert_eq!(view.handed, "left");

        let solo = Player { lname: None, ..player };
        assert_eq!(solo.to_view().name, "John");
    }
}
