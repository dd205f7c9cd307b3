//! Display name to basketball-reference page slug conversion.
//!
//! Player pages live at `/players/<initial>/<family5><given2><suffix>.html`,
//! where the path fragment is derived from the player's name alone. The
//! derivation here is a heuristic: it lowercases, strips punctuation and
//! honorifics, and folds accented characters through a finite table. The fold
//! is lossy on purpose; it matches what the site does to build its URLs, not
//! a general transliteration.

use crate::error::{BbrError, Result};

pub(crate) const BASE_URL: &str = "https://www.basketball-reference.com";

const DEFAULT_PAGE_SUFFIX: &str = "01";

/// Players whose derived slug collides with an earlier player of the same
/// key, keyed by the literal display name as it appears in the roster.
const SUFFIX_OVERRIDES: &[(&str, &str)] = &[
    ("Jaren Jackson Jr.", "02"),
    ("Gary Payton II", "02"),
    ("Tim Hardaway Jr.", "02"),
    ("Larry Nance Jr.", "02"),
];

/// Accented characters seen in player names, folded to their closest ASCII
/// letter. Anything not listed here that survives cleanup is dropped, so an
/// unmapped accent shortens the fragment instead of failing.
const DIACRITIC_FOLDS: &[(char, char)] = &[
    ('á', 'a'),
    ('à', 'a'),
    ('â', 'a'),
    ('ä', 'a'),
    ('ã', 'a'),
    ('å', 'a'),
    ('ā', 'a'),
    ('ç', 'c'),
    ('ć', 'c'),
    ('č', 'c'),
    ('đ', 'd'),
    ('é', 'e'),
    ('è', 'e'),
    ('ê', 'e'),
    ('ë', 'e'),
    ('ē', 'e'),
    ('ė', 'e'),
    ('ģ', 'g'),
    ('í', 'i'),
    ('î', 'i'),
    ('ï', 'i'),
    ('ņ', 'n'),
    ('ñ', 'n'),
    ('ń', 'n'),
    ('ó', 'o'),
    ('ò', 'o'),
    ('ô', 'o'),
    ('ö', 'o'),
    ('õ', 'o'),
    ('ø', 'o'),
    ('š', 's'),
    ('ú', 'u'),
    ('ù', 'u'),
    ('û', 'u'),
    ('ü', 'u'),
    ('ū', 'u'),
    ('ý', 'y'),
    ('ž', 'z'),
];

/// Trailing tokens that are part of the name but not of the slug.
const GENERATIONAL_SUFFIXES: &[&str] = &["jr", "sr", "ii", "iii", "iv", "v"];

/// Derive the page slug for a display name: first letter of the family name,
/// a slash, the first five letters of the family name and the first two of
/// the given name, all lowercase alphanumeric.
///
/// Shorter names simply yield shorter fragments; `NameParse` is returned only
/// when fewer than two usable tokens remain after cleanup.
pub fn player_slug(name: &str) -> Result<String> {
    let cleaned = name
        .trim()
        .trim_end_matches('*')
        .replace(['\'', '\u{2019}', '.'], "");

    let mut tokens: Vec<&str> = cleaned.split_whitespace().collect();
    while tokens.len() > 2 {
        let is_suffix = tokens
            .last()
            .map(|t| GENERATIONAL_SUFFIXES.contains(&t.to_lowercase().as_str()))
            .unwrap_or(false);
        if !is_suffix {
            break;
        }
        tokens.pop();
    }

    if tokens.len() < 2 {
        return Err(BbrError::NameParse {
            name: name.to_string(),
        });
    }

    // Middle tokens are ignored; the site keys on given + family name only.
    let given = normalize_token(tokens[0]);
    let family = normalize_token(tokens[tokens.len() - 1]);

    let initial = match family.chars().next() {
        Some(c) => c,
        None => {
            return Err(BbrError::NameParse {
                name: name.to_string(),
            })
        }
    };
    if given.is_empty() {
        return Err(BbrError::NameParse {
            name: name.to_string(),
        });
    }

    let family_frag: String = family.chars().take(5).collect();
    let given_frag: String = given.chars().take(2).collect();
    Ok(format!("{initial}/{family_frag}{given_frag}"))
}

/// Build the full player page URL, applying the suffix override table for
/// names whose default slug is taken by another player.
pub fn player_url(name: &str) -> Result<String> {
    let slug = player_slug(name)?;
    let suffix = SUFFIX_OVERRIDES
        .iter()
        .find(|(n, _)| *n == name.trim())
        .map(|(_, s)| *s)
        .unwrap_or(DEFAULT_PAGE_SUFFIX);
    Ok(format!("{BASE_URL}/players/{slug}{suffix}.html"))
}

fn normalize_token(token: &str) -> String {
    token
        .chars()
        .flat_map(char::to_lowercase)
        .map(fold_diacritic)
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

fn fold_diacritic(c: char) -> char {
    DIACRITIC_FOLDS
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
        .unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_slug(name: &str, expected: &str) {
        assert_eq!(player_slug(name).unwrap(), expected, "name: {name}");
    }

    #[test]
    fn plain_two_part_name() {
        assert_slug("Killian Hayes", "h/hayeski");
    }

    #[test]
    fn short_family_name_yields_short_fragment() {
        assert_slug("Yao Ming", "m/mingya");
    }

    #[test]
    fn apostrophes_and_periods_are_stripped() {
        assert_slug("Shaquille O'Neal", "o/onealsh");
        assert_slug("C.J. McCollum", "m/mccolcj");
    }

    #[test]
    fn diacritics_fold_to_ascii() {
        assert_slug("Nikola Jokić", "j/jokicni");
        assert_slug("Luka Dončić", "d/doncilu");
        assert_slug("Kristaps Porziņģis", "p/porzikr");
    }

    #[test]
    fn honorific_marker_is_stripped() {
        // Hall of Fame names carry a trailing asterisk on leaderboard pages.
        assert_slug("George Mikan*", "m/mikange");
    }

    #[test]
    fn generational_suffix_is_dropped() {
        assert_slug("Jaren Jackson Jr.", "j/jacksja");
        assert_slug("Gary Payton II", "p/paytoga");
    }

    #[test]
    fn middle_tokens_are_ignored() {
        assert_slug("Karl Anthony Towns", "t/townska");
    }

    #[test]
    fn idempotent_on_already_normalized_input() {
        let first = player_slug("killian hayes").unwrap();
        assert_eq!(first, "h/hayeski");
        // Feeding the fragments back through changes nothing.
        assert_eq!(player_slug("ki hayes").unwrap(), "h/hayeski");
    }

    #[test]
    fn slug_matches_expected_shape() {
        for name in [
            "Killian Hayes",
            "Shaquille O'Neal",
            "Nikola Jokić",
            "Yao Ming",
            "Karl Anthony Towns",
            "George Mikan*",
        ] {
            let slug = player_slug(name).unwrap();
            let (initial, rest) = slug.split_once('/').expect("slug has a slash");
            assert!(!initial.is_empty());
            assert!((1..=7).contains(&rest.len()), "slug: {slug}");
            assert!(slug
                .chars()
                .all(|c| c == '/' || c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn single_token_is_an_error() {
        assert!(matches!(
            player_slug("Nenê"),
            Err(BbrError::NameParse { .. })
        ));
    }

    #[test]
    fn empty_after_cleanup_is_an_error() {
        assert!(matches!(player_slug("* *"), Err(BbrError::NameParse { .. })));
        assert!(matches!(player_slug(""), Err(BbrError::NameParse { .. })));
    }

    #[test]
    fn default_page_url() {
        assert_eq!(
            player_url("Killian Hayes").unwrap(),
            "https://www.basketball-reference.com/players/h/hayeski01.html"
        );
    }

    #[test]
    fn override_page_url() {
        assert_eq!(
            player_url("Jaren Jackson Jr.").unwrap(),
            "https://www.basketball-reference.com/players/j/jacksja02.html"
        );
    }
}
