use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::{SLUG_FALLBACK, SLUG_MAX_LEN};

lazy_static! {
    static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^a-z0-9]+").expect("valid slug regex");
}

fn transliterate(ch: char) -> Option<&'static str> {
    let latin = match ch {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' | 'ё' | 'э' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' | 'й' => "i",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "c",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' | 'ь' => "",
        'ы' => "y",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(latin)
}

/// URL-safe room slug with the default length limit.
pub fn slugify(input: &str) -> String {
    slugify_with_limit(input, SLUG_MAX_LEN)
}

/// Lowercase, transliterate Cyrillic, collapse everything outside `[a-z0-9]`
/// into single dashes and cut to `max_len`. Never returns an empty string.
pub fn slugify_with_limit(input: &str, max_len: usize) -> String {
    let mut latin = String::with_capacity(input.len());
    for ch in input.to_lowercase().chars() {
        match transliterate(ch) {
            Some(replacement) => latin.push_str(replacement),
            None => latin.push(ch),
        }
    }

    let dashed = NON_SLUG_CHARS.replace_all(&latin, "-");
    let trimmed = dashed.trim_matches('-');

    // Only ASCII survives the regex, so byte slicing is safe.
    let cut = &trimmed[..trimmed.len().min(max_len)];
    let slug = cut.trim_end_matches('-');

    if slug.is_empty() {
        SLUG_FALLBACK.to_string()
    } else {
        slug.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transliterates_and_normalizes() {
        assert_eq!(slugify("Команда Аналитики"), "komanda-analitiki");
        assert_eq!(slugify("QA / Mobile"), "qa-mobile");
        assert_eq!(slugify("Команда Team 123"), "komanda-team-123");
        assert_eq!(slugify("Frontend / Backend"), "frontend-backend");
    }

    #[test]
    fn test_full_alphabet() {
        let expected = "abvgdeezhziiklmnoprstufhcchshschyeyuya";
        assert_eq!(slugify("АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ"), expected);
        assert_eq!(slugify("абвгдеёжзийклмнопрстуфхцчшщъыьэюя"), expected);
    }

    #[test]
    fn test_collapses_and_trims_dashes() {
        assert_eq!(slugify("  test -- name  "), "test-name");
        assert_eq!(slugify("-test-"), "test");
        assert_eq!(slugify("---test---"), "test");
        assert_eq!(slugify("a---b---c"), "a-b-c");
        assert_eq!(slugify("Team@#$%^&*()Name"), "team-name");
        assert_eq!(slugify("Test!!!Name???"), "test-name");
    }

    #[test]
    fn test_falls_back_when_nothing_survives() {
        assert_eq!(slugify(""), "team");
        assert_eq!(slugify("   "), "team");
        assert_eq!(slugify("\t\n"), "team");
        assert_eq!(slugify("中文"), "team");
        assert_eq!(slugify("日本語"), "team");
    }

    #[test]
    fn test_keeps_alphanumerics() {
        assert_eq!(slugify("Team123Name"), "team123name");
        assert_eq!(slugify("Test-Name-2024"), "test-name-2024");
        assert_eq!(slugify("  123  "), "123");
        assert_eq!(slugify("TEAM NAME"), "team-name");
    }

    #[test]
    fn test_respects_length_limit() {
        let long = "a".repeat(100);
        assert_eq!(slugify_with_limit(&long, 20).len(), 20);
        assert!(slugify(&long).len() <= 50);
    }

    #[test]
    fn test_cut_does_not_leave_trailing_dash() {
        assert_eq!(slugify_with_limit("abcd efgh", 5), "abcd");
    }
}
