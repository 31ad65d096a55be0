//! String canonicalization shared by every matcher.

/// Spellings of the gram unit accepted in weight options.
const GRAM_UNITS: &[&str] = &["g", "gm", "gms", "gr", "grm", "grms", "gram", "grams"];

/// Spellings of the kilogram unit accepted in weight options.
const KILOGRAM_UNITS: &[&str] = &["kg", "kgs", "kilo", "kilos", "kilogram", "kilograms"];

/// Lower-case, trim and collapse internal runs of whitespace to a single space.
pub fn normalize(s: &str) -> String {
    s.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Like [`normalize`], then `None` maps to the empty string.
pub fn normalize_opt(s: Option<&str>) -> String {
    s.map(normalize).unwrap_or_default()
}

/// Canonical weight token: whitespace removed and unit spelling unified,
/// so `"500 gm"`, `"500gms"` and `"500g"` all become `"500g"`.
///
/// Text that is not `<number><unit>` with a known unit only gets the
/// case/whitespace treatment. The result is a fixed point.
pub fn normalize_weight(s: &str) -> String {
    let compact: String = s
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    let split = compact
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(compact.len());
    let (amount, unit) = compact.split_at(split);

    if amount.is_empty() || !amount.chars().any(|c| c.is_ascii_digit()) {
        return compact;
    }

    if GRAM_UNITS.contains(&unit) {
        format!("{amount}g")
    } else if KILOGRAM_UNITS.contains(&unit) {
        format!("{amount}kg")
    } else {
        compact
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_case_and_whitespace() {
        assert_eq!(normalize("  Dark   Chocolate\tCake "), "dark chocolate cake");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize_opt(None), "");
        assert_eq!(normalize_opt(Some(" Vanilla ")), "vanilla");
    }

    #[test]
    fn test_normalize_weight_grams() {
        for input in ["500 gm", "500gms", "500g", "500 G", " 500 grams "] {
            assert_eq!(normalize_weight(input), "500g", "input: {input:?}");
        }
    }

    #[test]
    fn test_normalize_weight_kilograms() {
        for input in ["1 Kg", "1kgs", "1kg", "1 KILO"] {
            assert_eq!(normalize_weight(input), "1kg", "input: {input:?}");
        }
        assert_eq!(normalize_weight("1.5 kg"), "1.5kg");
    }

    #[test]
    fn test_normalize_weight_passes_other_text_through() {
        assert_eq!(normalize_weight("Half Kg"), "halfkg");
        assert_eq!(normalize_weight("2 Tier"), "2tier");
        assert_eq!(normalize_weight(""), "");
        assert_eq!(normalize_weight("1 lb"), "1lb");
    }

    #[test]
    fn test_normalize_weight_idempotent() {
        for input in ["500 gm", "1 Kgs", "Half Kg", "2 tier", "", "..g", "1.5 KILOGRAMS"] {
            let once = normalize_weight(input);
            assert_eq!(normalize_weight(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_normalize_idempotent() {
        let once = normalize("  Red  VELVET ");
        assert_eq!(normalize(&once), once);
    }
}
