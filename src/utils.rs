

/// Splits a comma-separated cell ("niacinamide, glycerin, clay") into trimmed items.
pub fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}


/// Capitalizes every letter that follows a non-letter ("under-eye circles" -> "Under-Eye Circles").
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}


#[inline]
pub fn safe_truncate_ellipsis(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        format!("{}...", s.chars().take(max_chars).collect::<String>())
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list("salicylic acid,  niacinamide , tea tree oil"),
            vec!["salicylic acid", "niacinamide", "tea tree oil"]
        );
        assert!(split_list("").is_empty());
        assert_eq!(split_list("clay, ,"), vec!["clay"]);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("oily t-zone"), "Oily T-Zone");
        assert_eq!(title_case("under-eye circles"), "Under-Eye Circles");
        assert_eq!(title_case("coenzyme Q10"), "Coenzyme Q10");
        assert_eq!(title_case("AHA"), "Aha");
    }

    #[test]
    fn test_safe_truncate_ellipsis() {
        assert_eq!(safe_truncate_ellipsis("hello world", 5), "hello...");
        assert_eq!(safe_truncate_ellipsis("hi", 10), "hi");
        assert_eq!(safe_truncate_ellipsis("Привет мир", 6), "Привет...");
    }
}
