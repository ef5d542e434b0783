//! Shared string utilities for identifier legalization.

/// Merge `_`-separated words into a single camel-cased identifier
/// (e.g. "pet_name" -> "petName", or "PetName" with `lower_first` unset).
///
/// Each word's first letter is capitalized; when `lower_first` is set the
/// very first letter is lowercased instead. Characters other than `_` pass
/// through untouched, including ones that are not legal identifier
/// characters. Callers that need a fully legal identifier combine this with
/// [`sanitize_name`] or [`words_to_identifier`].
pub fn camelize(input: &str, lower_first: bool) -> String {
    let mut out = String::with_capacity(input.len());
    let mut boundary = true;
    for c in input.chars() {
        if c == '_' {
            boundary = true;
            continue;
        }
        if boundary {
            if lower_first && out.is_empty() {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            boundary = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Capitalize the first letter of a name, leaving the rest untouched
/// (e.g. "pet" -> "Pet").
pub fn initial_caps(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Replace every character that cannot appear in an identifier with `_`
/// (e.g. "get user (v2)" -> "get_user__v2_").
pub fn sanitize_name(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Lowercase `input`, capitalize the letter following each separator, and
/// strip the separators themselves (e.g. "SOLD OUT" -> "SoldOut" with a
/// space separator).
pub fn words_to_identifier(input: &str, separators: &[char]) -> String {
    let mut out = String::with_capacity(input.len());
    let mut boundary = true;
    for c in input.to_lowercase().chars() {
        if separators.contains(&c) {
            boundary = true;
            continue;
        }
        if boundary {
            out.extend(c.to_uppercase());
            boundary = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camelize_lower_first() {
        assert_eq!(camelize("pet_name", true), "petName");
        assert_eq!(camelize("call_return", true), "callReturn");
        assert_eq!(camelize("Active", true), "active");
        assert_eq!(camelize("fooBar", true), "fooBar");
        assert_eq!(camelize("", true), "");
    }

    #[test]
    fn test_camelize_upper_first() {
        assert_eq!(camelize("pet_name", false), "PetName");
        assert_eq!(camelize("pet", false), "Pet");
        assert_eq!(camelize("foo_bar_baz", false), "FooBarBaz");
    }

    #[test]
    fn test_camelize_passes_non_separators_through() {
        // Only `_` is a word boundary; everything else survives verbatim.
        assert_eq!(camelize(".5", true), ".5");
        assert_eq!(camelize("-1", false), "-1");
        assert_eq!(camelize("pet-id", false), "Pet-id");
    }

    #[test]
    fn test_initial_caps() {
        assert_eq!(initial_caps("pet"), "Pet");
        assert_eq!(initial_caps("store"), "Store");
        assert_eq!(initial_caps("Already"), "Already");
        assert_eq!(initial_caps(""), "");
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("get-user"), "get_user");
        assert_eq!(sanitize_name("get user (v2)"), "get_user__v2_");
        assert_eq!(sanitize_name("plain"), "plain");
    }

    #[test]
    fn test_words_to_identifier() {
        let separators = &['-', '_', ' ', ':', '(', ')'];
        assert_eq!(words_to_identifier("pet_name", separators), "PetName");
        assert_eq!(words_to_identifier("SOLD OUT", separators), "SoldOut");
        assert_eq!(words_to_identifier("foo-bar:baz", separators), "FooBarBaz");
        assert_eq!(words_to_identifier("(parens)", separators), "Parens");
        assert_eq!(words_to_identifier("", separators), "");
    }
}
