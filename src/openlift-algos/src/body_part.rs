/// Canonical identifier plus display label for a muscle or body
/// region, independent of the capitalization and separators used in
/// the source name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BodyPart {
    pub key: String,
    pub label: String,
}

/// Key substituted when an exercise carries no body-part tags at all.
pub const GENERAL_KEY: &str = "full_body";

impl BodyPart {
    /// "Lower_Back", "lower-back" and "Lower Back" all end up as the
    /// key `lower_back` with the label `Lower Back`. Parsing a key or
    /// a label again returns the same key.
    pub fn parse(raw: &str) -> BodyPart {
        let words = raw
            .split(|c: char| c.is_whitespace() || matches!(c, '-' | '_' | '/'))
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect::<Vec<_>>();

        if words.is_empty() {
            return Self::general();
        }

        let label = words
            .iter()
            .map(|w| title_case(w))
            .collect::<Vec<_>>()
            .join(" ");

        BodyPart {
            key: words.join("_"),
            label,
        }
    }

    pub fn general() -> BodyPart {
        BodyPart {
            key: GENERAL_KEY.to_string(),
            label: "Full Body".to_string(),
        }
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_and_case_variants_collapse() {
        let variants = ["Lower_Back", "lower-back", "Lower Back", "LOWER  BACK"];
        for raw in variants {
            let part = BodyPart::parse(raw);
            assert_eq!(part.key, "lower_back", "raw: {raw}");
            assert_eq!(part.label, "Lower Back", "raw: {raw}");
        }
    }

    #[test]
    fn parse_is_idempotent() {
        for raw in ["Chest", "rear delts", "hip/flexors"] {
            let first = BodyPart::parse(raw);
            assert_eq!(BodyPart::parse(&first.key), first);
            assert_eq!(BodyPart::parse(&first.label), first);
        }
    }

    #[test]
    fn single_word_part() {
        let part = BodyPart::parse("chest");
        assert_eq!(part.key, "chest");
        assert_eq!(part.label, "Chest");
    }

    #[test]
    fn unusable_name_maps_to_general() {
        assert_eq!(BodyPart::parse("").key, GENERAL_KEY);
        assert_eq!(BodyPart::parse("-_/").key, GENERAL_KEY);
        assert_eq!(BodyPart::general().label, "Full Body");
    }
}
