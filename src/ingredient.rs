use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::Ingredient;

/// `<quantity><unit> <name>`, where the unit is glued to the quantity and may be empty.
static QUANTITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([0-9.]+)([a-zàâäçéèêëîïôöùûüœ]*) (.*)$")
        .expect("Invalid ingredient pattern")
});

/// Parse one ingredient line such as `"200g farine"` or `"sel"`.
///
/// Lines without a leading quantity become a bare name. Returns `None` when the
/// line looks like it starts with a quantity that is not actually a number
/// (e.g. `"1.2.3 oeufs"`); callers drop those lines.
pub fn parse_ingredient(line: &str) -> Option<Ingredient> {
    let Some(captures) = QUANTITY_PATTERN.captures(line) else {
        return Some(Ingredient::named(line));
    };

    let quantity = match captures[1].parse::<f64>() {
        Ok(quantity) if quantity.is_finite() => quantity,
        _ => {
            debug!("Dropping ingredient with unreadable quantity: {:?}", line);
            return None;
        }
    };
    let unit = captures
        .get(2)
        .map(|m| m.as_str())
        .filter(|unit| !unit.is_empty())
        .map(String::from);

    Some(Ingredient {
        quantity: Some(quantity),
        unit,
        name: captures[3].to_string(),
    })
}

/// Parse every line, silently omitting the ones [`parse_ingredient`] rejects.
pub fn parse_ingredients<S: AsRef<str>>(lines: &[S]) -> Vec<Ingredient> {
    lines
        .iter()
        .filter_map(|line| parse_ingredient(line.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quantified(quantity: f64, unit: Option<&str>, name: &str) -> Ingredient {
        Ingredient {
            quantity: Some(quantity),
            unit: unit.map(String::from),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_quantity_with_unit() {
        assert_eq!(
            parse_ingredient("200g farine"),
            Some(quantified(200.0, Some("g"), "farine"))
        );
        assert_eq!(
            parse_ingredient("1.5l lait entier"),
            Some(quantified(1.5, Some("l"), "lait entier"))
        );
    }

    #[test]
    fn test_accented_unit() {
        assert_eq!(
            parse_ingredient("2cuillères sel"),
            Some(quantified(2.0, Some("cuillères"), "sel"))
        );
        assert_eq!(
            parse_ingredient("3CUILLÈRES sucre"),
            Some(quantified(3.0, Some("CUILLÈRES"), "sucre"))
        );
    }

    #[test]
    fn test_quantity_without_unit() {
        assert_eq!(
            parse_ingredient("6 oeufs"),
            Some(quantified(6.0, None, "oeufs"))
        );
        // A unit separated by a space belongs to the name
        assert_eq!(
            parse_ingredient("1 kg pommes"),
            Some(quantified(1.0, None, "kg pommes"))
        );
    }

    #[test]
    fn test_plain_name() {
        assert_eq!(parse_ingredient("poivre"), Some(Ingredient::named("poivre")));
        assert_eq!(
            parse_ingredient("sel et poivre 2 pincées"),
            Some(Ingredient::named("sel et poivre 2 pincées"))
        );
        // No space after the quantity: not a quantity line
        assert_eq!(parse_ingredient("4"), Some(Ingredient::named("4")));
    }

    #[test]
    fn test_malformed_quantity_is_dropped() {
        assert_eq!(parse_ingredient("1.2.3 oeufs"), None);
        assert_eq!(parse_ingredient(". farine"), None);
        assert_eq!(parse_ingredient("..g beurre"), None);
    }

    #[test]
    fn test_parse_ingredients_omits_malformed_rows() {
        let lines = vec!["1kg pommes", "1.2.3 oeufs", "sel"];

        let ingredients = parse_ingredients(&lines);

        assert_eq!(
            ingredients,
            vec![
                quantified(1.0, Some("kg"), "pommes"),
                Ingredient::named("sel")
            ]
        );
    }
}
