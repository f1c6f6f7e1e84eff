use crate::errors::ConfigError;

/// One `"original=resolved"` compiler remapping rule.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Remapping {
    pub original: String,
    pub resolved: String,
}

impl Remapping {
    /// Splits on the first `=` and trims both sides.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the rule has no `=` separator or either
    /// side is empty after trimming. That is a caller contract
    /// violation, not a data condition.
    pub fn parse(rule: &str) -> Result<Self, ConfigError> {
        let (original, resolved) = rule
            .split_once('=')
            .ok_or_else(|| ConfigError::MalformedRemapping(rule.to_string()))?;

        let original = original.trim();
        let resolved = resolved.trim();
        if original.is_empty() || resolved.is_empty() {
            return Err(ConfigError::MalformedRemapping(rule.to_string()));
        }

        Ok(Self {
            original: original.to_string(),
            resolved: resolved.to_string(),
        })
    }

    pub fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.original)
    }

    /// Replaces the `original` prefix of `path` with `resolved`.
    /// Callers must check `matches` first.
    pub fn apply(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.resolved,
            path.strip_prefix(&self.original).unwrap_or(path)
        )
    }
}

/// Parses rules preserving input order, without deduplication.
///
/// # Errors
///
/// Will return `Err` on the first malformed rule.
pub fn parse_remappings(rules: &[String]) -> Result<Vec<Remapping>, ConfigError> {
    rules.iter().map(|rule| Remapping::parse(rule)).collect()
}

/// Among rules whose `original` is a prefix of `path`, picks the one
/// with the longest `original`. Ties go to the first-declared rule.
pub fn best_match<'a>(remappings: &'a [Remapping], path: &str) -> Option<&'a Remapping> {
    let mut best: Option<&Remapping> = None;
    for remapping in remappings {
        if remapping.matches(path)
            && best.map_or(true, |b| remapping.original.len() > b.original.len())
        {
            best = Some(remapping);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(raw: &[&str]) -> Vec<Remapping> {
        parse_remappings(&raw.iter().map(ToString::to_string).collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn test_parse_simple_rule() {
        let remapping = Remapping::parse("@oz/=lib/openzeppelin/").unwrap();
        assert_eq!(remapping.original, "@oz/");
        assert_eq!(remapping.resolved, "lib/openzeppelin/");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let remapping = Remapping::parse(" @oz/ = lib/openzeppelin/ ").unwrap();
        assert_eq!(remapping.original, "@oz/");
        assert_eq!(remapping.resolved, "lib/openzeppelin/");
    }

    #[test]
    fn test_parse_splits_on_first_equals() {
        let remapping = Remapping::parse("a/=b/=c/").unwrap();
        assert_eq!(remapping.original, "a/");
        assert_eq!(remapping.resolved, "b/=c/");
    }

    #[test]
    fn test_parse_missing_separator() {
        assert!(matches!(
            Remapping::parse("@oz/lib/openzeppelin/"),
            Err(ConfigError::MalformedRemapping(_))
        ));
    }

    #[test]
    fn test_parse_empty_side() {
        assert!(Remapping::parse("=lib/").is_err());
        assert!(Remapping::parse("@oz/=").is_err());
        assert!(Remapping::parse("  =  ").is_err());
    }

    #[test]
    fn test_parse_remappings_preserves_order() {
        let parsed = rules(&["b/=x/", "a/=y/", "b/=z/"]);
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].resolved, "x/");
        assert_eq!(parsed[2].resolved, "z/");
    }

    #[test]
    fn test_apply() {
        let remapping = Remapping::parse("@oz/=lib/openzeppelin/").unwrap();
        assert_eq!(
            remapping.apply("@oz/token/ERC20.sol"),
            "lib/openzeppelin/token/ERC20.sol"
        );
    }

    #[test]
    fn test_best_match_longest_prefix_wins() {
        let parsed = rules(&["@oz/=lib/a/", "@oz/utils/=lib/b/"]);
        let best = best_match(&parsed, "@oz/utils/Math.sol").unwrap();
        assert_eq!(best.resolved, "lib/b/");
        assert_eq!(best.apply("@oz/utils/Math.sol"), "lib/b/Math.sol");
    }

    #[test]
    fn test_best_match_tie_goes_to_first_declared() {
        let parsed = rules(&["@oz/=lib/a/", "@oz/=lib/b/"]);
        let best = best_match(&parsed, "@oz/Math.sol").unwrap();
        assert_eq!(best.resolved, "lib/a/");
    }

    #[test]
    fn test_best_match_none() {
        let parsed = rules(&["@oz/=lib/a/"]);
        assert!(best_match(&parsed, "src/Main.sol").is_none());
    }
}
