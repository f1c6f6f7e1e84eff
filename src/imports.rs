use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // The four recognized lexical forms. Scanning is purely textual:
    // an import-looking string inside a comment is matched too, which
    // mirrors what the verification backend itself tolerates.
    static ref PLAIN: Regex =
        Regex::new(r#"import\s*(?:"([^"]+)"|'([^']+)')"#).unwrap();
    static ref NAMED: Regex =
        Regex::new(r#"import\s*\{[^}]*\}\s*from\s*(?:"([^"]+)"|'([^']+)')"#).unwrap();
    static ref GLOB: Regex =
        Regex::new(r#"import\s*\*\s*as\s+[A-Za-z_$][\w$]*\s+from\s*(?:"([^"]+)"|'([^']+)')"#)
            .unwrap();
    static ref DEFAULT: Regex =
        Regex::new(r#"import\s+[A-Za-z_$][\w$]*\s+from\s*(?:"([^"]+)"|'([^']+)')"#).unwrap();
}

/// Returns the import target strings referenced by `content`, in order
/// of first appearance, duplicates removed.
#[must_use]
pub fn extract_imports(content: &str) -> Vec<String> {
    let mut found: Vec<(usize, String)> = Vec::new();

    for regex in [&*PLAIN, &*NAMED, &*GLOB, &*DEFAULT] {
        for captures in regex.captures_iter(content) {
            if let Some(target) = captures.get(1).or_else(|| captures.get(2)) {
                found.push((target.start(), target.as_str().to_string()));
            }
        }
    }

    found.sort_by_key(|(offset, _)| *offset);
    found.into_iter().map(|(_, target)| target).unique().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_import() {
        let imports = extract_imports(r#"import "./B.sol";"#);
        assert_eq!(imports, vec!["./B.sol"]);
    }

    #[test]
    fn test_plain_import_single_quotes() {
        let imports = extract_imports("import './B.sol';");
        assert_eq!(imports, vec!["./B.sol"]);
    }

    #[test]
    fn test_named_import() {
        let imports = extract_imports(r#"import { IERC20, SafeERC20 } from "@oz/token.sol";"#);
        assert_eq!(imports, vec!["@oz/token.sol"]);
    }

    #[test]
    fn test_glob_import() {
        let imports = extract_imports(r#"import * as Math from "lib/Math.sol";"#);
        assert_eq!(imports, vec!["lib/Math.sol"]);
    }

    #[test]
    fn test_default_import() {
        let imports = extract_imports(r#"import Token from "src/Token.sol";"#);
        assert_eq!(imports, vec!["src/Token.sol"]);
    }

    #[test]
    fn test_order_of_first_appearance() {
        let content = r#"
            import "z/Last.sol";
            import { A } from "a/First.sol";
            import * as B from "m/Middle.sol";
        "#;
        let imports = extract_imports(content);
        assert_eq!(imports, vec!["z/Last.sol", "a/First.sol", "m/Middle.sol"]);
    }

    #[test]
    fn test_duplicates_removed() {
        let content = r#"
            import "./B.sol";
            import { B } from "./B.sol";
        "#;
        let imports = extract_imports(content);
        assert_eq!(imports, vec!["./B.sol"]);
    }

    #[test]
    fn test_no_imports() {
        assert!(extract_imports("contract C {}").is_empty());
    }

    #[test]
    fn test_commented_import_is_still_matched() {
        // Lexical scanning, not parsing. This is the documented blind
        // spot, kept identical to the reference behavior.
        let imports = extract_imports(r#"// import "./Dead.sol";"#);
        assert_eq!(imports, vec!["./Dead.sol"]);
    }

    #[test]
    fn test_ignores_unquoted_text() {
        assert!(extract_imports("important work; import nothing here").is_empty());
    }
}
