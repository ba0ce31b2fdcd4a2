//! Source resolution shared by `compile` and `pulse`.

use std::path::Path;

use rite_compiler::programs;

/// Resolve source text from the three mutually exclusive inputs.
pub fn load_source(
    path: Option<&Path>,
    text: Option<&str>,
    program: Option<&str>,
) -> Result<String, String> {
    match (path, text, program) {
        (Some(path), None, None) => std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display())),
        (None, Some(text), None) => Ok(text.to_string()),
        (None, None, Some(name)) => programs::lookup(name).map(str::to_string).ok_or_else(|| {
            let names: Vec<&str> = programs::ALL.iter().map(|(n, _)| *n).collect();
            format!("unknown program: {name} (expected one of {})", names.join(", "))
        }),
        (None, None, None) => Err("no source given: pass a file, --source, or --program".into()),
        _ => Err("pass exactly one of a file, --source, or --program".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_text_wins_alone() {
        assert_eq!(load_source(None, Some("PULSE"), None).unwrap(), "PULSE");
    }

    #[test]
    fn builtin_program_resolves() {
        let source = load_source(None, None, Some("awakening")).unwrap();
        assert!(source.contains("RESONATE 432"));
    }

    #[test]
    fn unknown_program_names_the_alternatives() {
        let err = load_source(None, None, Some("nonesuch")).unwrap_err();
        assert!(err.contains("awakening"));
    }

    #[test]
    fn zero_or_two_sources_is_an_error() {
        assert!(load_source(None, None, None).is_err());
        assert!(load_source(None, Some("PULSE"), Some("awakening")).is_err());
    }
}
