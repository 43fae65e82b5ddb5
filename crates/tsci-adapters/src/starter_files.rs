//! Built-in starter files.
//!
//! The fixed artifacts written into every new project, only when absent.
//! Contents are versioned with the tool; user edits always win on re-runs.

use tsci_core::{domain::StarterFile, error::InitResult};

/// Relative path of the placeholder entry source.
pub const ENTRY_SOURCE_PATH: &str = "index.tsx";

/// Placeholder board: two example parts and one connecting trace.
pub const ENTRY_SOURCE: &str = r#"export default () => (
  <board width="10mm" height="10mm">
    <resistor resistance="1k" footprint="0402" name="R1" schX={3} pcbX={3} />
    <capacitor capacitance="1000pF" footprint="0402" name="C1" schX={-3} pcbX={-3} />
    <trace from=".R1 > .pin1" to=".C1 > .pin1" />
  </board>
);
"#;

/// Relative path of the npm registry configuration file.
pub const NPMRC_PATH: &str = ".npmrc";

/// Scoped-registry line pointing `@tsci` imports at the tscircuit registry.
pub const SCOPED_REGISTRY_LINE: &str = "@tsci:registry=https://npm.tscircuit.com";

/// The starter set written by `tsci init`, in emission order.
///
/// `scoped_registry` is the `.npmrc` line to emit; callers normally pass
/// the configured value, defaulting to [`SCOPED_REGISTRY_LINE`].
pub fn builtin_starters(scoped_registry: &str) -> InitResult<Vec<StarterFile>> {
    Ok(vec![
        StarterFile::new(ENTRY_SOURCE_PATH, ENTRY_SOURCE)?,
        StarterFile::new(NPMRC_PATH, format!("{scoped_registry}\n"))?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_set_has_entry_source_and_npmrc() {
        let starters = builtin_starters(SCOPED_REGISTRY_LINE).unwrap();
        let paths: Vec<_> = starters.iter().map(|s| s.path().to_path_buf()).collect();
        assert_eq!(paths, ["index.tsx", ".npmrc"].map(std::path::PathBuf::from));
    }

    #[test]
    fn entry_source_contains_example_circuit() {
        assert!(ENTRY_SOURCE.contains("<board"));
        assert!(ENTRY_SOURCE.contains("<resistor"));
        assert!(ENTRY_SOURCE.contains("<capacitor"));
        assert!(ENTRY_SOURCE.contains("<trace"));
    }

    #[test]
    fn npmrc_starter_ends_with_newline() {
        let starters = builtin_starters(SCOPED_REGISTRY_LINE).unwrap();
        assert_eq!(
            starters[1].content(),
            "@tsci:registry=https://npm.tscircuit.com\n"
        );
    }
}
