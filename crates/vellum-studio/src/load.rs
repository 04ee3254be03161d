//! Load phase: read scripts and run them through the interpreter.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use vellum_draw::script::tokenize;
use vellum_draw::{Interpreter, Scene};

/// Name used in diagnostics for standard input.
pub const STDIN_NAME: &str = "-";

/// Reads every script, standard input when `files` is empty or names `-`.
pub fn read_sources(files: &[PathBuf]) -> Result<Vec<(String, String)>> {
    if files.is_empty() {
        return Ok(vec![(STDIN_NAME.to_string(), read_stdin()?)]);
    }
    files
        .iter()
        .map(|path| -> Result<(String, String)> {
            if path == Path::new(STDIN_NAME) {
                return Ok((STDIN_NAME.to_string(), read_stdin()?));
            }
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("{}: cannot read script", path.display()))?;
            Ok((path.display().to_string(), text))
        })
        .collect()
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("cannot read standard input")?;
    Ok(text)
}

/// Interprets `source` record by record, stopping at the first fatal error.
///
/// Errors read `<name>:<line>: <message>`.
pub fn load_source(
    name: &str,
    source: &str,
    interp: &mut Interpreter,
    scene: &mut Scene,
) -> Result<()> {
    for record in tokenize(source) {
        interp
            .interpret(scene, &record.tokens)
            .map_err(|e| anyhow!("{name}:{}: {e}", record.line))?;
    }
    log::debug!("{name}: loaded, {} objects", scene.objects().len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_names_file_and_line() {
        let mut interp = Interpreter::new();
        let mut scene = Scene::new();
        let err = load_source(
            "shapes.gd",
            "# header\ndefine s1 square 40\n\nfrobnicate\n",
            &mut interp,
            &mut scene,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "shapes.gd:4: syntax error");
    }

    #[test]
    fn loading_stops_at_first_error() {
        let mut interp = Interpreter::new();
        let mut scene = Scene::new();
        let src = "define s1 square 40\ndefine s2 blob 1\ndraw red s1 0 0\n";
        let err = load_source("x", src, &mut interp, &mut scene).unwrap_err();
        assert_eq!(err.to_string(), "x:2: blob: no such shape");
        assert!(scene.objects().is_empty());
    }

    #[test]
    fn missing_file_is_reported() {
        let err = read_sources(&[PathBuf::from("/nonexistent/vellum/script")]).unwrap_err();
        assert!(err.to_string().contains("cannot read script"));
    }
}
