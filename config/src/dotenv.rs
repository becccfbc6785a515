//! Parse a project `.env` file into a key-value map (applied to the process env in lib).

use std::collections::HashMap;
use std::io;
use std::path::Path;

/// Reads `.env` from `override_dir` (or the current directory) into a map.
/// A missing file yields an empty map, not an error.
pub fn env_table(override_dir: Option<&Path>) -> io::Result<HashMap<String, String>> {
    let dir = match override_dir {
        Some(d) => d.to_path_buf(),
        None => std::env::current_dir()?,
    };
    let path = dir.join(".env");
    if !path.is_file() {
        return Ok(HashMap::new());
    }
    Ok(parse(&std::fs::read_to_string(path)?))
}

/// Minimal `.env` grammar: `KEY=VALUE` per line, `#` comment lines and blank lines
/// skipped, keys and values trimmed. Double-quoted values support `\"`; single
/// quotes are stripped verbatim. No multiline values.
fn parse(content: &str) -> HashMap<String, String> {
    let mut out = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, rest)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        out.insert(key.to_string(), unquote(rest.trim()));
    }
    out
}

fn unquote(value: &str) -> String {
    if let Some(inner) = value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        inner.replace("\\\"", "\"")
    } else if let Some(inner) = value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')) {
        inner.to_string()
    } else {
        value.to_string()
    }
}
