use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Path argument that means "read the message from stdin".
pub const STDIN_ARG: &str = "-";

const MESSAGE_EXTENSIONS: [&str; 2] = ["txt", "md"];

/// One raw chat message and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub name: String,
    pub text: String,
}

/// Loads every path in order. Folders expand to the message files inside them.
pub fn load_paths(paths: &[PathBuf]) -> Result<Vec<Message>> {
    let mut messages = Vec::new();
    for path in paths {
        if path.as_os_str() == STDIN_ARG {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read message from stdin")?;
            messages.push(Message {
                name: "stdin".to_string(),
                text,
            });
        } else if path.is_dir() {
            messages.extend(load_dir(path)?);
        } else {
            messages.push(load_file(path)?);
        }
    }
    log::info!("Loaded {} message(s)", messages.len());
    Ok(messages)
}

/// Loads the `.txt` and `.md` files directly inside `dir`, sorted by name.
pub fn load_dir(dir: &Path) -> Result<Vec<Message>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to list messages folder '{}'", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_message = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| MESSAGE_EXTENSIONS.contains(&ext));
        if path.is_file() && is_message {
            paths.push(path);
        }
    }
    paths.sort();
    log::debug!("Found {} message file(s) in {}", paths.len(), dir.display());

    paths.iter().map(|p| load_file(p)).collect()
}

fn load_file(path: &Path) -> Result<Message> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read message file '{}'", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(Message { name, text })
}
