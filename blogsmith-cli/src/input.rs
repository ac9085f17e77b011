use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Line editor with history kept under the user's data directory.
pub struct Input {
    editor: DefaultEditor,
    history: Option<PathBuf>,
}

impl Input {
    pub fn new() -> anyhow::Result<Self> {
        let mut editor = DefaultEditor::new()?;
        let history = dirs::data_dir().map(|dir| dir.join("blogsmith").join("history.txt"));
        if let Some(path) = &history {
            let _ = editor.load_history(path);
        }
        Ok(Self { editor, history })
    }

    /// `None` on Ctrl-C or Ctrl-D.
    pub fn line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                    self.save_history();
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save_history(&mut self) {
        let Some(path) = &self.history else {
            return;
        };
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        if let Err(err) = self.editor.save_history(path) {
            tracing::debug!(error = %err, "could not save input history");
        }
    }
}
