//! URL sources shared by `run`, `resolve` and `check`.

use anyhow::{Context, Result};
use clap::Args;
use shotgrab_core::url_model::UrlInput;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Screenshot page URLs, e.g. prnt.sc/abc123 (scheme optional).
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// Read URLs from a file, separated by newlines or spaces.
    #[arg(long, short = 'f', value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Read URLs from stdin, separated by newlines or spaces.
    #[arg(long)]
    pub stdin: bool,
}

impl InputArgs {
    /// Gathers every source into one canonical list: arguments first, then the
    /// file, then stdin. Arguments are one URL each; file and stdin are split
    /// on whitespace.
    pub fn collect(&self) -> Result<UrlInput> {
        let mut stdin_text = String::new();
        if self.stdin {
            std::io::stdin()
                .read_to_string(&mut stdin_text)
                .context("read URLs from stdin")?;
        }
        self.collect_with(self.stdin.then_some(stdin_text.as_str()))
    }

    fn collect_with(&self, stdin_text: Option<&str>) -> Result<UrlInput> {
        let mut parts = vec![UrlInput::List(self.urls.clone())];
        if let Some(path) = &self.file {
            parts.push(UrlInput::Blob(read_url_file(path)?));
        }
        if let Some(text) = stdin_text {
            parts.push(UrlInput::Blob(text.to_string()));
        }

        let urls: Vec<String> = parts.iter().flat_map(UrlInput::normalize).collect();
        if urls.is_empty() {
            anyhow::bail!("no URLs given; pass them as arguments, with --file, or with --stdin");
        }
        Ok(UrlInput::List(urls))
    }
}

fn read_url_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("couldn't open {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn arguments_are_kept_whole_and_normalized() {
        let args = InputArgs {
            urls: vec!["prnt.sc/a".to_string(), " http://prnt.sc/b ".to_string()],
            ..InputArgs::default()
        };
        let input = args.collect_with(None).unwrap();
        assert_eq!(
            input,
            UrlInput::List(vec!["https://prnt.sc/a".to_string(), "http://prnt.sc/b".to_string()])
        );
    }

    #[test]
    fn file_then_stdin_are_split_and_appended() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "prnt.sc/f1 prnt.sc/f2\n\nprnt.sc/f3").unwrap();
        f.flush().unwrap();
        let args = InputArgs {
            urls: vec!["prnt.sc/arg".to_string()],
            file: Some(f.path().to_path_buf()),
            stdin: true,
        };
        let input = args.collect_with(Some("prnt.sc/s1\nprnt.sc/s2")).unwrap();
        let urls = input.normalize();
        assert_eq!(
            urls,
            [
                "https://prnt.sc/arg",
                "https://prnt.sc/f1",
                "https://prnt.sc/f2",
                "https://prnt.sc/f3",
                "https://prnt.sc/s1",
                "https://prnt.sc/s2",
            ]
        );
    }

    #[test]
    fn nothing_given_is_an_error() {
        assert!(InputArgs::default().collect_with(None).is_err());
        assert!(InputArgs::default().collect_with(Some("  \n ")).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let args = InputArgs {
            file: Some(PathBuf::from("/definitely/not/here.txt")),
            ..InputArgs::default()
        };
        let err = args.collect_with(None).unwrap_err();
        assert!(format!("{err:#}").contains("couldn't open"));
    }
}
