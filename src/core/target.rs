//! Output directory validation and overwrite confirmation

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

pub const OVERWRITE_PROMPT: &str = "The output directory provided is not empty. Some files may be overwritten. Do you wish to continue? (y/N): ";

/// State of the output directory once validation is done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetStatus {
    /// Did not exist and was created
    Created,
    /// Existed and was empty
    Empty,
    /// Non-empty and the user agreed to continue
    Confirmed,
    /// Non-empty and the user declined
    Cancelled,
}

impl TargetStatus {
    pub fn should_proceed(self) -> bool {
        self != TargetStatus::Cancelled
    }
}

/// Make sure `out_dir` can receive the flattened files.
///
/// A missing directory is created, an existing file is rejected, and a
/// non-empty directory needs confirmation read from `input`.
///
/// # Arguments
/// * `out_dir` - Output directory path
/// * `input` - Source of the yes/no answer
/// * `prompt` - Where the question is written
pub fn prepare_output_dir<R: BufRead, W: Write>(
    out_dir: &Path,
    input: R,
    prompt: W,
) -> Result<TargetStatus> {
    let metadata = match fs::metadata(out_dir) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            create_dir_permissive(out_dir)
                .with_context(|| format!("Failed to create {}", out_dir.display()))?;
            return Ok(TargetStatus::Created);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to inspect {}", out_dir.display()))
        }
    };

    if !metadata.is_dir() {
        bail!(
            "The <output directory> argument must be a directory! ({})",
            out_dir.display()
        );
    }

    if is_empty_dir(out_dir)? {
        return Ok(TargetStatus::Empty);
    }

    if confirm_overwrite(input, prompt)? {
        Ok(TargetStatus::Confirmed)
    } else {
        Ok(TargetStatus::Cancelled)
    }
}

/// Ask whether to continue into a non-empty directory.
///
/// Accepts `y` or `yes` in any case; anything else, including an empty line
/// or end of input, is a refusal.
pub fn confirm_overwrite<R: BufRead, W: Write>(mut input: R, mut prompt: W) -> Result<bool> {
    write!(prompt, "{}", OVERWRITE_PROMPT)?;
    prompt.flush()?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn is_empty_dir(dir: &Path) -> Result<bool> {
    let mut entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))?;
    Ok(entries.next().is_none())
}

#[cfg(unix)]
fn create_dir_permissive(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o777).create(dir)
}

#[cfg(not(unix))]
fn create_dir_permissive(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn answers(text: &str) -> Cursor<Vec<u8>> {
        Cursor::new(text.as_bytes().to_vec())
    }

    #[test]
    fn test_confirm_accepts_yes_variants() {
        for reply in ["y\n", "Y\n", "yes\n", "YeS\n", "  yes  \n", "y"] {
            let mut out = Vec::new();
            assert!(confirm_overwrite(answers(reply), &mut out).unwrap(), "{:?}", reply);
            assert_eq!(String::from_utf8(out).unwrap(), OVERWRITE_PROMPT);
        }
    }

    #[test]
    fn test_confirm_rejects_everything_else() {
        for reply in ["\n", "", "n\n", "no\n", "yep\n", "sure\n"] {
            assert!(!confirm_overwrite(answers(reply), Vec::new()).unwrap(), "{:?}", reply);
        }
    }

    #[test]
    fn test_missing_dir_is_created() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().join("deep/nested/out");

        let status = prepare_output_dir(&out_dir, answers(""), Vec::new()).unwrap();

        assert_eq!(status, TargetStatus::Created);
        assert!(out_dir.is_dir());
    }

    #[test]
    fn test_empty_dir_needs_no_prompt() {
        let temp_dir = TempDir::new().unwrap();
        let mut out = Vec::new();

        let status = prepare_output_dir(temp_dir.path(), answers(""), &mut out).unwrap();

        assert_eq!(status, TargetStatus::Empty);
        assert!(out.is_empty());
    }

    #[test]
    fn test_non_empty_dir_prompts() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("existing.txt"), "x").unwrap();

        let status = prepare_output_dir(temp_dir.path(), answers("yes\n"), Vec::new()).unwrap();
        assert_eq!(status, TargetStatus::Confirmed);
        assert!(status.should_proceed());

        let status = prepare_output_dir(temp_dir.path(), answers("\n"), Vec::new()).unwrap();
        assert_eq!(status, TargetStatus::Cancelled);
        assert!(!status.should_proceed());
    }

    #[test]
    fn test_file_target_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("not-a-dir");
        fs::write(&file, "x").unwrap();

        let err = prepare_output_dir(&file, answers("y\n"), Vec::new()).unwrap_err();

        assert_eq!(
            err.to_string(),
            format!(
                "The <output directory> argument must be a directory! ({})",
                file.display()
            )
        );
    }
}
