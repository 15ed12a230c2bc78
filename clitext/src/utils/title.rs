//! # Terminal Title
//!
//! Sets the title of the terminal window. Unix terminals get the
//! `ESC ] 2 ; <title> BEL` sequence on stdout, Windows consoles get the `title`
//! shell builtin. Other platforms report
//! [`crate::Error::UnsupportedPlatform`].
use crate::error::Result;
use std::io::Write;
use tracing::debug;

/// The escape sequence that sets the window title to `title`.
pub fn title_sequence(title: &str) -> String {
    format!("\x1b]2;{}\x07", title)
}

/// Writes the title escape sequence to `writer`.
pub fn write_title<W: Write>(writer: &mut W, title: &str) -> Result<()> {
    writer.write_all(title_sequence(title).as_bytes())?;
    writer.flush()?;
    Ok(())
}

cfg_if::cfg_if! {
    if #[cfg(any(target_os = "linux", target_os = "macos"))] {
        fn apply(title: &str) -> Result<()> {
            write_title(&mut std::io::stdout(), title)
        }
    } else if #[cfg(windows)] {
        fn apply(title: &str) -> Result<()> {
            let status = std::process::Command::new("cmd")
                .args(["/C", "title", title])
                .status()?;

            if status.success() {
                Ok(())
            } else {
                Err(crate::error::Error::Io(std::io::Error::other(format!(
                    "title exited with {}",
                    status
                ))))
            }
        }
    } else {
        fn apply(_title: &str) -> Result<()> {
            Err(crate::error::Error::UnsupportedPlatform(
                std::env::consts::OS,
            ))
        }
    }
}

/// Sets the terminal window title.
pub fn set_title(title: &str) -> Result<()> {
    debug!(title, os = std::env::consts::OS, "setting terminal title");
    apply(title)
}
