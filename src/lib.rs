//! Trivia maze: walk a fixed maze from start to exit, answering the
//! questions that guard some of its cells.

pub mod core;

#[cfg(feature = "audio")]
pub mod audio;

#[cfg(feature = "gui")]
pub mod render;

/// Resolves `--level <path>` from the command line, defaulting to the
/// bundled classic level.
pub fn level_from_args(args: &[String]) -> Result<core::Level, Box<dyn std::error::Error>> {
    let mut it = args.iter();
    while let Some(arg) = it.next() {
        if arg == "--level" {
            let path = it.next().ok_or("--level needs a path")?;
            return Ok(core::Level::load(path)?);
        }
    }
    Ok(core::Level::classic()?)
}
