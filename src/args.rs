use crate::error::{NotesError, Result};

pub struct ArgParser {
    iter: std::vec::IntoIter<String>,
    command_name: String,
}

impl ArgParser {
    pub fn new(args: Vec<String>, command_name: &str) -> Self {
        Self { iter: args.into_iter(), command_name: command_name.to_string() }
    }

    /// Get next positional argument
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<String> {
        self.iter.next()
    }

    /// Collect remaining args
    pub fn collect_remaining(self) -> Vec<String> {
        self.iter.collect()
    }

    pub fn unknown_flag(&self, flag: &str) -> NotesError {
        NotesError::Usage(format!(
            "Unknown flag for {}: {}",
            self.command_name, flag
        ))
    }
}

/// Flags shared by the commands that print notes.
#[derive(Default, Debug)]
pub struct CommonFlags {
    pub relative_time: bool,
    pub plain: bool,
    pub assume_yes: bool,
    pub positional: Vec<String>,
}

impl CommonFlags {
    /// Split flags from positionals. Everything after `--` is positional.
    pub fn parse(args: Vec<String>, command_name: &str) -> Result<Self> {
        let mut flags = CommonFlags::default();
        let mut parser = ArgParser::new(args, command_name);
        while let Some(arg) = parser.next() {
            match arg.as_str() {
                "-r" | "--relative" => flags.relative_time = true,
                "--plain" => flags.plain = true,
                "-y" | "--yes" => flags.assume_yes = true,
                "--" => {
                    flags.positional.extend(parser.collect_remaining());
                    break;
                }
                other if other.starts_with('-') && other.len() > 1 => {
                    return Err(parser.unknown_flag(other));
                }
                _ => flags.positional.push(arg),
            }
        }
        Ok(flags)
    }
}
