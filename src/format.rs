#![cfg_attr(not(feature = "colored"), allow(unused_variables))]

#[cfg(feature = "colored")]
use colored::Colorize;
use core::fmt::{self, Write};

#[derive(Copy, Clone, Debug)]
pub(crate) struct Format {
    #[cfg(feature = "colored")]
    pub colored: bool,
    pub detailed: bool,
    pub cursors: bool,
}

impl Default for Format {
    fn default() -> Self {
        Format {
            #[cfg(feature = "colored")]
            colored: true,
            detailed: true,
            cursors: true,
        }
    }
}

impl Format {
    pub fn message(self, f: &mut fmt::Formatter, msg: &impl ToString) -> fmt::Result {
        let msg = msg.to_string();
        let lines = msg.lines();
        if self.detailed {
            for line in lines {
                writeln!(f, "    {}", line.trim())?;
            }
        } else if let Some(line) = lines.map(str::trim).find(|s| !s.is_empty()) {
            f.write_str(line)?;
        }
        Ok(())
    }

    pub fn mark(self, f: &mut fmt::Formatter) -> fmt::Result {
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, "{} ", "*".cyan());
        }
        f.write_str("* ")
    }

    pub fn position(self, f: &mut fmt::Formatter, at: usize) -> fmt::Result {
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, "{}", at.to_string().yellow().bold());
        }
        write!(f, "{at}")
    }

    pub fn labels(self, f: &mut fmt::Formatter, at: usize, sp: usize, top: usize) -> fmt::Result {
        if !self.cursors {
            return Ok(());
        }
        match (at == sp, at == top) {
            (true, true) => {
                #[cfg(feature = "colored")]
                if self.colored {
                    return write!(
                        f,
                        " {}{}{} {}{}",
                        "[".yellow(),
                        "SP".cyan().bold(),
                        ",".yellow(),
                        "TOP".green().bold(),
                        "]".yellow()
                    );
                }
                f.write_str(" [SP, TOP]")
            }
            (true, false) => {
                #[cfg(feature = "colored")]
                if self.colored {
                    return write!(f, " {}{}{}", "[".yellow(), "SP".cyan().bold(), "]".yellow());
                }
                f.write_str(" [SP]")
            }
            (false, true) => {
                #[cfg(feature = "colored")]
                if self.colored {
                    return write!(f, " {}{}{}", "[".yellow(), "TOP".green().bold(), "]".yellow());
                }
                f.write_str(" [TOP]")
            }
            (false, false) => Ok(()),
        }
    }

    pub fn separator(self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(' ')
    }
}
