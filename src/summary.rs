//! Text rendering of the milestone summary. Everything writes to an
//! injected handle so tests capture the exact bytes.

use std::io::{self, Write};

use crate::github::models::Issue;

/// Line printed instead of issues when a section is empty.
pub const EMPTY_SECTION_PLACEHOLDER: &str = "(none)";

/// One titled block of the summary.
pub struct Section<'a> {
    pub title: &'a str,
    pub issues: &'a [Issue],
}

/// Writes the full summary: a blank line, the milestone header, each
/// section preceded by a blank line, and a trailing blank line.
pub fn write_summary<W: Write>(
    out: &mut W,
    milestone_title: &str,
    sections: &[Section<'_>],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Milestone {milestone_title}:")?;
    for section in sections {
        writeln!(out)?;
        writeln!(out, "{}", section.title)?;
        write_issues(out, section.issues)?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_issues<W: Write>(out: &mut W, issues: &[Issue]) -> io::Result<()> {
    if issues.is_empty() {
        return writeln!(out, "{EMPTY_SECTION_PLACEHOLDER}");
    }
    for issue in issues {
        // Trailing space kept for compatibility with the existing reports.
        writeln!(out, "- Issue #{}: {} ", issue.number, issue.title)?;
    }
    Ok(())
}
