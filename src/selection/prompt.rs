//! Interactive checkbox prompt.
//!
//! Renders one panel per platform with a numbered checkbox per preset and
//! reads commands line by line until the user exports or cancels.

use std::io::{BufRead, Write};

use crate::catalog::{self, Platform, ScalePreset};
use crate::error::Result;

use super::SelectionSet;

/// Outcome of the selection dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Export with the selection as it stood when confirmed.
    Export(SelectionSet),
    /// Dialog dismissed; nothing is exported.
    Cancel,
}

/// A single parsed prompt command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Toggle(usize),
    ToggleAll,
    Export,
    Cancel,
}

fn parse_command(line: &str, count: usize) -> Option<Command> {
    match line.trim().to_lowercase().as_str() {
        "e" | "export" => Some(Command::Export),
        "c" | "cancel" | "q" => Some(Command::Cancel),
        "a" | "all" => Some(Command::ToggleAll),
        other => other
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=count).contains(n))
            .map(|n| Command::Toggle(n - 1)),
    }
}

/// Run the selection dialog over the given input and output streams.
///
/// Starts from `initial` so callers can pre-check presets. End of input is
/// treated as cancel.
pub fn select<R: BufRead, W: Write>(
    initial: SelectionSet,
    input: &mut R,
    output: &mut W,
) -> Result<Decision> {
    let presets: Vec<&'static ScalePreset> = catalog::all().collect();
    let mut selection = initial;
    let mut line = String::new();

    loop {
        render(&presets, &selection, output)?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(Decision::Cancel);
        }

        match parse_command(&line, presets.len()) {
            Some(Command::Toggle(index)) => {
                selection = selection.flip(presets[index]);
            }
            Some(Command::ToggleAll) => {
                let check = presets.iter().any(|p| !selection.contains(p));
                selection = presets
                    .iter()
                    .fold(selection, |set, preset| set.toggle(preset, check));
            }
            Some(Command::Export) => return Ok(Decision::Export(selection)),
            Some(Command::Cancel) => return Ok(Decision::Cancel),
            None => {
                writeln!(output, "Unrecognised input: '{}'", line.trim())?;
            }
        }
    }
}

fn render<W: Write>(
    presets: &[&'static ScalePreset],
    selection: &SelectionSet,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "Select export sizes")?;

    for platform in [Platform::Android, Platform::Ios] {
        writeln!(output, "  {}", platform)?;
        for (index, preset) in presets.iter().enumerate() {
            if preset.platform != platform {
                continue;
            }
            let mark = if selection.contains(preset) { "x" } else { " " };
            writeln!(
                output,
                "    [{}] {:>2}  {:<8} {:>3}%",
                mark,
                index + 1,
                preset.label(),
                preset.scale_factor
            )?;
        }
    }

    write!(
        output,
        "Toggle a number (a = all), e = export, c = cancel: "
    )?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (Decision, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let decision = select(SelectionSet::new(), &mut input, &mut output).unwrap();
        (decision, String::from_utf8(output).unwrap())
    }

    fn names(decision: &Decision) -> Vec<&'static str> {
        match decision {
            Decision::Export(set) => set.iter().map(|p| p.name).collect(),
            Decision::Cancel => panic!("expected export"),
        }
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("e\n", 8), Some(Command::Export));
        assert_eq!(parse_command(" Cancel ", 8), Some(Command::Cancel));
        assert_eq!(parse_command("1", 8), Some(Command::Toggle(0)));
        assert_eq!(parse_command("8", 8), Some(Command::Toggle(7)));
        assert_eq!(parse_command("0", 8), None);
        assert_eq!(parse_command("9", 8), None);
        assert_eq!(parse_command("xyz", 8), None);
    }

    #[test]
    fn test_toggle_then_export() {
        let (decision, _) = run("3\n7\ne\n");
        assert_eq!(names(&decision), vec!["xhdpi", "@2x"]);
    }

    #[test]
    fn test_uncheck() {
        let (decision, _) = run("1\n2\n1\ne\n");
        assert_eq!(names(&decision), vec!["hdpi"]);
    }

    #[test]
    fn test_export_nothing_selected() {
        let (decision, _) = run("e\n");
        assert_eq!(decision, Decision::Export(SelectionSet::new()));
    }

    #[test]
    fn test_cancel_discards_selection() {
        let (decision, _) = run("1\n2\nc\n");
        assert_eq!(decision, Decision::Cancel);
    }

    #[test]
    fn test_end_of_input_cancels() {
        let (decision, _) = run("1\n");
        assert_eq!(decision, Decision::Cancel);
    }

    #[test]
    fn test_toggle_all() {
        let (decision, _) = run("a\ne\n");
        assert_eq!(names(&decision).len(), 8);

        let (decision, _) = run("a\na\ne\n");
        assert!(names(&decision).is_empty());
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let (decision, output) = run("zz\n4\ne\n");
        assert_eq!(names(&decision), vec!["xxhdpi"]);
        assert!(output.contains("Unrecognised input: 'zz'"));
    }

    #[test]
    fn test_render_panels() {
        let (_, output) = run("6\nc\n");
        assert!(output.contains("  Android\n"));
        assert!(output.contains("  iOS\n"));
        assert!(output.contains("[x]  6  @1x       50%"));
        assert!(output.contains("[ ]  1  mdpi      50%"));
    }
}
