//! Text rendering and the interactive loop.

use std::io::{self, BufRead, Write};
use tally_core::{
    parse_counter_action, AudioBackend, CounterAction, CounterView, CounterWidget, KeyValueStore,
};

/// One-line rendering: `[ - ]  3  [ + ]  [ Reset ]  [ Sound: on ]`.
pub fn render_line(view: &CounterView) -> String {
    let caption = |action: CounterAction| {
        view.control(action)
            .map(|control| control.caption.as_str())
            .unwrap_or_default()
    };
    format!(
        "[ {} ]  {}  [ {} ]  [ {} ]  [ {} ]",
        caption(CounterAction::Decrement),
        view.display,
        caption(CounterAction::Increment),
        caption(CounterAction::Reset),
        caption(CounterAction::ToggleSound),
    )
}

pub fn render_json(view: &CounterView) -> serde_json::Result<String> {
    serde_json::to_string(view)
}

/// Keys accepted by the interactive loop, with their accessible labels.
pub fn render_help(view: &CounterView) -> String {
    let mut help = String::from("keys:");
    for (key, action) in [
        ("-", CounterAction::Decrement),
        ("+", CounterAction::Increment),
        ("r", CounterAction::Reset),
        ("s", CounterAction::ToggleSound),
    ] {
        if let Some(control) = view.control(action) {
            help.push_str(&format!("\n  {key}  {}", control.label));
        }
    }
    help.push_str("\n  q  quit");
    help
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopInput {
    Action(CounterAction),
    Help,
    Quit,
    Unknown,
}

pub fn parse_loop_input(line: &str) -> LoopInput {
    match line.trim() {
        "+" | "inc" => LoopInput::Action(CounterAction::Increment),
        "-" | "dec" => LoopInput::Action(CounterAction::Decrement),
        "r" => LoopInput::Action(CounterAction::Reset),
        "s" | "sound" => LoopInput::Action(CounterAction::ToggleSound),
        "?" | "h" | "help" => LoopInput::Help,
        "q" | "quit" | "exit" => LoopInput::Quit,
        other => parse_counter_action(other)
            .map(LoopInput::Action)
            .unwrap_or(LoopInput::Unknown),
    }
}

/// Runs the interactive loop until quit or end of input.
pub fn run_interactive<S, A, R, W>(
    widget: &mut CounterWidget<S, A>,
    input: R,
    output: &mut W,
) -> io::Result<()>
where
    S: KeyValueStore,
    A: AudioBackend,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", render_help(&widget.view()))?;
    writeln!(output, "{}", render_line(&widget.view()))?;

    for line in input.lines() {
        match parse_loop_input(&line?) {
            LoopInput::Action(action) => {
                widget.dispatch(action);
                writeln!(output, "{}", render_line(&widget.view()))?;
            }
            LoopInput::Help => writeln!(output, "{}", render_help(&widget.view()))?,
            LoopInput::Quit => break,
            LoopInput::Unknown => writeln!(output, "unknown input; type ? for keys")?,
        }
        output.flush()?;
    }
    Ok(())
}
