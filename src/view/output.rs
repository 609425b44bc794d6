//! Renderers subscribed to the game's event channels.

use std::io::{self, Write};

use crate::state::{GameMapStatus, GameResult, Lane, MoveListener, QuitListener};

/// Render the map as two lines, up lane first.
///
/// ```text
/// [ O |   | X ]
/// [   | O |   ]
/// ```
pub fn render_map(status: &GameMapStatus) -> String {
    let steps = status.step_results();
    Lane::ALL
        .iter()
        .map(|&row| {
            let cells: Vec<&str> = steps
                .iter()
                .map(|step| match (step.lane == row, step.correct) {
                    (true, true) => "O",
                    (true, false) => "X",
                    (false, _) => " ",
                })
                .collect();
            format!("[ {} ]", cells.join(" | "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the closing summary: map, outcome and attempt count.
pub fn render_result(status: &GameMapStatus, result: &GameResult) -> String {
    let outcome = if result.succeeded {
        "success"
    } else {
        "failure"
    };
    format!(
        "Final result\n{}\n\nGame result: {}\nTotal attempts: {}",
        render_map(status),
        outcome,
        result.attempts
    )
}

/// Plain-text console renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputView;

impl OutputView {
    pub fn new() -> Self {
        Self
    }

    pub fn print_start(&self) {
        println!("Bridge crossing game started.\n");
    }

    fn emit(&self, text: &str) {
        let mut out = io::stdout().lock();
        if let Err(err) = writeln!(out, "{text}\n") {
            tracing::warn!(error = %err, "failed to write game output");
        }
    }
}

impl MoveListener for OutputView {
    fn on_move(&mut self, status: &GameMapStatus) {
        self.emit(&render_map(status));
    }
}

impl QuitListener for OutputView {
    fn on_quit(&mut self, status: &GameMapStatus, result: &GameResult) {
        self.emit(&render_result(status, result));
    }
}

/// Emits one JSON object per event, for scripting.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonView;

impl JsonView {
    pub fn new() -> Self {
        Self
    }

    pub fn move_event(status: &GameMapStatus) -> serde_json::Value {
        serde_json::json!({
            "event": "move",
            "at": chrono::Utc::now().to_rfc3339(),
            "map": status.to_json()
        })
    }

    pub fn quit_event(status: &GameMapStatus, result: &GameResult) -> serde_json::Value {
        serde_json::json!({
            "event": "quit",
            "at": chrono::Utc::now().to_rfc3339(),
            "map": status.to_json(),
            "result": result.to_json()
        })
    }

    fn emit(&self, value: &serde_json::Value) {
        let mut out = io::stdout().lock();
        if let Err(err) = writeln!(out, "{value}") {
            tracing::warn!(error = %err, "failed to write game output");
        }
    }
}

impl MoveListener for JsonView {
    fn on_move(&mut self, status: &GameMapStatus) {
        self.emit(&Self::move_event(status));
    }
}

impl QuitListener for JsonView {
    fn on_quit(&mut self, status: &GameMapStatus, result: &GameResult) {
        self.emit(&Self::quit_event(status, result));
    }
}
