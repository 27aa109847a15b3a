use crate::db::log::{LogLine, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

const MAX_OP_WIDTH: usize = 40;

fn color_for_operation(op: &str) -> Colour {
    match op {
        "entry" => Colour::Green,
        "edit" => Colour::Yellow,
        "report" => Colour::Cyan,
        "export" => Colour::Purple,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 161, 79),
        _ => Colour::White,
    }
}

/// `operation (target)`, cut to `MAX_OP_WIDTH` visible columns.
fn op_label(line: &LogLine) -> String {
    let label = if line.target.is_empty() {
        line.operation.clone()
    } else {
        format!("{} ({})", line.operation, line.target)
    };

    if label.width() <= MAX_OP_WIDTH {
        return label;
    }
    let mut cut: String = label.chars().take(MAX_OP_WIDTH - 3).collect();
    cut.push_str("...");
    cut
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let lines = load_log(pool)?;

        if lines.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let labels: Vec<String> = lines.iter().map(op_label).collect();
        let op_w = labels.iter().map(|l| l.width()).max().unwrap_or(10);
        let id_w = lines
            .iter()
            .map(|l| l.id.to_string().len())
            .max()
            .unwrap_or(1);

        for (line, label) in lines.iter().zip(&labels) {
            let date = chrono::DateTime::parse_from_rfc3339(&line.date)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or_else(|_| line.date.clone());

            // colour only the operation word; padding is computed on the plain text
            let padding = " ".repeat(op_w.saturating_sub(label.width()));
            let (op, rest) = label.split_at(line.operation.len().min(label.len()));
            let painted = color_for_operation(&line.operation).paint(op);

            println!(
                "{:>id_w$}: {} | {}{}{} => {}",
                line.id, date, painted, rest, padding, line.message
            );
        }

        Ok(())
    }
}
