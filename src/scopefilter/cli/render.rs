//! Terminal rendering. Functions here build strings; only `print_messages`
//! writes to stdout.

use chrono::{DateTime, Utc};
use colored::Colorize;
use scopefilter::api::{CmdMessage, MessageLevel};
use scopefilter::config::ScopeConfig;
use scopefilter::model::{FilterView, SelectionSummary};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const PRIMARY_MARKER: &str = "★";
const UNSET: &str = "-";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn render_filter_list(views: &[FilterView], updated_at: Option<DateTime<Utc>>) -> String {
    if views.is_empty() {
        return String::new();
    }

    let label_width = views.iter().map(|v| v.label.width()).max().unwrap_or(0);
    let id_width = views.iter().map(|v| v.id.width()).max().unwrap_or(0);

    let mut output = String::new();
    for view in views {
        output.push_str(&render_row(view, id_width, label_width));
        output.push('\n');
    }

    if let Some(ts) = updated_at {
        output.push('\n');
        output.push_str(&format!("{}\n", format!("Updated {}", format_time_ago(ts)).dimmed()));
    }
    output
}

pub(super) fn render_filter_rows(views: &[FilterView]) -> String {
    render_filter_list(views, None)
}

fn render_row(view: &FilterView, id_width: usize, label_width: usize) -> String {
    let marker = if view.primary { PRIMARY_MARKER } else { " " };
    let id = pad_to_width(&view.id, id_width);
    let label = pad_to_width(&view.label, label_width);

    let selection = format_selection(&view.selection);
    let selection = if view.selection.is_empty() {
        selection.dimmed()
    } else {
        selection.green()
    };

    format!(
        "{} {}  {}  {}  {}",
        marker.yellow(),
        id.bold(),
        label,
        selection,
        format!("({})", view.filter_type).dimmed()
    )
}

pub(super) fn format_selection(selection: &SelectionSummary) -> String {
    match selection {
        SelectionSummary::Options(ids) if ids.is_empty() => UNSET.to_string(),
        SelectionSummary::Options(ids) => ids.join(", "),
        SelectionSummary::Rating(rating) => rating.clone().unwrap_or_else(|| UNSET.to_string()),
        SelectionSummary::Switch(on) => (if *on { "on" } else { "off" }).to_string(),
        SelectionSummary::Range(None, None) => UNSET.to_string(),
        SelectionSummary::Range(start, end) => {
            format!("{} .. {}", format_bound(*start), format_bound(*end))
        }
        SelectionSummary::Slider(value) => value
            .map(|v| v.to_string())
            .unwrap_or_else(|| UNSET.to_string()),
    }
}

fn format_bound(bound: Option<f64>) -> String {
    bound.map(|b| b.to_string()).unwrap_or_else(|| "*".to_string())
}

pub(super) fn render_state_path(path: &Path) -> String {
    format!("{}\n", format!("State: {}", path.display()).dimmed())
}

pub(super) fn render_config(config: &ScopeConfig) -> String {
    ScopeConfig::KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}\n", key, value)))
        .collect()
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}
