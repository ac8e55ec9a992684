//! Observers for the copy demos. The copy itself never prints; demos hand
//! what they want shown to a [`Reporter`].

use colored::Colorize;

use crate::record::Cat;

pub trait Reporter {
    fn section(&mut self, title: &str);

    /// One line with every labelled cat's current value.
    fn values(&mut self, cats: &[(&str, &Cat)]);

    /// Storage addresses of a cat and its fields.
    fn addresses(&mut self, label: &str, cat: &Cat);

    fn note(&mut self, message: &str);
}

pub fn format_values(cats: &[(&str, &Cat)]) -> String {
    let parts = cats
        .iter()
        .map(|(label, cat)| format!("{label}:{cat}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("value {parts}")
}

pub fn format_addresses(label: &str, cat: &Cat) -> String {
    format!(
        "{label}: cat:{:p}, cat.name:{:p}, cat.tail:{:p}, cat.leg.count:{:p}, cat.leg.length:{:p}, cat.eye:{:p}",
        cat,
        &cat.name,
        &cat.tail,
        &cat.leg.count,
        cat.leg.length.as_ptr(),
        cat.eye.as_ptr(),
    )
}

/// Prints to stdout.
#[derive(Debug, Clone)]
pub struct ConsoleReporter {
    color: bool,
    trace_addresses: bool,
}

impl ConsoleReporter {
    pub fn new(color: bool, trace_addresses: bool) -> Self {
        ConsoleReporter {
            color: color && Self::should_use_colors(),
            trace_addresses,
        }
    }

    pub fn should_use_colors() -> bool {
        std::env::var("NO_COLOR").is_err()
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        ConsoleReporter::new(true, true)
    }
}

impl Reporter for ConsoleReporter {
    fn section(&mut self, title: &str) {
        let banner = format!("===================== {title} =====================");
        if self.color {
            println!("\n{}", banner.cyan().bold());
        } else {
            println!("\n{banner}");
        }
    }

    fn values(&mut self, cats: &[(&str, &Cat)]) {
        println!("{}", format_values(cats));
    }

    fn addresses(&mut self, label: &str, cat: &Cat) {
        if !self.trace_addresses {
            return;
        }
        let line = format_addresses(label, cat);
        if self.color {
            println!("{}", line.dimmed());
        } else {
            println!("{line}");
        }
    }

    fn note(&mut self, message: &str) {
        if self.color {
            println!("{}", message.yellow());
        } else {
            println!("{message}");
        }
    }
}

/// Keeps every line in memory. Addresses are recorded without their
/// pointer values so that output is comparable across runs.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    lines: Vec<String>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl Reporter for RecordingReporter {
    fn section(&mut self, title: &str) {
        self.lines.push(format!("== {title}"));
    }

    fn values(&mut self, cats: &[(&str, &Cat)]) {
        self.lines.push(format_values(cats));
    }

    fn addresses(&mut self, label: &str, _cat: &Cat) {
        self.lines.push(format!("addresses {label}"));
    }

    fn note(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }
}
