use colored::*;
use console::Term;
use textwrap::wrap;

fn term_width() -> usize {
    let width = Term::stdout().size().1 as usize;
    if width == 0 {
        80
    } else {
        width
    }
}

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print text wrapped to the terminal width
pub fn print_text(text: &str) {
    let width = term_width().saturating_sub(10).max(20);
    for line in text.lines() {
        if line.starts_with('-') || line.starts_with('*') {
            println!("{}", line);
        } else {
            for wrapped_line in wrap(line, width) {
                println!("{}", wrapped_line);
            }
        }
    }
}

#[derive(Clone, Copy)]
enum Tag {
    Error,
    Warning,
    Success,
    Info,
}

fn print_tagged(tag: Tag, message: &str) {
    let label = match tag {
        Tag::Error => "error".red().bold(),
        Tag::Warning => "warning".yellow().bold(),
        Tag::Success => "ok".green().bold(),
        Tag::Info => "info".cyan(),
    };
    match tag {
        Tag::Error => eprintln!("{:>8}  {}", label, message),
        _ => println!("{:>8}  {}", label, message),
    }
}

pub fn print_error(message: &str) {
    print_tagged(Tag::Error, message);
}

pub fn print_warning(message: &str) {
    print_tagged(Tag::Warning, message);
}

pub fn print_success(message: &str) {
    print_tagged(Tag::Success, message);
}

pub fn print_info(message: &str) {
    print_tagged(Tag::Info, message);
}

/// Print a `label: value` line; an empty value leaves room for a list below
pub fn print_field(label: &str, value: &str) {
    if value.is_empty() {
        println!("{}:", label.bold());
    } else {
        let label = format!("{}:", label);
        println!("{:<20} {}", label.as_str().bold(), value);
    }
}

/// Print one indented list entry
pub fn print_item(item: &str) {
    println!("    {} {}", "-".dimmed(), item);
}
