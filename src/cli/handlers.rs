use std::path::Path;

use chrono::Local;

use crate::cli::commands::*;
use crate::cli::output::{TaskJson, TaskListJson};
use crate::io::document_io::{load_document, save_document};
use crate::model::line::LineNumber;
use crate::model::part::Part;
use crate::model::task::Task;
use crate::ops;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let path = Path::new(&cli.file);

    match cli.command {
        Commands::List => cmd_list(path, json),
        Commands::Add(args) => cmd_add(path, args),
        Commands::Toggle(args) => cmd_toggle(path, args),
        Commands::Search(args) => cmd_search(path, args),
        Commands::Move(args) => cmd_move(path, args),
        Commands::Parts(args) => cmd_parts(args, json),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn cmd_list(path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let document = load_document(path)?;
    let tasks = Task::parse_lines(&document.print());

    if json {
        let out = TaskListJson {
            file: document.name().to_string(),
            tasks: tasks
                .iter()
                .enumerate()
                .map(|(line, task)| TaskJson::new(line, task))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for (line, task) in tasks.iter().enumerate() {
        let marker = match task {
            Task::Blank => ' ',
            Task::Open { .. } => '·',
            Task::Done { .. } => 'x',
        };
        println!("{:>4} {} {}", line, marker, task.print());
    }
    Ok(())
}

fn cmd_add(path: &Path, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let document = load_document(path)?;
    let current = document.print();
    let updated = if current.is_empty() {
        document.content.change_text(&args.text)
    } else {
        document
            .content
            .change_text(&format!("{}\n{}", current, args.text))
    };
    save_document(&document.change_content(updated))?;
    println!("added: {}", args.text);
    Ok(())
}

fn cmd_toggle(path: &Path, args: ToggleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let document = load_document(path)?;
    let today = Local::now().date_naive();
    let updated = ops::toggle_task(&document.content, LineNumber::new(args.line), today)?;
    let changed = updated.get(LineNumber::new(args.line))?.text().to_string();
    save_document(&document.change_content(updated))?;
    println!("{:>4} {}", args.line, changed);
    Ok(())
}

fn cmd_search(path: &Path, args: SearchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let document = load_document(path)?;
    let filtered = ops::search(&document.content, &args.query);
    let matches = filtered.print();
    if !matches.is_empty() {
        println!("{}", matches);
    }
    Ok(())
}

fn cmd_move(path: &Path, args: MoveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let document = load_document(path)?;
    let number = LineNumber::new(args.line);
    let updated = match args.direction.as_str() {
        "up" => ops::move_line_up(&document.content, number),
        _ => ops::move_line_down(&document.content, number),
    };
    save_document(&document.change_content(updated))?;
    Ok(())
}

fn cmd_parts(args: PartsArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let task = Task::parse(&args.text);
    let parts = ops::parts(&task, &[])?;

    if json {
        println!("{}", serde_json::to_string_pretty(&parts)?);
        return Ok(());
    }

    for part in &parts {
        println!("{:<10} {}", part_label(part), part.print());
    }
    Ok(())
}

fn part_label(part: &Part) -> &'static str {
    match part {
        Part::PlainText(_) => "text",
        Part::Priority(_) => "priority",
        Part::Project(_) => "project",
        Part::Context(_) => "context",
        Part::WebLink(_) => "link",
        Part::Special { .. } => "tag",
        Part::Other(_) => "other",
    }
}
