use crate::grouper::SortDirection;
use anyhow::Result;
use console::style;
use dialoguer::Input;

/// Options gathered from the user before the pipeline runs. The pipeline
/// itself never touches stdin; everything it needs is decided up front here
/// (except the delete selection, which depends on the presented candidates).
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub file_format: String,
    pub direction: SortDirection,
    pub check_duplicates: bool,
    pub delete_requested: bool,
}

/// Run the ordered prompt sequence once and build the options value.
pub fn gather() -> Result<RunOptions> {
    let file_format = read_file_format()?;
    let direction = read_sort_direction()?;
    let check_duplicates = read_yes_no("Check for duplicates? (yes/no)")?;
    let delete_requested = read_yes_no("Delete files? (yes/no)")?;
    Ok(RunOptions {
        file_format,
        direction,
        check_duplicates,
        delete_requested,
    })
}

pub fn parse_sort_option(input: &str) -> Option<SortDirection> {
    match input.trim() {
        "1" => Some(SortDirection::Descending),
        "2" => Some(SortDirection::Ascending),
        _ => None,
    }
}

pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

/// Parse a whole line of whitespace-separated 1-based indices against the
/// candidate count. One bad token invalidates the entire line; an empty line
/// is invalid too.
pub fn parse_selection(line: &str, count: usize) -> Option<Vec<usize>> {
    let mut indices = Vec::new();
    for token in line.split_whitespace() {
        let index: usize = token.parse().ok()?;
        if index < 1 || index > count {
            return None;
        }
        indices.push(index);
    }
    if indices.is_empty() { None } else { Some(indices) }
}

pub fn read_file_format() -> Result<String> {
    let format: String = Input::new()
        .with_prompt("Enter file format")
        .allow_empty(true)
        .interact_text()?;
    Ok(format.trim().to_string())
}

pub fn read_sort_direction() -> Result<SortDirection> {
    println!("Size sorting options:");
    println!("{} Descending", style("1.").cyan());
    println!("{} Ascending", style("2.").cyan());

    loop {
        let input: String = Input::new()
            .with_prompt("Sorting option")
            .interact_text()?;
        match parse_sort_option(&input) {
            Some(direction) => return Ok(direction),
            None => println!("{}", style("Wrong option").yellow()),
        }
    }
}

pub fn read_yes_no(question: &str) -> Result<bool> {
    loop {
        let input: String = Input::new().with_prompt(question).interact_text()?;
        match parse_yes_no(&input) {
            Some(answer) => return Ok(answer),
            None => println!("{}", style("Wrong option").yellow()),
        }
    }
}

/// Ask for the indices to delete, re-prompting until the whole line is valid.
/// Callers must only invoke this with a non-empty candidate list.
pub fn read_selection(count: usize) -> Result<Vec<usize>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Enter file numbers to delete")
            .allow_empty(true)
            .interact_text()?;
        match parse_selection(&input, count) {
            Some(indices) => return Ok(indices),
            None => println!("{}", style("Wrong format").yellow()),
        }
    }
}
