use dupescan::prompt::{gather_request, InputProvider, Prompter};
use std::collections::VecDeque;
use std::io::{self, Cursor};
use std::path::Path;

/// Scripted answers, recording every message shown.
struct Script {
    answers: VecDeque<&'static str>,
    shown: Vec<String>,
}

impl Script {
    fn new(answers: &[&'static str]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            shown: Vec::new(),
        }
    }
}

impl InputProvider for Script {
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        self.shown.push(message.to_string());
        Ok(self.answers.pop_front().map(str::to_string))
    }

    fn notice(&mut self, message: &str) -> io::Result<()> {
        self.shown.push(message.to_string());
        Ok(())
    }
}

#[test]
fn test_dialogue_order() {
    let mut script = Script::new(&["/data", "YES", "/data/a", "/data/b", "done"]);
    let request = gather_request(&mut script).unwrap();

    assert_eq!(request.root, Path::new("/data"));
    assert_eq!(request.ignore.len(), 2);
    assert_eq!(
        script.shown,
        vec![
            "Enter the target directory path: ",
            "Do you want to ignore specific directories? (yes/no): ",
            "Enter directories to ignore (one per line). Type 'done' when finished:",
            "Ignore path: ",
            "Ignore path: ",
            "Ignore path: ",
        ]
    );
}

#[test]
fn test_done_is_case_insensitive() {
    let mut script = Script::new(&["/data", "y", "Done", "/never"]);
    let request = gather_request(&mut script).unwrap();

    assert!(request.ignore.is_empty());
    assert_eq!(script.answers, vec!["/never"]);
}

#[test]
fn test_duplicate_ignore_paths_collapse() {
    let mut script = Script::new(&["/data", "yes", "/data/a", "/data/a/", "/data/./a", "done"]);
    let request = gather_request(&mut script).unwrap();
    assert_eq!(request.ignore.len(), 1);
}

#[test]
fn test_terminal_prompter_over_buffers() {
    let input = Cursor::new(b"/srv\r\nno\r\n".to_vec());
    let mut prompter = Prompter::new(input, Vec::new());

    let request = gather_request(&mut prompter).unwrap();
    assert_eq!(request.root, Path::new("/srv"));

    let shown = String::from_utf8(prompter.into_writer()).unwrap();
    assert_eq!(
        shown,
        "Enter the target directory path: Do you want to ignore specific directories? (yes/no): "
    );
}

#[test]
fn test_no_input_at_all() {
    let mut script = Script::new(&[]);
    let request = gather_request(&mut script).unwrap();

    assert_eq!(request.root, Path::new(""));
    assert!(request.ignore.is_empty());
}
