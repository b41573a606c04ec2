use std::fs;

use pdf_quiz::{parse_mcqs, App, Quiz, SourceKind};

const DOCUMENT: &str = "\
Sample Exam
Chapter 1

1. What is the capital of France?
A. Berlin
B. Paris
C. Madrid
D. Rome
Answer: B. Paris
Explanation: Paris is the capital of France.

Page 2
2. What is 2+2?
A. 3
B. 4
Answer: B. 4
";

#[test]
fn parsed_document_drives_a_session() {
    let questions = parse_mcqs(DOCUMENT);
    assert_eq!(questions.len(), 2);

    let mut app = App::with_questions(questions);
    app.select_option("A. Berlin");
    assert_eq!(app.score(), 0);
    app.select_option("B. Paris");
    assert_eq!(app.score(), 0, "second selection must be ignored");

    app.advance();
    app.select_option("B. 4");
    assert_eq!(app.score(), 1);
}

#[test]
fn text_file_round_trips_through_json_export() {
    let dir = tempfile::tempdir().unwrap();
    let text_path = dir.path().join("exam.txt");
    let json_path = dir.path().join("exam.json");
    fs::write(&text_path, DOCUMENT).unwrap();

    let quiz = Quiz::from_path(&text_path).unwrap();
    quiz.export_json(&json_path).unwrap();
    assert_eq!(SourceKind::from_path(&json_path), SourceKind::Json);

    let reloaded = Quiz::from_path(&json_path).unwrap();
    assert_eq!(reloaded.questions(), quiz.questions());
}

#[test]
fn unreadable_pdf_reports_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scan.pdf");
    fs::write(&path, b"not a pdf at all").unwrap();

    let err = Quiz::from_path(&path).err().expect("load should fail");
    assert!(err.to_string().contains("scan.pdf"));
}
