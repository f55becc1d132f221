use student_roster::{LocalStorage, Roster, RosterError, Student};
use tempfile::TempDir;

fn storage_in(temp_dir: &TempDir) -> LocalStorage {
    LocalStorage::new(temp_dir.path().to_str().unwrap().to_string())
}

#[tokio::test]
async fn test_end_to_end_save_and_reload_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let storage = storage_in(&temp_dir);

    let mut roster = Roster::new();
    roster.add(Student::new("Alice", 2, "a@x.com", "CS"));
    roster.add(Student::new("Bob", 3, "b@x.com", "EE"));
    roster.add(Student::new("Cara", 1, "c@x.com", "CS"));
    let before: Vec<Student> = roster.iter().cloned().collect();

    roster.save(&storage, "students.json").await.unwrap();

    let on_disk = std::fs::read_to_string(temp_dir.path().join("students.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&on_disk).unwrap();
    assert_eq!(parsed[0]["name"], "Alice");
    assert_eq!(parsed[1]["year"], 3);
    assert_eq!(parsed[2]["specialization"], "CS");
    assert!(on_disk.contains("\n  {\n    \"name\": \"Alice\""));

    roster.clear();
    assert_eq!(roster.len(), 0);

    roster.load(&storage, "students.json").await.unwrap();
    let after: Vec<Student> = roster.iter().cloned().collect();
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_save_overwrites_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let storage = storage_in(&temp_dir);

    let mut roster = Roster::new();
    roster.add(Student::new("Alice", 2, "a@x.com", "CS"));
    roster.add(Student::new("Bob", 3, "b@x.com", "EE"));
    roster.save(&storage, "students.json").await.unwrap();

    roster.remove("a@x.com");
    roster.save(&storage, "students.json").await.unwrap();

    let mut reloaded = Roster::new();
    reloaded.load(&storage, "students.json").await.unwrap();
    assert_eq!(reloaded.display_names(), "Bob");
}

#[tokio::test]
async fn test_load_accepts_hand_written_json() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("import.json"),
        r#"[{"specialization":"Math","email":"m@x.com","year":4,"name":"Mia","gpa":3.9},{"name":"Noor"}]"#,
    )
    .unwrap();
    let storage = storage_in(&temp_dir);

    let mut roster = Roster::new();
    roster.load(&storage, "import.json").await.unwrap();

    assert_eq!(roster.display_names(), "Mia, Noor");
    assert_eq!(roster.find("m@x.com").unwrap().year, 4);
    assert_eq!(roster.filter_by_specialization("Math").len(), 1);
}

#[tokio::test]
async fn test_invalid_utf8_file_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("latin1.json"),
        b"[{\"name\": \"Jos\xe9\", \"year\": 1, \"email\": \"j@x.com\"}]",
    )
    .unwrap();
    let storage = storage_in(&temp_dir);

    let mut roster = Roster::new();
    roster.add(Student::new("Alice", 2, "a@x.com", "CS"));

    let result = roster.load(&storage, "latin1.json").await;
    assert!(matches!(result, Err(RosterError::ParseError(_))));
    assert_eq!(roster.display_names(), "Alice");
}

#[tokio::test]
async fn test_accented_names_survive_disk_and_sort_by_base_letter() {
    let temp_dir = TempDir::new().unwrap();
    let storage = storage_in(&temp_dir);

    let mut roster = Roster::new();
    roster.add(Student::new("Zoe", 2, "z@x.com", "CS"));
    roster.add(Student::new("Émile", 3, "e@x.com", "CS"));
    roster.add(Student::new("Ángel", 1, "an@x.com", "CS"));
    roster.add(Student::new("Bob", 4, "b@x.com", "CS"));
    roster.save(&storage, "accents.json").await.unwrap();

    let mut reloaded = Roster::new();
    reloaded.load(&storage, "accents.json").await.unwrap();
    assert_eq!(reloaded.display_names(), "Zoe, Émile, Ángel, Bob");

    let sorted: Vec<&str> = reloaded
        .filter_by_specialization("CS")
        .into_iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(sorted, vec!["Ángel", "Bob", "Émile", "Zoe"]);
}

#[tokio::test]
async fn test_failed_load_leaves_roster_intact() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("bad.json"), "not json at all").unwrap();
    let storage = storage_in(&temp_dir);

    let mut roster = Roster::new();
    roster.add(Student::new("Alice", 2, "a@x.com", "CS"));

    let parse_failure = roster.load(&storage, "bad.json").await;
    assert!(matches!(parse_failure, Err(RosterError::ParseError(_))));

    let missing = roster.load(&storage, "absent.json").await;
    assert!(matches!(missing, Err(RosterError::IoError(_))));

    assert_eq!(roster.display_names(), "Alice");
}

#[tokio::test]
async fn test_save_into_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let storage = storage_in(&temp_dir);

    let mut roster = Roster::new();
    roster.add(Student::new("Alice", 2, "a@x.com", "CS"));

    let result = roster.save(&storage, "no/such/dir/students.json").await;
    assert!(matches!(result, Err(RosterError::IoError(_))));
}

#[test]
fn test_add_remove_find_and_filter_scenario() {
    let mut roster = Roster::new();
    roster.add(Student::new("Alice", 2, "a@x.com", "CS"));
    roster.add(Student::new("Bob", 3, "b@x.com", "EE"));
    assert_eq!(roster.display_names(), "Alice, Bob");

    roster.remove("a@x.com");
    assert_eq!(roster.display_names(), "Bob");
    assert!(roster.find("a@x.com").is_none());

    let seniors: Vec<&str> = roster
        .filter_by_min_year(3)
        .into_iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(seniors, vec!["Bob"]);
}

#[test]
fn test_filters_are_sorted_and_leave_order_untouched() {
    let roster: Roster = vec![
        Student::new("walt", 2, "w@x.com", "Physics"),
        Student::new("Quinn", 4, "q@x.com", "Physics"),
        Student::new("Ada", 3, "ada@x.com", "Math"),
        Student::new("bea", 3, "bea@x.com", "Physics"),
    ]
    .into_iter()
    .collect();

    let physics: Vec<&str> = roster
        .filter_by_specialization("Physics")
        .into_iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(physics, vec!["bea", "Quinn", "walt"]);

    let upper_years: Vec<&str> = roster
        .filter_by_min_year(3)
        .into_iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(upper_years, vec!["Ada", "bea", "Quinn"]);

    assert_eq!(roster.display_names(), "walt, Quinn, Ada, bea");
}
