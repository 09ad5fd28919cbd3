use gradebook_core::{compute_totals, Gradebook, RollPolicy, Scope};

fn maths_nine() -> Gradebook {
    Gradebook::new(Scope::new("Maths", "9").unwrap(), RollPolicy::CountBased)
}

#[test]
fn add_student_generates_sequential_rolls() {
    let mut book = maths_nine();

    let first = book.add_student("Asha").unwrap().roll.clone();
    let second = book.add_student("Ravi").unwrap().roll.clone();

    assert_eq!(first, "9-M-01");
    assert_eq!(second, "9-M-02");
    assert!(book.students().iter().all(|s| s.marks.is_empty()));
    assert!(book.is_dirty());
}

#[test]
fn add_student_ignores_blank_names() {
    let mut book = maths_nine();

    assert!(book.add_student("").is_none());
    assert!(book.add_student("   ").is_none());
    assert!(book.students().is_empty());
    assert!(!book.is_dirty());
}

#[test]
fn add_test_rejects_blank_title_bad_max_marks_and_duplicates() {
    let mut book = maths_nine();

    assert!(book.add_test(" ", "50").is_none());
    assert!(book.add_test("Unit1", "fifty").is_none());
    assert!(book.add_test("Unit1", "").is_none());
    assert!(book.add_test("Unit1", "0").is_none());
    assert!(book.add_test("Unit1", "-5").is_none());
    assert!(book.tests().is_empty());

    assert_eq!(book.add_test("Unit1", "50").unwrap().max_marks, 50.0);
    assert!(book.add_test("Unit1", "80").is_none());

    let unit1: Vec<_> = book.tests().iter().filter(|t| t.title == "Unit1").collect();
    assert_eq!(unit1.len(), 1);
    assert_eq!(unit1[0].max_marks, 50.0);
}

#[test]
fn add_test_selects_the_new_test() {
    let mut book = maths_nine();

    book.add_test("Unit1", "50").unwrap();
    assert_eq!(book.selected_test(), Some("Unit1"));
    book.add_test("Unit2", "25.5").unwrap();
    assert_eq!(book.selected_test(), Some("Unit2"));

    assert!(book.select_test("Unit1"));
    assert!(!book.select_test("Missing"));
    assert_eq!(book.selected_test(), Some("Unit1"));
}

#[test]
fn delete_test_cascades_to_every_student() {
    let mut book = maths_nine();
    book.add_student("Asha").unwrap();
    book.add_student("Ravi").unwrap();
    book.add_test("Unit1", "50").unwrap();
    book.add_test("Unit2", "50").unwrap();
    book.update_mark(0, "Unit1", "40").unwrap();
    book.update_mark(1, "Unit1", "20").unwrap();
    book.update_mark(1, "Unit2", "30").unwrap();
    book.select_test("Unit1");

    let removed = book.delete_test("Unit1").unwrap();
    assert_eq!(removed.title, "Unit1");

    assert!(book.find_test("Unit1").is_none());
    assert!(book.students().iter().all(|s| !s.marks.contains_key("Unit1")));
    assert_eq!(book.selected_test(), None);

    let totals = compute_totals(&book.students()[1], book.tests());
    assert_eq!(totals.total, 30.0);
    assert_eq!(totals.max_total, 50.0);
}

#[test]
fn delete_test_keeps_unrelated_selection() {
    let mut book = maths_nine();
    book.add_test("Unit1", "50").unwrap();
    book.add_test("Unit2", "50").unwrap();

    book.delete_test("Unit1").unwrap();
    assert_eq!(book.selected_test(), Some("Unit2"));
    assert!(book.delete_test("Unit1").is_none());
}

#[test]
fn delete_student_leaves_tests_untouched() {
    let mut book = maths_nine();
    book.add_student("Asha").unwrap();
    book.add_student("Ravi").unwrap();
    book.add_test("Unit1", "50").unwrap();

    let removed = book.delete_student(0).unwrap();
    assert_eq!(removed.name, "Asha");
    assert_eq!(book.students().len(), 1);
    assert_eq!(book.students()[0].name, "Ravi");
    assert_eq!(book.tests().len(), 1);

    assert!(book.delete_student(5).is_none());
}

#[test]
fn count_based_rolls_can_collide_after_deletion() {
    let mut book = maths_nine();
    book.add_student("Asha").unwrap();
    book.add_student("Ravi").unwrap();
    book.delete_student(0).unwrap();

    let roll = book.add_student("Meena").unwrap().roll.clone();
    assert_eq!(roll, "9-M-02");
    assert_eq!(
        book.students().iter().filter(|s| s.roll == "9-M-02").count(),
        2
    );
}

#[test]
fn next_after_highest_rolls_do_not_collide_after_deletion() {
    let mut book = Gradebook::new(
        Scope::new("Maths", "9").unwrap(),
        RollPolicy::NextAfterHighest,
    );
    book.add_student("Asha").unwrap();
    book.add_student("Ravi").unwrap();
    book.delete_student(0).unwrap();

    let roll = book.add_student("Meena").unwrap().roll.clone();
    assert_eq!(roll, "9-M-03");
}

#[test]
fn update_mark_stores_values_unconditionally() {
    let mut book = maths_nine();
    book.add_student("Asha").unwrap();
    book.add_test("Unit1", "50").unwrap();

    assert_eq!(book.update_mark(0, "Unit1", "75"), Some(75.0));
    assert_eq!(book.students()[0].mark("Unit1"), Some(75.0));

    assert_eq!(book.update_mark(0, "Unit1", "12abc"), Some(12.0));

    let stored = book.update_mark(0, "Unit1", "abc").unwrap();
    assert!(stored.is_nan());
    assert!(book.students()[0].mark("Unit1").unwrap().is_nan());
    assert_eq!(book.students()[0].graded_mark("Unit1"), None);

    assert_eq!(book.update_mark(3, "Unit1", "10"), None);
}

#[test]
fn zero_mark_is_graded_but_absent_mark_is_not() {
    let mut book = maths_nine();
    book.add_student("Asha").unwrap();
    book.add_student("Ravi").unwrap();
    book.add_test("Unit1", "50").unwrap();
    book.update_mark(0, "Unit1", "0").unwrap();

    let graded = compute_totals(&book.students()[0], book.tests());
    let ungraded = compute_totals(&book.students()[1], book.tests());
    assert_eq!((graded.total, graded.max_total), (0.0, 50.0));
    assert_eq!((ungraded.total, ungraded.max_total), (0.0, 0.0));
}

#[test]
fn lookup_by_roll_is_exact() {
    let mut book = maths_nine();
    book.add_student("Asha").unwrap();

    assert_eq!(book.lookup_by_roll("9-M-01").unwrap().name, "Asha");
    assert!(book.lookup_by_roll("9-m-01").is_none());
    assert!(book.lookup_by_roll(" 9-M-01").is_none());
    assert!(book.lookup_by_roll("9-M-02").is_none());
}
