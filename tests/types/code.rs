use error_code_rail::{Code, CodePathError, INTERNAL_CODE, INVALID_INPUT_CODE, STATE_CODE};
use std::collections::HashSet;

static STORAGE: Code = INTERNAL_CODE.child("internal.storage");
static DISK: Code = STORAGE.child("disk");
static BLOCKED: Code = STATE_CODE.child("state.blocked");
static BLOCKED_BARE: Code = STATE_CODE.child("blocked");

#[test]
fn root_code_str_is_the_segment() {
    for segment in ["internal", "a", "rate_limit", "x-y", "zürich"] {
        assert_eq!(Code::new(segment).code_str(), segment);
    }
}

#[test]
fn child_code_str_extends_parent() {
    assert_eq!(STORAGE.code_str(), "internal.storage");
    assert_eq!(DISK.code_str(), "internal.storage.disk");
    assert_eq!(BLOCKED.code_str(), "state.blocked");
    assert_eq!(BLOCKED_BARE.code_str(), "state.blocked");
}

#[test]
fn qualified_child_stores_only_local_segment() {
    assert_eq!(BLOCKED.segment(), "blocked");
    assert_eq!(STORAGE.segment(), "storage");
    assert_eq!(DISK.parent(), Some(&STORAGE));
    assert!(STATE_CODE.is_root());
    assert!(!BLOCKED.is_root());
}

#[test]
fn qualified_and_bare_children_are_the_same_code() {
    assert_eq!(BLOCKED, BLOCKED_BARE);

    let set: HashSet<Code> = [BLOCKED, BLOCKED_BARE].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn independently_built_codes_compare_by_path() {
    static OTHER_STATE: Code = Code::new("state");
    static OTHER_BLOCKED: Code = OTHER_STATE.child("state.blocked");

    assert_eq!(OTHER_BLOCKED, BLOCKED);
    assert!(OTHER_BLOCKED.is_descendant_of(&STATE_CODE));
    assert!(STATE_CODE.is_ancestor_of(&OTHER_BLOCKED));
}

#[test]
fn different_paths_are_different_codes() {
    static INPUT_BLOCKED: Code = INVALID_INPUT_CODE.child("blocked");

    assert_ne!(INPUT_BLOCKED, BLOCKED);
    assert_ne!(STORAGE, INTERNAL_CODE);
}

#[test]
fn wrong_qualified_parent_is_rejected_for_every_parent() {
    for parent in [&INTERNAL_CODE, &STATE_CODE, &STORAGE, &DISK] {
        let err = parent.try_child("wrong.segment").unwrap_err();
        assert_eq!(
            err,
            CodePathError::ParentMismatch {
                code: "wrong.segment",
                found: "wrong",
                expected: parent.segment(),
            }
        );
    }
}

#[test]
#[should_panic(expected = "second-to-last segment")]
fn wrong_qualified_parent_panics() {
    let _ = STATE_CODE.child("input.blocked");
}

#[test]
#[should_panic(expected = "must not contain the '.' separator")]
fn root_with_separator_panics() {
    let _ = Code::new("internal.db");
}

#[test]
#[should_panic(expected = "must not be empty")]
fn empty_root_panics() {
    let _ = Code::new("");
}

#[test]
fn try_new_reports_invalid_roots() {
    assert_eq!(
        Code::try_new("internal.db"),
        Err(CodePathError::RootContainsSeparator { code: "internal.db" })
    );
    assert_eq!(Code::try_new(""), Err(CodePathError::Empty { code: "" }));
    assert_eq!(Code::try_new("internal"), Ok(INTERNAL_CODE));
}

#[test]
fn code_path_error_messages_name_the_code() {
    let err = STATE_CODE.try_child("input.blocked").unwrap_err();

    assert_eq!(err.code(), "input.blocked");
    assert_eq!(
        err.to_string(),
        r#"got "input" but expected a path to parent "state" for "input.blocked""#
    );
}

#[test]
fn ancestors_walk_from_code_to_root() {
    let segments: Vec<_> = DISK.ancestors().map(Code::segment).collect();

    assert_eq!(segments, ["disk", "storage", "internal"]);
    assert_eq!(DISK.root(), &INTERNAL_CODE);
    assert_eq!(INTERNAL_CODE.root(), &INTERNAL_CODE);
}

#[test]
fn descendant_checks_include_the_code_itself() {
    assert!(DISK.is_descendant_of(&DISK));
    assert!(DISK.is_descendant_of(&STORAGE));
    assert!(DISK.is_descendant_of(&INTERNAL_CODE));
    assert!(!DISK.is_descendant_of(&STATE_CODE));
    assert!(!STORAGE.is_descendant_of(&DISK));

    assert!(INTERNAL_CODE.is_ancestor_of(&DISK));
    assert!(!DISK.is_ancestor_of(&INTERNAL_CODE));
}

#[test]
fn display_debug_and_serialize_use_the_full_path() {
    assert_eq!(DISK.to_string(), "internal.storage.disk");
    assert_eq!(format!("{DISK:?}"), "Code(internal.storage.disk)");
    assert_eq!(serde_json::to_string(&DISK).unwrap(), r#""internal.storage.disk""#);
}

#[test]
fn code_str_exposes_segments() {
    let code_str = DISK.code_str();

    assert_eq!(code_str.segments().collect::<Vec<_>>(), ["internal", "storage", "disk"]);
    assert_eq!(code_str.as_str(), "internal.storage.disk");
    assert_eq!(String::from(code_str), "internal.storage.disk");
}
