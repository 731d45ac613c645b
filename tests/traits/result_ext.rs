use error_code_rail::traits::{OpResultExt, ResultExt};
use error_code_rail::{
    impl_error_code, internal, invalid_input, json_format, not_found, op, Code, ErrorCode,
    HasOperation, HttpStatusRegistry, InternalErr, InvalidInputErr, Source, INTERNAL_CODE,
    INVALID_INPUT_CODE, NOT_FOUND_CODE, STATE_CODE,
};
use serde::Serialize;
use serde_json::json;
use std::cell::Cell;
use std::error::Error;
use std::fmt;

static CONFLICT: Code = STATE_CODE.child("state.conflict");
static LOCKED: Code = STATE_CODE.child("state.locked");
static DB_DOWN: Code = INTERNAL_CODE.child("internal.db_down");

#[derive(Debug)]
struct Offline(&'static str);

impl fmt::Display for Offline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Error for Offline {}

#[derive(Debug, Serialize)]
struct Locked {
    owner: &'static str,
}

impl fmt::Display for Locked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "locked by {}", self.owner)
    }
}

impl Error for Locked {}

impl_error_code!(Locked, LOCKED);

fn parse_err() -> Result<u32, std::num::ParseIntError> {
    "ten".parse::<u32>()
}

fn offline(msg: &'static str) -> Result<(), Source> {
    Err(Source::plain(Offline(msg)))
}

fn locked() -> Result<(), Locked> {
    Err(Locked { owner: "ana" })
}

#[test]
fn classifies_plain_errors() {
    assert_eq!(parse_err().invalid_input().unwrap_err().code(), INVALID_INPUT_CODE);
    assert_eq!(parse_err().internal().unwrap_err().code(), INTERNAL_CODE);
    assert_eq!(parse_err().not_found().unwrap_err().code(), NOT_FOUND_CODE);
    assert_eq!(parse_err().with_code(CONFLICT).unwrap_err().code(), CONFLICT);
}

#[test]
fn ok_values_pass_through() {
    let ok: Result<u8, std::num::ParseIntError> = Ok(7);

    assert_eq!(ok.not_found().op("x.y").unwrap(), 7);
}

#[test]
fn classified_error_reports_the_message_as_data() {
    let err = offline("settings.toml is missing").not_found().unwrap_err();
    let report = json_format(&err);

    assert_eq!(report.msg, "settings.toml is missing");
    assert_eq!(report.data, "settings.toml is missing");
}

#[test]
fn errors_with_a_code_keep_it() {
    let err = locked().not_found().unwrap_err();

    assert_eq!(err.code(), LOCKED);
    assert_eq!(json_format(&err).data, json!({ "owner": "ana" }));
    assert_eq!(locked().invalid_input().unwrap_err().code(), LOCKED);
    assert_eq!(locked().with_code(CONFLICT).unwrap_err().code(), LOCKED);
}

#[test]
fn internal_errors_are_not_downgraded() {
    let statuses = HttpStatusRegistry::standard();
    let result: Result<(), InternalErr> = Err(internal("db unreachable"));

    let err = result.invalid_input().unwrap_err();
    assert_eq!(err.code(), INTERNAL_CODE);
    assert_eq!(statuses.status_for(&err), 500);

    let result: Result<(), InternalErr> = Err(internal(Source::coded(internal("x"))));
    assert_eq!(result.not_found().unwrap_err().code(), INTERNAL_CODE);
}

#[test]
fn classifying_again_keeps_the_first_kind() {
    let result: Result<(), InvalidInputErr> = Err(invalid_input("bad row"));
    assert_eq!(result.not_found().unwrap_err().code(), INVALID_INPUT_CODE);

    let result: Result<(), _> = Err(not_found("no such team"));
    assert_eq!(result.invalid_input().unwrap_err().code(), NOT_FOUND_CODE);
}

#[test]
fn internal_still_replaces_foreign_codes() {
    assert_eq!(locked().internal().unwrap_err().code(), INTERNAL_CODE);

    let result: Result<(), _> = Err(internal(Source::coded(Locked { owner: "bo" })));
    assert_eq!(result.invalid_input().unwrap_err().code(), INTERNAL_CODE);
}

#[test]
fn op_errors_keep_their_code() {
    let result: Result<(), _> = Err(op("user.save").add_to(internal(DbDown)));
    let err = result.invalid_input().unwrap_err();

    assert_eq!(err.code(), DB_DOWN);
    assert_eq!(err.to_string(), "user.save: database is down");
    assert!(err.source().is_none());
}

#[derive(Debug, Serialize)]
struct DbDown;

impl fmt::Display for DbDown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("database is down")
    }
}

impl_error_code!(DbDown, DB_DOWN);

#[test]
fn op_decorates_coded_errors() {
    let err = offline("bad row").invalid_input().op("csv.import").unwrap_err();

    assert_eq!(err.operation(), "csv.import");
    assert_eq!(err.code(), INVALID_INPUT_CODE);
    assert_eq!(json_format(&err).operation, "csv.import");
}

#[test]
fn op_with_only_runs_on_errors() {
    let calls = Cell::new(0);
    let label = || {
        calls.set(calls.get() + 1);
        format!("row.{}", 42)
    };

    let ok: Result<(), InvalidInputErr> = Ok(());
    assert!(ok.op_with(label).is_ok());
    assert_eq!(calls.get(), 0);

    let err = offline("bad").invalid_input().op_with(label).unwrap_err();
    assert_eq!(calls.get(), 1);
    assert_eq!(err.operation(), "row.42");
}
