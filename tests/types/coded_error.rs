use error_code_rail::{
    client_data, impl_client_data, impl_error_code, internal, invalid_input, json_format, Code,
    CodedError, EmbedOp, ErrorCode, PlainError, Source, INTERNAL_CODE, INVALID_INPUT_CODE,
    NOT_FOUND_CODE, STATE_CODE,
};
use serde::Serialize;
use serde_json::json;
use std::error::Error;
use std::fmt;

static LOCKED: Code = STATE_CODE.child("state.locked");

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

#[test]
fn plain_source_takes_the_given_code() {
    let err = CodedError::new("bad page size", INVALID_INPUT_CODE);

    assert_eq!(err.code(), INVALID_INPUT_CODE);
    assert_eq!(err.to_string(), "bad page size");
    assert!(err.source_ref().code().is_none());
}

#[test]
fn coded_source_keeps_its_own_code() {
    let err = CodedError::new(Source::coded(Locked { owner: "ana" }), NOT_FOUND_CODE);

    assert_eq!(err.code(), LOCKED);
    assert_eq!(err.to_string(), "locked by ana");
}

#[test]
fn with_code_overrides_the_source_code() {
    let err = CodedError::with_code(Source::coded(Locked { owner: "ana" }), NOT_FOUND_CODE);

    assert_eq!(err.code(), NOT_FOUND_CODE);
    assert_eq!(err.source_ref().code(), Some(LOCKED));
}

#[test]
fn client_data_is_the_wrapped_error_not_the_wrapper() {
    let err = CodedError::new(Source::coded(Locked { owner: "ana" }), NOT_FOUND_CODE);

    assert_eq!(client_data(&err).to_json(), json!({ "owner": "ana" }));
    assert_eq!(json_format(&err).data, json!({ "owner": "ana" }));
}

#[test]
fn plain_error_data_is_its_message() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "disk unplugged");
    let err = CodedError::new(Source::plain(io), INVALID_INPUT_CODE);

    assert_eq!(client_data(&err).to_json(), json!("disk unplugged"));
}

#[test]
fn nested_coded_errors_keep_the_innermost_code() {
    let inner = CodedError::new(Source::coded(Locked { owner: "ana" }), INVALID_INPUT_CODE);
    let outer = CodedError::new(Source::coded(inner), NOT_FOUND_CODE);

    assert_eq!(outer.code(), LOCKED);
    assert_eq!(client_data(&outer).to_json(), json!({ "owner": "ana" }));
}

#[test]
fn error_source_exposes_plain_errors() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no file");
    let err = CodedError::new(PlainError::new(io), NOT_FOUND_CODE);

    let source = err.source().expect("plain source");
    assert_eq!(source.to_string(), "no file");
    assert!(source.downcast_ref::<std::io::Error>().is_some());

    let coded = CodedError::new(Source::coded(Locked { owner: "ana" }), NOT_FOUND_CODE);
    assert!(coded.source().is_none());
}

#[test]
fn boxed_error_code_converts_into_a_coded_source() {
    let boxed: Box<dyn ErrorCode + Send + Sync> = Box::new(Locked { owner: "bo" });
    let err = CodedError::new(boxed, INVALID_INPUT_CODE);

    assert_eq!(err.code(), LOCKED);
    assert!(matches!(err.into_source(), Source::Coded(_)));
}

#[test]
fn string_sources_are_plain() {
    let err = CodedError::new(String::from("owned message"), INVALID_INPUT_CODE);

    assert!(matches!(err.source_ref(), Source::Plain(_)));
    assert_eq!(err.source_ref().to_string(), "owned message");
}

#[derive(Debug, Serialize)]
struct QuotaExceeded {
    limit: u32,
    #[serde(skip)]
    op: EmbedOp,
}

impl fmt::Display for QuotaExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "more than {} requests", self.limit)
    }
}

impl Error for QuotaExceeded {}

impl_client_data!(QuotaExceeded, op = op);

fn quota(op: &'static str) -> QuotaExceeded {
    QuotaExceeded { limit: 3, op: EmbedOp::new(op) }
}

#[test]
fn plain_error_with_data_reports_its_fields() {
    let err = invalid_input(Source::plain_data(quota("")));
    let report = json_format(&err);

    assert_eq!(err.code(), INVALID_INPUT_CODE);
    assert_eq!(report.data, json!({ "limit": 3 }));
    assert_eq!(report.msg, "more than 3 requests");
}

#[test]
fn plain_error_with_data_exposes_its_operation() {
    let report = json_format(&internal(Source::plain_data(quota("quota.check"))));

    assert_eq!(report.code, "internal");
    assert_eq!(report.operation, "quota.check");
}

#[test]
fn plain_error_with_data_is_still_an_error_source() {
    let err = CodedError::new(PlainError::with_data(quota("")), INTERNAL_CODE);

    let source = err.source().expect("plain source");
    assert!(source.downcast_ref::<QuotaExceeded>().is_some());
    assert_eq!(format!("{:?}", err.source_ref()), format!("Plain({:?})", quota("")));

    let inner = err.into_source();
    let Source::Plain(plain) = inner else { panic!("expected a plain source") };
    assert!(plain.into_inner().downcast::<QuotaExceeded>().is_ok());
}

#[test]
fn plain_errors_convert_from_any_error() {
    let plain = PlainError::from(std::fmt::Error);

    assert_eq!(plain.data().to_json(), json!("an error occurred when formatting an argument"));
}
