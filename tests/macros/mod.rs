use error_code_rail::{
    impl_client_data, impl_error_code, json_format, operation, ClientData, Code, EmbedOp,
    ErrorCode, HttpStatusRegistry, NOT_FOUND_CODE,
};
use serde::Serialize;
use serde_json::json;
use std::fmt;

static INVOICE_MISSING: Code = NOT_FOUND_CODE.child("missing.invoice");

#[derive(Debug, Serialize)]
struct InvoiceMissing {
    id: u64,
}

impl fmt::Display for InvoiceMissing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invoice {} does not exist", self.id)
    }
}

impl_error_code!(InvoiceMissing, INVOICE_MISSING);

#[derive(Debug, Serialize)]
struct Retry {
    after_secs: u32,
    #[serde(skip)]
    during: EmbedOp,
}

impl_client_data!(Retry, op = during);

#[test]
fn impl_error_code_sets_code_and_data() {
    let err = InvoiceMissing { id: 7 };
    let statuses = HttpStatusRegistry::standard();

    assert_eq!(err.code(), INVOICE_MISSING);
    assert_eq!(statuses.status_for(&err), 404);
    assert_eq!(
        serde_json::to_value(json_format(&err)).unwrap(),
        json!({
            "data": { "id": 7 },
            "msg": "invoice 7 does not exist",
            "code": "missing.invoice",
        })
    );
}

#[test]
fn impl_client_data_without_op_has_no_operation() {
    #[derive(Debug, Serialize)]
    struct Limits {
        max: u8,
    }

    impl_client_data!(Limits);

    let limits = Limits { max: 3 };
    assert_eq!(limits.to_json(), json!({ "max": 3 }));
    assert_eq!(operation(&limits), None);
}

#[test]
fn impl_client_data_with_op_exposes_the_field() {
    let retry = Retry { after_secs: 30, during: EmbedOp::new("sync.pull") };

    assert_eq!(retry.to_json(), json!({ "after_secs": 30 }));
    assert_eq!(operation(&retry), Some("sync.pull"));
}

#[test]
fn impl_error_code_accepts_trailing_comma_and_op() {
    #[derive(Debug, Serialize)]
    struct Gone {
        #[serde(skip)]
        op: EmbedOp,
    }

    impl fmt::Display for Gone {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("gone")
        }
    }

    impl_error_code!(Gone, NOT_FOUND_CODE, op = op,);

    let report = json_format(&Gone { op: EmbedOp::new("file.open") });
    assert_eq!(report.code, "missing");
    assert_eq!(report.operation, "file.open");
    assert_eq!(report.data, json!({}));
}
