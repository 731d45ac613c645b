//! Domain Errors
//!
//! Declaring a code hierarchy for one service, attaching custom meta data to it, and promoting
//! library errors that have no code of their own.
//!
//! Run with: `cargo run --example domain_errors`

use error_code_rail::prelude::*;
use serde::Serialize;
use std::fmt;

static INVOICE: Code = STATE_CODE.child("state.invoice");
static INVOICE_PAID: Code = INVOICE.child("invoice.paid");
static INVOICE_VOID: Code = INVOICE.child("invoice.void");
static STORAGE: Code = INTERNAL_CODE.child("internal.storage");

#[derive(Debug, Clone, Copy)]
enum Severity {
    Page,
    Ticket,
    Ignore,
}

#[derive(Debug, Serialize)]
struct InvoicePaid {
    invoice: u64,
    #[serde(skip)]
    op: EmbedOp,
}

impl fmt::Display for InvoicePaid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invoice {} is already paid", self.invoice)
    }
}

impl_error_code!(InvoicePaid, INVOICE_PAID, op = op);

fn severities() -> MetaData<Severity> {
    let mut builder = MetaDataBuilder::new();
    INTERNAL_CODE.attach_meta_data(&mut builder, Severity::Page);
    STATE_CODE.attach_meta_data(&mut builder, Severity::Ignore);
    INVOICE.attach_meta_data(&mut builder, Severity::Ticket);
    builder.seal()
}

fn load_invoice(path: &str) -> Result<String, OpErrCode<InternalErr>> {
    std::fs::read_to_string(path).map_err(Source::plain).internal().op("invoice.load")
}

fn pay(invoice: u64) -> Result<(), InvoicePaid> {
    Err(InvoicePaid { invoice, op: EmbedOp::new("invoice.pay") })
}

fn report<E: ErrorCode>(severities: &MetaData<Severity>, err: &E) {
    let severity = err.code().meta_data_from_ancestors(severities).copied();
    println!("[{severity:?}] {}", json_format(err).code);
    println!("    {err}");
}

fn main() {
    let severities = severities();

    for code in [&INVOICE_PAID, &INVOICE_VOID, &STORAGE] {
        println!("{code} -> {:?}", code.meta_data_from_ancestors(&severities));
    }

    if let Err(err) = pay(42) {
        report(&severities, &err);
    }
    if let Err(err) = load_invoice("/var/invoices/42.json") {
        report(&severities, &err);
    }
}
