//! HTTP API Error Responses
//!
//! Turning any `ErrorCode` into a status and a JSON body, with statuses inherited down the code
//! hierarchy.
//!
//! Run with: `cargo run --example http_api`

use error_code_rail::prelude::*;
use serde::Serialize;
use std::fmt;

static TEAM: Code = STATE_CODE.child("state.team");
static TEAM_FULL: Code = TEAM.child("team.full");
static TEAM_ARCHIVED: Code = TEAM.child("team.archived");

#[derive(Debug, Serialize)]
struct TeamFull {
    team: String,
    capacity: usize,
}

impl fmt::Display for TeamFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "team {} already has {} members", self.team, self.capacity)
    }
}

impl_error_code!(TeamFull, TEAM_FULL);

// Build once at startup, then share read-only.
fn statuses() -> HttpStatusRegistry {
    HttpStatusRegistry::standard_builder().with(&TEAM, 409).build()
}

fn add_member(team: &str, user: &str) -> Result<(), Box<dyn ErrorCode + Send + Sync>> {
    let op = op("team.add_member");

    if user.is_empty() {
        return Err(Box::new(op.add_to(invalid_input("user name must not be empty"))));
    }
    match team {
        "core" => Err(Box::new(op.add_to(TeamFull { team: team.into(), capacity: 8 }))),
        "legacy" => Err(Box::new(op.add_to(CodedError::new("team is archived", TEAM_ARCHIVED)))),
        "payments" => Err(Box::new(op.add_to(internal("membership store unreachable")))),
        "" => Err(Box::new(op.add_to(not_found("no team given")))),
        _ => Ok(()),
    }
}

// Convert to HTTP response
fn handle_request(statuses: &HttpStatusRegistry, team: &str, user: &str) -> (u16, String) {
    match add_member(team, user) {
        Ok(()) => (200, "{}".to_string()),
        Err(err) => {
            let status = statuses.status_for(&err);
            let body = serde_json::to_string(&json_format(&err)).unwrap_or_default();
            (status, body)
        },
    }
}

fn main() {
    let statuses = statuses();

    for (team, user) in
        [("core", "ana"), ("legacy", "ana"), ("payments", "ana"), ("", "ana"), ("core", ""), ("web", "bo")]
    {
        let (status, body) = handle_request(&statuses, team, user);
        println!("{status} {body}");
    }
    // 409 {"data":{"team":"core","capacity":8},"msg":"team.add_member: team core already has 8 members","code":"state.team.full","operation":"team.add_member"}
    // 409 {"data":"team is archived","msg":"team.add_member: team is archived","code":"state.team.archived","operation":"team.add_member"}
    // 500 {"data":"membership store unreachable",...,"code":"internal",...}
    // 404 ...
    // 400 ...
    // 200 {}
}
