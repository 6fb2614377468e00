//! Test fixtures
//!
//! Feed documents in the shape of the public sheet export.

use uuid::Uuid;

/// Header row in sheet order
pub const HEADER: &str = "IGN,UUID,Reason,Date Banned,Length of Ban,Expiry Date,Case";

pub const NOTCH: &str = "069a79f4-44e9-4726-a5be-fca90e38aaf5";
pub const JEB: &str = "853c80ef-3c37-49fd-aa49-938b674adae6";
pub const DINNERBONE: &str = "61699b2e-d327-4a01-9f1e-0ea8c3f06bc6";

/// Permanent ban for Notch
pub const NOTCH_PERMANENT: &str = "Notch,069a79f4-44e9-4726-a5be-fca90e38aaf5,\"Fly, speed and kill aura\",\"12 September, 2018\",Permanent,Never,https://redd.it/9f2a1b";

/// Temporary ban for Jeb that expired in 2020
pub const JEB_EXPIRED: &str = "jeb_,853c80ef-3c37-49fd-aa49-938b674adae6,Duping,\"1 January, 2019\",1 Year,\"1 January, 2020\",https://redd.it/a01";

/// Temporary ban for Jeb running until 2099
pub const JEB_ACTIVE: &str = "jeb_,853c80ef-3c37-49fd-aa49-938b674adae6,Griefing,\"5 January, 2049\",\"50 Years, 2 Weeks\",\"19 January, 2099\",https://redd.it/b02";

/// Temporary ban for Dinnerbone that expired in 2019
pub const DINNERBONE_EXPIRED: &str = "Dinnerbone,61699b2e-d327-4a01-9f1e-0ea8c3f06bc6,Spam,\"1 March, 2019\",2 Months,\"1 May, 2019\",https://redd.it/c03";

/// Rows that each fail decoding for a different reason
pub const MALFORMED_ROWS: [&str; 5] = [
    // identity is a username
    "Steve,Steve,X-Ray,\"1 June, 2019\",Permanent,Never,https://redd.it/d04",
    // no such date
    "Alex,ec561538-f3fd-461d-aff5-086b22154bce,X-Ray,\"31 February, 2020\",Permanent,Never,https://redd.it/e05",
    // days are not a unit
    "Herobrine,f84c6a79-0a4e-45e0-879b-cd49ebd4c4e2,X-Ray,\"1 June, 2019\",3 Days,\"4 June, 2019\",https://redd.it/f06",
    // lowercase marker is not recognised
    "Grumm,e6b5c088-0680-44df-9e1b-9bf11792291b,X-Ray,\"1 June, 2019\",Permanent,never,https://redd.it/g07",
    // short row, Case is missing
    "Ez,4d3b5e1a-1c1f-4f0e-9d4e-6f3c2b1a0d9e,X-Ray,\"1 June, 2019\",Permanent,Never",
];

/// Build a feed document from the standard header and the given rows
pub fn feed(rows: &[&str]) -> String {
    let mut doc = String::from(HEADER);
    for row in rows {
        doc.push('\n');
        doc.push_str(row);
    }
    doc.push('\n');
    doc
}

/// The same records as `feed(&[NOTCH_PERMANENT, JEB_ACTIVE])` with shuffled columns
pub fn reordered_feed() -> String {
    [
        "Case,Expiry Date,UUID,Reason,IGN,Length of Ban,Date Banned",
        "https://redd.it/9f2a1b,Never,069a79f4-44e9-4726-a5be-fca90e38aaf5,\"Fly, speed and kill aura\",Notch,Permanent,\"12 September, 2018\"",
        "https://redd.it/b02,\"19 January, 2099\",853c80ef-3c37-49fd-aa49-938b674adae6,Griefing,jeb_,\"50 Years, 2 Weeks\",\"5 January, 2049\"",
    ]
    .join("\r\n")
}

pub fn uuid(s: &str) -> Uuid {
    Uuid::parse_str(s).unwrap_or_else(|e| panic!("fixture UUID {s} is invalid: {e}"))
}
