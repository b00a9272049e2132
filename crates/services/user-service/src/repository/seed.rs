//! Seed records loaded into a fresh store.

use chrono::{DateTime, TimeZone, Utc};
use domain::User;

fn born_on(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("seed dates are valid calendar dates")
}

/// The two records every seeded store starts with (ids 0 and 1).
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: 0,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            date_of_birth: born_on(1985, 12, 31),
            location_of_birth: "London".to_string(),
        },
        User {
            id: 1,
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            date_of_birth: born_on(1990, 6, 15),
            location_of_birth: "Manchester".to_string(),
        },
    ]
}
