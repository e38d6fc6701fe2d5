//! Priority resolution.
//!
//! Picks the user that should own the light given the directory and the
//! current occupancy:
//!
//! 1. An occupied `USER1` wins outright.
//! 2. Otherwise an occupied `USER2`.
//! 3. Otherwise an occupied `USER3`, but only one that is already entitled
//!    to the light through [`Continuity`]. Occupancy alone never hands the
//!    light to a `USER3`; that takes an explicit claim.
//!
//! Ties within a tier go to the lowest `user_id`.

use smartlight_proto::{UserRecord, UserType};

use crate::{directory::Directory, occupancy::Occupancy};

/// Identities allowed to keep the light as `USER3` without claiming again.
#[derive(Debug, Clone, Copy, Default)]
pub struct Continuity<'a> {
    /// `USER3` owner carried across a directory reload.
    pub retained_user3: Option<&'a str>,
    /// Currently committed owner.
    pub committed: Option<&'a str>,
}

impl Continuity<'_> {
    /// Whether `user_id` may win as `USER3`.
    pub fn allows(&self, user_id: &str) -> bool {
        self.retained_user3 == Some(user_id) || self.committed == Some(user_id)
    }
}

/// Resolve the winner, or `None` if nobody is entitled to the light.
pub fn resolve<'d>(
    directory: &'d Directory,
    occupancy: &Occupancy,
    continuity: Continuity<'_>,
) -> Option<&'d UserRecord> {
    let mut user2 = None;
    let mut user3 = None;

    // Records come in user id order, so the first match per tier wins ties.
    for record in directory.records() {
        if !occupancy.is_occupied(&record.sensor_id) {
            continue;
        }

        match record.user_type {
            UserType::User1 => return Some(record),
            UserType::User2 => {
                if user2.is_none() {
                    user2 = Some(record);
                }
            },
            UserType::User3 => {
                if user3.is_none() && continuity.allows(&record.user_id) {
                    user3 = Some(record);
                }
            },
        }
    }

    user2.or(user3)
}
