//! Member entity — the single canonical ledger record per registered
//! member.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Shift;

/// Canonical per-member ledger record.
///
/// Owned exclusively by the member ledger. Created by the registration
/// flow; `last_payment_date` and `shift` are updated only by the change
/// projector. Never deleted by this subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Ledger row id.
    pub id: Uuid,
    /// Registration number (natural key).
    pub registration: String,
    /// Full name.
    pub name: String,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub contact: Option<String>,
    pub alternate_contact: Option<String>,
    pub address: Option<String>,
    /// Government id number.
    pub aadhaar: Option<String>,
    /// Exam or goal the member is preparing for.
    pub preparing_for: Option<String>,
    /// Reference to the member's photo.
    pub image: Option<String>,
    /// Current shift assignment, maintained by the projector.
    pub shift: Option<Shift>,
    /// Cumulative balance due.
    pub due: f64,
    /// Cumulative advance credit.
    pub advance: f64,
    /// Date of the most recent fee payment, maintained by the projector.
    pub last_payment_date: Option<NaiveDate>,
}

impl Member {
    /// Minimal ledger row created when the projector observes a payment
    /// for a registration that has no member record yet.
    pub fn skeleton(registration: &str) -> Self {
        Member {
            id: Uuid::new_v4(),
            registration: registration.to_string(),
            name: String::new(),
            gender: None,
            date_of_birth: None,
            father_name: None,
            mother_name: None,
            contact: None,
            alternate_contact: None,
            address: None,
            aadhaar: None,
            preparing_for: None,
            image: None,
            shift: None,
            due: 0.0,
            advance: 0.0,
            last_payment_date: None,
        }
    }
}

/// Read-only projection of a member's identity fields, as served to the
/// admin "who is this" view. Excludes internal billing bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub registration: String,
    pub name: String,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub contact: Option<String>,
    pub alternate_contact: Option<String>,
    pub aadhaar: Option<String>,
    pub preparing_for: Option<String>,
    pub image: Option<String>,
}

impl From<&Member> for MemberProfile {
    fn from(member: &Member) -> Self {
        MemberProfile {
            registration: member.registration.clone(),
            name: member.name.clone(),
            gender: member.gender.clone(),
            date_of_birth: member.date_of_birth,
            father_name: member.father_name.clone(),
            mother_name: member.mother_name.clone(),
            contact: member.contact.clone(),
            alternate_contact: member.alternate_contact.clone(),
            aadhaar: member.aadhaar.clone(),
            preparing_for: member.preparing_for.clone(),
            image: member.image.clone(),
        }
    }
}
