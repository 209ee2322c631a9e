//! Value objects for Buddy domain primitives.
//!
//! [`PersonalId`] enforces its invariants at construction time. Its bare
//! predicate [`is_valid_personal_id`] is exported too, so the schema engine can
//! reuse the rule without building the value; emails are only ever checked
//! through [`is_valid_email`].
//!
//! ```rust
//! use buddy_api::resource::value_objects::PersonalId;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let id = PersonalId::new("0101302989")?;
//!     println!("Born: {}", id.birth_date());
//!     Ok(())
//! }
//! ```

mod email_address;
mod personal_id;

pub use email_address::is_valid_email;
pub use personal_id::{
    PERSONAL_ID_DIGITS, PERSONAL_ID_MESSAGE, PERSONAL_ID_RULE, PersonalId, PersonalIdKind,
    is_valid_personal_id,
};
