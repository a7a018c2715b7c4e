//! Domain model for lead management.
//!
//! The lead domain models inquiry capture, creation-time tagging,
//! follow-up history, and the one-way conversion flag while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod follow_up;
mod ids;
mod inquiry;
mod product_line;
mod status;
mod tagging;

pub use error::{
    LeadDomainError, ParseFollowUpKindError, ParseLeadPriorityError, ParseLeadStatusError,
};
pub use follow_up::{FollowUp, FollowUpKind};
pub use ids::{FollowUpId, InquiryId};
pub use inquiry::{Inquiry, NewInquiry, PersistedInquiryData};
pub use product_line::ProductLine;
pub use status::{LeadPriority, LeadStatus};
pub use tagging::{TagCondition, TagInput, TagRule, default_rules, derive_tags, derive_tags_with};
