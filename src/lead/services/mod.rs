//! Orchestration services for lead management.

mod intake;
mod lifecycle;

pub use intake::{
    CreateInquiryRequest, LeadIntakeError, LeadIntakeResult, LeadIntakeService, ProductLineRequest,
};
pub use lifecycle::{
    FollowUpRequest, LeadLifecycleError, LeadLifecycleResult, LeadLifecycleService,
};
