//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::plan::{
    CreatePlanCommand, CreatePlanHandler, DeletePlanCommand, DeletePlanHandler, GetPlanHandler,
    GetPlanQuery, ListPlansHandler, ListPlansQuery, UpdatePlanCommand, UpdatePlanHandler,
};
pub use handlers::subscription::{
    ChangeSubscriptionPlanCommand, ChangeSubscriptionPlanHandler, ChangeSubscriptionPlanResult,
    ChangeSubscriptionStatusCommand, ChangeSubscriptionStatusHandler,
    ChangeSubscriptionStatusResult, CreateSubscriptionCommand, CreateSubscriptionHandler,
    CreateSubscriptionResult, GetSubscriptionHandler, GetSubscriptionQuery, RecordPaymentCommand,
    RecordPaymentHandler, RecordPaymentResult,
};
pub use handlers::workbench::{
    GetWorkbenchSnapshotQuery, ObjectiveResolver, RevenueAggregator, SubscriptionSummarizer,
    WorkbenchAggregator, WorkbenchSettings,
};
