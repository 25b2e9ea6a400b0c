//! Plan catalog handlers.
//!
//! The catalog is read-mostly. Writes validate every catalog rule before
//! touching the repository. Deleting a plan that subscriptions reference is
//! allowed: subscriptions keep their own snapshot of the plan.

mod create_plan;
mod delete_plan;
mod get_plan;
mod list_plans;
mod update_plan;

// Commands
pub use create_plan::{CreatePlanCommand, CreatePlanHandler};
pub use delete_plan::{DeletePlanCommand, DeletePlanHandler};
pub use update_plan::{UpdatePlanCommand, UpdatePlanHandler};

// Queries
pub use get_plan::{GetPlanHandler, GetPlanQuery};
pub use list_plans::{ListPlansHandler, ListPlansQuery};
