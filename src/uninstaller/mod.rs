pub mod engine;
pub mod remover;
pub mod self_delete;
pub mod targets;

pub use engine::{run, Finish, Outcome, StepResult, StepStatus, UninstallReport};
pub use self_delete::remove_self;
pub use targets::{Condition, Target, TargetKind};
