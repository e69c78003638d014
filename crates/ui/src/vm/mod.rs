mod planning_vm;

pub use planning_vm::{
    HostingVm, PlanningPageVm, QuestionGroupVm, QuestionVm, format_percent, map_planning_page,
};
