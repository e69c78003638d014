mod home;
mod planning;
mod state;

#[cfg(test)]
mod intent_smoke;
#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use planning::{PlanningForm, PlanningView};
pub use state::ViewError;
