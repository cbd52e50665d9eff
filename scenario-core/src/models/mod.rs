mod inputs;
mod scenario_kind;
mod scenario_result;

pub use inputs::{
    CurrentHomeInputs, DEFAULT_PERIOD_YEARS, InvestmentInputs, RenovateToLiveInputs,
    RenovateToRentInputs, ScenarioInputs,
};
pub use scenario_kind::{ScenarioKind, UnknownScenario};
pub use scenario_result::{ProjectionResults, ScenarioResult};
