pub mod results_view;
pub mod scenario_form;

pub use results_view::{
    CONSIDERATIONS, ChartDatum, PieSlice, Recommendation, ResultCard, chart_data, pie_slices,
    result_cards,
};
pub use scenario_form::{
    FieldKeyError, FieldUnit, FormField, ScenarioForm, update_field, update_scenario_field,
};
