pub mod category;
pub mod institution_selection;
