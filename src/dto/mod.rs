pub mod year_pair_row;
pub mod year_value_row;
