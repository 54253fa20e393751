pub mod dataset_kind;
pub mod frames;
pub mod records;
pub mod weather_condition;
