pub mod record;
pub mod thresholds;
pub mod view;
