pub mod output;
pub mod overrides;
