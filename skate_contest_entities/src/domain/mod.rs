pub mod category;
pub mod heat;
pub mod heat_config;
pub mod participant;
pub mod scored_run;
