pub mod chart_job_service;
pub mod chart_service;
