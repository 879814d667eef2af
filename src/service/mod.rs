pub mod chart_job_service_impl;
pub mod chart_service_impl;
