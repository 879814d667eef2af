pub mod output_config;
pub mod render_config;
pub mod total_config;
