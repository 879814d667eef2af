use crate::common::*;

use crate::model::configs::{output_config::*, render_config::*};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_chart_config);

#[doc = "Function to initialize chart pipeline configuration instances"]
pub fn initialize_chart_config() -> TotalConfig {
    info!("initialize_chart_config() START!");
    TotalConfig::new()
}

#[derive(Debug, Default, Deserialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct TotalConfig {
    pub output: OutputConfig,
    pub render: RenderConfig,
}

#[doc = "Output directory config"]
pub fn get_output_config_info() -> &'static OutputConfig {
    &TOTAL_CONFIG.output
}

#[doc = "Rendering config (dpi, font, padding)"]
pub fn get_render_config_info() -> &'static RenderConfig {
    &TOTAL_CONFIG.render
}

impl TotalConfig {
    fn new() -> Self {
        let Some(config_path) = CHART_CONFIG_PATH.as_deref() else {
            info!("CHART_CONFIG_PATH is not set. Using the built-in chart configuration.");
            return TotalConfig::default();
        };

        match read_toml_from_file::<TotalConfig>(config_path) {
            Ok(config) => config,
            Err(e) => {
                let err_msg = "Failed to convert the data from CHART_CONFIG_PATH into the TotalConfig structure.";
                error!("[TotalConfig->new] {} {:?}", err_msg, e);
                std::process::exit(1);
            }
        }
    }
}
