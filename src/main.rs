/*
Description : Renders the order book / indicator benchmark results into the
              PNG charts used by the documentation (docs/images).

              The program takes no arguments and reads no input data; every
              benchmark value is compiled in. The only optional input is
              CHART_CONFIG_PATH, a TOML file overriding the output directory
              and render settings. Unset, the built-in defaults are used.

History     : first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod env_configuration;

mod traits;

mod dto;

mod enums;

mod model;
use model::configs::total_config::*;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{chart_job_service_impl::*, chart_service_impl::*};

mod controller;
use controller::main_controller::*;

fn main() {
    /* global logger and .env */
    dotenv().ok();
    let _logger_handle: LoggerHandle = set_global_logger();

    info!("Benchmark chart generation start!");

    /* dependency injection */
    let chart_service: ChartServiceImpl = ChartServiceImpl::new(get_render_config_info().clone());
    let job_service: BenchmarkChartJobServiceImpl = BenchmarkChartJobServiceImpl::new();

    let main_controller: MainController<ChartServiceImpl, BenchmarkChartJobServiceImpl> =
        MainController::new(
            chart_service,
            job_service,
            get_output_config_info().dir().clone(),
        );

    let stdout = std::io::stdout();
    let mut console = stdout.lock();

    main_controller.main_task(&mut console).unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });
}
