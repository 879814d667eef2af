use crate::common::*;

#[doc = r#"
    Path of the optional TOML file that overrides the chart pipeline settings.

    `CHART_CONFIG_PATH` is read once on first access. When it is not set the
    pipeline runs on the compiled-in defaults (`docs/images`, 300 DPI), so the
    program needs no input at all in the normal case.

    # Expected file content
    - `[output]` : output directory of the rendered images
    - `[render]` : dpi, font family, tight-bbox padding
"#]
pub static CHART_CONFIG_PATH: once_lazy<Option<String>> =
    once_lazy::new(|| env::var("CHART_CONFIG_PATH").ok());
