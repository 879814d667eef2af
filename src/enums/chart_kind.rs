#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    BarVertical,
    BarHorizontal,
    DualPanel,
    LogLogLine,
}

impl ChartKind {
    pub fn tag(&self) -> &'static str {
        match self {
            ChartKind::BarVertical => "bar-vertical",
            ChartKind::BarHorizontal => "bar-horizontal",
            ChartKind::DualPanel => "dual-panel",
            ChartKind::LogLogLine => "log-log-line",
        }
    }
}
