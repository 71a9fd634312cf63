use anyhow::Result;
use winit::dpi::LogicalSize;

use scrawl_engine::device::GpuInit;
use scrawl_engine::logging::{init_logging, LoggingConfig};
use scrawl_engine::window::{Runtime, RuntimeConfig};

mod app;

use app::DrawApp;

const WINDOW_TITLE: &str = "scrawl";

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: WINDOW_TITLE.to_string(),
        initial_size: LogicalSize::new(800.0, 600.0),
    };

    // Runs until the window closes or Escape is pressed. Initialization
    // failures propagate out and terminate the process with a diagnostic.
    Runtime::run(config, GpuInit::default(), DrawApp::new(WINDOW_TITLE))
}
