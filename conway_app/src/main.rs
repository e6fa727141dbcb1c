// main.rs - Desktop shell for the Game of Life simulator

use conway::{SimulationConfig, SimulationController, TokioTicker};
use eframe::egui;
use egui::Color32;

mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = SimulationConfig::default();
    let runtime = tokio::runtime::Runtime::new()?;
    let controller =
        SimulationController::from_config(&config, TokioTicker::new(runtime.handle().clone()))?;
    log::info!(
        "starting {}x{} simulation, {:?} per generation",
        config.height,
        config.width,
        config.tick_interval
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(GameOfLife::new(controller, runtime))),
    )?;
    Ok(())
}

/// Window state around the simulation controller.
pub struct GameOfLife {
    pub controller: SimulationController<TokioTicker>,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    pub random_seed: u64,

    // Keeps the tick task's runtime alive for as long as the window is open
    _runtime: tokio::runtime::Runtime,
}

impl GameOfLife {
    pub fn new(
        controller: SimulationController<TokioTicker>,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        Self {
            controller,
            live_color: Color32::from_gray(20),
            dead_color: Color32::from_gray(240),
            selected_pattern: 0,
            random_seed: 0,
            _runtime: runtime,
        }
    }
}
