//! The desktop window.
//!
//! eframe owns the event loop; [`MergeApp`] turns widget clicks and
//! accelerators into [`Intent`](crate::controller::Intent)s and hands them to
//! the controller one at a time after each frame is drawn.

pub mod app;
pub mod dialogs;

pub use app::MergeApp;

use crate::config::Config;
use crate::controller::Controller;
use dialogs::{DialogPrompter, SystemViewer};

/// Window and application title.
pub const WINDOW_TITLE: &str = "PDF Merge";

/// Open the window and block until it is closed.
pub fn run(config: &Config) -> eframe::Result<()> {
    let controller = Controller::with_defaults(
        config,
        Box::new(DialogPrompter),
        Box::new(SystemViewer),
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([560.0, 540.0])
            .with_min_inner_size([420.0, 420.0]),
        ..Default::default()
    };

    tracing::info!(pattern = %config.pattern, "opening window");
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(MergeApp::new(controller)))),
    )
}
