use eframe::NativeOptions;
use folio::PortfolioApp;

#[tokio::main]
async fn main() -> eframe::Result {
    env_logger::init();
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Portfolio")
            .with_inner_size([1100.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "folio",
        options,
        Box::new(|cc| Ok(Box::new(PortfolioApp::new(cc)))),
    )
}
