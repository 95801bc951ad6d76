use dioxus::desktop::Config;
use dioxus::desktop::LogicalSize;
use dioxus::desktop::WindowBuilder;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");

    // Start wide so the first resize below 768px shows the layout switch.
    let window = WindowBuilder::new()
        .with_title("Breakpoint demo")
        .with_inner_size(LogicalSize::new(1024.0, 720.0));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(ui::App);
}
