mod app;
mod audio;
mod awake;
mod clock;
mod config;
mod countdown;
mod library;
mod presets;
mod runtime;
mod ticker;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
