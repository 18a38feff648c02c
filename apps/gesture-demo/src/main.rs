mod scene;

use gestura_foundation::{PointerButton, PointerButtons};
use gestura_graphics::Point;
use scene::{Scene, Script};

fn main() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Gestura gesture replay ===");
    println!("page (0,0 800x600) > card (40,40 400x300) > button (60,60 120x40)");
    println!("The button forwards everything it sees to the card and the page.");
    println!("Run with RUST_LOG=debug or RUST_LOG=trace for classifier detail.");
    println!();

    let scene = Scene::new();

    scene.run("single tap on the button", Script::new().tap(Point::new(80.0, 70.0)));
    scene.run(
        "double tap on the button",
        Script::new()
            .tap(Point::new(80.0, 70.0))
            .pause(40)
            .tap(Point::new(82.0, 71.0)),
    );
    scene.run(
        "slow drag to the right",
        Script::new().drag(Point::new(70.0, 70.0), Point::new(170.0, 70.0), 12, 32),
    );
    scene.run(
        "flick upwards",
        Script::new().drag(Point::new(100.0, 90.0), Point::new(100.0, -110.0), 4, 12),
    );
    scene.run("press and hold", Script::new().hold(Point::new(90.0, 75.0), 700));
    scene.run(
        "secondary click",
        Script::new()
            .buttons(PointerButtons::NONE.with(PointerButton::Secondary))
            .tap(Point::new(90.0, 75.0)),
    );
}
