use macroquad::time::get_frame_time;
use macroquad::window::{clear_background, next_frame};
use macroquad::color::BLACK;

use physics::World;
use physics::scenarios::{Collision, Scenario};

mod shared;

struct GameState {
    scenario: Collision,
    world: World,
}

impl GameState {
    fn new() -> Self {
        let scenario = Collision {};
        let world = scenario.create();
        Self { scenario, world }
    }

    fn update(&mut self) {
        let _ = get_frame_time();
        self.world.step();
        self.scenario.update(&mut self.world);
    }

    fn render(&self) {
        use shared::draw::Draw;
        clear_background(BLACK);
        for (_, body) in self.world.bodies() {
            body.draw();
        }
    }
}

#[macroquad::main("collision")]
async fn main() {
    shared::setup();
    let mut state = GameState::new();

    loop {
        state.update();
        state.render();
        next_frame().await;
    }
}
