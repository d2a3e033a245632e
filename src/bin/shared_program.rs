extern crate trigon;

use trigon::scene::Variant;

fn main() {
    trigon::application::launch(Variant::SharedProgram);
}
