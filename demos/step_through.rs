// Headless walk through the brute-force hull. Prints one line per candidate.
//
//   RUST_LOG=debug cargo run --example step_through
use hullstep::data::Point;
use hullstep::{Event, Step, StepDriver};
use rand::Rng;
use rand::SeedableRng;

fn main() {
  env_logger::init();

  let mut rng = rand::rngs::SmallRng::seed_from_u64(42);
  let mut driver = StepDriver::new();
  for _ in 0..8 {
    let pt = Point::new([rng.gen_range(0..800), rng.gen_range(0..600)]);
    driver.handle(Event::PointAdded(pt));
  }
  println!("{}", driver.frame().status());

  driver.handle(Event::AdvanceRequested);
  loop {
    let status = driver.frame().status();
    match driver.handle(Event::AdvanceRequested) {
      Step::Idle => break,
      Step::Accepted(edge) => {
        println!("{status}: {:?} -> {:?} hull edge", edge.a.array, edge.b.array)
      }
      Step::Rejected(edge) => println!("{status}: {:?} -> {:?}", edge.a.array, edge.b.array),
    }
  }

  let frame = driver.frame();
  println!("{}", frame.status());
  for pt in frame.hull_vertices {
    println!("  {:?}", pt.array);
  }
}
