use polyring::algorithms::{least_vertex, left_to_right, right_to_left};
use polyring::data::{Point, Polygon};
use polyring::Error;
use tracing_subscriber::EnvFilter;

// Leftmost corner, then rightmost corner scanning from where the first scan
// left the cursor.
fn extremes(corners: Vec<Point<i32>>) -> Result<(Point<i32>, Point<i32>), Error> {
  let mut polygon = Polygon::from_points(corners)?;
  tracing::info!(size = polygon.size(), "built polygon");

  let min = least_vertex(&mut polygon, left_to_right);
  let min = *polygon.point(min);
  let max = least_vertex(&mut polygon, right_to_left);
  let max = *polygon.point(max);
  Ok((min, max))
}

fn main() -> Result<(), Error> {
  // Logs go to stderr. Default: WARN. Override with RUST_LOG (e.g. RUST_LOG=polyring=trace).
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .init();

  let (min, max) = extremes(vec![
    Point::new([-1, 3]),
    Point::new([4, 3]),
    Point::new([4, -3]),
    Point::new([-1, -3]),
  ])?;
  println!("{}", min);
  println!("{}", max);
  Ok(())
}
