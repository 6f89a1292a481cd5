mod least_vertex {
  use polyring::algorithms::*;
  use polyring::data::*;
  use polyring::*;

  use rand::SeedableRng;

  fn seeded_rectangle() -> Polygon<i32> {
    let (mut ring, start) = VertexRing::singleton(Point::new([-1, 3]));
    ring.insert(start, Point::new([4, 3]));
    ring.insert(start, Point::new([4, -3]));
    ring.insert(start, Point::new([-1, -3]));
    Polygon::new(ring, start)
  }

  #[test]
  fn rectangle() -> Result<(), Error> {
    let mut poly = Polygon::from_points(vec![
      Point::new([-1, 3]),
      Point::new([4, 3]),
      Point::new([4, -3]),
      Point::new([-1, -3]),
    ])?;
    let min = least_vertex(&mut poly, left_to_right);
    assert_eq!(poly.point(min).to_string(), "(-1, -3)");
    let max = least_vertex(&mut poly, right_to_left);
    assert_eq!(poly.point(max).to_string(), "(4, 3)");
    Ok(())
  }

  // Inserting every corner at the seed walks the ring in the opposite order,
  // which does not change either extreme.
  #[test]
  fn rectangle_inserted_at_seed() {
    let mut poly = seeded_rectangle();
    assert_eq!(poly.size(), 4);
    let min = leftmost_vertex(&mut poly);
    assert_eq!(poly.point(min), &Point::new([-1, -3]));
    let max = rightmost_vertex(&mut poly);
    assert_eq!(poly.point(max), &Point::new([4, 3]));
  }

  #[test]
  fn empty() {
    let pts: Vec<Point<i32>> = vec![];
    assert_eq!(Polygon::from_points(pts).err(), Some(Error::InsufficientVertices));
  }

  #[test]
  fn random_rings() -> Result<(), Error> {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(1);
    for n in 1..64 {
      let pts: Vec<Point<i16>> = (0..n).map(|_| rand::Rng::gen(&mut rng)).collect();
      let mut poly = Polygon::from_points(pts.clone())?;
      let min = leftmost_vertex(&mut poly);
      assert_eq!(Some(poly.point(min)), pts.iter().min());
      let max = rightmost_vertex(&mut poly);
      assert_eq!(Some(poly.point(max)), pts.iter().max());
      assert_eq!(poly.target(), max);
    }
    Ok(())
  }

  #[test]
  fn edit_then_scan() -> Result<(), Error> {
    let mut poly = Polygon::from_points(vec![Point::new([0, 0])])?;
    poly.insert(Point::new([3, 1]));
    poly.insert(Point::new([-2, 5]));
    poly.insert(Point::new([1, -4]));
    assert_eq!(poly.size(), 4);
    let min = leftmost_vertex(&mut poly);
    assert_eq!(poly.point(min), &Point::new([-2, 5]));
    assert_eq!(poly.remove()?, Point::new([-2, 5]));
    let min = leftmost_vertex(&mut poly);
    assert_eq!(poly.point(min), &Point::new([0, 0]));
    Ok(())
  }
}
